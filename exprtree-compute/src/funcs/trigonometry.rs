//! General trigonometric and hyperbolic trigonometric functions. Angles are in radians.

use exprtree_parser::parser::ast::Func;
use crate::numerical::error::Error;
use super::helper::{build_unchecked, check_domain};

build_unchecked! {
    Sin; f64::sin,
    Cos; f64::cos,
    Tan; f64::tan,
    Cot; |n: f64| n.tan().recip(),
    Atan; f64::atan,
}

build_unchecked! {
    Sinh; f64::sinh,
    Cosh; f64::cosh,
    Tanh; f64::tanh,
}

/// Returns the inverse sine. Defined for arguments in `[-1, 1]`.
#[derive(Debug)]
pub struct Asin;

impl Asin {
    pub fn eval_static(n: f64) -> Result<f64, Error> {
        check_domain(Func::Asin, n, (-1.0..=1.0).contains(&n), "arguments between -1 and 1")?;
        Ok(n.asin())
    }
}

/// Returns the inverse cosine. Defined for arguments in `[-1, 1]`.
#[derive(Debug)]
pub struct Acos;

impl Acos {
    pub fn eval_static(n: f64) -> Result<f64, Error> {
        check_domain(Func::Acos, n, (-1.0..=1.0).contains(&n), "arguments between -1 and 1")?;
        Ok(n.acos())
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::{
        afe_abs,
        afe_relative_error_msg,
        afe_is_relative_eq,
        assert_float_relative_eq,
    };
    use crate::numerical::error::kind::DomainEvaluationError;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};
    use super::*;

    #[test]
    fn cot_of_zero_is_infinite() {
        assert!(Cot::eval_static(0.0).is_infinite());
        assert_float_relative_eq!(Cot::eval_static(FRAC_PI_4), 1.0);
    }

    #[test]
    fn inverse_functions() {
        assert_float_relative_eq!(Asin::eval_static(1.0).unwrap(), FRAC_PI_2);
        assert_float_relative_eq!(Acos::eval_static(0.0).unwrap(), FRAC_PI_2);
        assert_float_relative_eq!(Atan::eval_static(1.0), FRAC_PI_4);
        assert!(Asin::eval_static(1.5).unwrap_err().is::<DomainEvaluationError>());
        assert!(Acos::eval_static(-1.0001).unwrap_err().is::<DomainEvaluationError>());
    }

    #[test]
    fn hyperbolic() {
        assert_eq!(Sinh::eval_static(0.0), 0.0);
        assert_eq!(Cosh::eval_static(0.0), 1.0);
        assert_float_relative_eq!(Tanh::eval_static(1.0), 1.0f64.sinh() / 1.0f64.cosh());
    }
}
