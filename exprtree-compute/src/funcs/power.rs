//! Roots, exponentials and logarithms.

use exprtree_parser::parser::ast::Func;
use crate::numerical::error::Error;
use super::helper::{build_unchecked, check_domain};

build_unchecked! {
    /// Returns `e` raised to the given power.
    Exp; f64::exp,
}

/// Returns the square root. Defined for non-negative arguments.
#[derive(Debug)]
pub struct Sqrt;

impl Sqrt {
    pub fn eval_static(n: f64) -> Result<f64, Error> {
        check_domain(Func::Sqrt, n, n >= 0.0, "arguments greater than or equal to zero")?;
        Ok(n.sqrt())
    }
}

/// Returns the natural logarithm. Defined for positive arguments.
#[derive(Debug)]
pub struct Ln;

impl Ln {
    pub fn eval_static(n: f64) -> Result<f64, Error> {
        check_domain(Func::Ln, n, n > 0.0, "positive arguments")?;
        Ok(n.ln())
    }
}

/// Returns the base-10 logarithm. Defined for positive arguments.
#[derive(Debug)]
pub struct Log10;

impl Log10 {
    pub fn eval_static(n: f64) -> Result<f64, Error> {
        check_domain(Func::Log10, n, n > 0.0, "positive arguments")?;
        Ok(n.log10())
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
    use crate::numerical::error::kind::{DomainCause, DomainEvaluationError};
    use super::*;

    #[test]
    fn sqrt() {
        assert_float_relative_eq!(Sqrt::eval_static(16.0).unwrap(), 4.0);
        assert_eq!(Sqrt::eval_static(0.0).unwrap(), 0.0);

        let err = Sqrt::eval_static(-1.0).unwrap_err();
        let kind = err.downcast_ref::<DomainEvaluationError>().unwrap();
        assert!(matches!(kind.cause, DomainCause::OutsideDomain { func: Func::Sqrt, .. }));
    }

    #[test]
    fn logarithms() {
        assert_float_relative_eq!(Ln::eval_static(std::f64::consts::E).unwrap(), 1.0);
        assert_float_relative_eq!(Log10::eval_static(1000.0).unwrap(), 3.0);
        assert!(Ln::eval_static(0.0).unwrap_err().is::<DomainEvaluationError>());
        assert!(Log10::eval_static(-10.0).unwrap_err().is::<DomainEvaluationError>());
    }

    #[test]
    fn nan_propagates() {
        assert!(Sqrt::eval_static(f64::NAN).unwrap().is_nan());
        assert!(Ln::eval_static(f64::NAN).unwrap().is_nan());
    }

    #[test]
    fn exp() {
        assert_eq!(Exp::eval_static(0.0), 1.0);
        assert_float_relative_eq!(Exp::eval_static(1.0), std::f64::consts::E);
    }
}
