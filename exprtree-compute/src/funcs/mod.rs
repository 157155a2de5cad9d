//! All built-in functions that can be numerically evaluated.
//!
//! Each function is implemented as a unit `struct` with an associated `eval_static` method, which
//! can be used to evaluate the function directly from Rust code. Functions with a restricted
//! domain return a [`Result`] and fail with
//! [`DomainEvaluationError`](crate::numerical::error::kind::DomainEvaluationError) outside of it;
//! every other function follows IEEE-754 semantics.
//!
//! # Example
//!
//! ```
//! use exprtree_compute::funcs::{self, trigonometry::Sin};
//! use exprtree_parser::parser::ast::Func;
//!
//! let result = Sin::eval_static(std::f64::consts::FRAC_PI_2);
//! assert_eq!(result, 1.0);
//!
//! // or dispatch on a parsed function
//! assert_eq!(funcs::eval(Func::Sin, std::f64::consts::FRAC_PI_2).unwrap(), 1.0);
//! ```

mod helper;
pub mod miscellaneous;
pub mod power;
pub mod trigonometry;

use exprtree_parser::parser::ast::Func;
use crate::numerical::error::Error;

/// Evaluates the given function at the given argument.
pub fn eval(func: Func, n: f64) -> Result<f64, Error> {
    use miscellaneous::*;
    use power::*;
    use trigonometry::*;

    Ok(match func {
        Func::Sqrt => Sqrt::eval_static(n)?,
        Func::Exp => Exp::eval_static(n),
        Func::Ln => Ln::eval_static(n)?,
        Func::Log10 => Log10::eval_static(n)?,
        Func::Sign => Sign::eval_static(n),
        Func::Abs => Abs::eval_static(n),
        Func::Sin => Sin::eval_static(n),
        Func::Cos => Cos::eval_static(n),
        Func::Tan => Tan::eval_static(n),
        Func::Cot => Cot::eval_static(n),
        Func::Asin => Asin::eval_static(n)?,
        Func::Acos => Acos::eval_static(n)?,
        Func::Atan => Atan::eval_static(n),
        Func::Sinh => Sinh::eval_static(n),
        Func::Cosh => Cosh::eval_static(n),
        Func::Tanh => Tanh::eval_static(n),
    })
}
