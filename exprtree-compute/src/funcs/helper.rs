use exprtree_parser::parser::ast::Func;
use crate::numerical::error::{kind::{DomainCause, DomainEvaluationError}, Error};

/// Build functions that are defined for every real argument, delegating to the given closure or
/// method.
macro_rules! build_unchecked {
    ($($(#[$meta:meta])* $upname:ident; $func:expr),* $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug)]
            pub struct $upname;

            impl $upname {
                pub fn eval_static(n: f64) -> f64 {
                    // NOTE: the closure call is contained within the macro, so we allow
                    // the clippy::redundant_closure_call lint
                    #[allow(clippy::redundant_closure_call)]
                    ($func)(n)
                }
            }
        )*
    };
}

pub(crate) use build_unchecked;

/// Fails with [`DomainEvaluationError`] if the argument is outside the domain of the function.
/// `NaN` is never rejected, and is left to propagate through the function.
pub(crate) fn check_domain(
    func: Func,
    arg: f64,
    in_domain: bool,
    domain: &'static str,
) -> Result<(), Error> {
    if in_domain || arg.is_nan() {
        Ok(())
    } else {
        Err(Error::spanless(DomainEvaluationError {
            cause: DomainCause::OutsideDomain { func, arg, domain },
        }))
    }
}
