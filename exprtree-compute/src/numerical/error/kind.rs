use ariadne::Fmt;
use exprtree_attrs::ErrorKind;
use exprtree_error::EXPR;
use exprtree_parser::parser::ast::Func;
use std::fmt;

/// The reason an expression could not be evaluated.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainCause {
    /// A variable of the expression was not given a value.
    UnboundVariable {
        /// The name of the variable.
        name: String,
    },

    /// A function was applied to an argument outside of its domain.
    OutsideDomain {
        /// The function that was applied.
        func: Func,

        /// The argument the function was applied to.
        arg: f64,

        /// A description of the arguments the function accepts.
        domain: &'static str,
    },
}

impl fmt::Display for DomainCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainCause::UnboundVariable { name } => write!(f, "`{}` has no value", name),
            DomainCause::OutsideDomain { func, arg, .. } => {
                write!(f, "`{}` is not defined for the argument {}", func, arg)
            },
        }
    }
}

/// Evaluation failed, either because a variable was unbound or because a function was applied
/// outside of its domain.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot evaluate expression: {}", cause),
    labels = ["while evaluating this expression"],
    help = match cause {
        DomainCause::UnboundVariable { name } => {
            format!("bind a value to it, for example: {} = {}", name.as_str().fg(EXPR), "<value>".fg(EXPR))
        },
        DomainCause::OutsideDomain { func, domain, .. } => {
            format!("`{}` is only defined for {}", func, domain)
        },
    },
)]
pub struct DomainEvaluationError {
    /// Why the evaluation failed.
    pub cause: DomainCause,
}
