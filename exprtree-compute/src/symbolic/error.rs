use ariadne::Fmt;
use exprtree_attrs::ErrorKind;
use exprtree_error::EXPR;

/// The expression contains an operator or function that has no differentiation rule.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot differentiate the `{}` operator", symbol),
    labels = ["this expression"],
    help = format!(
        "only expressions built from {} and the built-in functions can be differentiated",
        "+ - * / ^".fg(EXPR),
    ),
)]
pub struct UnsupportedDerivative {
    /// The operator or function that has no rule.
    pub symbol: String,
}
