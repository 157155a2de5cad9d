use ariadne::Fmt;
use exprtree_attrs::ErrorKind;
use exprtree_error::EXPR;
use std::fmt;

/// The expression contained nothing but whitespace.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "cannot compile an empty expression",
    labels = [format!("add an {} here", "expression".fg(EXPR))],
)]
pub struct EmptyInput;

/// A closing parenthesis was found without a matching opening parenthesis.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected closing parenthesis",
    labels = ["this parenthesis has no matching `(`"],
    help = "remove it, or add an opening parenthesis `(` somewhere before it",
)]
pub struct UnbalancedBracketExtra;

/// The expression ended while one or more parentheses were still open.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = if *unclosed == 1 {
        "unclosed parenthesis".to_string()
    } else {
        format!("{} unclosed parentheses", unclosed)
    },
    labels = std::iter::repeat("this parenthesis is not closed").take(*unclosed),
    help = "add a closing parenthesis `)` somewhere after this",
)]
pub struct UnbalancedBracketMissing {
    /// The number of parentheses that were left open.
    pub unclosed: usize,
}

/// A token did not match any operator, function, constant, variable, or numeric literal.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown token `{}`", token),
    labels = ["this token"],
    help = if suggestions.is_empty() {
        format!(
            "pass `{}` as a variable name when compiling, if it is meant to be a variable",
            token.as_str().fg(EXPR),
        )
    } else if suggestions.len() == 1 {
        format!("did you mean `{}`?", suggestions[0].as_str().fg(EXPR))
    } else {
        format!(
            "did you mean one of these? {}",
            suggestions
                .iter()
                .map(|s| format!("`{}`", s.as_str().fg(EXPR)))
                .collect::<Vec<_>>()
                .join(", ")
        )
    },
)]
pub struct UnknownToken {
    /// The normalized text of the token.
    pub token: String,

    /// Registered names that are spelled similarly to the token.
    pub suggestions: Vec<String>,
}

/// The number of operands a node kind takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Constants, variables and numeric literals take no operands.
    Leaf,

    /// Functions take a single argument, written to their right.
    Unary,

    /// Operators take an operand on each side.
    Binary,

    /// Parentheses only group; they can never be an operand themselves.
    Group,
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Leaf => write!(f, "takes no operands"),
            Arity::Unary => write!(f, "takes exactly one argument to its right"),
            Arity::Binary => write!(f, "needs an operand to its right"),
            Arity::Group => write!(f, "must enclose an expression joined to its neighbors by an operator"),
        }
    }
}

/// The operands found around a token do not fit the number of operands it takes.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("wrong number of operands for `{}`", symbol),
    labels = [format!("`{}` {}", symbol, expected)],
    help = match expected {
        Arity::Leaf | Arity::Group => format!("join neighboring terms with an {}", "operator".fg(EXPR)),
        Arity::Unary => format!("write function calls as `{}`", "name(argument)".fg(EXPR)),
        Arity::Binary => format!("add an {} after the operator", "expression".fg(EXPR)),
    },
)]
pub struct MalformedArity {
    /// The text of the token whose operands are malformed.
    pub symbol: String,

    /// The number of operands the token takes.
    pub expected: Arity,
}
