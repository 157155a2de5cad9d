use exprtree_error::Error as ExprError;
use std::fmt;

/// Utility enum to package errors that can occur while running a line.
#[derive(Debug)]
pub enum Error {
    /// An error compiling, evaluating, simplifying or differentiating an expression.
    Expr {
        /// The text of the expression, which the spans of the error point into.
        source: String,

        /// The error itself.
        err: ExprError,
    },

    /// The line starts with a command, but the rest of the line does not fit it.
    Usage(&'static str),
}

impl Error {
    /// Wraps an expression error together with the text of the expression.
    pub fn expr(source: &str, err: ExprError) -> Self {
        Self::Expr { source: source.to_string(), err }
    }

    /// Report the error to stderr.
    pub fn report_to_stderr(&self) {
        match self {
            Self::Expr { source, err } => {
                if err.report_to_stderr("input", source).is_err() {
                    // stderr itself failed, so fall back to the plain message
                    eprintln!("error: {}", err);
                }
            },
            Self::Usage(usage) => eprintln!("usage: {}", usage),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expr { err, .. } => write!(f, "{}", err),
            Self::Usage(usage) => write!(f, "usage: {}", usage),
        }
    }
}
