use std::fmt::{Display, Formatter, Result};
use super::ast::{Binary, BinOpKind, Call, Func, Node};

/// Formats a constant so that it re-parses to the same value.
///
/// Integral values keep a trailing `.0` (`14.0`), exponent notation is never used, and negative
/// values are wrapped in parentheses (`(-8.0)`), since a leading `-` inside a larger expression
/// would otherwise be read as a binary operator. Non-finite values have no literal, so they are
/// written as the division that produces them: `(1.0/0.0)`, `(0.0-(1.0/0.0))` and `(0.0/0.0)`.
pub fn fmt_constant(f: &mut Formatter, value: f64) -> Result {
    if value.is_nan() {
        return write!(f, "(0.0/0.0)");
    } else if value == f64::INFINITY {
        return write!(f, "(1.0/0.0)");
    } else if value == f64::NEG_INFINITY {
        return write!(f, "(0.0-(1.0/0.0))");
    }

    let mut digits = value.abs().to_string();
    if !digits.contains('.') {
        digits.push_str(".0");
    }

    if value.is_sign_negative() && value != 0.0 {
        write!(f, "(-{})", digits)
    } else {
        write!(f, "{}", digits)
    }
}

/// A trait for types that can be formatted as LaTeX.
pub trait Latex {
    /// Format the value as LaTeX.
    fn fmt_latex(&self, f: &mut Formatter) -> Result;

    /// Wraps the value in a [`LatexFormatter`], which implements [`Display`].
    fn as_display(&self) -> LatexFormatter<'_, Self> {
        LatexFormatter(self)
    }
}

/// A wrapper type that implements [`Display`] for any type that implements [`Latex`].
pub struct LatexFormatter<'a, T: ?Sized>(&'a T);

impl<T: ?Sized> Display for LatexFormatter<'_, T>
where
    T: Latex,
{
    fn fmt(&self, f: &mut Formatter) -> Result {
        self.0.fmt_latex(f)
    }
}

/// Formats the operand of a binary operator, wrapping it in parentheses if it binds more loosely
/// than the operator. The right operand of a non-commutative operator is also wrapped when it
/// binds equally tightly, so that `a - (b - c)` does not read as `a - b - c`.
fn fmt_operand(f: &mut Formatter, parent: BinOpKind, operand: &Node, right: bool) -> Result {
    let needs_paren = match operand {
        Node::Binary(inner) => {
            let (inner_tier, parent_tier) = (inner.op.tier(), parent.tier());
            inner_tier < parent_tier
                || (inner_tier == parent_tier && (right || parent == BinOpKind::Exp)
                    && !matches!(parent, BinOpKind::Add | BinOpKind::Mul))
        },
        Node::Constant(value) => *value < 0.0,
        _ => false,
    };

    if needs_paren {
        write!(f, "\\left(")?;
        operand.fmt_latex(f)?;
        write!(f, "\\right)")
    } else {
        operand.fmt_latex(f)
    }
}

/// Helper to format powers.
fn fmt_pow(f: &mut Formatter, binary: &Binary) -> Result {
    match &*binary.lhs {
        Node::Variable(_) => binary.lhs.fmt_latex(f)?,
        Node::Constant(value) if *value >= 0.0 => binary.lhs.fmt_latex(f)?,
        lhs => {
            write!(f, "\\left(")?;
            lhs.fmt_latex(f)?;
            write!(f, "\\right)")?;
        },
    }
    write!(f, "^{{")?;
    binary.rhs.fmt_latex(f)?;
    write!(f, "}}")
}

impl Latex for Binary {
    fn fmt_latex(&self, f: &mut Formatter) -> Result {
        match self.op {
            BinOpKind::Div => {
                write!(f, "\\frac{{")?;
                self.lhs.fmt_latex(f)?;
                write!(f, "}}{{")?;
                self.rhs.fmt_latex(f)?;
                write!(f, "}}")
            },
            BinOpKind::Exp => fmt_pow(f, self),
            op => {
                fmt_operand(f, op, &self.lhs, false)?;
                match op {
                    BinOpKind::Add => write!(f, " + ")?,
                    BinOpKind::Sub => write!(f, " - ")?,
                    BinOpKind::Mul => write!(f, " \\cdot ")?,
                    _ => write!(f, " \\bmod ")?,
                }
                fmt_operand(f, op, &self.rhs, true)
            },
        }
    }
}

impl Latex for Call {
    fn fmt_latex(&self, f: &mut Formatter) -> Result {
        let (open, close) = match self.func {
            Func::Sqrt => ("\\sqrt{", "}"),
            Func::Abs => ("\\left|", "\\right|"),
            Func::Exp => ("e^{", "}"),
            func => {
                match func {
                    Func::Ln => write!(f, "\\ln")?,
                    Func::Log10 => write!(f, "\\log_{{10}}")?,
                    Func::Sign => write!(f, "\\operatorname{{sign}}")?,
                    Func::Asin => write!(f, "\\arcsin")?,
                    Func::Acos => write!(f, "\\arccos")?,
                    Func::Atan => write!(f, "\\arctan")?,
                    func => write!(f, "\\{}", func.name())?,
                }
                ("\\left(", "\\right)")
            },
        };

        write!(f, "{}", open)?;
        self.arg.fmt_latex(f)?;
        write!(f, "{}", close)
    }
}

impl Latex for Node {
    fn fmt_latex(&self, f: &mut Formatter) -> Result {
        match self {
            Node::Constant(value) if *value == std::f64::consts::PI => write!(f, "\\pi"),
            Node::Constant(value) => write!(f, "{}", value),
            Node::Variable(name) => write!(f, "{}", name),
            Node::Binary(binary) => binary.fmt_latex(f),
            Node::Call(call) => call.fmt_latex(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn x() -> Node {
        Node::variable("x")
    }

    #[test]
    fn constants() {
        assert_eq!(Node::Constant(14.0).to_string(), "14.0");
        assert_eq!(Node::Constant(0.2).to_string(), "0.2");
        assert_eq!(Node::Constant(1e20).to_string(), "100000000000000000000.0");
        assert_eq!(Node::Constant(1e-7).to_string(), "0.0000001");
        assert_eq!(Node::Constant(-3.5).to_string(), "(-3.5)");
        assert_eq!(Node::Constant(-0.0).to_string(), "0.0");
        assert_eq!(Node::Constant(f64::INFINITY).to_string(), "(1.0/0.0)");
        assert_eq!(Node::Constant(f64::NEG_INFINITY).to_string(), "(0.0-(1.0/0.0))");
        assert_eq!(Node::Constant(f64::NAN).to_string(), "(0.0/0.0)");
    }

    #[test]
    fn latex_fraction_and_power() {
        let node = Node::binary(
            BinOpKind::Div,
            Node::binary(BinOpKind::Exp, x(), Node::Constant(2.0)),
            Node::call(Func::Sqrt, Node::binary(BinOpKind::Add, x(), Node::Constant(1.0))),
        );
        assert_eq!(node.as_display().to_string(), "\\frac{x^{2}}{\\sqrt{x + 1}}");
    }

    #[test]
    fn latex_parenthesizes_looser_operands() {
        // (x + 1) * x
        let node = Node::binary(
            BinOpKind::Mul,
            Node::binary(BinOpKind::Add, x(), Node::Constant(1.0)),
            x(),
        );
        assert_eq!(node.as_display().to_string(), "\\left(x + 1\\right) \\cdot x");

        // x - (x - 1)
        let node = Node::binary(
            BinOpKind::Sub,
            x(),
            Node::binary(BinOpKind::Sub, x(), Node::Constant(1.0)),
        );
        assert_eq!(node.as_display().to_string(), "x - \\left(x - 1\\right)");
    }

    #[test]
    fn latex_functions() {
        let node = Node::binary(
            BinOpKind::Add,
            Node::call(Func::Sin, x()),
            Node::call(Func::Abs, Node::call(Func::Ln, x())),
        );
        assert_eq!(node.as_display().to_string(), "\\sin\\left(x\\right) + \\left|\\ln\\left(x\\right)\\right|");
        assert_eq!(Node::Constant(std::f64::consts::PI).as_display().to_string(), "\\pi");
    }
}
