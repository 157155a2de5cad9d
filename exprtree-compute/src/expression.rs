use exprtree_parser::parser::{ast::Node, fmt::Latex, Parser};
use log::debug;
use std::{collections::BTreeSet, fmt, str::FromStr};
use crate::numerical::{ctxt::Bindings, error::Error, eval::Eval};
use crate::symbolic::{derivative, simplified};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A compiled expression.
///
/// The expression owns its tree. It can be evaluated any number of times against different
/// bindings, simplified in place, or differentiated into a new, independent expression.
///
/// # Example
///
/// ```
/// use exprtree_compute::{Bindings, Expression};
///
/// let expr = Expression::compile_with("sqrt(x^2 + y^2)", ["x", "y"]).unwrap();
/// let value = expr.evaluate(&Bindings::from([("x", 3.0), ("y", 4.0)])).unwrap();
/// assert_eq!(value, 5.0);
///
/// let derivative = expr.derivative("x").unwrap();
/// assert_eq!(derivative.to_string(), "((0.5/sqrt(((x^2.0)+(y^2.0))))*(2.0*x))");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Expression {
    /// The root of the expression tree.
    root: Node,
}

impl Expression {
    /// Compiles an expression that references no variables.
    pub fn compile(source: &str) -> Result<Self, Error> {
        Self::compile_with(source, std::iter::empty::<&str>())
    }

    /// Compiles an expression that may reference the given variables. Variable names are
    /// case-insensitive.
    pub fn compile_with<I, S>(source: &str, variables: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let root = Parser::new(source).with_variables(variables).try_parse()?;
        Ok(Self { root })
    }

    /// Returns the root of the expression tree.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Evaluates the expression with the given values for its variables.
    pub fn evaluate(&self, bindings: &Bindings) -> Result<f64, Error> {
        self.root.eval(bindings)
    }

    /// Folds every constant subexpression into a single constant.
    ///
    /// If folding fails, for example because a constant subexpression is `ln(0)`, the error is
    /// returned and the expression is left unchanged.
    pub fn simplify(&mut self) -> Result<(), Error> {
        self.root = simplified(&self.root)?;
        debug!("simplified: {}", self.root);
        Ok(())
    }

    /// Computes the derivative of the expression with respect to the given variable. The result
    /// is a new expression that shares nothing with this one.
    pub fn derivative(&self, var: &str) -> Result<Expression, Error> {
        let var = var.to_lowercase();
        let root = derivative(&self.root, &var)?;
        debug!("d/d{} {} = {}", var, self.root, root);
        Ok(Self { root })
    }

    /// Returns the variables the expression depends on, in sorted order.
    pub fn variables(&self) -> Vec<&str> {
        self.root
            .free_vars()
            .into_iter()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

impl From<Node> for Expression {
    fn from(root: Node) -> Self {
        Self { root }
    }
}

impl FromStr for Expression {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::compile(s)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.root, f)
    }
}

impl Latex for Expression {
    fn fmt_latex(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.root.fmt_latex(f)
    }
}
