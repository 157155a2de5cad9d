//! The abstract syntax tree produced by the parser.
//!
//! An expression is a tree of [`Node`]s. Each node owns its children, so the tree never shares
//! nodes and never contains cycles. The arity of every node kind is fixed by its type: constants
//! and variables are leaves, a [`Call`] owns exactly one argument, and a [`Binary`] owns exactly
//! two operands.

pub mod binary;
pub mod call;

pub use binary::{Binary, BinOpKind, Tier};
pub use call::{Call, Func};

use std::{collections::HashSet, fmt};
use super::fmt::fmt_constant;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A node in the expression tree.
///
/// Equality is structural. Constants compare by their bit pattern, so a tree holding `NaN` is
/// equal to itself, while `0.0` and `-0.0` are distinct.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Node {
    /// A numeric value, such as `2.5`, or a named constant, such as `pi`, that has already been
    /// resolved to its value.
    Constant(f64),

    /// A variable, such as `x`. Its value is supplied when the expression is evaluated.
    Variable(String),

    /// A binary operation, such as `x + 1`.
    Binary(Binary),

    /// A function call, such as `sin(x)`.
    Call(Call),
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Node::Constant(a), Node::Constant(b)) => a.to_bits() == b.to_bits(),
            (Node::Variable(a), Node::Variable(b)) => a == b,
            (Node::Binary(a), Node::Binary(b)) => a == b,
            (Node::Call(a), Node::Call(b)) => a == b,
            _ => false,
        }
    }
}

impl Node {
    /// The zero constant, used for empty operands and for derivatives of expressions that do not
    /// depend on the variable.
    pub const ZERO: Node = Node::Constant(0.0);

    /// The unit constant.
    pub const ONE: Node = Node::Constant(1.0);

    /// Creates a binary node.
    pub fn binary(op: BinOpKind, lhs: Node, rhs: Node) -> Self {
        Node::Binary(Binary::new(op, lhs, rhs))
    }

    /// Creates a call node.
    pub fn call(func: Func, arg: Node) -> Self {
        Node::Call(Call::new(func, arg))
    }

    /// Creates a variable node.
    pub fn variable(name: impl Into<String>) -> Self {
        Node::Variable(name.into())
    }

    /// Returns the value of the node if it is a constant.
    pub fn as_constant(&self) -> Option<f64> {
        match self {
            Node::Constant(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns true if the node is exactly the constant `value`.
    pub fn is_constant_value(&self, value: f64) -> bool {
        self.as_constant() == Some(value)
    }

    /// Returns the set of variables this node depends on.
    pub fn free_vars(&self) -> HashSet<&str> {
        let mut vars = HashSet::new();
        self.collect_vars(&mut vars);
        vars
    }

    fn collect_vars<'a>(&'a self, vars: &mut HashSet<&'a str>) {
        match self {
            Node::Constant(_) => {},
            Node::Variable(name) => {
                vars.insert(name.as_str());
            },
            Node::Binary(binary) => {
                binary.lhs.collect_vars(vars);
                binary.rhs.collect_vars(vars);
            },
            Node::Call(call) => call.arg.collect_vars(vars),
        }
    }

    /// Returns true if the given variable is in the free-variable set of this node.
    pub fn depends_on(&self, var: &str) -> bool {
        match self {
            Node::Constant(_) => false,
            Node::Variable(name) => name == var,
            Node::Binary(binary) => binary.lhs.depends_on(var) || binary.rhs.depends_on(var),
            Node::Call(call) => call.arg.depends_on(var),
        }
    }

    /// Returns true if the node has no free variables.
    pub fn is_closed(&self) -> bool {
        match self {
            Node::Constant(_) => true,
            Node::Variable(_) => false,
            Node::Binary(binary) => binary.lhs.is_closed() && binary.rhs.is_closed(),
            Node::Call(call) => call.arg.is_closed(),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Constant(value) => fmt_constant(f, *value),
            Node::Variable(name) => f.write_str(name),
            Node::Binary(binary) => fmt::Display::fmt(binary, f),
            Node::Call(call) => fmt::Display::fmt(call, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn sample() -> Node {
        // sin(x) * (y + 2)
        Node::binary(
            BinOpKind::Mul,
            Node::call(Func::Sin, Node::variable("x")),
            Node::binary(BinOpKind::Add, Node::variable("y"), Node::Constant(2.0)),
        )
    }

    #[test]
    fn free_vars() {
        let node = sample();
        assert_eq!(node.free_vars(), HashSet::from(["x", "y"]));
        assert!(node.depends_on("x"));
        assert!(!node.depends_on("z"));
        assert!(!node.is_closed());
        assert!(Node::call(Func::Exp, Node::Constant(1.0)).is_closed());
        assert!(Node::ZERO.free_vars().is_empty());
    }

    #[test]
    fn display() {
        assert_eq!(sample().to_string(), "(sin(x)*(y+2.0))");
        assert_eq!(Node::Constant(-8.0).to_string(), "(-8.0)");
        assert_eq!(Node::Constant(0.25).to_string(), "0.25");
    }

    #[test]
    fn nan_constants_are_structurally_equal() {
        let node = Node::binary(BinOpKind::Div, Node::variable("x"), Node::Constant(f64::NAN));
        assert_eq!(node, node.clone());
        assert_ne!(Node::Constant(0.0), Node::Constant(-0.0));
        assert_ne!(Node::Constant(1.0), Node::variable("x"));
    }
}
