use std::fmt;
use super::Node;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The coarse precedence class of a binary operator. Lower tiers bind more loosely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Tier {
    /// `+` and `-`.
    Low = 1,

    /// `*`, `/` and `%`.
    Medium = 2,

    /// `^`.
    High = 3,
}

impl Tier {
    /// Returns the numeric value of the tier, used to compute token priorities.
    pub fn value(self) -> u32 {
        self as u32
    }
}

/// The binary operation that is being performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinOpKind {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Exp,
}

impl BinOpKind {
    /// Every registered operator.
    pub const ALL: [BinOpKind; 6] = [
        BinOpKind::Add,
        BinOpKind::Sub,
        BinOpKind::Mul,
        BinOpKind::Div,
        BinOpKind::Mod,
        BinOpKind::Exp,
    ];

    /// Looks up the operator with the given symbol in the operator registry.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    /// Returns the symbol of the operator.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Exp => "^",
        }
    }

    /// Returns the precedence tier of the operator.
    pub fn tier(self) -> Tier {
        match self {
            Self::Add | Self::Sub => Tier::Low,
            Self::Mul | Self::Div | Self::Mod => Tier::Medium,
            Self::Exp => Tier::High,
        }
    }

    /// Applies the operator to the given operands.
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
            Self::Mod => left % right,
            Self::Exp => left.powf(right),
        }
    }
}

impl fmt::Display for BinOpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A binary expression, such as `1 + 2`. Both operands are owned by the node.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Binary {
    /// The left-hand side of the binary expression.
    pub lhs: Box<Node>,

    /// The operator of the binary expression.
    pub op: BinOpKind,

    /// The right-hand side of the binary expression.
    pub rhs: Box<Node>,
}

impl Binary {
    /// Creates a binary expression from its operator and operands.
    pub fn new(op: BinOpKind, lhs: Node, rhs: Node) -> Self {
        Self {
            lhs: Box::new(lhs),
            op,
            rhs: Box::new(rhs),
        }
    }
}

impl fmt::Display for Binary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}{}{})", self.lhs, self.op, self.rhs)
    }
}
