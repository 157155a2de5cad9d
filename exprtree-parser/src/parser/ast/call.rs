use once_cell::sync::Lazy;
use std::{collections::HashMap, fmt};
use super::Node;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A registered univariate function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Func {
    Sqrt,
    Exp,
    Ln,
    Log10,
    Sign,
    Abs,
    Sin,
    Cos,
    Tan,
    Cot,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
}

/// The function registry: every accepted spelling mapped to its function.
static FUNCTIONS: Lazy<HashMap<&'static str, Func>> = Lazy::new(|| {
    let canonical = Func::ALL.into_iter().map(|func| (func.name(), func));

    // spellings accepted for compatibility with older expression sources
    let aliases = [
        ("log", Func::Log10),
        ("tg", Func::Tan),
        ("ctg", Func::Cot),
        ("arcsin", Func::Asin),
        ("arccos", Func::Acos),
        ("arctg", Func::Atan),
        ("sh", Func::Sinh),
        ("ch", Func::Cosh),
        ("th", Func::Tanh),
    ];

    canonical.chain(aliases).collect()
});

impl Func {
    /// Every registered function.
    pub const ALL: [Func; 16] = [
        Func::Sqrt,
        Func::Exp,
        Func::Ln,
        Func::Log10,
        Func::Sign,
        Func::Abs,
        Func::Sin,
        Func::Cos,
        Func::Tan,
        Func::Cot,
        Func::Asin,
        Func::Acos,
        Func::Atan,
        Func::Sinh,
        Func::Cosh,
        Func::Tanh,
    ];

    /// Looks up the function with the given name (or one of its aliases) in the function registry. The
    /// name must already be lowercase.
    pub fn from_name(name: &str) -> Option<Self> {
        FUNCTIONS.get(name).copied()
    }

    /// Returns every spelling the function registry accepts.
    pub fn names() -> impl Iterator<Item = &'static str> {
        FUNCTIONS.keys().copied()
    }

    /// Returns the canonical name of the function, used when serializing.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sqrt => "sqrt",
            Self::Exp => "exp",
            Self::Ln => "ln",
            Self::Log10 => "log10",
            Self::Sign => "sign",
            Self::Abs => "abs",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Cot => "cot",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
            Self::Sinh => "sinh",
            Self::Cosh => "cosh",
            Self::Tanh => "tanh",
        }
    }
}

impl fmt::Display for Func {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A function call, such as `sin(x)`. The single argument is owned by the node.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Call {
    /// The function being called.
    pub func: Func,

    /// The argument of the call.
    pub arg: Box<Node>,
}

impl Call {
    /// Creates a call of the given function.
    pub fn new(func: Func, arg: Node) -> Self {
        Self { func, arg: Box::new(arg) }
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.func, self.arg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_names_resolve() {
        for func in Func::ALL {
            assert_eq!(Func::from_name(func.name()), Some(func));
        }
    }

    #[test]
    fn alias_spellings_resolve() {
        assert_eq!(Func::from_name("tg"), Some(Func::Tan));
        assert_eq!(Func::from_name("arctg"), Some(Func::Atan));
        assert_eq!(Func::from_name("log"), Some(Func::Log10));
        assert_eq!(Func::from_name("th"), Some(Func::Tanh));
        assert_eq!(Func::from_name("foo"), None);
    }

    #[test]
    fn alias_displays_canonical_name() {
        let call = Call::new(Func::from_name("ch").unwrap(), Node::Variable("x".to_string()));
        assert_eq!(call.to_string(), "cosh(x)");
    }
}
