pub mod ast;
pub mod error;
pub mod fmt;
pub mod priority;
pub mod symbol;
pub mod tree;

use ast::Node;
use error::Error;
use log::debug;
use symbol::SymbolTable;
use super::tokenizer::tokenize_complete;

/// A high-level parser for single-line expressions. This is the type to use to parse an arbitrary
/// expression string into an abstract syntax tree.
///
/// Parsing happens in three passes: the source is split into tokens, every token is classified
/// and assigned a priority, and the tree is built by repeatedly splitting token ranges at their
/// lowest-priority token.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The source being parsed.
    source: &'source str,

    /// The names the expression may reference.
    symbols: SymbolTable,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source. Only the built-in constants are known to it.
    pub fn new(source: &'source str) -> Self {
        Self { source, symbols: SymbolTable::new() }
    }

    /// Registers the given names as variables of the expression.
    pub fn with_variables<I, S>(mut self, variables: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in variables {
            self.symbols.add_variable(name.as_ref());
        }
        self
    }

    /// Parses the source into an expression tree.
    pub fn try_parse(&self) -> Result<Node, Error> {
        let tokens = tokenize_complete(self.source)?;
        let classified = priority::assign(&tokens, &self.symbols)?;
        let root = tree::build(&classified)?;
        debug!("parsed `{}` ({} tokens): {}", self.source, tokens.len(), root);
        Ok(root)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use super::error::kind;

    #[test]
    fn parse_with_variables() {
        let root = Parser::new("SQRT(X^2 + y^2 + Z^2)")
            .with_variables(["x", "Y", "z"])
            .try_parse()
            .unwrap();
        assert_eq!(root.to_string(), "sqrt((((x^2.0)+(y^2.0))+(z^2.0)))");
    }

    #[test]
    fn constants_resolve_to_values() {
        let root = Parser::new("2 * pi").try_parse().unwrap();
        assert_eq!(
            root,
            Node::binary(ast::BinOpKind::Mul, Node::Constant(2.0), Node::Constant(std::f64::consts::PI)),
        );
    }

    #[test]
    fn variable_shadows_constant() {
        let root = Parser::new("e").with_variables(["e"]).try_parse().unwrap();
        assert_eq!(root, Node::variable("e"));
    }

    #[test]
    fn reparse_display() {
        let source = "x - (-8) * 2 / (1 - x)";
        let first = Parser::new(source).with_variables(["x"]).try_parse().unwrap();
        let text = first.to_string();
        let second = Parser::new(&text).with_variables(["x"]).try_parse().unwrap();
        assert_eq!(text, second.to_string());
    }

    #[test]
    fn errors() {
        assert!(Parser::new("").try_parse().unwrap_err().is::<kind::EmptyInput>());
        assert!(Parser::new("(1+2").try_parse().unwrap_err().is::<kind::UnbalancedBracketMissing>());
        assert!(Parser::new("1+2)").try_parse().unwrap_err().is::<kind::UnbalancedBracketExtra>());
        assert!(Parser::new("foo(1)").try_parse().unwrap_err().is::<kind::UnknownToken>());
        assert!(Parser::new("x + 1").try_parse().unwrap_err().is::<kind::UnknownToken>());
    }
}
