//! Classification of tokens and assignment of their priorities.
//!
//! Every token is given a [`Priority`] that encodes both the precedence of its role and the
//! parenthesis depth it appears at. The tree builder then only has to look for the token with the
//! lowest priority in a range to find the root of that range.

use levenshtein::levenshtein;
use log::trace;
use std::ops::Range;
use super::{
    ast::{BinOpKind, Func, Node},
    error::{kind, Error},
    symbol::{Symbol, SymbolTable},
};
use crate::tokenizer::{Token, TokenKind};

/// The priority added per level of parenthesis nesting. It is larger than every operator tier, so
/// that any operator inside a pair of parentheses binds more tightly than every operator outside
/// of it.
pub const DEPTH_OFFSET: u32 = 4;

/// The binding priority of a token. Lower priorities bind more loosely, and become roots of
/// larger subtrees.
///
/// [`Priority::Leaf`] sorts after every ranked priority, so a leaf is only ever chosen as the root
/// of a range when the range contains no operator or function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    /// An operator or function, ranked by its tier and depth.
    Ranked(u32),

    /// An operand (constant, variable, numeric literal) or a parenthesis.
    Leaf,
}

/// The role of a token, resolved against the registries and the symbol table.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved {
    /// An opening parenthesis.
    OpenParen,

    /// A closing parenthesis.
    CloseParen,

    /// A binary operator.
    Binary(BinOpKind),

    /// A function name.
    Call(Func),

    /// A constant, numeric literal, or variable, already in its final node form.
    Leaf(Node),
}

/// A token annotated with its priority and its resolved role.
#[derive(Debug, Clone, PartialEq)]
pub struct Classified<'source> {
    /// The original token.
    pub token: Token<'source>,

    /// The binding priority of the token.
    pub priority: Priority,

    /// The role of the token.
    pub resolved: Resolved,
}

impl Classified<'_> {
    /// Returns true if the token is an opening parenthesis.
    pub fn is_open_paren(&self) -> bool {
        self.resolved == Resolved::OpenParen
    }

    /// Returns true if the token is a closing parenthesis.
    pub fn is_close_paren(&self) -> bool {
        self.resolved == Resolved::CloseParen
    }
}

/// Returns the registered names spelled similarly to the given token.
fn suggestions(token: &str, symbols: &SymbolTable) -> Vec<String> {
    let builtin = Func::names().map(str::to_string);
    let declared = symbols.names().map(str::to_string);
    let mut similar = builtin
        .chain(declared)
        .filter(|name| levenshtein(name, token) < 2)
        .collect::<Vec<_>>();
    similar.sort_unstable();
    similar.dedup();
    similar
}

/// Resolves a single non-bracket token, in registry order: operators, then functions, then the
/// symbol table.
fn resolve(token: &Token, depth: u32, symbols: &SymbolTable) -> Result<(Priority, Resolved), Error> {
    let text = token.normalized();

    if let Some(op) = BinOpKind::from_symbol(&text) {
        return Ok((Priority::Ranked(op.tier().value() + DEPTH_OFFSET * depth), Resolved::Binary(op)));
    }

    if let Some(func) = Func::from_name(&text) {
        return Ok((Priority::Ranked(DEPTH_OFFSET * (depth + 1)), Resolved::Call(func)));
    }

    match symbols.lookup(&text) {
        Some(Symbol::Constant(value)) => Ok((Priority::Leaf, Resolved::Leaf(Node::Constant(value)))),
        Some(Symbol::Variable) => Ok((Priority::Leaf, Resolved::Leaf(Node::Variable(text)))),
        None => {
            let suggestions = suggestions(&text, symbols);
            Err(Error::new(vec![token.span.clone()], kind::UnknownToken { token: text, suggestions }))
        },
    }
}

/// Classifies every token in a single left-to-right pass, tracking parenthesis depth.
///
/// Fails on the first closing parenthesis that has no match, on the first token that cannot be
/// resolved, or, after the pass, if any parenthesis was left open.
pub fn assign<'source>(
    tokens: &[Token<'source>],
    symbols: &SymbolTable,
) -> Result<Vec<Classified<'source>>, Error> {
    let mut classified = Vec::with_capacity(tokens.len());

    // spans of the currently open parentheses; its length is the current depth
    let mut open: Vec<Range<usize>> = Vec::new();

    for token in tokens {
        let (priority, resolved) = match token.kind {
            TokenKind::OpenParen => {
                open.push(token.span.clone());
                (Priority::Leaf, Resolved::OpenParen)
            },
            TokenKind::CloseParen => {
                if open.pop().is_none() {
                    return Err(Error::new(vec![token.span.clone()], kind::UnbalancedBracketExtra));
                }
                (Priority::Leaf, Resolved::CloseParen)
            },
            _ => resolve(token, open.len() as u32, symbols)?,
        };

        trace!("token `{}` at {:?}: {:?} ({:?})", token.lexeme, token.span, priority, resolved);
        classified.push(Classified { token: token.clone(), priority, resolved });
    }

    if !open.is_empty() {
        let unclosed = open.len();
        return Err(Error::new(open, kind::UnbalancedBracketMissing { unclosed }));
    }

    Ok(classified)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use crate::tokenizer::tokenize_complete;

    fn priorities(input: &str, variables: &[&str]) -> Vec<Priority> {
        let tokens = tokenize_complete(input).unwrap();
        let symbols = SymbolTable::with_variables(variables);
        assign(&tokens, &symbols)
            .unwrap()
            .into_iter()
            .map(|classified| classified.priority)
            .collect()
    }

    fn assign_err(input: &str) -> Error {
        let tokens = tokenize_complete(input).unwrap();
        assign(&tokens, &SymbolTable::with_variables(["x"])).unwrap_err()
    }

    #[test]
    fn leaf_sorts_last() {
        assert!(Priority::Ranked(u32::MAX) < Priority::Leaf);
        assert!(Priority::Ranked(1) < Priority::Ranked(2));
    }

    #[test]
    fn operator_tiers() {
        use Priority::*;
        assert_eq!(
            priorities("x + 2 * x ^ 3 % 4", &["x"]),
            [Leaf, Ranked(1), Leaf, Ranked(2), Leaf, Ranked(3), Leaf, Ranked(2), Leaf],
        );
    }

    #[test]
    fn depth_scaling() {
        use Priority::*;
        // sin ( x - ( 1 / x ) )
        assert_eq!(
            priorities("sin(x - (1 / x))", &["x"]),
            [Ranked(4), Leaf, Leaf, Ranked(5), Leaf, Leaf, Ranked(10), Leaf, Leaf, Leaf],
        );
    }

    #[test]
    fn resolved_roles() {
        let tokens = tokenize_complete("PI * Tg(X)").unwrap();
        let classified = assign(&tokens, &SymbolTable::with_variables(["x"])).unwrap();
        let roles = classified.into_iter().map(|c| c.resolved).collect::<Vec<_>>();
        assert_eq!(
            roles,
            [
                Resolved::Leaf(Node::Constant(std::f64::consts::PI)),
                Resolved::Binary(BinOpKind::Mul),
                Resolved::Call(Func::Tan),
                Resolved::OpenParen,
                Resolved::Leaf(Node::Variable("x".to_string())),
                Resolved::CloseParen,
            ],
        );
    }

    #[test]
    fn extra_close_paren() {
        let err = assign_err("1 + 2)");
        assert!(err.is::<kind::UnbalancedBracketExtra>());
        assert_eq!(err.spans, vec![5..6]);
    }

    #[test]
    fn missing_close_paren() {
        let err = assign_err("((1 + 2");
        assert_eq!(
            err.downcast_ref::<kind::UnbalancedBracketMissing>(),
            Some(&kind::UnbalancedBracketMissing { unclosed: 2 }),
        );
        assert_eq!(err.spans, vec![0..1, 1..2]);
    }

    #[test]
    fn unknown_token_with_suggestions() {
        let err = assign_err("sim(x)");
        let kind = err.downcast_ref::<kind::UnknownToken>().unwrap();
        assert_eq!(kind.token, "sim");
        assert_eq!(kind.suggestions, vec!["sin".to_string()]);
        assert_eq!(err.spans, vec![0..3]);
    }

    #[test]
    fn unknown_token_without_suggestions() {
        let err = assign_err("foo(1)");
        let kind = err.downcast_ref::<kind::UnknownToken>().unwrap();
        assert_eq!(kind.token, "foo");
        assert!(kind.suggestions.is_empty());
    }

    #[test]
    fn suggestions_include_declared_variables() {
        let tokens = tokenize_complete("velocty * 2").unwrap();
        let symbols = SymbolTable::with_variables(["velocity"]);
        let err = assign(&tokens, &symbols).unwrap_err();
        let kind = err.downcast_ref::<kind::UnknownToken>().unwrap();
        assert_eq!(kind.suggestions, vec!["velocity".to_string()]);
    }
}
