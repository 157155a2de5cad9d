//! Construction of the expression tree from classified tokens.
//!
//! The root of every token range is the token with the lowest [`Priority`] in that range. The
//! tokens to its left and right are built into its operands recursively.

use std::ops::Range;
use super::{
    ast::Node,
    error::{kind::{self, Arity}, Error},
    priority::{Classified, Resolved},
};

/// Builds the expression tree from the full list of classified tokens.
pub fn build(tokens: &[Classified]) -> Result<Node, Error> {
    Ok(build_range(tokens, 0..tokens.len())?.unwrap_or(Node::ZERO))
}

/// Builds the subtree for the half-open range of tokens.
///
/// An empty range has no subtree and returns [`None`]. Otherwise, every leading `(` and trailing
/// `)` of the range is skipped, and a range that is left empty by this is the zero constant.
fn build_range(tokens: &[Classified], range: Range<usize>) -> Result<Option<Node>, Error> {
    let Range { mut start, mut end } = range;
    if start >= end {
        return Ok(None);
    }

    while start < end && tokens[start].is_open_paren() {
        start += 1;
    }
    while end > start && tokens[end - 1].is_close_paren() {
        end -= 1;
    }
    if start == end {
        return Ok(Some(Node::ZERO));
    }

    // the right-most token wins ties, which makes equal-priority operators group to the left
    let mut root = start;
    for idx in start + 1..end {
        if tokens[idx].priority <= tokens[root].priority {
            root = idx;
        }
    }

    let token = &tokens[root];
    let malformed = |expected| Error::new(
        vec![token.token.span.clone()],
        kind::MalformedArity { symbol: token.token.lexeme.to_string(), expected },
    );

    if matches!(token.resolved, Resolved::OpenParen | Resolved::CloseParen) {
        return Err(malformed(Arity::Group));
    }

    let lhs = build_range(tokens, start..root)?;
    let rhs = build_range(tokens, root + 1..end)?;

    match (&token.resolved, lhs, rhs) {
        // a missing left operand reads as zero, so a leading `-` negates
        (Resolved::Binary(op), lhs, Some(rhs)) => {
            Ok(Some(Node::binary(*op, lhs.unwrap_or(Node::ZERO), rhs)))
        },
        (Resolved::Binary(_), _, None) => Err(malformed(Arity::Binary)),
        (Resolved::Call(func), None, Some(arg)) => Ok(Some(Node::call(*func, arg))),
        (Resolved::Call(_), _, _) => Err(malformed(Arity::Unary)),
        (Resolved::Leaf(node), None, None) => Ok(Some(node.clone())),
        (Resolved::Leaf(_), _, _) => Err(malformed(Arity::Leaf)),
        (Resolved::OpenParen | Resolved::CloseParen, _, _) => Err(malformed(Arity::Group)),
    }
}
