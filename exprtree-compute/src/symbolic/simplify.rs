//! Constant folding.

use exprtree_parser::parser::ast::Node;
use crate::numerical::{error::Error, eval::Eval};

/// Simplifies the given tree in place by folding every subtree that has no free variables into a
/// single constant.
///
/// Folding is bottom-up: a closed operation or call is evaluated and replaced, while the children
/// of an open one are simplified in turn. Leaves are left unchanged, so simplifying twice gives the
/// same tree as simplifying once.
///
/// If a closed subtree fails to evaluate (such as `ln(0)`), the error is returned and the tree may
/// be left partially folded. Use [`simplified`] to keep the original tree intact.
pub fn simplify(node: &mut Node) -> Result<(), Error> {
    if matches!(node, Node::Binary(_) | Node::Call(_)) && node.is_closed() {
        *node = Node::Constant(node.eval_default()?);
        return Ok(());
    }

    match node {
        Node::Binary(binary) => {
            simplify(&mut binary.lhs)?;
            simplify(&mut binary.rhs)
        },
        Node::Call(call) => simplify(&mut call.arg),
        Node::Constant(_) | Node::Variable(_) => Ok(()),
    }
}

/// Returns a simplified copy of the given tree.
pub fn simplified(node: &Node) -> Result<Node, Error> {
    let mut node = node.clone();
    simplify(&mut node)?;
    Ok(node)
}
