//! Symbolic differentiation.
//!
//! The derivative of a tree is a new tree, built from the rule for each node kind. Rule output is
//! assembled with `MultBuilder`, `SumBuilder` and the `quotient` and `power` helpers,
//! which drop the trivial terms the rules produce (multiplying by one, adding zero) so that the
//! resulting trees stay readable.

mod function;

use exprtree_parser::parser::ast::{Binary, BinOpKind, Func, Node};
use log::debug;
use crate::numerical::error::Error;
use super::error::UnsupportedDerivative;

/// Returns `true` if the given [`Node`] is the literal zero.
fn is_trivially_zero(node: &Node) -> bool {
    node.is_constant_value(0.0)
}

/// Returns `true` if the given [`Node`] is the literal one.
fn is_trivially_unity(node: &Node) -> bool {
    node.is_constant_value(1.0)
}

/// Helper struct to build a product of nodes while applying basic simplification rules. If any of
/// the factors are zero, the product is reduced to zero. Factors of one are dropped.
#[derive(Default)]
struct MultBuilder(Vec<Node>);

impl From<MultBuilder> for Node {
    fn from(value: MultBuilder) -> Self {
        value.0
            .into_iter()
            .reduce(|product, factor| Node::binary(BinOpKind::Mul, product, factor))
            .unwrap_or(Node::ONE)
    }
}

impl MultBuilder {
    fn mult(&mut self, node: Node) {
        if is_trivially_zero(&node) || self.0.first().is_some_and(is_trivially_zero) {
            self.0 = vec![Node::ZERO];
            return;
        }

        if !is_trivially_unity(&node) {
            self.0.push(node);
        }
    }
}

/// Helper struct to build a sum of nodes while applying basic simplification rules. Only nonzero
/// terms are kept.
#[derive(Default)]
struct SumBuilder(Vec<(BinOpKind, Node)>);

impl From<SumBuilder> for Node {
    fn from(value: SumBuilder) -> Self {
        let mut terms = value.0.into_iter();
        let first = match terms.next() {
            Some((BinOpKind::Sub, term)) => Node::binary(BinOpKind::Sub, Node::ZERO, term),
            Some((_, term)) => term,
            None => return Node::ZERO,
        };
        terms.fold(first, |sum, (op, term)| Node::binary(op, sum, term))
    }
}

impl SumBuilder {
    fn add(&mut self, node: Node) {
        if !is_trivially_zero(&node) {
            self.0.push((BinOpKind::Add, node));
        }
    }

    fn sub(&mut self, node: Node) {
        if !is_trivially_zero(&node) {
            self.0.push((BinOpKind::Sub, node));
        }
    }
}

/// Builds `numerator / denominator`. A zero numerator gives zero, and a denominator of one is
/// dropped.
fn quotient(numerator: Node, denominator: Node) -> Node {
    if is_trivially_zero(&numerator) {
        Node::ZERO
    } else if is_trivially_unity(&denominator) {
        numerator
    } else {
        Node::binary(BinOpKind::Div, numerator, denominator)
    }
}

/// Builds `base ^ exponent`. An exponent of one is dropped.
fn power(base: Node, exponent: Node) -> Node {
    if is_trivially_unity(&exponent) {
        base
    } else {
        Node::binary(BinOpKind::Exp, base, exponent)
    }
}

/// `(f + g)' = f' + g'` and `(f - g)' = f' - g'`
fn sum_rule(binary: &Binary, var: &str) -> Result<Node, Error> {
    let mut sum = SumBuilder::default();
    sum.add(derivative(&binary.lhs, var)?);
    match binary.op {
        BinOpKind::Sub => sum.sub(derivative(&binary.rhs, var)?),
        _ => sum.add(derivative(&binary.rhs, var)?),
    }
    Ok(sum.into())
}

/// `(f * g)' = f' * g + f * g'`
fn product_rule(binary: &Binary, var: &str) -> Result<Node, Error> {
    let mut left = MultBuilder::default();
    left.mult(derivative(&binary.lhs, var)?);
    left.mult((*binary.rhs).clone());

    let mut right = MultBuilder::default();
    right.mult((*binary.lhs).clone());
    right.mult(derivative(&binary.rhs, var)?);

    let mut sum = SumBuilder::default();
    sum.add(left.into());
    sum.add(right.into());
    Ok(sum.into())
}

/// `(f / g)' = (f' * g - f * g') / g^2`
fn quotient_rule(binary: &Binary, var: &str) -> Result<Node, Error> {
    let (f, g) = (&*binary.lhs, &*binary.rhs);

    let mut left = MultBuilder::default();
    left.mult(derivative(f, var)?);
    left.mult(g.clone());

    let mut right = MultBuilder::default();
    right.mult(f.clone());
    right.mult(derivative(g, var)?);

    let mut numerator = SumBuilder::default();
    numerator.add(left.into());
    numerator.sub(right.into());

    Ok(quotient(numerator.into(), power(g.clone(), Node::Constant(2.0))))
}

/// `(f ^ n)' = n * f ^ (n - 1) * f'` if `n` does not depend on the variable, and
/// `(f ^ g)' = f ^ g * (g' * ln(f) + g * f' / f)` otherwise.
fn power_rule(binary: &Binary, var: &str) -> Result<Node, Error> {
    let (base, exponent) = (&*binary.lhs, &*binary.rhs);

    if !exponent.depends_on(var) {
        let reduced = match exponent {
            Node::Constant(n) => Node::Constant(n - 1.0),
            exponent => Node::binary(BinOpKind::Sub, exponent.clone(), Node::ONE),
        };

        let mut mult_group = MultBuilder::default();
        mult_group.mult(exponent.clone());
        mult_group.mult(power(base.clone(), reduced));
        mult_group.mult(derivative(base, var)?);
        return Ok(mult_group.into());
    }

    let mut log_term = MultBuilder::default();
    log_term.mult(derivative(exponent, var)?);
    log_term.mult(Node::call(Func::Ln, base.clone()));

    let mut base_term = MultBuilder::default();
    base_term.mult(exponent.clone());
    base_term.mult(quotient(derivative(base, var)?, base.clone()));

    let mut sum = SumBuilder::default();
    sum.add(log_term.into());
    sum.add(base_term.into());

    let mut mult_group = MultBuilder::default();
    mult_group.mult(Node::Binary(binary.clone()));
    mult_group.mult(sum.into());
    Ok(mult_group.into())
}

/// Computes the derivative of the given tree with respect to the given variable. The variable
/// name must already be lowercase.
///
/// Returns [`UnsupportedDerivative`] if the tree contains a `%` operation that depends on the
/// variable.
pub fn derivative(f: &Node, var: &str) -> Result<Node, Error> {
    if !f.depends_on(var) {
        return Ok(Node::ZERO);
    }

    match f {
        Node::Constant(_) => Ok(Node::ZERO),
        Node::Variable(name) if name == var => Ok(Node::ONE),
        Node::Variable(_) => Ok(Node::ZERO),
        Node::Binary(binary) => match binary.op {
            BinOpKind::Add | BinOpKind::Sub => sum_rule(binary, var),
            BinOpKind::Mul => product_rule(binary, var),
            BinOpKind::Div => quotient_rule(binary, var),
            BinOpKind::Exp => power_rule(binary, var),
            BinOpKind::Mod => {
                debug!("no derivative rule for `{}` in {}", binary.op, f);
                Err(Error::spanless(UnsupportedDerivative { symbol: binary.op.to_string() }))
            },
        },
        Node::Call(call) => function::function_derivative(call, var),
    }
}
