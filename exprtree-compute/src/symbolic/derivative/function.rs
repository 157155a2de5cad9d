//! Symbolic derivatives of the functions in `crate::funcs`.

use exprtree_parser::parser::ast::{BinOpKind, Call, Func, Node};
use std::f64::consts::LN_10;
use crate::numerical::error::Error;
use super::{derivative, power, quotient, MultBuilder, SumBuilder};

/// `u ^ 2`
fn squared(u: &Node) -> Node {
    power(u.clone(), Node::Constant(2.0))
}

/// `sqrt(1 - u ^ 2)`
fn sqrt_one_minus_squared(u: &Node) -> Node {
    let mut sum = SumBuilder::default();
    sum.add(Node::ONE);
    sum.sub(squared(u));
    Node::call(Func::Sqrt, sum.into())
}

/// Returns the derivative of the function itself, evaluated at the argument `u`.
fn outer_derivative(func: Func, u: &Node) -> Node {
    match func {
        Func::Sqrt => quotient(Node::Constant(0.5), Node::call(Func::Sqrt, u.clone())),
        Func::Exp => Node::call(Func::Exp, u.clone()),
        Func::Ln => quotient(Node::ONE, u.clone()),
        Func::Log10 => quotient(
            Node::ONE,
            Node::binary(BinOpKind::Mul, u.clone(), Node::Constant(LN_10)),
        ),
        Func::Sign => Node::ZERO,
        Func::Abs => Node::call(Func::Sign, u.clone()),
        Func::Sin => Node::call(Func::Cos, u.clone()),
        Func::Cos => Node::binary(BinOpKind::Mul, Node::Constant(-1.0), Node::call(Func::Sin, u.clone())),
        Func::Tan => quotient(Node::ONE, squared(&Node::call(Func::Cos, u.clone()))),
        Func::Cot => quotient(Node::Constant(-1.0), squared(&Node::call(Func::Sin, u.clone()))),
        Func::Asin => quotient(Node::ONE, sqrt_one_minus_squared(u)),
        Func::Acos => quotient(Node::Constant(-1.0), sqrt_one_minus_squared(u)),
        Func::Atan => {
            let mut sum = SumBuilder::default();
            sum.add(Node::ONE);
            sum.add(squared(u));
            quotient(Node::ONE, sum.into())
        },
        Func::Sinh => Node::call(Func::Cosh, u.clone()),
        Func::Cosh => Node::call(Func::Sinh, u.clone()),
        Func::Tanh => quotient(Node::ONE, squared(&Node::call(Func::Cosh, u.clone()))),
    }
}

/// Computes the derivative of a function call and applies the chain rule.
pub(super) fn function_derivative(call: &Call, var: &str) -> Result<Node, Error> {
    let mut mult_group = MultBuilder::default();
    mult_group.mult(outer_derivative(call.func, &call.arg));
    mult_group.mult(derivative(&call.arg, var)?);
    Ok(mult_group.into())
}
