//! Parser for single-line mathematical expressions.
//!
//! The [`parser::Parser`] turns an expression string such as `sqrt(x^2 + y^2)` into a tree of
//! [`parser::ast::Node`]s. Evaluation, simplification and differentiation of the tree live in the
//! `exprtree-compute` crate.

pub mod parser;
pub mod tokenizer;
