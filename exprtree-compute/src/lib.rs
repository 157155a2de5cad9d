//! Evaluation, constant folding and symbolic differentiation of expressions parsed by
//! `exprtree-parser`.
//!
//! Most users only need [`Expression`], which compiles a source string and exposes every
//! operation on the result. The lower-level pieces are available in their own modules:
//!
//! - [`numerical`]: the [`Eval`](numerical::eval::Eval) trait and the [`Bindings`] that supply
//!   variable values.
//! - [`funcs`]: the numerical implementations of the built-in functions.
//! - [`symbolic`]: constant folding and symbolic derivatives of expression trees.
//!
//! # Features
//!
//! - `serde`: Derives `Serialize` and `Deserialize` for [`Expression`], [`Bindings`] and the
//!   expression tree.

pub mod expression;
pub mod funcs;
pub mod numerical;
pub mod symbolic;

pub use exprtree_error::Error;
pub use expression::Expression;
pub use numerical::ctxt::Bindings;
