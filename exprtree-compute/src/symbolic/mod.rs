//! Symbolic manipulation of expression trees: constant folding and differentiation.

pub mod derivative;
pub mod error;
pub mod simplify;

pub use derivative::derivative;
pub use simplify::{simplified, simplify};
