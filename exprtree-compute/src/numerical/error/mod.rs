pub mod kind;

pub use exprtree_error::{Error, ErrorKind};
