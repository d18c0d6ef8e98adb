//! Exact integer linear algebra.

pub use crate::snf::{SmithDecomp, IntMatrix};
mod snf;
