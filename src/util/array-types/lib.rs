//! Small fixed-size vectors and matrices.
//!
//! Matrices are stored as arrays of rows.  `&m * &v` treats `v` as a column,
//! while `&v * &m` treats it as a row.

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;

#[macro_use]
mod macros;

mod types;
mod traits;
mod ops;
mod methods_v;
mod methods_m;

pub use crate::types::*;
pub use crate::traits::{Semiring, Ring, Field};
pub use crate::methods_v::{dot, sqnorm, cross};

/// Free functions on vectors.
pub mod vee {
    pub use crate::methods_v::{dot, sqnorm, from_fn, zero};
}

/// Free functions on matrices.
pub mod mat {
    pub use crate::methods_m::{from_fn, from_array, eye, zero, inv};
}
pub use crate::methods_m::inv;
