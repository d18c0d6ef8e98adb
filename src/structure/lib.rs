/* ************************************************************************ **
** This file is part of crysym, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Lattice reduction and space group determination.
//!
//! Conventions used throughout this crate:
//!
//! * A `Lattice` stores the cell vectors as the **rows** of a matrix,
//!   so that cartesian coordinates are `frac * matrix`.
//! * Symmetry operations act on **column** vectors of fractional coordinates,
//!   `x' = R x + t`.
//! * A change-of-basis matrix has the new cell vectors as its columns,
//!   written in terms of the old ones.

#[macro_use] extern crate log;
#[macro_use] extern crate failure;
#[macro_use] extern crate lazy_static;
#[macro_use] extern crate crysym_assert_close;
#[cfg(feature = "serde")]
#[macro_use] extern crate serde;

// FIXME copied from failure 1.0 prerelease; remove once actually released
macro_rules! throw {
    ($e:expr) => {
        return Err(::std::convert::Into::into($e));
    }
}

#[derive(Debug, Fail)]
#[fail(display = "Not nearly an integer: {}", value)]
pub struct IntPrecisionError {
    backtrace: failure::Backtrace,
    value: f64,
}

#[derive(Debug, Fail)]
pub struct BadCellError {
    params: CellParams,
}

impl std::fmt::Display for BadCellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f, "Cell parameters do not describe a cell with positive volume: \
                lengths {:?}, angles {:?} (degrees)",
            self.params.lengths(), self.params.angles_degrees(),
        )
    }
}

impl BadCellError {
    pub fn params(&self) -> &CellParams
    { &self.params }
}

mod cell;
mod algo;
mod oper;
mod util;

pub mod spacegroup;

//---------------------------
// public reexports; API

pub use crate::cell::lattice::Lattice;
pub use crate::cell::params::CellParams;
pub use crate::cell::atoms::{Atom, fract, minority_kind};
pub use crate::cell::structure::Structure;

pub use crate::algo::fuzz::{Fuzz, DEFAULT_EPS};
pub use crate::algo::niggli::{
    niggli_reduce, niggli_reduce_with_limit, is_niggli,
    LatticeReduction, Unimodular, MAX_ITERATIONS,
};
pub use crate::algo::delaunay::{
    delaunay_reduce, delaunay_reduce_with_limit,
    delaunay_reduce_2d, delaunay_reduce_2d_with_limit,
};
pub use crate::algo::overlap::{periodic_sqdist, all_overlap, trim};
pub use crate::algo::primitive::{primitive_translations, find_primitive_cell};
pub use crate::algo::rotations::lattice_point_group;
pub use crate::algo::symmetry_ops::find_operations;

pub use crate::oper::symmops::{Rot, FracTrans, FracOp, SeitzOp};

pub use crate::spacegroup::{
    find_space_group, find_primitive, find_niggli,
    SymmetrySearch, SpaceGroupResult,
};
