//! Space group identification.
//!
//! The search reduces a structure to a primitive Delaunay cell, finds the
//! operations that map it onto itself, builds a conventional cell from them,
//! and matches the result against the default setting of each of the 230
//! space groups.

#[macro_use]
mod asym;
mod data;

pub mod point_group;
mod axes;
pub mod hall;
pub mod catalog;
mod conventional;
mod matcher;
mod find;

pub use self::find::{find_space_group, find_primitive, find_niggli, SymmetrySearch, SpaceGroupResult};
pub use self::catalog::{Setting, catalog, setting, setting_of_hall, hall_numbers, space_group_of_hall};
pub use self::point_group::{PointGroup, LaueClass, Holohedry, RotationType};
pub use self::axes::Centering;
pub use self::hall::{HallSymbol, HallParseError};
pub use self::conventional::conventional_lattice;
pub use self::asym::{is_inside, asymmetric_atoms};
