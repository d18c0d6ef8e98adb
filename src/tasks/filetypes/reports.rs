//! JSON reports written by the command line tools.

use crysym_structure::spacegroup::{Centering, Holohedry};
use crysym_tasks_config::{AtomDoc, CellDoc, StructureDoc};

/// Output of `crysym spacegroup`.
#[derive(Serialize)]
#[derive(Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct SpaceGroupReport {
    pub number: u16,
    pub hall_number: u16,
    pub hall_symbol: String,
    pub hm_symbol: String,
    pub schoenflies: String,
    pub point_group: String,
    pub crystal_system: Holohedry,
    pub centering: Centering,
    /// Origin of the input's conventional cell, in the standard setting.
    pub origin_shift: [f64; 3],
    /// Columns are the input's conventional axes in terms of the standard ones.
    pub basis_change: [[i32; 3]; 3],
    /// Columns are the input's conventional axes in terms of its reduced primitive cell.
    pub transformation: [[i32; 3]; 3],
    pub conventional: StructureDoc,
    pub asymmetric_atoms: Vec<AtomDoc>,
}

/// A lattice without atoms.
#[derive(Serialize)]
#[derive(Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct LatticeReport {
    pub lattice: [[f64; 3]; 3],
    pub cell: CellDoc,
}

/// Output of `crysym reduce`.
#[derive(Serialize)]
#[derive(Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct ReduceReport {
    pub niggli: LatticeReport,
    /// Rows are the Niggli vectors in terms of the input vectors.
    pub niggli_transform: [[i32; 3]; 3],
    pub delaunay: LatticeReport,
}
