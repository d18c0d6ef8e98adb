//! Space group determination for a whole structure.

use crate::{Atom, Lattice, SeitzOp, Structure};
use crate::{delaunay_reduce_with_limit, delaunay_reduce_2d_with_limit, niggli_reduce_with_limit};
use crate::{find_primitive_cell, find_operations, lattice_point_group, trim};
use crate::algo::fuzz::DEFAULT_EPS;
use crate::algo::niggli::MAX_ITERATIONS;
use crate::algo::primitive::find_primitive_cell_with_minority;
use crate::cell::atoms::{fract, minority_kind, of_kind};
use crate::util::{Tol, float_m33};
use super::asym::asymmetric_atoms;
use super::axes::{construct_axes, centering_of, basis_correction};
use super::catalog::Setting;
use super::conventional::conventional_lattice;
use super::matcher::match_space_group;
use super::point_group::{PointGroup, Holohedry};

use crysym_array_types::{V3, M33, inv};

/// Tolerances for a symmetry search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SymmetrySearch {
    /// Distance (in fractional units) below which two positions coincide.
    /// Also used as the tolerance of every lattice reduction.
    pub precision: f64,
    /// Iteration limit for each lattice reduction.
    pub max_iterations: usize,
}

impl Default for SymmetrySearch {
    fn default() -> Self
    { SymmetrySearch { precision: DEFAULT_EPS, max_iterations: MAX_ITERATIONS } }
}

/// The space group of a structure, with the structure in the standard setting.
#[derive(Debug, Clone)]
pub struct SpaceGroupResult {
    setting: &'static Setting,
    origin: V3,
    basis: M33<i32>,
    transform: M33<i32>,
    reduced_lattice: Lattice,
    conventional_lattice: Lattice,
    conventional_atoms: Vec<Atom>,
    asymmetric_atoms: Vec<Atom>,
}

impl SpaceGroupResult {
    pub fn number(&self) -> u16 { self.setting.number() }
    pub fn hall_number(&self) -> u16 { self.setting.hall_number() }
    pub fn setting(&self) -> &'static Setting { self.setting }
    pub fn point_group(&self) -> PointGroup { self.setting.point_group() }

    /// Origin of the conventional cell found in the structure, in fractional
    /// coordinates of the standard setting.
    pub fn origin_shift(&self) -> &V3 { &self.origin }

    /// Change of basis (columns) from the standard setting to the
    /// conventional cell found in the structure.
    pub fn basis(&self) -> &M33<i32> { &self.basis }

    /// Change of basis (columns) from the Delaunay-reduced primitive cell
    /// to the conventional cell found in the structure.
    pub fn transform(&self) -> &M33<i32> { &self.transform }

    /// The Delaunay-reduced primitive cell that the search worked in.
    pub fn reduced_lattice(&self) -> &Lattice { &self.reduced_lattice }

    /// The conventional cell of the standard setting, in its standard orientation.
    pub fn conventional_lattice(&self) -> &Lattice { &self.conventional_lattice }

    /// Every atom of the conventional cell, including centering copies.
    pub fn conventional_atoms(&self) -> &[Atom] { &self.conventional_atoms }

    /// One atom per orbit, inside the asymmetric unit where possible.
    pub fn asymmetric_atoms(&self) -> &[Atom] { &self.asymmetric_atoms }

    pub fn conventional_structure(&self) -> Structure
    { Structure::new(self.conventional_lattice.clone(), self.conventional_atoms.clone()) }
}

/// Find the space group of a structure with the default iteration limit.
pub fn find_space_group(lattice: &Lattice, atoms: &[Atom], precision: f64) -> Option<SpaceGroupResult>
{ SymmetrySearch { precision, ..Default::default() }.space_group(lattice, atoms) }

/// The primitive cell of a structure in the standard setting.
pub fn find_primitive(lattice: &Lattice, atoms: &[Atom], precision: f64) -> Option<Structure>
{ SymmetrySearch { precision, ..Default::default() }.primitive(lattice, atoms) }

/// The Niggli-reduced primitive cell of a structure.
pub fn find_niggli(lattice: &Lattice, atoms: &[Atom], precision: f64) -> Option<Structure>
{ SymmetrySearch { precision, ..Default::default() }.niggli(lattice, atoms) }

impl SymmetrySearch {
    /// Find the space group of a structure.
    ///
    /// Returns `None` when there are no atoms, when a lattice reduction
    /// fails, or when the operations match no reference setting.
    pub fn space_group(&self, lattice: &Lattice, atoms: &[Atom]) -> Option<SpaceGroupResult>
    {
        let SymmetrySearch { precision, max_iterations } = *self;

        let kind = minority_kind(atoms)?;
        let primitive = find_primitive_cell_with_minority(&of_kind(atoms, kind), atoms, lattice, precision);
        debug!("primitive cell is 1/{:.0} of the input cell", lattice.volume() / primitive.volume());

        let reduced = delaunay_reduce_with_limit(&primitive, precision, max_iterations)?;
        let rotations = lattice_point_group(&reduced, precision);

        let reduced_atoms = trim(atoms, lattice, &reduced, precision);
        let ops = find_operations(&rotations, &of_kind(&reduced_atoms, kind), &reduced_atoms, precision);
        let point_group = match PointGroup::from_rotations(ops.iter().map(|op| &op.rot)) {
            Some(pg) => pg,
            None => {
                warn!("the {} operations found do not form a point group", ops.len());
                return None;
            },
        };
        debug!("point group {} ({} operations)", point_group, ops.len());

        let transform = self.conventional_transform(&reduced, point_group, &ops)?;
        let centering = centering_of(&transform)?;
        let (correction, centering) = basis_correction(&transform, centering, point_group.laue_class());
        let transform = &transform * &correction;
        debug!("conventional cell is {}-centered", centering);

        let transform_f = float_m33(&transform);
        let transform_inv = inv(&transform_f);
        let mut conventional_ops = vec![];
        for op in &ops {
            let op = op.change_basis(&transform_f, &transform_inv).ok()?;
            conventional_ops.push(op);
            for c in centering.translations() {
                conventional_ops.push(SeitzOp::new(op.rot, op.trans + c));
            }
        }

        let found = match match_space_group(point_group, centering, &conventional_ops, precision) {
            Some(found) => found,
            None => {
                warn!("no space group matches point group {} with {} centering", point_group, centering);
                return None;
            },
        };
        let setting = found.setting;
        debug!("space group {} ({})", setting.number(), setting.hm_symbol());

        // conventional lattice in the standard setting
        let found_lattice = reduced.change_basis(&transform_f);
        let standard_lattice = found_lattice.change_basis(&inv(&float_m33(&found.basis)));
        let conventional = conventional_lattice(&standard_lattice.params(), setting.holohedry(), false).ok()?;

        let basis_f = float_m33(&found.basis);
        let mut conventional_atoms = vec![];
        for atom in &reduced_atoms {
            let frac = &transform_inv * &atom.frac;
            for c in Some(V3::zero()).into_iter().chain(centering.translations()) {
                let standard = fract(&(&basis_f * &(frac + c) + found.origin));
                conventional_atoms.push(Atom::new(standard, atom.kind));
            }
        }
        let asymmetric = asymmetric_atoms(setting, &conventional_atoms, precision);

        Some(SpaceGroupResult {
            setting,
            origin: found.origin,
            basis: found.basis,
            transform,
            reduced_lattice: reduced,
            conventional_lattice: conventional,
            conventional_atoms,
            asymmetric_atoms: asymmetric,
        })
    }

    // Columns are the conventional axes in terms of the reduced cell.
    // Centering is not yet accounted for.
    fn conventional_transform(
        &self,
        reduced: &Lattice,
        point_group: PointGroup,
        ops: &[SeitzOp],
    ) -> Option<M33<i32>>
    {
        let SymmetrySearch { precision, max_iterations } = *self;
        let laue = point_group.laue_class();

        let rotations: Vec<_> = ops.iter().map(|op| op.rot).collect();
        let axes = construct_axes(laue, &rotations)?;
        let axes_lattice = reduced.change_basis(&float_m33(&axes));

        Some(match laue.holohedry() {
            Holohedry::Triclinic => {
                let reduction = niggli_reduce_with_limit(&axes_lattice, precision, max_iterations)?;
                &axes * &reduction.transform().change_of_basis()
            },
            Holohedry::Monoclinic => {
                let plane = delaunay_reduce_2d_with_limit(&axes_lattice, 1, precision, max_iterations)?;
                let coeffs = plane.matrix() * reduced.inverse_matrix();
                Tol(1e-4).unfloat_m33(&coeffs).ok()?.t()
            },
            _ => axes,
        })
    }

    /// The primitive cell of the standard setting, with its atoms.
    pub fn primitive(&self, lattice: &Lattice, atoms: &[Atom]) -> Option<Structure>
    {
        let found = self.space_group(lattice, atoms)?;
        let conventional = found.conventional_lattice();
        let primitive = conventional.change_basis(&found.setting().centering().to_primitive());
        let atoms = trim(found.conventional_atoms(), conventional, &primitive, self.precision);
        Some(Structure::new(primitive, atoms))
    }

    /// The Niggli-reduced primitive cell, with its atoms.
    pub fn niggli(&self, lattice: &Lattice, atoms: &[Atom]) -> Option<Structure>
    {
        let SymmetrySearch { precision, max_iterations } = *self;

        let primitive = find_primitive_cell(atoms, lattice, precision);
        let delaunay = delaunay_reduce_with_limit(&primitive, precision, max_iterations)?;
        let reduction = niggli_reduce_with_limit(&delaunay, precision, max_iterations)?;
        let reduced = reduction.reduced().clone();
        let atoms = trim(atoms, lattice, &reduced, precision);
        Some(Structure::new(reduced, atoms))
    }
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;
    use crate::{CellParams, all_overlap};
    use crate::spacegroup::axes::Centering;

    fn atoms(kind: u32, fracs: &[[f64; 3]]) -> Vec<Atom>
    { fracs.iter().map(|&f| Atom::new(V3(f), kind)).collect() }

    fn rock_salt() -> (Lattice, Vec<Atom>) {
        let mut all = atoms(0, &[[0.0, 0.0, 0.0], [0.0, 0.5, 0.5], [0.5, 0.0, 0.5], [0.5, 0.5, 0.0]]);
        all.extend(atoms(1, &[[0.5, 0.5, 0.5], [0.5, 0.0, 0.0], [0.0, 0.5, 0.0], [0.0, 0.0, 0.5]]));
        (Lattice::cubic(5.6), all)
    }

    // every operation of the setting maps the output atoms onto themselves
    fn assert_invariant(found: &SpaceGroupResult) {
        for op in found.setting().operations() {
            assert!(all_overlap(&op.to_seitz(), found.conventional_atoms(), 1e-4), "{:?}", op);
        }
    }

    #[test]
    fn rock_salt_is_fm3m() {
        let (lattice, atoms) = rock_salt();
        let found = find_space_group(&lattice, &atoms, 1e-5).unwrap();
        assert_eq!(found.number(), 225);
        assert_eq!(found.hall_number(), 523);
        assert_eq!(found.conventional_atoms().len(), 8);
        assert_eq!(found.asymmetric_atoms().len(), 2);
        assert_close!(found.conventional_lattice().params().lengths(), [5.6, 5.6, 5.6]);
        assert_invariant(&found);

        let primitive = find_primitive(&lattice, &atoms, 1e-5).unwrap();
        assert_eq!(primitive.num_atoms(), 2);
        assert_close!(rel=1e-9, primitive.lattice().volume(), 5.6f64.powi(3) / 4.0);
    }

    #[test]
    fn rutile() {
        let u = 0.305;
        let mut all = atoms(0, &[[0.0, 0.0, 0.0], [0.5, 0.5, 0.5]]);
        all.extend(atoms(1, &[
            [u, u, 0.0], [1.0 - u, 1.0 - u, 0.0],
            [0.5 + u, 0.5 - u, 0.5], [0.5 - u, 0.5 + u, 0.5],
        ]));
        let lattice = Lattice::orthorhombic(4.594, 4.594, 2.959);

        let found = find_space_group(&lattice, &all, 1e-5).unwrap();
        assert_eq!(found.number(), 136);
        assert_eq!(found.conventional_atoms().len(), 6);
        assert_eq!(found.asymmetric_atoms().len(), 2);
        assert_close!(found.conventional_lattice().params().lengths(), [4.594, 4.594, 2.959]);
        assert_invariant(&found);
    }

    #[test]
    fn body_centered() {
        let lattice = Lattice::cubic(3.3);
        let atoms = atoms(7, &[[0.0, 0.0, 0.0], [0.5, 0.5, 0.5]]);
        let found = find_space_group(&lattice, &atoms, 1e-5).unwrap();
        assert_eq!(found.number(), 229);
        assert_eq!(found.setting().centering(), Centering::I);
        assert_eq!(found.conventional_atoms().len(), 2);
        assert_eq!(found.asymmetric_atoms().len(), 1);
        assert_close!(rel=1e-9, found.reduced_lattice().volume(), 3.3f64.powi(3) / 2.0);
    }

    #[test]
    fn rhombohedral() {
        let lattice = CellParams::from_degrees([5.0; 3], [70.0; 3]).to_lattice().unwrap();
        let atoms = atoms(0, &[[0.0; 3]]);
        let found = find_space_group(&lattice, &atoms, 1e-5).unwrap();
        assert_eq!(found.number(), 166);
        assert_eq!(found.conventional_atoms().len(), 3);
        assert_close!(found.conventional_lattice().params().angles_degrees(), [90.0, 90.0, 120.0]);
        assert_close!(rel=1e-9, found.conventional_lattice().volume(), 3.0 * lattice.volume());
        assert_invariant(&found);

        // back to one atom in the rhombohedral cell
        let primitive = find_primitive(&lattice, &atoms, 1e-5).unwrap();
        assert_eq!(primitive.num_atoms(), 1);
        assert_close!(rel=1e-9, primitive.lattice().volume(), lattice.volume());
    }

    #[test]
    fn pyrite_is_pa3() {
        let x = 0.385;
        let mut all = atoms(0, &[[0.0, 0.0, 0.0], [0.5, 0.0, 0.5], [0.0, 0.5, 0.5], [0.5, 0.5, 0.0]]);
        all.extend(atoms(1, &[
            [x, x, x], [0.5 - x, 1.0 - x, 0.5 + x], [1.0 - x, 0.5 + x, 0.5 - x], [0.5 + x, 0.5 - x, 1.0 - x],
            [1.0 - x, 1.0 - x, 1.0 - x], [0.5 + x, x, 0.5 - x], [x, 0.5 - x, 0.5 + x], [0.5 - x, 0.5 + x, x],
        ]));
        let lattice = Lattice::cubic(5.42);

        let found = find_space_group(&lattice, &all, 1e-5).unwrap();
        assert_eq!(found.number(), 205);
        assert_eq!(found.hall_number(), 501);
        assert_eq!(found.conventional_atoms().len(), 12);
        assert_eq!(found.asymmetric_atoms().len(), 2);
        assert_invariant(&found);

        // same answer wherever the origin starts
        let shifted: Vec<_> = all.iter().map(|a| Atom::new(fract(&(a.frac + V3([0.1; 3]))), a.kind)).collect();
        let found = find_space_group(&lattice, &shifted, 1e-5).unwrap();
        assert_eq!(found.number(), 205);
        assert_invariant(&found);
    }

    #[test]
    fn supercell_and_origin() {
        let lattice = Lattice::orthorhombic(8.0, 4.0, 4.0);
        let atoms = atoms(0, &[[0.0, 0.0, 0.0], [0.5, 0.0, 0.0]]);
        let found = find_space_group(&lattice, &atoms, 1e-5).unwrap();
        assert_eq!(found.number(), 221);
        assert_eq!(found.conventional_atoms().len(), 1);
        assert_close!(found.conventional_lattice().params().lengths(), [4.0, 4.0, 4.0]);

        // a lone atom off the origin is moved onto it
        let atoms = [Atom::new(V3([0.13, 0.27, 0.41]), 0)];
        let found = find_space_group(&Lattice::cubic(4.0), &atoms, 1e-5).unwrap();
        assert_eq!(found.number(), 221);
        assert_close!(abs=1e-9, crate::periodic_sqdist(&found.conventional_atoms()[0].frac, &V3::zero()), 0.0);
    }

    #[test]
    fn low_symmetry() {
        let lattice = CellParams::from_degrees([3.0, 4.0, 5.0], [90.0, 100.0, 90.0]).to_lattice().unwrap();
        let atoms_mono = {
            let mut v = atoms(0, &[[0.0; 3]]);
            v.extend(atoms(1, &[[0.2, 0.0, 0.3]]));
            v
        };
        let found = find_space_group(&lattice, &atoms_mono, 1e-5).unwrap();
        assert_eq!(found.number(), 6);
        assert_close!(found.conventional_lattice().params().angles_degrees(), [90.0, 100.0, 90.0]);
        assert_invariant(&found);

        let lattice = CellParams::from_degrees([3.0, 4.0, 5.0], [80.0, 85.0, 95.0]).to_lattice().unwrap();
        let mut atoms_tri = atoms(0, &[[0.1, 0.2, 0.3]]);
        atoms_tri.extend(atoms(1, &[[0.5, 0.3, 0.7]]));
        let found = find_space_group(&lattice, &atoms_tri, 1e-5).unwrap();
        assert_eq!(found.number(), 1);
        assert_eq!(found.asymmetric_atoms().len(), 2);
        assert_close!(rel=1e-9, found.conventional_lattice().volume(), lattice.volume());
    }

    #[test]
    fn wurtzite() {
        let lattice = CellParams::from_degrees([3.25, 3.25, 5.2], [90.0, 90.0, 120.0]).to_lattice().unwrap();
        let mut all = atoms(0, &[[1.0 / 3.0, 2.0 / 3.0, 0.0], [2.0 / 3.0, 1.0 / 3.0, 0.5]]);
        all.extend(atoms(1, &[[1.0 / 3.0, 2.0 / 3.0, 0.382], [2.0 / 3.0, 1.0 / 3.0, 0.882]]));
        let found = find_space_group(&lattice, &all, 1e-5).unwrap();
        assert_eq!(found.number(), 186);
        assert_eq!(found.asymmetric_atoms().len(), 2);
        assert_invariant(&found);
    }

    #[test]
    fn asymmetric_unit_regenerates_structure() {
        let (lattice, atoms) = rock_salt();
        let found = find_space_group(&lattice, &atoms, 1e-5).unwrap();

        let mut regenerated: Vec<Atom> = vec![];
        for atom in found.asymmetric_atoms() {
            for op in found.setting().operations() {
                let frac = fract(&op.transform(&atom.frac));
                if !regenerated.iter().any(|a| crate::periodic_sqdist(&a.frac, &frac) < 1e-8) {
                    regenerated.push(Atom::new(frac, atom.kind));
                }
            }
        }
        assert_eq!(regenerated.len(), found.conventional_atoms().len());
        for atom in &regenerated {
            assert!(found.conventional_atoms().iter().any(|other| {
                other.kind == atom.kind && crate::periodic_sqdist(&other.frac, &atom.frac) < 1e-8
            }));
        }
    }

    #[test]
    fn niggli_cell() {
        let (lattice, atoms) = rock_salt();
        let niggli = find_niggli(&lattice, &atoms, 1e-5).unwrap();
        assert_eq!(niggli.num_atoms(), 2);
        assert!(crate::is_niggli(niggli.lattice(), 1e-5));
        assert_close!(rel=1e-9, niggli.lattice().volume(), 5.6f64.powi(3) / 4.0);
    }

    #[test]
    fn nothing_to_find() {
        assert!(find_space_group(&Lattice::eye(), &[], 1e-5).is_none());
        assert!(find_primitive(&Lattice::eye(), &[], 1e-5).is_none());
    }
}
