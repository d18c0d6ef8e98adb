//! Matching found operations against the reference settings.
//!
//! Given the operations of a structure in a conventional cell, find a
//! reference setting whose generators coincide with some found operations
//! after a change of origin. The origin shift `s` solves
//!
//! ```text
//! (R - 1) s = t_found - t_ref   (mod 1)
//! ```
//!
//! for every generator simultaneously, which is an integer linear system
//! modulo one solved through the Smith normal form. The system is written in
//! a primitive cell so that centering translations do not enter it.

use crate::{Rot, SeitzOp};
use crate::cell::atoms::fract;
use crate::util::{Tol, float_m33, unimodular_inverse};
use super::axes::Centering;
use super::catalog::{Setting, catalog};
use super::point_group::{Holohedry, PointGroup};

use crysym_array_types::{V3, M33, inv};
use crysym_linalg::SmithDecomp;
use num_integer::Integer;

/// A reference setting matched to a structure.
#[derive(Debug, Clone)]
pub(crate) struct Match {
    pub setting: &'static Setting,
    /// Change of basis (columns) from the reference cell to the found conventional cell.
    pub basis: M33<i32>,
    /// Origin of the found cell, in fractional coordinates of the reference cell.
    pub origin: V3,
}

fn cols(a: [i32; 3], b: [i32; 3], c: [i32; 3]) -> M33<i32>
{ M33::from_cols([V3(a), V3(b), V3(c)]) }

fn candidate_bases(holohedry: Holohedry) -> Vec<M33<i32>>
{
    match holohedry {
        Holohedry::Monoclinic => vec![
            cols([1, 0, 0], [0, 1, 0], [0, 0, 1]),
            cols([-1, 0, -1], [0, 1, 0], [1, 0, 0]),
            cols([0, 0, 1], [0, 1, 0], [-1, 0, -1]),
            cols([0, 0, 1], [0, -1, 0], [1, 0, 0]),
            cols([-1, 0, -1], [0, -1, 0], [0, 0, 1]),
            cols([1, 0, 0], [0, -1, 0], [-1, 0, -1]),
        ],
        Holohedry::Orthorhombic => vec![
            cols([1, 0, 0], [0, 1, 0], [0, 0, 1]),
            cols([0, 1, 0], [0, 0, 1], [1, 0, 0]),
            cols([0, 0, 1], [1, 0, 0], [0, 1, 0]),
            cols([0, 1, 0], [1, 0, 0], [0, 0, -1]),
            cols([1, 0, 0], [0, 0, -1], [0, 1, 0]),
            cols([0, 0, -1], [0, 1, 0], [1, 0, 0]),
        ],
        _ => vec![M33::eye()],
    }
}

/// Find the first reference setting matching the operations.
///
/// `ops` are in the conventional cell and include centering copies.
pub(crate) fn match_space_group(
    point_group: PointGroup,
    centering: Centering,
    ops: &[SeitzOp],
    precision: f64,
) -> Option<Match>
{
    catalog().iter()
        .filter(|setting| setting.point_group() == point_group)
        .filter_map(|&setting| match_setting(setting, centering, ops, precision))
        .next()
}

pub(crate) fn match_setting(
    setting: &'static Setting,
    centering: Centering,
    ops: &[SeitzOp],
    precision: f64,
) -> Option<Match>
{
    let holohedry = setting.holohedry();
    for basis in candidate_bases(holohedry) {
        if let Some(origin) = origin_shift(setting, setting.centering(), centering, &basis, ops, precision) {
            return Some(Match { setting, basis, origin });
        }
    }

    // Pa-3 is found in a setting with a and c exchanged that the cubic
    // search does not try.
    if holohedry == Holohedry::Cubic && setting.hall_number() == 501 {
        let basis = cols([0, 0, 1], [0, -1, 0], [1, 0, 0]);
        if let Some(origin) = origin_shift(setting, Centering::P, centering, &basis, ops, precision) {
            return Some(Match { setting, basis, origin });
        }
    }

    trace!("no match for {} ({})", setting.hm_symbol(), setting.hall_symbol());
    None
}

fn origin_shift(
    setting: &Setting,
    setting_centering: Centering,
    centering: Centering,
    basis: &M33<i32>,
    ops: &[SeitzOp],
    precision: f64,
) -> Option<V3>
{
    let basis_inv = unimodular_inverse(basis)?;
    let basis_inv_f = float_m33(&basis_inv);

    // A, B and C are relabeled by where the centering vector lands in the new basis
    let mut transformed_centering = setting_centering;
    if let Centering::A | Centering::B | Centering::C = setting_centering {
        let v = (&basis_inv * &V3(setting_centering.twelfths()[0])).map(|x| x.mod_floor(&12));
        if v[0] == 0 { transformed_centering = Centering::A; }
        if v[1] == 0 { transformed_centering = Centering::B; }
        if v[2] == 0 { transformed_centering = Centering::C; }
    }
    if transformed_centering != centering {
        return None;
    }

    let to_prim = centering.to_primitive();
    let from_prim = inv(&to_prim);

    let mut rows: Vec<Vec<i64>> = vec![];
    let mut rhs: Vec<f64> = vec![];
    for gen in setting.generators() {
        let rot = Rot::try_new(&(&basis_inv * &(gen.rot().matrix() * basis)))?;
        let ref_trans = &basis_inv_f * &gen.trans().float();

        let found = ops.iter().find(|op| op.rot == rot)?;

        let prim_rot = &from_prim * &(&rot.float() * &to_prim);
        let prim_rot = Tol(1e-6).unfloat_m33(&prim_rot).ok()?;
        for row in &(prim_rot - M33::eye()).0 {
            rows.push(row.0.iter().map(|&x| i64::from(x)).collect());
        }
        rhs.extend(&fract(&(&from_prim * &(found.trans - ref_trans))).0);
    }
    while rows.len() < 9 {
        rows.push(vec![0; 3]);
        rhs.push(0.0);
    }

    let decomp = SmithDecomp::of(&rows);
    let x = decomp.solve_mod_one(&rhs, precision * 10.0 + 1e-6)?;
    let x = V3([x[0], x[1], x[2]]);
    Some(fract(&(&float_m33(basis) * &(&to_prim * &x))))
}
