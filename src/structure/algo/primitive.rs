use crate::{Atom, Lattice, SeitzOp, Rot};
use crate::algo::overlap::all_overlap;
use crate::cell::atoms::{minority_kind, of_kind};

use crysym_array_types::{V3, M3, M33};

/// Translations (fractional, in the given cell) that map the structure onto itself.
///
/// Candidates are the differences between each minority atom and the first
/// one, so the zero vector is always included when `minority` is non-empty.
pub fn primitive_translations(minority: &[Atom], atoms: &[Atom], precision: f64) -> Vec<V3>
{
    let origin = match minority.first() {
        Some(atom) => atom.frac,
        None => return vec![],
    };

    minority.iter()
        .map(|atom| atom.frac - origin)
        .filter(|&t| all_overlap(&SeitzOp::new(Rot::eye(), t), atoms, precision))
        .collect()
}

/// Find the smallest cell that still reproduces the structure,
/// using the least common atom kind to generate candidate translations.
///
/// Returns the input lattice when no smaller cell exists.
pub fn find_primitive_cell(atoms: &[Atom], lattice: &Lattice, precision: f64) -> Lattice
{
    match minority_kind(atoms) {
        None => lattice.clone(),
        Some(kind) => find_primitive_cell_with_minority(&of_kind(atoms, kind), atoms, lattice, precision),
    }
}

pub(crate) fn find_primitive_cell_with_minority(
    minority: &[Atom],
    atoms: &[Atom],
    lattice: &Lattice,
    precision: f64,
) -> Lattice
{
    let mut vecs = primitive_translations(minority, atoms, precision);
    if vecs.is_empty() {
        return lattice.clone();
    }
    vecs.extend((0..3).map(V3::axis_unit));

    let n = vecs.len();
    if n <= 3 {
        return lattice.clone();
    }

    let full_volume = lattice.volume();
    // below this, a triple is treated as coplanar
    let noise_floor = 0.5 * full_volume / (n - 2) as f64;

    let mut best: Option<M33> = None;
    let mut best_volume = full_volume;
    for i in 0..n {
        for j in i + 1..n {
            for k in j + 1..n {
                let triple = M3([vecs[i], vecs[j], vecs[k]]);
                let volume = triple.det().abs() * full_volume;
                if volume <= noise_floor || volume >= best_volume - 1e-9 * full_volume {
                    continue;
                }
                best_volume = volume;
                best = Some(triple);

                // The number of translations in the cell matches; the triple must
                // generate the full sublattice, so snap it to exact fractions.
                if (full_volume / volume).round() as usize == n - 2 {
                    let inverse = triple.inv().map(f64::round);
                    debug!("primitive cell found early ({} translations)", n - 3);
                    return &inverse.inv() * lattice;
                }
            }
        }
    }

    match best {
        None => lattice.clone(),
        Some(triple) => &triple * lattice,
    }
}
