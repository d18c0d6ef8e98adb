use crate::{Atom, Lattice, SeitzOp};
use crate::cell::atoms::fract;

use crysym_array_types::{V3, sqnorm};

/// Squared distance between two fractional positions under the
/// minimum image convention, measured in fractional units.
pub fn periodic_sqdist(a: &V3, b: &V3) -> f64
{
    let d = (a - b).map(|x| {
        let x = x.abs();
        x - (x + 0.5).floor()
    });
    sqnorm(&d)
}

/// Test whether an operator maps every atom onto an atom of the same kind.
pub fn all_overlap(op: &SeitzOp, atoms: &[Atom], precision: f64) -> bool
{
    let sq_prec = precision * precision;
    atoms.iter().all(|atom| {
        let image = op.transform(&atom.frac);
        atoms.iter().any(|other| {
            other.kind == atom.kind && periodic_sqdist(&image, &other.frac) < sq_prec
        })
    })
}

/// Re-express atoms in another cell of the same lattice (or a sublattice),
/// dropping any atoms that become duplicates.
///
/// The first of each group of duplicates is kept.
pub fn trim(atoms: &[Atom], from: &Lattice, to: &Lattice, precision: f64) -> Vec<Atom>
{
    let sq_prec = precision * precision;
    let transform = from.matrix() * to.inverse_matrix();

    let mut out: Vec<Atom> = vec![];
    for atom in atoms {
        let frac = fract(&(&atom.frac * &transform));
        if !out.iter().any(|kept| periodic_sqdist(&kept.frac, &frac) < sq_prec) {
            out.push(Atom::new(frac, atom.kind));
        }
    }
    out
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;
    use crate::Rot;

    #[test]
    fn minimum_image() {
        assert_close!(periodic_sqdist(&V3([0.05, 0.0, 0.0]), &V3([0.95, 0.0, 0.0])), 0.01);
        assert_close!(periodic_sqdist(&V3([0.0, 0.0, 0.0]), &V3([0.5, 0.5, 0.0])), 0.5);
        assert_close!(abs=1e-12, periodic_sqdist(&V3([0.3, 0.2, 0.1]), &V3([2.3, -1.8, 0.1])), 0.0);
    }

    #[test]
    fn overlap_respects_kinds() {
        let atoms = vec![
            Atom::new(V3([0.0, 0.0, 0.0]), 0),
            Atom::new(V3([0.5, 0.5, 0.5]), 1),
        ];
        let shift = SeitzOp::new(Rot::eye(), V3([0.5, 0.5, 0.5]));
        assert!(!all_overlap(&shift, &atoms, 1e-5));

        let inversion = SeitzOp::new(Rot::from(&[[-1, 0, 0], [0, -1, 0], [0, 0, -1]]), V3::zero());
        assert!(all_overlap(&inversion, &atoms, 1e-5));
    }

    #[test]
    fn trim_into_halved_cell() {
        let big = Lattice::orthorhombic(2.0, 1.0, 1.0);
        let small = Lattice::cubic(1.0);
        let atoms = vec![
            Atom::new(V3([0.0, 0.0, 0.0]), 0),
            Atom::new(V3([0.5, 0.0, 0.0]), 0),
            Atom::new(V3([0.25, 0.5, 0.5]), 1),
            Atom::new(V3([0.75 + 1e-8, 0.5, 0.5]), 1),
        ];
        let trimmed = trim(&atoms, &big, &small, 1e-5);
        assert_eq!(trimmed.len(), 2);
        assert_eq!(trimmed[0].kind, 0);
        assert_close!(trimmed[1].frac.0, [0.5, 0.5, 0.5]);
    }
}
