//! Asymmetric units.
//!
//! Each Hall setting has a "brick" of fractional space; a structure is reduced
//! to one representative per orbit, chosen inside the brick where possible.

use crate::{Atom, SeitzOp};
use crate::algo::overlap::periodic_sqdist;
use crate::cell::atoms::fract;
use super::catalog::Setting;

use crysym_array_types::V3;

use std::collections::HashMap;

/// An interval of one fractional coordinate.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct Span {
    pub(crate) lo: f64,
    pub(crate) hi: f64,
    pub(crate) lo_closed: bool,
    pub(crate) hi_closed: bool,
}

/// `span!(closed 0.0, 1.0/2.0, open)` is the interval `[0, 1/2)`.
macro_rules! span {
    (@closed closed) => { true };
    (@closed open) => { false };
    ($lo_end:ident $lo:expr, $hi:expr, $hi_end:ident) => {
        Span {
            lo: $lo,
            hi: $hi,
            lo_closed: span!(@closed $lo_end),
            hi_closed: span!(@closed $hi_end),
        }
    };
}

impl Span {
    /// Closed ends are widened by `tol`, open ends narrowed by it.
    fn contains(&self, x: f64, tol: f64) -> bool
    {
        let above = match self.lo_closed {
            true => x >= self.lo - tol,
            false => x > self.lo + tol,
        };
        let below = match self.hi_closed {
            true => x <= self.hi + tol,
            false => x < self.hi - tol,
        };
        above && below
    }
}

lazy_static! {
    static ref BRICK_INDEX: HashMap<u16, &'static [&'static [Span]; 3]> = {
        let mut map = HashMap::new();
        for &(halls, ref brick) in super::data::BRICKS {
            for &hall in halls {
                map.insert(hall, brick);
            }
        }
        map
    };
}

/// Test whether a fractional point lies in the asymmetric unit of a Hall setting.
///
/// The point is first reduced into the unit cell. Hall numbers without
/// a recorded brick accept every point.
pub fn is_inside(hall: u16, point: &V3, tol: f64) -> bool
{
    let brick = match BRICK_INDEX.get(&hall) {
        Some(brick) => brick,
        None => return true,
    };

    let point = fract(point);
    (0..3).all(|k| {
        let x = point[k];
        // bricks may extend below zero, and a closed end at 1 must accept 0
        brick[k].iter().any(|span| {
            span.contains(x, tol) || span.contains(x - 1.0, tol) || span.contains(x + 1.0, tol)
        })
    })
}

/// Keep one atom per symmetry orbit.
///
/// `atoms` are in the setting's own basis and origin. Each retained atom is
/// the first image (under the setting's operations) that lands in the
/// asymmetric unit, or the atom itself if none does.
pub fn asymmetric_atoms(setting: &Setting, atoms: &[Atom], precision: f64) -> Vec<Atom>
{
    let ops: Vec<SeitzOp> = setting.operations().iter().map(|op| op.to_seitz()).collect();
    let sq_prec = precision * precision;

    let mut kept: Vec<Atom> = vec![];
    for atom in atoms {
        let images: Vec<V3> = ops.iter().map(|op| fract(&op.transform(&atom.frac))).collect();

        let seen = kept.iter().any(|other| {
            other.kind == atom.kind
                && images.iter().any(|image| periodic_sqdist(image, &other.frac) < sq_prec)
        });
        if seen {
            continue;
        }

        let frac = images.iter()
            .find(|image| is_inside(setting.hall_number(), image, precision))
            .cloned()
            .unwrap_or_else(|| fract(&atom.frac));
        kept.push(Atom::new(frac, atom.kind));
    }
    kept
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;
    use crate::spacegroup::catalog::{setting, setting_of_hall};

    #[test]
    fn span_ends() {
        let half_open = span!(closed 0.0, 1.0/2.0, open);
        assert!(half_open.contains(0.0, 0.0));
        assert!(!half_open.contains(0.5, 0.0));
        assert!(half_open.contains(0.25, 0.0));

        let open = span!(open 0.0, 1.0/2.0, closed);
        assert!(!open.contains(0.0, 0.0));
        assert!(open.contains(0.5, 0.0));
        assert!(open.contains(0.5 + 1e-9, 1e-6));
    }

    #[test]
    fn every_hall_number_has_a_brick() {
        for hall in 1..=530 {
            assert!(BRICK_INDEX.contains_key(&hall), "{}", hall);
        }
        // P 1 accepts everything
        assert!(is_inside(1, &V3([0.9, 0.9, 0.9]), 0.0));
        assert!(is_inside(0, &V3([0.9, 0.9, 0.9]), 0.0));
    }

    #[test]
    fn inversion_halves_the_cell() {
        // P -1 keeps 0 <= y <= 1/2
        assert!(is_inside(2, &V3([0.7, 0.3, 0.9]), 1e-5));
        assert!(!is_inside(2, &V3([0.7, 0.7, 0.9]), 1e-5));
        // points are reduced into the cell first
        assert!(is_inside(2, &V3([0.7, -0.7, 0.9]), 1e-5));
    }

    #[test]
    fn upper_end_at_one_accepts_zero() {
        // P 6/m m m keeps 2/3 <= y <= 1
        assert!(is_inside(485, &V3([0.0, 0.0, 0.0]), 1e-5));
        assert!(is_inside(485, &V3([0.0, 1.0, 0.0]), 1e-5));
        assert!(is_inside(485, &V3([0.0, 1.0 - 1e-9, 0.0]), 1e-5));
        // R -3 in hexagonal axes keeps 5/6 <= y <= 1
        assert!(is_inside(436, &V3([0.0, 0.0, 0.0]), 1e-5));
        assert!(!is_inside(436, &V3([0.0, 0.5, 0.0]), 1e-5));
    }

    #[test]
    fn kept_atoms_are_inside() {
        let points = [
            V3([0.0, 0.0, 0.0]),
            V3([0.0, 0.0, 0.5]),
            V3([0.5, 0.5, 0.5]),
            V3([0.25, 0.25, 0.25]),
            V3([0.125, 0.125, 0.125]),
            V3([1.0 / 3.0, 2.0 / 3.0, 0.25]),
            V3([0.1234, 0.3456, 0.2789]),
        ];
        for setting in (1..=530).filter_map(setting_of_hall) {
            for point in &points {
                let atoms: Vec<Atom> = {
                    setting.operations().iter()
                        .map(|op| Atom::new(fract(&op.to_seitz().transform(point)), 0))
                        .collect()
                };
                let asym = asymmetric_atoms(setting, &atoms, 1e-5);
                assert_eq!(asym.len(), 1, "{} {:?}", setting.hall_symbol(), point);
                assert!(
                    is_inside(setting.hall_number(), &asym[0].frac, 1e-5),
                    "{} {:?} -> {:?}", setting.hall_symbol(), point, asym[0].frac,
                );
            }
        }
    }

    #[test]
    fn orbits_are_collapsed() {
        let p_1bar = setting(2);
        let atoms = vec![
            Atom::new(V3([0.1, 0.8, 0.3]), 0),
            Atom::new(V3([0.9, 0.2, 0.7]), 0),
            Atom::new(V3([0.0, 0.0, 0.0]), 1),
        ];
        let asym = asymmetric_atoms(p_1bar, &atoms, 1e-5);
        assert_eq!(asym.len(), 2);
        // the representative of the first orbit is the inverted image
        assert_close!(asym[0].frac.0, [0.9, 0.2, 0.7]);
        assert_eq!(asym[1].kind, 1);
    }
}
