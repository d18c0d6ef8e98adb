use crate::IntPrecisionError;
use crate::util::Tol;

use crysym_array_types::{V3, M33, mat};
use num_integer::Integer;

// NOTE: All operators in this module act on *column* vectors of
//       fractional coordinates; `x' = R x + t`.
//
//       Space group operators only have meaning relative to a specific cell.
//       Changing the cell requires conjugating them by the change of basis.

/// A point group operation in fractional coordinates.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Rot {
    /// Invariants:
    ///  - `abs(det(m)) == 1`
    m: M33<i32>,
}

/// The translation part of a spacegroup operation.
///
/// This always has coordinates that are multiples of `1/12`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct FracTrans (
    /// This is the vector times 12.
    ///
    /// Invariants:
    ///  - elements are reduced into the range `0 <= x < 12`.
    V3<i32>,
);

/// A spacegroup operation with an exact translation, as generated
/// from a Hall symbol.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct FracOp {
    rot: Rot,
    trans: FracTrans,
}

/// A spacegroup operation with a floating point translation, as found
/// in a structure.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SeitzOp {
    pub rot: Rot,
    pub trans: V3,
}

impl Default for Rot {
    fn default() -> Self
    { Self::eye() }
}

impl Default for FracTrans {
    fn default() -> Self
    { Self::eye() }
}

impl Default for FracOp {
    fn default() -> Self
    { Self::eye() }
}

impl From<Rot> for FracOp {
    fn from(rot: Rot) -> Self
    { FracOp::new(&rot, &FracTrans::eye()) }
}

impl From<FracTrans> for FracOp {
    fn from(trans: FracTrans) -> Self
    { FracOp::new(&Rot::eye(), &trans) }
}

//-----------------------------------------------

impl Rot {
    pub fn eye() -> Self
    { Rot { m: mat::eye() } }

    /// Construct from a matrix acting on column vectors.
    ///
    /// # Panics
    ///
    /// Panics if the determinant is not `±1`.
    pub fn new(m: &M33<i32>) -> Rot
    {
        assert_eq!(m.det().abs(), 1, "not a rotation: {:?}", m);
        Rot { m: *m }
    }

    /// Construct from a matrix, checking that it is unimodular.
    pub fn try_new(m: &M33<i32>) -> Option<Rot>
    { match m.det().abs() {
        1 => Some(Rot { m: *m }),
        _ => None,
    }}

    pub fn matrix(&self) -> &M33<i32>
    { &self.m }

    pub fn float(&self) -> M33
    { self.m.map(f64::from) }

    pub fn det(&self) -> i32
    { self.m.det() }

    pub fn trace(&self) -> i32
    { self.m.trace() }

    /// `-R` if `R` is improper, otherwise `R`.
    pub fn proper(&self) -> Rot
    { match self.det() {
        1 => *self,
        _ => Rot { m: -self.m },
    }}

    pub fn is_eye(&self) -> bool
    { self.m == mat::eye() }

    /// Flipped group operator.
    ///
    /// `a.then(b) == b.of(a)`.  This is the order in which the
    /// operators are applied to a point.
    pub fn then(&self, other: &Rot) -> Rot
    { Rot { m: &other.m * &self.m } }

    /// Conventional group operator.
    pub fn of(&self, other: &Rot) -> Rot
    { other.then(self) }

    pub fn transform(&self, v: &V3) -> V3
    { &self.float() * v }

    pub fn transform_int(&self, v: &V3<i32>) -> V3<i32>
    { &self.m * v }

    /// Express the operator in a new basis whose vectors are the columns of `basis`.
    ///
    /// Computes `basis^-1 * R * basis`, which must be an integer matrix.
    pub fn change_basis(&self, basis: &M33, basis_inv: &M33) -> Result<Rot, IntPrecisionError>
    {
        let m = basis_inv * &(&self.float() * basis);
        let m = Tol(1e-6).unfloat_m33(&m)?;
        Ok(Rot::new(&m))
    }
}

impl<'a> From<&'a [[i32; 3]; 3]> for Rot {
    fn from(m: &'a [[i32; 3]; 3]) -> Self
    { Rot::new(&mat::from_array(*m)) }
}

//-----------------------------------------------

impl FracTrans {
    pub fn eye() -> Self
    { FracTrans(V3([0, 0, 0])) }

    /// Construct from numerators over 12, reducing them into `[0, 12)`.
    pub fn from_twelfths(v: V3<i32>) -> Self
    { FracTrans(v.map(|x| x.mod_floor(&12))) }

    pub fn from_floats(xs: &V3) -> Result<FracTrans, IntPrecisionError>
    { xs.try_map(|x| Tol(1e-4).unfloat(x * 12.0)).map(FracTrans::from_twelfths) }

    pub fn twelfths(&self) -> &V3<i32>
    { &self.0 }

    pub fn float(&self) -> V3
    { self.0.map(|x| f64::from(x) / 12f64) }
}

//-----------------------------------------------

impl FracOp {
    pub fn eye() -> Self
    { FracOp { rot: Rot::eye(), trans: FracTrans::eye() } }

    pub fn new(rot: &Rot, trans: &FracTrans) -> Self
    { FracOp { rot: *rot, trans: *trans } }

    pub fn rot(&self) -> &Rot
    { &self.rot }

    pub fn trans(&self) -> &FracTrans
    { &self.trans }

    pub fn to_seitz(&self) -> SeitzOp
    { SeitzOp { rot: self.rot, trans: self.trans.float() } }

    /// Flipped group operator.
    ///
    /// `a.then(b) == b.of(a)`.
    pub fn then(&self, other: &FracOp) -> FracOp
    {
        let rot = self.rot.then(&other.rot);
        // reduce the translation for a unique representation
        let trans = FracTrans::from_twelfths(
            other.rot.transform_int(&self.trans.0) + other.trans.0
        );
        FracOp { rot, trans }
    }

    /// Conventional group operator.
    pub fn of(&self, other: &FracOp) -> FracOp
    { other.then(self) }

    pub fn transform(&self, v: &V3) -> V3
    { self.to_seitz().transform(v) }
}

//-----------------------------------------------

impl SeitzOp {
    pub fn new(rot: Rot, trans: V3) -> Self
    { SeitzOp { rot, trans } }

    pub fn eye() -> Self
    { SeitzOp { rot: Rot::eye(), trans: V3::zero() } }

    /// Flipped group operator.
    ///
    /// `a.then(b) == b.of(a)`.  The translation is not reduced.
    pub fn then(&self, other: &SeitzOp) -> SeitzOp
    { SeitzOp {
        rot: self.rot.then(&other.rot),
        trans: other.rot.transform(&self.trans) + other.trans,
    }}

    /// Conventional group operator.
    pub fn of(&self, other: &SeitzOp) -> SeitzOp
    { other.then(self) }

    pub fn transform(&self, v: &V3) -> V3
    { self.rot.transform(v) + self.trans }

    /// Express the operator in a new basis whose vectors are the columns of `basis`.
    pub fn change_basis(&self, basis: &M33, basis_inv: &M33) -> Result<SeitzOp, IntPrecisionError>
    {Ok(SeitzOp {
        rot: self.rot.change_basis(basis, basis_inv)?,
        trans: basis_inv * &self.trans,
    })}
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;

    #[test]
    fn rot_transform()
    {
        let r = Rot::from(&[
            [0, -1, 0],
            [1,  0, 0],
            [0,  0, 1],
        ]);
        assert_eq!(r.transform(&V3([1.0, 5.0, 7.0])), V3([-5.0, 1.0, 7.0]));
        assert_eq!(r.det(), 1);
        assert_eq!(r.trace(), 1);
    }

    #[test]
    fn two_transform()
    {
        // two operations that don't commute
        let xy = Rot::from(&[
            [0, 1, 0],
            [1, 0, 0],
            [0, 0, 1],
        ]);
        let zx = Rot::from(&[
            [0, 0, 1],
            [0, 1, 0],
            [1, 0, 0],
        ]);
        let xyzx = Rot::from(&[
            [0, 0, 1],
            [1, 0, 0],
            [0, 1, 0],
        ]);
        // a point that is sensitive to any permutations of the axes
        let point = V3([1., 2., 3.]);
        assert_eq!(xy.then(&zx), xyzx);
        assert_eq!(zx.of(&xy), xyzx);
        assert_eq!(
            zx.transform(&xy.transform(&point)),
            xyzx.transform(&point),
        );

        let t = FracTrans::eye();
        let xy = FracOp::new(&xy, &t);
        let zx = FracOp::new(&zx, &t);
        let xyzx = FracOp::new(&xyzx, &t);
        assert_eq!(xy.then(&zx), xyzx);
        assert_eq!(zx.of(&xy), xyzx);
        assert_eq!(
            zx.transform(&xy.transform(&point)),
            xyzx.transform(&point),
        );
    }

    #[test]
    fn symmop_mul()
    {
        let op = FracOp::new(
            &Rot::from(&[
                [ 0,  1, 0],
                [-1,  1, 0],
                [ 0,  0, 1],
            ]),
            &FracTrans::from_floats(&V3([1./3., 2./3., 0.0])).unwrap(),
        );
        let square = FracOp::new(
            &Rot::from(&[
                [-1, 1, 0],
                [-1, 0, 0],
                [ 0, 0, 1],
            ]),
            &FracTrans::from_floats(&V3([0., 0., 0.])).unwrap(),
        );

        assert_eq!(op.then(&op), square);
        assert_eq!(op.then(&op).then(&op), FracOp::eye());
    }

    #[test]
    fn seitz_matches_frac()
    {
        let a = FracOp::new(
            &Rot::from(&[[0, -1, 0], [1, 0, 0], [0, 0, 1]]),
            &FracTrans::from_twelfths(V3([0, 6, 3])),
        );
        let b = FracOp::new(
            &Rot::from(&[[-1, 0, 0], [0, -1, 0], [0, 0, -1]]),
            &FracTrans::from_twelfths(V3([-6, 0, 0])),
        );
        assert_eq!(b.trans().twelfths(), &V3([6, 0, 0]));

        let point = V3([0.1, 0.2, 0.3]);
        let seitz = a.to_seitz().then(&b.to_seitz());
        let frac = a.then(&b);
        assert_eq!(seitz.rot, *frac.rot());

        // equal modulo lattice translations
        let diff = seitz.transform(&point) - frac.transform(&point);
        for &x in &diff.0 {
            assert_close!(abs=1e-12, x, x.round());
        }
    }

    #[test]
    fn conjugation()
    {
        // fourfold about c, expressed in a cell with a and b swapped
        let r = Rot::from(&[[0, -1, 0], [1, 0, 0], [0, 0, 1]]);
        let swap = mat::from_array([[0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]]);
        let conj = r.change_basis(&swap, &swap).unwrap();
        assert_eq!(conj.matrix(), &mat::from_array([[0, 1, 0], [-1, 0, 0], [0, 0, 1]]));

        // a doubled cell in which the shear is no longer integral
        let double = mat::from_array([[2.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        let half = mat::from_array([[0.5, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        let shear = Rot::from(&[[1, 1, 0], [0, 1, 0], [0, 0, 1]]);
        assert!(shear.change_basis(&double, &half).is_err());
        assert!(shear.change_basis(&half, &double).is_ok());
    }
}
