use std::ops::{Mul, Div};
use std::sync::Arc;

use crysym_array_types::{V3, M33, M3, mat, inv};
use crysym_assert_close::{CheckClose, Tolerances, CheckCloseError};

use crate::cell::params::CellParams;

/// Defines a vector basis for periodic boundary conditions in three dimensions.
///
/// This is a linear transformation from "fractional" data to "cartesian" data,
/// together with a precomputed inverse.  Lattice vectors are the *rows* of the
/// matrix, so that a cartesian position is `frac * matrix`.
#[derive(Debug, Clone)]
pub struct Lattice {
    matrix: Arc<M33>,
    inverse: Arc<M33>,
}

// Manual impl that doesn't compare the inverse.
impl PartialEq<Lattice> for Lattice {
    fn eq(&self, other: &Lattice) -> bool {
        // deconstruct to get errors when new fields are added
        let Lattice { ref matrix, inverse: _ } = *self;
        matrix == &other.matrix
    }
}

impl Lattice {
    /// Create a lattice from a matrix where the rows are lattice vectors.
    #[inline]
    pub fn new(matrix: &M33) -> Self {
        let inverse = Arc::new(inv(matrix));
        let matrix = Arc::new(*matrix);
        Self { matrix, inverse }
    }

    #[inline(always)]
    pub fn from_vectors(vectors: &[V3; 3]) -> Self {
        Self::new(&M3(*vectors))
    }

    /// Matrix where lattice vectors are rows.
    #[inline]
    pub fn matrix(&self) -> &M33
    { &self.matrix }

    /// Get the (precomputed) inverse of the matrix where lattice vectors are rows.
    #[inline]
    pub fn inverse_matrix(&self) -> &M33
    { &self.inverse }

    #[inline]
    pub fn vectors(&self) -> &[V3; 3]
    { &self.matrix().0 }

    pub fn norms(&self) -> [f64; 3] {
        let v = self.vectors();
        [v[0].norm(), v[1].norm(), v[2].norm()]
    }

    pub fn sqnorms(&self) -> [f64; 3] {
        let v = self.vectors();
        [v[0].sqnorm(), v[1].sqnorm(), v[2].sqnorm()]
    }

    /// Get the (positive) volume of the lattice cell.
    pub fn volume(&self) -> f64
    { self.signed_volume().abs() }

    /// Determinant of the matrix. Negative for left-handed bases.
    pub fn signed_volume(&self) -> f64
    { self.matrix().det() }

    /// The metric tensor `L L^T`, the matrix of dot products between lattice vectors.
    pub fn metric(&self) -> M33
    { self.matrix() * &self.matrix().t() }

    /// Lengths and angles of the cell.
    pub fn params(&self) -> CellParams
    { CellParams::from_metric(&self.metric()) }

    /// Take an integer linear combination of the lattice vectors.
    ///
    /// The rows of `coeffs` describe the new vectors in terms of the old ones.
    pub fn linear_combination(&self, coeffs: &M33<i32>) -> Lattice
    { &coeffs.map(f64::from) * self }

    /// Express the cell in a new basis whose vectors are the *columns* of `basis`,
    /// written in terms of the current lattice vectors.
    ///
    /// This is the convention used for change-of-basis matrices acting on
    /// column vectors of fractional coordinates.
    pub fn change_basis(&self, basis: &M33) -> Lattice
    { &basis.t() * self }
}

/// Helper constructors
impl Lattice {
    /// The identity lattice.
    #[inline]
    pub fn eye() -> Self { Self::cubic(1.0) }

    /// A cubic lattice ((a, a, a), (90, 90, 90))
    #[inline]
    pub fn cubic(a: f64) -> Self { Self::orthorhombic(a, a, a) }

    /// An orthorhombic lattice ((a, b, c), (90, 90, 90))
    #[inline]
    pub fn orthorhombic(a: f64, b: f64, c: f64) -> Self
    { Self::from(&[[a, 0., 0.], [0., b, 0.], [0., 0., c]]) }

    /// Generate a random lattice.
    ///
    /// Elements are pulled from a uniform distribution of [-x, x].
    #[cfg(test)]
    pub fn random_uniform(max: f64) -> Self {
        Lattice::new(&M33::from_fn(|_, _| (::rand::random::<f64>() - 0.5) * 2.0 * max))
    }
}

/// Defaults to the identity matrix.
impl Default for Lattice {
    #[inline]
    fn default() -> Lattice { Lattice::eye() }
}

impl<'a> From<&'a [[f64; 3]; 3]> for Lattice {
    #[inline(always)]
    fn from(m: &'a [[f64; 3]; 3]) -> Self
    { Lattice::new(&mat::from_array(*m)) }
}

impl<'a, 'b> Mul<&'b Lattice> for &'a Lattice {
    type Output = Lattice;

    #[inline(always)]
    fn mul(self, other: &'b Lattice) -> Lattice {
        // Let the inverse be computed from scratch,
        // for sustained accuracy after many products
        self * other.matrix()
    }
}

impl<'a, 'b> Mul<&'b M33> for &'a Lattice {
    type Output = Lattice;

    fn mul(self, other: &'b M33) -> Lattice {
        Lattice::new(&(self.matrix() * other))
    }
}

impl<'a, 'b> Mul<&'b Lattice> for &'a M33 {
    type Output = Lattice;

    fn mul(self, other: &'b Lattice) -> Lattice {
        Lattice::new(&(self * other.matrix()))
    }
}

impl<'a, 'b> Mul<&'b Lattice> for &'a V3 {
    type Output = V3;

    fn mul(self, other: &'b Lattice) -> V3 {
        self * other.matrix()
    }
}

impl<'b> Mul<&'b Lattice> for V3 {
    type Output = V3;

    fn mul(self, other: &'b Lattice) -> V3 {
        self * other.matrix()
    }
}

impl<'a, 'b> Div<&'b Lattice> for &'a V3 {
    type Output = V3;

    fn div(self, other: &'b Lattice) -> V3 {
        self * other.inverse_matrix()
    }
}

impl<'b> Div<&'b Lattice> for V3 {
    type Output = V3;

    fn div(self, other: &'b Lattice) -> V3 {
        self * other.inverse_matrix()
    }
}

impl CheckClose for Lattice {
    fn check_close(&self, other: &Lattice, tol: Tolerances) -> Result<(), CheckCloseError> {
        self.matrix().check_close(other.matrix(), tol)
    }
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;

    #[test]
    fn get_inverse() {
        // matrix whose inverse should be able to be computed exactly
        // by any reasonable matrix inversion algorithm working on f64s
        let matrix = mat::from_array([
            [2.0, 2.0, 0.0],
            [0.0, 4.0, 0.0],
            [0.0, 0.0, 2.0],
        ]);
        let exact_inverse = mat::from_array([
            [0.5, -0.25, 0.0],
            [0.0,  0.25, 0.0],
            [0.0,   0.0, 0.5],
        ]);

        let lattice = Lattice::new(&matrix);
        assert_eq!(&matrix, lattice.matrix());
        assert_eq!(&exact_inverse, lattice.inverse_matrix());
        assert_ne!(&Lattice::eye(), &lattice);
    }

    #[test]
    fn multiplication_order()  {
        // matrices that don't commute
        let a = Lattice::from(&[
            [2.0, 2.0, 0.0],
            [0.0, 4.0, 0.0],
            [0.0, 0.0, 2.0],
        ]);
        let b = Lattice::from(&[
            [0.0, 1.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0],
        ]);

        assert_eq!(&a * &b, Lattice::from(&[
            [2.0, 2.0, 0.0],
            [4.0, 0.0, 0.0],
            [0.0, 0.0, 2.0],
        ]));
        assert_eq!(&b * &a,  Lattice::from(&[
            [0.0, 4.0, 0.0],
            [2.0, 2.0, 0.0],
            [0.0, 0.0, 2.0],
        ]));
    }

    #[test]
    fn metric_and_volume() {
        let lattice = Lattice::from(&[
            [2.0, 0.0, 0.0],
            [1.0, 3.0, 0.0],
            [0.0, 0.0, 4.0],
        ]);
        assert_close!(lattice.volume(), 24.0);
        assert_close!(lattice.metric(), mat::from_array([
            [4.0, 2.0, 0.0],
            [2.0, 10.0, 0.0],
            [0.0, 0.0, 16.0],
        ]));
    }

    #[test]
    fn change_basis_uses_columns() {
        let lattice = Lattice::orthorhombic(1.0, 2.0, 3.0);
        // new a = old a + old b; the others unchanged
        let basis = mat::from_array([
            [1.0, 0.0, 0.0],
            [1.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
        ]);
        assert_close!(lattice.change_basis(&basis), Lattice::from(&[
            [1.0, 2.0, 0.0],
            [0.0, 2.0, 0.0],
            [0.0, 0.0, 3.0],
        ]));
    }
}
