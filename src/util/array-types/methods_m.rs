use crate::traits::{Semiring, Ring, Field};
use crate::types::*;
use crate::methods_v::dot;

/// Construct a matrix from a function on (row, column) indices.
#[inline]
pub fn from_fn<X, F>(mut f: F) -> M33<X>
where F: FnMut(usize, usize) -> X,
{
    M3([
        V3([f(0, 0), f(0, 1), f(0, 2)]),
        V3([f(1, 0), f(1, 1), f(1, 2)]),
        V3([f(2, 0), f(2, 1), f(2, 2)]),
    ])
}

/// Construct a matrix from a nested array of rows.
#[inline(always)]
pub fn from_array<X>(arr: [[X; 3]; 3]) -> M33<X> {
    let [a, b, c] = arr;
    M3([V3(a), V3(b), V3(c)])
}

/// Identity matrix.
#[inline]
pub fn eye<X: Semiring>() -> M33<X>
{ from_fn(|r, c| if r == c { X::one() } else { X::zero() }) }

/// Zero matrix.
#[inline]
pub fn zero<X: Semiring>() -> M33<X>
{ from_fn(|_, _| X::zero()) }

/// Matrix inverse.
///
/// The input is assumed to be nonsingular; a singular input produces
/// non-finite elements.
#[inline]
pub fn inv<X: Field>(m: &M33<X>) -> M33<X>
{ m.inv() }

impl<X> M33<X> {
    /// Construct a matrix from a function on (row, column) indices.
    #[inline(always)]
    pub fn from_fn<F>(f: F) -> Self
    where F: FnMut(usize, usize) -> X,
    { from_fn(f) }

    /// Apply a function to each element.
    #[inline]
    pub fn map<B, F>(self, mut f: F) -> M33<B>
    where F: FnMut(X) -> B,
    {
        let M3([a, b, c]) = self;
        M3([a.map(&mut f), b.map(&mut f), c.map(&mut f)])
    }

    /// Apply a fallible function to each element.
    #[inline]
    pub fn try_map<E, B, F>(self, mut f: F) -> Result<M33<B>, E>
    where F: FnMut(X) -> Result<B, E>,
    {
        let M3([a, b, c]) = self;
        Ok(M3([a.try_map(&mut f)?, b.try_map(&mut f)?, c.try_map(&mut f)?]))
    }

    /// Unwrap into a nested array of rows.
    #[inline]
    pub fn into_array(self) -> [[X; 3]; 3] {
        let M3([V3(a), V3(b), V3(c)]) = self;
        [a, b, c]
    }
}

impl<X: Copy> M33<X> {
    /// Matrix transpose.
    #[inline]
    pub fn t(&self) -> Self
    { from_fn(|r, c| self[c][r]) }

    /// Get a column as a vector.
    #[inline]
    pub fn col(&self, c: usize) -> V3<X>
    { V3([self[0][c], self[1][c], self[2][c]]) }

    /// Build a matrix from its three columns.
    #[inline]
    pub fn from_cols(cols: [V3<X>; 3]) -> Self
    { from_fn(|r, c| cols[c][r]) }
}

impl<X: Semiring> M33<X> {
    /// Identity matrix.
    #[inline(always)]
    pub fn eye() -> Self
    { eye() }

    /// Zero matrix.
    #[inline(always)]
    pub fn zero() -> Self
    { zero() }

    /// Sum of the diagonal.
    #[inline]
    pub fn trace(&self) -> X
    { self[0][0] + self[1][1] + self[2][2] }
}

impl<X: Ring> M33<X> {
    /// Matrix determinant.
    pub fn det(&self) -> X {
        let [
            [a0, a1, a2],
            [b0, b1, b2],
            [c0, c1, c2],
        ] = self.into_array();

        X::zero()
        + a0 * b1 * c2
        + a1 * b2 * c0
        + a2 * b0 * c1
        - a0 * b2 * c1
        - a1 * b0 * c2
        - a2 * b1 * c0
    }

    /// Transposed cofactor matrix.
    ///
    /// `m * m.adjugate() == m.det() * I`, which makes this the
    /// division-free part of an inverse for integer matrices.
    pub fn adjugate(&self) -> Self {
        let cofactors: M33<X> = from_fn(|r, c|
            X::zero()
            + self[(r+1) % 3][(c+1) % 3] * self[(r+2) % 3][(c+2) % 3]
            - self[(r+1) % 3][(c+2) % 3] * self[(r+2) % 3][(c+1) % 3]
        );
        cofactors.t()
    }
}

impl<X: Field> M33<X> {
    /// Matrix inverse.
    pub fn inv(&self) -> Self {
        let adj = self.adjugate();
        let det = dot(&self[0], &adj.col(0));
        let rdet = X::one() / det;
        adj * rdet
    }
}

#[cfg(test)]
#[deny(dead_code)]
mod tests {
    use super::*;

    #[test]
    fn det_and_adjugate() {
        let m = from_array([[2, 1, 0], [0, 1, 3], [1, 0, 1]]);
        assert_eq!(m.det(), 5);
        assert_eq!(m * m.adjugate(), eye::<i32>() * 5);
    }

    #[test]
    fn inverse() {
        let m = from_array([[2.0f64, 1.0, 0.0], [0.0, 1.0, 3.0], [1.0, 0.0, 1.0]]);
        let prod = m * m.inv();
        for r in 0..3 {
            for c in 0..3 {
                let expected = if r == c { 1.0 } else { 0.0 };
                assert!((prod[r][c] - expected).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn row_and_column_products() {
        let m = from_array([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
        let v = V3([1, 0, -1]);
        assert_eq!(&m * &v, V3([-2, -2, -2]));
        assert_eq!(&v * &m, V3([-6, -6, -6]));
        assert_eq!(M33::from_cols([m.col(0), m.col(1), m.col(2)]), m);
        assert_eq!(m.t().t(), m);
    }
}
