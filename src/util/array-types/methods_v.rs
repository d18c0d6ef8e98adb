use crate::traits::{Semiring, Ring, Field};
use crate::types::*;

/// Construct a fixed-size vector from a function on indices.
#[inline(always)]
pub fn from_fn<X, F>(mut f: F) -> V3<X>
where F: FnMut(usize) -> X,
{ V3([f(0), f(1), f(2)]) }

/// Get a zero vector.
#[inline(always)]
pub fn zero<X: Semiring>() -> V3<X>
{ V3([X::zero(); 3]) }

/// Inner product of two vectors.
#[inline]
pub fn dot<X: Semiring>(a: &V3<X>, b: &V3<X>) -> X
{ a[0] * b[0] + a[1] * b[1] + a[2] * b[2] }

/// Squared norm of a vector.
#[inline]
pub fn sqnorm<X: Semiring>(a: &V3<X>) -> X
{ dot(a, a) }

/// Cross product.
#[inline]
pub fn cross<X: Ring>(a: &V3<X>, b: &V3<X>) -> V3<X>
{ a.cross(b) }

impl<X> V3<X> {
    /// Construct a fixed-size vector from a function on indices.
    ///
    /// This is also available as the free function `vee::from_fn`;
    /// this static method just provides an easy way to supply a type hint.
    #[inline(always)]
    pub fn from_fn<F>(f: F) -> Self
    where F: FnMut(usize) -> X,
    { from_fn(f) }

    /// Apply a function to each element.
    #[inline]
    pub fn map<B, F>(self, mut f: F) -> V3<B>
    where F: FnMut(X) -> B,
    {
        let V3([a, b, c]) = self;
        V3([f(a), f(b), f(c)])
    }

    /// Apply a fallible function to each element.
    #[inline]
    pub fn try_map<E, B, F>(self, mut f: F) -> Result<V3<B>, E>
    where F: FnMut(X) -> Result<B, E>,
    {
        let V3([a, b, c]) = self;
        Ok(V3([f(a)?, f(b)?, f(c)?]))
    }
}

impl<X: Semiring> V3<X> {
    /// Get a zero vector.
    #[inline(always)]
    pub fn zero() -> Self
    { zero() }

    /// Get the inner product of two vectors.
    ///
    /// It is recommended you write this as `V3::dot(a, b)`, rather than `a.dot(b)`.
    #[inline(always)]
    pub fn dot(&self, other: &Self) -> X
    { dot(self, other) }

    /// Get the vector's squared magnitude.
    #[inline(always)]
    pub fn sqnorm(&self) -> X
    { sqnorm(self) }

    /// Elementwise multiplication.
    #[inline]
    pub fn mul_diag(&self, other: &Self) -> Self
    { from_fn(|k| self[k] * other[k]) }
}

impl<X: Ring> V3<X> {
    /// Cross-product. Only defined on 3-dimensional vectors.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        V3([
            self[1] * other[2] - self[2] * other[1],
            self[2] * other[0] - self[0] * other[2],
            self[0] * other[1] - self[1] * other[0],
        ])
    }
}

impl<X: Field> V3<X> {
    /// Get the vector's magnitude.
    #[inline(always)]
    pub fn norm(&self) -> X
    { sqnorm(self).sqrt() }

    /// Normalize the vector.
    #[inline]
    pub fn unit(&self) -> Self
    { *self / self.norm() }
}

impl<X: Semiring> V3<X> {
    /// Get the `i`th unit vector.
    #[inline]
    pub fn axis_unit(i: usize) -> Self {
        assert!(i < 3, "axis_unit: index out of range");
        from_fn(|k| if k == i { X::one() } else { X::zero() })
    }
}

#[cfg(test)]
#[deny(dead_code)]
mod tests {
    use super::*;

    #[test]
    fn cross_is_right_handed() {
        let x = V3([1, 0, 0]);
        let y = V3([0, 1, 0]);
        assert_eq!(cross(&x, &y), V3([0, 0, 1]));
        assert_eq!(cross(&y, &x), V3([0, 0, -1]));
    }

    #[test]
    fn norms() {
        let v = V3([3.0, 4.0, 12.0]);
        assert_eq!(v.sqnorm(), 169.0);
        assert_eq!(v.norm(), 13.0);
        assert_eq!(V3::axis_unit(1), V3([0, 1, 0]));
    }
}
