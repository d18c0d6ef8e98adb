//! Approximate equality for the floating point data of crystal structures.
//!
//! `assert_close!` compares scalars, coordinate vectors, lattice matrices
//! and lists of these, and reports where the first mismatch was found.
//!
//! ```ignore
//! assert_close!(lattice.volume(), 24.0);
//! assert_close!(rel=1e-6, params.lengths(), [4.0, 4.0, 6.0]);
//! assert_close!(abs=1e-12, atom.frac.0, [0.0; 3], "atom {}", i);
//! ```

use failure::Fail;
use std::fmt;

use crysym_array_types::{V3, M3};

/// Relative tolerance used when none is given.
pub const DEFAULT_REL_TOL: f64 = 1e-9;

/// `assert_close!([rel=R,] [abs=A,] left, right [, format...])`
///
/// Without `rel`, a relative tolerance of `1e-9` applies. Without `abs`,
/// only exact zeros compare equal to zero.
#[macro_export]
macro_rules! assert_close {
    (rel=$rel:expr, abs=$abs:expr, $($rest:tt)+) => {
        $crate::__assert_close!{$crate::Tolerances { rel: $rel, abs: $abs }; $($rest)+}
    };
    (abs=$abs:expr, rel=$rel:expr, $($rest:tt)+) => {
        $crate::__assert_close!{$crate::Tolerances { rel: $rel, abs: $abs }; $($rest)+}
    };
    (rel=$rel:expr, $($rest:tt)+) => {
        $crate::__assert_close!{$crate::Tolerances { rel: $rel, abs: 0.0 }; $($rest)+}
    };
    (abs=$abs:expr, $($rest:tt)+) => {
        $crate::__assert_close!{$crate::Tolerances { rel: $crate::DEFAULT_REL_TOL, abs: $abs }; $($rest)+}
    };
    ($($rest:tt)+) => {
        $crate::__assert_close!{$crate::Tolerances::default(); $($rest)+}
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __assert_close {
    ($tol:expr; $a:expr, $b:expr $(,)?) => {
        $crate::__assert_close!{$tol; $a, $b, "values are not close"}
    };
    ($tol:expr; $a:expr, $b:expr, $($fmt:tt)+) => {{
        let tol: $crate::Tolerances = $tol;
        let a = $a;
        let b = $b;
        if let Err(e) = $crate::CheckClose::check_close(&a, &b, tol) {
            panic!("{}\n  left: {:?}\n right: {:?}\n{}", format_args!($($fmt)+), a, b, e);
        }
    }};
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tolerances {
    pub rel: f64,
    pub abs: f64,
}

impl Default for Tolerances {
    fn default() -> Self
    { Tolerances { rel: DEFAULT_REL_TOL, abs: 0.0 } }
}

impl Tolerances {
    /// Symmetric closeness test, in the manner of Python's `math.isclose`.
    pub fn accepts(&self, a: f64, b: f64) -> bool
    {
        assert!(self.rel >= 0.0 && self.abs >= 0.0, "negative tolerance: {:?}", self);

        // equal infinities
        if a == b {
            return true;
        }
        if a.is_infinite() || b.is_infinite() {
            return false;
        }
        // NaN fails here
        (a - b).abs() <= self.abs.max(self.rel * a.abs().max(b.abs()))
    }
}

/// The first pair of values found to differ.
#[derive(Debug, Clone, PartialEq, Fail)]
pub struct CheckCloseError {
    pub left: f64,
    pub right: f64,
    /// Position within nested sequences, outermost first.
    pub index: Vec<usize>,
    pub tol: Tolerances,
}

impl fmt::Display for CheckCloseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "first mismatch")?;
        for i in &self.index {
            write!(f, "[{}]", i)?;
        }
        write!(f, ": {:?} vs {:?} (rel={}, abs={})", self.left, self.right, self.tol.rel, self.tol.abs)
    }
}

pub trait CheckClose {
    /// Compare element by element, stopping at the first mismatch.
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError>;
}

impl CheckClose for f64 {
    fn check_close(&self, other: &f64, tol: Tolerances) -> Result<(), CheckCloseError>
    {
        match tol.accepts(*self, *other) {
            true => Ok(()),
            false => Err(CheckCloseError { left: *self, right: *other, index: vec![], tol }),
        }
    }
}

impl<'a, T: ?Sized + CheckClose> CheckClose for &'a T {
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError>
    { (**self).check_close(*other, tol) }
}

impl<T: CheckClose> CheckClose for [T] {
    fn check_close(&self, other: &[T], tol: Tolerances) -> Result<(), CheckCloseError>
    {
        assert_eq!(self.len(), other.len(), "compared sequences of different lengths");
        for (i, (a, b)) in self.iter().zip(other).enumerate() {
            a.check_close(b, tol).map_err(|mut e| {
                e.index.insert(0, i);
                e
            })?;
        }
        Ok(())
    }
}

impl<T: CheckClose, const N: usize> CheckClose for [T; N] {
    fn check_close(&self, other: &[T; N], tol: Tolerances) -> Result<(), CheckCloseError>
    { self[..].check_close(&other[..], tol) }
}

impl<T: CheckClose> CheckClose for Vec<T> {
    fn check_close(&self, other: &Vec<T>, tol: Tolerances) -> Result<(), CheckCloseError>
    { self[..].check_close(&other[..], tol) }
}

// fractional and cartesian coordinates
impl<T: CheckClose> CheckClose for V3<T> {
    fn check_close(&self, other: &V3<T>, tol: Tolerances) -> Result<(), CheckCloseError>
    { self.0.check_close(&other.0, tol) }
}

// lattice matrices and metric tensors, compared row by row
impl<V: CheckClose> CheckClose for M3<V> {
    fn check_close(&self, other: &M3<V>, tol: Tolerances) -> Result<(), CheckCloseError>
    { self.0.check_close(&other.0, tol) }
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;
    use crysym_array_types::mat;

    #[test]
    fn tolerance_forms() {
        assert_close!(1.0, 1.0 + 1e-12);
        assert_close!(abs=1e-8, 0.0, 1e-9);
        assert_close!(rel=1e-3, 1000.0, 1000.5);
        assert_close!(rel=1e-8, abs=1e-8, 1.0, 1.0,);
        assert_close!(abs=1e-8, rel=1e-8, 1.0, 1.0);
        assert_close!(abs=1e-8, 1.0, 1.0, "with a message {}", 3);
    }

    #[test]
    fn zero_needs_an_absolute_tolerance() {
        let tol = Tolerances::default();
        assert!(tol.accepts(0.0, 0.0));
        assert!(!tol.accepts(0.0, 1e-300));
        assert!(Tolerances { rel: 0.0, abs: 1e-12 }.accepts(0.0, 1e-13));
        assert!(!tol.accepts(std::f64::NAN, std::f64::NAN));
        assert!(tol.accepts(std::f64::INFINITY, std::f64::INFINITY));
        assert!(!tol.accepts(std::f64::INFINITY, -std::f64::INFINITY));
    }

    #[test]
    fn coordinates_and_matrices() {
        assert_close!(abs=1e-8, V3([0.5, 0.25, 0.0]), V3([0.5, 0.25, 1e-10]));
        assert_close!(
            mat::eye::<f64>(),
            mat::from_array([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]),
        );
        assert_close!(vec![V3([1.0; 3]), V3([2.0; 3])], vec![V3([1.0; 3]), V3([2.0; 3])]);
    }

    #[test]
    fn mismatch_is_located() {
        let a = mat::from_array([[4.0, 0.0, 0.0], [0.0, 4.0, 0.0], [0.0, 0.0, 6.0]]);
        let b = mat::from_array([[4.0, 0.0, 0.0], [0.0, 4.0, 0.0], [0.0, 0.0, 6.1]]);
        let err = a.check_close(&b, Tolerances::default()).unwrap_err();
        assert_eq!(err.index, vec![2, 2]);
        assert_eq!((err.left, err.right), (6.0, 6.1));
        assert!(err.to_string().starts_with("first mismatch[2][2]: 6.0 vs 6.1"));
    }

    #[test]
    #[should_panic(expected = "cell 3")]
    fn not_close() {
        assert_close!(abs=0.0, rel=0.0, [1.0, 2.0], [1.0, 2.1], "cell {}", 3);
    }

    #[test]
    #[should_panic(expected = "different lengths")]
    fn length_mismatch() {
        assert_close!(vec![1.0], vec![1.0, 2.0]);
    }
}
