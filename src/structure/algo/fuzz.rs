use std::cmp::Ordering;

/// The default tolerance for every approximate comparison in the crate.
pub const DEFAULT_EPS: f64 = 1e-5;

/// Tolerant comparison of floats.
///
/// All of the lattice reduction and symmetry code compares through one of
/// these, so that a single epsilon governs what counts as "equal".
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Fuzz {
    tol: f64,
}

impl Default for Fuzz {
    fn default() -> Fuzz
    { Fuzz::new(DEFAULT_EPS) }
}

impl Fuzz {
    pub fn new(tol: f64) -> Fuzz
    { Fuzz { tol } }

    pub fn tol(&self) -> f64
    { self.tol }

    pub fn lt(&self, x: f64, y: f64) -> bool
    { x < y - self.tol }
    pub fn gt(&self, x: f64, y: f64) -> bool
    { self.lt(y, x) }

    pub fn le(&self, x: f64, y: f64) -> bool
    { ! self.gt(x, y) }
    pub fn ge(&self, x: f64, y: f64) -> bool
    { ! self.lt(x, y) }

    pub fn eq(&self, x: f64, y: f64) -> bool
    { ! self.lt(x, y) && ! self.gt(x, y) }

    pub fn cmp(&self, x: f64, y: f64) -> Ordering
    {
        if self.lt(x, y) { Ordering::Less }
        else if self.gt(x, y) { Ordering::Greater }
        else { Ordering::Equal }
    }

    /// Sign of `x`, with values within tolerance of zero counting as zero.
    pub fn sign(&self, x: f64) -> Ordering
    { self.cmp(x, 0.0) }
}
