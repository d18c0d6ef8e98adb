use crate::IntPrecisionError;

use crysym_array_types::M33;

// these f64 -> i32 conversions are written on a silly little type
// simply to avoid having a function with a signature like 'fn f(x: f64, tol: f64)'
// where the arguments could be swapped
pub(crate) struct Tol(pub(crate) f64);

impl Tol {
    pub(crate) fn unfloat(&self, x: f64) -> Result<i32, IntPrecisionError>
    {Ok({
        let r = x.round();
        if (r - x).abs() > self.0 {
            return Err(IntPrecisionError {
                backtrace: failure::Backtrace::new(),
                value: x,
            });
        }
        r as i32
    })}

    pub(crate) fn unfloat_m33(&self, m: &M33) -> Result<M33<i32>, IntPrecisionError>
    { m.try_map(|x| self.unfloat(x)) }
}

/// Exact inverse of an integer matrix with determinant ±1.
pub(crate) fn unimodular_inverse(m: &M33<i32>) -> Option<M33<i32>> {
    match m.det() {
        1 => Some(m.adjugate()),
        -1 => Some(-m.adjugate()),
        _ => None,
    }
}

pub(crate) fn float_m33(m: &M33<i32>) -> M33
{ m.map(f64::from) }

pub(crate) fn tup3<T: Copy>(x: &[T; 3]) -> (T, T, T)
{ (x[0], x[1], x[2]) }
