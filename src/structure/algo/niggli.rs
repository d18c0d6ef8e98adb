/* ************************************************************************ **
** This file is part of crysym, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Niggli reduction.
//!
//! Citations:
//!
//! * B. Gruber, "The Relationship between Reduced Cells
//!   in a General Bravais lattice." Acta Crystallographica
//!   Section A 29 (1973): 433-440.
//!
//! * I. Krivy and B. Gruber, "A unified algorithm for determining
//!   the reduced (Niggli) cell." Acta Crystallographica
//!   Section A 32 (1976): 297-298.
//!
//! * Grosse-Kunstleve, Ralf W., Nicholas K. Sauter,
//!   and Paul D. Adams. "Numerically stable algorithms
//!   for the computation of reduced unit cells."
//!   Acta Crystallographica Section A: Foundations of
//!   Crystallography 60.1 (2004): 1-6.

use crate::Lattice;
use crate::algo::fuzz::Fuzz;
use crate::util::tup3;

use crysym_array_types::{V3, M33, dot, mat};

use std::cmp::Ordering;

/// Default cap on the number of restarts of an iterative reduction.
pub const MAX_ITERATIONS: usize = 10_000;

pub use self::unimodular::Unimodular;
pub(crate) use self::unimodular::UnimodularState;
mod unimodular {
    use super::*;

    /// An integer matrix of determinant ±1, stored alongside its exact inverse.
    ///
    /// The rows describe the new lattice vectors in terms of the old ones,
    /// i.e. `reduced = matrix * original`.
    #[derive(Debug, Clone, PartialEq)]
    pub struct Unimodular {
        matrix: M33<i32>,
        inverse: M33<i32>,
    }

    impl Unimodular {
        #[inline] pub fn matrix(&self) -> &M33<i32> { &self.matrix }
        #[inline] pub fn inverse_matrix(&self) -> &M33<i32> { &self.inverse }

        /// The same transformation written as a change of basis,
        /// with the new vectors as columns.
        #[inline] pub fn change_of_basis(&self) -> M33<i32> { self.matrix.t() }

        #[inline] pub fn det(&self) -> i32 { self.matrix.det() }
    }

    // easier to update
    #[derive(Debug, Clone)]
    pub(crate) struct UnimodularState(pub(crate) M33<i32>);

    impl UnimodularState {
        pub fn eye() -> Self
        { UnimodularState(mat::eye()) }

        /// Swap two rows.
        #[inline]
        pub fn row_swap(&mut self, j: usize, k: usize)
        {
            // NOTE: Can't mem::swap because of simultaneous indexing
            let ghost = self.0;
            self.0[j] = ghost[k];
            self.0[k] = ghost[j];
        }

        /// Add a multiple of one lattice vector to a different one.
        #[inline]
        pub fn row_axpy(&mut self, to: usize, mul: i32, from: usize)
        {
            assert_ne!(from, to, "adding a row to itself is not a unimodular operation");
            let from = self.0[from];
            self.0[to] += mul * from;
        }

        /// Negate a lattice vector.
        #[inline]
        pub fn row_negate(&mut self, row: usize)
        { self.0[row] *= -1; }

        pub fn finish(&self) -> Unimodular
        {
            let inverse = crate::util::unimodular_inverse(&self.0).expect("bug! (not unimodular)");
            Unimodular { matrix: self.0, inverse }
        }
    }
}

// a small inner module to let privacy assist in
//  protecting some invariants
use self::state::State;
mod state {
    use super::*;

    #[derive(Debug, Clone)]
    pub(super) struct State {
        // constant state
        original: Lattice,
        fuzz: Fuzz,

        // mutatable state
        unimodular: UnimodularState,

        // precomputed data
        // (invariant: these are always updated alongside unimodular)
        lattice: M33,
        abc: [f64; 3],
        xyz: [f64; 3],
    }

    impl State {
        pub fn new(lattice: &Lattice, fuzz: Fuzz) -> Self
        { Self::from_matrices(lattice, &UnimodularState::eye(), fuzz) }

        fn from_matrices(original: &Lattice, unimodular: &UnimodularState, fuzz: Fuzz) -> Self
        {
            let original = original.clone();
            let unimodular = unimodular.clone();

            let lattice = &unimodular.0.map(f64::from) * original.matrix();
            let (abc, xyz) = g6_of(&lattice);
            State { original, unimodular, lattice, abc, xyz, fuzz }
        }

        pub fn unimodular_matrix(&self) -> &M33<i32> { &self.unimodular.0 }
        pub fn fuzz(&self) -> Fuzz { self.fuzz }
        pub fn abc(&self) -> &[f64; 3] { &self.abc }
        pub fn xyz(&self) -> &[f64; 3] { &self.xyz }

        pub fn change_basis<F>(&mut self, f: F)
        where F: FnOnce(&mut UnimodularState)
        {
            f(&mut self.unimodular);
            debug_assert_eq!(self.unimodular.0.det().abs(), 1);

            // update precomputed data
            *self = Self::from_matrices(&self.original, &self.unimodular, self.fuzz);
        }

        pub fn finish(self) -> LatticeReduction
        { LatticeReduction {
            transform: self.unimodular.finish(),
            reduced: Lattice::new(&self.lattice),
            original: self.original,
        }}
    }
}

/// The diagonal `(A, B, C)` and doubled off-diagonal `(ξ, η, ζ)` metric entries.
fn g6_of(lattice: &M33) -> ([f64; 3], [f64; 3])
{
    let abc = V3::from_fn(|k| dot(&lattice[k], &lattice[k]));
    let xyz = V3::from_fn(|k| 2.0 * dot(&lattice[(k + 1) % 3], &lattice[(k + 2) % 3]));
    (abc.0, xyz.0)
}

/// A pairing of a lattice matrix with its reduced form,
/// along with the integer coefficient matrices that convert
/// between the two.
#[derive(Debug, Clone)]
pub struct LatticeReduction {
    original: Lattice,
    transform: Unimodular,
    reduced: Lattice,
}

impl LatticeReduction {
    #[inline] pub fn original(&self) -> &Lattice { &self.original }
    #[inline] pub fn reduced(&self) -> &Lattice { &self.reduced }
    #[inline] pub fn transform(&self) -> &Unimodular { &self.transform }
}

// The phases of the reduction loop.
//
// Every step that modifies the cell sends the machine back to `SwapAxes`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Phase {
    SwapAxes,
    FixSigns,
    BoundaryCorrect,
    Done,
}

/// Niggli-reduce a lattice with the default iteration limit.
///
/// Returns `None` if the reduction does not converge.
pub fn niggli_reduce(lattice: &Lattice, eps: f64) -> Option<LatticeReduction>
{ niggli_reduce_with_limit(lattice, eps, MAX_ITERATIONS) }

/// Niggli-reduce a lattice, giving up after `max_iter` restarts.
///
/// Returns `None` for a (nearly) degenerate cell. The result's transform
/// has determinant `+1`.
pub fn niggli_reduce_with_limit(
    lattice: &Lattice,
    eps: f64,
    max_iter: usize,
) -> Option<LatticeReduction>
{
    let fuzz = Fuzz::new(eps);
    let volume = lattice.volume();
    if !volume.is_finite() || !fuzz.gt(volume, 0.0) {
        warn!("Niggli reduction was given a degenerate cell (volume {})", volume);
        return None;
    }

    let mut state = State::new(lattice, fuzz);
    let mut phase = Phase::SwapAxes;
    let mut restarts = 0;

    while phase != Phase::Done {
        let changed = match phase {
            Phase::SwapAxes => swap_axes(&mut state),
            Phase::FixSigns => fix_signs(&mut state),
            Phase::BoundaryCorrect => boundary_correct(&mut state),
            Phase::Done => unreachable!(),
        };

        phase = match (phase, changed) {
            (_, true) => Phase::SwapAxes,
            (Phase::SwapAxes, false) => Phase::FixSigns,
            (Phase::FixSigns, false) => Phase::BoundaryCorrect,
            (Phase::BoundaryCorrect, false) => Phase::Done,
            (Phase::Done, _) => unreachable!(),
        };

        if changed {
            restarts += 1;
            if restarts >= max_iter {
                warn!("Niggli reduction did not converge after {} iterations", max_iter);
                return None;
            }
        }
    }

    // sign fixing may leave an odd number of negated axes; since the
    // dimension is odd, negating everything restores a positive determinant.
    match state.unimodular_matrix().det() {
        1 => {},
        -1 => {
            state.change_basis(|u| {
                u.row_negate(0);
                u.row_negate(1);
                u.row_negate(2);
            })
        },
        d => panic!("Bad unimodular determinant: {}", d),
    }

    Some(state.finish())
}

// Steps 1 and 2 of Krivy-Gruber.
fn swap_axes(state: &mut State) -> bool
{
    let fuzz = state.fuzz();
    let ((a, b, c), (x, y, z)) = (tup3(state.abc()), tup3(state.xyz()));

    // (note: Algol gave higher precedence to AND, as does rust.)
    if fuzz.gt(a, b) || fuzz.eq(a, b) && fuzz.gt(x.abs(), y.abs()) {
        state.change_basis(|u| {
            u.row_swap(0, 1);
            negate_all(u);
        });
        return true;
    }

    if fuzz.gt(b, c) || fuzz.eq(b, c) && fuzz.gt(y.abs(), z.abs()) {
        state.change_basis(|u| {
            u.row_swap(1, 2);
            negate_all(u);
        });
        return true;
    }
    false
}

fn negate_all(u: &mut UnimodularState) {
    for k in 0..3 {
        u.row_negate(k);
    }
}

// Steps 3 and 4 of Krivy-Gruber.
//
// Brings the off-diagonal terms either all strictly positive, or all
// non-positive.
fn fix_signs(state: &mut State) -> bool
{
    let fuzz = state.fuzz();
    let xyz = *state.xyz();

    let num_positive = xyz.iter().filter(|&&x| fuzz.sign(x) == Ordering::Greater).count();
    let num_zero = xyz.iter().filter(|&&x| fuzz.sign(x) == Ordering::Equal).count();

    let mut flips = [false; 3];
    if num_positive == 3 || (num_zero == 0 && num_positive == 1) {
        for k in 0..3 {
            flips[k] = fuzz.sign(xyz[k]) == Ordering::Less;
        }
    } else {
        let mut zero_axis = None;
        for k in 0..3 {
            match fuzz.sign(xyz[k]) {
                Ordering::Greater => flips[k] = true,
                Ordering::Equal => zero_axis = Some(k),
                Ordering::Less => {},
            }
        }

        // an odd number of flips can be evened out with a zero term
        if flips.iter().filter(|&&f| f).count() % 2 == 1 {
            let k = zero_axis.expect("bug! (odd number of flips without zeros?)");
            flips[k] = true;
        }
    }

    if !flips.iter().any(|&f| f) {
        return false;
    }
    state.change_basis(|u| {
        for k in 0..3 {
            if flips[k] {
                u.row_negate(k);
            }
        }
    });
    true
}

// Steps 5 through 8 of Krivy-Gruber.
fn boundary_correct(state: &mut State) -> bool
{
    let fuzz = state.fuzz();
    let ((a, b, _c), (x, y, z)) = (tup3(state.abc()), tup3(state.xyz()));
    let sgn = |v: f64| if v > 0.0 { 1 } else { -1 };

    if fuzz.gt(x.abs(), b)
        || fuzz.eq(x, b) && fuzz.lt(2.0 * y, z)
        || fuzz.eq(x, -b) && fuzz.lt(z, 0.0)
    {
        state.change_basis(|u| u.row_axpy(2, -sgn(x), 1));
        return true;
    }

    if fuzz.gt(y.abs(), a)
        || fuzz.eq(y, a) && fuzz.lt(2.0 * x, z)
        || fuzz.eq(y, -a) && fuzz.lt(z, 0.0)
    {
        state.change_basis(|u| u.row_axpy(2, -sgn(y), 0));
        return true;
    }

    if fuzz.gt(z.abs(), a)
        || fuzz.eq(z, a) && fuzz.lt(2.0 * x, y)
        || fuzz.eq(z, -a) && fuzz.lt(y, 0.0)
    {
        state.change_basis(|u| u.row_axpy(1, -sgn(z), 0));
        return true;
    }

    let xyzab = x + y + z + a + b;
    if fuzz.lt(xyzab, 0.0) || fuzz.eq(xyzab, 0.0) && fuzz.gt(2.0 * (a + y) + z, 0.0) {
        state.change_basis(|u| {
            u.row_axpy(2, 1, 0);
            u.row_axpy(2, 1, 1);
        });
        return true;
    }
    false
}

/// Test whether a lattice is Niggli-reduced, within the given tolerance.
pub fn is_niggli(lattice: &Lattice, eps: f64) -> bool
{
    let (abc, xyz) = g6_of(lattice.matrix());
    conditions::niggli(&conditions::G6 { abc, xyz, fuzz: Fuzz::new(eps) })
}

mod conditions {
    use super::*;

    pub(super) struct G6 {
        pub(super) abc: [f64; 3],
        pub(super) xyz: [f64; 3],
        pub(super) fuzz: Fuzz,
    }

    trait Implies: Sized { fn implies(self, other: bool) -> bool; }
    impl Implies for bool {
        fn implies(self, other: bool) -> bool
        { ! (self && !other) }
    }

    fn primary(g: &G6) -> bool
    {
        let fuzz = g.fuzz;
        let ((a, b, c), (x, y, z)) = (tup3(&g.abc), tup3(&g.xyz));

        true
        && fuzz.le(0.0, a)
        && fuzz.le(a, b)
        && fuzz.le(b, c)
        && fuzz.le(x.abs(), b)
        && fuzz.le(y.abs(), a)
        && fuzz.le(z.abs(), a)
    }

    fn main(g: &G6) -> bool
    {
        let fuzz = g.fuzz;
        let ((a, b, c), (x, y, z)) = (tup3(&g.abc), tup3(&g.xyz));

        let all_positive = g.xyz.iter().all(|&v| fuzz.gt(v, 0.0));
        let all_nonpositive = g.xyz.iter().all(|&v| fuzz.le(v, 0.0));

        primary(g)
        && (all_positive || all_nonpositive)
        && fuzz.le(c, a + b + c + x + y + z)
    }

    fn buerger(g: &G6) -> bool
    {
        let fuzz = g.fuzz;
        let ((a, b, c), (x, y, z)) = (tup3(&g.abc), tup3(&g.xyz));

        main(g)
        && fuzz.eq(a, b).implies(fuzz.le(x.abs(), y.abs()))
        && fuzz.eq(b, c).implies(fuzz.le(y.abs(), z.abs()))
    }

    pub(super) fn niggli(g: &G6) -> bool
    {
        let fuzz = g.fuzz;
        let ((a, b, c), (d, e, f)) = (tup3(&g.abc), tup3(&g.xyz));
        let sum = a + b + c + d + e + f;

        buerger(g)
        && fuzz.eq(d, b).implies(fuzz.le(f, 2.0 * e))
        && fuzz.eq(e, a).implies(fuzz.le(f, 2.0 * d))
        && fuzz.eq(f, a).implies(fuzz.le(e, 2.0 * d))
        && fuzz.eq(d, -b).implies(fuzz.eq(f, 0.0))
        && fuzz.eq(e, -a).implies(fuzz.eq(f, 0.0))
        && fuzz.eq(f, -a).implies(fuzz.eq(e, 0.0))
        && fuzz.eq(c, sum).implies(fuzz.le(2.0 * (a + e) + f, 0.0))
    }
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;
    use crate::CellParams;
    use rand::{thread_rng, Rng};

    const EPS: f64 = 1e-5;

    fn lattice_with_g6(g6: [f64; 6]) -> Lattice {
        let [a, b, c, x, y, z] = g6;
        let metric = mat::from_array([
            [a, z / 2.0, y / 2.0],
            [z / 2.0, b, x / 2.0],
            [y / 2.0, x / 2.0, c],
        ]);
        CellParams::from_metric(&metric).to_lattice().unwrap()
    }

    fn g6(lattice: &Lattice) -> [f64; 6] {
        let (abc, xyz) = g6_of(lattice.matrix());
        [abc[0], abc[1], abc[2], xyz[0], xyz[1], xyz[2]]
    }

    fn random_unimodular() -> M33<i32> {
        loop {
            let m = M33::from_fn(|_, _| thread_rng().gen_range(-2, 2 + 1));
            if m.det() == 1 {
                return m;
            }
        }
    }

    #[test]
    fn gruber_example() {
        // Krivy & Gruber (1976), also used by Grosse-Kunstleve (2004)
        let lattice = lattice_with_g6([9.0, 27.0, 4.0, -5.0, -4.0, -22.0]);
        let reduction = niggli_reduce(&lattice, EPS).unwrap();

        assert_close!(abs=1e-6, g6(reduction.reduced()), [4.0, 9.0, 9.0, 9.0, 3.0, 4.0]);
        assert!(is_niggli(reduction.reduced(), EPS));
        assert!(!is_niggli(&lattice, EPS));
    }

    #[test]
    fn cubic_is_unchanged() {
        let lattice = Lattice::cubic(5.0);
        assert!(is_niggli(&lattice, EPS));

        let reduction = niggli_reduce(&lattice, EPS).unwrap();
        assert_close!(reduction.reduced().matrix().0, lattice.matrix().0);
        assert_eq!(reduction.transform().matrix(), &M33::eye());
    }

    #[test]
    fn transform_is_consistent() {
        for _ in 0..50 {
            let niggli = lattice_with_g6([4.0, 9.0, 9.0, 9.0, 3.0, 4.0]);
            let lattice = niggli.linear_combination(&random_unimodular());

            let reduction = niggli_reduce(&lattice, EPS).unwrap();
            let transform = reduction.transform();

            assert_eq!(transform.det(), 1);
            assert_eq!(transform.matrix() * transform.inverse_matrix(), M33::eye());
            assert_close!(
                rel=1e-8,
                lattice.linear_combination(transform.matrix()).matrix().0,
                reduction.reduced().matrix().0,
            );
            assert_close!(
                rel=1e-8,
                lattice.change_basis(&transform.change_of_basis().map(f64::from)).matrix().0,
                reduction.reduced().matrix().0,
            );
            assert_close!(rel=1e-8, lattice.volume(), reduction.reduced().volume());
            assert_close!(abs=1e-6, g6(reduction.reduced()), [4.0, 9.0, 9.0, 9.0, 3.0, 4.0]);
        }
    }

    #[test]
    fn random_lattices_reduce() {
        for _ in 0..100 {
            let lattice = Lattice::random_uniform(5.0);
            if lattice.volume() < 1e-2 {
                continue;
            }

            let reduction = match niggli_reduce(&lattice, EPS) {
                Some(r) => r,
                None => panic!("no convergence for {:?}", lattice),
            };
            let reduced = reduction.reduced();
            assert!(is_niggli(reduced, EPS), "{:?}", g6(reduced));
            assert_close!(rel=1e-7, lattice.volume(), reduced.volume());

            // idempotence
            let again = niggli_reduce(reduced, EPS).unwrap();
            assert_close!(abs=1e-6, g6(again.reduced()), g6(reduced));
        }
    }

    #[test]
    fn iteration_limit() {
        let lattice = lattice_with_g6([9.0, 27.0, 4.0, -5.0, -4.0, -22.0]);
        assert!(niggli_reduce_with_limit(&lattice, EPS, 1).is_none());
    }

    #[test]
    fn degenerate_cells() {
        let coplanar = Lattice::from(&[[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 1.0, 0.0]]);
        assert!(niggli_reduce(&coplanar, EPS).is_none());

        let flat = Lattice::from(&[[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1e-7]]);
        assert!(niggli_reduce(&flat, EPS).is_none());

        let nan = Lattice::from(&[[1.0, 0.0, 0.0], [0.0, std::f64::NAN, 0.0], [0.0, 0.0, 1.0]]);
        assert!(niggli_reduce(&nan, EPS).is_none());

        let infinite = Lattice::from(&[[1.0, 0.0, 0.0], [0.0, std::f64::INFINITY, 0.0], [0.0, 0.0, 1.0]]);
        assert!(niggli_reduce(&infinite, EPS).is_none());

        // a left-handed basis is fine
        let left = Lattice::from(&[[1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]]);
        assert!(niggli_reduce(&left, EPS).is_some());
    }
}
