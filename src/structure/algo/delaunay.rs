//! Delaunay (Selling) reduction, in three dimensions and in the plane
//! orthogonal to a unique axis.

use crate::Lattice;
use crate::algo::fuzz::Fuzz;
use crate::algo::niggli::MAX_ITERATIONS;

use crysym_array_types::{V3, M3, M33, dot, sqnorm};
use ordered_float::NotNan;

/// Delaunay-reduce a lattice with the default iteration limit.
///
/// Returns `None` when the cell is (nearly) degenerate.
pub fn delaunay_reduce(lattice: &Lattice, eps: f64) -> Option<Lattice>
{ delaunay_reduce_with_limit(lattice, eps, MAX_ITERATIONS) }

pub fn delaunay_reduce_with_limit(lattice: &Lattice, eps: f64, max_iter: usize) -> Option<Lattice>
{
    let fuzz = Fuzz::new(eps);

    let rows = lattice.vectors();
    let mut ext = [rows[0], rows[1], rows[2], -(rows[0] + rows[1] + rows[2])];
    if !selling_reduce(&mut ext, fuzz, max_iter, |ext, i, j| {
        for k in (0..4).filter(|&k| k != i && k != j) {
            let v = ext[i];
            ext[k] += v;
        }
    }) {
        warn!("Delaunay reduction did not converge after {} iterations", max_iter);
        return None;
    }

    let mut candidates = vec![
        ext[0], ext[1], ext[2], ext[3],
        ext[0] + ext[1], ext[1] + ext[2], ext[2] + ext[0],
    ];
    sort_by_length(&mut candidates)?;

    for &third in &candidates[2..] {
        let matrix = M3([candidates[0], candidates[1], third]);
        let volume = matrix.det();
        if fuzz.gt(volume.abs(), 0.0) {
            return Some(match volume > 0.0 {
                true => Lattice::new(&matrix),
                false => Lattice::new(&-matrix),
            });
        }
    }
    None
}

/// Reduce the two lattice vectors other than `unique_axis`, leaving that axis intact.
pub fn delaunay_reduce_2d(lattice: &Lattice, unique_axis: usize, eps: f64) -> Option<Lattice>
{ delaunay_reduce_2d_with_limit(lattice, unique_axis, eps, MAX_ITERATIONS) }

pub fn delaunay_reduce_2d_with_limit(
    lattice: &Lattice,
    unique_axis: usize,
    eps: f64,
    max_iter: usize,
) -> Option<Lattice>
{
    assert!(unique_axis < 3, "bad axis: {}", unique_axis);
    let fuzz = Fuzz::new(eps);

    let rows = lattice.vectors();
    let unique = rows[unique_axis];
    let others: Vec<V3> = (0..3).filter(|&k| k != unique_axis).map(|k| rows[k]).collect();

    let mut ext = [others[0], others[1], -(others[0] + others[1])];
    if !selling_reduce(&mut ext, fuzz, max_iter, |ext, i, j| {
        // the extended set sums to zero, so there is exactly one vector left
        let k = 3 - i - j;
        let v = ext[i];
        ext[k] += v * 2.0;
    }) {
        warn!("2D Delaunay reduction did not converge after {} iterations", max_iter);
        return None;
    }

    let mut candidates = vec![ext[0], ext[1], ext[2], ext[0] + ext[1]];
    sort_by_length(&mut candidates)?;

    let second = candidates[1..].iter().cloned().find(|v| {
        fuzz.gt(M3([candidates[0], unique, *v]).det().abs(), 0.0)
    })?;

    let mut pair = vec![candidates[0], second].into_iter();
    let mut vectors: M33 = M3([V3::zero(); 3]);
    for k in 0..3 {
        vectors[k] = match k == unique_axis {
            true => unique,
            false => pair.next().expect("bug! (too few vectors)"),
        };
    }

    let volume = vectors.det();
    if !fuzz.gt(volume.abs(), 0.0) {
        return None;
    }
    if volume < 0.0 {
        vectors[unique_axis] = -vectors[unique_axis];
    }
    Some(Lattice::new(&vectors))
}

// Repeatedly find a pair in the extended set with a positive dot product, apply
// `step` to the vectors outside the pair, and negate the first vector of the pair.
//
// Returns false if the iteration limit was hit.
fn selling_reduce<F>(ext: &mut [V3], fuzz: Fuzz, max_iter: usize, mut step: F) -> bool
where F: FnMut(&mut [V3], usize, usize),
{
    let n = ext.len();
    'restart: for _ in 0..max_iter {
        for i in 0..n {
            for j in i + 1..n {
                if fuzz.gt(dot(&ext[i], &ext[j]), 0.0) {
                    step(ext, i, j);
                    ext[i] = -ext[i];
                    continue 'restart;
                }
            }
        }
        return true;
    }
    false
}

// None on NaN
fn sort_by_length(vs: &mut Vec<V3>) -> Option<()> {
    let mut keyed = vs.iter()
        .map(|v| NotNan::new(sqnorm(v)).ok().map(|len| (len, *v)))
        .collect::<Option<Vec<_>>>()?;
    keyed.sort_by_key(|&(len, _)| len);
    *vs = keyed.into_iter().map(|(_, v)| v).collect();
    Some(())
}
