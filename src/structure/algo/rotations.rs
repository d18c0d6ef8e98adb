use crate::{Lattice, Rot};

use crysym_array_types::{V3, M33, dot};
use itertools::iproduct;

/// Enumerate the rotations (proper and improper) that preserve the metric
/// of a lattice, as integer matrices acting on fractional column vectors.
///
/// The lattice should be Delaunay-reduced. For such a cell, every rotated
/// basis vector is one of the 26 lattice vectors with coordinates in `{-1, 0, 1}`.
pub fn lattice_point_group(lattice: &Lattice, precision: f64) -> Vec<Rot>
{
    let metric = lattice.metric();
    let lengths = lattice.norms();

    // For each axis, the rotated basis vector must have the same length.
    // This gives us an *extremely* small search space.
    let choices: Vec<Vec<V3<i32>>> = (0..3).map(|k| {
        SHORT_VECTORS.iter()
            .filter(|v| (frac_length(&metric, v) - lengths[k]).abs() <= precision)
            .cloned()
            .collect()
    }).collect();

    let mut out = vec![];
    for (c0, c1, c2) in iproduct!(&choices[0], &choices[1], &choices[2]) {
        let rot = match Rot::try_new(&M33::from_cols([*c0, *c1, *c2])) {
            Some(rot) => rot,
            None => continue,
        };
        let rotated = {
            let r = rot.float();
            &r.t() * &(&metric * &r)
        };
        if metric_is_preserved(&metric, &rotated, precision) {
            out.push(rot);
        }
    }
    debug!("lattice point group has {} operations", out.len());
    out
}

fn frac_length(metric: &M33, v: &V3<i32>) -> f64
{
    let v = v.map(f64::from);
    dot(&v, &(metric * &v)).max(0.0).sqrt()
}

// Compare the rotated metric to the original one through lengths, and through
// the sine of the angle between the original and rotated angle of each pair of
// axes (scaled by the mean lengths).
fn metric_is_preserved(original: &M33, rotated: &M33, precision: f64) -> bool
{
    let lo = V3::from_fn(|k| original[k][k].sqrt());
    let lr = V3::from_fn(|k| rotated[k][k].sqrt());
    if (0..3).any(|k| (lo[k] - lr[k]).abs() > precision) {
        return false;
    }

    for &(j, k) in &[(0, 1), (0, 2), (1, 2)] {
        let cos_o = original[j][k] / lo[j] / lo[k];
        let cos_r = rotated[j][k] / lr[j] / lr[k];
        // cos(θo - θr)
        let cos_diff = cos_o * cos_r
            + (1.0 - cos_o * cos_o).max(0.0).sqrt() * (1.0 - cos_r * cos_r).max(0.0).sqrt();
        let sin_sq = 1.0 - cos_diff * cos_diff;
        let mean_sq = (lo[j] + lr[j]) * (lo[k] + lr[k]) * 0.25;
        if sin_sq > 1e-12 && sin_sq * mean_sq > precision * precision {
            return false;
        }
    }
    true
}

lazy_static!{
    // The 26 nonzero vectors with coordinates in {-1, 0, 1}.
    static ref SHORT_VECTORS: Vec<V3<i32>> = {
        let mut out = Vec::with_capacity(26);
        for (i, j, k) in iproduct!(-1..=1, -1..=1, -1..=1) {
            if (i, j, k) != (0, 0, 0) {
                out.push(V3([i, j, k]));
            }
        }
        out
    };
}
