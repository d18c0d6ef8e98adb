use std::f64::consts::PI;

use crysym_array_types::{V3, M33, mat};

use crate::{BadCellError, Lattice};

/// Lengths and angles of a unit cell.
///
/// Angles are stored in radians.  `alpha` is the angle between `b` and `c`,
/// `beta` between `a` and `c`, and `gamma` between `a` and `b`.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CellParams {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
}

impl CellParams {
    pub fn from_radians(lengths: [f64; 3], angles: [f64; 3]) -> Self {
        let [a, b, c] = lengths;
        let [alpha, beta, gamma] = angles;
        CellParams { a, b, c, alpha, beta, gamma }
    }

    pub fn from_degrees(lengths: [f64; 3], angles: [f64; 3]) -> Self {
        let [alpha, beta, gamma] = angles;
        Self::from_radians(lengths, [radians(alpha), radians(beta), radians(gamma)])
    }

    /// Read the parameters off of a metric tensor.
    pub fn from_metric(g: &M33) -> Self {
        let a = g[0][0].sqrt();
        let b = g[1][1].sqrt();
        let c = g[2][2].sqrt();
        CellParams {
            a, b, c,
            alpha: clamped_acos(g[1][2] / (b * c)),
            beta: clamped_acos(g[0][2] / (a * c)),
            gamma: clamped_acos(g[0][1] / (a * b)),
        }
    }

    pub fn lengths(&self) -> [f64; 3]
    { [self.a, self.b, self.c] }

    pub fn angles(&self) -> [f64; 3]
    { [self.alpha, self.beta, self.gamma] }

    pub fn angles_degrees(&self) -> [f64; 3]
    { [degrees(self.alpha), degrees(self.beta), degrees(self.gamma)] }

    /// `1 - cos²α - cos²β - cos²γ + 2 cosα cosβ cosγ`, the squared volume of a
    /// cell with unit edges.
    fn unit_volume_sq(&self) -> f64 {
        let (ca, cb, cg) = (self.alpha.cos(), self.beta.cos(), self.gamma.cos());
        1.0 - ca * ca - cb * cb - cg * cg + 2.0 * ca * cb * cg
    }

    pub fn volume(&self) -> f64
    { self.a * self.b * self.c * self.unit_volume_sq().max(0.0).sqrt() }

    /// Build the standard basis: `a` along x, `b` in the xy plane,
    /// and `c` completing a right-handed cell.
    pub fn to_lattice(&self) -> Result<Lattice, BadCellError> {
        let disc = self.unit_volume_sq();
        let lengths_ok = self.lengths().iter().all(|&x| x > 0.0);
        let angles_ok = self.angles().iter().all(|&x| 0.0 < x && x < PI);
        if !(lengths_ok && angles_ok && disc > 0.0) {
            return Err(BadCellError { params: *self });
        }

        let CellParams { a, b, c, alpha, beta, gamma } = *self;
        let (sg, cg) = gamma.sin_cos();
        let cz = (alpha.cos() - beta.cos() * cg) / sg;
        Ok(Lattice::from_vectors(&[
            V3([a, 0.0, 0.0]),
            V3([b * cg, b * sg, 0.0]),
            V3([c * beta.cos(), c * cz, c * disc.sqrt() / sg]),
        ]))
    }

    /// Matrix of dot products between the cell vectors.
    pub fn metric(&self) -> M33 {
        let CellParams { a, b, c, alpha, beta, gamma } = *self;
        mat::from_array([
            [a * a, a * b * gamma.cos(), a * c * beta.cos()],
            [a * b * gamma.cos(), b * b, b * c * alpha.cos()],
            [a * c * beta.cos(), b * c * alpha.cos(), c * c],
        ])
    }
}

pub(crate) fn radians(x: f64) -> f64
{ x * (PI / 180.0) }

pub(crate) fn degrees(x: f64) -> f64
{ x * (180.0 / PI) }

// Sometimes rounding errors result in values slightly > 1.
fn clamped_acos(x: f64) -> f64
{ x.max(-1.0).min(1.0).acos() }

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn params_round_trip() {
        let mut rng = rand::thread_rng();
        let mut tested = 0;
        while tested < 50 {
            let params = CellParams::from_degrees(
                [rng.gen_range(1.0, 10.0), rng.gen_range(1.0, 10.0), rng.gen_range(1.0, 10.0)],
                [rng.gen_range(50.0, 130.0), rng.gen_range(50.0, 130.0), rng.gen_range(50.0, 130.0)],
            );
            let lattice = match params.to_lattice() {
                Ok(lattice) => lattice,
                Err(_) => continue,
            };
            tested += 1;

            let back = lattice.params();
            assert_close!(abs=1e-9, back.lengths(), params.lengths());
            assert_close!(abs=1e-9, back.angles(), params.angles());
            assert_close!(abs=1e-9, lattice.metric(), params.metric());
            assert_close!(rel=1e-9, lattice.volume(), params.volume());

            // a rigid rotation of the basis changes nothing
            let rot = mat::from_array([
                [0.0, 1.0, 0.0],
                [-1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0],
            ]);
            let rotated = &lattice * &rot;
            assert_close!(abs=1e-9, rotated.params().angles(), params.angles());
        }
    }

    #[test]
    fn bad_cells() {
        // angles that cannot close into a cell
        let flat = CellParams::from_degrees([1.0, 1.0, 1.0], [120.0, 120.0, 120.0]);
        assert!(flat.to_lattice().is_err());

        let negative = CellParams::from_degrees([-1.0, 1.0, 1.0], [90.0, 90.0, 90.0]);
        assert!(negative.to_lattice().is_err());
    }

    #[test]
    fn right_handed() {
        let params = CellParams::from_degrees([3.0, 4.0, 5.0], [80.0, 100.0, 110.0]);
        let lattice = params.to_lattice().unwrap();
        assert!(lattice.signed_volume() > 0.0);
        assert_close!(lattice.volume(), params.volume());
    }
}
