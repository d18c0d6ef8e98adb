use crate::Rot;
use super::point_group::{LaueClass, RotationType};

use crysym_array_types::{V3, M33, mat};
use crysym_numtheory::gcd_all;

use std::fmt;

/// Candidate rotation axes, as integer directions in the reduced cell.
///
/// Order matters: earlier (shorter) axes are preferred.
pub(crate) static AXES: [[i32; 3]; 73] = [
    [1, 0, 0], [0, 1, 0], [0, 0, 1],
    [0, 1, 1], [1, 0, 1], [1, 1, 0],
    [0, -1, 1], [-1, 0, 1], [-1, 1, 0],
    [1, 1, 1], [-1, 1, 1], [1, -1, 1], [-1, -1, 1],
    [0, 1, 2], [2, 0, 1], [1, 2, 0], [0, 2, 1], [1, 0, 2], [2, 1, 0],
    [0, -1, 2], [-2, 0, 1], [-1, 2, 0], [0, -2, 1], [-1, 0, 2], [-2, 1, 0],
    [2, 1, 1], [1, 2, 1], [1, 1, 2],
    [-2, 1, 1], [1, -2, 1], [-1, -1, 2], [-2, -1, 1], [-1, 2, 1], [1, -1, 2],
    [2, -1, 1], [-1, -2, 1], [-1, 1, 2],
    [3, 1, 2], [2, 3, 1], [1, 2, 3], [3, 2, 1], [1, 3, 2], [2, 1, 3],
    [3, -1, 2], [-2, -3, 1], [-1, 2, 3], [3, -2, 1], [-1, -3, 2], [-2, 1, 3],
    [-3, 1, 2], [2, -3, 1], [-1, -2, 3], [-3, 2, 1], [1, -3, 2], [-2, -1, 3],
    [-3, -1, 2], [-2, 3, 1], [1, -2, 3], [-3, -2, 1], [-1, 3, 2], [2, -1, 3],
    [1, 1, 3], [-1, 1, 3], [1, -1, 3], [-1, -1, 3],
    [1, 3, 1], [-1, 3, 1], [-1, -3, 1], [1, -3, 1],
    [3, 1, 1], [-3, -1, 1], [3, -1, 1], [-3, 1, 1],
];

fn axis(k: usize) -> V3<i32>
{ V3(AXES[k]) }

fn axis_index(v: &V3<i32>) -> Option<usize>
{ AXES.iter().position(|a| a == &v.0) }

/// Index of the first listed axis left fixed by a proper rotation.
fn rotation_axis(rot: &M33<i32>) -> Option<usize>
{ (0..AXES.len()).find(|&k| rot * &axis(k) == axis(k)) }

/// Listed axes orthogonal to the axis of an `n`-fold proper rotation.
///
/// These are the kernel of `1 + R + ... + R^(n-1)`.
fn orthogonal_axes(rot: &M33<i32>, n: i32) -> Vec<V3<i32>>
{
    let mut sum = M33::eye();
    let mut power = M33::eye();
    for _ in 1..n {
        power = &power * rot;
        sum = sum + power;
    }
    (0..AXES.len()).map(axis).filter(|a| &sum * a == V3::zero()).collect()
}

/// Construct conventional axes from the rotations of a structure.
///
/// The columns of the output are the new axes, in terms of the reduced cell.
/// For triclinic and monoclinic classes this is only a starting point
/// that must be further reduced.
pub(crate) fn construct_axes(laue: LaueClass, rotations: &[Rot]) -> Option<M33<i32>>
{
    let principal = match laue.principal_rotation() {
        None => return Some(M33::eye()),
        Some(ty) => ty,
    };
    let order = principal.symbol();

    let propers: Vec<M33<i32>> = {
        rotations.iter()
            .map(|r| r.proper())
            .filter(|r| RotationType::of(r) == Some(principal))
            .map(|r| *r.matrix())
            .collect()
    };
    let first = propers.first()?;

    match laue {
        LaueClass::BarOne => unreachable!(),

        LaueClass::TwoOverM => {
            let b = axis(rotation_axis(first)?);
            let mut others = orthogonal_axes(first, 2);
            // stable sort, so ties go to the earlier axis
            others.sort_by_key(|v| v.sqnorm());
            let (a, c) = match &others[..] {
                [a, c, ..] => (*a, *c),
                _ => return None,
            };
            let m = M33::from_cols([a, b, c]);
            Some(match m.det() < 0 {
                true => M33::from_cols([c, b, a]),
                false => m,
            })
        },

        LaueClass::Mmm | LaueClass::MBarThree | LaueClass::MBarThreeM => {
            let mut indices = vec![];
            for rot in &propers {
                let k = rotation_axis(rot)?;
                if !indices.contains(&k) {
                    indices.push(k);
                }
            }
            indices.sort();
            let (a, b, c) = match &indices[..] {
                [a, b, c, ..] => (axis(*a), axis(*b), axis(*c)),
                _ => return None,
            };
            let m = M33::from_cols([a, b, c]);
            Some(match m.det() < 0 {
                true => M33::from_cols([a, c, b]),
                false => m,
            })
        },

        _ => {
            let c = axis(rotation_axis(first)?);
            for a in orthogonal_axes(first, order) {
                let b = first * &a;
                if axis_index(&b).is_none() && axis_index(&-b).is_none() {
                    continue;
                }
                let m = M33::from_cols([a, b, c]);
                if m.det().abs() < 4 {
                    return Some(match m.det() < 0 {
                        true => M33::from_cols([b, a, c]),
                        false => m,
                    });
                }
            }
            None
        },
    }
}

/// A lattice centering.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Centering { P, A, B, C, I, R, F }

impl Centering {
    pub fn from_symbol(c: char) -> Option<Centering>
    {
        use self::Centering::*;
        Some(match c {
            'P' => P, 'A' => A, 'B' => B, 'C' => C,
            'I' => I, 'R' => R, 'F' => F,
            _ => return None,
        })
    }

    pub fn symbol(self) -> char
    {
        use self::Centering::*;
        match self {
            P => 'P', A => 'A', B => 'B', C => 'C',
            I => 'I', R => 'R', F => 'F',
        }
    }

    /// Nonzero centering translations, in twelfths.
    pub fn twelfths(self) -> &'static [[i32; 3]]
    {
        use self::Centering::*;
        match self {
            P => &[],
            A => &[[0, 6, 6]],
            B => &[[6, 0, 6]],
            C => &[[6, 6, 0]],
            I => &[[6, 6, 6]],
            R => &[[8, 4, 4], [4, 8, 8]],
            F => &[[0, 6, 6], [6, 0, 6], [6, 6, 0]],
        }
    }

    /// Nonzero centering translations.
    pub fn translations(self) -> Vec<V3>
    {
        self.twelfths().iter()
            .map(|t| V3(*t).map(|x| f64::from(x) / 12.0))
            .collect()
    }

    /// Number of lattice points per conventional cell.
    pub fn multiplicity(self) -> usize
    { 1 + self.twelfths().len() }

    /// The change of basis (columns) from the centred cell to a primitive one.
    pub fn to_primitive(self) -> M33
    {
        use self::Centering::*;
        let cols = |a: [f64; 3], b: [f64; 3], c: [f64; 3]| M33::from_cols([V3(a), V3(b), V3(c)]);
        let (h, t) = (0.5, 1.0 / 3.0);
        match self {
            P => M33::eye(),
            A => cols([-1.0, 0.0, 0.0], [0.0, -h, h], [0.0, h, h]),
            B => cols([-h, 0.0, h], [0.0, -1.0, 0.0], [h, 0.0, h]),
            C => cols([h, h, 0.0], [h, -h, 0.0], [0.0, 0.0, -1.0]),
            I => cols([-h, h, h], [h, -h, h], [h, h, -h]),
            F => cols([0.0, h, h], [h, 0.0, h], [h, h, 0.0]),
            R => cols([2.0 * t, t, t], [-t, t, t], [-t, -2.0 * t, t]),
        }
    }
}

impl fmt::Display for Centering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    { write!(f, "{}", self.symbol()) }
}

/// The centering implied by conventional axes `m`, written in a primitive cell.
pub(crate) fn centering_of(m: &M33<i32>) -> Option<Centering>
{
    let rows = &m.0;
    let unit_row = |k: usize| rows.iter().any(|row| {
        (0..3).all(|j| match j == k {
            true => row[j].abs() == 1,
            false => row[j] == 0,
        })
    });

    match m.det().abs() {
        1 => Some(Centering::P),
        2 => {
            if unit_row(0) { Some(Centering::A) }
            else if unit_row(1) { Some(Centering::B) }
            else if unit_row(2) { Some(Centering::C) }
            else if rows[0].0.iter().map(|x| x.abs()).sum::<i32>() == 2 { Some(Centering::I) }
            else { None }
        },
        3 => Some(Centering::R),
        4 => Some(Centering::F),
        _ => None,
    }
}

/// A further change of basis that brings a centred cell into a standard form.
///
/// A and B centrings (and I centring in monoclinic cells) become C; reverse
/// rhombohedral cells become obverse.
pub(crate) fn basis_correction(
    m: &M33<i32>,
    centering: Centering,
    laue: LaueClass,
) -> (M33<i32>, Centering)
{
    let cols = |a: [i32; 3], b: [i32; 3], c: [i32; 3]| M33::from_cols([V3(a), V3(b), V3(c)]);
    let monoclinic = laue == LaueClass::TwoOverM;

    match (m.det().abs(), centering) {
        (2, Centering::A) if monoclinic => (cols([0, 0, 1], [0, -1, 0], [1, 0, 0]), Centering::C),
        (2, Centering::A) => (cols([0, 1, 0], [0, 0, 1], [1, 0, 0]), Centering::C),
        (2, Centering::B) => (cols([0, 0, 1], [1, 0, 0], [0, 1, 0]), Centering::C),
        (2, Centering::I) if monoclinic => (cols([1, 0, 1], [0, 1, 0], [-1, 0, 0]), Centering::C),
        (3, _) => {
            // lattice points of a reverse setting are not integral in the obverse one
            let test = &cols([0, -1, 1], [1, 0, -1], [1, 1, 1]) * &m.adjugate();
            match gcd_all(test.0.iter().flat_map(|row| row.0.iter().cloned())) {
                3 => (cols([1, 1, 0], [-1, 0, 0], [0, 0, 1]), centering),
                _ => (mat::eye(), centering),
            }
        },
        _ => (mat::eye(), centering),
    }
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;

    #[test]
    fn axes_are_distinct() {
        for (i, a) in AXES.iter().enumerate() {
            assert_eq!(axis_index(&V3(*a)), Some(i));
            assert_eq!(axis_index(&-V3(*a)), None, "{:?}", a);
        }
    }

    #[test]
    fn rotation_axes() {
        let four_z = mat::from_array([[0, -1, 0], [1, 0, 0], [0, 0, 1]]);
        assert_eq!(rotation_axis(&four_z), Some(2));
        let three = mat::from_array([[0, 0, 1], [1, 0, 0], [0, 1, 0]]);
        assert_eq!(AXES[rotation_axis(&three).unwrap()], [1, 1, 1]);

        let ortho = orthogonal_axes(&four_z, 4);
        assert!(ortho.iter().all(|v| v[2] == 0));
        assert_eq!(ortho[0], V3([1, 0, 0]));
    }

    #[test]
    fn tetragonal_axes() {
        let rots = vec![
            Rot::eye(),
            Rot::from(&[[0, -1, 0], [1, 0, 0], [0, 0, 1]]),
            Rot::from(&[[-1, 0, 0], [0, -1, 0], [0, 0, 1]]),
            Rot::from(&[[0, 1, 0], [-1, 0, 0], [0, 0, 1]]),
        ];
        let m = construct_axes(LaueClass::FourOverM, &rots).unwrap();
        assert_eq!(m, M33::eye());
    }

    #[test]
    fn monoclinic_axes() {
        // twofold about b
        let rots = vec![Rot::eye(), Rot::from(&[[-1, 0, 0], [0, 1, 0], [0, 0, -1]])];
        let m = construct_axes(LaueClass::TwoOverM, &rots).unwrap();
        assert_eq!(m.col(1), V3([0, 1, 0]));
        assert_eq!(m.det(), 1);
        assert_eq!(construct_axes(LaueClass::TwoOverM, &rots[..1]), None);
    }

    #[test]
    fn centerings() {
        let cols = |a: [i32; 3], b: [i32; 3], c: [i32; 3]| M33::from_cols([V3(a), V3(b), V3(c)]);
        assert_eq!(centering_of(&M33::eye()), Some(Centering::P));
        // body centred cubic: conventional axes from a primitive cell
        let bcc = cols([0, 1, 1], [1, 0, 1], [1, 1, 0]);
        assert_eq!(centering_of(&bcc), Some(Centering::I));
        let fcc = cols([-1, 1, 1], [1, -1, 1], [1, 1, -1]);
        assert_eq!(centering_of(&fcc), Some(Centering::F));
        let c_face = cols([1, -1, 0], [1, 1, 0], [0, 0, 1]);
        assert_eq!(centering_of(&c_face), Some(Centering::C));

        assert_eq!(Centering::F.multiplicity(), 4);
        assert_eq!(Centering::from_symbol('R'), Some(Centering::R));
        assert_eq!(Centering::from_symbol('Q'), None);
    }

    #[test]
    fn primitive_transforms_have_right_volume() {
        for &(c, det) in &[
            (Centering::P, 1.0), (Centering::A, 0.5), (Centering::B, 0.5), (Centering::C, 0.5),
            (Centering::I, 0.5), (Centering::F, 0.25), (Centering::R, 1.0 / 3.0),
        ] {
            assert_close!(c.to_primitive().det(), det);
            assert_close!(c.multiplicity() as f64 * det, 1.0);
        }
    }

    #[test]
    fn corrections_give_c_centring() {
        let m = mat::from_array([[2, 0, 0], [0, 1, 0], [0, 0, 1]]);
        let (corr, c) = basis_correction(&m, Centering::A, LaueClass::Mmm);
        assert_eq!(c, Centering::C);
        assert_eq!(corr.det().abs(), 1);
        let (corr, c) = basis_correction(&m, Centering::P, LaueClass::Mmm);
        assert_eq!((corr, c), (M33::eye(), Centering::P));
    }
}
