//! Hall symbols.
//!
//! A Hall symbol such as `-P 4ab 2ab (0 0 1)` lists a lattice centering,
//! a few generating operations, and an optional change of origin. See
//! Hall, S. R. (1981), Acta Cryst. A37, 517-525.

use crate::{FracOp, FracTrans, Rot};
use crate::algo::group::generate_finite_group;
use super::axes::Centering;

use crysym_array_types::{V3, M33, mat};

#[derive(Debug, Fail)]
#[fail(display = "Bad Hall symbol {:?}: {}", symbol, reason)]
pub struct HallParseError {
    symbol: String,
    reason: String,
}

/// A parsed Hall symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HallSymbol {
    centering: Centering,
    centrosymmetric: bool,
    generators: Vec<FracOp>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Axis { X, Y, Z, Prime, DoublePrime, Star }

impl HallSymbol {
    pub fn parse(symbol: &str) -> Result<HallSymbol, HallParseError>
    {
        let err = |reason: &str| HallParseError {
            symbol: symbol.to_string(),
            reason: reason.to_string(),
        };

        let (body, shift) = match symbol.find('(') {
            None => (symbol, V3([0, 0, 0])),
            Some(open) => {
                let inner = symbol[open + 1..].trim_end().trim_end_matches(')');
                let words = inner.split_whitespace()
                    .map(|w| w.parse::<i32>().map_err(|_| err("bad origin shift")))
                    .collect::<Result<Vec<_>, _>>()?;
                if words.len() != 3 {
                    throw!(err("origin shift needs three numbers"));
                }
                (&symbol[..open], V3([words[0], words[1], words[2]]))
            },
        };

        let mut tokens = body.split_whitespace();
        let lattice = tokens.next().ok_or_else(|| err("empty symbol"))?;
        let (centrosymmetric, lattice) = match lattice.starts_with('-') {
            true => (true, &lattice[1..]),
            false => (false, lattice),
        };
        let mut chars = lattice.chars();
        let centering = match (chars.next(), chars.next()) {
            (Some(c), None) => Centering::from_symbol(c),
            _ => None,
        }.ok_or_else(|| err("unknown lattice symbol"))?;

        let mut generators = vec![];
        if centrosymmetric {
            generators.push(FracOp::from(Rot::new(&-M33::eye())));
        }

        let mut prev_order = None;
        let mut prev_axis = None;
        for (index, token) in tokens.enumerate() {
            let (op, order, axis) = parse_rotation(token, index, prev_order, prev_axis)
                .ok_or_else(|| err(&format!("bad operation {:?}", token)))?;
            generators.push(op);
            prev_order = Some(order);
            if let Axis::X | Axis::Y | Axis::Z = axis {
                prev_axis = Some(axis);
            }
        }

        // moving the origin by V turns (R, t) into (R, t + (I - R) V)
        let generators = generators.into_iter().map(|op| {
            let r = op.rot().matrix();
            let t = op.trans().twelfths() + &(&(M33::eye() - r) * &shift);
            FracOp::new(op.rot(), &FracTrans::from_twelfths(t))
        }).collect();

        Ok(HallSymbol { centering, centrosymmetric, generators })
    }

    pub fn centering(&self) -> Centering
    { self.centering }

    pub fn is_centrosymmetric(&self) -> bool
    { self.centrosymmetric }

    /// The explicit generators, including the inversion for a `-` lattice symbol.
    ///
    /// Centering translations are not included.
    pub fn generators(&self) -> &[FracOp]
    { &self.generators }

    /// Every operation of the group in the conventional cell,
    /// including centering translations, in sorted order.
    pub fn operations(&self) -> Vec<FracOp>
    {
        let mut gens = self.generators.clone();
        gens.extend({
            self.centering.twelfths().iter()
                .map(|&t| FracOp::from(FracTrans::from_twelfths(V3(t))))
        });
        close(&gens)
    }
}

// Parse a token like `-4bd`, `2"`, `3*` or `61`.
fn parse_rotation(
    token: &str,
    index: usize,
    prev_order: Option<u32>,
    prev_axis: Option<Axis>,
) -> Option<(FracOp, u32, Axis)>
{
    let (negate, token) = match token.starts_with('-') {
        true => (true, &token[1..]),
        false => (false, token),
    };
    let mut chars = token.chars().peekable();

    let order = chars.next()?.to_digit(10)?;
    match order {
        1 | 2 | 3 | 4 | 6 => {},
        _ => return None,
    }

    let screw = match chars.peek().and_then(|c| c.to_digit(10)) {
        Some(s) => { chars.next(); Some(s) },
        None => None,
    };

    let explicit = match chars.peek() {
        Some(&'x') => Some(Axis::X),
        Some(&'y') => Some(Axis::Y),
        Some(&'z') => Some(Axis::Z),
        Some(&'\'') => Some(Axis::Prime),
        Some(&'"') => Some(Axis::DoublePrime),
        Some(&'*') => Some(Axis::Star),
        _ => None,
    };
    if explicit.is_some() {
        chars.next();
    }

    let axis = match explicit {
        Some(axis) => axis,
        None => match (index, order) {
            (0, _) => Axis::Z,
            (1, 2) => match prev_order {
                Some(2) | Some(4) => Axis::X,
                _ => Axis::Prime,
            },
            (2, 3) => Axis::Star,
            (_, 1) => Axis::Z,
            _ => return None,
        },
    };

    let mut rot = rotation_matrix(order, axis, prev_axis.unwrap_or(Axis::Z))?;
    let mut trans = V3([0, 0, 0]);
    if let Some(screw) = screw {
        let k = match axis {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
            _ => return None,
        };
        trans[k] += 12 * screw as i32 / order as i32;
    }
    for c in chars {
        trans += &translation_symbol(c)?;
    }

    if negate {
        rot = -rot;
    }
    let op = FracOp::new(&Rot::try_new(&rot)?, &FracTrans::from_twelfths(trans));
    Some((op, order, axis))
}

fn translation_symbol(c: char) -> Option<V3<i32>>
{
    Some(V3(match c {
        'a' => [6, 0, 0],
        'b' => [0, 6, 0],
        'c' => [0, 0, 6],
        'n' => [6, 6, 6],
        'u' => [3, 0, 0],
        'v' => [0, 3, 0],
        'w' => [0, 0, 3],
        'd' => [3, 3, 3],
        _ => return None,
    }))
}

// `reference` is the most recent principal axis, used by the face-diagonal twofolds.
fn rotation_matrix(order: u32, axis: Axis, reference: Axis) -> Option<M33<i32>>
{
    let m = mat::from_array;
    Some(match (order, axis) {
        (1, _) => M33::eye(),

        (2, Axis::X) => m([[1, 0, 0], [0, -1, 0], [0, 0, -1]]),
        (3, Axis::X) => m([[1, 0, 0], [0, 0, -1], [0, 1, -1]]),
        (4, Axis::X) => m([[1, 0, 0], [0, 0, -1], [0, 1, 0]]),
        (6, Axis::X) => m([[1, 0, 0], [0, 1, -1], [0, 1, 0]]),

        (2, Axis::Y) => m([[-1, 0, 0], [0, 1, 0], [0, 0, -1]]),
        (3, Axis::Y) => m([[-1, 0, 1], [0, 1, 0], [-1, 0, 0]]),
        (4, Axis::Y) => m([[0, 0, 1], [0, 1, 0], [-1, 0, 0]]),
        (6, Axis::Y) => m([[0, 0, 1], [0, 1, 0], [-1, 0, 1]]),

        (2, Axis::Z) => m([[-1, 0, 0], [0, -1, 0], [0, 0, 1]]),
        (3, Axis::Z) => m([[0, -1, 0], [1, -1, 0], [0, 0, 1]]),
        (4, Axis::Z) => m([[0, -1, 0], [1, 0, 0], [0, 0, 1]]),
        (6, Axis::Z) => m([[1, -1, 0], [1, 0, 0], [0, 0, 1]]),

        (2, Axis::Prime) => match reference {
            Axis::X => m([[-1, 0, 0], [0, 0, -1], [0, -1, 0]]),
            Axis::Y => m([[0, 0, -1], [0, -1, 0], [-1, 0, 0]]),
            _ => m([[0, -1, 0], [-1, 0, 0], [0, 0, -1]]),
        },
        (2, Axis::DoublePrime) => match reference {
            Axis::X => m([[-1, 0, 0], [0, 0, 1], [0, 1, 0]]),
            Axis::Y => m([[0, 0, 1], [0, -1, 0], [1, 0, 0]]),
            _ => m([[0, 1, 0], [1, 0, 0], [0, 0, -1]]),
        },

        (3, Axis::Star) => m([[0, 0, 1], [1, 0, 0], [0, 1, 0]]),

        _ => return None,
    })
}

/// Close a set of operations into a group (translations modulo 1), in sorted order.
pub(crate) fn close(generators: &[FracOp]) -> Vec<FracOp>
{
    let mut generators = generators.to_vec();
    generators.push(FracOp::eye());

    let mut ops = generate_finite_group(&generators, |a, b| a.then(b));
    ops.sort();
    ops
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;

    #[test]
    fn simple_symbols() {
        let p1 = HallSymbol::parse("P 1").unwrap();
        assert_eq!(p1.centering(), Centering::P);
        assert_eq!(p1.operations(), vec![FracOp::eye()]);

        let p1bar = HallSymbol::parse("-P 1").unwrap();
        assert!(p1bar.is_centrosymmetric());
        assert_eq!(p1bar.operations().len(), 2);

        // P 21/c
        let ops = HallSymbol::parse("-P 2ybc").unwrap().operations();
        assert_eq!(ops.len(), 4);
        let screw = FracOp::new(
            &Rot::from(&[[-1, 0, 0], [0, 1, 0], [0, 0, -1]]),
            &FracTrans::from_twelfths(V3([0, 6, 6])),
        );
        assert!(ops.contains(&screw));
    }

    #[test]
    fn implicit_axes() {
        // P 4 2 2: the second twofold is along x
        let sym = HallSymbol::parse("P 4 2").unwrap();
        assert_eq!(sym.generators()[1].rot(), &Rot::from(&[[1, 0, 0], [0, -1, 0], [0, 0, -1]]));
        assert_eq!(sym.operations().len(), 8);

        // P 3 1 2: after a threefold, the second twofold is a face diagonal
        let sym = HallSymbol::parse("P 3 2\"").unwrap();
        assert_eq!(sym.generators()[1].rot(), &Rot::from(&[[0, 1, 0], [1, 0, 0], [0, 0, -1]]));
        let sym = HallSymbol::parse("P 3 2").unwrap();
        assert_eq!(sym.generators()[1].rot(), &Rot::from(&[[0, -1, 0], [-1, 0, 0], [0, 0, -1]]));

        // P 2 3: body diagonal threefold
        let sym = HallSymbol::parse("P 2 2 3").unwrap();
        assert_eq!(sym.generators()[2].rot(), &Rot::from(&[[0, 0, 1], [1, 0, 0], [0, 1, 0]]));
        assert_eq!(sym.operations().len(), 12);
    }

    #[test]
    fn screws_and_centering() {
        // P 61
        let ops = HallSymbol::parse("P 61").unwrap().operations();
        assert_eq!(ops.len(), 6);
        assert!(ops.iter().any(|op| op.trans().twelfths() == &V3([0, 0, 2])));

        // F m -3 m has 192 operations in the conventional cell
        let ops = HallSymbol::parse("-F 4 2 3").unwrap().operations();
        assert_eq!(ops.len(), 192);

        // R -3 (hexagonal axes)
        let sym = HallSymbol::parse("-R 3").unwrap();
        assert_eq!(sym.centering(), Centering::R);
        assert_eq!(sym.operations().len(), 18);
    }

    #[test]
    fn origin_shift() {
        // P 2/m with the origin moved by (1/12, 1/12, 1/12)
        let sym = HallSymbol::parse("-P 2 (1 1 1)").unwrap();
        let inversion = sym.generators()[0];
        assert_eq!(inversion.rot(), &Rot::from(&[[-1, 0, 0], [0, -1, 0], [0, 0, -1]]));
        assert_eq!(inversion.trans().twelfths(), &V3([2, 2, 2]));
        assert_eq!(sym.generators()[1].trans().twelfths(), &V3([2, 2, 0]));
        assert_eq!(sym.operations().len(), 4);
    }

    #[test]
    fn malformed() {
        assert!(HallSymbol::parse("").is_err());
        assert!(HallSymbol::parse("Q 1").is_err());
        assert!(HallSymbol::parse("P 5").is_err());
        assert!(HallSymbol::parse("P 2q").is_err());
        assert!(HallSymbol::parse("P 2 (1 2)").is_err());
        // a fourth implicit twofold has no axis
        assert!(HallSymbol::parse("P 2 2 2 2").is_err());
    }
}
