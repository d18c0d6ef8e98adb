use crysym_array_types::V3;

/// An atom of a periodic structure, in fractional coordinates.
///
/// The `kind` is an opaque tag; only equality between tags is meaningful.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Atom {
    pub frac: V3,
    pub kind: u32,
}

impl Atom {
    #[inline]
    pub fn new(frac: V3, kind: u32) -> Self
    { Atom { frac, kind } }
}

/// Reduce fractional coordinates into `[0, 1)`.
#[inline]
pub fn fract(v: &V3) -> V3 {
    v.map(|x| {
        let f = x - x.floor();
        // tiny negative inputs can round up to exactly 1.0
        if f >= 1.0 { 0.0 } else { f }
    })
}

/// The tag that occurs least often, ties broken by the smallest tag.
pub fn minority_kind(atoms: &[Atom]) -> Option<u32> {
    let mut counts = std::collections::BTreeMap::new();
    for atom in atoms {
        *counts.entry(atom.kind).or_insert(0usize) += 1;
    }
    counts.into_iter()
        .min_by_key(|&(kind, count)| (count, kind))
        .map(|(kind, _)| kind)
}

/// All atoms of the given kind.
pub(crate) fn of_kind(atoms: &[Atom], kind: u32) -> Vec<Atom>
{ atoms.iter().filter(|a| a.kind == kind).cloned().collect() }
