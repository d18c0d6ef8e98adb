use std::collections::{HashSet, VecDeque};
use std::hash::Hash;

// NOTE: There is no "group" trait. The same type often admits more than
//       one useful group operation (e.g. operators with or without their
//       translations), so the operation is supplied as a closure.

/// Generates a finite group from a non-empty set of generators.
///
/// The generators may contain duplicates or extraneous elements.
/// `compose(a, b)` should perform *`a` followed by `b`*.
///
/// Elements are returned in order of discovery, which is breadth-first
/// from the generators.
pub(crate) fn generate_finite_group<G>(
    generators: &[G],
    mut compose: impl FnMut(&G, &G) -> G,
) -> Vec<G>
where G: Hash + Eq + Clone,
{
    assert!(!generators.is_empty(), "empty groups do not exist!");

    let mut seen = HashSet::new();
    let mut out = vec![];

    let mut queue: VecDeque<_> = generators.iter().cloned().collect();
    while let Some(g) = queue.pop_front() {
        if seen.insert(g.clone()) {
            queue.extend(generators.iter().map(|h| compose(&g, h)));
            out.push(g);
        }
    }
    out
}
