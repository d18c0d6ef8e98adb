use crate::{Atom, Rot, SeitzOp};
use crate::algo::overlap::all_overlap;

/// Find every space group operation of a structure whose rotation part
/// is among `rotations`.
///
/// For each rotation, candidate translations map the first minority atom onto
/// each minority atom in turn. A rotation may therefore contribute several
/// operations when the cell is not primitive.
pub fn find_operations(
    rotations: &[Rot],
    minority: &[Atom],
    atoms: &[Atom],
    precision: f64,
) -> Vec<SeitzOp>
{
    let first = match minority.first() {
        Some(atom) => atom.frac,
        None => return vec![],
    };

    let mut out = vec![];
    for rot in rotations {
        let image = rot.transform(&first);
        for atom in minority {
            let op = SeitzOp::new(*rot, atom.frac - image);
            if all_overlap(&op, atoms, precision) {
                out.push(op);
            }
        }
    }
    trace!("{} of {} rotations are symmetries", {
        let mut rots: Vec<_> = out.iter().map(|op| op.rot).collect();
        rots.dedup();
        rots.len()
    }, rotations.len());
    out
}
