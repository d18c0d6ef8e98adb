use crate::{Lattice, Atom};
use crate::cell::atoms::fract;

/// Pairs a list of [`Atom`]s with their [`Lattice`].
///
/// [`Atom`]: ../struct.Atom.html
/// [`Lattice`]: ../struct.Lattice.html
#[derive(Debug, Clone, PartialEq)]
pub struct Structure {
    pub(crate) lattice: Lattice,
    pub(crate) atoms: Vec<Atom>,
}

impl Structure {
    pub fn new<As>(lattice: Lattice, atoms: As) -> Self
    where As: IntoIterator<Item=Atom>,
    {
        let atoms = atoms.into_iter().collect();
        Structure { lattice, atoms }
    }

    pub fn num_atoms(&self) -> usize { self.atoms.len() }
    pub fn lattice(&self) -> &Lattice { &self.lattice }
    pub fn atoms(&self) -> &[Atom] { &self.atoms }

    /// Move all data out by value.
    pub fn into_parts(self) -> (Lattice, Vec<Atom>)
    { (self.lattice, self.atoms) }

    /// Cartesian positions of the atoms.
    pub fn to_carts(&self) -> Vec<crysym_array_types::V3>
    { self.atoms.iter().map(|a| &a.frac * &self.lattice).collect() }

    /// Reduce all fractional coordinates into `[0, 1)`.
    pub fn reduce_positions(&mut self) {
        for atom in &mut self.atoms {
            atom.frac = fract(&atom.frac);
        }
    }
}
