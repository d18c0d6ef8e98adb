use crate::FailResult;

use crysym_array_types::V3;
use crysym_structure::{Atom, CellParams, Lattice};
use crysym_tasks_config::{AtomDoc, CellDoc, Kind, StructureDoc, YamlRead};

use path_abs::FileRead;
use std::path::Path;

/// A structure whose atom kinds carry the labels from its input file.
///
/// Labels become integer tags in order of first appearance.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledStructure {
    lattice: Lattice,
    atoms: Vec<Atom>,
    labels: Vec<Kind>,
}

impl LabeledStructure {
    /// Read a structure document; `.json` files are JSON, anything else is YAML.
    pub fn load(path: impl AsRef<Path>) -> FailResult<Self>
    {
        let path = path.as_ref();
        let file = FileRead::open(path)?;
        let doc = match path.extension().and_then(|s| s.to_str()) {
            Some("json") => StructureDoc::from_json_reader(file)?,
            _ => StructureDoc::from_reader(file)?,
        };
        debug!("read {} atoms from {}", doc.atoms.len(), path.display());
        LabeledStructure::from_doc(doc)
    }

    pub fn from_doc(doc: StructureDoc) -> FailResult<Self>
    {
        let lattice = match (doc.lattice, doc.cell) {
            (Some(rows), None) => Lattice::from_vectors(&[V3(rows[0]), V3(rows[1]), V3(rows[2])]),
            (None, Some(cell)) => {
                CellParams::from_degrees(
                    [cell.a, cell.b, cell.c],
                    [cell.alpha, cell.beta, cell.gamma],
                ).to_lattice()?
            },
            (Some(_), Some(_)) => bail!("a structure may have 'lattice' or 'cell', but not both"),
            (None, None) => bail!("a structure needs either 'lattice' or 'cell'"),
        };

        let [a, b, c] = lattice.norms();
        if !(lattice.volume() > 1e-10 * a * b * c) {
            bail!("the lattice vectors are linearly dependent");
        }

        let mut labels: Vec<Kind> = vec![];
        let mut atoms = vec![];
        for AtomDoc { frac, kind } in doc.atoms {
            if frac.iter().any(|x| !x.is_finite()) {
                bail!("atom of kind {} has a non-finite position {:?}", kind, frac);
            }
            let tag = match labels.iter().position(|label| label == &kind) {
                Some(tag) => tag,
                None => {
                    labels.push(kind);
                    labels.len() - 1
                },
            };
            atoms.push(Atom::new(V3(frac), tag as u32));
        }
        Ok(LabeledStructure { lattice, atoms, labels })
    }

    pub fn lattice(&self) -> &Lattice { &self.lattice }
    pub fn atoms(&self) -> &[Atom] { &self.atoms }

    /// The input label of an atom tag.
    pub fn label(&self, tag: u32) -> &Kind
    { &self.labels[tag as usize] }

    /// Write atoms (tagged like this structure's) back out with their labels.
    pub fn atom_docs(&self, atoms: &[Atom]) -> Vec<AtomDoc>
    {
        atoms.iter().map(|atom| AtomDoc {
            frac: atom.frac.0,
            kind: self.label(atom.kind).clone(),
        }).collect()
    }

    pub fn structure_doc(&self, lattice: &Lattice, atoms: &[Atom]) -> StructureDoc
    {
        StructureDoc {
            lattice: Some(lattice_rows(lattice)),
            cell: Some(cell_doc(lattice)),
            atoms: self.atom_docs(atoms),
        }
    }
}

pub fn lattice_rows(lattice: &Lattice) -> [[f64; 3]; 3]
{ lattice.matrix().into_array() }

pub fn cell_doc(lattice: &Lattice) -> CellDoc
{
    let params = lattice.params();
    let [a, b, c] = params.lengths();
    let [alpha, beta, gamma] = params.angles_degrees();
    CellDoc { a, b, c, alpha, beta, gamma }
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;

    fn doc(atoms: Vec<AtomDoc>) -> StructureDoc {
        StructureDoc {
            lattice: None,
            cell: Some(CellDoc { a: 3.0, b: 3.0, c: 3.0, alpha: 90.0, beta: 90.0, gamma: 90.0 }),
            atoms,
        }
    }

    fn atom(frac: [f64; 3], kind: Kind) -> AtomDoc
    { AtomDoc { frac, kind } }

    #[test]
    fn labels_in_order_of_appearance() {
        let structure = LabeledStructure::from_doc(doc(vec![
            atom([0.0; 3], Kind::Label("Cl".into())),
            atom([0.5; 3], Kind::Index(11)),
            atom([0.5, 0.0, 0.0], Kind::Label("Cl".into())),
        ])).unwrap();

        let tags: Vec<u32> = structure.atoms().iter().map(|a| a.kind).collect();
        assert_eq!(tags, vec![0, 1, 0]);
        assert_eq!(structure.label(1), &Kind::Index(11));

        let docs = structure.atom_docs(&structure.atoms()[1..]);
        assert_eq!(docs[0].kind, Kind::Index(11));
        assert_eq!(docs[1].frac, [0.5, 0.0, 0.0]);
        assert_close!(structure.lattice().volume(), 27.0);
    }

    #[test]
    fn bad_documents() {
        let mut both = doc(vec![]);
        both.lattice = Some([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        assert!(LabeledStructure::from_doc(both).is_err());

        let mut neither = doc(vec![]);
        neither.cell = None;
        assert!(LabeledStructure::from_doc(neither).is_err());

        let mut flat = doc(vec![]);
        flat.cell = None;
        flat.lattice = Some([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 1.0, 0.0]]);
        assert!(LabeledStructure::from_doc(flat).is_err());

        let nan = doc(vec![atom([std::f64::NAN, 0.0, 0.0], Kind::Index(1))]);
        assert!(LabeledStructure::from_doc(nan).is_err());
    }

    #[test]
    fn round_trip_through_doc() {
        let structure = LabeledStructure::from_doc(doc(vec![atom([0.25; 3], Kind::Label("Si".into()))])).unwrap();
        let out = structure.structure_doc(structure.lattice(), structure.atoms());
        assert_close!(out.cell.unwrap().a, 3.0);
        assert_close!(out.lattice.unwrap()[2][2], 3.0);
        assert_eq!(out.atoms, vec![atom([0.25; 3], Kind::Label("Si".into()))]);
    }
}
