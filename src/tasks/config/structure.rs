//! The structure document read and written by the command line tools.
//!
//! ```yaml
//! lattice: [[5.0, 0.0, 0.0], [0.0, 5.0, 0.0], [0.0, 0.0, 5.0]]
//! atoms:
//!   - {frac: [0.0, 0.0, 0.0], kind: Na}
//! ```
//!
//! Instead of `lattice`, a `cell` with lengths and angles (in degrees) may be given.

use std::fmt;
use std::io::Read;

#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct StructureDoc {
    /// Cell vectors as rows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lattice: Option<[[f64; 3]; 3]>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cell: Option<CellDoc>,

    pub atoms: Vec<AtomDoc>,
}
derive_yaml_read!{StructureDoc}

/// Cell parameters, with angles in degrees.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct CellDoc {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
}

#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct AtomDoc {
    pub frac: [f64; 3],
    pub kind: Kind,
}

/// An atom label. Only equality between labels is meaningful.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum Kind {
    Index(i64),
    Label(String),
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Index(x) => write!(f, "{}", x),
            Kind::Label(s) => write!(f, "{}", s),
        }
    }
}

impl StructureDoc {
    /// Read the JSON form, warning about unused keys.
    pub fn from_json_reader(r: impl Read) -> Result<StructureDoc, serde_json::Error> {
        let mut de = serde_json::Deserializer::from_reader(r);
        let doc = serde_ignored::deserialize(
            &mut de,
            |path| warn!("Unused structure item (possible typo?): {}", path),
        )?;
        de.end()?;
        Ok(doc)
    }
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;
    use crate::YamlRead;

    #[test]
    fn yaml_with_cell() {
        let yaml = "\
cell: {a: 4.0, b: 4.0, c: 6.0, alpha: 90, beta: 90, gamma: 120}
atoms:
  - {frac: [0.0, 0.0, 0.0], kind: Zn}
  - {frac: [0.0, 0.0, 0.5], kind: 8}
";
        let doc = StructureDoc::from_reader(yaml.as_bytes()).unwrap();
        assert_eq!(doc.lattice, None);
        assert_eq!(doc.cell.unwrap().gamma, 120.0);
        assert_eq!(doc.atoms[0].kind, Kind::Label("Zn".into()));
        assert_eq!(doc.atoms[1].kind, Kind::Index(8));
    }

    #[test]
    fn json_with_lattice() {
        let json = r#"{
            "lattice": [[1, 0, 0], [0, 1, 0], [0, 0, 1]],
            "atoms": [{"frac": [0.5, 0.5, 0.5], "kind": "Cs"}]
        }"#;
        let doc = StructureDoc::from_json_reader(json.as_bytes()).unwrap();
        assert_eq!(doc.lattice.unwrap()[2], [0.0, 0.0, 1.0]);
        assert_eq!(doc.atoms.len(), 1);
        assert_eq!(doc.atoms[0].kind.to_string(), "Cs");

        assert!(StructureDoc::from_json_reader(&b"{\"atoms\": []} x"[..]).is_err());
    }
}
