#[macro_use] extern crate pretty_assertions;
#[macro_use] extern crate crysym_assert_close;

use crysym_structure::spacegroup::{Centering, Holohedry};
use crysym_tasks::{LabeledStructure, Settings, SpaceGroupReport, space_group_report};
use crysym_tasks_config::YamlRead;

use path_abs::FileRead;

fn load(name: &str) -> LabeledStructure
{ LabeledStructure::load(format!("tests/resources/{}", name)).unwrap() }

fn settings(name: &str) -> Settings
{ Settings::from_reader(FileRead::open(format!("tests/resources/{}", name)).unwrap()).unwrap() }

/// The parts of a report that do not depend on floating point details.
#[derive(Debug, PartialEq)]
struct Summary {
    number: u16,
    hm_symbol: String,
    crystal_system: Holohedry,
    centering: Centering,
    num_conventional: usize,
    num_asymmetric: usize,
}

fn summary(report: &SpaceGroupReport) -> Summary {
    Summary {
        number: report.number,
        hm_symbol: report.hm_symbol.clone(),
        crystal_system: report.crystal_system,
        centering: report.centering,
        num_conventional: report.conventional.atoms.len(),
        num_asymmetric: report.asymmetric_atoms.len(),
    }
}

fn sorted(mut xs: Vec<f64>) -> Vec<f64> {
    xs.sort_by(|a, b| a.partial_cmp(b).unwrap());
    xs
}

#[test]
fn rock_salt() {
    let report = space_group_report(&load("nacl.yaml"), &Settings::default()).unwrap();
    assert_eq!(summary(&report), Summary {
        number: 225,
        hm_symbol: "F m -3 m".into(),
        crystal_system: Holohedry::Cubic,
        centering: Centering::F,
        num_conventional: 8,
        num_asymmetric: 2,
    });
    assert_eq!(report.hall_number, 523);
    assert_eq!(report.point_group, "m-3m");

    let cell = report.conventional.cell.unwrap();
    assert_close!(abs=1e-8, cell.a, 5.64);
    assert_close!(abs=1e-8, cell.beta, 90.0);

    let mut kinds: Vec<_> = report.asymmetric_atoms.iter().map(|a| a.kind.to_string()).collect();
    kinds.sort();
    assert_eq!(kinds, vec!["Cl", "Na"]);
}

#[test]
fn hexagonal_setting_of_rhombohedral_lattice() {
    let report = space_group_report(&load("hex-rhombohedral.json"), &Settings::default()).unwrap();
    assert_eq!(summary(&report), Summary {
        number: 166,
        hm_symbol: "R -3 m".into(),
        crystal_system: Holohedry::Trigonal,
        centering: Centering::R,
        num_conventional: 3,
        num_asymmetric: 1,
    });
    assert_eq!(report.hall_symbol, "-R 3 2\"");

    let cell = report.conventional.cell.unwrap();
    assert_close!(rel=1e-6, cell.a, 5.7358);
    assert_close!(rel=1e-6, cell.c, 11.2385);
    assert_close!(abs=1e-6, cell.gamma, 120.0);
}

#[test]
fn a_centered_becomes_c_centered() {
    let report = space_group_report(&load("a-centered.yaml"), &Settings::default()).unwrap();
    assert_eq!(summary(&report), Summary {
        number: 65,
        hm_symbol: "C m m m".into(),
        crystal_system: Holohedry::Orthorhombic,
        centering: Centering::C,
        num_conventional: 2,
        num_asymmetric: 1,
    });

    let cell = report.conventional.cell.unwrap();
    assert_close!(abs=1e-8, cell.c, 5.0);
    let face = sorted(vec![cell.a, cell.b]);
    assert_close!(abs=1e-8, face[0], 3.0);
    assert_close!(abs=1e-8, face[1], 4.0);
}

#[test]
fn origin_is_moved_to_inversion_center() {
    let report = space_group_report(&load("shifted-orthorhombic.yaml"), &Settings::default()).unwrap();
    assert_eq!(summary(&report), Summary {
        number: 47,
        hm_symbol: "P m m m".into(),
        crystal_system: Holohedry::Orthorhombic,
        centering: Centering::P,
        num_conventional: 2,
        num_asymmetric: 2,
    });

    // every atom now sits on one of the special positions 1a..1h
    for atom in &report.conventional.atoms {
        for &x in &atom.frac {
            let twice = 2.0 * x;
            assert_close!(abs=1e-8, twice, twice.round());
        }
    }

    let cell = report.conventional.cell.unwrap();
    let lengths = sorted(vec![cell.a, cell.b, cell.c]);
    assert_close!(abs=1e-8, lengths[0], 3.0);
    assert_close!(abs=1e-8, lengths[2], 5.0);
}

#[test]
fn precision_controls_tolerance_for_noise() {
    use rand::Rng;

    let clean = load("nacl.yaml");
    let mut doc = clean.structure_doc(clean.lattice(), clean.atoms());
    doc.cell = None;

    let mut rng = rand::thread_rng();
    for atom in &mut doc.atoms {
        for x in &mut atom.frac {
            *x += 5e-5 * rng.gen_range(-1.0, 1.0);
        }
    }
    let noisy = LabeledStructure::from_doc(doc).unwrap();

    let strict = space_group_report(&noisy, &Settings::default()).unwrap();
    assert_eq!(strict.number, 1);

    let loose = settings("loose-settings.yaml").validate().unwrap();
    let report = space_group_report(&noisy, &loose).unwrap();
    assert_eq!(report.number, 225);
}

#[test]
fn config_typos_and_bad_values() {
    let settings = settings("typo-settings.yaml");
    assert_eq!(settings.symmetry_precision, Settings::default().symmetry_precision);
    assert!(settings.validate().is_err());
}
