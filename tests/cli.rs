#[macro_use] extern crate pretty_assertions;
#[macro_use] extern crate crysym_assert_close;

use serde_json::Value;
use std::process::{Command, Output};

fn crysym(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_crysym"))
        .args(args)
        .output()
        .unwrap()
}

fn json_stdout(args: &[&str]) -> Value {
    let output = crysym(args);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn spacegroup_report() {
    let report = json_stdout(&["spacegroup", "tests/resources/nacl.yaml"]);
    assert_eq!(report["number"], Value::from(225));
    assert_eq!(report["hm-symbol"], Value::from("F m -3 m"));
    assert_eq!(report["schoenflies"], Value::from("Oh^5"));
    assert_eq!(report["crystal-system"], Value::from("cubic"));
    assert_eq!(report["centering"], Value::from("F"));
    assert_eq!(report["conventional"]["atoms"].as_array().unwrap().len(), 8);
    assert_eq!(report["asymmetric-atoms"].as_array().unwrap().len(), 2);
}

#[test]
fn primitive_keeps_integer_kinds() {
    let report = json_stdout(&["-v", "primitive", "tests/resources/hex-rhombohedral.json"]);
    let atoms = report["atoms"].as_array().unwrap();
    assert_eq!(atoms.len(), 1);
    assert_eq!(atoms[0]["kind"], Value::from(6));

    let cell = &report["cell"];
    assert_close!(rel=1e-4, cell["a"].as_f64().unwrap(), 5.0);
    assert_close!(rel=1e-4, cell["alpha"].as_f64().unwrap(), 70.0);
}

#[test]
fn reduce_report() {
    let report = json_stdout(&["reduce", "tests/resources/sheared.yaml"]);
    for key in &["niggli", "delaunay"] {
        let lengths: Vec<f64> = ["a", "b", "c"].iter()
            .map(|k| report[*key]["cell"][*k].as_f64().unwrap())
            .collect();
        for length in lengths {
            assert_close!(length, 1.0);
        }
    }
    assert!(report["niggli-transform"].is_array());
}

#[test]
fn config_file() {
    let report = json_stdout(&[
        "-c", "tests/resources/loose-settings.yaml",
        "niggli", "tests/resources/a-centered.yaml",
    ]);
    assert_eq!(report["atoms"].as_array().unwrap().len(), 1);
}

#[test]
fn failures_exit_nonzero() {
    let output = crysym(&["spacegroup", "tests/resources/sheared.yaml"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("no atoms"));

    let output = crysym(&["-c", "tests/resources/typo-settings.yaml", "reduce", "tests/resources/sheared.yaml"]);
    assert!(!output.status.success());

    let output = crysym(&[]);
    assert!(!output.status.success());
}
