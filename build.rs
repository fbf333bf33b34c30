// build.rs
use serde::Deserialize;
use std::collections::HashMap;
use std::{env, fs, path::Path};

const FIXTURE_DIR: &str = "tests/fixtures";

#[derive(Deserialize)]
struct Manifest {
    cases: HashMap<String, Case>,
}

#[derive(Deserialize)]
struct Case {
    failed: bool,
    diagnostics: Vec<String>,
}

/// One `#[test]` per `tests/fixtures/*.dbg`, paired with the `.out` dump of
/// the same name and the expectations in `cases.json`.
fn generate_fixture_tests() {
    let manifest_path = Path::new(FIXTURE_DIR).join("cases.json");
    let json_str = fs::read_to_string(&manifest_path).expect("Missing tests/fixtures/cases.json");
    let manifest: Manifest = serde_json::from_str(&json_str).expect("cases.json parse error");

    let out_dir = env::var("OUT_DIR").unwrap();
    let destination = Path::new(&out_dir).join("generated_fixture_tests.rs");

    let mut test_code = String::new();
    let pattern = format!("{}/*.dbg", FIXTURE_DIR);
    let fixtures = glob::glob(&pattern).expect("Failed to read glob pattern");

    for entry in fixtures.filter_map(Result::ok) {
        let stem = entry.file_stem().unwrap().to_str().unwrap().to_string();
        let case = manifest
            .cases
            .get(&stem)
            .unwrap_or_else(|| panic!("No entry for fixture '{}' in cases.json", stem));

        let name = stem.replace(['-', '.', ' '], "_");
        let debug_path = entry.to_str().unwrap();
        let output_path = entry.with_extension("out");
        let output_path = output_path.to_str().unwrap();

        let mut diagnostics = String::new();
        for line in &case.diagnostics {
            diagnostics.push_str(&format!("r#\"{}\"#, ", line));
        }

        test_code.push_str(&format!(
            "#[test] fn fixture_{}() {{ run_fixture(r#\"{}\"#, r#\"{}\"#, {}, &[{}]); }}\n",
            name, output_path, debug_path, case.failed, diagnostics
        ));
        println!("cargo:rerun-if-changed={}", debug_path);
        println!("cargo:rerun-if-changed={}", output_path);
    }

    fs::write(destination, test_code).unwrap();
    println!("cargo:rerun-if-changed={}", manifest_path.display());
}

fn main() {
    generate_fixture_tests();
    println!("cargo:rerun-if-changed={}", FIXTURE_DIR);
    println!("cargo:rerun-if-changed=build.rs");
}
