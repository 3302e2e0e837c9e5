#![allow(non_snake_case)]

use super::*;
use std::fs;
use tempfile::TempDir;

const MANIFEST: &str = r#"
[introspection]
parcelables = ["com.example.model.User"]

[[classes]]
name = "com.example.DetailActivity"

[[classes.params]]
name = "id"
type = "int"

[[classes.params]]
name = "team"
type = "com.example.model.User[]"
"#;

fn write_manifest(dir: &TempDir, content: &str) -> String {
    let path = dir.path().join("classes.toml");
    fs::write(&path, content).unwrap();
    path.to_string_lossy().into_owned()
}

// generate_units tests

#[test]
fn generate_units___uses_manifest_introspection() {
    let manifest = ClassManifest::from_str(MANIFEST).unwrap();
    let config = manifest.config(Some("out"));

    let units = generate_units(&manifest, &config).unwrap();

    assert_eq!(units.len(), 1);
    assert_eq!(units[0].builder.parameter_list(), "id: Int, team: Array<User>");
}

#[test]
fn generate_units___no_output___empty() {
    let manifest = ClassManifest::from_str(MANIFEST).unwrap();
    let config = manifest.config(None);

    let units = generate_units(&manifest, &config).unwrap();

    assert!(units.is_empty());
}

// run tests

#[test]
fn run___writes_files_to_output() {
    let temp_dir = TempDir::new().unwrap();
    let manifest_path = write_manifest(&temp_dir, MANIFEST);
    let output = temp_dir.path().join("generated");

    run(&manifest_path, output.to_str(), false).unwrap();

    let generated = output.join("com/example/DetailActivityNavigatorExtensions.kt");
    let source = fs::read_to_string(generated).unwrap();
    assert!(source.contains("fun Any.detailActivityBuilder("));
}

#[test]
fn run___dry_run___writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let manifest_path = write_manifest(&temp_dir, MANIFEST);
    let output = temp_dir.path().join("generated");

    run(&manifest_path, output.to_str(), true).unwrap();

    assert!(!output.exists());
}

#[test]
fn run___no_output_configured___succeeds_without_writing() {
    let temp_dir = TempDir::new().unwrap();
    let manifest_path = write_manifest(&temp_dir, MANIFEST);

    run(&manifest_path, None, false).unwrap();

    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 1);
}

#[test]
fn run___invalid_manifest___returns_error() {
    let temp_dir = TempDir::new().unwrap();
    let manifest_path = write_manifest(&temp_dir, "[[classes]]\nname = \"NoPackage\"\n");

    let result = run(&manifest_path, Some("unused"), false);

    assert!(result.is_err());
}

#[test]
fn run___missing_manifest___returns_error() {
    let result = run("/nonexistent/classes.toml", Some("out"), false);

    let err = result.unwrap_err();
    assert!(err.to_string().contains("Failed to read class manifest"));
}
