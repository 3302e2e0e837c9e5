//! Integration tests for the navigator binary.
//!
//! Runs the built CLI against manifests written to a temporary directory.

#![allow(non_snake_case)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

const MANIFEST: &str = r#"
[introspection]
parcelables = ["com.example.model.User"]

[[classes]]
name = "com.example.DetailActivity"

[[classes.params]]
name = "id"
type = "long"
annotations = [{ name = "androidx.annotation.NonNull" }]

[[classes.params]]
name = "byId"
type = "android.util.SparseArray<com.example.model.User>"

[[classes]]
name = "com.example.settings.SettingsActivity"
"#;

/// Helper to write a manifest into the temp directory.
fn write_manifest(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("navigator.toml");
    fs::write(&path, content).unwrap();
    path
}

fn navigator(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_navigator"))
        .args(args)
        .current_dir(cwd)
        .output()
        .unwrap()
}

// =============================================================================
// generate
// =============================================================================

mod generate {
    use super::*;

    #[test]
    fn generate___with_output___writes_extension_files() {
        let temp_dir = TempDir::new().unwrap();
        write_manifest(&temp_dir, MANIFEST);

        let output = navigator(&["generate", "--output", "gen"], temp_dir.path());

        assert!(output.status.success(), "{output:?}");
        let detail = temp_dir
            .path()
            .join("gen/com/example/DetailActivityNavigatorExtensions.kt");
        let settings = temp_dir
            .path()
            .join("gen/com/example/settings/SettingsActivityNavigatorExtensions.kt");
        let detail_source = fs::read_to_string(detail).unwrap();
        assert!(detail_source.contains("    id: Long,\n    byId: SparseArray<User>\n"));
        assert!(detail_source.contains("import android.util.SparseArray\n"));
        assert!(settings.exists());
    }

    #[test]
    fn generate___without_output___writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        write_manifest(&temp_dir, MANIFEST);

        let output = navigator(&["generate"], temp_dir.path());

        assert!(output.status.success(), "{output:?}");
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("nothing to generate"));
        assert!(!temp_dir.path().join("com").exists());
    }

    #[test]
    fn generate___dry_run___prints_sources() {
        let temp_dir = TempDir::new().unwrap();
        write_manifest(&temp_dir, MANIFEST);

        let output = navigator(&["generate", "--output", "gen", "--dry-run"], temp_dir.path());

        assert!(output.status.success(), "{output:?}");
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("// com/example/DetailActivityNavigatorExtensions.kt"));
        assert!(stdout.contains("fun Any.settingsActivityBuilder(): SettingsActivityBuilder ="));
        assert!(!temp_dir.path().join("gen").exists());
    }

    #[test]
    fn generate___missing_manifest___fails() {
        let temp_dir = TempDir::new().unwrap();

        let output = navigator(&["generate", "--output", "gen"], temp_dir.path());

        assert!(!output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Failed to read class manifest"));
    }
}

// =============================================================================
// check
// =============================================================================

mod check {
    use super::*;

    #[test]
    fn check___valid_manifest___reports_summary() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_manifest(&temp_dir, MANIFEST);

        let output = navigator(&["check", "--classes", &path.to_string_lossy()], temp_dir.path());

        assert!(output.status.success(), "{output:?}");
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("✓ Classes: 2"));
        assert!(stdout.contains("✓ Parameters: 2"));
        assert!(stdout.contains("Output: not configured"));
    }

    #[test]
    fn check___duplicate_parameter___fails() {
        let temp_dir = TempDir::new().unwrap();
        let manifest = r#"
[[classes]]
name = "com.example.A"

[[classes.params]]
name = "id"
type = "int"

[[classes.params]]
name = "id"
type = "int"
"#;
        write_manifest(&temp_dir, manifest);

        let output = navigator(&["check"], temp_dir.path());

        assert!(!output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Duplicate parameter 'id'"));
    }
}
