#![allow(non_snake_case)]

use super::*;
use crate::extensions::ExtensionGenerator;
use navigator_core::{ClassDescriptor, GeneratorConfig, KnownTypes};
use tempfile::TempDir;

fn units(names: &[&str]) -> Vec<GenerationUnit> {
    let config = GeneratorConfig::new().with_output_dir("unused");
    let types = KnownTypes::new();
    let classes: Vec<ClassDescriptor> = names.iter().map(|n| ClassDescriptor::new(*n)).collect();

    ExtensionGenerator::new(&config, &types).generate(&classes).unwrap()
}

/// Emitter failing on the n-th unit with a fixed I/O error
struct FailingEmitter {
    fail_at: usize,
    emitted: usize,
}

impl FileEmitter for FailingEmitter {
    fn emit(&mut self, unit: &GenerationUnit) -> NavigatorResult<PathBuf> {
        if self.emitted == self.fail_at {
            return Err(NavigatorError::io(
                unit.relative_path(),
                std::io::Error::new(std::io::ErrorKind::StorageFull, "disk full"),
            ));
        }
        self.emitted += 1;
        Ok(unit.relative_path())
    }
}

#[test]
fn DirectoryEmitter___emit___writes_into_package_directories() {
    let temp_dir = TempDir::new().unwrap();
    let mut emitter = DirectoryEmitter::new(temp_dir.path());
    let units = units(&["com.example.detail.DetailActivity"]);

    let path = emitter.emit(&units[0]).unwrap();

    assert_eq!(
        path,
        temp_dir
            .path()
            .join("com/example/detail/DetailActivityNavigatorExtensions.kt")
    );
    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content, units[0].render());
}

#[test]
fn DirectoryEmitter___root_is_a_file___returns_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let blocker = temp_dir.path().join("blocker");
    fs::write(&blocker, b"not a directory").unwrap();
    let mut emitter = DirectoryEmitter::new(&blocker);

    let result = emitter.emit(&units(&["com.example.A"])[0]);

    assert!(matches!(result, Err(NavigatorError::Io { .. })));
}

#[test]
fn MemoryEmitter___collects_in_order() {
    let mut emitter = MemoryEmitter::new();
    let units = units(&["com.example.B", "com.example.A"]);

    let paths = write_units(&units, &mut emitter).unwrap();

    assert_eq!(
        paths,
        vec![
            PathBuf::from("com/example/BNavigatorExtensions.kt"),
            PathBuf::from("com/example/ANavigatorExtensions.kt"),
        ]
    );
    assert_eq!(emitter.files().len(), 2);
    assert_eq!(
        emitter.get("com/example/ANavigatorExtensions.kt"),
        Some(units[1].render().as_str())
    );
}

#[test]
fn write_units___emitter_failure___propagates_unchanged_and_stops() {
    let mut emitter = FailingEmitter {
        fail_at: 1,
        emitted: 0,
    };
    let units = units(&["com.example.A", "com.example.B", "com.example.C"]);

    let result = write_units(&units, &mut emitter);

    match result {
        Err(NavigatorError::Io { path, source }) => {
            assert_eq!(path, PathBuf::from("com/example/BNavigatorExtensions.kt"));
            assert_eq!(source.kind(), std::io::ErrorKind::StorageFull);
        }
        other => panic!("expected I/O error, got {other:?}"),
    }
    assert_eq!(emitter.emitted, 1);
}

#[test]
fn write_units___no_units___writes_nothing() {
    let mut emitter = MemoryEmitter::new();

    let paths = write_units(&[], &mut emitter).unwrap();

    assert!(paths.is_empty());
    assert!(emitter.files().is_empty());
}
