//! Writing generated units

use crate::extensions::GenerationUnit;
use navigator_core::{NavigatorError, NavigatorResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Destination for generated Kotlin files
pub trait FileEmitter {
    /// Write one unit, returning where it went
    fn emit(&mut self, unit: &GenerationUnit) -> NavigatorResult<PathBuf>;
}

/// Writes units below a root directory, one package directory per segment
#[derive(Debug, Clone)]
pub struct DirectoryEmitter {
    root: PathBuf,
}

impl DirectoryEmitter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl FileEmitter for DirectoryEmitter {
    fn emit(&mut self, unit: &GenerationUnit) -> NavigatorResult<PathBuf> {
        let path = self.root.join(unit.relative_path());
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| NavigatorError::io(parent, e))?;
        }
        fs::write(&path, unit.render()).map_err(|e| NavigatorError::io(&path, e))?;

        tracing::info!("Wrote {}", path.display());
        Ok(path)
    }
}

/// Keeps rendered units in memory, in emission order
#[derive(Debug, Clone, Default)]
pub struct MemoryEmitter {
    files: Vec<(PathBuf, String)>,
}

impl MemoryEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emitted files as (relative path, source) pairs
    pub fn files(&self) -> &[(PathBuf, String)] {
        &self.files
    }

    /// Source of the file at `path`, if emitted
    pub fn get(&self, path: impl AsRef<Path>) -> Option<&str> {
        self.files
            .iter()
            .find(|(p, _)| p == path.as_ref())
            .map(|(_, source)| source.as_str())
    }
}

impl FileEmitter for MemoryEmitter {
    fn emit(&mut self, unit: &GenerationUnit) -> NavigatorResult<PathBuf> {
        let path = unit.relative_path();
        self.files.push((path.clone(), unit.render()));
        Ok(path)
    }
}

/// Emit every unit in order, stopping at the first failure.
///
/// The emitter's error is returned as is.
pub fn write_units(
    units: &[GenerationUnit],
    emitter: &mut dyn FileEmitter,
) -> NavigatorResult<Vec<PathBuf>> {
    units.iter().map(|unit| emitter.emit(unit)).collect()
}

#[cfg(test)]
#[path = "emit/emit_tests.rs"]
mod emit_tests;
