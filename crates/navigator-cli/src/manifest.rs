//! Class manifest parsing and validation

use anyhow::{Context, Result};
use navigator_core::{ClassDescriptor, GeneratorConfig, KnownTypes, NavigatorError, NavigatorResult};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

/// Class manifest describing the classes to generate extensions for
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassManifest {
    /// Annotation processor options (e.g. `kapt.kotlin.generated`)
    #[serde(default)]
    pub options: BTreeMap<String, String>,

    /// Overrides for generated names and output directory
    #[serde(default)]
    pub generator: Option<GeneratorConfig>,

    /// Parcelable types and their containers
    #[serde(default)]
    pub introspection: KnownTypes,

    #[serde(default)]
    pub classes: Vec<ClassDescriptor>,
}

impl ClassManifest {
    /// Load manifest from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read class manifest: {:?}", path.as_ref()))?;

        Self::from_str(&content)
            .with_context(|| format!("Failed to load class manifest: {:?}", path.as_ref()))
    }

    /// Parse manifest from string
    pub fn from_str(content: &str) -> NavigatorResult<Self> {
        toml::from_str(content).map_err(|e| NavigatorError::InvalidManifest(e.to_string()))
    }

    /// Generator configuration for this manifest.
    ///
    /// The output directory is taken from `output` if given, then from the
    /// `[generator]` table, then from the processor options.
    pub fn config(&self, output: Option<&str>) -> GeneratorConfig {
        let from_options = GeneratorConfig::from_options(&self.options);
        let mut config = match &self.generator {
            Some(generator) => GeneratorConfig {
                output_dir: generator.output_dir.clone().or(from_options.output_dir),
                ..generator.clone()
            },
            None => from_options,
        };

        if let Some(dir) = output {
            config.output_dir = Some(dir.to_string());
        }
        config
    }

    /// Validate the manifest
    pub fn validate(&self) -> NavigatorResult<()> {
        let mut class_names = HashSet::new();

        for class in &self.classes {
            if class.name.trim().is_empty() {
                return Err(invalid("Class name cannot be empty"));
            }
            class.simple_name()?;
            if class.package().is_empty() {
                return Err(invalid(format!(
                    "Class '{}' must be declared in a package",
                    class.name
                )));
            }
            if !class_names.insert(class.name.as_str()) {
                return Err(invalid(format!("Duplicate class '{}'", class.name)));
            }

            let mut param_names = HashSet::new();
            for param in &class.params {
                if param.name.trim().is_empty() {
                    return Err(invalid(format!(
                        "Parameter name cannot be empty in class '{}'",
                        class.name
                    )));
                }
                if param.ty.as_str().trim().is_empty() {
                    return Err(invalid(format!(
                        "Parameter '{}' of class '{}' has no type",
                        param.name, class.name
                    )));
                }
                if !param_names.insert(param.name.as_str()) {
                    return Err(invalid(format!(
                        "Duplicate parameter '{}' in class '{}'",
                        param.name, class.name
                    )));
                }
            }
        }

        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> NavigatorError {
    NavigatorError::InvalidManifest(message.into())
}

/// Check command implementation
pub fn check(classes_path: &str) -> Result<()> {
    println!("Checking class manifest: {}", classes_path);

    let manifest = ClassManifest::from_file(classes_path)?;
    manifest.validate()?;

    let params: usize = manifest.classes.iter().map(|c| c.params.len()).sum();
    println!("✓ Classes: {}", manifest.classes.len());
    println!("✓ Parameters: {}", params);
    println!(
        "✓ Parcelable types: {}",
        manifest.introspection.parcelables.len()
    );
    match manifest.config(None).output_destination() {
        Some(dir) => println!("✓ Output: {}", dir.display()),
        None => println!("- Output: not configured (generation will be skipped)"),
    }
    println!("\nClass manifest is valid!");

    Ok(())
}
