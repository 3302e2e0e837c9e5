//! Generate command implementation

use crate::manifest::ClassManifest;
use anyhow::{Context, Result};
use navigator_codegen::{DirectoryEmitter, ExtensionGenerator, GenerationUnit, write_units};
use navigator_core::GeneratorConfig;

/// Run the generate command
pub fn run(classes_path: &str, output: Option<&str>, dry_run: bool) -> Result<()> {
    let manifest = ClassManifest::from_file(classes_path)?;
    manifest.validate()?;

    let config = manifest.config(output);
    let units = generate_units(&manifest, &config)?;

    let Some(destination) = config.output_destination() else {
        println!("No output directory configured, nothing to generate.");
        return Ok(());
    };

    if dry_run {
        for unit in &units {
            println!("// {}", unit.relative_path().display());
            print!("{}", unit.render());
            println!();
        }
        return Ok(());
    }

    let mut emitter = DirectoryEmitter::new(destination);
    let written = write_units(&units, &mut emitter)
        .with_context(|| format!("Failed to write extensions to {}", destination.display()))?;

    println!(
        "✓ Generated {} extension file(s) in {}",
        written.len(),
        destination.display()
    );

    Ok(())
}

/// Generate units for every class in the manifest
fn generate_units(manifest: &ClassManifest, config: &GeneratorConfig) -> Result<Vec<GenerationUnit>> {
    tracing::debug!(
        classes = manifest.classes.len(),
        parcelables = manifest.introspection.parcelables.len(),
        "Generating navigator extensions"
    );

    ExtensionGenerator::new(config, &manifest.introspection)
        .generate(&manifest.classes)
        .context("Failed to generate extensions")
}

#[cfg(test)]
#[path = "generate/generate_tests.rs"]
mod generate_tests;
