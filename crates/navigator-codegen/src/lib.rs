//! navigator-codegen - Kotlin extension generation for navigable classes
//!
//! Given classes whose constructor parameters are injected through a
//! generated builder, this crate emits a companion Kotlin file per class with
//! a dispatcher registration, an instance `bind()` and a builder entry point.
//!
//! # Pipeline
//!
//! ```text
//! ClassDescriptor[]
//!     ↓
//!  [TypeResolver]   built-in table + parcelable overlay (per run)
//!     ↓
//!  [ExtensionGenerator]
//!     ↓
//!  GenerationUnit[] → [FileEmitter] → *.kt
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use navigator_codegen::{DirectoryEmitter, ExtensionGenerator, write_units};
//! use navigator_core::{ClassDescriptor, ConstructorParam, GeneratorConfig, KnownTypes};
//!
//! let config = GeneratorConfig::new().with_output_dir("build/generated/source/kapt/debug");
//! let types = KnownTypes::new().with_parcelable("com.example.User");
//! let classes = vec![
//!     ClassDescriptor::new("com.example.DetailActivity")
//!         .with_param(ConstructorParam::new("id", "int")),
//! ];
//!
//! let units = ExtensionGenerator::new(&config, &types).generate(&classes)?;
//! let mut emitter = DirectoryEmitter::new("build/generated/source/kapt/debug");
//! write_units(&units, &mut emitter)?;
//! # Ok::<(), navigator_core::NavigatorError>(())
//! ```
//!
//! # See Also
//!
//! - [`kotlin_types`] for the Java to Kotlin type table
//! - [`kotlin`] for the Kotlin source model
//! - [`extensions`] for the generated functions

pub mod emit;
pub mod extensions;
pub mod kotlin;
pub mod kotlin_types;
pub mod naming;

pub use emit::{DirectoryEmitter, FileEmitter, MemoryEmitter, write_units};
pub use extensions::{ExtensionGenerator, GenerationUnit};
pub use kotlin::{KotlinFile, KotlinFunction, KotlinParameter, Projection, TargetType};
pub use kotlin_types::{StructuralCategory, TypeResolver};

use navigator_core::{ClassDescriptor, GeneratorConfig, NavigatorResult, TypeIntrospector};
use std::path::PathBuf;

/// Generate extensions and write them to the configured output directory.
///
/// Returns the written paths; empty when generation is not requested.
pub fn generate_to_output(
    config: &GeneratorConfig,
    introspector: &dyn TypeIntrospector,
    classes: &[ClassDescriptor],
) -> NavigatorResult<Vec<PathBuf>> {
    let Some(output) = config.output_destination() else {
        return Ok(Vec::new());
    };

    let units = ExtensionGenerator::new(config, introspector).generate(classes)?;
    let mut emitter = DirectoryEmitter::new(output);
    write_units(&units, &mut emitter)
}
