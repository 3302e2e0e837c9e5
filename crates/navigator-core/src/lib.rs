//! navigator-core - Inputs and configuration for navigator code generation
//!
//! This crate provides the types shared by the generator and its hosts:
//! - [`TypeDescriptor`] for Java types as the annotation processor sees them
//! - [`ClassDescriptor`], [`ConstructorParam`] and [`Annotation`] describing navigable classes
//! - [`TypeIntrospector`] for parcelable capability checks, with [`KnownTypes`] as a data-driven implementation
//! - [`GeneratorConfig`] for output destination and generated names
//! - [`NavigatorError`] for error handling

mod class;
mod config;
mod descriptor;
mod error;
mod introspect;

pub use class::{Annotation, ClassDescriptor, ConstructorParam, NON_NULL_MARKER};
pub use config::{GeneratorConfig, KAPT_KOTLIN_GENERATED};
pub use descriptor::{TypeDescriptor, Wildcard};
pub use error::{NavigatorError, NavigatorResult};
pub use introspect::{KnownTypes, TypeIntrospector};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Annotation, ClassDescriptor, ConstructorParam, GeneratorConfig, KnownTypes, NavigatorError,
        NavigatorResult, TypeDescriptor, TypeIntrospector, Wildcard,
    };
}
