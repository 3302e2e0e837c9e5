//! Capability checks over the Java type hierarchy
//!
//! The generator never inspects supertypes itself. Whatever host drives it
//! answers three yes/no questions through [`TypeIntrospector`].

use crate::descriptor::TypeDescriptor;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Answers the structural questions needed to map parcelable containers
pub trait TypeIntrospector {
    /// A single-argument list container whose element type is `Parcelable`
    fn is_parcelable_list(&self, ty: &TypeDescriptor) -> bool;

    /// A sparse indexed container of `Parcelable` values
    fn is_sparse_parcelable_array(&self, ty: &TypeDescriptor) -> bool;

    /// An array whose component type is `Parcelable`
    fn is_parcelable_array(&self, ty: &TypeDescriptor) -> bool;
}

/// Introspector backed by explicit type lists.
///
/// Used when no compiler type model is available: parcelable types and
/// the container types that hold them are declared up front.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnownTypes {
    /// Qualified names of types implementing `android.os.Parcelable`
    #[serde(default)]
    pub parcelables: BTreeSet<String>,

    /// Raw names of single-argument list containers
    #[serde(default = "default_list_containers")]
    pub list_containers: BTreeSet<String>,

    /// Raw names of sparse indexed containers
    #[serde(default = "default_sparse_containers")]
    pub sparse_containers: BTreeSet<String>,
}

fn default_list_containers() -> BTreeSet<String> {
    BTreeSet::from(["java.util.ArrayList".to_string()])
}

fn default_sparse_containers() -> BTreeSet<String> {
    BTreeSet::from(["android.util.SparseArray".to_string()])
}

impl Default for KnownTypes {
    fn default() -> Self {
        Self {
            parcelables: BTreeSet::new(),
            list_containers: default_list_containers(),
            sparse_containers: default_sparse_containers(),
        }
    }
}

impl KnownTypes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a parcelable type
    pub fn with_parcelable(mut self, name: impl Into<String>) -> Self {
        self.parcelables.insert(name.into());
        self
    }

    fn is_parcelable(&self, ty: &TypeDescriptor) -> bool {
        self.parcelables.contains(ty.as_str().trim())
    }

    /// `ty` is one of `containers` with exactly one parcelable argument
    fn single_parcelable_argument(&self, ty: &TypeDescriptor, containers: &BTreeSet<String>) -> bool {
        if !containers.contains(ty.raw_name()) {
            return false;
        }
        match ty.type_arguments().as_slice() {
            [arg] => self.is_parcelable(arg),
            _ => false,
        }
    }
}

impl TypeIntrospector for KnownTypes {
    fn is_parcelable_list(&self, ty: &TypeDescriptor) -> bool {
        self.single_parcelable_argument(ty, &self.list_containers)
    }

    fn is_sparse_parcelable_array(&self, ty: &TypeDescriptor) -> bool {
        self.single_parcelable_argument(ty, &self.sparse_containers)
    }

    fn is_parcelable_array(&self, ty: &TypeDescriptor) -> bool {
        ty.component().is_some_and(|c| self.is_parcelable(&c))
    }
}

#[cfg(test)]
#[path = "introspect/introspect_tests.rs"]
mod introspect_tests;
