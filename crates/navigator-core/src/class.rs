//! Class descriptors handed over by the discovery step

use crate::descriptor::TypeDescriptor;
use crate::error::{NavigatorError, NavigatorResult};
use serde::{Deserialize, Serialize};

/// Simple name of the nullability marker that never reaches generated signatures
pub const NON_NULL_MARKER: &str = "NonNull";

/// A source annotation attached to a constructor parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    /// Qualified annotation name (e.g. `androidx.annotation.Nullable`)
    pub name: String,

    /// Raw argument expressions, rendered as written
    #[serde(default)]
    pub arguments: Vec<String>,
}

impl Annotation {
    /// Create an annotation without arguments
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: Vec::new(),
        }
    }

    /// Add a raw argument expression
    pub fn with_argument(mut self, argument: impl Into<String>) -> Self {
        self.arguments.push(argument.into());
        self
    }

    /// The unqualified annotation name
    pub fn simple_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }

    /// Package the annotation lives in, empty when unqualified
    pub fn package(&self) -> &str {
        match self.name.rfind('.') {
            Some(idx) => &self.name[..idx],
            None => "",
        }
    }

    /// Whether this is the `NonNull` nullability marker.
    ///
    /// Only the exact simple name matches; other nullability annotations
    /// are kept.
    pub fn is_non_null_marker(&self) -> bool {
        self.simple_name() == NON_NULL_MARKER
    }
}

/// A constructor parameter of a navigable class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructorParam {
    /// Parameter name, reused verbatim in generated code
    pub name: String,

    /// Declared Java type
    #[serde(rename = "type")]
    pub ty: TypeDescriptor,

    /// Source annotations in declaration order
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

impl ConstructorParam {
    pub fn new(name: impl Into<String>, ty: impl Into<TypeDescriptor>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            annotations: Vec::new(),
        }
    }

    /// Attach an annotation
    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Annotations that survive into generated signatures
    pub fn signature_annotations(&self) -> impl Iterator<Item = &Annotation> {
        self.annotations.iter().filter(|a| !a.is_non_null_marker())
    }
}

/// A class to generate navigator extensions for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDescriptor {
    /// Fully qualified class name (e.g. `com.example.DetailActivity`)
    pub name: String,

    /// Constructor parameters in declaration order
    #[serde(default)]
    pub params: Vec<ConstructorParam>,
}

impl ClassDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
        }
    }

    /// Append a constructor parameter
    pub fn with_param(mut self, param: ConstructorParam) -> Self {
        self.params.push(param);
        self
    }

    /// The unqualified class name
    pub fn simple_name(&self) -> NavigatorResult<&str> {
        let simple = self.name.rsplit('.').next().unwrap_or("").trim();
        if simple.is_empty() {
            return Err(NavigatorError::InvalidClassName(self.name.clone()));
        }
        Ok(simple)
    }

    /// Package of the class, empty for the default package
    pub fn package(&self) -> &str {
        match self.name.rfind('.') {
            Some(idx) => &self.name[..idx],
            None => "",
        }
    }
}
