//! Navigator extension generation.
//!
//! For every navigable class this produces one Kotlin file with three
//! extension functions:
//!
//! - `Navigator.bind(binder: Detail)` registering the class with the dispatcher
//! - `Detail.bind()` binding extras into the instance
//! - `Any.detailBuilder(...)` creating the class's builder from its constructor parameters
//!
//! The `<Class>Binder` and `<Class>Builder` companions are produced elsewhere
//! and are only referenced by name here.

use crate::kotlin::{KotlinFile, KotlinFunction, KotlinParameter, TargetType};
use crate::kotlin_types::TypeResolver;
use crate::naming::{
    binder_name, builder_function_name, builder_name, escape_keyword, extensions_file_name,
    jvm_facade_name,
};
use navigator_core::{
    Annotation, ClassDescriptor, GeneratorConfig, NavigatorResult, TypeIntrospector,
};
use std::path::PathBuf;

/// Generated extensions for one class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationUnit {
    /// Package of the source class, reused for the generated file
    pub package: String,

    /// File name without extension, `<Class>NavigatorExtensions`
    pub name: String,

    /// JVM facade name, `<Class>Navigator`
    pub jvm_name: String,

    /// `fun Navigator.bind(binder: <Class>)`
    pub registration: KotlinFunction,

    /// `fun <Class>.bind()`
    pub bind: KotlinFunction,

    /// `fun Any.<class>Builder(...)`
    pub builder: KotlinFunction,
}

impl GenerationUnit {
    /// Assemble the Kotlin file for this unit
    pub fn to_file(&self) -> KotlinFile {
        KotlinFile::new(&self.package, &self.name)
            .file_annotation(
                Annotation::new("kotlin.jvm.JvmName")
                    .with_argument(format!("name = \"{}\"", self.jvm_name)),
            )
            .function(self.registration.clone())
            .function(self.bind.clone())
            .function(self.builder.clone())
    }

    /// Kotlin source text
    pub fn render(&self) -> String {
        self.to_file().render()
    }

    /// Location relative to the output root, `com/example/<Name>.kt`
    pub fn relative_path(&self) -> PathBuf {
        let mut path = PathBuf::new();
        for segment in self.package.split('.').filter(|s| !s.is_empty()) {
            path.push(segment);
        }
        path.push(format!("{}.kt", self.name));
        path
    }
}

/// Generates navigator extensions for a set of classes
pub struct ExtensionGenerator<'a> {
    config: &'a GeneratorConfig,
    introspector: &'a dyn TypeIntrospector,
}

impl<'a> ExtensionGenerator<'a> {
    pub fn new(config: &'a GeneratorConfig, introspector: &'a dyn TypeIntrospector) -> Self {
        Self {
            config,
            introspector,
        }
    }

    /// Generate one unit per class, in input order.
    ///
    /// Produces nothing when no output destination is configured or when
    /// `classes` is empty. Each call starts from a fresh [`TypeResolver`].
    pub fn generate(&self, classes: &[ClassDescriptor]) -> NavigatorResult<Vec<GenerationUnit>> {
        if self.config.output_destination().is_none() {
            tracing::debug!("No output directory configured, skipping navigator extensions");
            return Ok(Vec::new());
        }
        if classes.is_empty() {
            return Ok(Vec::new());
        }

        let resolver = self.prepare_resolver(classes);

        classes
            .iter()
            .map(|class| self.generate_unit(class, &resolver))
            .collect()
    }

    /// Build the resolver for a run, registering every parameter type
    pub fn prepare_resolver(&self, classes: &[ClassDescriptor]) -> TypeResolver {
        let mut resolver = TypeResolver::new();
        for param in classes.iter().flat_map(|c| &c.params) {
            resolver.register(&param.ty, self.introspector);
        }
        resolver
    }

    /// Generate the unit for a single class
    pub fn generate_unit(
        &self,
        class: &ClassDescriptor,
        resolver: &TypeResolver,
    ) -> NavigatorResult<GenerationUnit> {
        let simple = class.simple_name()?;
        let package = class.package();
        let class_type = TargetType::new(package, simple);
        let binder = binder_name(simple);
        let builder = builder_name(simple);
        let binder_type = TargetType::new(package, &binder);

        let registration = KotlinFunction::new("bind")
            .receiver(TargetType::best_guess(&self.config.dispatcher))
            .param(KotlinParameter::new("binder", class_type.clone()))
            .reference(binder_type.clone())
            .body(format!("{binder}.bind(binder)"));

        let bind = KotlinFunction::new("bind")
            .receiver(class_type)
            .kdoc_line(format!("Extension method on [{simple}] that binds the variables"))
            .kdoc_line(format!(
                "in the class annotated with [{}]",
                self.config.extra_annotation
            ))
            .kdoc_line("")
            .kdoc_line(format!("@see {binder}"))
            .reference(binder_type)
            .body(format!("{binder}.bind(this)"));

        let params: Vec<KotlinParameter> = class
            .params
            .iter()
            .map(|param| {
                KotlinParameter::new(&param.name, resolver.resolve(&param.ty))
                    .with_annotations(param.signature_annotations().cloned())
            })
            .collect();
        let arguments: Vec<_> = class.params.iter().map(|p| escape_keyword(&p.name)).collect();

        let mut builder_fn = KotlinFunction::new(builder_function_name(simple))
            .receiver(TargetType::kotlin("Any"))
            .annotation(Annotation::new(&self.config.check_result_annotation))
            .returns(TargetType::new(package, &builder))
            .body(format!("{builder}.builder({})", arguments.join(", ")));
        builder_fn.params = params;

        tracing::debug!("Generated navigator extensions for {}", class.name);

        Ok(GenerationUnit {
            package: package.to_string(),
            name: extensions_file_name(simple),
            jvm_name: jvm_facade_name(simple),
            registration,
            bind,
            builder: builder_fn,
        })
    }
}
