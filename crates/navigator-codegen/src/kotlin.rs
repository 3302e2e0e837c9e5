//! Kotlin source model and rendering.
//!
//! A small, purpose-built subset of a Kotlin file: file-level annotations,
//! a package, imports and top-level extension functions with expression
//! bodies. Rendering is deterministic so generated files are stable across
//! runs.
//!
//! Each simple name is bound to one type per file. A type whose simple name
//! is already taken is not imported and is written fully qualified.
//!
//! # Layout
//!
//! ```text
//! @file:JvmName(name = "DetailActivityNavigator")
//!
//! package com.example
//!
//! import androidx.annotation.CheckResult
//!
//! @CheckResult
//! fun Any.detailActivityBuilder(
//!     id: Int,
//!     label: String
//! ): DetailActivityBuilder =
//!     DetailActivityBuilder.builder(id, label)
//! ```

use crate::naming::{escape_keyword, package_name, simple_name};
use navigator_core::Annotation;
use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// Packages Kotlin/JVM imports implicitly
const DEFAULT_IMPORTS: &[&str] = &["kotlin", "kotlin.collections", "kotlin.jvm"];

const INDENT: &str = "    ";

/// Use-site variance of a generic argument
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Projection {
    #[default]
    Invariant,
    /// `out T`, from Java `? extends T`
    Out,
    /// `in T`, from Java `? super T`
    In,
    /// `*`, from Java `?`
    Star,
}

/// A type reference in generated Kotlin code
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TargetType {
    /// Package the type is declared in, empty for the default package
    pub package: String,

    /// Unqualified type name
    pub simple_name: String,

    /// Generic arguments; resolver-produced types carry at most one
    pub arguments: Vec<TargetType>,

    /// Variance when used as a generic argument
    pub projection: Projection,
}

impl TargetType {
    pub fn new(package: impl Into<String>, simple_name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            simple_name: simple_name.into(),
            arguments: Vec::new(),
            projection: Projection::Invariant,
        }
    }

    /// A type from the `kotlin` package
    pub fn kotlin(simple_name: &str) -> Self {
        Self::new("kotlin", simple_name)
    }

    /// The star projection `*`
    pub fn star() -> Self {
        Self {
            projection: Projection::Star,
            ..Self::new("", "*")
        }
    }

    /// Split a qualified name on its last `.`
    pub fn best_guess(qualified: &str) -> Self {
        let qualified = qualified.trim();
        Self::new(package_name(qualified), simple_name(qualified))
    }

    /// Add a generic argument
    pub fn parameterized_by(mut self, argument: TargetType) -> Self {
        self.arguments.push(argument);
        self
    }

    pub fn with_projection(mut self, projection: Projection) -> Self {
        self.projection = projection;
        self
    }

    /// Qualified name without generic arguments
    pub fn raw_qualified_name(&self) -> String {
        qualify(&self.package, &self.simple_name)
    }

    /// Fully qualified name, including qualified generic arguments
    pub fn qualified_name(&self) -> String {
        self.render_with(&|_| false)
    }

    /// Every named type this reference mentions, outermost first
    fn collect_references<'a>(&'a self, references: &mut Vec<(&'a str, &'a str)>) {
        if self.projection != Projection::Star {
            references.push((self.package.as_str(), self.simple_name.as_str()));
        }
        for arg in &self.arguments {
            arg.collect_references(references);
        }
    }

    fn render(&self, names: &ImportNames) -> String {
        self.render_with(&|ty| names.is_short(&ty.package, &ty.simple_name))
    }

    fn render_with(&self, short: &dyn Fn(&TargetType) -> bool) -> String {
        let mut out = match self.projection {
            Projection::Star => return "*".to_string(),
            Projection::Out => "out ".to_string(),
            Projection::In => "in ".to_string(),
            Projection::Invariant => String::new(),
        };
        if short(self) {
            out.push_str(&self.simple_name);
        } else {
            out.push_str(&self.raw_qualified_name());
        }
        if !self.arguments.is_empty() {
            let args: Vec<String> = self.arguments.iter().map(|a| a.render_with(short)).collect();
            out.push_str(&format!("<{}>", args.join(", ")));
        }
        out
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_with(&|_| true))
    }
}

fn qualify(package: &str, simple_name: &str) -> String {
    if package.is_empty() {
        simple_name.to_string()
    } else {
        format!("{package}.{simple_name}")
    }
}

fn needs_import(package: &str, file_package: &str) -> bool {
    !package.is_empty() && package != file_package && !DEFAULT_IMPORTS.contains(&package)
}

/// Which simple names a file may use, and the imports that back them.
///
/// A simple name belongs to at most one qualified name per file. Types
/// visible without an import (default packages and the file's own package)
/// claim their names first; imported types claim theirs in order of
/// appearance. Every other reference is written fully qualified.
#[derive(Debug, Default)]
struct ImportNames {
    owners: HashMap<String, String>,
    imports: BTreeSet<String>,
}

impl ImportNames {
    fn resolve(file_package: &str, references: &[(&str, &str)]) -> Self {
        let mut names = Self::default();
        let (imported, implicit): (Vec<_>, Vec<_>) = references
            .iter()
            .partition(|(package, _)| needs_import(package, file_package));

        for (package, simple) in implicit {
            names
                .owners
                .entry(simple.to_string())
                .or_insert_with(|| qualify(package, simple));
        }
        for (package, simple) in imported {
            let qualified = qualify(package, simple);
            let owner = names
                .owners
                .entry(simple.to_string())
                .or_insert_with(|| qualified.clone());
            if *owner == qualified {
                names.imports.insert(qualified);
            }
        }
        names
    }

    fn is_short(&self, package: &str, simple_name: &str) -> bool {
        package.is_empty()
            || self
                .owners
                .get(simple_name)
                .is_some_and(|owner| *owner == qualify(package, simple_name))
    }
}

fn render_annotation(annotation: &Annotation, names: &ImportNames) -> String {
    let short = names.is_short(annotation.package(), annotation.simple_name());
    format_annotation(annotation, short)
}

fn format_annotation(annotation: &Annotation, short: bool) -> String {
    let name = if short {
        annotation.simple_name()
    } else {
        annotation.name.as_str()
    };
    if annotation.arguments.is_empty() {
        format!("@{name}")
    } else {
        format!("@{}({})", name, annotation.arguments.join(", "))
    }
}

fn annotation_reference(annotation: &Annotation) -> (&str, &str) {
    (annotation.package(), annotation.simple_name())
}

/// A function parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KotlinParameter {
    pub name: String,
    pub ty: TargetType,
    pub annotations: Vec<Annotation>,
}

impl KotlinParameter {
    pub fn new(name: impl Into<String>, ty: TargetType) -> Self {
        Self {
            name: name.into(),
            ty,
            annotations: Vec::new(),
        }
    }

    pub fn with_annotations(mut self, annotations: impl IntoIterator<Item = Annotation>) -> Self {
        self.annotations.extend(annotations);
        self
    }

    fn render(&self, names: &ImportNames) -> String {
        let mut out = String::new();
        for annotation in &self.annotations {
            out.push_str(&render_annotation(annotation, names));
            out.push(' ');
        }
        out.push_str(&format!(
            "{}: {}",
            escape_keyword(&self.name),
            self.ty.render(names)
        ));
        out
    }
}

impl fmt::Display for KotlinParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for annotation in &self.annotations {
            write!(f, "{} ", format_annotation(annotation, true))?;
        }
        write!(f, "{}: {}", escape_keyword(&self.name), self.ty)
    }
}

/// A top-level function with an expression body.
///
/// `body` is written verbatim; types it mentions can be declared with
/// [`KotlinFunction::reference`] so their simple names are kept free.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KotlinFunction {
    pub name: String,
    pub receiver: Option<TargetType>,
    pub params: Vec<KotlinParameter>,
    pub returns: Option<TargetType>,
    pub annotations: Vec<Annotation>,
    pub kdoc: Vec<String>,
    pub body: String,

    /// Types referenced by simple name inside `body`
    pub body_references: Vec<TargetType>,
}

impl KotlinFunction {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            receiver: None,
            params: Vec::new(),
            returns: None,
            annotations: Vec::new(),
            kdoc: Vec::new(),
            body: String::new(),
            body_references: Vec::new(),
        }
    }

    pub fn receiver(mut self, receiver: TargetType) -> Self {
        self.receiver = Some(receiver);
        self
    }

    pub fn param(mut self, param: KotlinParameter) -> Self {
        self.params.push(param);
        self
    }

    pub fn returns(mut self, returns: TargetType) -> Self {
        self.returns = Some(returns);
        self
    }

    pub fn annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Append a KDoc line; an empty string renders a blank doc line
    pub fn kdoc_line(mut self, line: impl Into<String>) -> Self {
        self.kdoc.push(line.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Declare a type the body refers to by its simple name
    pub fn reference(mut self, ty: TargetType) -> Self {
        self.body_references.push(ty);
        self
    }

    /// Parameters rendered on one line, `", "`-separated
    pub fn parameter_list(&self) -> String {
        self.params
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn collect_references<'a>(&'a self, references: &mut Vec<(&'a str, &'a str)>) {
        for ty in &self.body_references {
            ty.collect_references(references);
        }
        references.extend(self.annotations.iter().map(annotation_reference));
        if let Some(receiver) = &self.receiver {
            receiver.collect_references(references);
        }
        if let Some(returns) = &self.returns {
            returns.collect_references(references);
        }
        for param in &self.params {
            references.extend(param.annotations.iter().map(annotation_reference));
            param.ty.collect_references(references);
        }
    }

    fn render(&self, out: &mut String, names: &ImportNames) {
        if !self.kdoc.is_empty() {
            out.push_str("/**\n");
            for line in &self.kdoc {
                if line.is_empty() {
                    out.push_str(" *\n");
                } else {
                    out.push_str(&format!(" * {}\n", line));
                }
            }
            out.push_str(" */\n");
        }

        for annotation in &self.annotations {
            out.push_str(&render_annotation(annotation, names));
            out.push('\n');
        }

        out.push_str("fun ");
        if let Some(receiver) = &self.receiver {
            out.push_str(&format!("{}.", receiver.render(names)));
        }
        out.push_str(&self.name);

        let params: Vec<String> = self.params.iter().map(|p| p.render(names)).collect();
        // One parameter stays inline, more are wrapped one per line
        if params.len() <= 1 {
            out.push_str(&format!("({})", params.join(", ")));
        } else {
            let lines: Vec<String> = params.iter().map(|p| format!("{INDENT}{p}")).collect();
            out.push_str(&format!("(\n{}\n)", lines.join(",\n")));
        }

        if let Some(returns) = &self.returns {
            out.push_str(&format!(": {}", returns.render(names)));
        }
        out.push_str(&format!(" =\n{INDENT}{}\n", self.body));
    }
}

/// A Kotlin source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KotlinFile {
    pub package: String,

    /// File name without the `.kt` extension
    pub name: String,

    /// Annotations rendered with the `@file:` use-site target
    pub file_annotations: Vec<Annotation>,

    pub functions: Vec<KotlinFunction>,
}

impl KotlinFile {
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            name: name.into(),
            file_annotations: Vec::new(),
            functions: Vec::new(),
        }
    }

    pub fn file_annotation(mut self, annotation: Annotation) -> Self {
        self.file_annotations.push(annotation);
        self
    }

    pub fn function(mut self, function: KotlinFunction) -> Self {
        self.functions.push(function);
        self
    }

    /// Imports needed by the file, sorted and de-duplicated.
    ///
    /// A type whose simple name is already taken by another type is not
    /// imported and renders fully qualified instead.
    pub fn imports(&self) -> BTreeSet<String> {
        self.import_names().imports
    }

    fn import_names(&self) -> ImportNames {
        let mut references: Vec<(&str, &str)> = self
            .file_annotations
            .iter()
            .map(annotation_reference)
            .collect();
        for function in &self.functions {
            function.collect_references(&mut references);
        }
        ImportNames::resolve(&self.package, &references)
    }

    /// Render the file as Kotlin source text
    pub fn render(&self) -> String {
        let names = self.import_names();
        let mut out = String::new();

        for annotation in &self.file_annotations {
            let rendered = render_annotation(annotation, &names);
            out.push_str(&format!("@file:{}\n", rendered.trim_start_matches('@')));
        }
        if !self.file_annotations.is_empty() {
            out.push('\n');
        }

        if !self.package.is_empty() {
            out.push_str(&format!("package {}\n\n", self.package));
        }

        if !names.imports.is_empty() {
            for import in &names.imports {
                out.push_str(&format!("import {}\n", import));
            }
            out.push('\n');
        }

        for (i, function) in self.functions.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            function.render(&mut out, &names);
        }

        out
    }
}
