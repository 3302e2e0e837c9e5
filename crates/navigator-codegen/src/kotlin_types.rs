//! Java to Kotlin type mapping.
//!
//! The annotation processor reports parameter types as Java types. Since the
//! generated extensions are Kotlin, every type is mapped before it is used in
//! a signature.
//!
//! # Type Mappings
//!
//! | Java | Kotlin |
//! |------|--------|
//! | `int` / `java.lang.Integer` | `Int` |
//! | `int[]` | `IntArray` |
//! | `java.lang.Integer[]` | `Array<Int>` |
//! | `java.lang.String` | `String` |
//! | `java.util.ArrayList<java.lang.CharSequence>` | `ArrayList<CharSequence>` |
//! | `java.util.ArrayList<P>` (`P: Parcelable`) | `ArrayList<P>` |
//! | `android.util.SparseArray<P>` | `SparseArray<P>` |
//! | `P[]` | `Array<P>` |
//! | `java.util.List<? extends T>` | `List<out T>` |
//! | anything else | the Java name itself, with components and arguments mapped |
//!
//! The same table applies to every primitive (`byte short int long boolean
//! char float double`) and its boxed wrapper. Boxed arrays keep element
//! nullability and therefore map to `Array<T>`, never to a primitive array.
//!
//! Parcelable containers are only known once the processor has looked at the
//! actual elements, so they live in a per-run overlay on [`TypeResolver`].

use crate::kotlin::{Projection, TargetType};
use navigator_core::{TypeDescriptor, TypeIntrospector, Wildcard};
use once_cell::sync::Lazy;
use std::collections::HashMap;

fn kotlin(name: &str) -> TargetType {
    TargetType::kotlin(name)
}

fn array_of(name: &str) -> TargetType {
    kotlin("Array").parameterized_by(kotlin(name))
}

fn array_list_of(element: TargetType) -> TargetType {
    TargetType::new("kotlin.collections", "ArrayList").parameterized_by(element)
}

/// Built-in Java -> Kotlin mappings
static BUILTIN_TYPES: Lazy<HashMap<&'static str, TargetType>> = Lazy::new(|| {
    HashMap::from([
        ("byte", kotlin("Byte")),
        ("java.lang.Byte", kotlin("Byte")),
        ("byte[]", kotlin("ByteArray")),
        ("java.lang.Byte[]", array_of("Byte")),
        ("short", kotlin("Short")),
        ("java.lang.Short", kotlin("Short")),
        ("short[]", kotlin("ShortArray")),
        ("java.lang.Short[]", array_of("Short")),
        ("int", kotlin("Int")),
        ("java.lang.Integer", kotlin("Int")),
        ("int[]", kotlin("IntArray")),
        ("java.lang.Integer[]", array_of("Int")),
        ("long", kotlin("Long")),
        ("java.lang.Long", kotlin("Long")),
        ("long[]", kotlin("LongArray")),
        ("java.lang.Long[]", array_of("Long")),
        ("boolean", kotlin("Boolean")),
        ("java.lang.Boolean", kotlin("Boolean")),
        ("boolean[]", kotlin("BooleanArray")),
        ("java.lang.Boolean[]", array_of("Boolean")),
        ("char", kotlin("Char")),
        ("java.lang.Character", kotlin("Char")),
        ("char[]", kotlin("CharArray")),
        ("java.lang.Character[]", array_of("Char")),
        ("float", kotlin("Float")),
        ("java.lang.Float", kotlin("Float")),
        ("float[]", kotlin("FloatArray")),
        ("java.lang.Float[]", array_of("Float")),
        ("double", kotlin("Double")),
        ("java.lang.Double", kotlin("Double")),
        ("double[]", kotlin("DoubleArray")),
        ("java.lang.Double[]", array_of("Double")),
        ("java.lang.String", kotlin("String")),
        ("java.lang.String[]", array_of("String")),
        ("java.lang.CharSequence", kotlin("CharSequence")),
        ("java.lang.CharSequence[]", array_of("CharSequence")),
        (
            "java.util.ArrayList<java.lang.CharSequence>",
            array_list_of(kotlin("CharSequence")),
        ),
        ("java.util.ArrayList<java.lang.String>", array_list_of(kotlin("String"))),
        ("java.util.ArrayList<java.lang.Integer>", array_list_of(kotlin("Int"))),
    ])
});

/// Look up a descriptor in the built-in table only
pub fn builtin(descriptor: &TypeDescriptor) -> Option<&'static TargetType> {
    BUILTIN_TYPES.get(descriptor.as_str())
}

/// Parcelable-derived shape detected for an element type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructuralCategory {
    /// `ArrayList<P>`
    ParcelableList,
    /// `SparseArray<P>`
    SparseParcelableArray,
    /// `P[]`
    ParcelableArray,
}

/// Resolves Java types to Kotlin types for one generation run.
///
/// Holds the overlay of parcelable-derived mappings on top of the built-in
/// table. Build a new resolver for every run.
#[derive(Debug, Default)]
pub struct TypeResolver {
    overlay: HashMap<TypeDescriptor, TargetType>,
}

impl TypeResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a Java type.
    ///
    /// Checks the overlay, then the built-in table, and otherwise uses the
    /// Java type's own name. Never fails.
    pub fn resolve(&self, descriptor: &TypeDescriptor) -> TargetType {
        match self.lookup(descriptor) {
            Some(target) => target.clone(),
            None => self.passthrough(descriptor),
        }
    }

    /// Convert a Java type under its own name.
    ///
    /// `com.example.Foo` stays `com.example.Foo`. Array components and
    /// generic arguments are resolved, so `int[][]` becomes
    /// `Array<IntArray>`. Wildcard arguments become projections.
    pub fn passthrough(&self, descriptor: &TypeDescriptor) -> TargetType {
        if let Some(wildcard) = descriptor.wildcard() {
            return match wildcard {
                Wildcard::Unbounded => TargetType::star(),
                Wildcard::Extends(bound) => self.resolve(&bound).with_projection(Projection::Out),
                Wildcard::Super(bound) => self.resolve(&bound).with_projection(Projection::In),
            };
        }
        if let Some(component) = descriptor.component() {
            return kotlin("Array").parameterized_by(self.resolve(&component));
        }

        let mut target = TargetType::best_guess(descriptor.raw_name());
        target.arguments = descriptor
            .type_arguments()
            .iter()
            .map(|argument| self.resolve(argument))
            .collect();
        target
    }

    /// Explicit mapping for `descriptor`, if any
    pub fn lookup(&self, descriptor: &TypeDescriptor) -> Option<&TargetType> {
        self.overlay.get(descriptor).or_else(|| builtin(descriptor))
    }

    /// Number of overlay entries registered so far
    pub fn overlay_len(&self) -> usize {
        self.overlay.len()
    }

    /// Detect a parcelable container shape and record its mapping.
    ///
    /// Categories are tried in order (list, sparse array, array); the first
    /// one that applies wins.
    pub fn register(
        &mut self,
        descriptor: &TypeDescriptor,
        introspector: &dyn TypeIntrospector,
    ) -> Option<StructuralCategory> {
        let (category, target) = if let Some(target) = self.parcelable_list(descriptor, introspector)
        {
            (StructuralCategory::ParcelableList, target)
        } else if introspector.is_sparse_parcelable_array(descriptor) {
            (
                StructuralCategory::SparseParcelableArray,
                self.passthrough(descriptor),
            )
        } else if introspector.is_parcelable_array(descriptor) {
            (
                StructuralCategory::ParcelableArray,
                self.passthrough(descriptor),
            )
        } else {
            return None;
        };

        tracing::debug!(
            "Mapped {} as {:?} to {}",
            descriptor,
            category,
            target.qualified_name()
        );
        self.overlay.insert(descriptor.clone(), target);
        Some(category)
    }

    fn parcelable_list(
        &self,
        descriptor: &TypeDescriptor,
        introspector: &dyn TypeIntrospector,
    ) -> Option<TargetType> {
        if !introspector.is_parcelable_list(descriptor) {
            return None;
        }
        match descriptor.type_arguments().as_slice() {
            [element] => Some(array_list_of(self.resolve(element))),
            _ => None,
        }
    }
}
