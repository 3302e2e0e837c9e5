//! Java type descriptors

use serde::{Deserialize, Serialize};
use std::fmt;

/// A wildcard type argument (`?`, `? extends T`, `? super T`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Wildcard {
    /// `?`
    Unbounded,
    /// `? extends T`
    Extends(TypeDescriptor),
    /// `? super T`
    Super(TypeDescriptor),
}

/// A Java type as reported by the annotation processor.
///
/// The descriptor is the type's canonical source text, e.g. `int`,
/// `java.lang.Integer[]` or `java.util.ArrayList<com.example.User>`.
/// Two descriptors are equal when their text is equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeDescriptor(String);

impl TypeDescriptor {
    /// Create a descriptor from its source text
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The descriptor text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is an array type (`Foo[]`)
    pub fn is_array(&self) -> bool {
        self.0.trim_end().ends_with("[]")
    }

    /// Component type of an array, with one `[]` removed.
    ///
    /// Returns `None` for non-array descriptors.
    pub fn component(&self) -> Option<TypeDescriptor> {
        self.0
            .trim_end()
            .strip_suffix("[]")
            .map(|c| TypeDescriptor::new(c.trim_end()))
    }

    /// Wildcard form of a type argument, `None` for ordinary types.
    ///
    /// A wildcard with an unrecognised bound is treated as unbounded.
    pub fn wildcard(&self) -> Option<Wildcard> {
        let rest = self.0.trim().strip_prefix('?')?.trim_start();
        if rest.is_empty() {
            return Some(Wildcard::Unbounded);
        }

        let bound = |keyword: &str| {
            rest.strip_prefix(keyword)
                .filter(|b| b.starts_with(char::is_whitespace))
                .map(|b| TypeDescriptor::new(b.trim()))
                .filter(|b| !b.as_str().is_empty())
        };
        if let Some(upper) = bound("extends") {
            Some(Wildcard::Extends(upper))
        } else if let Some(lower) = bound("super") {
            Some(Wildcard::Super(lower))
        } else {
            Some(Wildcard::Unbounded)
        }
    }

    /// The type name without generic arguments.
    ///
    /// `java.util.ArrayList<com.example.User>` gives `java.util.ArrayList`.
    pub fn raw_name(&self) -> &str {
        match self.0.find('<') {
            Some(idx) => self.0[..idx].trim(),
            None => self.0.trim(),
        }
    }

    /// Top-level generic arguments, in declaration order.
    ///
    /// Nested arguments stay attached to their parent:
    /// `java.util.Map<K, java.util.List<V>>` yields `K` and `java.util.List<V>`.
    /// Unbalanced brackets or a missing argument list yield an empty list.
    pub fn type_arguments(&self) -> Vec<TypeDescriptor> {
        let text = self.0.trim();
        let Some(open) = text.find('<') else {
            return Vec::new();
        };
        let Some(close) = text.rfind('>') else {
            return Vec::new();
        };
        if close < open {
            return Vec::new();
        }

        let inner = &text[open + 1..close];
        let mut args = Vec::new();
        let mut depth = 0usize;
        let mut start = 0;

        for (idx, c) in inner.char_indices() {
            match c {
                '<' => depth += 1,
                '>' => {
                    if depth == 0 {
                        return Vec::new();
                    }
                    depth -= 1;
                }
                ',' if depth == 0 => {
                    args.push(&inner[start..idx]);
                    start = idx + 1;
                }
                _ => {}
            }
        }
        if depth != 0 {
            return Vec::new();
        }
        args.push(&inner[start..]);

        args.into_iter()
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .map(TypeDescriptor::new)
            .collect()
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeDescriptor {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for TypeDescriptor {
    fn from(text: String) -> Self {
        Self(text)
    }
}
