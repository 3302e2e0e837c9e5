//! Naming convention utilities for code generation.
//!
//! # Supported Conversions
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `DetailActivity` | [`decapitalize`] | `detailActivity` |
//! | `com.example.Detail` | [`simple_name`] | `Detail` |
//! | `com.example.Detail` | [`package_name`] | `com.example` |
//! | `DetailActivity` | [`extensions_file_name`] | `DetailActivityNavigatorExtensions` |
//! | `object` | [`escape_keyword`] | `` `object` `` |

use std::borrow::Cow;

/// Kotlin hard keywords, which cannot be used as identifiers unquoted
const KOTLIN_KEYWORDS: &[&str] = &[
    "as", "break", "class", "continue", "do", "else", "false", "for", "fun", "if", "in",
    "interface", "is", "null", "object", "package", "return", "super", "this", "throw", "true",
    "try", "typealias", "typeof", "val", "var", "when", "while",
];

/// Lowercase the first letter of a string.
///
/// # Examples
///
/// ```
/// use navigator_codegen::naming::decapitalize;
///
/// assert_eq!(decapitalize("DetailActivity"), "detailActivity");
/// assert_eq!(decapitalize("URL"), "uRL");
/// assert_eq!(decapitalize(""), "");
/// ```
pub fn decapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().chain(chars).collect(),
    }
}

/// Quote a Kotlin hard keyword with backticks so it can name a parameter.
///
/// # Examples
///
/// ```
/// use navigator_codegen::naming::escape_keyword;
///
/// assert_eq!(escape_keyword("object"), "`object`");
/// assert_eq!(escape_keyword("id"), "id");
/// ```
pub fn escape_keyword(name: &str) -> Cow<'_, str> {
    if KOTLIN_KEYWORDS.contains(&name) {
        Cow::Owned(format!("`{name}`"))
    } else {
        Cow::Borrowed(name)
    }
}

/// The part of a qualified name after the last `.`
pub fn simple_name(qualified: &str) -> &str {
    qualified.rsplit('.').next().unwrap_or(qualified)
}

/// The part of a qualified name before the last `.`, empty if unqualified
pub fn package_name(qualified: &str) -> &str {
    match qualified.rfind('.') {
        Some(idx) => &qualified[..idx],
        None => "",
    }
}

/// File holding the extensions generated for a class
pub fn extensions_file_name(class_simple_name: &str) -> String {
    format!("{class_simple_name}NavigatorExtensions")
}

/// JVM facade name the extensions are exposed under
pub fn jvm_facade_name(class_simple_name: &str) -> String {
    format!("{class_simple_name}Navigator")
}

/// Companion type that binds extras into an instance
pub fn binder_name(class_simple_name: &str) -> String {
    format!("{class_simple_name}Binder")
}

/// Companion type that assembles the launch bundle
pub fn builder_name(class_simple_name: &str) -> String {
    format!("{class_simple_name}Builder")
}

/// Extension function creating the builder, e.g. `detailActivityBuilder`
pub fn builder_function_name(class_simple_name: &str) -> String {
    format!("{}Builder", decapitalize(class_simple_name))
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    #[test]
    fn decapitalize___lowercases_first_letter() {
        assert_eq!(decapitalize("Hello"), "hello");
        assert_eq!(decapitalize("MainActivity"), "mainActivity");
        assert_eq!(decapitalize("a"), "a");
        assert_eq!(decapitalize(""), "");
    }

    #[test]
    fn decapitalize___preserves_rest_of_string() {
        assert_eq!(decapitalize("ALLCAPS"), "aLLCAPS");
        assert_eq!(decapitalize("already"), "already");
    }

    #[test]
    fn escape_keyword___quotes_hard_keywords_only() {
        for keyword in ["object", "in", "is", "val", "fun", "when"] {
            assert_eq!(escape_keyword(keyword), format!("`{keyword}`"));
        }
        assert_eq!(escape_keyword("value"), "value");
        assert_eq!(escape_keyword("data"), "data");
    }

    #[test]
    fn simple_name___strips_package() {
        assert_eq!(simple_name("com.example.Detail"), "Detail");
        assert_eq!(simple_name("Detail"), "Detail");
    }

    #[test]
    fn package_name___keeps_everything_before_last_dot() {
        assert_eq!(package_name("com.example.Detail"), "com.example");
        assert_eq!(package_name("Detail"), "");
    }

    #[test]
    fn companion_names___derive_from_simple_name() {
        assert_eq!(extensions_file_name("Detail"), "DetailNavigatorExtensions");
        assert_eq!(jvm_facade_name("Detail"), "DetailNavigator");
        assert_eq!(binder_name("Detail"), "DetailBinder");
        assert_eq!(builder_name("Detail"), "DetailBuilder");
    }

    #[test]
    fn builder_function_name___decapitalizes_class() {
        assert_eq!(builder_function_name("DetailActivity"), "detailActivityBuilder");
        assert_eq!(builder_function_name("X"), "xBuilder");
    }
}
