//! Generator configuration

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Processor option naming kapt's generated Kotlin source directory
pub const KAPT_KOTLIN_GENERATED: &str = "kapt.kotlin.generated";

/// Configuration for one generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Directory generated files are written to
    ///
    /// When unset or blank, code generation is not requested and a run
    /// produces nothing.
    #[serde(default)]
    pub output_dir: Option<String>,

    /// Qualified name of the central dispatcher receiving `bind` overloads
    #[serde(default = "default_dispatcher")]
    pub dispatcher: String,

    /// Qualified name of the field annotation referenced in generated docs
    #[serde(default = "default_extra_annotation")]
    pub extra_annotation: String,

    /// Qualified name of the annotation flagging ignored builder results
    #[serde(default = "default_check_result_annotation")]
    pub check_result_annotation: String,
}

fn default_dispatcher() -> String {
    "com.shaishavgandhi.navigator.Navigator".to_string()
}

fn default_extra_annotation() -> String {
    "com.shaishavgandhi.navigator.Extra".to_string()
}

fn default_check_result_annotation() -> String {
    "androidx.annotation.CheckResult".to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: None,
            dispatcher: default_dispatcher(),
            extra_annotation: default_extra_annotation(),
            check_result_annotation: default_check_result_annotation(),
        }
    }
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration writing to `dir`
    pub fn with_output_dir(mut self, dir: impl Into<String>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Build configuration from annotation processor options.
    ///
    /// The output directory comes from `kapt.kotlin.generated`, with the
    /// `kaptKotlin` path segment rewritten to `kapt` so extensions land next
    /// to the Java sources generated for the same classes.
    pub fn from_options(options: &BTreeMap<String, String>) -> Self {
        Self {
            output_dir: options
                .get(KAPT_KOTLIN_GENERATED)
                .map(|dir| dir.replace("kaptKotlin", "kapt")),
            ..Self::default()
        }
    }

    /// The output directory, if a usable one is configured
    pub fn output_destination(&self) -> Option<&Path> {
        self.output_dir
            .as_deref()
            .map(str::trim)
            .filter(|dir| !dir.is_empty())
            .map(Path::new)
    }
}
