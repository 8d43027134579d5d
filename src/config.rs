//! Tree Configuration
//!
//! Defines the configuration used to load data, fit a tree and render it
//! as predicate source.
use crate::constants::{DEFAULT_INDENT_WIDTH, DEFAULT_PREDICATE_ARGUMENT, DEFAULT_PREDICATE_NAME, POSITIVE_OUTCOME};
use crate::errors::Id3Error;
use crate::utils::{validate_identifier_parameter, validate_non_empty_parameter, validate_positive_parameter};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_positive_label() -> String {
    POSITIVE_OUTCOME.to_string()
}
fn default_parallel() -> bool {
    false
}
fn default_function_name() -> String {
    DEFAULT_PREDICATE_NAME.to_string()
}
fn default_argument_name() -> String {
    DEFAULT_PREDICATE_ARGUMENT.to_string()
}
fn default_indent_width() -> usize {
    DEFAULT_INDENT_WIDTH
}

/// Options for the generated predicate function.
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
pub struct PredicateOptions {
    /// Name of the generated function.
    #[serde(default = "default_function_name")]
    pub function_name: String,
    /// Name of the mapping argument the function indexes into.
    #[serde(default = "default_argument_name")]
    pub argument_name: String,
    /// Spaces per nesting level.
    #[serde(default = "default_indent_width")]
    pub indent_width: usize,
}

impl Default for PredicateOptions {
    fn default() -> Self {
        PredicateOptions {
            function_name: default_function_name(),
            argument_name: default_argument_name(),
            indent_width: default_indent_width(),
        }
    }
}

/// Configuration for the `DecisionTreeClassifier`.
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
pub struct TreeConfig {
    /// Label column value read as a positive outcome.
    #[serde(default = "default_positive_label")]
    pub positive_label: String,
    /// Score candidate attributes and batch predictions on the rayon pool.
    #[serde(default = "default_parallel")]
    pub parallel: bool,
    /// Predicate rendering options.
    #[serde(default)]
    pub predicate: PredicateOptions,
}

impl Default for TreeConfig {
    fn default() -> Self {
        TreeConfig {
            positive_label: default_positive_label(),
            parallel: default_parallel(),
            predicate: PredicateOptions::default(),
        }
    }
}

impl TreeConfig {
    /// Set the label column value treated as positive.
    /// * `positive_label` - Value such as `Yes`.
    pub fn set_positive_label(mut self, positive_label: impl Into<String>) -> Self {
        self.positive_label = positive_label.into();
        self
    }

    /// Set whether attribute scoring and batch prediction run in parallel.
    pub fn set_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set the predicate rendering options.
    pub fn set_predicate(mut self, predicate: PredicateOptions) -> Self {
        self.predicate = predicate;
        self
    }

    /// Check every field holds a usable value.
    pub fn validate(&self) -> Result<(), Id3Error> {
        validate_non_empty_parameter(&self.positive_label, "positive_label")?;
        validate_identifier_parameter(&self.predicate.function_name, "function_name")?;
        validate_identifier_parameter(&self.predicate.argument_name, "argument_name")?;
        validate_positive_parameter(self.predicate.indent_width, "indent_width")
    }

    /// Parse and validate a configuration from a JSON string.
    /// Missing fields take their default values.
    pub fn from_json(json_str: &str) -> Result<Self, Id3Error> {
        let config: TreeConfig =
            serde_json::from_str(json_str).map_err(|e| Id3Error::UnableToRead(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Id3Error> {
        let json_str = fs::read_to_string(path).map_err(|e| Id3Error::UnableToRead(e.to_string()))?;
        Self::from_json(&json_str)
    }
}
