//! Contract between a node's configuration form and the host form engine.

mod engine;

use std::fmt;

use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

use crate::{Result, model::NodeMeta};

pub use engine::FormEngine;

/// Static placement metadata handed to the node registry.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegistryMeta {
    pub width: f64,
    pub height: f64,
    pub input_parameters_path: &'static str,
    pub node_meta_path: &'static str,
    pub outputs_path: &'static str,
    pub help_link: &'static str,
}

/// Persisted data that does not fit the node schema.
///
/// Surfaced to the caller on load; the affected form field keeps its default.
#[derive(Error, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum SchemaViolation {
    #[error("parameter '{name}' has unknown value '{found}'")]
    UnknownValue { name: String, found: String },

    #[error("parameter '{name}' expects a string literal, found {found}")]
    NotAStringLiteral { name: String, found: String },
}

/// Result of loading a form: the form itself plus anything that had to be ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded<T> {
    pub form: T,
    pub violations: Vec<SchemaViolation>,
}

impl<T> Loaded<T> {
    pub fn clean(form: T) -> Self {
        Self {
            form,
            violations: Vec::new(),
        }
    }
}

/// A failed field validation.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Dotted field path, e.g. `inputParameters.0.input`.
    pub path: String,
    /// i18n message key.
    pub message: String,
}

impl FieldError {
    pub fn new(
        path: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Whether the error belongs to `field` or one of its children.
    pub fn is_under(
        &self,
        field: &str,
    ) -> bool {
        self.path == field || self.path.strip_prefix(field).is_some_and(|rest| rest.starts_with('.'))
    }
}

impl fmt::Display for FieldError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Configuration form of a node type.
///
/// The host loads a form through [`NodeForm::init`], lets the user edit it
/// field by field, runs [`NodeForm::on_change`] when a watched field changes
/// and finally saves it through [`NodeForm::submit`] once
/// [`NodeForm::validate`] reports no errors.
pub trait NodeForm: Serialize + DeserializeOwned + Clone {
    /// Backend representation of the node.
    type Record: Serialize + DeserializeOwned;

    /// Returns the registry type name of the node.
    fn node_type() -> &'static str;

    /// Returns the registry placement metadata of the node.
    fn registry() -> RegistryMeta;

    /// Returns the JSON schema a raw record must satisfy.
    fn record_schema() -> &'static serde_json::Value;

    /// Decodes a raw record, checking it against [`NodeForm::record_schema`].
    fn parse_record(value: serde_json::Value) -> Result<Self::Record>;

    /// Node meta used when no record and no caller placeholder exist.
    fn default_node_meta() -> NodeMeta;

    /// Builds the form from a record, or from defaults when `record` is `None`.
    ///
    /// # Arguments
    ///
    /// * `record` - The persisted record, if the node was saved before.
    /// * `placeholder` - The node meta to use when the record carries none.
    fn init(
        record: Option<&Self::Record>,
        placeholder: &NodeMeta,
    ) -> Loaded<Self>;

    /// Builds the record to persist from the form.
    fn submit(&self) -> Self::Record;

    /// Runs every field validator.
    fn validate(&self) -> Vec<FieldError>;

    /// Form-side names of the fields whose changes trigger [`NodeForm::on_change`].
    fn watched_fields() -> &'static [&'static str];

    /// Form-side names of the fields that only the node itself may change.
    fn read_only_fields() -> &'static [&'static str] {
        &[]
    }

    /// Reconciles dependent fields after `field` changed.
    fn on_change(
        &mut self,
        field: &str,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_error_is_under() {
        let err = FieldError::new("inputParameters.0.input", "required");
        assert!(err.is_under("inputParameters"));
        assert!(err.is_under("inputParameters.0"));
        assert!(err.is_under("inputParameters.0.input"));
        assert!(!err.is_under("input"));
        assert!(!err.is_under("inputParam"));
    }

    #[test]
    fn test_schema_violation_display() {
        let violation = SchemaViolation::UnknownValue {
            name: "trimType".to_string(),
            found: "middle".to_string(),
        };
        assert_eq!(violation.to_string(), "parameter 'trimType' has unknown value 'middle'");
    }
}
