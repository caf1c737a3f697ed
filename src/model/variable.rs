use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::model::BlockInput;

/// Type of a variable flowing between nodes.
///
/// Names outside the known set decode to [`VariableType::Other`] and are
/// written back unchanged.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, strum::AsRefStr, strum::EnumString)]
#[serde(from = "String", into = "String")]
#[strum(serialize_all = "snake_case")]
pub enum VariableType {
    #[default]
    String,
    Integer,
    Boolean,
    Float,
    Object,
    List,
    #[strum(default)]
    Other(String),
}

impl From<String> for VariableType {
    fn from(name: String) -> Self {
        VariableType::from_str(&name).unwrap_or(VariableType::Other(name))
    }
}

impl From<VariableType> for String {
    fn from(value_type: VariableType) -> Self {
        match value_type {
            VariableType::Other(name) => name,
            known => known.as_ref().to_string(),
        }
    }
}

/// A named input slot bound to an upstream value.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ParameterBinding {
    pub name: String,
    /// `None` until the user binds the slot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<BlockInput>,
}

impl ParameterBinding {
    /// An input slot with no bound value.
    pub fn unbound(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            input: None,
        }
    }

    pub fn bound(
        name: impl Into<String>,
        input: BlockInput,
    ) -> Self {
        Self {
            name: name.into(),
            input: Some(input),
        }
    }
}

/// An output variable declared by a node.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct OutputField {
    #[serde(default)]
    pub key: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub value_type: VariableType,
    #[serde(default = "editable_default")]
    pub editable: bool,
}

fn editable_default() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_unbound_parameter_omits_input() {
        let value = serde_json::to_value(ParameterBinding::unbound("String1")).unwrap();
        assert_eq!(value, json!({ "name": "String1" }));
    }

    #[test]
    fn test_output_field_defaults() {
        let field: OutputField = serde_json::from_value(json!({ "name": "output" })).unwrap();
        assert_eq!(field.value_type, VariableType::String);
        assert!(field.editable);
        assert!(field.key.is_empty());
    }

    #[test]
    fn test_variable_type_from_str() {
        assert_eq!(VariableType::from_str("list").unwrap(), VariableType::List);
        assert_eq!(VariableType::from("uuid".to_string()), VariableType::Other("uuid".to_string()));
    }

    #[test]
    fn test_variable_type_wire_names() {
        let value = serde_json::to_value(VariableType::Integer).unwrap();
        assert_eq!(value, json!("integer"));
        assert_eq!(serde_json::from_value::<VariableType>(json!("boolean")).unwrap(), VariableType::Boolean);
    }

    #[test]
    fn test_unknown_variable_type_is_kept() {
        let field: OutputField = serde_json::from_value(json!({ "name": "items", "type": "list<string>" })).unwrap();
        assert_eq!(field.value_type, VariableType::Other("list<string>".to_string()));
        assert_eq!(serde_json::to_value(&field).unwrap()["type"], json!("list<string>"));
    }
}
