use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::{
    Result, TrimmerError,
    model::{BlockInput, NodeMeta, OutputField, ParameterBinding},
};

/// A named parameter inside the persisted parameter list.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NamedParameter {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<BlockInput>,
}

impl NamedParameter {
    pub fn literal(
        name: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            input: Some(BlockInput::from_literal(content)),
        }
    }
}

/// Input section of a persisted node.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersistedInputs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_parameters: Option<Vec<ParameterBinding>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trim_params: Option<Vec<NamedParameter>>,
}

/// Backend representation of a text trimmer node.
///
/// Every section is optional so that partially written records still load.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersistedRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_meta: Option<NodeMeta>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inputs: Option<PersistedInputs>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outputs: Option<Vec<OutputField>>,
}

static RECORD_SCHEMA: LazyLock<serde_json::Value> = LazyLock::new(|| {
    serde_json::json!({
        "type": "object",
        "properties": {
            "nodeMeta": {
                "type": "object",
                "properties": {
                    "title": { "type": "string" },
                    "icon": { "type": "string" },
                    "subTitle": { "type": "string" },
                    "description": { "type": "string" },
                    "mainColor": { "type": "string" }
                }
            },
            "inputs": {
                "type": "object",
                "properties": {
                    "inputParameters": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "name": { "type": "string" },
                                "input": { "$ref": "#/$defs/blockInput" }
                            },
                            "required": ["name"]
                        }
                    },
                    "trimParams": {
                        "type": "array",
                        "description": "Named trim settings, recognized names are trimType and customChars",
                        "items": {
                            "type": "object",
                            "properties": {
                                "name": { "type": "string" },
                                "input": { "$ref": "#/$defs/blockInput" }
                            },
                            "required": ["name"]
                        }
                    }
                }
            },
            "outputs": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "key": { "type": "string" },
                        "name": { "type": "string" },
                        "type": { "type": "string" },
                        "editable": { "type": "boolean" }
                    },
                    "required": ["name"]
                }
            }
        },
        "$defs": {
            "blockInput": {
                "type": "object",
                "properties": {
                    "type": { "type": "string" },
                    "value": {
                        "type": "object",
                        "properties": {
                            "type": { "type": "string", "enum": ["literal", "ref"] },
                            "content": {}
                        },
                        "required": ["type"]
                    }
                },
                "required": ["value"]
            }
        }
    })
});

impl PersistedRecord {
    /// JSON schema the raw record is checked against before decoding.
    pub fn schema() -> &'static serde_json::Value {
        &RECORD_SCHEMA
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        jsonschema::validate(Self::schema(), &value).map_err(|e| TrimmerError::Convert(format!("invalid node record: {}", e)))?;
        let record = serde_json::from_value::<Self>(value)?;
        Ok(record)
    }

    pub fn from_json(s: &str) -> Result<Self> {
        let value = serde_json::from_str::<serde_json::Value>(s)?;
        Self::from_value(value)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn trim_params(&self) -> &[NamedParameter] {
        self.inputs.as_ref().and_then(|i| i.trim_params.as_deref()).unwrap_or_default()
    }

    pub fn input_parameters(&self) -> Option<&[ParameterBinding]> {
        self.inputs.as_ref().and_then(|i| i.input_parameters.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::model::VariableType;

    #[test]
    fn test_from_json_full_record() {
        let record = PersistedRecord::from_json(
            r#"{
            "nodeMeta": { "title": "Trim" },
            "inputs": {
                "inputParameters": [
                    { "name": "String1", "input": { "type": "string", "value": { "type": "ref", "content": { "source": "block-output", "blockID": "100001", "name": "text" } } } }
                ],
                "trimParams": [
                    { "name": "trimType", "input": { "type": "string", "value": { "type": "literal", "content": "all" } } }
                ]
            },
            "outputs": [ { "key": "output", "name": "output", "type": "string", "editable": false } ]
        }"#,
        )
        .unwrap();

        assert_eq!(record.node_meta.as_ref().unwrap().title, "Trim");
        assert_eq!(record.trim_params().len(), 1);
        assert_eq!(record.input_parameters().map(|p| p.len()), Some(1));
        assert_eq!(record.outputs.as_ref().unwrap()[0].name, "output");
    }

    #[test]
    fn test_from_json_empty_object() {
        let record = PersistedRecord::from_json("{}").unwrap();
        assert_eq!(record, PersistedRecord::default());
        assert!(record.trim_params().is_empty());
        assert!(record.input_parameters().is_none());
    }

    #[test]
    fn test_from_value_rejects_wrong_types() {
        let result = PersistedRecord::from_value(json!({ "inputs": { "trimParams": "trimType=all" } }));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("invalid node record"));

        let result = PersistedRecord::from_value(json!({ "outputs": [ { "type": "string" } ] }));
        assert!(result.is_err());
    }

    #[test]
    fn test_from_value_rejects_unknown_expression_kind() {
        let result = PersistedRecord::from_value(json!({
            "inputs": { "trimParams": [ { "name": "trimType", "input": { "value": { "type": "formula", "content": "x" } } } ] }
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_from_value_accepts_unknown_value_types() {
        let record = PersistedRecord::from_value(json!({
            "inputs": {
                "trimParams": [
                    { "name": "legacyFlag", "input": { "type": "time", "value": { "type": "literal", "content": "x" } } },
                    { "name": "trimType", "input": { "type": "string", "value": { "type": "literal", "content": "all" } } }
                ]
            },
            "outputs": [ { "name": "output", "type": "list<string>" } ]
        }))
        .unwrap();

        assert_eq!(record.trim_params()[0].input.as_ref().unwrap().value_type, VariableType::Other("time".to_string()));
        assert_eq!(record.outputs.as_ref().unwrap()[0].value_type, VariableType::Other("list<string>".to_string()));
    }

    #[test]
    fn test_to_json_skips_missing_sections() {
        let record = PersistedRecord {
            node_meta: None,
            inputs: Some(PersistedInputs {
                input_parameters: None,
                trim_params: Some(vec![NamedParameter::literal("trimType", "leading")]),
            }),
            outputs: None,
        };

        let value: serde_json::Value = serde_json::from_str(&record.to_json().unwrap()).unwrap();
        assert_eq!(
            value,
            json!({
                "inputs": {
                    "trimParams": [
                        { "name": "trimType", "input": { "type": "string", "value": { "type": "literal", "content": "leading" } } }
                    ]
                }
            })
        );
    }
}
