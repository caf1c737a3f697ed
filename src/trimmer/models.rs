use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::model::{NodeMeta, OutputField, ParameterBinding};

use super::consts::{I18N_PREFIX, default_node_meta, default_outputs};

/// How characters are stripped from the text.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash, strum::AsRefStr, strum::EnumString, strum::EnumIter, strum::Display,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum TrimMethod {
    /// Whitespace at both ends.
    #[default]
    LeadingTrailing,
    /// Whitespace anywhere in the text.
    All,
    Leading,
    Trailing,
    /// A user supplied character set at both ends.
    Custom,
}

impl TrimMethod {
    pub fn label_key(&self) -> String {
        format!("{}.method.{}", I18N_PREFIX, self.as_ref())
    }

    pub fn description_key(&self) -> String {
        format!("{}.method.{}Desc", I18N_PREFIX, self.as_ref())
    }

    pub fn needs_custom_chars(&self) -> bool {
        matches!(self, TrimMethod::Custom)
    }
}

/// A selectable entry of the method selector.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct MethodOption {
    pub value: TrimMethod,
    pub label: String,
    pub description: String,
}

/// All methods in selector order.
pub fn method_options() -> Vec<MethodOption> {
    TrimMethod::iter()
        .map(|value| MethodOption {
            value,
            label: value.label_key(),
            description: value.description_key(),
        })
        .collect()
}

/// Editable configuration of a text trimmer node.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TrimmerForm {
    #[serde(default)]
    pub method: TrimMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_chars: Option<String>,
    #[serde(default)]
    pub input_parameters: Vec<ParameterBinding>,
    #[serde(default = "default_outputs")]
    pub outputs: Vec<OutputField>,
    #[serde(default = "default_node_meta")]
    pub node_meta: NodeMeta,
}

impl TrimmerForm {
    /// Custom characters that will be saved, if any.
    pub fn effective_custom_chars(&self) -> Option<&str> {
        match self.method {
            TrimMethod::Custom => self.custom_chars.as_deref().filter(|c| !c.is_empty()),
            _ => None,
        }
    }
}
