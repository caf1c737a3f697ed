//! Literal/expression codec used inside parameter values.
//!
//! A [`BlockInput`] is either a literal JSON scalar or a reference to an
//! output of an upstream block. References can also be written as selector
//! templates in the form `{{#blockId.name#}}`.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Result, TrimmerError, model::VariableType};

/// Regex pattern for reference selectors
/// Format: `{{#blockId.name#}}`
const REFERENCE_SELECTOR_PATTERN: &str = r"^\{\{#([^.#]+)\.([^#]+)#\}\}$";

static REFERENCE_SELECTOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(REFERENCE_SELECTOR_PATTERN).expect("reference selector pattern is valid"));

/// Where a referenced value comes from.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, strum::AsRefStr, strum::EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ReferenceSource {
    #[default]
    BlockOutput,
    GlobalVariable,
}

/// Reference to an output of another block.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ValueReference {
    #[serde(default)]
    pub source: ReferenceSource,
    #[serde(rename = "blockID", default)]
    pub block_id: String,
    #[serde(default)]
    pub name: String,
}

impl ValueReference {
    pub fn new(
        block_id: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            source: ReferenceSource::BlockOutput,
            block_id: block_id.into(),
            name: name.into(),
        }
    }

    /// Parse a `{{#blockId.name#}}` selector.
    pub fn parse_selector(selector: &str) -> Result<Self> {
        let caps = REFERENCE_SELECTOR
            .captures(selector.trim())
            .ok_or_else(|| TrimmerError::Convert(format!("invalid reference selector '{}'", selector)))?;

        Ok(Self::new(&caps[1], &caps[2]))
    }

    /// Render the reference back to its selector form.
    pub fn selector(&self) -> String {
        format!("{{{{#{}.{}#}}}}", self.block_id, self.name)
    }

    pub fn is_complete(&self) -> bool {
        !self.block_id.is_empty() && !self.name.is_empty()
    }
}

/// Value of a block input, tagged by kind on the wire.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", content = "content", rename_all = "snake_case")]
pub enum ValueExpression {
    Literal(Value),
    Ref(ValueReference),
}

/// Typed value expression stored under a parameter's `input`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BlockInput {
    #[serde(rename = "type", default)]
    pub value_type: VariableType,
    pub value: ValueExpression,
}

impl BlockInput {
    /// Encode a string literal.
    pub fn from_literal(content: impl Into<String>) -> Self {
        Self {
            value_type: VariableType::String,
            value: ValueExpression::Literal(Value::String(content.into())),
        }
    }

    /// Encode a reference to an upstream block output.
    pub fn from_reference(
        value_type: VariableType,
        reference: ValueReference,
    ) -> Self {
        Self {
            value_type,
            value: ValueExpression::Ref(reference),
        }
    }

    /// Literal content, or `None` for references.
    pub fn to_literal(&self) -> Option<&Value> {
        match &self.value {
            ValueExpression::Literal(v) => Some(v),
            ValueExpression::Ref(_) => None,
        }
    }

    /// Literal content when it is a JSON string.
    pub fn literal_str(&self) -> Option<&str> {
        self.to_literal().and_then(Value::as_str)
    }

    pub fn reference(&self) -> Option<&ValueReference> {
        match &self.value {
            ValueExpression::Ref(r) => Some(r),
            ValueExpression::Literal(_) => None,
        }
    }

    /// Whether the expression carries something a runtime could resolve.
    pub fn is_empty(&self) -> bool {
        match &self.value {
            ValueExpression::Literal(Value::Null) => true,
            ValueExpression::Literal(Value::String(s)) => s.is_empty(),
            ValueExpression::Literal(_) => false,
            ValueExpression::Ref(r) => !r.is_complete(),
        }
    }
}
