use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Result, TrimmerError, model::PersistedRecord};

use super::{
    consts::{PARAM_CUSTOM_CHARS, PARAM_TRIM_TYPE},
    models::TrimMethod,
};

/// Settings a runtime needs to execute a text trimmer node.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct TrimConfig {
    #[serde(rename = "type")]
    pub trim_type: TrimMethod,
    #[serde(rename = "customChars", default)]
    pub custom_chars: String,
}

impl TrimConfig {
    /// Read the runtime settings from a saved record.
    ///
    /// Parameters without a string literal are skipped and a missing
    /// `trimType` means [`TrimMethod::LeadingTrailing`]. Unlike loading into
    /// the editor, an unknown trim type is an error here.
    pub fn adapt(record: &PersistedRecord) -> Result<Self> {
        let mut trim_type: Option<&str> = None;
        let mut custom_chars: Option<&str> = None;

        for param in record.trim_params() {
            let Some(content) = param.input.as_ref().and_then(|i| i.literal_str()) else {
                continue;
            };

            match param.name.as_str() {
                PARAM_TRIM_TYPE if trim_type.is_none() => trim_type = Some(content),
                PARAM_CUSTOM_CHARS if custom_chars.is_none() => custom_chars = Some(content),
                _ => {}
            }
        }

        let trim_type = match trim_type {
            Some(s) => TrimMethod::from_str(s).map_err(|_| TrimmerError::Node(format!("unsupported trim type: {}", s)))?,
            None => TrimMethod::default(),
        };

        let config = Self {
            trim_type,
            custom_chars: custom_chars.unwrap_or_default().to_string(),
        };
        debug!(trim_type = %config.trim_type, "text trimmer config adapted");

        Ok(config)
    }
}
