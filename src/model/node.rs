use serde::{Deserialize, Serialize};

/// Display metadata of a canvas node.
///
/// Opaque to the transforms: it is copied between the persisted record and
/// the form model without inspection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeMeta {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub sub_title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub main_color: String,
}

impl NodeMeta {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }
}
