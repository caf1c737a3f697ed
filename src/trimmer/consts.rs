//! Field names, defaults and static metadata of the text trimmer node.
//!
//! Nothing else in the crate spells out these names or default values.

use crate::{
    form::RegistryMeta,
    model::{NodeMeta, OutputField, ParameterBinding, VariableType},
};

/// Node type name used by the registry.
pub const NODE_TYPE: &str = "text_trimmer";

// Form-side field names.
pub const FIELD_METHOD: &str = "method";
pub const FIELD_CUSTOM_CHARS: &str = "customChars";
pub const FIELD_INPUT_PARAMETERS: &str = "inputParameters";
pub const FIELD_OUTPUTS: &str = "outputs";
pub const FIELD_NODE_META: &str = "nodeMeta";

// Persisted names inside `inputs.trimParams`. Renaming either breaks saved workflows.
pub const PARAM_TRIM_TYPE: &str = "trimType";
pub const PARAM_CUSTOM_CHARS: &str = "customChars";

/// Input slot name the runtime reads the text from.
pub const DEFAULT_INPUT_NAME: &str = "String1";
pub const OUTPUT_KEY: &str = "output";

pub const I18N_PREFIX: &str = "workflow.node.text-trimmer";
pub const MSG_CUSTOM_CHARS_REQUIRED: &str = "workflow.node.text-trimmer.customChars.required";
pub const MSG_INPUT_REQUIRED: &str = "workflow.detail.node.input.required";
pub const MSG_INPUTS_EMPTY: &str = "workflow.detail.node.inputs.empty";
pub const MSG_TITLE_REQUIRED: &str = "workflow.detail.node.name.required";

pub const REGISTRY: RegistryMeta = RegistryMeta {
    width: 360.0,
    height: 130.7,
    input_parameters_path: "/inputParameters",
    node_meta_path: "/nodeMeta",
    outputs_path: "/outputs",
    help_link: "/open/docs/guides/text_trimmer_node",
};

/// A commonly used custom character set offered next to the custom field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomCharsPreset {
    pub label: &'static str,
    pub value: &'static str,
}

pub const COMMON_CUSTOM_CHARS: &[CustomCharsPreset] = &[
    CustomCharsPreset { label: "Space", value: " " },
    CustomCharsPreset { label: "Tab", value: "\t" },
    CustomCharsPreset { label: "Newline", value: "\n" },
    CustomCharsPreset { label: "Carriage return", value: "\r" },
    CustomCharsPreset { label: "Punctuation", value: ".,;:!?" },
    CustomCharsPreset { label: "Digits", value: "0123456789" },
];

/// The single, read-only output of the node.
pub fn default_outputs() -> Vec<OutputField> {
    vec![OutputField {
        key: OUTPUT_KEY.to_string(),
        name: OUTPUT_KEY.to_string(),
        value_type: VariableType::String,
        editable: false,
    }]
}

/// Input slots seeded into an unconfigured node.
pub fn default_inputs() -> Vec<ParameterBinding> {
    vec![ParameterBinding::unbound(DEFAULT_INPUT_NAME)]
}

/// Node meta used when neither the record nor the caller provides one.
pub fn default_node_meta() -> NodeMeta {
    NodeMeta {
        title: "Text Trimmer".to_string(),
        icon: String::new(),
        sub_title: "Text".to_string(),
        description: "Removes whitespace or custom characters from text".to_string(),
        main_color: "#3071F2".to_string(),
    }
}
