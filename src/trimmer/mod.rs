//! The text trimmer node: its configuration form and the conversions to and
//! from the persisted record.

pub mod adapt;
pub mod consts;
pub mod effects;
pub mod models;
pub mod transformer;
pub mod validate;

use crate::{
    Result,
    form::{FieldError, Loaded, NodeForm, RegistryMeta},
    model::{NodeMeta, PersistedRecord},
};

pub use adapt::TrimConfig;
pub use models::{MethodOption, TrimMethod, TrimmerForm, method_options};
pub use transformer::{to_form_model, to_persisted_model};

impl NodeForm for TrimmerForm {
    type Record = PersistedRecord;

    fn node_type() -> &'static str {
        consts::NODE_TYPE
    }

    fn registry() -> RegistryMeta {
        consts::REGISTRY
    }

    fn record_schema() -> &'static serde_json::Value {
        PersistedRecord::schema()
    }

    fn parse_record(value: serde_json::Value) -> Result<PersistedRecord> {
        PersistedRecord::from_value(value)
    }

    fn default_node_meta() -> NodeMeta {
        consts::default_node_meta()
    }

    fn init(
        record: Option<&PersistedRecord>,
        placeholder: &NodeMeta,
    ) -> Loaded<Self> {
        to_form_model(record, placeholder)
    }

    fn submit(&self) -> PersistedRecord {
        to_persisted_model(self)
    }

    fn validate(&self) -> Vec<FieldError> {
        validate::validate(self)
    }

    fn watched_fields() -> &'static [&'static str] {
        &[consts::FIELD_METHOD]
    }

    fn read_only_fields() -> &'static [&'static str] {
        &[consts::FIELD_OUTPUTS]
    }

    fn on_change(
        &mut self,
        field: &str,
    ) {
        if field == consts::FIELD_METHOD {
            effects::handle_method_change(self);
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_registry() {
        assert_eq!(TrimmerForm::node_type(), "text_trimmer");

        let registry = TrimmerForm::registry();
        assert_eq!(registry.width, 360.0);
        assert_eq!(registry.help_link, "/open/docs/guides/text_trimmer_node");
        assert_eq!(serde_json::to_value(registry).unwrap()["inputParametersPath"], json!("/inputParameters"));
    }

    #[test]
    fn test_on_change_ignores_other_fields() {
        let mut form = TrimmerForm::init(None, &TrimmerForm::default_node_meta()).form;
        form.input_parameters.clear();

        form.on_change(consts::FIELD_CUSTOM_CHARS);
        assert!(form.input_parameters.is_empty());

        form.on_change(consts::FIELD_METHOD);
        assert_eq!(form.input_parameters.len(), 1);
    }

    #[test]
    fn test_record_schema_is_object() {
        assert_eq!(TrimmerForm::record_schema()["type"], json!("object"));
        assert!(TrimmerForm::parse_record(json!({ "inputs": [] })).is_err());
    }
}
