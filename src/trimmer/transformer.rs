//! Conversion between the persisted record and the editable form.

use std::{collections::HashMap, str::FromStr};

use tracing::{debug, warn};

use crate::{
    form::{Loaded, SchemaViolation},
    model::{NamedParameter, NodeMeta, PersistedInputs, PersistedRecord},
};

use super::{
    consts::{PARAM_CUSTOM_CHARS, PARAM_TRIM_TYPE, default_inputs, default_outputs},
    models::{TrimMethod, TrimmerForm},
};

/// Index named parameters by name. The first occurrence of a name wins and
/// entries without an input are skipped.
fn index_params(params: &[NamedParameter]) -> HashMap<&str, &NamedParameter> {
    let mut index = HashMap::new();
    for param in params.iter().filter(|p| p.input.is_some()) {
        index.entry(param.name.as_str()).or_insert(param);
    }
    index
}

fn decode_method(param: &NamedParameter) -> Result<TrimMethod, SchemaViolation> {
    let found = param.input.as_ref().and_then(|i| i.to_literal());
    match found {
        Some(serde_json::Value::String(s)) => TrimMethod::from_str(s).map_err(|_| SchemaViolation::UnknownValue {
            name: param.name.clone(),
            found: s.clone(),
        }),
        other => Err(SchemaViolation::NotAStringLiteral {
            name: param.name.clone(),
            found: other.map(|v| v.to_string()).unwrap_or_else(|| "reference".to_string()),
        }),
    }
}

fn decode_string(param: &NamedParameter) -> Result<String, SchemaViolation> {
    let found = param.input.as_ref().and_then(|i| i.to_literal());
    match found {
        Some(serde_json::Value::String(s)) => Ok(s.clone()),
        other => Err(SchemaViolation::NotAStringLiteral {
            name: param.name.clone(),
            found: other.map(|v| v.to_string()).unwrap_or_else(|| "reference".to_string()),
        }),
    }
}

/// Build the form from a persisted record, or from defaults when there is none.
///
/// Never fails: data that does not fit the schema leaves the corresponding
/// form field at its default and is reported in [`Loaded::violations`].
/// `placeholder` is used as node meta when the record carries none.
pub fn to_form_model(
    record: Option<&PersistedRecord>,
    placeholder: &NodeMeta,
) -> Loaded<TrimmerForm> {
    let Some(record) = record else {
        debug!("text trimmer loaded without record, using defaults");
        return Loaded::clean(TrimmerForm {
            method: TrimMethod::LeadingTrailing,
            custom_chars: None,
            input_parameters: default_inputs(),
            outputs: default_outputs(),
            node_meta: placeholder.clone(),
        });
    };

    let mut form = TrimmerForm {
        method: TrimMethod::LeadingTrailing,
        custom_chars: None,
        input_parameters: record.input_parameters().map(<[_]>::to_vec).unwrap_or_default(),
        outputs: record.outputs.clone().unwrap_or_else(default_outputs),
        node_meta: record.node_meta.clone().unwrap_or_else(|| placeholder.clone()),
    };
    let mut violations = Vec::new();

    let params = index_params(record.trim_params());

    if let Some(param) = params.get(PARAM_TRIM_TYPE) {
        match decode_method(param) {
            Ok(method) => form.method = method,
            Err(violation) => {
                warn!(%violation, "keeping {} as trim method", TrimMethod::LeadingTrailing);
                violations.push(violation);
            }
        }
    }

    if let Some(param) = params.get(PARAM_CUSTOM_CHARS) {
        match decode_string(param) {
            Ok(chars) => form.custom_chars = Some(chars),
            Err(violation) => {
                warn!(%violation, "ignoring custom characters");
                violations.push(violation);
            }
        }
    }

    debug!(method = %form.method, inputs = form.input_parameters.len(), "text trimmer form loaded");

    Loaded {
        form,
        violations,
    }
}

/// Build the persisted record from the form.
///
/// `trimParams` holds `trimType` and, only for the custom method with a
/// non-empty value, `customChars`. Other parameters are not written.
pub fn to_persisted_model(form: &TrimmerForm) -> PersistedRecord {
    let mut trim_params = vec![NamedParameter::literal(PARAM_TRIM_TYPE, form.method.as_ref())];

    if let Some(chars) = form.effective_custom_chars() {
        trim_params.push(NamedParameter::literal(PARAM_CUSTOM_CHARS, chars));
    }

    debug!(method = %form.method, params = trim_params.len(), "text trimmer form submitted");

    PersistedRecord {
        node_meta: Some(form.node_meta.clone()),
        inputs: Some(PersistedInputs {
            input_parameters: Some(form.input_parameters.clone()),
            trim_params: Some(trim_params),
        }),
        outputs: Some(form.outputs.clone()),
    }
}
