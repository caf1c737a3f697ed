//! Field validators run before a text trimmer form may be saved.

use crate::{
    form::FieldError,
    model::{NodeMeta, ParameterBinding},
};

use super::{
    consts::{
        FIELD_CUSTOM_CHARS, FIELD_INPUT_PARAMETERS, FIELD_NODE_META, MSG_CUSTOM_CHARS_REQUIRED, MSG_INPUT_REQUIRED, MSG_INPUTS_EMPTY, MSG_TITLE_REQUIRED,
    },
    models::TrimmerForm,
};

pub fn validate_node_meta(meta: &NodeMeta) -> Option<FieldError> {
    if meta.title.trim().is_empty() {
        return Some(FieldError::new(format!("{}.title", FIELD_NODE_META), MSG_TITLE_REQUIRED));
    }
    None
}

/// Every slot needs a value; the list itself needs at least one slot.
pub fn validate_input_parameters(params: &[ParameterBinding]) -> Vec<FieldError> {
    if params.is_empty() {
        return vec![FieldError::new(FIELD_INPUT_PARAMETERS, MSG_INPUTS_EMPTY)];
    }

    params
        .iter()
        .enumerate()
        .filter(|(_, p)| p.input.as_ref().is_none_or(|i| i.is_empty()))
        .map(|(i, _)| FieldError::new(format!("{}.{}.input", FIELD_INPUT_PARAMETERS, i), MSG_INPUT_REQUIRED))
        .collect()
}

/// Custom characters are required for the custom method only. Any non-empty
/// value passes, whitespace included.
pub fn validate_custom_chars(form: &TrimmerForm) -> Option<FieldError> {
    if !form.method.needs_custom_chars() {
        return None;
    }

    match form.custom_chars.as_deref() {
        Some(chars) if !chars.is_empty() => None,
        _ => Some(FieldError::new(FIELD_CUSTOM_CHARS, MSG_CUSTOM_CHARS_REQUIRED)),
    }
}

pub fn validate(form: &TrimmerForm) -> Vec<FieldError> {
    let mut errors = Vec::new();
    errors.extend(validate_node_meta(&form.node_meta));
    errors.extend(validate_input_parameters(&form.input_parameters));
    errors.extend(validate_custom_chars(form));
    errors
}
