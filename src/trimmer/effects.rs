use tracing::debug;

use super::{
    consts::{default_inputs, default_outputs},
    models::TrimmerForm,
};

/// Reconciles dependent fields after the trim method changed.
///
/// Runs the same way for every method: the fixed output is restored and an
/// empty input list is seeded with the default slot. Bound inputs are kept.
pub fn handle_method_change(form: &mut TrimmerForm) {
    form.outputs = default_outputs();

    if form.input_parameters.is_empty() {
        debug!("seeding default text trimmer inputs");
        form.input_parameters = default_inputs();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        model::{BlockInput, NodeMeta, OutputField, ParameterBinding, VariableType},
        trimmer::models::TrimMethod,
    };

    fn empty_form(method: TrimMethod) -> TrimmerForm {
        TrimmerForm {
            method,
            custom_chars: None,
            input_parameters: vec![],
            outputs: vec![],
            node_meta: NodeMeta::new("Trim"),
        }
    }

    #[test]
    fn test_seeds_empty_form() {
        let mut form = empty_form(TrimMethod::All);
        handle_method_change(&mut form);

        assert_eq!(form.outputs, default_outputs());
        assert_eq!(form.input_parameters, default_inputs());
    }

    #[test]
    fn test_idempotent() {
        let mut form = empty_form(TrimMethod::Custom);
        handle_method_change(&mut form);
        let once = form.clone();

        handle_method_change(&mut form);
        assert_eq!(form, once);
    }

    #[test]
    fn test_keeps_user_inputs() {
        let user_inputs = vec![ParameterBinding::bound("x", BlockInput::from_literal("  padded  "))];

        for method in [TrimMethod::LeadingTrailing, TrimMethod::All, TrimMethod::Leading, TrimMethod::Trailing, TrimMethod::Custom] {
            let mut form = empty_form(method);
            form.input_parameters = user_inputs.clone();
            handle_method_change(&mut form);
            assert_eq!(form.input_parameters, user_inputs);
        }
    }

    #[test]
    fn test_restores_tampered_outputs() {
        let mut form = empty_form(TrimMethod::Leading);
        form.outputs = vec![
            OutputField {
                key: "output".to_string(),
                name: "renamed".to_string(),
                value_type: VariableType::Integer,
                editable: true,
            },
            OutputField {
                key: "extra".to_string(),
                name: "extra".to_string(),
                value_type: VariableType::String,
                editable: true,
            },
        ];

        handle_method_change(&mut form);
        assert_eq!(form.outputs, default_outputs());
    }

    #[test]
    fn test_leaves_other_fields_alone() {
        let mut form = empty_form(TrimMethod::Custom);
        form.custom_chars = Some("#".to_string());
        handle_method_change(&mut form);

        assert_eq!(form.method, TrimMethod::Custom);
        assert_eq!(form.custom_chars.as_deref(), Some("#"));
        assert_eq!(form.node_meta.title, "Trim");
    }
}
