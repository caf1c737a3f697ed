use crate::form::{FieldError, SchemaViolation};

#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    /// A form was built from a record or from defaults.
    Loaded(Vec<SchemaViolation>),
    /// A field was set by the user.
    ValueChanged(String),
    /// The change effect ran for a watched field.
    EffectApplied(String),
    Submitted,
    /// Saving was refused by validation.
    SubmitBlocked(Vec<FieldError>),
    /// The form was dropped.
    Closed,
}

impl FormEvent {
    pub fn str(&self) -> &str {
        match self {
            FormEvent::Loaded(_) => "Loaded",
            FormEvent::ValueChanged(_) => "ValueChanged",
            FormEvent::EffectApplied(_) => "EffectApplied",
            FormEvent::Submitted => "Submitted",
            FormEvent::SubmitBlocked(_) => "SubmitBlocked",
            FormEvent::Closed => "Closed",
        }
    }

    pub fn is_effect(&self) -> bool {
        matches!(self, FormEvent::EffectApplied(_))
    }
}
