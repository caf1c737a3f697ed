//! In-process host for a node configuration form.
//!
//! The engine owns the live form of one editing session. It addresses fields
//! by their form-side names, runs the node's change effect when a watched
//! field changes and gates saving on validation.

use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    Config, Result, TrimmerError,
    events::FormEvent,
    form::{FieldError, NodeForm, SchemaViolation},
};

/// Form engine for a single node.
///
/// # Example
///
/// ```rust,ignore
/// let mut engine = FormEngineBuilder::new().build::<TrimmerForm>();
/// engine.load(None)?;
/// engine.set("method", json!("custom"))?;
/// engine.set("customChars", json!("#"))?;
/// let record = engine.submit()?;
/// ```
pub struct FormEngine<F: NodeForm> {
    config: Config,
    /// Live form, `None` before the first load and after close.
    form: Option<F>,
    events: Vec<FormEvent>,
}

impl<F: NodeForm> FormEngine<F> {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            form: None,
            events: Vec::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Builds a fresh form from `record`, replacing any previous one.
    ///
    /// Returns the schema violations that were ignored while loading. With
    /// `strict_schema` enabled any violation fails the load and the previous
    /// form is kept. A successful load starts a new event log.
    pub fn load(
        &mut self,
        record: Option<&F::Record>,
    ) -> Result<Vec<SchemaViolation>> {
        let placeholder = self.config.placeholder_meta().unwrap_or_else(F::default_node_meta);
        let loaded = F::init(record, &placeholder);

        if !loaded.violations.is_empty() {
            let reasons: Vec<String> = loaded.violations.iter().map(ToString::to_string).collect();
            if self.config.strict_schema {
                return Err(TrimmerError::Schema(reasons.join(", ")));
            }
            warn!(node_type = F::node_type(), violations = ?reasons, "record loaded with schema violations");
        }

        let mut form = loaded.form;
        self.events.clear();
        self.record(FormEvent::Loaded(loaded.violations.clone()));

        if self.config.fire_effects_on_mount {
            for field in F::watched_fields() {
                form.on_change(field);
                self.record(FormEvent::EffectApplied(field.to_string()));
            }
        }

        debug!(node_type = F::node_type(), "form loaded");
        self.form = Some(form);
        Ok(loaded.violations)
    }

    /// Decodes a raw JSON record and loads it.
    pub fn load_json(
        &mut self,
        json: &str,
    ) -> Result<Vec<SchemaViolation>> {
        let value = serde_json::from_str::<Value>(json)?;
        let record = F::parse_record(value)?;
        self.load(Some(&record))
    }

    pub fn form(&self) -> Option<&F> {
        self.form.as_ref()
    }

    fn live(&self) -> Result<&F> {
        self.form.as_ref().ok_or_else(|| TrimmerError::Field("no form loaded".to_string()))
    }

    /// Current value of a field, `None` when the field is unset or unknown.
    pub fn get(
        &self,
        name: &str,
    ) -> Option<Value> {
        let form = self.form.as_ref()?;
        match serde_json::to_value(form) {
            Ok(Value::Object(mut fields)) => fields.remove(name),
            _ => None,
        }
    }

    /// Sets a field from its JSON value.
    ///
    /// The value is decoded through the typed form, so a value the form
    /// cannot represent is rejected and the form is left untouched. Read-only
    /// fields are rejected as well. When a watched field actually changes,
    /// the change effect runs once.
    pub fn set(
        &mut self,
        name: &str,
        value: Value,
    ) -> Result<()> {
        let form = self.live()?;
        if F::read_only_fields().iter().any(|f| *f == name) {
            return Err(TrimmerError::Field(format!("field '{}' is read-only", name)));
        }

        let mut fields = match serde_json::to_value(form)? {
            Value::Object(fields) => fields,
            _ => return Err(TrimmerError::Field("form is not an object".to_string())),
        };
        let previous = fields.insert(name.to_string(), value.clone());

        let mut updated = serde_json::from_value::<F>(Value::Object(fields)).map_err(|e| TrimmerError::Field(format!("invalid value for '{}': {}", name, e)))?;
        self.record(FormEvent::ValueChanged(name.to_string()));

        let changed = previous.as_ref() != Some(&value);
        if changed && F::watched_fields().iter().any(|f| *f == name) {
            debug!(node_type = F::node_type(), field = name, "running change effect");
            updated.on_change(name);
            self.record(FormEvent::EffectApplied(name.to_string()));
        }

        self.form = Some(updated);
        Ok(())
    }

    /// All validation errors of the live form.
    pub fn validate(&self) -> Vec<FieldError> {
        self.form.as_ref().map(F::validate).unwrap_or_default()
    }

    /// Validation errors at `name` or below it.
    pub fn validate_field(
        &self,
        name: &str,
    ) -> Vec<FieldError> {
        self.validate().into_iter().filter(|e| e.is_under(name)).collect()
    }

    /// Validates the form and returns the record to persist.
    pub fn submit(&mut self) -> Result<F::Record> {
        let form = self.live()?;

        let errors = form.validate();
        if !errors.is_empty() {
            warn!(node_type = F::node_type(), errors = errors.len(), "submit blocked by validation");
            let reasons = errors.iter().map(ToString::to_string).collect();
            self.record(FormEvent::SubmitBlocked(errors));
            return Err(TrimmerError::Validation(reasons));
        }

        let record = form.submit();
        self.record(FormEvent::Submitted);
        Ok(record)
    }

    /// Drops the live form, e.g. when the node is deleted.
    pub fn close(&mut self) {
        if self.form.take().is_some() {
            self.record(FormEvent::Closed);
        }
    }

    fn record(
        &mut self,
        event: FormEvent,
    ) {
        debug!(node_type = F::node_type(), event = event.str(), "form event");
        self.events.push(event);
    }

    /// Events since the last successful load or [`FormEngine::take_events`].
    pub fn events(&self) -> &[FormEvent] {
        &self.events
    }

    /// Returns and clears the recorded events.
    pub fn take_events(&mut self) -> Vec<FormEvent> {
        std::mem::take(&mut self.events)
    }
}
