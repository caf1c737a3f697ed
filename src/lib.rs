//! # Text Trimmer
//!
//! Configuration surface of the text trimmer node of a visual workflow editor.
//!
//! ## Core Features
//!
//! - **Form/record transforms**: load a persisted node into an editable form and
//!   save it back, tolerating partial records
//! - **Change effects**: keep dependent fields consistent when the trim method changes
//! - **Validation**: block saving until every required field is filled in
//! - **Form engine**: an in-process host that addresses fields by name and records events
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use text_trimmer::{FormEngineBuilder, TrimmerForm};
//!
//! let mut engine = FormEngineBuilder::new().build::<TrimmerForm>();
//! engine.load_json(saved_json)?;
//!
//! engine.set("method", json!("custom"))?;
//! engine.set("customChars", json!(".,!"))?;
//!
//! let record = engine.submit()?;
//! ```

mod builder;
mod config;
mod error;
pub mod events;
pub mod form;
pub mod model;
pub mod trimmer;

pub use builder::FormEngineBuilder;
pub use config::{Config, PlaceholderConfig};
pub use error::TrimmerError;
pub use form::{FieldError, FormEngine, Loaded, NodeForm, SchemaViolation};
pub use trimmer::{TrimConfig, TrimMethod, TrimmerForm, to_form_model, to_persisted_model};

/// Result type alias for text trimmer operations.
pub type Result<T> = std::result::Result<T, TrimmerError>;
