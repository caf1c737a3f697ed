//! Event types for form editing sessions.
//!
//! Events are recorded by the [`FormEngine`](crate::FormEngine) on every
//! load, field change, effect and save so that the editor shell can react
//! to them.

mod form;

pub use form::*;
