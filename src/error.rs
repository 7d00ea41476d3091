//! Uniform failure type for collaborator calls.
//!
//! Every fetch/write failure collapses into one generic shape carrying a
//! human-readable message and a numeric status code. Errors never cross
//! the reducer boundary as `Err`; effects convert them into result
//! intents and reducers fold the message into state.

use thiserror::Error;

/// A failed collaborator operation (timeout, decoding, not-found, ...).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} (code {code})")]
pub struct ServiceError {
    pub message: String,
    pub code: u16,
}

impl ServiceError {
    pub fn new(message: impl Into<String>, code: u16) -> Self {
        Self {
            message: message.into(),
            code,
        }
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        Self::new(format!("{} not found", what.into()), 404)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(message, 409)
    }

    pub fn timeout() -> Self {
        Self::new("timeout", 408)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(message, 500)
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("decoding failed: {err}"), 422)
    }
}
