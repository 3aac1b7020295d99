//! Closed result taxonomy for every backend call.

use std::collections::BTreeMap;

use serde_json::Value;

/// Field name to ordered list of messages, as reported by a `422` response.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Outcome of a single backend operation.
///
/// Every repository operation returns this type so callers handle failures
/// the same way regardless of which endpoint they hit. Only the success
/// payload type differs.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Success(T),
    /// User-fixable input problem. `field_errors` may be empty, in which case
    /// `message` is the only thing to show.
    ValidationError {
        message: String,
        field_errors: FieldErrors,
    },
    /// Credential or session rejected by the backend.
    AuthError(String),
    /// The transport could not complete the request.
    NetworkError(String),
    /// Backend-side failure or unclassifiable response.
    ServerError(String),
}

impl<T> Outcome<T> {
    pub fn validation(message: impl Into<String>) -> Self {
        Outcome::ValidationError {
            message: message.into(),
            field_errors: FieldErrors::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn success(self) -> Option<T> {
        match self {
            Outcome::Success(value) => Some(value),
            _ => None,
        }
    }

    /// Transform the success payload, passing failures through untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        self.and_then(|value| Outcome::Success(f(value)))
    }

    /// Chain a fallible step onto the success payload.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Outcome<U>) -> Outcome<U> {
        match self {
            Outcome::Success(value) => f(value),
            Outcome::ValidationError {
                message,
                field_errors,
            } => Outcome::ValidationError {
                message,
                field_errors,
            },
            Outcome::AuthError(message) => Outcome::AuthError(message),
            Outcome::NetworkError(message) => Outcome::NetworkError(message),
            Outcome::ServerError(message) => Outcome::ServerError(message),
        }
    }

    /// Short label for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Outcome::Success(_) => "success",
            Outcome::ValidationError { .. } => "validation_error",
            Outcome::AuthError(_) => "auth_error",
            Outcome::NetworkError(_) => "network_error",
            Outcome::ServerError(_) => "server_error",
        }
    }
}

/// Success payload produced by the classifier.
///
/// `data` is the unwrapped `data` field when the body had one, otherwise the
/// whole body. `envelope` is always the whole body, for endpoints whose
/// response shape carries meaning next to `data`.
#[derive(Debug, Clone, PartialEq)]
pub struct Payload {
    pub data: Value,
    pub envelope: Value,
}

impl Payload {
    pub fn new(data: Value, envelope: Value) -> Self {
        Self { data, envelope }
    }

    /// Payload for a `200` body that was not structured data.
    pub fn raw(body: &str) -> Self {
        let value = Value::String(body.to_string());
        Self {
            data: value.clone(),
            envelope: value,
        }
    }
}
