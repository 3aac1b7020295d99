//! Maps raw transport results onto the five-variant [`Outcome`].
//!
//! Classification is total: every input ends in exactly one variant and
//! nothing here can fail or panic.

use serde_json::{Map, Value};

use super::outcome::{FieldErrors, Outcome, Payload};
use super::transport::{RawResponse, TransportError};

const AUTH_FALLBACK: &str = "Authentication failed";
const VALIDATION_FALLBACK: &str = "Validation error";

/// Classify the result of one transport call.
pub fn classify_result(result: Result<RawResponse, TransportError>) -> Outcome<Payload> {
    match result {
        Ok(response) => classify(response.status, &response.body),
        Err(err) if err.is_network() => Outcome::NetworkError(err.to_string()),
        Err(err) => Outcome::ServerError(err.to_string()),
    }
}

/// Classify a received status code and body.
pub fn classify(status: u16, body: &str) -> Outcome<Payload> {
    match status {
        200 => classify_success(body),
        401 | 403 => Outcome::AuthError(
            message_field(body).unwrap_or_else(|| AUTH_FALLBACK.to_string()),
        ),
        422 => classify_validation(body),
        500..=599 => Outcome::ServerError(
            message_field(body).unwrap_or_else(|| format!("Server error ({})", status)),
        ),
        _ => Outcome::ServerError(
            message_field(body).unwrap_or_else(|| format!("Request failed ({})", status)),
        ),
    }
}

fn classify_success(body: &str) -> Outcome<Payload> {
    match serde_json::from_str::<Value>(body) {
        Ok(envelope) => {
            let data = envelope
                .as_object()
                .and_then(|object| object.get("data"))
                .cloned()
                .unwrap_or_else(|| envelope.clone());
            Outcome::Success(Payload::new(data, envelope))
        }
        Err(_) => Outcome::Success(Payload::raw(body)),
    }
}

fn classify_validation(body: &str) -> Outcome<Payload> {
    let object = parse_object(body);
    let message = object
        .as_ref()
        .and_then(|object| string_field(object, "message"))
        .unwrap_or_else(|| VALIDATION_FALLBACK.to_string());
    let field_errors = object
        .as_ref()
        .and_then(|object| object.get("errors"))
        .and_then(parse_field_errors)
        .unwrap_or_default();

    Outcome::ValidationError {
        message,
        field_errors,
    }
}

/// Parse an `errors` object whose values must all be lists of strings.
/// Anything else makes the whole mapping malformed.
fn parse_field_errors(value: &Value) -> Option<FieldErrors> {
    let object = value.as_object()?;
    let mut errors = FieldErrors::new();
    for (field, messages) in object {
        let messages = messages
            .as_array()?
            .iter()
            .map(|m| m.as_str().map(str::to_string))
            .collect::<Option<Vec<_>>>()?;
        errors.insert(field.clone(), messages);
    }
    Some(errors)
}

fn parse_object(body: &str) -> Option<Map<String, Value>> {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(object)) => Some(object),
        _ => None,
    }
}

fn message_field(body: &str) -> Option<String> {
    parse_object(body).and_then(|object| string_field(&object, "message"))
}

fn string_field(object: &Map<String, Value>, key: &str) -> Option<String> {
    match object.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
