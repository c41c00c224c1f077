//! Body presence and JSON decoding checks

use crate::types::{Body, DecodedBody, RequestEnvelope};
use crate::validation::{GateError, GateResult, Validator};
use serde_json::Value;

/// Return the raw body unchanged, failing when it is absent
pub fn check_body_present(body: Option<&Body>) -> GateResult<&Body> {
    body.ok_or_else(GateError::body_missing)
}

/// Decode the envelope body into a JSON object
///
/// A body that parses but is not an object (array, string, number, null) is
/// rejected the same way as one that does not parse.
pub fn check_body_is_json(envelope: &RequestEnvelope) -> GateResult<DecodedBody> {
    let body = check_body_present(envelope.body.as_ref())?;

    let value: Value = serde_json::from_slice(body.as_bytes()).map_err(|e| {
        GateError::body_not_json(format!("request property 'body' is not valid JSON: {}", e))
    })?;

    match value {
        Value::Object(map) => Ok(map),
        other => Err(GateError::body_not_json(format!(
            "request property 'body' must be a JSON object, got {}",
            json_type_name(&other)
        ))),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Decodes the envelope body into a JSON object
#[derive(Debug, Default, Clone)]
pub struct JsonBodyValidator;

impl JsonBodyValidator {
    pub fn new() -> Self {
        Self
    }
}

impl Validator<RequestEnvelope> for JsonBodyValidator {
    type Output = DecodedBody;
    type Error = GateError;

    fn validate(&self, envelope: &RequestEnvelope) -> GateResult<DecodedBody> {
        check_body_is_json(envelope)
    }
}
