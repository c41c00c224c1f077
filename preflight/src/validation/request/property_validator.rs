//! Required property check over the decoded body

use super::body_validator::check_body_is_json;
use crate::types::{DecodedBody, RequestEnvelope};
use crate::validation::{GateError, GateResult, Validator};

/// Decode the body and confirm every required field is present as a key
///
/// Extra fields are allowed. The decoded body is returned unchanged.
pub fn check_required_properties<S: AsRef<str>>(
    envelope: &RequestEnvelope,
    required: &[S],
) -> GateResult<DecodedBody> {
    let body = check_body_is_json(envelope)?;

    let missing: Vec<&str> = required
        .iter()
        .map(|field| field.as_ref())
        .filter(|field| !body.contains_key(*field))
        .collect();

    if !missing.is_empty() {
        return Err(GateError::required_fields_missing(&missing));
    }

    Ok(body)
}

/// Checks the decoded body against a fixed list of required fields
#[derive(Debug, Default, Clone)]
pub struct RequiredPropertiesValidator {
    required: Vec<String>,
}

impl RequiredPropertiesValidator {
    /// Create a validator requiring the given field names
    pub fn new<I, S>(required: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            required: required.into_iter().map(Into::into).collect(),
        }
    }

    /// Field names this validator requires
    pub fn required(&self) -> &[String] {
        &self.required
    }
}

impl Validator<RequestEnvelope> for RequiredPropertiesValidator {
    type Output = DecodedBody;
    type Error = GateError;

    fn validate(&self, envelope: &RequestEnvelope) -> GateResult<DecodedBody> {
        check_required_properties(envelope, self.required.as_slice())
    }
}
