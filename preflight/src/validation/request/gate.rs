//! Composite gate that runs every request check in order

use super::{RequiredPropertiesValidator, ResourceIdValidator};
use crate::types::{RequestEnvelope, ValidatedRequest};
use crate::validation::{GateError, GateResult, Validator};

/// Configuration for the request gate
#[derive(Debug, Clone)]
pub struct RequestValidatorConfig {
    /// Field names the decoded body must contain
    pub required_properties: Vec<String>,
    /// Whether the request path must carry a valid `id`
    pub require_resource_id: bool,
}

impl Default for RequestValidatorConfig {
    fn default() -> Self {
        Self {
            required_properties: Vec::new(),
            require_resource_id: true,
        }
    }
}

impl RequestValidatorConfig {
    pub fn with_required_properties<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_properties = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_resource_id(mut self, required: bool) -> Self {
        self.require_resource_id = required;
        self
    }
}

/// Runs the request checks as one fail-fast gate
///
/// Order:
/// - body present and decodable as a JSON object
/// - required properties present
/// - resource id present and well formed (when configured)
///
/// The first failing check's error is returned as is.
#[derive(Debug, Clone)]
pub struct RequestGate {
    property_validator: RequiredPropertiesValidator,
    id_validator: Option<ResourceIdValidator>,
}

impl RequestGate {
    /// Create a gate with default configuration
    pub fn new() -> Self {
        Self::with_config(RequestValidatorConfig::default())
    }

    /// Create a gate with custom configuration
    pub fn with_config(config: RequestValidatorConfig) -> Self {
        Self {
            property_validator: RequiredPropertiesValidator::new(config.required_properties),
            id_validator: config.require_resource_id.then(ResourceIdValidator::new),
        }
    }

    /// Get a reference to the required properties validator
    pub fn property_validator(&self) -> &RequiredPropertiesValidator {
        &self.property_validator
    }

    /// Whether this gate checks the resource id
    pub fn requires_resource_id(&self) -> bool {
        self.id_validator.is_some()
    }
}

impl Default for RequestGate {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator<RequestEnvelope> for RequestGate {
    type Output = ValidatedRequest;
    type Error = GateError;

    fn validate(&self, envelope: &RequestEnvelope) -> GateResult<ValidatedRequest> {
        // Presence and decoding run inside the property check
        let body = self.property_validator.validate(envelope)?;

        let id = match &self.id_validator {
            Some(validator) => Some(validator.validate(envelope)?),
            None => None,
        };

        Ok(ValidatedRequest { id, body })
    }
}
