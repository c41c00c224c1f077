//! Gate error types

/// Failures the gate can report, one variant per kind
///
/// Each variant carries a message naming the offending variable or field.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum GateError {
    /// Region configuration value absent or empty
    #[error("Region not configured: {0}")]
    RegionNotConfigured(String),

    /// Table configuration value absent or empty
    #[error("Table not configured: {0}")]
    TableNotConfigured(String),

    /// Request has no body
    #[error("Request body missing: {0}")]
    BodyMissing(String),

    /// Body present but not decodable as a JSON object
    #[error("Request body not JSON: {0}")]
    BodyNotJson(String),

    /// Decoded body lacks required fields
    #[error("Required fields missing: {0}")]
    RequiredFieldsMissing(String),

    /// Path identifier absent or malformed
    #[error("Resource id invalid: {0}")]
    ResourceIdInvalid(String),
}

impl GateError {
    /// Create a region error naming the missing variable
    pub fn region_not_configured(variable: &str) -> Self {
        Self::RegionNotConfigured(format!(
            "environment variable '{}' is not set or empty",
            variable
        ))
    }

    /// Create a table error naming the missing variable
    pub fn table_not_configured(variable: &str) -> Self {
        Self::TableNotConfigured(format!(
            "environment variable '{}' is not set or empty",
            variable
        ))
    }

    pub fn body_missing() -> Self {
        Self::BodyMissing("request property 'body' is not set".to_string())
    }

    pub fn body_not_json(msg: impl Into<String>) -> Self {
        Self::BodyNotJson(msg.into())
    }

    /// Create a required-fields error listing the absent fields
    pub fn required_fields_missing<S: AsRef<str>>(missing: &[S]) -> Self {
        Self::RequiredFieldsMissing(format!(
            "request body is missing required properties: [{}]",
            missing
                .iter()
                .map(|field| format!("'{}'", field.as_ref()))
                .collect::<Vec<_>>()
                .join(", ")
        ))
    }

    pub fn resource_id_invalid(msg: impl Into<String>) -> Self {
        Self::ResourceIdInvalid(msg.into())
    }

    /// Stable name of the error kind, suitable for response bodies
    pub fn kind(&self) -> &'static str {
        match self {
            GateError::RegionNotConfigured(_) => "RegionNotConfigured",
            GateError::TableNotConfigured(_) => "TableNotConfigured",
            GateError::BodyMissing(_) => "BodyMissing",
            GateError::BodyNotJson(_) => "BodyNotJson",
            GateError::RequiredFieldsMissing(_) => "RequiredFieldsMissing",
            GateError::ResourceIdInvalid(_) => "ResourceIdInvalid",
        }
    }

    /// The human-readable message without the kind prefix
    pub fn message(&self) -> &str {
        match self {
            GateError::RegionNotConfigured(msg)
            | GateError::TableNotConfigured(msg)
            | GateError::BodyMissing(msg)
            | GateError::BodyNotJson(msg)
            | GateError::RequiredFieldsMissing(msg)
            | GateError::ResourceIdInvalid(msg) => msg,
        }
    }

    /// Check if this error comes from the deployment rather than the request
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            GateError::RegionNotConfigured(_) | GateError::TableNotConfigured(_)
        )
    }

    /// HTTP status the adapter should answer with
    pub fn status_code(&self) -> u16 {
        if self.is_configuration_error() {
            500
        } else {
            400
        }
    }
}

/// Result type for gate operations
pub type GateResult<T> = Result<T, GateError>;
