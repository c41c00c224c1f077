use preflight::config::{REGION_VAR, TABLE_VAR};
use preflight::{ConfigSnapshot, RequestEnvelope, RequestGate, RequestValidatorConfig};

pub const VALID_ID: &str = "7c9e6679-7425-40de-944b-e07fc1f90ae7";

pub const REQUIRED_FIELDS: [&str; 2] = ["text", "checked"];

/// Test utilities and common setup functions
pub struct TestHelper;

impl TestHelper {
    /// Configuration of a deployed function using the local store
    pub fn deployed_config() -> ConfigSnapshot {
        ConfigSnapshot::from_pairs([(REGION_VAR, "us-east-1"), (TABLE_VAR, "todos")])
    }

    /// Gate requiring the sample todo fields and an id
    pub fn todo_gate() -> RequestGate {
        RequestGate::with_config(
            RequestValidatorConfig::default().with_required_properties(REQUIRED_FIELDS),
        )
    }

    /// A well-formed update request
    pub fn http_event() -> RequestEnvelope {
        RequestEnvelope::new()
            .with_body("{\"text\": \"buy milk\", \"checked\": false}")
            .with_id(VALID_ID)
    }
}
