//! # Preflight
//!
//! Validation gate that runs before a key-value store request handler.
//! Checks the deployment configuration once per cold start, then each
//! inbound request envelope, and reports failures as distinct [`GateError`]
//! kinds the HTTP adapter can map onto responses.

pub mod config;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use config::{ConfigSnapshot, StoreSettings};
pub use types::{Body, DecodedBody, PathParameters, RequestEnvelope, ValidatedRequest};

// Re-export validation functionality
pub use validation::{GateError, GateResult, Validator};
pub use validation::environment::{
    check_region, check_store_host, check_table, EnvironmentValidator,
};
pub use validation::request::{
    check_body_is_json, check_body_present, check_required_properties, check_resource_id,
    RequestGate, RequestValidatorConfig,
};
pub use validation::timestamp::{is_now, is_timestamp, Clock, FreshnessValidator, SystemClock};
