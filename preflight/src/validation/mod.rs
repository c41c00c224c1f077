//! Validation gate for store requests
//!
//! Independent, fail-fast checks over the configuration snapshot and the
//! inbound request envelope, plus timestamp predicates for business rules.

pub mod environment;
pub mod errors;
pub mod request;
pub mod timestamp;
pub mod traits;

// Re-export main validation types
pub use errors::{GateError, GateResult};
pub use traits::Validator;
