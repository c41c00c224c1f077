//! Request envelope validation components
//!
//! Each check runs on its own and fails fast. [`RequestGate`] chains them in
//! the fixed order body presence, JSON decoding, required properties and
//! resource id.

mod body_validator;
mod gate;
mod property_validator;
mod resource_id_validator;

pub use body_validator::{check_body_is_json, check_body_present, JsonBodyValidator};
pub use gate::{RequestGate, RequestValidatorConfig};
pub use property_validator::{check_required_properties, RequiredPropertiesValidator};
pub use resource_id_validator::{check_resource_id, is_valid_id, ResourceIdValidator, ID_PARAMETER};
