//! Path identifier check

use crate::types::{PathParameters, RequestEnvelope};
use crate::validation::{GateError, GateResult, Validator};
use regex::Regex;
use std::sync::OnceLock;

/// Path parameter holding the resource identifier
pub const ID_PARAMETER: &str = "id";

/// Hyphenated UUID or a bare 32-character hex token
const ID_PATTERN: &str = r"^(?:[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}|[0-9a-fA-F]{32})$";

fn id_regex() -> &'static Regex {
    static ID_REGEX: OnceLock<Regex> = OnceLock::new();
    ID_REGEX.get_or_init(|| Regex::new(ID_PATTERN).expect("identifier pattern is valid"))
}

/// Check whether a string has the identifier format
pub fn is_valid_id(id: &str) -> bool {
    id_regex().is_match(id)
}

/// Return the `id` path parameter, failing when it is absent or malformed
pub fn check_resource_id(path_parameters: Option<&PathParameters>) -> GateResult<&str> {
    let invalid = || {
        GateError::resource_id_invalid(format!(
            "request property '{}' not in a valid format",
            ID_PARAMETER
        ))
    };

    let id = path_parameters
        .and_then(|params| params.get(ID_PARAMETER))
        .ok_or_else(invalid)?;

    if !is_valid_id(id) {
        return Err(invalid());
    }

    Ok(id.as_str())
}

/// Extracts and checks the `id` path parameter of an envelope
#[derive(Debug, Default, Clone)]
pub struct ResourceIdValidator;

impl ResourceIdValidator {
    pub fn new() -> Self {
        Self
    }
}

impl Validator<RequestEnvelope> for ResourceIdValidator {
    type Output = String;
    type Error = GateError;

    fn validate(&self, envelope: &RequestEnvelope) -> GateResult<String> {
        check_resource_id(envelope.path_parameters.as_ref()).map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(id: &str) -> PathParameters {
        PathParameters::from([(ID_PARAMETER.to_string(), id.to_string())])
    }

    #[test]
    fn test_id_pattern_compiles() {
        assert!(Regex::new(ID_PATTERN).is_ok());
        assert!(is_valid_id("7c9e6679-7425-40de-944b-e07fc1f90ae7"));
    }

    #[test]
    fn test_missing_path_parameters_fail() {
        let mut envelope =
            RequestEnvelope::new().with_id("7c9e6679-7425-40de-944b-e07fc1f90ae7");
        envelope.take_path_parameters();

        let result = check_resource_id(envelope.path_parameters.as_ref());
        assert!(matches!(result, Err(GateError::ResourceIdInvalid(_))));
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("'id' not in a valid format"));
    }

    #[test]
    fn test_missing_id_key_fails() {
        let other = PathParameters::from([("name".to_string(), "x".to_string())]);
        assert!(matches!(
            check_resource_id(Some(&other)),
            Err(GateError::ResourceIdInvalid(_))
        ));
    }

    #[test]
    fn test_malformed_ids_fail() {
        let malformed = vec![
            "",
            "123",
            "not-a-uuid",
            "7c9e6679-7425-40de-944b-e07fc1f90ae",
            "7c9e6679-7425-40de-944b-e07fc1f90ae7-",
            "7c9e6679742540de944be07fc1f90ae",
            "zc9e6679-7425-40de-944b-e07fc1f90ae7",
            " 7c9e6679-7425-40de-944b-e07fc1f90ae7",
        ];

        for id in malformed {
            let p = params(id);
            let result = check_resource_id(Some(&p));
            assert!(
                matches!(result, Err(GateError::ResourceIdInvalid(_))),
                "Should fail for: {:?}",
                id
            );
        }
    }

    #[test]
    fn test_well_formed_ids_returned_unchanged() {
        let well_formed = vec![
            "7c9e6679-7425-40de-944b-e07fc1f90ae7",
            "7C9E6679-7425-40DE-944B-E07FC1F90AE7",
            "7c9e6679742540de944be07fc1f90ae7",
        ];

        for id in well_formed {
            let parameters = params(id);
            assert_eq!(check_resource_id(Some(&parameters)), Ok(id));
        }
    }

    #[test]
    fn test_validator_reads_envelope_parameters() {
        let validator = ResourceIdValidator::new();

        let envelope = RequestEnvelope::new().with_id("7c9e6679742540de944be07fc1f90ae7");
        assert_eq!(
            validator.validate(&envelope),
            Ok("7c9e6679742540de944be07fc1f90ae7".to_string())
        );

        assert!(validator.validate(&RequestEnvelope::new()).is_err());
    }
}
