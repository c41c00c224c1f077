//! Deployment configuration checks

use crate::config::{
    ConfigSnapshot, StoreSettings, LOCAL_STORE_HOST, REGION_VAR, STORE_HOST_VAR, TABLE_VAR,
};
use crate::validation::{GateError, GateResult, Validator};

/// Return the configured region, failing when it is unset or empty
pub fn check_region(config: &ConfigSnapshot) -> GateResult<&str> {
    config
        .get(REGION_VAR)
        .ok_or_else(|| GateError::region_not_configured(REGION_VAR))
}

/// Return the configured table name, failing when it is unset or empty
pub fn check_table(config: &ConfigSnapshot) -> GateResult<&str> {
    config
        .get(TABLE_VAR)
        .ok_or_else(|| GateError::table_not_configured(TABLE_VAR))
}

/// Return the store endpoint override, or the local endpoint when none is set
pub fn check_store_host(config: &ConfigSnapshot) -> &str {
    config.get(STORE_HOST_VAR).unwrap_or(LOCAL_STORE_HOST)
}

/// Validates the whole deployment configuration in one pass
///
/// Runs region, then table, then endpoint resolution. Meant to be called
/// once per cold start; the resulting settings are reused for every request.
#[derive(Debug, Default, Clone)]
pub struct EnvironmentValidator;

impl EnvironmentValidator {
    /// Create a new environment validator
    pub fn new() -> Self {
        Self
    }
}

impl Validator<ConfigSnapshot> for EnvironmentValidator {
    type Output = StoreSettings;
    type Error = GateError;

    fn validate(&self, config: &ConfigSnapshot) -> GateResult<StoreSettings> {
        let region = check_region(config)?;
        let table = check_table(config)?;
        let endpoint = check_store_host(config);

        Ok(StoreSettings {
            region: region.to_string(),
            table: table.to_string(),
            endpoint: endpoint.to_string(),
            endpoint_is_local: config.get(STORE_HOST_VAR).is_none(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_config() -> ConfigSnapshot {
        ConfigSnapshot::from_pairs([(REGION_VAR, "us-east-1"), (TABLE_VAR, "todos")])
    }

    #[test]
    fn test_region_returned_when_set() {
        assert_eq!(check_region(&create_test_config()), Ok("us-east-1"));
    }

    #[test]
    fn test_missing_region_fails() {
        let config = ConfigSnapshot::default();

        let result = check_region(&config);
        assert!(matches!(result, Err(GateError::RegionNotConfigured(_))));
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("'AWS_DEFAULT_REGION'"));
    }

    #[test]
    fn test_empty_region_fails() {
        let config = create_test_config().with(REGION_VAR, "");
        assert!(matches!(
            check_region(&config),
            Err(GateError::RegionNotConfigured(_))
        ));
    }

    #[test]
    fn test_missing_table_fails() {
        let config = create_test_config().without(TABLE_VAR);

        let result = check_table(&config);
        assert!(matches!(result, Err(GateError::TableNotConfigured(_))));
        assert!(result.unwrap_err().to_string().contains("'DYNAMODB_TABLE'"));
    }

    #[test]
    fn test_table_check_independent_of_region() {
        let config = ConfigSnapshot::from_pairs([(TABLE_VAR, "todos")]);
        assert_eq!(check_table(&config), Ok("todos"));
    }

    #[test]
    fn test_remote_host_returned_when_override_set() {
        let config = create_test_config().with(STORE_HOST_VAR, "some remote host");
        let host = check_store_host(&config);

        assert_eq!(host, "some remote host");
        assert_ne!(host, LOCAL_STORE_HOST);
    }

    #[test]
    fn test_local_host_returned_when_override_unset() {
        assert_eq!(check_store_host(&create_test_config()), LOCAL_STORE_HOST);

        let blank = create_test_config().with(STORE_HOST_VAR, "");
        assert_eq!(check_store_host(&blank), LOCAL_STORE_HOST);
    }

    #[test]
    fn test_whitespace_values_are_not_empty() {
        let config = ConfigSnapshot::from_pairs([(REGION_VAR, " "), (TABLE_VAR, " ")])
            .with(STORE_HOST_VAR, " ");

        assert_eq!(check_region(&config), Ok(" "));
        assert_eq!(check_table(&config), Ok(" "));
        assert_eq!(check_store_host(&config), " ");
    }

    #[test]
    fn test_validator_resolves_settings() {
        let settings = EnvironmentValidator::new()
            .validate(&create_test_config())
            .unwrap();

        assert_eq!(
            settings,
            StoreSettings {
                region: "us-east-1".to_string(),
                table: "todos".to_string(),
                endpoint: LOCAL_STORE_HOST.to_string(),
                endpoint_is_local: true,
            }
        );
    }

    #[test]
    fn test_validator_reports_region_before_table() {
        let result = EnvironmentValidator::new().validate(&ConfigSnapshot::default());
        assert!(matches!(result, Err(GateError::RegionNotConfigured(_))));
    }

    #[test]
    fn test_validator_with_remote_endpoint() {
        let config = create_test_config()
            .with(STORE_HOST_VAR, "https://dynamodb.us-east-1.amazonaws.com");
        let settings = EnvironmentValidator::new().validate(&config).unwrap();

        assert_eq!(settings.endpoint, "https://dynamodb.us-east-1.amazonaws.com");
        assert!(!settings.endpoint_is_local);
    }
}
