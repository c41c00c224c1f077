//! Configuration snapshot captured from the process environment

use std::collections::HashMap;

/// Variable holding the cloud region
pub const REGION_VAR: &str = "AWS_DEFAULT_REGION";

/// Variable holding the backing table name
pub const TABLE_VAR: &str = "DYNAMODB_TABLE";

/// Optional variable overriding the store endpoint
pub const STORE_HOST_VAR: &str = "DYNAMODB_HOST";

/// Endpoint used when no override is configured
pub const LOCAL_STORE_HOST: &str = "http://localhost:8000";

/// Immutable view of the process-level settings the gate needs
///
/// Captured once at process start and passed by reference to the checks,
/// so nothing downstream reads the environment directly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigSnapshot {
    values: HashMap<String, String>,
}

impl ConfigSnapshot {
    /// Capture the current process environment
    ///
    /// Variables whose name or value is not valid UTF-8 are skipped.
    pub fn from_env() -> Self {
        Self::from_pairs(std::env::vars_os().filter_map(|(name, value)| {
            Some((name.into_string().ok()?, value.into_string().ok()?))
        }))
    }

    /// Build a snapshot from explicit name/value pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Look up a value, treating empty values as unset
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .get(name)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Return a copy of this snapshot with one value replaced
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Return a copy of this snapshot with one value removed
    pub fn without(mut self, name: &str) -> Self {
        self.values.remove(name);
        self
    }
}

/// Resolved store settings handed to the key-value store client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreSettings {
    pub region: String,
    pub table: String,
    pub endpoint: String,
    /// True when `endpoint` is the local default rather than an override
    pub endpoint_is_local: bool,
}
