use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Decoded request body: field name to JSON value
pub type DecodedBody = Map<String, Value>;

/// Parameters extracted from the request path, e.g. `{"id": "..."}`
pub type PathParameters = HashMap<String, String>;

/// Raw request body as delivered by the HTTP adapter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Body {
    Text(String),
    Bytes(Vec<u8>),
}

impl Body {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Body::Text(text) => text.as_bytes(),
            Body::Bytes(bytes) => bytes,
        }
    }
}

impl From<&str> for Body {
    fn from(text: &str) -> Self {
        Body::Text(text.to_string())
    }
}

impl From<String> for Body {
    fn from(text: String) -> Self {
        Body::Text(text)
    }
}

impl From<Vec<u8>> for Body {
    fn from(bytes: Vec<u8>) -> Self {
        Body::Bytes(bytes)
    }
}

/// Inbound request as seen by the gate: body plus path parameters
///
/// Deserializes from an API-Gateway proxy event; every other event field
/// is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestEnvelope {
    #[serde(default)]
    pub body: Option<Body>,
    #[serde(default)]
    pub path_parameters: Option<PathParameters>,
}

impl RequestEnvelope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body(mut self, body: impl Into<Body>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Set the `id` path parameter
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.path_parameters
            .get_or_insert_with(HashMap::new)
            .insert("id".to_string(), id.into());
        self
    }

    /// Remove and return the body
    pub fn take_body(&mut self) -> Option<Body> {
        self.body.take()
    }

    /// Remove and return the path parameters
    pub fn take_path_parameters(&mut self) -> Option<PathParameters> {
        self.path_parameters.take()
    }
}

/// Output of a request that passed every gate check
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidatedRequest {
    /// Resource identifier, `None` when the gate does not require one
    pub id: Option<String>,
    pub body: DecodedBody,
}
