use anyhow::{Context, Result};
use clap::Parser;
use preflight::{
    ConfigSnapshot, EnvironmentValidator, GateError, RequestEnvelope, RequestGate,
    RequestValidatorConfig, StoreSettings, ValidatedRequest, Validator,
};
use serde::Serialize;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

#[derive(Parser, Clone, Debug)]
#[command(name = "preflight-cli")]
#[command(about = "Run the pre-flight validation gate against a request event")]
#[command(version)]
#[command(
    long_about = "Run the pre-flight validation gate against an API-Gateway style event.

Reads AWS_DEFAULT_REGION, DYNAMODB_TABLE and DYNAMODB_HOST from the environment,
then validates the event body and path parameters and prints the HTTP response
the handler would return.

Examples:
  # Update request that must carry text and checked fields
  preflight-cli --event event.json --require text --require checked

  # Create request without a path id
  preflight-cli --event create.json --require text --no-resource-id"
)]
pub struct Args {
    /// Path to the JSON event file
    #[arg(long)]
    pub event: PathBuf,

    /// Field the request body must contain (repeatable)
    #[arg(long = "require", value_name = "FIELD")]
    pub required: Vec<String>,

    /// Do not require an `id` path parameter
    #[arg(long, default_value = "false")]
    pub no_resource_id: bool,

    /// Enable debug logging
    #[arg(long, default_value = "false")]
    pub debug: bool,
}

impl Args {
    pub fn request_config(&self) -> RequestValidatorConfig {
        RequestValidatorConfig::default()
            .with_required_properties(self.required.iter().cloned())
            .with_resource_id(!self.no_resource_id)
    }
}

/// HTTP-shaped decision returned to the caller
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub status_code: u16,
    pub body: Value,
}

impl Response {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// Build the success response for a validated request
    pub fn ok(settings: &StoreSettings, request: &ValidatedRequest) -> Self {
        Self {
            status_code: 200,
            body: json!({
                "table": settings.table,
                "id": request.id,
                "item": request.body,
            }),
        }
    }

    /// Map a gate error onto its response
    pub fn from_error(err: &GateError) -> Self {
        Self {
            status_code: err.status_code(),
            body: json!({
                "error": err.kind(),
                "message": err.message(),
            }),
        }
    }
}

/// Read and parse an event file into a request envelope
pub fn load_event(path: &Path) -> Result<RequestEnvelope> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read event file: {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Event file is not a valid event: {}", path.display()))
}

/// Run the configuration checks, then the request gate
pub fn evaluate(
    config: &ConfigSnapshot,
    gate: &RequestGate,
    envelope: &RequestEnvelope,
) -> Response {
    let settings = match EnvironmentValidator::new().validate(config) {
        Ok(settings) => settings,
        Err(err) => {
            error!(kind = err.kind(), "Configuration invalid: {}", err.message());
            return Response::from_error(&err);
        }
    };

    debug!(
        region = %settings.region,
        table = %settings.table,
        endpoint = %settings.endpoint,
        local = settings.endpoint_is_local,
        "Resolved store settings"
    );

    match gate.validate(envelope) {
        Ok(request) => {
            info!(id = ?request.id, fields = request.body.len(), "Request accepted");
            Response::ok(&settings, &request)
        }
        Err(err) => {
            warn!(kind = err.kind(), "Request rejected: {}", err.message());
            Response::from_error(&err)
        }
    }
}

/// Entry point shared by the binary and tests
pub fn run(args: &Args, config: &ConfigSnapshot) -> Result<Response> {
    info!("Loading event from {}", args.event.display());
    let envelope = load_event(&args.event)?;
    let gate = RequestGate::with_config(args.request_config());

    Ok(evaluate(config, &gate, &envelope))
}
