//! Layered configuration: built-in defaults, then an optional JSON data
//! file, then individually supplied overrides.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::ConfigError;
use crate::models::proposal::{Payment, ProposalConfig};
use crate::models::variant::Variant;

/// Scalar overrides, usually from command-line flags.
///
/// `None` means "not supplied". `Some(String::new())` is a real override
/// that sets the field to the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub client_name: Option<String>,
    pub client_address: Option<String>,
    pub proposal_date: Option<String>,
    pub project_total: Option<String>,
    pub output_path: Option<PathBuf>,
}

impl ConfigOverrides {
    pub fn is_empty(&self) -> bool {
        *self == ConfigOverrides::default()
    }

    /// Overwrite only the fields that were supplied.
    pub fn apply(&self, config: &mut ProposalConfig) {
        apply_text("client_name", &self.client_name, &mut config.client_name);
        apply_text("client_address", &self.client_address, &mut config.client_address);
        apply_text("proposal_date", &self.proposal_date, &mut config.proposal_date);
        apply_text("project_total", &self.project_total, &mut config.project_total);
        if let Some(path) = &self.output_path {
            tracing::debug!(field = "output_path", path = %path.display(), "override applied");
            config.output_path = Some(path.clone());
        }
    }
}

fn apply_text(field: &str, value: &Option<String>, target: &mut String) {
    if let Some(value) = value {
        tracing::debug!(field, "override applied");
        target.clone_from(value);
    }
}

/// Resolve one [`ProposalConfig`]: defaults for `variant`, updated by the
/// data file (if any), updated by `overrides`.
pub fn resolve(
    variant: Variant,
    data_file: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<ProposalConfig, ConfigError> {
    let mut config = ProposalConfig::defaults(variant);

    if let Some(path) = data_file {
        let data = load_data_file(path)?;
        apply_data(&mut config, data)?;
        tracing::info!(path = %path.display(), "proposal data loaded");
    }

    if overrides.is_empty() {
        tracing::debug!("no field overrides supplied");
    } else {
        overrides.apply(&mut config);
    }
    Ok(config)
}

/// Read a data file and return its top-level JSON object.
pub fn load_data_file(path: &Path) -> Result<Map<String, Value>, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::load(path, e))?;
    let json: Value = serde_json::from_str(&contents).map_err(|e| ConfigError::load(path, e))?;

    match json {
        Value::Object(map) => Ok(map),
        other => Err(ConfigError::load(
            path,
            format!("expected a JSON object at the top level, found {}", kind(&other)),
        )),
    }
}

/// Apply recognized keys of a data object onto `config`.
///
/// Unknown keys are ignored. Each recognized key is coerced on its own so
/// a failure names the offending field.
pub fn apply_data(config: &mut ProposalConfig, data: Map<String, Value>) -> Result<(), ConfigError> {
    for (key, value) in data {
        match key.as_str() {
            "client_name" => config.client_name = coerce(&key, value)?,
            "client_address" => config.client_address = coerce(&key, value)?,
            "proposal_date" => config.proposal_date = coerce(&key, value)?,
            "project_total" => config.project_total = coerce(&key, value)?,
            "scope_items" => config.scope_items = coerce(&key, value)?,
            "payments" => {
                let entries: Vec<PaymentEntry> = coerce(&key, value)?;
                config.payments = entries.into_iter().map(Payment::from).collect();
            }
            "output_path" => config.output_path = coerce(&key, value)?,
            _ => tracing::debug!(key = %key, "ignoring unrecognized key in proposal data"),
        }
    }
    Ok(())
}

fn coerce<T: DeserializeOwned>(field: &str, value: Value) -> Result<T, ConfigError> {
    serde_json::from_value(value).map_err(|e| ConfigError::shape(field, e))
}

/// A payment as written in a data file: `["desc", "amount"]` or
/// `{"description": "desc", "amount": "amount"}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum PaymentEntry {
    Pair(String, String),
    Named { description: String, amount: String },
}

impl From<PaymentEntry> for Payment {
    fn from(entry: PaymentEntry) -> Self {
        match entry {
            PaymentEntry::Pair(description, amount)
            | PaymentEntry::Named {
                description,
                amount,
            } => Payment {
                description,
                amount,
            },
        }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
