//! Effective section configuration with full provenance
//!
//! The effective config captures the merged section configuration plus
//! where each top-level value came from, so a rendered value can be traced
//! back to the layer that supplied it.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

use super::merge::{merge_layers, shallow_merge};
use super::section::{SectionConfig, SectionKind};

/// Origin of a configuration layer
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ConfigOrigin {
    Builtin,
    File,
    Cli,
}

/// A contributing layer with provenance
#[derive(Debug, Clone, Serialize)]
pub struct ConfigSource {
    /// Origin of this source
    pub origin: ConfigOrigin,

    /// File path (None for builtin/cli)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// SHA-256 digest of raw file bytes (None for builtin/cli)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digest: Option<String>,
}

/// Merged section configuration with provenance
#[derive(Debug, Clone, Serialize)]
pub struct EffectiveConfig {
    /// Which section this configures
    pub section: SectionKind,

    /// When this config was computed
    pub created_at: DateTime<Utc>,

    /// The merged configuration
    pub config: SectionConfig,

    /// Contributing sources in precedence order
    pub sources: Vec<ConfigSource>,

    /// Top-level key -> layer that supplied its effective value
    pub origins: BTreeMap<String, ConfigOrigin>,

    /// File and CLI layers combined; the partial override that was merged
    #[serde(rename = "override")]
    overrides: Value,
}

impl EffectiveConfig {
    /// Build effective config from layers
    pub fn build(
        section: SectionKind,
        overrides_file: Option<&Path>,
        cli_overrides: Option<Value>,
    ) -> Result<Self, ConfigError> {
        let mut layers = Vec::new();
        let mut sources = Vec::new();

        // Layer 1: Built-in defaults
        layers.push((ConfigOrigin::Builtin, section.default_value()));
        sources.push(ConfigSource {
            origin: ConfigOrigin::Builtin,
            path: None,
            digest: None,
        });

        // Layer 2: Overrides file, section table only
        if let Some(path) = overrides_file {
            let (document, digest) = load_overrides_file(path)?;
            let table = document.get(section.key()).cloned().unwrap_or(Value::Null);
            debug!(section = %section, path = %path.display(), "loaded overrides file");
            layers.push((ConfigOrigin::File, table));
            sources.push(ConfigSource {
                origin: ConfigOrigin::File,
                path: Some(path.to_string_lossy().to_string()),
                digest: Some(digest),
            });
        }

        // Layer 3: CLI overrides
        if let Some(cli) = cli_overrides {
            layers.push((ConfigOrigin::Cli, cli));
            sources.push(ConfigSource {
                origin: ConfigOrigin::Cli,
                path: None,
                digest: None,
            });
        }

        let mut origins = BTreeMap::new();
        for (origin, layer) in &layers {
            if let Value::Object(map) = layer {
                for key in map.keys() {
                    origins.insert(key.clone(), *origin);
                }
            }
        }

        let overrides = layers
            .iter()
            .skip(1)
            .map(|(_, layer)| layer.clone())
            .fold(Value::Object(Map::new()), shallow_merge);

        let merged = merge_layers(layers.into_iter().map(|(_, layer)| layer).collect());
        debug!(section = %section, keys = origins.len(), "merged section configuration");

        Ok(Self {
            section,
            created_at: Utc::now(),
            config: SectionConfig::from_value(merged),
            sources,
            origins,
            overrides,
        })
    }

    /// Layer that supplied the value under `key`
    pub fn origin_of(&self, key: &str) -> Option<ConfigOrigin> {
        self.origins.get(key).copied()
    }

    /// The combined partial override (file + CLI)
    pub fn override_value(&self) -> &Value {
        &self.overrides
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Load an overrides document (TOML, or JSON for `.json` files) and its digest
pub fn load_overrides_file(path: &Path) -> Result<(Value, String), ConfigError> {
    let bytes = fs::read(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    let digest = hex::encode(hasher.finalize());

    let contents = String::from_utf8(bytes)
        .map_err(|e| ConfigError::ParseError(format!("Invalid UTF-8: {}", e)))?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let value = if is_json {
        serde_json::from_str(&contents)
            .map_err(|e| ConfigError::ParseError(format!("JSON parse error: {}", e)))?
    } else {
        let toml_value: toml::Value = toml::from_str(&contents)
            .map_err(|e| ConfigError::ParseError(format!("TOML parse error: {}", e)))?;
        toml_to_json(toml_value)
    };

    Ok((value, digest))
}

/// Convert TOML Value to JSON Value
fn toml_to_json(toml: toml::Value) -> Value {
    match toml {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::Number(i.into()),
        toml::Value::Float(f) => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(arr) => Value::Array(arr.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => {
            let map: Map<String, Value> = table
                .into_iter()
                .map(|(k, v)| (k, toml_to_json(v)))
                .collect();
            Value::Object(map)
        }
    }
}

/// Parse `key=value` CLI pairs into a top-level override object.
///
/// Values are parsed as JSON when possible, otherwise taken as strings.
pub fn parse_cli_overrides(pairs: &[String]) -> Result<Value, ConfigError> {
    let mut map = Map::new();
    for pair in pairs {
        let (key, raw) = pair
            .split_once('=')
            .ok_or_else(|| ConfigError::ParseError(format!("expected key=value, got: {}", pair)))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(ConfigError::ParseError(format!("empty key in: {}", pair)));
        }
        let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
        map.insert(key.to_string(), value);
    }
    Ok(Value::Object(map))
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}
