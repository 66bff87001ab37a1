//! Section kinds and the merged, read-only section configuration

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use super::defaults::{HeroDefaults, PricingDefaults};
use super::merge::shallow_merge;
use crate::field_path::{self, FieldPath};

/// The page sections this crate knows how to render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Hero,
    Pricing,
}

impl SectionKind {
    pub const ALL: [SectionKind; 2] = [SectionKind::Hero, SectionKind::Pricing];

    /// Table name in override files and element id in markup
    pub fn key(&self) -> &'static str {
        match self {
            SectionKind::Hero => "hero",
            SectionKind::Pricing => "pricing",
        }
    }

    /// Built-in defaults for this section as a JSON tree
    pub fn default_value(&self) -> Value {
        match self {
            SectionKind::Hero => HeroDefaults::default().to_value(),
            SectionKind::Pricing => PricingDefaults::default().to_value(),
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

static NULL: Value = Value::Null;

/// Fully-populated configuration for one section.
///
/// Immutable once merged; edits go through a new override and a re-merge.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SectionConfig {
    value: Value,
}

impl SectionConfig {
    /// Merge an override onto a fully-populated default
    pub fn from_parts(defaults: Value, overrides: Value) -> Self {
        Self {
            value: shallow_merge(defaults, overrides),
        }
    }

    /// Merge an override onto the built-in defaults for `kind`
    pub fn merge(kind: SectionKind, overrides: &Value) -> Self {
        Self::from_parts(kind.default_value(), overrides.clone())
    }

    /// Built-in defaults for `kind` with no override
    pub fn defaults(kind: SectionKind) -> Self {
        Self {
            value: kind.default_value(),
        }
    }

    pub(crate) fn from_value(value: Value) -> Self {
        Self { value }
    }

    pub fn as_value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }

    /// Node at `path`, if it exists in this configuration
    pub fn get(&self, path: &FieldPath) -> Option<&Value> {
        field_path::resolve(&self.value, path)
    }

    /// Top-level field, or `Null` when absent
    pub fn field(&self, key: &str) -> &Value {
        self.value.get(key).unwrap_or(&NULL)
    }

    /// Every leaf with its path
    pub fn leaves(&self) -> Vec<(FieldPath, &Value)> {
        field_path::leaves(&self.value)
    }

    pub fn top_level_keys(&self) -> Vec<&str> {
        self.value
            .as_object()
            .map(|map| map.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }
}
