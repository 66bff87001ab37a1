//! Write-back channel for inline edits
//!
//! An editing surface reports `(path, new value)`. Because section merges
//! replace top-level keys wholesale, an edit deep inside `plans` must be
//! expressed as an override carrying the whole edited `plans` sequence.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

use crate::config::{SectionConfig, SectionKind};
use crate::field_path::{self, FieldPath};

/// Edit write-back errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EditError {
    /// Path does not start with a top-level key
    #[error("path '{0}' does not name a top-level field")]
    NoTopLevelKey(FieldPath),

    /// Path does not exist in the current merged configuration
    #[error("path '{0}' does not resolve in the current configuration")]
    Unresolved(FieldPath),
}

/// A single edit reported by the editing surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditRequest {
    pub path: FieldPath,
    pub value: Value,
}

impl EditRequest {
    pub fn new(path: FieldPath, value: impl Into<Value>) -> Self {
        Self {
            path,
            value: value.into(),
        }
    }
}

/// Produce the override that applies `edit` on top of `current_override`.
///
/// `config` must be the merge of the section defaults with `current_override`.
pub fn override_for_edit(
    config: &SectionConfig,
    current_override: &Value,
    edit: &EditRequest,
) -> Result<Value, EditError> {
    let key = edit
        .path
        .top_level_key()
        .ok_or_else(|| EditError::NoTopLevelKey(edit.path.clone()))?;

    if config.get(&edit.path).is_none() {
        return Err(EditError::Unresolved(edit.path.clone()));
    }

    let mut top = config.field(key).clone();
    let rest = edit.path.tail();
    if rest.is_root() {
        top = edit.value.clone();
    } else {
        let slot = field_path::resolve_mut(&mut top, &rest)
            .ok_or_else(|| EditError::Unresolved(edit.path.clone()))?;
        *slot = edit.value.clone();
    }

    let mut overrides = match current_override {
        Value::Object(map) => map.clone(),
        _ => Map::new(),
    };
    overrides.insert(key.to_string(), top);
    debug!(path = %edit.path, key, "built override for edit");

    Ok(Value::Object(overrides))
}

/// Apply edits in order, re-merging after each one. Returns the final override.
pub fn apply_edits(
    kind: SectionKind,
    current_override: &Value,
    edits: &[EditRequest],
) -> Result<Value, EditError> {
    let mut overrides = current_override.clone();
    for edit in edits {
        let config = SectionConfig::merge(kind, &overrides);
        overrides = override_for_edit(&config, &overrides, edit)?;
    }
    Ok(overrides)
}
