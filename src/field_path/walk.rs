//! Leaf enumeration over a configuration tree

use serde_json::Value;
use tracing::debug;

use super::{is_addressable, FieldPath};

/// Every leaf of `value` paired with its path, in document order.
///
/// Scalars are leaves. Empty records and empty sequences are reported as
/// leaves too so that they stay addressable. Record keys that cannot be
/// addressed (see [`is_addressable`]) are skipped with their whole subtree,
/// so every returned path is distinct and parses back to itself.
pub fn leaves(value: &Value) -> Vec<(FieldPath, &Value)> {
    let mut out = Vec::new();
    walk(value, FieldPath::root(), &mut out);
    out
}

fn walk<'a>(value: &'a Value, path: FieldPath, out: &mut Vec<(FieldPath, &'a Value)>) {
    match value {
        Value::Object(map) if !map.is_empty() => {
            for (key, child) in map {
                if !is_addressable(key) {
                    debug!(parent = %path, key = %key, "skipping unaddressable key");
                    continue;
                }
                walk(child, path.key(key.as_str()), out);
            }
        }
        Value::Array(items) if !items.is_empty() => {
            for (i, child) in items.iter().enumerate() {
                walk(child, path.index(i), out);
            }
        }
        _ => out.push((path, value)),
    }
}
