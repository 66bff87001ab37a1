//! Configuration merge logic
//!
//! Section overrides are shallow:
//! - Top-level keys: overlay REPLACES the base value wholesale
//! - Nested records and sequences are never spliced
//! - Keys only present in the overlay are carried through

use serde_json::Value;

/// Shallow merge an override onto a base configuration.
///
/// Merge semantics:
/// - Overlay object: each of its top-level keys replaces the base key entirely
/// - Overlay not an object (`null`, scalar, array): treated as an empty override
/// - Base not an object: the overlay object is returned as-is
pub fn shallow_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut base_map), Value::Object(overlay_map)) => {
            for (key, overlay_value) in overlay_map {
                base_map.insert(key, overlay_value);
            }
            Value::Object(base_map)
        }

        (_, overlay @ Value::Object(_)) => overlay,

        (base, _) => base,
    }
}

/// Merge multiple layers in order (first is base, last has highest precedence)
pub fn merge_layers(layers: Vec<Value>) -> Value {
    layers.into_iter().fold(Value::Null, shallow_merge)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_override() {
        let base = json!({"title": "Build the Future"});
        let overlay = json!({"title": "Ship It"});
        let result = shallow_merge(base, overlay);
        assert_eq!(result["title"], "Ship It");
    }

    #[test]
    fn test_nested_record_replaced_not_merged() {
        let base = json!({
            "cta": {
                "text": "Start",
                "href": "/signup"
            }
        });
        let overlay = json!({
            "cta": {
                "text": "Go"
            }
        });
        let result = shallow_merge(base, overlay);

        assert_eq!(result["cta"]["text"], "Go");
        // No deep splice: href is gone with the replaced record
        assert!(result["cta"].get("href").is_none());
    }

    #[test]
    fn test_array_replace() {
        let base = json!({
            "features": ["A", "B", "C"]
        });
        let overlay = json!({
            "features": ["X"]
        });
        let result = shallow_merge(base, overlay);

        let features = result["features"].as_array().unwrap();
        assert_eq!(features.len(), 1);
        assert_eq!(features[0], "X");
    }

    #[test]
    fn test_extra_key_carried_through() {
        let base = json!({"a": 1});
        let overlay = json!({"b": 2});
        let result = shallow_merge(base, overlay);

        assert_eq!(result["a"], 1);
        assert_eq!(result["b"], 2);
    }

    #[test]
    fn test_null_overlay_is_empty_override() {
        let base = json!({"value": 100});
        let result = shallow_merge(base.clone(), Value::Null);
        assert_eq!(result, base);
    }

    #[test]
    fn test_empty_overlay_is_identity() {
        let base = json!({"title": "x", "stats": [{"label": "a", "value": "1"}]});
        assert_eq!(shallow_merge(base.clone(), json!({})), base);
    }

    #[test]
    fn test_explicit_null_key_replaces() {
        let base = json!({"badgeText": "Now in Beta"});
        let result = shallow_merge(base, json!({"badgeText": null}));
        assert!(result["badgeText"].is_null());
    }

    #[test]
    fn test_merge_layers() {
        let builtin = json!({
            "title": "Default",
            "subtitle": "Default subtitle"
        });
        let file = json!({
            "title": "From file"
        });
        let cli = json!({
            "subtitle": "From cli"
        });

        let result = merge_layers(vec![builtin, file, cli]);

        assert_eq!(result["title"], "From file");
        assert_eq!(result["subtitle"], "From cli");
    }
}
