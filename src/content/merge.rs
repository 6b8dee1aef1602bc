// src/content/merge.rs

use serde_json::Value;

/// Layers CMS content over built-in defaults of the same shape.
///
/// For each key in `overrides`:
/// - `null` is treated as absent and the default is kept
/// - an object over an object is merged recursively
/// - anything else (arrays included) replaces the default wholesale
///
/// Neither input is modified.
pub fn deep_merge(base: &Value, overrides: &Value) -> Value {
    match (base, overrides) {
        (_, Value::Null) => base.clone(),
        (Value::Object(base_map), Value::Object(override_map)) => {
            let mut merged = base_map.clone();
            for (key, value) in override_map {
                let next = match (merged.get(key), value) {
                    (_, Value::Null) => continue,
                    (Some(existing @ Value::Object(_)), Value::Object(_)) => {
                        deep_merge(existing, value)
                    }
                    _ => value.clone(),
                };
                merged.insert(key.clone(), next);
            }
            Value::Object(merged)
        }
        _ => overrides.clone(),
    }
}
