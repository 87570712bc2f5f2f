//! Deep null pruning for serialized state.

use serde_json::Value;

/// Rebuild a value with every null object entry dropped, at any depth.
///
/// Arrays keep their length and order (null elements stay; only mapping
/// keys are pruned), primitives come back as-is. Used to shrink
/// serialized state before storage or transmission.
pub fn prune_nulls(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k.clone(), prune_nulls(v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.iter().map(prune_nulls).collect()),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_keys_dropped_at_any_depth() {
        let input = json!({
            "keep": 1,
            "drop": null,
            "nested": {"also_drop": null, "inner": {"deep_drop": null, "deep_keep": "v"}},
        });

        let pruned = prune_nulls(&input);
        assert_eq!(
            pruned,
            json!({"keep": 1, "nested": {"inner": {"deep_keep": "v"}}})
        );
    }

    #[test]
    fn test_arrays_keep_shape() {
        let input = json!([1, null, {"drop": null, "keep": 2}]);
        let pruned = prune_nulls(&input);
        assert_eq!(pruned, json!([1, null, {"keep": 2}]));
    }

    #[test]
    fn test_primitives_unchanged() {
        for value in [json!(42), json!("text"), json!(true), json!(null)] {
            assert_eq!(prune_nulls(&value), value);
        }
    }
}
