use serde::Serialize;
use serde_json::Value;

use super::OnError;

/// Configuration values supplied on the command line
#[derive(Debug, Clone, Default, Serialize)]
pub struct CliOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_dir: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_error: Option<OnError>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<String>,
}

/// Serialize `input` and drop nulls and empty arrays so that unset CLI
/// values never shadow lower-priority layers
pub fn prune_empty<T: Serialize>(input: T) -> Value {
    let mut value = serde_json::to_value(input).unwrap_or(Value::Null);
    prune_empty_recursive(&mut value);
    value
}

fn prune_empty_recursive(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, v| match v {
                Value::Null => false,
                Value::Array(arr) => !arr.is_empty(),
                _ => true,
            });

            for (_, v) in map.iter_mut() {
                prune_empty_recursive(v);
            }
        }
        Value::Array(arr) => {
            for item in arr.iter_mut() {
                prune_empty_recursive(item);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_prune_removes_null_and_empty_arrays() {
        let pruned = prune_empty(json!({
            "input_dir": null,
            "sources": [],
            "nested": { "keep": [1], "drop": [] },
            "on_error": "skip"
        }));
        assert_eq!(
            pruned,
            json!({ "nested": { "keep": [1] }, "on_error": "skip" })
        );
    }

    #[test]
    fn test_default_overrides_are_empty() {
        assert_eq!(prune_empty(CliOverrides::default()), json!({}));
    }

    #[test]
    fn test_overrides_serialize_set_values() {
        let overrides = CliOverrides {
            input_dir: Some("lists".to_string()),
            on_error: Some(OnError::Skip),
            sources: vec!["fx".to_string()],
        };
        assert_eq!(
            prune_empty(&overrides),
            json!({ "input_dir": "lists", "on_error": "skip", "sources": ["fx"] })
        );
    }
}
