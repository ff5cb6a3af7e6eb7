//! Structural logging for API response payloads.

use console::style;
use serde_json::Value;
use tracing::debug;

/// Collects every leaf of a JSON value as a dotted path alongside its value.
///
/// Only objects are traversed; arrays, scalars, and null are leaves. A
/// non-object root yields a single entry with an empty path.
pub fn leaf_entries(data: &Value) -> Vec<(String, Value)> {
    let mut entries = Vec::new();
    collect_leaves(data, String::new(), &mut entries);
    entries
}

fn collect_leaves(value: &Value, path: String, entries: &mut Vec<(String, Value)>) {
    match value {
        Value::Object(map) => {
            for (key, nested) in map {
                let new_path = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{path}.{key}")
                };
                collect_leaves(nested, new_path, entries);
            }
        }
        leaf => entries.push((path, leaf.clone())),
    }
}

/// Logs the serialized payload, its top-level keys, and every leaf path.
///
/// Purely observational: no shape is enforced and no error is ever produced.
pub fn analyze_structure(data: &Value) {
    println!("{}", style("Analyzing API response structure:").blue());
    let serialized = serde_json::to_string_pretty(data).unwrap_or_else(|_| data.to_string());
    println!("{}", style(serialized).green());

    if let Value::Object(map) = data {
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        println!(
            "{} {}",
            style("Top-level keys:").blue(),
            style(keys.join(", ")).yellow()
        );
    }

    for (path, value) in leaf_entries(data) {
        println!("{}", style(format!("Key: {path}, Value: {value}")).blue());
        debug!(%path, %value, "Leaf entry");
    }
}

/// Logs a failure with its context tag to the error stream.
pub fn log_error(context: &str, error: &anyhow::Error) {
    eprintln!("{} {error}", style(format!("{context}:")).red());
    tracing::error!(error = %error, "{context}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use serde_json::json;

    #[test]
    fn test_nested_object_yields_dotted_leaf_path() {
        let data = json!({"a": {"b": 1}});
        let entries = leaf_entries(&data);
        assert_eq!(entries, vec![("a.b".to_string(), json!(1))]);
    }

    #[test]
    fn test_arrays_are_single_leaves() {
        let data = json!({"x": 5, "y": [1, 2, 3]});
        let entries = leaf_entries(&data);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], ("x".to_string(), json!(5)));
        assert_eq!(entries[1], ("y".to_string(), json!([1, 2, 3])));
    }

    #[test]
    fn test_null_is_a_leaf() {
        let data = json!({"bpi": {"EUR": null}});
        let entries = leaf_entries(&data);
        assert_eq!(entries, vec![("bpi.EUR".to_string(), Value::Null)]);
    }

    #[test]
    fn test_deeply_nested_index_payload() {
        let data = json!({
            "time": {"updated": "May 30, 2024 12:00:00 UTC"},
            "bpi": {"USD": {"code": "USD", "rate": "30,000.0000"}}
        });
        let entries = leaf_entries(&data);
        let paths: Vec<&str> = entries.iter().map(|(p, _)| p.as_str()).collect();
        assert_eq!(paths, vec!["time.updated", "bpi.USD.code", "bpi.USD.rate"]);
    }

    #[test]
    fn test_non_object_root_yields_single_empty_path_leaf() {
        let entries = leaf_entries(&json!([1, 2, 3]));
        assert_eq!(entries, vec![(String::new(), json!([1, 2, 3]))]);
    }

    #[test]
    fn test_analyze_structure_accepts_any_shape() {
        analyze_structure(&json!({"invalid": "structure"}));
        analyze_structure(&json!("just a string"));
        analyze_structure(&Value::Null);
    }

    #[test]
    fn test_log_error_does_not_consume_or_panic() {
        let err = anyhow!("Network Error");
        log_error("Error fetching data from API", &err);
        log_error("", &err.context("wrapped"));
    }
}
