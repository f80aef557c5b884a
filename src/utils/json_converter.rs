use serde_json::Value;

/// Render a JSON value for a `key: value` line. Strings print bare, lists
/// are comma-joined and nested objects print as `{k: v, ...}`.
pub fn value_to_short_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(arr) => arr
            .iter()
            .map(value_to_short_string)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(obj) => {
            let parts: Vec<String> = obj
                .iter()
                .map(|(key, val)| format!("{}: {}", key, value_to_short_string(val)))
                .collect();
            format!("{{{}}}", parts.join(", "))
        }
    }
}
