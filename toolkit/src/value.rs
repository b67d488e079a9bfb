use serde_json::Value;

/// Truthiness as the host tool evaluates payload fields.
///
/// `null`, `false`, `0`, `NaN`-like numbers, and `""` are false; every object
/// and array is true.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Walk nested object keys, returning `None` at the first missing step.
pub fn path<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().try_fold(value, |current, key| current.get(*key))
}

/// Walk nested keys and return the value only when it is truthy.
pub fn truthy_path<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    path(value, keys).filter(|v| is_truthy(v))
}

/// Read a non-empty string at the given path.
pub fn string_at<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a str> {
    path(value, keys)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}
