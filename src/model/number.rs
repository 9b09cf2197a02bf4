use serde_json::Value;

/// Reads a config value as a number. Numeric strings are accepted, anything
/// else (missing, empty, `null`, text) yields `None`.
pub fn number_from(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => {
            let text = text.trim();
            if text.is_empty() {
                return None;
            }
            text.parse::<f64>().ok()
        }
        _ => None,
    }
}
