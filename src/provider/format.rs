//! Provider formatting helpers.

use serde_json::Value;

/// Convert a tool result JSON value into the string payload of a tool message.
///
/// String results are passed through unquoted so the model sees the
/// sentence itself.
pub(crate) fn tool_result_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn strings_are_not_requoted() {
        assert_eq!(
            tool_result_to_string(&json!("The sum of 5.0 and 3.0 is 8.0.")),
            "The sum of 5.0 and 3.0 is 8.0."
        );
    }

    #[test]
    fn structured_results_are_serialized() {
        assert_eq!(
            tool_result_to_string(&json!({ "error": "Tool 'x' not found" })),
            r#"{"error":"Tool 'x' not found"}"#
        );
        assert_eq!(tool_result_to_string(&Value::Null), "null");
    }
}
