//! Typed access to tool call arguments.

use crate::error::ChatError;

/// Wrapper around tool call arguments providing typed extraction.
#[derive(Debug, Clone)]
pub struct ToolArguments {
    value: serde_json::Value,
}

impl ToolArguments {
    /// Wrap raw arguments.
    ///
    /// Some models send the arguments object as a JSON-encoded string; that
    /// form is decoded here so accessors always see an object.
    pub fn new(value: serde_json::Value) -> Self {
        let value = match value {
            serde_json::Value::String(raw) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    serde_json::json!({})
                } else {
                    serde_json::from_str(trimmed).unwrap_or(serde_json::Value::String(raw))
                }
            }
            other => other,
        };
        Self { value }
    }

    /// Get the raw JSON value.
    pub fn raw(&self) -> &serde_json::Value {
        &self.value
    }

    /// Get a string argument by key.
    pub fn get_str(&self, key: &str) -> Result<&str, ChatError> {
        self.value
            .get(key)
            .and_then(|v| v.as_str())
            .ok_or_else(|| ChatError::InvalidArgument(format!("Missing string argument: {key}")))
    }

    /// Get a number argument by key. Integers are widened to `f64`.
    pub fn get_f64(&self, key: &str) -> Result<f64, ChatError> {
        self.value
            .get(key)
            .and_then(|v| v.as_f64())
            .ok_or_else(|| ChatError::InvalidArgument(format!("Missing number argument: {key}")))
    }
}
