//! Data structures for worker metadata responses

use crate::utils::error::TeraPeekError;
use crate::utils::format::human_file_size_opt;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Metadata returned by the worker proxy
///
/// The response object is kept as-is so unknown fields survive and the raw
/// JSON can be shown back to the user. Typed accessors cover the fields the
/// UI renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetadataResult {
    fields: Map<String, Value>,
}

/// JavaScript-style truthiness, which is what the worker's clients rely on
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

impl MetadataResult {
    /// Validate a parsed response: it must be an object with a truthy `directlink`
    pub fn from_value(value: Value) -> Result<Self, TeraPeekError> {
        let fields = match value {
            Value::Object(fields) => fields,
            other => {
                return Err(TeraPeekError::MalformedResponse(format!(
                    "expected a JSON object, got {}",
                    json_kind(&other)
                )))
            }
        };

        if !fields.get("directlink").map(is_truthy).unwrap_or(false) {
            return Err(TeraPeekError::MissingDirectLink);
        }

        Ok(Self { fields })
    }

    /// Parse and validate a raw response body
    pub fn from_slice(body: &[u8]) -> Result<Self, TeraPeekError> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|e| TeraPeekError::MalformedResponse(e.to_string()))?;
        Self::from_value(value)
    }

    /// Direct download link (empty when the worker sent a non-string value)
    pub fn direct_link(&self) -> &str {
        self.str_field("directlink").unwrap_or_default()
    }

    pub fn file_name(&self) -> Option<&str> {
        self.str_field("file_name")
    }

    /// Human-readable size as reported by the worker
    pub fn size(&self) -> Option<&str> {
        self.str_field("size").filter(|s| !s.is_empty())
    }

    pub fn size_bytes(&self) -> Option<u64> {
        match self.fields.get("sizebytes")? {
            Value::Number(n) => n
                .as_u64()
                .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64)),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn thumb(&self) -> Option<&str> {
        self.str_field("thumb").filter(|s| !s.is_empty())
    }

    /// Worker-provided size, else the formatted byte count, else `-`
    pub fn display_size(&self) -> String {
        match self.size() {
            Some(size) => size.to_string(),
            None => human_file_size_opt(self.size_bytes()),
        }
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }

    /// Pretty-printed raw response (two-space indent)
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(&self.fields).unwrap_or_else(|_| "{}".to_string())
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
