//! Inference log record shape.
//!
//! Log lines come from two independently produced runs, so every field
//! is optional and parsed leniently: a badly shaped sub-structure degrades
//! to its default instead of rejecting the whole line.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One decoded log line
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Record {
    /// The request that was sent to the model
    #[serde(default, deserialize_with = "lenient")]
    pub request: Request,

    /// Flattened finish reason (present in pre-processed logs)
    #[serde(default)]
    pub finish_reason: Option<Value>,

    /// Raw API response (present in unprocessed logs)
    #[serde(default, deserialize_with = "lenient")]
    pub response: Option<Response>,

    /// Whether the emitted tool call payload validated against its schema
    #[serde(default)]
    pub tool_calls_valid: Option<Value>,
}

/// Request fields that define a test case
///
/// Everything else in the logged request (model, base_url, api_key, ...)
/// is dropped on parse.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Request {
    /// Conversation turns; `[]` when the key is missing
    #[serde(default = "empty_messages")]
    pub messages: Value,

    /// Tool definitions offered to the model
    #[serde(default)]
    pub tools: Value,

    /// Tool-choice policy
    #[serde(default)]
    pub tool_choice: Value,
}

impl Default for Request {
    fn default() -> Self {
        Self {
            messages: empty_messages(),
            tools: Value::Null,
            tool_choice: Value::Null,
        }
    }
}

fn empty_messages() -> Value {
    Value::Array(Vec::new())
}

/// Raw chat-completion response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Response {
    /// Completion choices; only the first is ever inspected, so the rest
    /// stay unparsed
    #[serde(default, deserialize_with = "lenient")]
    pub choices: Vec<Value>,
}

impl Response {
    /// `finish_reason` of the first choice, if that choice is an object carrying one
    pub fn first_finish_reason(&self) -> Option<&Value> {
        self.choices.first()?.get("finish_reason")
    }
}

impl Record {
    /// Whether the candidate marked its tool call payload as valid
    pub fn tool_calls_valid(&self) -> bool {
        self.tool_calls_valid.as_ref().is_some_and(is_truthy)
    }
}

/// JSON truthiness: `false`, `null`, zero, and empty strings/arrays/objects are false
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Deserialize `T`, falling back to its default when the value has the wrong shape
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}
