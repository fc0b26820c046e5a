//! Finish-reason extraction across the two supported log shapes.
//!
//! - Flattened: `{"finish_reason": "tool_calls", ...}`
//! - Raw API response: `{"response": {"choices": [{"finish_reason": "tool_calls"}]}}`
//!
//! Any non-empty flattened value wins, even one that is not a string.
//! Empty values (`""`, `null`, `0`, `false`) fall through to the first choice.

use serde_json::Value;

use crate::domain::{is_truthy, Record};

/// Finish reason that marks a tool-call trigger
pub const TOOL_CALLS: &str = "tool_calls";

/// Where a finish reason was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReasonSource {
    TopLevel,
    FirstChoice,
}

/// Locate the raw finish-reason value together with the shape it came from
pub fn locate(record: &Record) -> Option<(&Value, FinishReasonSource)> {
    if let Some(reason) = record.finish_reason.as_ref().filter(|v| is_truthy(v)) {
        return Some((reason, FinishReasonSource::TopLevel));
    }

    record
        .response
        .as_ref()?
        .first_finish_reason()
        .filter(|v| is_truthy(v))
        .map(|reason| (reason, FinishReasonSource::FirstChoice))
}

/// The finish reason as text; `None` when absent or not a string
pub fn finish_reason(record: &Record) -> Option<&str> {
    locate(record).and_then(|(reason, _)| reason.as_str())
}

/// Whether the record's response triggered a tool call
pub fn is_tool_call(record: &Record) -> bool {
    finish_reason(record) == Some(TOOL_CALLS)
}
