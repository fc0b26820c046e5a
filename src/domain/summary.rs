//! Aggregate output of one evaluation run.

use serde::{Deserialize, Serialize};

/// Identifies the fingerprint scheme used to align the two logs
pub const KEY_TYPE: &str = "messages_tools_tool_choice_hash";

/// Classification of one aligned pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Both runs triggered a tool call
    TruePositive,
    /// Only the candidate triggered
    FalsePositive,
    /// Only the reference triggered
    FalseNegative,
    /// Neither triggered
    TrueNegative,
}

impl Outcome {
    pub fn classify(candidate: bool, reference: bool) -> Self {
        match (candidate, reference) {
            (true, true) => Outcome::TruePositive,
            (true, false) => Outcome::FalsePositive,
            (false, true) => Outcome::FalseNegative,
            (false, false) => Outcome::TrueNegative,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::TruePositive => "TP",
            Outcome::FalsePositive => "FP",
            Outcome::FalseNegative => "FN",
            Outcome::TrueNegative => "TN",
        }
    }
}

/// Final report document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub alignment: AlignmentStats,
    pub tool_call_trigger_similarity: TriggerSimilarity,
    pub tool_call_schema_accuracy: SchemaAccuracy,
}

/// Diagnostics describing how well the two logs lined up
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignmentStats {
    pub ours_total_unique_hashes: usize,
    pub official_total_unique_hashes: usize,
    /// Fingerprints present on both sides (the scored set)
    pub aligned: usize,
    pub duplicate_ours_hashes: usize,
    pub duplicate_official_hashes: usize,
    pub key_type: String,
}

/// Confusion matrix plus derived percentages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriggerSimilarity {
    #[serde(rename = "TP")]
    pub tp: u64,
    #[serde(rename = "FP")]
    pub fp: u64,
    #[serde(rename = "FN")]
    pub fn_: u64,
    #[serde(rename = "TN")]
    pub tn: u64,
    pub precision: f64,
    pub recall: f64,
    pub tool_call_f1: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaAccuracy {
    pub count_finish_reason_tool_calls: u64,
    pub count_successful_tool_call: u64,
    pub schema_accuracy: f64,
}

/// Scale a ratio to a percentage rounded to two decimals
///
/// Rounding goes through decimal formatting so ties resolve on the exact
/// binary value rather than on `x * 100` arithmetic.
pub fn percent(ratio: f64) -> f64 {
    let scaled = ratio * 100.0;
    format!("{:.2}", scaled).parse().unwrap_or(scaled)
}
