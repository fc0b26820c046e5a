//! Core alignment and scoring logic.
//!
//! This module contains:
//! - Fingerprint: Content key over messages/tools/tool_choice
//! - AlignmentIndex: First-wins fingerprint index with duplicate count
//! - finish_reason: Tool-call trigger detection across log shapes
//! - Scoring: Confusion matrix, F1 and schema accuracy
//! - Limits: Input size limits
//! - Evaluator: Load, index and score two logs

pub mod alignment;
pub mod evaluator;
pub mod finish_reason;
pub mod fingerprint;
pub mod limits;
pub mod scoring;

// Re-export commonly used types
pub use alignment::AlignmentIndex;
pub use evaluator::Evaluator;
pub use finish_reason::{finish_reason, is_tool_call, FinishReasonSource, TOOL_CALLS};
pub use fingerprint::{canonical_json, Fingerprint};
pub use limits::{InputLimits, LimitViolation};
pub use scoring::{score, ConfusionMatrix, SchemaTally};
