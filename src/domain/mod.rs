//! Domain types for toolcall-f1.
//!
//! This module contains the core data structures:
//! - Record: One decoded inference log line
//! - Summary: Aggregate report of one evaluation

pub mod record;
pub mod summary;

// Re-export commonly used types
pub use record::{is_truthy, Record, Request, Response};
pub use summary::{AlignmentStats, Outcome, SchemaAccuracy, Summary, TriggerSimilarity, KEY_TYPE};
