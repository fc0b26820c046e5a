//! toolcall-f1 - Tool-call similarity between two inference runs
//!
//! Compares a candidate run's inference log against a reference run's log
//! and measures how often both decide to call a tool on the same input.
//!
//! # Architecture
//!
//! Records are aligned by content, not by position:
//! - Each record is fingerprinted over `messages`, `tools` and `tool_choice`
//! - Each log becomes a first-wins index keyed by fingerprint
//! - Only fingerprints present in both logs are scored
//!
//! # Modules
//!
//! - `core`: Fingerprinting, alignment, scoring
//! - `domain`: Data structures (Record, Summary)
//! - `ingest`: JSONL loading
//! - `report`: Summary output
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! toolcall-f1 --ours ours.jsonl --official official.jsonl --out summary.json
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod ingest;
pub mod report;

// Re-export main types at crate root for convenience
pub use crate::core::{score, AlignmentIndex, Evaluator, Fingerprint};
pub use crate::domain::{Outcome, Record, Summary};
