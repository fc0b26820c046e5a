//! Input log ingestion.

pub mod jsonl;

pub use jsonl::{load_records, parse_record};
