//! Newline-delimited JSON record loader.
//!
//! Eval logs are messy: truncated writes, stray debug prints, partial
//! lines from killed workers. Any line that is not a JSON object is
//! skipped without failing the run. I/O errors (missing file, invalid
//! UTF-8) are still fatal.

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;
use tokio::fs::{self, File};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

use crate::core::InputLimits;
use crate::domain::Record;

/// Load all well-formed records from a JSONL file, in line order
pub async fn load_records(path: &Path, limits: &InputLimits) -> Result<Vec<Record>> {
    let metadata = fs::metadata(path)
        .await
        .with_context(|| format!("Failed to read input file: {}", path.display()))?;
    limits.validate_input(path, metadata.len())?;

    let file = File::open(path)
        .await
        .with_context(|| format!("Failed to open input file: {}", path.display()))?;

    let reader = BufReader::new(file);
    let mut lines = reader.lines();
    let mut records = Vec::new();
    let mut line_no = 0usize;

    while let Some(line) = lines
        .next_line()
        .await
        .with_context(|| format!("Failed to read input file: {}", path.display()))?
    {
        line_no += 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match parse_record(line) {
            Some(record) => records.push(record),
            None => debug!(path = %path.display(), line = line_no, "Skipping malformed line"),
        }
    }

    info!(path = %path.display(), records = records.len(), "Loaded records");
    Ok(records)
}

/// Parse one line; `None` unless it is a JSON object
pub fn parse_record(line: &str) -> Option<Record> {
    let value: Value = serde_json::from_str(line).ok()?;
    if !value.is_object() {
        return None;
    }
    serde_json::from_value(value).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_lines(lines: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        for line in lines {
            writeln!(file, "{}", line).unwrap();
        }
        file
    }

    #[test]
    fn test_parse_record_accepts_objects_only() {
        assert!(parse_record(r#"{"finish_reason": "stop"}"#).is_some());
        assert!(parse_record("{}").is_some());
        assert!(parse_record("[]").is_none());
        assert!(parse_record("[1, 2]").is_none());
        assert!(parse_record("\"text\"").is_none());
        assert!(parse_record("42").is_none());
        assert!(parse_record("null").is_none());
        assert!(parse_record("not json at all").is_none());
        assert!(parse_record(r#"{"finish_reason": "stop""#).is_none());
    }

    #[tokio::test]
    async fn test_load_skips_garbage_and_blank_lines() {
        let file = write_lines(&[
            r#"{"finish_reason": "tool_calls"}"#,
            "",
            "   ",
            "this is not json",
            r#"{"finish_reason": "stop"}"#,
        ]);

        let records = load_records(file.path(), &InputLimits::default()).await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].finish_reason, Some(serde_json::json!("tool_calls")));
        assert_eq!(records[1].finish_reason, Some(serde_json::json!("stop")));
    }

    #[tokio::test]
    async fn test_load_tolerates_surrounding_whitespace() {
        let file = write_lines(&["  {\"finish_reason\": \"stop\"}\t", "\r"]);
        let records = load_records(file.path(), &InputLimits::default()).await.unwrap();
        assert_eq!(records.len(), 1);
    }

    #[tokio::test]
    async fn test_load_invalid_utf8_fails() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"finish_reason": "stop"}}"#).unwrap();
        file.write_all(b"{\"finish_reason\": \"\xff\xfe\"}\n").unwrap();

        let result = load_records(file.path(), &InputLimits::default()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_load_missing_file_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = load_records(&dir.path().join("missing.jsonl"), &InputLimits::default()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_load_rejects_oversized_input() {
        let file = write_lines(&[r#"{"finish_reason": "stop"}"#]);
        let limits = InputLimits { max_input_bytes: 4 };

        let err = load_records(file.path(), &limits).await.unwrap_err();
        assert!(err.downcast_ref::<crate::core::LimitViolation>().is_some());
    }
}
