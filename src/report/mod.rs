//! Summary report output.
//!
//! The report is pretty-printed JSON with two-space indentation, written
//! to the requested path and echoed to stdout.

use std::path::Path;

use anyhow::{Context, Result};
use tokio::fs;

use crate::domain::Summary;

/// Render the summary as pretty JSON
pub fn render(summary: &Summary) -> Result<String> {
    serde_json::to_string_pretty(summary).context("Failed to serialize summary")
}

/// Write the rendered summary to `path`, creating parent directories
pub async fn write_summary(path: &Path, summary: &Summary) -> Result<String> {
    let rendered = render(summary)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
        }
    }

    fs::write(path, &rendered)
        .await
        .with_context(|| format!("Failed to write summary: {}", path.display()))?;

    Ok(rendered)
}
