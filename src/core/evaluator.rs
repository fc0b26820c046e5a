//! End-to-end evaluation of a candidate log against a reference log.

use std::path::Path;

use anyhow::Result;
use tracing::info;

use crate::core::alignment::AlignmentIndex;
use crate::core::limits::InputLimits;
use crate::core::scoring::score;
use crate::domain::Summary;
use crate::ingest::load_records;

/// Runs one evaluation: load, index, score
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    limits: InputLimits,
}

impl Evaluator {
    pub fn new(limits: InputLimits) -> Self {
        Self { limits }
    }

    /// Load an input log and index it by fingerprint
    pub async fn index(&self, path: &Path) -> Result<AlignmentIndex> {
        let records = load_records(path, &self.limits).await?;
        let index = AlignmentIndex::build(records);

        info!(
            path = %path.display(),
            unique = index.len(),
            duplicates = index.duplicates(),
            "Indexed records"
        );
        Ok(index)
    }

    /// Score `ours` (candidate) against `official` (reference)
    pub async fn evaluate(&self, ours: &Path, official: &Path) -> Result<Summary> {
        let ours_index = self.index(ours).await?;
        let official_index = self.index(official).await?;
        Ok(score(&ours_index, &official_index))
    }
}
