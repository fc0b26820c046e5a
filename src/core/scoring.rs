//! Classification of aligned pairs and metric aggregation.
//!
//! Only fingerprints present in both runs are scored. Records seen on a
//! single side show up in the alignment diagnostics and nowhere else.
//! Every ratio with a zero denominator is reported as 0.0.

use tracing::{debug, info};

use crate::core::alignment::AlignmentIndex;
use crate::core::finish_reason::{is_tool_call, locate};
use crate::domain::summary::{percent, KEY_TYPE};
use crate::domain::{AlignmentStats, Outcome, SchemaAccuracy, Summary, TriggerSimilarity};

/// Trigger confusion matrix (candidate vs. reference)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfusionMatrix {
    pub tp: u64,
    pub fp: u64,
    pub fn_: u64,
    pub tn: u64,
}

impl ConfusionMatrix {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::TruePositive => self.tp += 1,
            Outcome::FalsePositive => self.fp += 1,
            Outcome::FalseNegative => self.fn_ += 1,
            Outcome::TrueNegative => self.tn += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.tp + self.fp + self.fn_ + self.tn
    }

    pub fn precision(&self) -> f64 {
        ratio(self.tp, self.tp + self.fp)
    }

    pub fn recall(&self) -> f64 {
        ratio(self.tp, self.tp + self.fn_)
    }

    /// Harmonic mean of precision and recall, 0.0 when both are 0
    pub fn f1(&self) -> f64 {
        let precision = self.precision();
        let recall = self.recall();
        let sum = precision + recall;
        if sum > 0.0 {
            2.0 * precision * recall / sum
        } else {
            0.0
        }
    }
}

/// Schema validity among candidate-triggered pairs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchemaTally {
    pub triggered: u64,
    pub successful: u64,
}

impl SchemaTally {
    pub fn record(&mut self, valid: bool) {
        self.triggered += 1;
        if valid {
            self.successful += 1;
        }
    }

    pub fn accuracy(&self) -> f64 {
        ratio(self.successful, self.triggered)
    }
}

fn ratio(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Score the candidate run (`ours`) against the reference run (`official`)
pub fn score(ours: &AlignmentIndex, official: &AlignmentIndex) -> Summary {
    let mut matrix = ConfusionMatrix::default();
    let mut schema = SchemaTally::default();
    let mut aligned = 0usize;

    for (fingerprint, candidate, reference) in ours.aligned_with(official) {
        aligned += 1;

        let candidate_triggered = is_tool_call(candidate);
        let reference_triggered = is_tool_call(reference);
        let outcome = Outcome::classify(candidate_triggered, reference_triggered);
        matrix.record(outcome);

        if candidate_triggered {
            schema.record(candidate.tool_calls_valid());
        }

        debug!(
            fingerprint = %fingerprint,
            outcome = outcome.as_str(),
            ours = ?locate(candidate),
            official = ?locate(reference),
            "Scored aligned pair"
        );
    }

    info!(
        aligned,
        tp = matrix.tp,
        fp = matrix.fp,
        fn_ = matrix.fn_,
        tn = matrix.tn,
        "Scored aligned records"
    );

    Summary {
        alignment: AlignmentStats {
            ours_total_unique_hashes: ours.len(),
            official_total_unique_hashes: official.len(),
            aligned,
            duplicate_ours_hashes: ours.duplicates(),
            duplicate_official_hashes: official.duplicates(),
            key_type: KEY_TYPE.to_string(),
        },
        tool_call_trigger_similarity: TriggerSimilarity {
            tp: matrix.tp,
            fp: matrix.fp,
            fn_: matrix.fn_,
            tn: matrix.tn,
            precision: percent(matrix.precision()),
            recall: percent(matrix.recall()),
            tool_call_f1: percent(matrix.f1()),
        },
        tool_call_schema_accuracy: SchemaAccuracy {
            count_finish_reason_tool_calls: schema.triggered,
            count_successful_tool_call: schema.successful,
            schema_accuracy: percent(schema.accuracy()),
        },
    }
}
