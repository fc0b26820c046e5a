//! Fingerprint-keyed index over one run's records.
//!
//! First occurrence wins; later records with the same fingerprint are
//! dropped and only counted.

use std::collections::BTreeMap;

use crate::core::fingerprint::Fingerprint;
use crate::domain::Record;

/// Mapping from fingerprint to the first record carrying it
#[derive(Debug, Clone, Default)]
pub struct AlignmentIndex {
    entries: BTreeMap<Fingerprint, Record>,
    duplicates: usize,
}

impl AlignmentIndex {
    /// Build an index from records in input order
    pub fn build<I>(records: I) -> Self
    where
        I: IntoIterator<Item = Record>,
    {
        let mut index = Self::default();
        for record in records {
            index.insert(record);
        }
        index
    }

    /// Insert a record; returns false if its fingerprint was already present
    pub fn insert(&mut self, record: Record) -> bool {
        let fingerprint = Fingerprint::of(&record);
        if self.entries.contains_key(&fingerprint) {
            self.duplicates += 1;
            return false;
        }
        self.entries.insert(fingerprint, record);
        true
    }

    pub fn get(&self, fingerprint: &Fingerprint) -> Option<&Record> {
        self.entries.get(fingerprint)
    }

    pub fn contains(&self, fingerprint: &Fingerprint) -> bool {
        self.entries.contains_key(fingerprint)
    }

    /// Number of unique fingerprints
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Records dropped because their fingerprint was already indexed
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    /// Fingerprints in ascending order
    pub fn fingerprints(&self) -> impl Iterator<Item = &Fingerprint> {
        self.entries.keys()
    }

    /// Fingerprints present in both indices, ascending, paired with both records
    pub fn aligned_with<'a>(
        &'a self,
        other: &'a AlignmentIndex,
    ) -> impl Iterator<Item = (&'a Fingerprint, &'a Record, &'a Record)> + 'a {
        self.entries
            .iter()
            .filter_map(move |(fp, ours)| other.get(fp).map(|theirs| (fp, ours, theirs)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn record(content: &str, finish_reason: &str) -> Record {
        serde_json::from_value(json!({
            "request": {"messages": [{"role": "user", "content": content}]},
            "finish_reason": finish_reason
        }))
        .unwrap()
    }

    fn reason(record: &Record) -> Option<&Value> {
        record.finish_reason.as_ref()
    }

    #[test]
    fn test_size_invariant() {
        let records = vec![
            record("a", "stop"),
            record("b", "stop"),
            record("a", "tool_calls"),
            record("c", "stop"),
            record("b", "stop"),
            record("a", "length"),
        ];
        let total = records.len();
        let index = AlignmentIndex::build(records);

        assert_eq!(index.len(), 3);
        assert_eq!(index.duplicates(), 3);
        assert_eq!(index.len() + index.duplicates(), total);
    }

    #[test]
    fn test_first_occurrence_wins() {
        let index = AlignmentIndex::build(vec![record("a", "tool_calls"), record("a", "stop")]);
        let fp = Fingerprint::of(&record("a", "anything"));

        assert_eq!(index.duplicates(), 1);
        assert_eq!(reason(index.get(&fp).unwrap()), Some(&json!("tool_calls")));
    }

    #[test]
    fn test_insert_reports_duplicate() {
        let mut index = AlignmentIndex::default();
        assert!(index.insert(record("x", "stop")));
        assert!(!index.insert(record("x", "stop")));
        assert!(index.insert(record("y", "stop")));
        assert_eq!(index.len(), 2);
        assert_eq!(index.duplicates(), 1);
    }

    #[test]
    fn test_empty_index() {
        let index = AlignmentIndex::build(Vec::new());
        assert!(index.is_empty());
        assert_eq!(index.duplicates(), 0);
        assert_eq!(index.fingerprints().count(), 0);
    }

    #[test]
    fn test_aligned_with_is_sorted_intersection() {
        let ours = AlignmentIndex::build(vec![
            record("a", "stop"),
            record("b", "stop"),
            record("c", "stop"),
        ]);
        let theirs = AlignmentIndex::build(vec![record("c", "stop"), record("a", "stop"), record("d", "stop")]);

        let aligned: Vec<&Fingerprint> = ours.aligned_with(&theirs).map(|(fp, _, _)| fp).collect();
        assert_eq!(aligned.len(), 2);
        assert!(aligned.windows(2).all(|w| w[0] < w[1]));
        assert!(aligned.iter().all(|fp| ours.contains(fp) && theirs.contains(fp)));
    }
}
