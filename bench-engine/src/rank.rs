//! Ranking and per-profile winner selection.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

use std::cmp::Ordering;

use bench_core::{ScoredRecord, UsageProfile};
use serde::Serialize;

/// An ordered set of finalized records with per-profile winners.
///
/// Records are held in insertion order, which is what makes tie-breaking
/// deterministic: every winner query scans in that order and only a
/// *strictly* greater score displaces the current leader, so the
/// first-encountered record wins ties. This is implemented explicitly
/// rather than left to a comparator.
#[derive(Debug, Clone, Serialize)]
pub struct Ranking {
    records: Vec<ScoredRecord>,
}

impl Ranking {
    /// Builds a ranking over the finalized records, preserving insertion
    /// order. An empty input is the non-fatal "nothing to rank" outcome.
    #[must_use]
    pub fn new(records: Vec<ScoredRecord>) -> Self {
        Self { records }
    }

    /// Records in insertion order.
    #[must_use]
    pub fn records(&self) -> &[ScoredRecord] {
        &self.records
    }

    /// Number of ranked records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether there is anything to rank.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records sorted descending by total score.
    ///
    /// The sort is stable, so records with equal totals keep their
    /// insertion order.
    #[must_use]
    pub fn sorted_by_total(&self) -> Vec<&ScoredRecord> {
        let mut sorted: Vec<&ScoredRecord> = self.records.iter().collect();
        sorted.sort_by(|a, b| {
            b.total_score().partial_cmp(&a.total_score()).unwrap_or(Ordering::Equal)
        });
        sorted
    }

    /// First-encountered record maximizing `score`.
    fn best_by<F>(&self, score: F) -> Option<&ScoredRecord>
    where
        F: Fn(&ScoredRecord) -> f64,
    {
        let mut best: Option<(&ScoredRecord, f64)> = None;
        for record in &self.records {
            let value = score(record);
            // Strict comparison: an equal score never displaces the leader.
            let displaces = match best {
                Some((_, leader)) => value > leader,
                None => true,
            };
            if displaces {
                best = Some((record, value));
            }
        }
        best.map(|(record, _)| record)
    }

    /// Record with the highest weighted total score.
    #[must_use]
    pub fn best_overall(&self) -> Option<&ScoredRecord> {
        self.best_by(ScoredRecord::total_score)
    }

    /// Best for speed-critical workloads: highest combined time/throughput
    /// score.
    #[must_use]
    pub fn best_for_speed(&self) -> Option<&ScoredRecord> {
        self.best_by(|r| r.scores().speed())
    }

    /// Best for security-critical workloads: highest combined
    /// avalanche/entropy/key-length score.
    #[must_use]
    pub fn best_for_security(&self) -> Option<&ScoredRecord> {
        self.best_by(|r| r.scores().security())
    }

    /// Best for small files: highest (inverted) encryption-time score.
    #[must_use]
    pub fn best_for_small_files(&self) -> Option<&ScoredRecord> {
        self.best_by(|r| r.scores().time)
    }

    /// Best for large files: highest throughput score.
    #[must_use]
    pub fn best_for_large_files(&self) -> Option<&ScoredRecord> {
        self.best_by(|r| r.scores().throughput)
    }

    /// Winner for the given usage profile.
    #[must_use]
    pub fn winner(&self, profile: UsageProfile) -> Option<&ScoredRecord> {
        match profile {
            UsageProfile::Overall => self.best_overall(),
            UsageProfile::Speed => self.best_for_speed(),
            UsageProfile::Security => self.best_for_security(),
            UsageProfile::SmallFiles => self.best_for_small_files(),
            UsageProfile::LargeFiles => self.best_for_large_files(),
        }
    }
}
