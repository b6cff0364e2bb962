//! Result types for benchmark measurements.
//!
//! The metric set is fixed and known at design time, so raw metrics and
//! normalized scores are closed structs with one named field per metric —
//! not an open-ended map keyed by strings. This removes the missing-key
//! failure mode entirely.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

use std::fmt;

use serde::{Deserialize, Serialize};

/// Raw measurements for one algorithm within one run.
///
/// Produced by the benchmark runner and consumed by the evaluator. Scores
/// derived from these values are only meaningful relative to the set of
/// records evaluated together; re-evaluating a different participant set
/// produces fresh [`ScoredRecord`]s and invalidates the old ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    /// Algorithm name, unique within a run.
    pub name: String,

    /// Wall-clock time to encrypt the full corpus once, in milliseconds.
    /// Lower is better.
    pub encryption_time_ms: f64,

    /// Encryption throughput in MB/s. Higher is better.
    pub throughput_mbps: f64,

    /// Hamming distance between the baseline ciphertext and the ciphertext
    /// of a corpus with one flipped plaintext bit, truncated to the shorter
    /// of the two. Bounded by `8 × min(len_a, len_b)`. Higher is better.
    pub avalanche_distance: u64,

    /// Shannon entropy of the ciphertext in bits per byte, in `[0, 8]`.
    /// Higher is better.
    pub entropy_bits: f64,

    /// Key length in bits as self-reported by the capability. Higher is
    /// better. See [`CipherCapability`](crate::traits::CipherCapability)
    /// for the encoded-key reporting caveat.
    pub key_length_bits: u32,
}

/// Normalized `[0, 10]` scores, one per raw metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedScores {
    /// Encryption-time score. The raw metric is lower-is-better, so the
    /// scale is inverted: the fastest participant scores 10.
    pub time: f64,
    /// Throughput score.
    pub throughput: f64,
    /// Avalanche-distance score.
    pub avalanche: f64,
    /// Entropy score.
    pub entropy: f64,
    /// Key-length score.
    pub key_length: f64,
    /// Resource-usage score. Unmeasured in the current protocol; scored as
    /// `0.0` when absent. Kept as the extension point the scoring weights
    /// already budget for.
    pub resource_usage: Option<f64>,
}

impl NormalizedScores {
    /// Combined speed score: mean of the time and throughput scores.
    #[must_use]
    pub fn speed(&self) -> f64 {
        (self.time + self.throughput) / 2.0
    }

    /// Combined security score: mean of the avalanche, entropy, and
    /// key-length scores.
    #[must_use]
    pub fn security(&self) -> f64 {
        (self.avalanche + self.entropy + self.key_length) / 3.0
    }

    /// Resource-usage score, defaulting to `0.0` when unmeasured.
    #[must_use]
    pub fn resource(&self) -> f64 {
        self.resource_usage.unwrap_or(0.0)
    }
}

/// A finalized record: raw metrics plus normalized scores and the weighted
/// total.
///
/// Built once by the evaluator and immutable afterwards — fields are
/// private and there are no mutators, which is how the "finalized within a
/// run" invariant is enforced. A new run builds a new set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredRecord {
    metrics: MetricRecord,
    scores: NormalizedScores,
    total_score: f64,
}

impl ScoredRecord {
    /// Assembles a finalized record from its parts.
    #[must_use]
    pub fn new(metrics: MetricRecord, scores: NormalizedScores, total_score: f64) -> Self {
        Self { metrics, scores, total_score }
    }

    /// Algorithm name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.metrics.name
    }

    /// Raw measurements.
    #[must_use]
    pub fn metrics(&self) -> &MetricRecord {
        &self.metrics
    }

    /// Normalized per-metric scores.
    #[must_use]
    pub fn scores(&self) -> &NormalizedScores {
        &self.scores
    }

    /// Weighted total score.
    #[must_use]
    pub fn total_score(&self) -> f64 {
        self.total_score
    }
}

/// Usage profiles a ranking recommends a winner for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UsageProfile {
    /// Highest weighted total score.
    Overall,
    /// Speed-critical workloads: best combined time/throughput score.
    Speed,
    /// Security-critical workloads: best combined avalanche/entropy/key
    /// score.
    Security,
    /// Small files: best (inverted) encryption-time score.
    SmallFiles,
    /// Large files: best throughput score.
    LargeFiles,
}

impl UsageProfile {
    /// All profiles in presentation order.
    pub const ALL: [UsageProfile; 5] = [
        UsageProfile::Overall,
        UsageProfile::Speed,
        UsageProfile::Security,
        UsageProfile::SmallFiles,
        UsageProfile::LargeFiles,
    ];
}

impl fmt::Display for UsageProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UsageProfile::Overall => write!(f, "Overall"),
            UsageProfile::Speed => write!(f, "Speed"),
            UsageProfile::Security => write!(f, "Security"),
            UsageProfile::SmallFiles => write!(f, "Small Files"),
            UsageProfile::LargeFiles => write!(f, "Large Files"),
        }
    }
}
