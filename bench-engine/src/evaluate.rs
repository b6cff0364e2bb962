//! Normalization and weighted scoring.
//!
//! This is the scale-invariant ranking primitive: each raw metric is
//! rescaled onto `[0, 10]` relative to the *current* participant set, so
//! milliseconds, MB/s, bit distances, entropy bits, and key bits become
//! directly comparable. The scores are meaningless outside the set they
//! were computed against — whenever the participant set changes, the whole
//! evaluation is recomputed from scratch.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

use bench_core::{MetricRecord, NormalizedScores, ScoreWeights, ScoredRecord};

/// Upper bound of the normalized score scale.
pub const SCORE_SCALE: f64 = 10.0;

/// Score assigned to every participant when a metric has no spread
/// (`max == min`), including the single-participant run.
pub const MIDPOINT_SCORE: f64 = 5.0;

/// Observed value range of one metric across the participant set.
#[derive(Debug, Clone, Copy)]
struct MetricSpan {
    min: f64,
    max: f64,
}

impl MetricSpan {
    fn new() -> Self {
        Self { min: f64::INFINITY, max: f64::NEG_INFINITY }
    }

    fn observe(&mut self, value: f64) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    /// `10 × (v - min) / (max - min)`, or the midpoint when the span is
    /// degenerate.
    fn score_higher_better(&self, value: f64) -> f64 {
        let range = self.max - self.min;
        if range > 0.0 { SCORE_SCALE * (value - self.min) / range } else { MIDPOINT_SCORE }
    }

    /// Inverted scale for lower-is-better metrics: the minimum maps to 10.
    fn score_lower_better(&self, value: f64) -> f64 {
        let range = self.max - self.min;
        if range > 0.0 {
            SCORE_SCALE * (1.0 - (value - self.min) / range)
        } else {
            MIDPOINT_SCORE
        }
    }
}

/// Normalizes raw records across the participant set and folds the scores
/// into one weighted total per record.
///
/// Evaluation is idempotent: the same records and weights always produce
/// identical scores.
#[derive(Debug, Clone)]
pub struct Evaluator {
    weights: ScoreWeights,
}

impl Evaluator {
    /// Creates an evaluator with the given scoring policy.
    #[must_use]
    pub fn new(weights: ScoreWeights) -> Self {
        Self { weights }
    }

    /// The scoring policy in effect.
    #[must_use]
    pub fn weights(&self) -> &ScoreWeights {
        &self.weights
    }

    /// Consumes raw records and returns them finalized, in input order.
    ///
    /// An empty input yields an empty output; normalization over zero
    /// participants is simply "nothing to score", not an error.
    #[must_use]
    pub fn evaluate(&self, records: Vec<MetricRecord>) -> Vec<ScoredRecord> {
        let mut time = MetricSpan::new();
        let mut throughput = MetricSpan::new();
        let mut avalanche = MetricSpan::new();
        let mut entropy = MetricSpan::new();
        let mut key_length = MetricSpan::new();

        #[allow(clippy::cast_precision_loss)]
        for record in &records {
            time.observe(record.encryption_time_ms);
            throughput.observe(record.throughput_mbps);
            avalanche.observe(record.avalanche_distance as f64);
            entropy.observe(record.entropy_bits);
            key_length.observe(f64::from(record.key_length_bits));
        }

        records
            .into_iter()
            .map(|record| {
                #[allow(clippy::cast_precision_loss)]
                let scores = NormalizedScores {
                    time: time.score_lower_better(record.encryption_time_ms),
                    throughput: throughput.score_higher_better(record.throughput_mbps),
                    avalanche: avalanche.score_higher_better(record.avalanche_distance as f64),
                    entropy: entropy.score_higher_better(record.entropy_bits),
                    key_length: key_length.score_higher_better(f64::from(record.key_length_bits)),
                    resource_usage: None,
                };
                let total = self.total_score(&scores);
                ScoredRecord::new(record, scores, total)
            })
            .collect()
    }

    /// Weighted sum of the combined sub-scores.
    fn total_score(&self, scores: &NormalizedScores) -> f64 {
        self.weights.speed * scores.speed()
            + self.weights.security * scores.security()
            + self.weights.resource * scores.resource()
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(ScoreWeights::default())
    }
}
