//! Configuration for benchmark runs.
//!
//! The measurement protocol and metric set are fixed; what an embedding
//! application may tune is the scoring policy ([`ScoreWeights`]) and the
//! optional decrypt round-trip check.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

use crate::error::{BenchError, Result};

/// Default weight of the combined speed score.
pub const DEFAULT_SPEED_WEIGHT: f64 = 0.3;
/// Default weight of the combined security score.
pub const DEFAULT_SECURITY_WEIGHT: f64 = 0.5;
/// Default weight of the resource-usage score.
pub const DEFAULT_RESOURCE_WEIGHT: f64 = 0.2;

/// Weights combining the normalized sub-scores into one total.
///
/// `total = speed × avg(time, throughput)
///        + security × avg(avalanche, entropy, key_length)
///        + resource × resource_usage`
///
/// The defaults (0.3 / 0.5 / 0.2) are the fixed policy the ranking was
/// designed around; they are exposed as a configurable extension point, not
/// something a typical embedding needs to touch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    /// Weight applied to the combined speed score.
    pub speed: f64,
    /// Weight applied to the combined security score.
    pub security: f64,
    /// Weight applied to the resource-usage score.
    pub resource: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED_WEIGHT,
            security: DEFAULT_SECURITY_WEIGHT,
            resource: DEFAULT_RESOURCE_WEIGHT,
        }
    }
}

impl ScoreWeights {
    /// Creates the default weighting policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates that every weight is finite and non-negative.
    ///
    /// Non-negative weights are what make the total score monotonic in each
    /// sub-score.
    ///
    /// # Errors
    /// Returns [`BenchError::ConfigurationError`] when a weight is negative,
    /// NaN, or infinite.
    pub fn validate(&self) -> Result<()> {
        for (label, weight) in
            [("speed", self.speed), ("security", self.security), ("resource", self.resource)]
        {
            if !weight.is_finite() || weight < 0.0 {
                return Err(BenchError::ConfigurationError(format!(
                    "{label} weight must be finite and non-negative, got {weight}"
                )));
            }
        }
        Ok(())
    }
}

/// Benchmark run configuration.
///
/// # Examples
/// ```rust
/// use bench_core::{BenchConfig, ScoreWeights};
///
/// let config = BenchConfig::new()
///     .with_weights(ScoreWeights { speed: 0.5, security: 0.4, resource: 0.1 })
///     .with_round_trip_verification(true);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BenchConfig {
    /// Scoring policy for the evaluator.
    pub weights: ScoreWeights,

    /// When enabled, the runner decrypts the measured ciphertext and treats
    /// any mismatch with the corpus as a measurement failure.
    ///
    /// Off by default: the measurement protocol proper never decrypts, and
    /// write-only providers (e.g. a public-key scheme benchmarked with only
    /// the encryption half wired up) would otherwise always fail.
    pub verify_round_trip: bool,
}

impl BenchConfig {
    /// Creates a configuration with the default scoring policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the scoring weights.
    #[must_use]
    pub fn with_weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Enables or disables the decrypt round-trip check.
    #[must_use]
    pub fn with_round_trip_verification(mut self, enabled: bool) -> Self {
        self.verify_round_trip = enabled;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// Returns [`BenchError::ConfigurationError`] when the weights are
    /// invalid.
    pub fn validate(&self) -> Result<()> {
        self.weights.validate()
    }
}
