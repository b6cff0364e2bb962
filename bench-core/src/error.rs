//! Error types for CipherBench operations.
//!
//! Provides a single error enum covering corpus validation, per-algorithm
//! measurement failures, configuration validation, and report serialization.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

use std::fmt;

use thiserror::Error;

/// Result alias used throughout the CipherBench crates.
pub type Result<T> = std::result::Result<T, BenchError>;

/// Phase of the measurement protocol during which a capability failed.
///
/// Carried inside [`BenchError::CipherFailed`] so that failure logs identify
/// exactly which probe rejected the algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasurementPhase {
    /// Timed encryption of the full corpus.
    Timing,
    /// Baseline or bit-flipped encryption for the avalanche probe.
    Avalanche,
    /// Ciphertext entropy measurement.
    Entropy,
    /// Optional decrypt round-trip verification.
    RoundTrip,
}

impl fmt::Display for MeasurementPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeasurementPhase::Timing => write!(f, "timing"),
            MeasurementPhase::Avalanche => write!(f, "avalanche"),
            MeasurementPhase::Entropy => write!(f, "entropy"),
            MeasurementPhase::RoundTrip => write!(f, "round-trip"),
        }
    }
}

/// Errors that can occur during CipherBench operations.
#[derive(Debug, Error)]
pub enum BenchError {
    /// The input corpus is empty.
    ///
    /// Rejected before any measurement begins: entropy would divide by zero
    /// and the avalanche probe has no byte to flip.
    #[error("empty corpus: entropy and avalanche measurements are undefined on zero bytes")]
    EmptyCorpus,

    /// A cipher capability failed during one phase of the protocol.
    ///
    /// The failing algorithm is excluded from normalization and ranking;
    /// the batch continues with the remaining participants.
    #[error("cipher '{algorithm}' failed during {phase}: {reason}")]
    CipherFailed {
        /// Self-reported name of the failing capability.
        algorithm: String,
        /// Protocol phase in which the failure occurred.
        phase: MeasurementPhase,
        /// Provider-supplied failure cause.
        reason: String,
    },

    /// Decrypting the measured ciphertext did not reproduce the corpus.
    ///
    /// Only raised when round-trip verification is enabled in
    /// [`BenchConfig`](crate::config::BenchConfig).
    #[error("cipher '{algorithm}' failed round-trip verification: decrypted output differs from the corpus")]
    RoundTripMismatch {
        /// Self-reported name of the failing capability.
        algorithm: String,
    },

    /// Configuration validation failed.
    #[error("configuration error: {0}")]
    ConfigurationError(String),

    /// Serializing the ranked results failed.
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// Standard I/O error from a report sink.
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
}
