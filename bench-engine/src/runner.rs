//! The benchmark runner: drives one cipher capability through the fixed
//! measurement protocol.
//!
//! Protocol, per algorithm:
//!
//! 1. **Timing** — encrypt the full corpus once under a monotonic timer;
//!    derive milliseconds and MB/s.
//! 2. **Avalanche** — encrypt the corpus and a copy with the
//!    least-significant bit of byte 0 flipped; Hamming distance between the
//!    two ciphertexts, truncated to the shorter.
//! 3. **Entropy** — Shannon entropy of the timing ciphertext.
//! 4. **Key length** — read from the capability, never computed.
//!
//! Every probe is a single sample. The numbers order participants relative
//! to each other within one run; they are not statistically rigorous
//! measurements.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

use std::time::Duration;

use bench_core::{BenchConfig, BenchError, CipherCapability, MeasurementPhase, MetricRecord, Result};
use tracing::{debug, warn};

use crate::analysis::{hamming_distance, shannon_entropy};
use crate::progress::{CancelToken, ProgressEvent, ProgressSender};
use crate::timing::Timer;

/// Floor substituted when an encryption completes faster than the clock
/// resolves (tiny corpus, very fast cipher). Keeps the throughput division
/// defined; a measurement-fidelity caveat, not a correctness guarantee.
pub const MIN_ELAPSED: Duration = Duration::from_nanos(1);

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// A per-algorithm failure recorded during a batch run.
///
/// The failing algorithm is excluded from normalization and ranking; it
/// appears here (and in the log) exactly once.
#[derive(Debug)]
pub struct MeasurementFailure {
    /// Self-reported name of the failing capability.
    pub algorithm: String,
    /// What went wrong.
    pub error: BenchError,
}

/// Result of a batch run over several capabilities.
#[derive(Debug, Default)]
pub struct RunOutcome {
    /// Raw records for every algorithm that survived measurement, in
    /// submission order.
    pub records: Vec<MetricRecord>,
    /// Per-algorithm failures, in the order they occurred.
    pub failures: Vec<MeasurementFailure>,
    /// Whether the run stopped early on a cancellation request. Records
    /// collected before the request are preserved.
    pub cancelled: bool,
}

/// Drives cipher capabilities through the measurement protocol.
#[derive(Debug, Clone, Default)]
pub struct BenchmarkRunner {
    config: BenchConfig,
}

impl BenchmarkRunner {
    /// Creates a runner with the given configuration.
    #[must_use]
    pub fn new(config: BenchConfig) -> Self {
        Self { config }
    }

    /// Measures one capability against the corpus.
    ///
    /// # Errors
    /// Returns [`BenchError::EmptyCorpus`] for a zero-length corpus and
    /// [`BenchError::CipherFailed`] / [`BenchError::RoundTripMismatch`]
    /// when the capability rejects a phase.
    pub fn measure(&self, cipher: &dyn CipherCapability, corpus: &[u8]) -> Result<MetricRecord> {
        if corpus.is_empty() {
            return Err(BenchError::EmptyCorpus);
        }

        let name = cipher.name().to_string();

        // Phase 1: timed encryption of the full corpus, one sample.
        let mut timer = Timer::start();
        let ciphertext = cipher
            .encrypt(corpus)
            .map_err(|e| cipher_failed(&name, MeasurementPhase::Timing, &e))?;
        let elapsed = timer.stop().max(MIN_ELAPSED);

        let encryption_time_ms = elapsed.as_secs_f64() * 1_000.0;
        #[allow(clippy::cast_precision_loss)]
        let size_mb = corpus.len() as f64 / BYTES_PER_MB;
        let throughput_mbps = size_mb / elapsed.as_secs_f64();

        if self.config.verify_round_trip {
            let recovered = cipher
                .decrypt(&ciphertext)
                .map_err(|e| cipher_failed(&name, MeasurementPhase::RoundTrip, &e))?;
            if recovered != corpus {
                return Err(BenchError::RoundTripMismatch { algorithm: name });
            }
        }

        // Phase 2: avalanche. A fresh baseline encryption rather than the
        // timing ciphertext, so stateful providers compare two encryptions
        // performed back to back.
        let baseline = cipher
            .encrypt(corpus)
            .map_err(|e| cipher_failed(&name, MeasurementPhase::Avalanche, &e))?;
        let mut flipped = corpus.to_vec();
        if let Some(first) = flipped.first_mut() {
            *first ^= 0x01;
        }
        let flipped_ciphertext = cipher
            .encrypt(&flipped)
            .map_err(|e| cipher_failed(&name, MeasurementPhase::Avalanche, &e))?;
        let avalanche_distance = hamming_distance(&baseline, &flipped_ciphertext);

        // Phase 3: entropy of the timing ciphertext.
        let entropy_bits = shannon_entropy(&ciphertext);

        // Phase 4: self-reported key length.
        let key_length_bits = cipher.key_length_bits();

        debug!(
            algorithm = %name,
            encryption_time_ms,
            throughput_mbps,
            avalanche_distance,
            entropy_bits,
            key_length_bits,
            "measurement complete"
        );

        Ok(MetricRecord {
            name,
            encryption_time_ms,
            throughput_mbps,
            avalanche_distance,
            entropy_bits,
            key_length_bits,
        })
    }

    /// Measures every capability in sequence.
    ///
    /// Strictly one at a time, so the timing of one algorithm is never
    /// perturbed by concurrent work from another. A failing capability is
    /// logged, recorded in the outcome, and skipped; the batch continues.
    /// The cancel token is consulted only between algorithms.
    ///
    /// # Errors
    /// Returns [`BenchError::EmptyCorpus`] before any measurement when the
    /// corpus is empty. Per-algorithm failures never fail the batch.
    pub fn run_all(
        &self,
        ciphers: &[Box<dyn CipherCapability>],
        corpus: &[u8],
        progress: Option<&ProgressSender>,
        cancel: Option<&CancelToken>,
    ) -> Result<RunOutcome> {
        if corpus.is_empty() {
            return Err(BenchError::EmptyCorpus);
        }

        let total = ciphers.len();
        let mut outcome = RunOutcome::default();

        for (index, cipher) in ciphers.iter().enumerate() {
            if cancel.is_some_and(CancelToken::is_cancelled) {
                outcome.cancelled = true;
                break;
            }

            match self.measure(cipher.as_ref(), corpus) {
                Ok(record) => outcome.records.push(record),
                Err(error) => {
                    warn!(algorithm = cipher.name(), %error, "algorithm excluded from run");
                    outcome
                        .failures
                        .push(MeasurementFailure { algorithm: cipher.name().to_string(), error });
                }
            }

            if let Some(progress) = progress {
                progress.post(ProgressEvent {
                    algorithm: cipher.name().to_string(),
                    completed: index + 1,
                    total,
                });
            }
        }

        if outcome.records.is_empty() && !outcome.cancelled {
            warn!("nothing to rank: no algorithm survived measurement");
        }

        Ok(outcome)
    }
}

fn cipher_failed(
    algorithm: &str,
    phase: MeasurementPhase,
    error: &bench_core::CipherError,
) -> BenchError {
    BenchError::CipherFailed {
        algorithm: algorithm.to_string(),
        phase,
        reason: error.to_string(),
    }
}
