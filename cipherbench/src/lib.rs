//! CipherBench — cipher benchmarking and ranking
//!
//! CipherBench measures interchangeable cipher implementations across
//! speed, diffusion, randomness, and key strength, rescales the
//! heterogeneous raw metrics onto one comparable `[0, 10]` scale, and
//! recommends the best algorithm per usage profile (overall, speed,
//! security, small files, large files).
//!
//! Concrete ciphers are external: anything implementing
//! [`CipherCapability`] participates, whether it is a block cipher, a
//! stream cipher, a public-key scheme, or a password-derived scheme.
//!
//! # Quick start
//!
//! ```rust
//! use cipherbench::{run_benchmark, BenchConfig, CipherCapability, CipherResult};
//!
//! // A toy capability; real providers wrap an actual cipher library.
//! struct AddOne;
//!
//! impl CipherCapability for AddOne {
//!     fn encrypt(&self, plaintext: &[u8]) -> CipherResult<Vec<u8>> {
//!         Ok(plaintext.iter().map(|b| b.wrapping_add(1)).collect())
//!     }
//!     fn decrypt(&self, ciphertext: &[u8]) -> CipherResult<Vec<u8>> {
//!         Ok(ciphertext.iter().map(|b| b.wrapping_sub(1)).collect())
//!     }
//!     fn key_length_bits(&self) -> u32 {
//!         8
//!     }
//!     fn name(&self) -> &str {
//!         "add-one"
//!     }
//! }
//!
//! let ciphers: Vec<Box<dyn CipherCapability>> = vec![Box::new(AddOne)];
//! let corpus = vec![0x42u8; 4096];
//! let report = run_benchmark(&ciphers, &corpus, &BenchConfig::new())?;
//!
//! // Single participant: every normalized score is the 5.0 midpoint.
//! let best = report.ranking.best_overall().expect("one record");
//! assert_eq!(best.name(), "add-one");
//! # Ok::<(), cipherbench::BenchError>(())
//! ```
//!
//! # Progress and cancellation
//!
//! ```rust,ignore
//! use cipherbench::{progress_channel, run_benchmark_with, BenchConfig, CancelToken};
//!
//! let (tx, rx) = progress_channel();
//! let cancel = CancelToken::new();
//!
//! // Consumer renders percentage-complete; no benchmark state crosses
//! // this boundary.
//! std::thread::spawn(move || {
//!     for event in rx {
//!         println!("{:>5.1}% {}", event.percent(), event.algorithm);
//!     }
//! });
//!
//! let report = run_benchmark_with(&ciphers, &corpus, &BenchConfig::new(),
//!     Some(&tx), Some(&cancel))?;
//! ```
//!
//! # Reporting
//!
//! Rendered output goes through an explicit [`ReportSink`]:
//!
//! ```rust,ignore
//! use cipherbench::report::{write_comparison, write_recommendations, WriterSink};
//!
//! let mut sink = WriterSink::new(std::io::stdout().lock());
//! write_comparison(&mut sink, &report.ranking)?;
//! write_recommendations(&mut sink, &report.ranking)?;
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::info;

pub use bench_core::{
    BenchConfig, BenchError, CipherCapability, CipherError, CipherResult, MeasurementPhase,
    MetricRecord, NormalizedScores, ReportSink, Result, ScoreWeights, ScoredRecord, UsageProfile,
};
pub use bench_engine::report;
pub use bench_engine::{
    progress_channel, BenchmarkRunner, CancelToken, Evaluator, MeasurementFailure, ProgressEvent,
    ProgressReceiver, ProgressSender, Ranking, RunOutcome, VecSink, WriterSink, MIDPOINT_SCORE,
    SCORE_SCALE,
};

/// Metadata for one benchmark run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// UTC timestamp taken when the run started.
    pub started_at: DateTime<Utc>,
    /// Size of the input corpus in bytes.
    pub corpus_bytes: usize,
    /// Wall-clock duration of the whole run.
    pub elapsed: Duration,
    /// Number of algorithms that survived measurement.
    pub measured: usize,
    /// Number of algorithms excluded by failure.
    pub failed: usize,
}

/// Finalized output of a benchmark run: the ranked records, the failures,
/// and run metadata. Consumable by any reporting layer.
#[derive(Debug)]
pub struct BenchReport {
    /// Finalized, scored records with per-profile winners.
    pub ranking: Ranking,
    /// Algorithms excluded from the ranking, with causes.
    pub failures: Vec<MeasurementFailure>,
    /// Run metadata.
    pub summary: RunSummary,
    /// Whether the run was cancelled before completing all algorithms.
    pub cancelled: bool,
}

impl BenchReport {
    /// Whether the run produced nothing to rank (all participants failed
    /// or none were submitted). Non-fatal by design.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranking.is_empty()
    }
}

/// Runs the full pipeline: measure every capability sequentially, normalize
/// across the survivors, score, and rank.
///
/// # Errors
/// Returns [`BenchError::EmptyCorpus`] before any measurement for a
/// zero-length corpus and [`BenchError::ConfigurationError`] for invalid
/// weights. Per-algorithm failures do not fail the run; they are returned
/// in the report.
pub fn run_benchmark(
    ciphers: &[Box<dyn CipherCapability>],
    corpus: &[u8],
    config: &BenchConfig,
) -> Result<BenchReport> {
    run_benchmark_with(ciphers, corpus, config, None, None)
}

/// [`run_benchmark`] with an optional progress channel and cancel token.
///
/// Progress events are posted after each algorithm completes; cancellation
/// is cooperative, checked only between algorithms, and preserves the
/// records already collected.
///
/// # Errors
/// Same as [`run_benchmark`].
pub fn run_benchmark_with(
    ciphers: &[Box<dyn CipherCapability>],
    corpus: &[u8],
    config: &BenchConfig,
    progress: Option<&ProgressSender>,
    cancel: Option<&CancelToken>,
) -> Result<BenchReport> {
    config.validate()?;

    let started_at = Utc::now();
    let mut timer = bench_engine::Timer::start();

    let runner = BenchmarkRunner::new(config.clone());
    let outcome = runner.run_all(ciphers, corpus, progress, cancel)?;

    let evaluator = Evaluator::new(config.weights);
    let scored = evaluator.evaluate(outcome.records);
    let ranking = Ranking::new(scored);

    let elapsed = timer.stop();
    info!(
        corpus_bytes = corpus.len(),
        measured = ranking.len(),
        failed = outcome.failures.len(),
        cancelled = outcome.cancelled,
        "benchmark run complete"
    );

    Ok(BenchReport {
        summary: RunSummary {
            started_at,
            corpus_bytes: corpus.len(),
            elapsed,
            measured: ranking.len(),
            failed: outcome.failures.len(),
        },
        failures: outcome.failures,
        ranking,
        cancelled: outcome.cancelled,
    })
}
