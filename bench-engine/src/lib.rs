//! CipherBench Engine
//!
//! Measurement, normalization, scoring, and ranking for interchangeable
//! cipher implementations.
//!
//! # Pipeline
//!
//! ```text
//! ┌────────────────┐   MetricRecord    ┌───────────────┐  ScoredRecord  ┌─────────┐
//! │ BenchmarkRunner│ ────────────────► │   Evaluator   │ ─────────────► │ Ranking │
//! │  (per cipher)  │   one per         │ min/max scale │  normalized +  │ winners │
//! │                │   algorithm       │ + weighted sum│  total score   │ per use │
//! └────────────────┘                   └───────────────┘                └─────────┘
//! ```
//!
//! The runner drives each [`CipherCapability`](bench_core::CipherCapability)
//! through a fixed single-sample protocol (timed encryption, avalanche bit
//! flip, ciphertext entropy, self-reported key length). The evaluator
//! rescales each raw metric onto `[0, 10]` across the current participant
//! set and folds the scores into one weighted total. The ranking sorts the
//! finalized records and extracts the per-profile winners.
//!
//! Measurement is strictly sequential so one algorithm's timing is never
//! perturbed by another's work; the only concurrency surface is the one-way
//! progress channel in [`progress`].

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

pub mod analysis;
pub mod evaluate;
pub mod progress;
pub mod rank;
pub mod report;
pub mod runner;
pub mod timing;

pub use evaluate::{Evaluator, MIDPOINT_SCORE, SCORE_SCALE};
pub use progress::{progress_channel, CancelToken, ProgressEvent, ProgressReceiver, ProgressSender};
pub use rank::Ranking;
pub use report::{VecSink, WriterSink};
pub use runner::{BenchmarkRunner, MeasurementFailure, RunOutcome, MIN_ELAPSED};
pub use timing::Timer;
