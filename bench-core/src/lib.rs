//! CipherBench Core
//!
//! Data model, capability traits, error types, and configuration shared by
//! every CipherBench crate.
//!
//! The central abstraction is [`CipherCapability`]: a flat behavioral
//! contract (encrypt / decrypt / key length / name) that concrete cipher
//! providers implement. The benchmark engine depends only on this contract
//! and never on provider internals, so block ciphers, stream ciphers,
//! public-key schemes, and password-derived schemes are interchangeable
//! participants.
//!
//! Measurement results flow through two types:
//!
//! - [`MetricRecord`] — raw measurements for one algorithm (milliseconds,
//!   MB/s, bit distance, entropy bits, key bits), produced by the runner.
//! - [`ScoredRecord`] — the finalized record after normalization and
//!   weighted scoring. Once built it is never mutated; a new run produces a
//!   fresh set.
//!
//! # Example
//!
//! ```rust
//! use bench_core::{CipherCapability, CipherResult};
//!
//! /// A toy provider used for illustration only.
//! struct Rot13;
//!
//! impl CipherCapability for Rot13 {
//!     fn encrypt(&self, plaintext: &[u8]) -> CipherResult<Vec<u8>> {
//!         Ok(plaintext.iter().map(|b| b.wrapping_add(13)).collect())
//!     }
//!
//!     fn decrypt(&self, ciphertext: &[u8]) -> CipherResult<Vec<u8>> {
//!         Ok(ciphertext.iter().map(|b| b.wrapping_sub(13)).collect())
//!     }
//!
//!     fn key_length_bits(&self) -> u32 {
//!         0
//!     }
//!
//!     fn name(&self) -> &str {
//!         "ROT13"
//!     }
//! }
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

pub mod config;
pub mod error;
pub mod traits;
pub mod types;

pub use config::{
    BenchConfig, ScoreWeights, DEFAULT_RESOURCE_WEIGHT, DEFAULT_SECURITY_WEIGHT,
    DEFAULT_SPEED_WEIGHT,
};
pub use error::{BenchError, MeasurementPhase, Result};
pub use traits::{CipherCapability, CipherError, CipherResult, ReportSink};
pub use types::{MetricRecord, NormalizedScores, ScoredRecord, UsageProfile};
