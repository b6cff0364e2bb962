//! Progress reporting and cooperative cancellation.
//!
//! The benchmark itself is strictly sequential; the only concurrency
//! surface is the one-way channel defined here. The runner (producer)
//! posts one event per completed algorithm, a foreground consumer renders
//! them, and no mutable benchmark state crosses the boundary.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::sync::Arc;

/// One progress update from the runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressEvent {
    /// Name of the algorithm that just finished (successfully or not).
    pub algorithm: String,
    /// Number of algorithms processed so far, including this one.
    pub completed: usize,
    /// Total number of algorithms submitted to the run.
    pub total: usize,
}

impl ProgressEvent {
    /// Percentage complete in `[0, 100]`.
    #[must_use]
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 100.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let ratio = self.completed as f64 / self.total as f64;
        ratio * 100.0
    }
}

/// Sending half of the progress channel, held by the runner.
#[derive(Debug, Clone)]
pub struct ProgressSender {
    tx: mpsc::Sender<ProgressEvent>,
}

impl ProgressSender {
    /// Posts an event. A disconnected consumer is not an error — progress
    /// reporting is best-effort and never aborts a measurement.
    pub fn post(&self, event: ProgressEvent) {
        let _ = self.tx.send(event);
    }
}

/// Receiving half of the progress channel.
pub type ProgressReceiver = mpsc::Receiver<ProgressEvent>;

/// Creates a one-way progress channel.
#[must_use]
pub fn progress_channel() -> (ProgressSender, ProgressReceiver) {
    let (tx, rx) = mpsc::channel();
    (ProgressSender { tx }, rx)
}

/// Cooperative cancellation flag shared between a controller and the
/// runner.
///
/// The runner checks the token only *between* algorithms, never
/// mid-measurement, and a cancelled run keeps every record collected up to
/// that point.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    /// Creates a fresh, uncancelled token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation. Idempotent.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Whether cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}
