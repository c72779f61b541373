//! Cancellable, awaitable delay service
//!
//! Paces spin duration and highlight holds without blocking the event loop.
//! Every delay races a shared shutdown signal, so component teardown cannot
//! leave timers that fire after the state they affect is gone.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use thiserror::Error;
use tokio::sync::broadcast;

/// A pending delay was cancelled by `TimerService::shutdown`
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("timer service shut down")]
pub struct Cancelled;

/// Shared delay service
///
/// Clones share the same shutdown signal. Completion order of concurrently
/// scheduled delays follows wall-clock expiry; delays are otherwise
/// independent.
#[derive(Debug, Clone)]
pub struct TimerService {
    shutdown_tx: broadcast::Sender<()>,
    shut_down: Arc<AtomicBool>,
}

impl TimerService {
    /// Create a new timer service
    pub fn new() -> Self {
        let (shutdown_tx, _) = broadcast::channel(1);
        Self {
            shutdown_tx,
            shut_down: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Suspend the caller for `duration`, or fail early on shutdown
    pub async fn delay(&self, duration: Duration) -> Result<(), Cancelled> {
        // Subscribe before checking the flag so a shutdown racing this call
        // is observed either way.
        let mut shutdown_rx = self.shutdown_tx.subscribe();
        if self.is_shut_down() {
            return Err(Cancelled);
        }
        tokio::select! {
            _ = tokio::time::sleep(duration) => Ok(()),
            _ = shutdown_rx.recv() => Err(Cancelled),
        }
    }

    /// Cancel all pending delays; subsequent delays fail immediately
    pub fn shutdown(&self) {
        self.shut_down.store(true, Ordering::SeqCst);
        // Send fails when nothing is pending, which is fine.
        let _ = self.shutdown_tx.send(());
    }

    /// True once `shutdown` has been called
    pub fn is_shut_down(&self) -> bool {
        self.shut_down.load(Ordering::SeqCst)
    }
}

impl Default for TimerService {
    fn default() -> Self {
        Self::new()
    }
}
