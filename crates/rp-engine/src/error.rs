//! Error types for the spin pipeline

use thiserror::Error;

use rp_core::GridError;

use crate::timer::Cancelled;

/// Reel subsystem failures surfaced through the `ReelGrid` contract
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReelError {
    /// Stabilization failed while stopping motion
    #[error("reels failed to stabilize: {reason}")]
    StopFailed { reason: String },
}

/// Win-line highlight failures
///
/// Contained at the evaluation boundary: a highlight failure never rolls
/// back the already-committed running total.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HighlightError {
    /// Reel geometry absent or missing the requested slot
    #[error("reel geometry unavailable for highlight placement")]
    MissingGeometry,

    /// Row index outside the visible window
    #[error("row {row} out of range for {rows} visible rows")]
    RowOutOfRange { row: usize, rows: u8 },

    /// Timer shut down mid-hold
    #[error("highlight hold cancelled")]
    Cancelled(#[from] Cancelled),
}

/// Spin pipeline failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpinError {
    /// Spin pacing delay cancelled by teardown
    #[error("spin cancelled")]
    Cancelled(#[from] Cancelled),

    /// Reel subsystem failure
    #[error(transparent)]
    Reels(#[from] ReelError),

    /// Malformed stabilized grid
    #[error(transparent)]
    Grid(#[from] GridError),
}
