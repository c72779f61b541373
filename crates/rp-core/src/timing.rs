//! Presentation timing profiles for the spin pipeline

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Durations pacing a spin and its win presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpinTiming {
    /// Fixed reel-motion duration before the stop is requested (ms)
    pub spin_duration_ms: u64,
    /// Hold duration of each win-line highlight (ms)
    pub highlight_hold_ms: u64,
}

impl SpinTiming {
    /// Normal gameplay timing
    pub fn normal() -> Self {
        Self {
            spin_duration_ms: 2000,
            highlight_hold_ms: 2000,
        }
    }

    /// Fast mode
    pub fn turbo() -> Self {
        Self {
            spin_duration_ms: 500,
            highlight_hold_ms: 500,
        }
    }

    /// Zero-delay profile for tests and demos
    pub fn instant() -> Self {
        Self {
            spin_duration_ms: 0,
            highlight_hold_ms: 0,
        }
    }

    /// Scale both durations by a factor (< 1.0 = faster)
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            spin_duration_ms: (self.spin_duration_ms as f64 * factor) as u64,
            highlight_hold_ms: (self.highlight_hold_ms as f64 * factor) as u64,
        }
    }

    /// Spin duration as a `Duration`
    pub fn spin_duration(&self) -> Duration {
        Duration::from_millis(self.spin_duration_ms)
    }

    /// Highlight hold as a `Duration`
    pub fn highlight_hold(&self) -> Duration {
        Duration::from_millis(self.highlight_hold_ms)
    }
}

impl Default for SpinTiming {
    fn default() -> Self {
        Self::normal()
    }
}
