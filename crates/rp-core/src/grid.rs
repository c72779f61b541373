//! Grid specification and the stabilized symbol grid

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::symbols::Symbol;

/// Grid specification (reels × visible rows)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSpec {
    /// Number of reels (columns)
    pub reels: u8,
    /// Number of visible rows per reel
    pub rows: u8,
    /// Scroll-continuity padding symbols at each end of every reel
    pub padding: u8,
}

impl GridSpec {
    /// Classic 3×3 board with one padding symbol above and below
    pub fn classic_3x3() -> Self {
        Self {
            reels: 3,
            rows: 3,
            padding: 1,
        }
    }

    /// Raw symbols each reel must carry (visible rows plus both paddings)
    pub fn window_len(&self) -> usize {
        self.rows as usize + 2 * self.padding as usize
    }

    /// Total visible grid positions
    pub fn visible_positions(&self) -> usize {
        self.reels as usize * self.rows as usize
    }
}

impl Default for GridSpec {
    fn default() -> Self {
        Self::classic_3x3()
    }
}

/// Errors raised for malformed grid input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Grid contains no reels
    #[error("grid contains no reels")]
    Empty,

    /// Reel count differs from the spec
    #[error("expected {expected} reels, got {got}")]
    ReelCountMismatch { expected: u8, got: usize },

    /// A reel's raw symbol count differs from the spec's window
    #[error("reel {reel} has {got} symbols, expected {expected}")]
    WindowMismatch {
        reel: usize,
        expected: usize,
        got: usize,
    },
}

/// A stabilized symbol grid, reel-major, padding rows included
///
/// Produced fresh by the reel subsystem at the end of every spin and
/// read-only afterwards. The visible window is the middle slice of each
/// reel; `visible()` trims the padding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolGrid {
    reels: Vec<Vec<Symbol>>,
}

impl SymbolGrid {
    /// Wrap raw reel columns (padding included) into a grid
    pub fn new(reels: Vec<Vec<Symbol>>) -> Self {
        Self { reels }
    }

    /// Raw reel columns, padding included
    pub fn reels(&self) -> &[Vec<Symbol>] {
        &self.reels
    }

    /// Number of reels
    pub fn reel_count(&self) -> usize {
        self.reels.len()
    }

    /// Validate shape against a spec
    pub fn validate(&self, spec: &GridSpec) -> Result<(), GridError> {
        if self.reels.is_empty() {
            return Err(GridError::Empty);
        }
        if self.reels.len() != spec.reels as usize {
            return Err(GridError::ReelCountMismatch {
                expected: spec.reels,
                got: self.reels.len(),
            });
        }
        let expected = spec.window_len();
        for (reel, column) in self.reels.iter().enumerate() {
            if column.len() != expected {
                return Err(GridError::WindowMismatch {
                    reel,
                    expected,
                    got: column.len(),
                });
            }
        }
        Ok(())
    }

    /// Symbol inside the visible window (padding trimmed)
    ///
    /// Callers must validate first; out-of-range lookups return `None`.
    pub fn visible(&self, spec: &GridSpec, reel: usize, row: usize) -> Option<&Symbol> {
        if row >= spec.rows as usize {
            return None;
        }
        self.reels
            .get(reel)
            .and_then(|column| column.get(spec.padding as usize + row))
    }

    /// All visible symbols at a row, one per reel, left to right
    pub fn visible_row<'a>(&'a self, spec: &GridSpec, row: usize) -> Option<Vec<&'a Symbol>> {
        (0..self.reels.len())
            .map(|reel| self.visible(spec, reel, row))
            .collect()
    }
}
