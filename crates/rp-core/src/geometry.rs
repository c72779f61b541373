//! Reel geometry used for win-line overlay placement

use serde::{Deserialize, Serialize};

/// Pixel frame of a single reel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReelFrame {
    /// Horizontal position of the reel's left edge
    pub x: f64,
    /// Vertical position of the reel's top edge
    pub y: f64,
    /// Vertical offset of every raw slot on the reel, padding included
    pub symbol_offsets: Vec<f64>,
}

/// Geometry of the whole reel board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridGeometry {
    /// One frame per reel, left to right
    pub frames: Vec<ReelFrame>,
    /// Width of a reel in pixels
    pub reel_width: f64,
    /// Height of a single symbol cell in pixels
    pub symbol_height: f64,
}

impl GridGeometry {
    /// Layout of the classic 3×3 board: origin 324/95, 125×105 cells,
    /// slots stacked at regular intervals.
    pub fn classic_3x3() -> Self {
        let reel_width = 125.0;
        let symbol_height = 105.0;
        let frames = (0..3)
            .map(|reel| ReelFrame {
                x: 324.0 + reel as f64 * reel_width,
                y: 95.0,
                symbol_offsets: (0..5).map(|slot| slot as f64 * symbol_height).collect(),
            })
            .collect();
        Self {
            frames,
            reel_width,
            symbol_height,
        }
    }

    /// Left edge of the first reel
    pub fn left_edge(&self) -> Option<f64> {
        self.frames.first().map(|f| f.x)
    }

    /// Right edge of the last reel
    pub fn right_edge(&self) -> Option<f64> {
        self.frames.last().map(|f| f.x + self.reel_width)
    }
}
