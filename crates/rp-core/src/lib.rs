//! # rp-core — Shared slot domain types for Reelplay
//!
//! Foundational types consumed by the spin pipeline: the symbol catalog,
//! the stabilized symbol grid with its visible-window rules, reel geometry
//! for overlay placement, and presentation timing profiles.
//!
//! ```text
//! GridSpec (reels × rows + padding)
//!     │
//!     ├── SymbolGrid   (reel-major symbols, padding included)
//!     ├── GridGeometry (pixel frames for highlight placement)
//!     └── SpinTiming   (spin / highlight-hold durations)
//! ```

pub mod geometry;
pub mod grid;
pub mod symbols;
pub mod timing;

pub use geometry::*;
pub use grid::*;
pub use symbols::*;
pub use timing::*;
