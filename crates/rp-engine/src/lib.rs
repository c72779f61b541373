//! # rp-engine — Reelplay spin-to-payout pipeline
//!
//! The control core of a reel slot game: guards and initiates a spin against
//! player funds, paces reel motion, evaluates the stabilized symbol grid for
//! winning rows, accrues and credits payout, and drives timed win feedback.
//!
//! Everything runs on a single logical thread of control with cooperative
//! suspension; the only concurrency mechanism is the re-entrancy guard on
//! spin requests.
//!
//! ```text
//! SpinOrchestrator
//!     │  guard → debit → begin motion
//!     ├── TimerService   (cancellable delays)
//!     ├── ReelGrid       (external contract; ScriptedReels stub in-repo)
//!     ├── WinEvaluator   (row matching, running total, highlights)
//!     │       ├── SceneContainer (display + line marker seam)
//!     │       └── AudioCues      (fire-and-forget cue seam)
//!     └── PlayerLedger   (debit / credit)
//! ```

pub mod audio;
pub mod error;
pub mod evaluator;
pub mod ledger;
pub mod orchestrator;
pub mod reels;
pub mod scene;
pub mod timer;

pub use audio::*;
pub use error::*;
pub use evaluator::*;
pub use ledger::*;
pub use orchestrator::*;
pub use reels::*;
pub use scene::*;
pub use timer::*;
