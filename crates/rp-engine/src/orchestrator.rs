//! Spin orchestration: guard, debit, pace, evaluate, credit

use serde::{Deserialize, Serialize};

use rp_core::SpinTiming;

use crate::audio::{AudioCues, CUE_CLICK};
use crate::error::SpinError;
use crate::evaluator::WinEvaluator;
use crate::ledger::PlayerLedger;
use crate::reels::ReelGrid;
use crate::scene::SceneContainer;
use crate::timer::TimerService;

/// Interactive state of the spin trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpinAffordance {
    /// Accepting spin requests
    Ready,
    /// A spin is in flight
    Busy,
}

/// Result of a spin request
///
/// Guarded no-ops are values, not errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpinOutcome {
    /// The spin ran to completion
    Completed {
        /// Amount credited for this spin
        payout: u64,
        /// Evaluator's cumulative running total after the spin
        total_winnings: u64,
    },
    /// Request ignored: reels already in motion
    AlreadySpinning,
    /// Request ignored: balance below the bet
    InsufficientFunds,
}

/// Session accounting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub spins: u64,
    pub wagered: u64,
    pub won: u64,
}

impl SessionStats {
    /// Return-to-player percentage for the session
    pub fn rtp(&self) -> f64 {
        if self.wagered > 0 {
            (self.won as f64 / self.wagered as f64) * 100.0
        } else {
            0.0
        }
    }
}

/// Drives a spin from request to payout
///
/// The sole entry point is `on_spin_requested`. A request while the reels
/// report motion, or one the ledger cannot fund, is a logged no-op. The
/// canonical payout source is the evaluator's running-total delta for the
/// call; the reel subsystem never supplies a competing figure.
pub struct SpinOrchestrator<R: ReelGrid, S: SceneContainer, A: AudioCues> {
    reels: R,
    ledger: PlayerLedger,
    evaluator: WinEvaluator<S, A>,
    timer: TimerService,
    timing: SpinTiming,
    bet: u64,
    affordance: SpinAffordance,
    stats: SessionStats,
}

impl<R: ReelGrid, S: SceneContainer, A: AudioCues> SpinOrchestrator<R, S, A> {
    /// Create an orchestrator with a one-credit bet
    pub fn new(
        reels: R,
        ledger: PlayerLedger,
        evaluator: WinEvaluator<S, A>,
        timer: TimerService,
        timing: SpinTiming,
    ) -> Self {
        Self {
            reels,
            ledger,
            evaluator,
            timer,
            timing,
            bet: 1,
            affordance: SpinAffordance::Ready,
            stats: SessionStats::default(),
        }
    }

    /// Override the per-spin bet
    pub fn with_bet(mut self, bet: u64) -> Self {
        self.bet = bet;
        self
    }

    /// Current balance
    pub fn balance(&self) -> u64 {
        self.ledger.balance()
    }

    /// Interactive state of the spin trigger
    pub fn affordance(&self) -> SpinAffordance {
        self.affordance
    }

    /// Session accounting so far
    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// The owned evaluator
    pub fn evaluator(&self) -> &WinEvaluator<S, A> {
        &self.evaluator
    }

    /// Mutable evaluator access (e.g., for `reset_display`)
    pub fn evaluator_mut(&mut self) -> &mut WinEvaluator<S, A> {
        &mut self.evaluator
    }

    /// Mutable reel access (scripting, teardown)
    pub fn reels_mut(&mut self) -> &mut R {
        &mut self.reels
    }

    /// Handle a player spin request
    pub async fn on_spin_requested(&mut self) -> Result<SpinOutcome, SpinError> {
        if self.reels.is_spinning() {
            log::info!("spin requested while reels are spinning, ignoring");
            return Ok(SpinOutcome::AlreadySpinning);
        }
        if !self.ledger.debit(self.bet) {
            log::info!("insufficient balance to place bet");
            return Ok(SpinOutcome::InsufficientFunds);
        }

        self.affordance = SpinAffordance::Busy;
        self.evaluator.audio().play_cue(CUE_CLICK);
        let result = self.run_spin().await;
        // The trigger must recover even when the spin fails mid-flight.
        self.affordance = SpinAffordance::Ready;
        result
    }

    async fn run_spin(&mut self) -> Result<SpinOutcome, SpinError> {
        self.stats.spins += 1;
        self.stats.wagered += self.bet;

        self.reels.begin_motion();
        self.timer.delay(self.timing.spin_duration()).await?;
        let grid = self.reels.stop_motion().await?;

        let before = self.evaluator.total();
        let total_winnings = self.evaluator.evaluate(&grid, self.reels.geometry()).await?;
        let payout = total_winnings.saturating_sub(before);

        self.ledger.credit(payout);
        self.stats.won += payout;
        log::info!(
            "spin {} complete: payout {payout}, running winnings {total_winnings}",
            self.stats.spins
        );

        Ok(SpinOutcome::Completed {
            payout,
            total_winnings,
        })
    }
}
