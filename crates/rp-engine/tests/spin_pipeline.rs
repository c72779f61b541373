//! End-to-end spin pipeline tests: request → debit → motion → evaluation →
//! credit, with deterministic timing on a paused clock.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use rp_core::{GridGeometry, GridSpec, SpinTiming, classic_card_set};
use rp_engine::{
    AudioCues, PlayerLedger, ReelGrid, ScriptedReels, SharedScene, SpinAffordance, SpinError,
    SpinOrchestrator, SpinOutcome, TimerService, WinEvaluator, grid_from_rows, shared_scene,
};

#[derive(Clone)]
struct RecordingAudio(Arc<Mutex<Vec<String>>>);

impl AudioCues for RecordingAudio {
    fn play_cue(&self, key: &str) {
        self.0.lock().push(key.to_string());
    }
}

struct Harness {
    orchestrator: SpinOrchestrator<ScriptedReels, SharedScene, RecordingAudio>,
    scene: SharedScene,
    cues: Arc<Mutex<Vec<String>>>,
    timer: TimerService,
}

fn harness(balance: u64, timing: SpinTiming, reels: ScriptedReels) -> Harness {
    let scene = shared_scene();
    let cues = Arc::new(Mutex::new(Vec::new()));
    let timer = TimerService::new();
    let evaluator = WinEvaluator::new(
        GridSpec::classic_3x3(),
        timing,
        scene.clone(),
        RecordingAudio(Arc::clone(&cues)),
        timer.clone(),
    );
    let orchestrator = SpinOrchestrator::new(
        reels,
        PlayerLedger::new(balance),
        evaluator,
        timer.clone(),
        timing,
    );
    Harness {
        orchestrator,
        scene,
        cues,
        timer,
    }
}

fn two_line_reels() -> ScriptedReels {
    let catalog = classic_card_set();
    let grid = grid_from_rows(
        &catalog,
        &GridSpec::classic_3x3(),
        &[
            &["h2", "h2", "h2"],
            &["king", "queen", "jack"],
            &["h2", "h2", "h2"],
        ],
        "nine",
    )
    .unwrap();
    let mut reels = ScriptedReels::classic(catalog, 99);
    reels.queue_grid(grid);
    reels
}

fn losing_reels() -> ScriptedReels {
    let catalog = classic_card_set();
    let grid = grid_from_rows(
        &catalog,
        &GridSpec::classic_3x3(),
        &[
            &["h2", "king", "h2"],
            &["king", "queen", "jack"],
            &["ten", "nine", "ten"],
        ],
        "nine",
    )
    .unwrap();
    let mut reels = ScriptedReels::classic(catalog, 99);
    reels.queue_grid(grid);
    reels
}

#[tokio::test(start_paused = true)]
async fn full_spin_paces_motion_and_highlights() {
    let mut h = harness(100, SpinTiming::normal(), two_line_reels());

    let started = tokio::time::Instant::now();
    let outcome = h.orchestrator.on_spin_requested().await.unwrap();

    assert_eq!(
        outcome,
        SpinOutcome::Completed {
            payout: 54,
            total_winnings: 54,
        }
    );
    // 2000ms spin + two sequential 2000ms highlight holds.
    assert_eq!(started.elapsed(), Duration::from_millis(6000));
    assert_eq!(h.orchestrator.balance(), 153);
    assert_eq!(*h.cues.lock(), vec!["click", "win", "win"]);
    assert_eq!(h.orchestrator.affordance(), SpinAffordance::Ready);
}

#[tokio::test]
async fn losing_spin_costs_exactly_the_bet() {
    let mut h = harness(100, SpinTiming::instant(), losing_reels());
    let outcome = h.orchestrator.on_spin_requested().await.unwrap();
    assert_eq!(
        outcome,
        SpinOutcome::Completed {
            payout: 0,
            total_winnings: 0,
        }
    );
    assert_eq!(h.orchestrator.balance(), 99);
    assert_eq!(*h.cues.lock(), vec!["click"]);
    // Nothing was drawn: no win display, no markers.
    assert!(h.scene.lock().is_empty());
}

#[tokio::test]
async fn rejected_spin_leaves_all_state_untouched() {
    let mut h = harness(0, SpinTiming::instant(), two_line_reels());
    let outcome = h.orchestrator.on_spin_requested().await.unwrap();
    assert_eq!(outcome, SpinOutcome::InsufficientFunds);
    assert_eq!(h.orchestrator.balance(), 0);
    assert_eq!(h.orchestrator.evaluator().total(), 0);
    assert!(h.cues.lock().is_empty());
    assert!(h.scene.lock().is_empty());
}

#[tokio::test]
async fn reentrant_request_is_ignored() {
    let mut h = harness(100, SpinTiming::instant(), two_line_reels());
    h.orchestrator.reels_mut().begin_motion();
    let outcome = h.orchestrator.on_spin_requested().await.unwrap();
    assert_eq!(outcome, SpinOutcome::AlreadySpinning);
    assert_eq!(h.orchestrator.balance(), 100);
    assert_eq!(h.orchestrator.evaluator().total(), 0);
}

#[tokio::test]
async fn stabilization_failure_leaves_recoverable_state() {
    let catalog = classic_card_set();
    let mut reels = ScriptedReels::classic(catalog, 1);
    reels.queue_failure("encoder glitch");
    let mut h = harness(100, SpinTiming::instant(), reels);

    let err = h.orchestrator.on_spin_requested().await.unwrap_err();
    assert!(matches!(err, SpinError::Reels(_)));
    assert_eq!(h.orchestrator.affordance(), SpinAffordance::Ready);

    // The next request goes through: the stub falls back to a random grid.
    let outcome = h.orchestrator.on_spin_requested().await.unwrap();
    assert!(matches!(outcome, SpinOutcome::Completed { .. }));
}

#[tokio::test(start_paused = true)]
async fn teardown_mid_spin_cancels_and_recovers() {
    let mut h = harness(100, SpinTiming::normal(), two_line_reels());

    let shutdown = {
        let timer = h.timer.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(500)).await;
            timer.shutdown();
        })
    };

    let err = h.orchestrator.on_spin_requested().await.unwrap_err();
    assert!(matches!(err, SpinError::Cancelled(_)));
    assert_eq!(h.orchestrator.affordance(), SpinAffordance::Ready);
    // No marker or display survives the cancelled spin.
    assert!(h.scene.lock().is_empty());
    shutdown.await.unwrap();
}

#[tokio::test]
async fn winnings_accumulate_across_spins_until_reset() {
    let catalog = classic_card_set();
    let spec = GridSpec::classic_3x3();
    let win_grid = grid_from_rows(
        &catalog,
        &spec,
        &[
            &["ace", "ace", "ace"],
            &["king", "queen", "jack"],
            &["ten", "nine", "ten"],
        ],
        "nine",
    )
    .unwrap();
    let mut reels = ScriptedReels::classic(catalog, 99);
    reels.queue_grid(win_grid.clone());
    reels.queue_grid(win_grid);
    let mut h = harness(100, SpinTiming::instant(), reels);

    let first = h.orchestrator.on_spin_requested().await.unwrap();
    let second = h.orchestrator.on_spin_requested().await.unwrap();
    assert_eq!(
        first,
        SpinOutcome::Completed {
            payout: 18,
            total_winnings: 18,
        }
    );
    assert_eq!(
        second,
        SpinOutcome::Completed {
            payout: 18,
            total_winnings: 36,
        }
    );

    h.orchestrator.evaluator_mut().reset_display();
    assert_eq!(h.orchestrator.evaluator().total(), 0);
    assert!(h.scene.lock().is_empty());
}

#[tokio::test]
async fn missing_geometry_still_pays_out() {
    let catalog = classic_card_set();
    let spec = GridSpec::classic_3x3();
    let grid = grid_from_rows(
        &catalog,
        &spec,
        &[
            &["h2", "h2", "h2"],
            &["king", "queen", "jack"],
            &["ten", "nine", "ten"],
        ],
        "nine",
    )
    .unwrap();
    // No geometry attached: highlights fail, payout must not.
    let mut reels = ScriptedReels::new(spec, catalog, 5);
    reels.queue_grid(grid);
    let mut h = harness(100, SpinTiming::instant(), reels);

    let outcome = h.orchestrator.on_spin_requested().await.unwrap();
    assert_eq!(
        outcome,
        SpinOutcome::Completed {
            payout: 27,
            total_winnings: 27,
        }
    );
    assert_eq!(h.orchestrator.balance(), 100 - 1 + 27);
}

#[tokio::test]
async fn outcome_serializes_for_capture() {
    let mut h = harness(100, SpinTiming::instant(), two_line_reels());
    let outcome = h.orchestrator.on_spin_requested().await.unwrap();
    let json = serde_json::to_string(&outcome).unwrap();
    let back: SpinOutcome = serde_json::from_str(&json).unwrap();
    assert_eq!(back, outcome);
}

#[tokio::test]
async fn classic_geometry_is_available_from_the_stub() {
    let reels = ScriptedReels::classic(classic_card_set(), 1);
    let geometry: &GridGeometry = reels.geometry().unwrap();
    assert_eq!(geometry.frames.len(), 3);
}
