//! Headless spin session demo
//!
//! Run with `RUST_LOG=info cargo run --example demo_spin`.

use rp_core::{GridSpec, SpinTiming, classic_card_set};
use rp_engine::{
    PlayerLedger, ScriptedReels, SilentAudio, SpinOrchestrator, TimerService, WinEvaluator,
    shared_scene,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let catalog = classic_card_set();
    let timer = TimerService::new();
    let timing = SpinTiming::instant();
    let evaluator = WinEvaluator::new(
        GridSpec::classic_3x3(),
        timing,
        shared_scene(),
        SilentAudio,
        timer.clone(),
    );
    let mut orchestrator = SpinOrchestrator::new(
        ScriptedReels::classic(catalog, 2024),
        PlayerLedger::new(100),
        evaluator,
        timer.clone(),
        timing,
    );

    for _ in 0..10 {
        let outcome = orchestrator.on_spin_requested().await?;
        println!("{}", serde_json::to_string(&outcome)?);
    }

    let stats = orchestrator.stats();
    println!(
        "session: {} spins, wagered {}, won {}, rtp {:.1}%",
        stats.spins,
        stats.wagered,
        stats.won,
        stats.rtp()
    );
    println!("final balance: {}", orchestrator.balance());

    timer.shutdown();
    Ok(())
}
