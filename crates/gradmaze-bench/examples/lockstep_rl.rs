//! End-to-end lockstep RL loop example.
//!
//! Demonstrates: build config → MazeEnv → reset → sample actions → step →
//! read shaped rewards → reset → repeat.
//!
//! Run with `RUST_LOG=debug` to see per-step reward terms.

use anyhow::Context;
use gradmaze_bench::{policy_actions, reference_config, reference_env};
use gradmaze_core::Action;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("=== GradMaze Lockstep RL Example ===\n");

    let mut env = reference_env(reference_config(), 0).context("building environment")?;

    // --- Episode 1: random policy on black frames ---
    println!("Episode 1: random policy until truncation");
    let (obs, info) = env.reset(Some(42))?;
    println!("  initial frame {} info={:?}", obs.shape(), info);

    for (i, action) in policy_actions(100, 42).into_iter().enumerate() {
        let step = env.step(action)?;
        if i % 25 == 0 || step.is_done() {
            println!(
                "  step {:>3}: action={:<12} reward={:>8.4} return={:>8.4} time={:>4}μs",
                env.step_count(),
                action.name(),
                step.reward,
                env.episode_return(),
                env.last_metrics().total_us,
            );
        }
        if step.is_done() {
            break;
        }
    }

    // --- Episode 2: brighter frames raise the reward ---
    println!("\nResetting with a brighter scene...");
    env.engine_mut().set_fill(50);
    env.reset(Some(99))?;

    println!("Episode 2: always move forward");
    loop {
        let step = env.step(Action::MoveForward)?;
        if step.is_done() {
            println!(
                "  final step {}: reward={:.4} (base + decay + brightness), return={:.2}",
                env.step_count(),
                step.reward,
                env.episode_return(),
            );
            break;
        }
    }

    println!("\nEpisodes run: {}", env.episodes());
    println!("Done.");
    Ok(())
}
