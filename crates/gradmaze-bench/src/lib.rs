//! Benchmark profiles and utilities for the GradMaze environment.
//!
//! Provides pre-built configurations for benchmarks and examples:
//!
//! - [`reference_config`]: default 80x60 observations
//! - [`hires_config`]: 320x240 observations for stress testing the shaper
//! - [`reference_env`]: gradient maze over a [`MockEngine`]
//! - [`policy_actions`]: deterministic random action sequence via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use gradmaze_core::{Action, EngineOptions, MazeConfig, DEFAULT_LENGTH};
use gradmaze_engine::{gradient_maze_with, EnvError, GradientMazeEnv};
use gradmaze_space::{ActionSpace, Space};
use gradmaze_test_utils::MockEngine;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Reference profile: default length and 80x60 RGB observations.
pub fn reference_config() -> MazeConfig {
    MazeConfig::default()
}

/// Stress profile: 320x240 observations, 16x the reference pixel count.
pub fn hires_config() -> Result<MazeConfig, EnvError> {
    let options = EngineOptions {
        obs_width: 320,
        obs_height: 240,
        ..EngineOptions::default()
    };
    Ok(MazeConfig::with_engine_options(DEFAULT_LENGTH, options)?)
}

/// Gradient maze over a mock engine rendering uniform `fill` frames.
pub fn reference_env(
    config: MazeConfig,
    fill: u8,
) -> Result<GradientMazeEnv<MockEngine>, EnvError> {
    let mut engine = MockEngine::new();
    engine.set_fill(fill);
    gradient_maze_with(config, engine)
}

/// Draw `n` actions uniformly from the action space.
///
/// The same `seed` always yields the same sequence.
pub fn policy_actions(n: usize, seed: u64) -> Vec<Action> {
    let space = ActionSpace::new();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|_| space.sample(&mut rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_validate() {
        reference_config().validate().unwrap();
        let hires = hires_config().unwrap();
        hires.validate().unwrap();
        assert_eq!(hires.engine_options().obs_shape().len(), 320 * 240 * 3);
    }

    #[test]
    fn reference_env_runs_an_episode() {
        let mut env = reference_env(reference_config(), 10).unwrap();
        env.reset(Some(1)).unwrap();
        let mut done = false;
        for action in policy_actions(100, 1) {
            done = env.step(action).unwrap().is_done();
        }
        assert!(done);
    }

    #[test]
    fn policy_actions_deterministic() {
        assert_eq!(policy_actions(50, 42), policy_actions(50, 42));
        assert_ne!(policy_actions(50, 42), policy_actions(50, 43));
    }
}
