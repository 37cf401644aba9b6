//! Environment driver for GradMaze.
//!
//! [`MazeEnv`] owns a simulation engine and drives it through the episode
//! lifecycle: on [`reset`](MazeEnv::reset) a world generator rebuilds the
//! maze, on every [`step`](MazeEnv::step) the engine advances and a reward
//! shaper rewrites the reward. Both strategies are injected, so any
//! [`WorldGenerator`](gradmaze_gen::WorldGenerator) and
//! [`RewardShaper`](gradmaze_reward::RewardShaper) can be combined.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod env;
pub mod error;
pub mod metrics;

pub use env::{gradient_maze, gradient_maze_with, GradientMazeEnv, MazeEnv};
pub use error::EnvError;
pub use metrics::StepMetrics;
