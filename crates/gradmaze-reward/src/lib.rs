//! Reward shaping for the GradMaze environment.
//!
//! A [`RewardShaper`] post-processes the engine's raw step result once
//! per step. The reference shaper, [`GradientMazeShaper`], adds two terms
//! to the engine's base reward:
//!
//! 1. [`decay_term`]: `-0.2 * step_count / max_episode_steps`, a penalty
//!    growing from 0 to -0.2 over the episode.
//! 2. [`brightness_term`]: the unnormalized mean pixel intensity of the
//!    observation, rewarding the agent for facing brighter regions.
//!
//! The brightness term operates at raw `0..=255` scale and dominates the
//! decay term. That imbalance is deliberate and is not normalized away.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod shaper;
pub mod terms;

pub use shaper::{GradientMazeShaper, RewardShaper};
pub use terms::{brightness_term, decay_term, DECAY_SCALE};
