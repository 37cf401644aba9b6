//! The two additive shaping terms.

use gradmaze_core::{EpisodeProgress, Observation};

/// Magnitude of the decay penalty at the end of an episode.
pub const DECAY_SCALE: f64 = 0.2;

/// Time-decay penalty: `-0.2 * step_count / max_episode_steps`.
///
/// Zero at step 0, `-0.2` at the step limit, and non-increasing in
/// between. Independent of action and observation. Zero when the limit
/// itself is zero.
pub fn decay_term(progress: EpisodeProgress) -> f64 {
    -DECAY_SCALE * progress.fraction()
}

/// Brightness bonus: the arithmetic mean of every channel value of the
/// observation, at native `0..=255` scale (not divided by 255).
///
/// Reads the buffer only.
pub fn brightness_term(observation: &Observation) -> f64 {
    observation.mean_intensity()
}
