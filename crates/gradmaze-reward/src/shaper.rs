//! The reward-shaper trait and the gradient maze shaper.

use gradmaze_core::{EpisodeProgress, StepResult};

use crate::terms::{brightness_term, decay_term};

/// Strategy that augments the engine's raw reward once per step.
///
/// Shapers are pure: the output depends only on the raw step result and
/// the episode progress. They hold no cross-step state.
pub trait RewardShaper {
    /// Human-readable shaper name, used in logs.
    fn name(&self) -> &str;

    /// Return `raw` with its reward replaced by the shaped reward.
    ///
    /// Observation, termination and truncation flags, and info must be
    /// passed through unchanged.
    fn shape(&self, raw: StepResult, progress: EpisodeProgress) -> StepResult;
}

/// Shaper computing `base + decay + brightness`.
///
/// See [`decay_term`] and [`brightness_term`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GradientMazeShaper;

impl GradientMazeShaper {
    /// Create the shaper.
    pub fn new() -> Self {
        Self
    }
}

impl RewardShaper for GradientMazeShaper {
    fn name(&self) -> &str {
        "GradientMazeShaper"
    }

    fn shape(&self, mut raw: StepResult, progress: EpisodeProgress) -> StepResult {
        let base = raw.reward;
        let decay = decay_term(progress);
        let brightness = brightness_term(&raw.observation);
        raw.reward = base + decay + brightness;
        tracing::debug!(
            step = progress.step_count,
            base,
            decay,
            brightness,
            reward = raw.reward,
            "reward shaped"
        );
        raw
    }
}
