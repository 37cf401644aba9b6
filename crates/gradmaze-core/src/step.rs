//! Per-step results and episode progress.

use crate::info::Info;
use crate::observation::Observation;

/// Outcome of a single environment step.
///
/// Produced by the engine, amended by the reward shaper, and handed to
/// the caller. Nothing retains it past the step call.
#[derive(Clone, Debug, PartialEq)]
pub struct StepResult {
    /// Frame rendered after the action was applied.
    pub observation: Observation,
    /// Scalar reward for this step.
    pub reward: f64,
    /// Whether the episode reached a terminal state.
    pub terminated: bool,
    /// Whether the episode was cut short by the step limit.
    pub truncated: bool,
    /// Auxiliary engine information.
    pub info: Info,
}

impl StepResult {
    /// Whether the episode is over, for either reason.
    pub fn is_done(&self) -> bool {
        self.terminated || self.truncated
    }
}

/// How far the current episode has progressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EpisodeProgress {
    /// Steps taken so far, including the one being shaped.
    pub step_count: u32,
    /// Step limit after which the engine truncates the episode.
    pub max_episode_steps: u32,
}

impl EpisodeProgress {
    /// Create a progress marker.
    pub fn new(step_count: u32, max_episode_steps: u32) -> Self {
        Self {
            step_count,
            max_episode_steps,
        }
    }

    /// Fraction of the episode elapsed; `0.0` when the limit is zero.
    pub fn fraction(&self) -> f64 {
        if self.max_episode_steps == 0 {
            return 0.0;
        }
        f64::from(self.step_count) / f64::from(self.max_episode_steps)
    }

    /// Whether the step limit has been reached.
    pub fn at_limit(&self) -> bool {
        self.step_count >= self.max_episode_steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observation::ObsShape;

    #[test]
    fn fraction_bounds() {
        assert_eq!(EpisodeProgress::new(0, 100).fraction(), 0.0);
        assert_eq!(EpisodeProgress::new(50, 100).fraction(), 0.5);
        assert_eq!(EpisodeProgress::new(100, 100).fraction(), 1.0);
        assert_eq!(EpisodeProgress::new(5, 0).fraction(), 0.0);
    }

    #[test]
    fn limit_detection() {
        assert!(!EpisodeProgress::new(99, 100).at_limit());
        assert!(EpisodeProgress::new(100, 100).at_limit());
    }

    #[test]
    fn done_when_either_flag_set() {
        let obs = Observation::filled(ObsShape::new(1, 1), 0).unwrap();
        let mut step = StepResult {
            observation: obs,
            reward: 0.0,
            terminated: false,
            truncated: false,
            info: Info::new(),
        };
        assert!(!step.is_done());
        step.truncated = true;
        assert!(step.is_done());
    }
}
