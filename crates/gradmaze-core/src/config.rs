//! Environment configuration and validation.
//!
//! [`MazeConfig`] is immutable once built: [`MazeConfig::new`] validates
//! every invariant up front, so an environment never exists in an
//! invalid configuration.

use crate::error::ConfigError;
use crate::observation::ObsShape;

/// Smallest accepted corridor-extent parameter.
pub const MIN_LENGTH: u32 = 2;

/// Corridor-extent parameter used by [`MazeConfig::default`].
pub const DEFAULT_LENGTH: u32 = 12;

/// Fixed episode step limit of the gradient maze.
pub const MAX_EPISODE_STEPS: u32 = 100;

// ── EngineOptions ──────────────────────────────────────────────────

/// Options passed through unchanged to the simulation engine.
#[derive(Clone, Debug, PartialEq)]
pub struct EngineOptions {
    /// Observation width in pixels. Default: 80.
    pub obs_width: u32,
    /// Observation height in pixels. Default: 60.
    pub obs_height: u32,
    /// Distance covered by one `MoveForward`. Default: 0.15.
    pub forward_step: f32,
    /// Rotation applied by one turn action, in degrees. Default: 15.
    pub turn_step_deg: f32,
    /// Whether the engine randomizes lighting and physics per episode.
    /// Default: false.
    pub domain_rand: bool,
    /// Episode step limit enforced by the engine's truncation logic.
    /// Always overwritten with [`MAX_EPISODE_STEPS`] by [`MazeConfig`].
    pub max_episode_steps: u32,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            obs_width: 80,
            obs_height: 60,
            forward_step: 0.15,
            turn_step_deg: 15.0,
            domain_rand: false,
            max_episode_steps: MAX_EPISODE_STEPS,
        }
    }
}

impl EngineOptions {
    /// Shape of the observations the engine is asked to render.
    pub fn obs_shape(&self) -> ObsShape {
        ObsShape::new(self.obs_height, self.obs_width)
    }

    /// Validate structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.obs_width == 0 || self.obs_height == 0 {
            return Err(ConfigError::InvalidObsShape {
                width: self.obs_width,
                height: self.obs_height,
            });
        }
        if !self.forward_step.is_finite() || self.forward_step <= 0.0 {
            return Err(ConfigError::InvalidStepSize {
                name: "forward_step",
                value: self.forward_step,
            });
        }
        if !self.turn_step_deg.is_finite() || self.turn_step_deg <= 0.0 {
            return Err(ConfigError::InvalidStepSize {
                name: "turn_step_deg",
                value: self.turn_step_deg,
            });
        }
        if self.max_episode_steps == 0 {
            return Err(ConfigError::ZeroEpisodeSteps);
        }
        Ok(())
    }
}

// ── MazeConfig ─────────────────────────────────────────────────────

/// Per-environment configuration of the gradient maze.
#[derive(Clone, Debug, PartialEq)]
pub struct MazeConfig {
    length: u32,
    engine: EngineOptions,
}

impl MazeConfig {
    /// Build a configuration with default engine options.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::LengthTooShort`] if `length < 2`.
    pub fn new(length: u32) -> Result<Self, ConfigError> {
        Self::with_engine_options(length, EngineOptions::default())
    }

    /// Build a configuration with explicit engine options.
    ///
    /// `engine.max_episode_steps` is replaced with the fixed limit.
    pub fn with_engine_options(length: u32, engine: EngineOptions) -> Result<Self, ConfigError> {
        let config = Self {
            length,
            engine: EngineOptions {
                max_episode_steps: MAX_EPISODE_STEPS,
                ..engine
            },
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate all invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.length < MIN_LENGTH {
            return Err(ConfigError::LengthTooShort {
                length: self.length,
                min: MIN_LENGTH,
            });
        }
        self.engine.validate()
    }

    /// Corridor-extent parameter. Retained for future layouts; the
    /// current cross geometry does not scale with it.
    pub fn length(&self) -> u32 {
        self.length
    }

    /// Episode step limit (always [`MAX_EPISODE_STEPS`]).
    pub fn max_episode_steps(&self) -> u32 {
        self.engine.max_episode_steps
    }

    /// Options forwarded to the engine.
    pub fn engine_options(&self) -> &EngineOptions {
        &self.engine
    }
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            engine: EngineOptions::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn default_is_valid() {
        let config = MazeConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.length(), 12);
        assert_eq!(config.max_episode_steps(), 100);
        assert_eq!(config.engine_options().obs_shape(), ObsShape::new(60, 80));
    }

    #[test]
    fn length_below_two_rejected() {
        for length in [0, 1] {
            assert_eq!(
                MazeConfig::new(length),
                Err(ConfigError::LengthTooShort { length, min: 2 })
            );
        }
    }

    #[test]
    fn episode_limit_is_fixed() {
        let opts = EngineOptions {
            max_episode_steps: 7,
            ..EngineOptions::default()
        };
        let config = MazeConfig::with_engine_options(4, opts).unwrap();
        assert_eq!(config.max_episode_steps(), MAX_EPISODE_STEPS);
    }

    #[test]
    fn zero_obs_dimension_rejected() {
        let opts = EngineOptions {
            obs_height: 0,
            ..EngineOptions::default()
        };
        assert!(matches!(
            MazeConfig::with_engine_options(12, opts),
            Err(ConfigError::InvalidObsShape { height: 0, .. })
        ));
    }

    #[test]
    fn bad_step_sizes_rejected() {
        let opts = EngineOptions {
            forward_step: f32::NAN,
            ..EngineOptions::default()
        };
        assert!(matches!(
            opts.validate(),
            Err(ConfigError::InvalidStepSize {
                name: "forward_step",
                ..
            })
        ));
        let opts = EngineOptions {
            turn_step_deg: -15.0,
            ..EngineOptions::default()
        };
        assert!(matches!(
            opts.validate(),
            Err(ConfigError::InvalidStepSize {
                name: "turn_step_deg",
                ..
            })
        ));
    }

    #[test]
    fn zero_episode_limit_rejected() {
        let opts = EngineOptions {
            max_episode_steps: 0,
            ..EngineOptions::default()
        };
        assert_eq!(opts.validate(), Err(ConfigError::ZeroEpisodeSteps));
    }

    proptest! {
        #[test]
        fn every_valid_length_constructs(length in MIN_LENGTH..10_000u32) {
            let config = MazeConfig::new(length);
            prop_assert!(config.is_ok());
            prop_assert_eq!(config.unwrap().length(), length);
        }
    }
}
