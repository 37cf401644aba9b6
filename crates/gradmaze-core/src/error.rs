//! Error types for the GradMaze environment.
//!
//! Organized by subsystem: configuration (raised once, at construction)
//! and engine (raised by the external simulation engine and propagated
//! unmodified by the environment core).

use crate::id::RoomId;
use thiserror::Error;

/// Errors detected while validating a [`MazeConfig`](crate::MazeConfig)
/// or its [`EngineOptions`](crate::EngineOptions).
///
/// All configuration errors are fatal: an environment is never built
/// from an invalid configuration.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// The corridor-extent parameter is below the minimum of 2.
    #[error("length {length} is below minimum of {min}")]
    LengthTooShort {
        /// The configured length.
        length: u32,
        /// The minimum accepted length.
        min: u32,
    },
    /// Observation width or height is zero.
    #[error("observation shape {width}x{height} must be non-zero")]
    InvalidObsShape {
        /// Configured observation width in pixels.
        width: u32,
        /// Configured observation height in pixels.
        height: u32,
    },
    /// A movement step size is NaN, infinite, zero, or negative.
    #[error("{name} must be finite and positive, got {value}")]
    InvalidStepSize {
        /// Which option was rejected.
        name: &'static str,
        /// The rejected value.
        value: f32,
    },
    /// The episode step limit is zero.
    #[error("max_episode_steps must be at least 1")]
    ZeroEpisodeSteps,
}

/// Errors raised by the simulation engine.
///
/// The environment core neither catches nor reinterprets these; they are
/// surfaced to the caller exactly as the engine produced them.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum EngineError {
    /// A room or spawn rectangle is malformed (non-finite or inverted).
    #[error("invalid geometry: {reason}")]
    InvalidGeometry {
        /// Description of the malformed geometry.
        reason: String,
    },
    /// A room handle does not refer to a room in the current episode.
    #[error("unknown room {room}")]
    UnknownRoom {
        /// The unrecognized room.
        room: RoomId,
    },
    /// The spawn rectangle does not lie inside the target room.
    #[error("spawn rectangle lies outside room {room}")]
    SpawnOutsideRoom {
        /// The room the agent was to be placed in.
        room: RoomId,
    },
    /// An action index outside the discrete action space was submitted.
    #[error("action index {index} is outside the action space of {size}")]
    InvalidAction {
        /// The rejected action index.
        index: usize,
        /// Number of valid actions.
        size: usize,
    },
    /// World mutation or stepping was attempted with no episode in progress.
    #[error("no episode in progress")]
    NoEpisode,
    /// The episode was finalized before the agent was placed.
    #[error("agent has not been placed")]
    AgentNotPlaced,
    /// The renderer failed to produce an observation.
    #[error("render failed: {reason}")]
    RenderFailed {
        /// Description of the renderer failure.
        reason: String,
    },
    /// Any other backend-specific failure.
    #[error("engine backend error: {reason}")]
    Backend {
        /// Description of the failure.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_messages() {
        let e = ConfigError::LengthTooShort { length: 1, min: 2 };
        assert_eq!(e.to_string(), "length 1 is below minimum of 2");
        let e = ConfigError::InvalidObsShape {
            width: 0,
            height: 60,
        };
        assert_eq!(e.to_string(), "observation shape 0x60 must be non-zero");
    }

    #[test]
    fn engine_error_messages() {
        let e = EngineError::InvalidAction { index: 7, size: 3 };
        assert_eq!(
            e.to_string(),
            "action index 7 is outside the action space of 3"
        );
        let e = EngineError::UnknownRoom { room: RoomId(4) };
        assert_eq!(e.to_string(), "unknown room 4");
    }
}
