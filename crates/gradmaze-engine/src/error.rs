//! Errors surfaced by the environment driver.

use gradmaze_core::{ConfigError, EngineError};
use gradmaze_space::SpaceError;
use thiserror::Error;

/// Errors from [`MazeEnv`](crate::MazeEnv) construction, reset, and step.
///
/// Subsystem errors are wrapped transparently and never reinterpreted.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum EnvError {
    /// The configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The simulation engine reported a failure.
    #[error(transparent)]
    Engine(#[from] EngineError),
    /// A space could not be built from the configuration.
    #[error(transparent)]
    Space(#[from] SpaceError),
    /// `step` was called before the first reset or after the episode ended.
    #[error("no active episode; call reset() first")]
    ResetRequired,
}
