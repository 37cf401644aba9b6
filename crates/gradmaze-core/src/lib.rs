//! Core types and traits for the GradMaze environment.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the rest of the workspace: room geometry,
//! actions, observations, step results, configuration, error types, and
//! the traits through which the external 3D engine is driven.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod action;
pub mod config;
pub mod error;
pub mod geometry;
pub mod id;
pub mod info;
pub mod observation;
pub mod room;
pub mod step;
pub mod traits;

pub use action::Action;
pub use config::{EngineOptions, MazeConfig, DEFAULT_LENGTH, MAX_EPISODE_STEPS, MIN_LENGTH};
pub use error::{ConfigError, EngineError};
pub use geometry::{Point2, Rect};
pub use id::{RoomHandle, RoomId};
pub use info::{Info, InfoValue};
pub use observation::{ObsShape, Observation, RGB_CHANNELS};
pub use room::{AgentSpawn, RoomSpec, TextureId};
pub use step::{EpisodeProgress, StepResult};
pub use traits::{SimEngine, WorldBuilder};
