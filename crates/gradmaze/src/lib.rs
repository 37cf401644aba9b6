//! GradMaze: a gradient-textured cross maze for reinforcement learning.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! GradMaze sub-crates. For most users, adding `gradmaze` as a single
//! dependency is sufficient; bring your own [`SimEngine`](types::SimEngine).
//!
//! # Quick start
//!
//! ```rust
//! use gradmaze::prelude::*;
//! use gradmaze_test_utils::MockEngine;
//!
//! let mut env = gradient_maze(12, MockEngine::new()).unwrap();
//! let (obs, _info) = env.reset(Some(42)).unwrap();
//! assert!(env.observation_space().contains(&obs));
//!
//! let step = env.step(Action::MoveForward).unwrap();
//! // Black frame after one step: only the decay term applies.
//! assert!((step.reward - (-0.2 / 100.0)).abs() < 1e-12);
//! assert_eq!(env.step_count(), 1);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `gradmaze-core` | Geometry, rooms, observations, config, engine traits |
//! | [`space`] | `gradmaze-space` | Action/observation spaces and cross topology checks |
//! | [`worldgen`] | `gradmaze-gen` | World-generator trait and the gradient maze |
//! | [`reward`] | `gradmaze-reward` | Reward-shaper trait, decay and brightness terms |
//! | [`engine`] | `gradmaze-engine` | `MazeEnv` lifecycle driver and step metrics |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and errors (`gradmaze-core`).
///
/// Contains the room and geometry model, [`types::MazeConfig`], and the
/// engine-facing traits ([`types::WorldBuilder`], [`types::SimEngine`]).
pub use gradmaze_core as types;

/// Spaces and floor-plan topology (`gradmaze-space`).
pub use gradmaze_space as space;

/// World generators (`gradmaze-gen`).
///
/// [`worldgen::GradientMaze`] builds the five-room cross.
pub use gradmaze_gen as worldgen;

/// Reward shaping (`gradmaze-reward`).
pub use gradmaze_reward as reward;

/// Environment driver (`gradmaze-engine`).
///
/// [`engine::MazeEnv`] wires an engine, a generator, and a shaper into a
/// reset/step loop.
pub use gradmaze_engine as engine;

/// Common imports for typical GradMaze usage.
///
/// ```rust
/// use gradmaze::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use gradmaze_core::{
        Action, AgentSpawn, EngineOptions, EpisodeProgress, Info, InfoValue, MazeConfig, ObsShape,
        Observation, Point2, Rect, RoomHandle, RoomSpec, SimEngine, StepResult, TextureId,
        WorldBuilder,
    };

    // Errors
    pub use gradmaze_core::{ConfigError, EngineError};
    pub use gradmaze_engine::EnvError;
    pub use gradmaze_space::SpaceError;

    // Spaces
    pub use gradmaze_space::{ActionSpace, ObservationSpace, Space};

    // Generation and shaping
    pub use gradmaze_gen::{GradientMaze, MazeLayout, WorldGenerator};
    pub use gradmaze_reward::{GradientMazeShaper, RewardShaper};

    // Engine
    pub use gradmaze_engine::{
        gradient_maze, gradient_maze_with, GradientMazeEnv, MazeEnv, StepMetrics,
    };
}
