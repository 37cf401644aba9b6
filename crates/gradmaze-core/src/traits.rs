//! Traits through which the external simulation engine is driven.
//!
//! The engine owns all world, physics, and render state. Components of
//! the environment never reach for it through ambient globals: the world
//! generator receives a `&mut dyn WorldBuilder`, and the environment
//! driver owns its `SimEngine` by value. A mock engine can therefore stand
//! in for the real one in tests.

use crate::action::Action;
use crate::config::EngineOptions;
use crate::error::EngineError;
use crate::id::RoomHandle;
use crate::observation::{ObsShape, Observation};
use crate::room::{AgentSpawn, RoomSpec};
use crate::step::StepResult;

/// World-mutation interface used during world generation.
pub trait WorldBuilder {
    /// Create an axis-aligned room and return a handle to it.
    ///
    /// # Errors
    ///
    /// Engines reject malformed rectangles and unknown textures.
    fn add_rect_room(&mut self, room: &RoomSpec) -> Result<RoomHandle, EngineError>;

    /// Constrain the agent's starting position to a sub-rectangle of `room`.
    ///
    /// # Errors
    ///
    /// Engines reject unknown handles and spawn rectangles outside the room.
    fn place_agent(&mut self, room: RoomHandle, spawn: &AgentSpawn) -> Result<(), EngineError>;
}

/// A 3D simulation engine able to host one agent.
///
/// Lifecycle per episode: [`begin_episode`](Self::begin_episode) clears
/// the world, a world generator populates it through [`WorldBuilder`],
/// [`finish_episode`](Self::finish_episode) spawns the agent and renders
/// the first frame, then [`step`](Self::step) is called until the
/// returned result is terminated or truncated.
pub trait SimEngine: WorldBuilder {
    /// Apply passthrough options. Called once, before the first episode.
    fn configure(&mut self, options: &EngineOptions) -> Result<(), EngineError>;

    /// Discard the previous world and start an empty one.
    ///
    /// `seed` reseeds the engine's RNG (agent orientation, domain
    /// randomization); `None` continues the current stream.
    fn begin_episode(&mut self, seed: Option<u64>) -> Result<(), EngineError>;

    /// Finalize the generated world, spawn the agent, and render the
    /// initial observation.
    fn finish_episode(&mut self) -> Result<Observation, EngineError>;

    /// Advance the simulation by one action.
    ///
    /// The returned reward is the engine's base reward. The engine
    /// increments its step counter before returning and sets `truncated`
    /// once the counter reaches the configured limit.
    fn step(&mut self, action: Action) -> Result<StepResult, EngineError>;

    /// Steps taken in the current episode, including the most recent one.
    fn step_count(&self) -> u32;

    /// Shape of the observations this engine renders.
    fn obs_shape(&self) -> ObsShape;
}
