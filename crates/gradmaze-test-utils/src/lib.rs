//! Test utilities and mock types for GradMaze development.
//!
//! Provides a [`MockEngine`] implementing [`SimEngine`](gradmaze_core::SimEngine)
//! with scriptable observations, rewards, and failures; a
//! [`RecordingWorld`] that only records world-mutation calls; and
//! observation fixtures.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod fixtures;
mod mock_engine;

pub use fixtures::{observation_with_mean, ramp_observation, uniform_observation};
pub use mock_engine::{AgentPose, MockEngine};

use gradmaze_core::{AgentSpawn, EngineError, RoomHandle, RoomId, RoomSpec, WorldBuilder};

/// Mock implementation of [`WorldBuilder`].
///
/// Accepts every call and records it. Inspect results with
/// [`rooms`](RecordingWorld::rooms) and
/// [`placements`](RecordingWorld::placements).
#[derive(Debug, Default)]
pub struct RecordingWorld {
    rooms: Vec<RoomSpec>,
    placements: Vec<(RoomHandle, AgentSpawn)>,
}

impl RecordingWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rooms in creation order.
    pub fn rooms(&self) -> &[RoomSpec] {
        &self.rooms
    }

    /// Agent placements in call order.
    pub fn placements(&self) -> &[(RoomHandle, AgentSpawn)] {
        &self.placements
    }
}

impl WorldBuilder for RecordingWorld {
    fn add_rect_room(&mut self, room: &RoomSpec) -> Result<RoomHandle, EngineError> {
        self.rooms.push(room.clone());
        Ok(RoomHandle::new(RoomId(self.rooms.len() as u32 - 1)))
    }

    fn place_agent(&mut self, room: RoomHandle, spawn: &AgentSpawn) -> Result<(), EngineError> {
        self.placements.push((room, *spawn));
        Ok(())
    }
}
