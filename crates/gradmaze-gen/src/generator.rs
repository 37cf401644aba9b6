//! The world-generator trait and the layout it produces.

use gradmaze_core::{AgentSpawn, EngineError, MazeConfig, RoomSpec, WorldBuilder};
use smallvec::SmallVec;

use crate::fingerprint::layout_fingerprint;

/// A complete declarative description of one episode's world.
///
/// The bounding room is created first and receives the agent; the arms
/// follow in order.
#[derive(Clone, Debug, PartialEq)]
pub struct MazeLayout {
    /// Outer chamber enclosing every other room.
    pub bounding: RoomSpec,
    /// Corridor arms carved inside the bounding room.
    pub arms: SmallVec<[RoomSpec; 4]>,
    /// Agent start constraint, relative to the bounding room.
    pub spawn: AgentSpawn,
}

impl MazeLayout {
    /// All rooms in creation order: the bounding room, then the arms.
    pub fn rooms(&self) -> impl Iterator<Item = &RoomSpec> {
        std::iter::once(&self.bounding).chain(self.arms.iter())
    }

    /// Number of rooms, bounding room included.
    pub fn room_count(&self) -> usize {
        1 + self.arms.len()
    }

    /// Stable FNV-1a hash of the layout. Equal layouts hash equally.
    pub fn fingerprint(&self) -> u64 {
        layout_fingerprint(self)
    }
}

/// Strategy that builds the world at every episode reset.
///
/// Generators are pure descriptions: [`layout`](Self::layout) must return
/// the same value for the same configuration on every call, so the maze
/// never changes between episodes.
pub trait WorldGenerator {
    /// Human-readable generator name, used in logs.
    fn name(&self) -> &str;

    /// Describe the world for `config`.
    fn layout(&self, config: &MazeConfig) -> MazeLayout;

    /// Build the world inside the engine and return the layout submitted.
    ///
    /// The default implementation submits [`layout`](Self::layout)
    /// through [`submit_layout`].
    ///
    /// # Errors
    ///
    /// Engine errors are returned unmodified.
    fn generate(
        &self,
        config: &MazeConfig,
        world: &mut dyn WorldBuilder,
    ) -> Result<MazeLayout, EngineError> {
        let layout = self.layout(config);
        submit_layout(&layout, world)?;
        Ok(layout)
    }
}

/// Create every room of `layout` in order, then place the agent in the
/// bounding room.
///
/// Stops at the first engine error and returns it unchanged.
pub fn submit_layout(
    layout: &MazeLayout,
    world: &mut dyn WorldBuilder,
) -> Result<(), EngineError> {
    let bounding = world.add_rect_room(&layout.bounding)?;
    tracing::trace!(room = %bounding, rect = %layout.bounding.rect, "bounding room created");
    for arm in &layout.arms {
        let handle = world.add_rect_room(arm)?;
        tracing::trace!(room = %handle, rect = %arm.rect, wall = %arm.wall_tex, "arm created");
    }
    world.place_agent(bounding, &layout.spawn)
}
