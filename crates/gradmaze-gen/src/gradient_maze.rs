//! The five-room gradient cross maze.
//!
//! A square brick chamber spanning `[4, 10] × [4, 10]` with a ceiling,
//! carved into a plus shape by four one-unit-wide, ceiling-less arms.
//! Each arm runs from one outer wall to the chamber center and carries
//! its own gradient wall texture, giving the agent a directional cue:
//!
//! ```text
//!            north (gradient3)
//!                  |
//!  west (gradient4)-+-east (gradient2)
//!                  |
//!            south (gradient1)
//! ```
//!
//! The agent always spawns exactly at the junction `(7, 7)`.

use gradmaze_core::{AgentSpawn, MazeConfig, Point2, Rect, RoomSpec, TextureId};
use smallvec::smallvec;

use crate::generator::{MazeLayout, WorldGenerator};

/// Junction of the four arms and center of the bounding chamber.
pub const CENTER: Point2 = Point2::new(7.0, 7.0);

/// Half the width of each arm.
const ARM_HALF_WIDTH: f32 = 0.5;

const BOUNDS: Rect = Rect::new(4.0, 10.0, 4.0, 10.0);

const BOUNDING_ROOM: RoomSpec = RoomSpec {
    rect: BOUNDS,
    wall_tex: TextureId::BRICK_WALL,
    floor_tex: Some(TextureId::BRICK_WALL),
    has_ceiling: true,
};

const NORTH_ARM: RoomSpec = RoomSpec {
    rect: Rect::new(
        CENTER.x - ARM_HALF_WIDTH,
        CENTER.x + ARM_HALF_WIDTH,
        BOUNDS.min_z,
        CENTER.z,
    ),
    wall_tex: TextureId::GRADIENT_3,
    floor_tex: None,
    has_ceiling: false,
};

const EAST_ARM: RoomSpec = RoomSpec {
    rect: Rect::new(
        CENTER.x,
        BOUNDS.max_x,
        CENTER.z - ARM_HALF_WIDTH,
        CENTER.z + ARM_HALF_WIDTH,
    ),
    wall_tex: TextureId::GRADIENT_2,
    floor_tex: None,
    has_ceiling: false,
};

const SOUTH_ARM: RoomSpec = RoomSpec {
    rect: Rect::new(
        CENTER.x - ARM_HALF_WIDTH,
        CENTER.x + ARM_HALF_WIDTH,
        CENTER.z,
        BOUNDS.max_z,
    ),
    wall_tex: TextureId::GRADIENT_1,
    floor_tex: None,
    has_ceiling: false,
};

const WEST_ARM: RoomSpec = RoomSpec {
    rect: Rect::new(
        BOUNDS.min_x,
        CENTER.x,
        CENTER.z - ARM_HALF_WIDTH,
        CENTER.z + ARM_HALF_WIDTH,
    ),
    wall_tex: TextureId::GRADIENT_4,
    floor_tex: None,
    has_ceiling: false,
};

/// Generator for the fixed gradient cross maze.
///
/// Stateless. The layout is a compile-time constant; the configured
/// `length` is accepted but does not affect the geometry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GradientMaze;

impl GradientMaze {
    /// Create the generator.
    pub fn new() -> Self {
        Self
    }

    /// Bounds of the outer chamber.
    pub fn bounds() -> Rect {
        BOUNDS
    }
}

impl WorldGenerator for GradientMaze {
    fn name(&self) -> &str {
        "GradientMaze"
    }

    fn layout(&self, _config: &MazeConfig) -> MazeLayout {
        MazeLayout {
            bounding: BOUNDING_ROOM,
            arms: smallvec![NORTH_ARM, EAST_ARM, SOUTH_ARM, WEST_ARM],
            spawn: AgentSpawn::at(CENTER),
        }
    }
}
