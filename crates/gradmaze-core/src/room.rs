//! Declarative room and spawn descriptions submitted to the engine.

use std::borrow::Cow;
use std::fmt;

use crate::geometry::{Point2, Rect};

/// Identifies a texture asset known to the engine.
///
/// The engine resolves the name against its own asset store; an unknown
/// name is an engine error raised at room construction.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TextureId(Cow<'static, str>);

impl TextureId {
    /// Brick texture used for the bounding chamber's walls and floor.
    pub const BRICK_WALL: TextureId = TextureId(Cow::Borrowed("brick_wall"));
    /// First directional gradient texture.
    pub const GRADIENT_1: TextureId = TextureId(Cow::Borrowed("gradient1"));
    /// Second directional gradient texture.
    pub const GRADIENT_2: TextureId = TextureId(Cow::Borrowed("gradient2"));
    /// Third directional gradient texture.
    pub const GRADIENT_3: TextureId = TextureId(Cow::Borrowed("gradient3"));
    /// Fourth directional gradient texture.
    pub const GRADIENT_4: TextureId = TextureId(Cow::Borrowed("gradient4"));

    /// Create a texture ID from any asset name.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// The asset name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is one of the four directional gradient textures.
    pub fn is_gradient(&self) -> bool {
        matches!(
            self.as_str(),
            "gradient1" | "gradient2" | "gradient3" | "gradient4"
        )
    }
}

impl fmt::Display for TextureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One axis-aligned room or corridor segment.
#[derive(Clone, Debug, PartialEq)]
pub struct RoomSpec {
    /// Floor-plan bounds of the room.
    pub rect: Rect,
    /// Texture applied to every wall of the room.
    pub wall_tex: TextureId,
    /// Floor texture, or `None` for the engine default.
    pub floor_tex: Option<TextureId>,
    /// Whether the room is closed by a ceiling.
    pub has_ceiling: bool,
}

impl RoomSpec {
    /// Create a room with the engine-default floor and no ceiling.
    pub fn new(rect: Rect, wall_tex: TextureId) -> Self {
        Self {
            rect,
            wall_tex,
            floor_tex: None,
            has_ceiling: false,
        }
    }

    /// Set the floor texture.
    pub fn with_floor(mut self, floor_tex: TextureId) -> Self {
        self.floor_tex = Some(floor_tex);
        self
    }

    /// Close the room with a ceiling.
    pub fn with_ceiling(mut self) -> Self {
        self.has_ceiling = true;
        self
    }
}

/// Placement constraint for the agent at episode start.
///
/// The engine picks a position uniformly inside `rect` (a single point
/// when the rectangle is degenerate). Orientation is chosen by the engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AgentSpawn {
    /// Sub-rectangle of the target room the agent must start in.
    pub rect: Rect,
}

impl AgentSpawn {
    /// Spawn constraint covering an arbitrary rectangle.
    pub fn within(rect: Rect) -> Self {
        Self { rect }
    }

    /// Spawn constraint pinned to a single point.
    pub fn at(p: Point2) -> Self {
        Self {
            rect: Rect::point(p),
        }
    }

    /// Whether the spawn position is fully determined.
    pub fn is_fixed(&self) -> bool {
        self.rect.is_point()
    }
}
