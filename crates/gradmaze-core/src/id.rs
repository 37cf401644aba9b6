//! Strongly-typed identifiers for engine-owned objects.

use std::fmt;

/// Identifies a room created by the engine within the current episode.
///
/// Rooms are assigned sequential IDs in creation order. `RoomId(n)`
/// corresponds to the n-th `add_rect_room` call since the episode began.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId(pub u32);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for RoomId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Opaque handle to a room returned by
/// [`WorldBuilder::add_rect_room`](crate::WorldBuilder::add_rect_room).
///
/// Only valid for the episode in which it was issued. Passing a stale
/// handle to [`place_agent`](crate::WorldBuilder::place_agent) after a
/// reset is an engine error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RoomHandle {
    /// The room this handle refers to.
    pub id: RoomId,
}

impl RoomHandle {
    /// Wrap a room ID in a handle.
    pub fn new(id: RoomId) -> Self {
        Self { id }
    }
}

impl fmt::Display for RoomHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "room#{}", self.id)
    }
}
