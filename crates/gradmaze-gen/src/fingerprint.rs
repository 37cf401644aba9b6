//! Layout fingerprinting for determinism checks.
//!
//! Uses FNV-1a for fast, deterministic hashing of a [`MazeLayout`]. The
//! hash is not cryptographically secure; it exists so that resets can be
//! compared cheaply in logs and tests.

use gradmaze_core::{Rect, RoomSpec};

use crate::generator::MazeLayout;

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

#[inline]
fn fnv1a_bytes(mut hash: u64, bytes: &[u8]) -> u64 {
    for &b in bytes {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

#[inline]
fn fnv1a_u32(hash: u64, v: u32) -> u64 {
    fnv1a_bytes(hash, &v.to_le_bytes())
}

fn hash_rect(mut hash: u64, r: &Rect) -> u64 {
    for v in [r.min_x, r.max_x, r.min_z, r.max_z] {
        hash = fnv1a_u32(hash, v.to_bits());
    }
    hash
}

fn hash_room(mut hash: u64, room: &RoomSpec) -> u64 {
    hash = hash_rect(hash, &room.rect);
    // Length-prefix texture names so adjacent names cannot alias.
    let wall = room.wall_tex.as_str().as_bytes();
    hash = fnv1a_u32(hash, wall.len() as u32);
    hash = fnv1a_bytes(hash, wall);
    match &room.floor_tex {
        Some(tex) => {
            hash = fnv1a_byte(hash, 1);
            let floor = tex.as_str().as_bytes();
            hash = fnv1a_u32(hash, floor.len() as u32);
            hash = fnv1a_bytes(hash, floor);
        }
        None => hash = fnv1a_byte(hash, 0),
    }
    fnv1a_byte(hash, u8::from(room.has_ceiling))
}

/// Hash every room (in creation order) and the spawn rectangle.
///
/// The room index is folded in at each boundary so that reordering rooms
/// changes the hash.
pub fn layout_fingerprint(layout: &MazeLayout) -> u64 {
    let mut hash = FNV_OFFSET;
    for (i, room) in layout.rooms().enumerate() {
        hash = fnv1a_u32(hash, i as u32);
        hash = hash_room(hash, room);
    }
    hash_rect(hash, &layout.spawn.rect)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradmaze_core::{AgentSpawn, Point2, TextureId};
    use smallvec::smallvec;

    fn layout() -> MazeLayout {
        MazeLayout {
            bounding: RoomSpec::new(Rect::new(0.0, 4.0, 0.0, 4.0), TextureId::BRICK_WALL)
                .with_floor(TextureId::BRICK_WALL)
                .with_ceiling(),
            arms: smallvec![
                RoomSpec::new(Rect::new(1.5, 2.5, 0.0, 2.0), TextureId::GRADIENT_1),
                RoomSpec::new(Rect::new(1.5, 2.5, 2.0, 4.0), TextureId::GRADIENT_2),
            ],
            spawn: AgentSpawn::at(Point2::new(2.0, 2.0)),
        }
    }

    #[test]
    fn equal_layouts_hash_equal() {
        assert_eq!(layout_fingerprint(&layout()), layout_fingerprint(&layout()));
    }

    #[test]
    fn empty_hash_differs_from_offset() {
        assert_ne!(layout_fingerprint(&layout()), FNV_OFFSET);
    }

    #[test]
    fn texture_change_alters_hash() {
        let mut other = layout();
        other.arms[0].wall_tex = TextureId::GRADIENT_3;
        assert_ne!(layout_fingerprint(&layout()), layout_fingerprint(&other));
    }

    #[test]
    fn ceiling_and_floor_alter_hash() {
        let mut other = layout();
        other.bounding.has_ceiling = false;
        assert_ne!(layout_fingerprint(&layout()), layout_fingerprint(&other));

        let mut other = layout();
        other.bounding.floor_tex = None;
        assert_ne!(layout_fingerprint(&layout()), layout_fingerprint(&other));
    }

    #[test]
    fn arm_order_matters() {
        let mut other = layout();
        other.arms.swap(0, 1);
        assert_ne!(layout_fingerprint(&layout()), layout_fingerprint(&other));
    }

    #[test]
    fn spawn_alters_hash() {
        let mut other = layout();
        other.spawn = AgentSpawn::at(Point2::new(2.0, 2.5));
        assert_ne!(layout_fingerprint(&layout()), layout_fingerprint(&other));
    }
}
