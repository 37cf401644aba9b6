//! Adjacency queries over axis-aligned room rectangles.
//!
//! North is the `min_z` side of the floor plan, south `max_z`, west
//! `min_x`, east `max_x`.

use gradmaze_core::{Point2, Rect};
use smallvec::SmallVec;

use crate::error::SpaceError;

/// Tolerance for coordinate equality.
const EPS: f32 = 1e-5;

/// A cardinal direction on the floor plan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Heading {
    /// Towards `min_z`.
    North,
    /// Towards `max_x`.
    East,
    /// Towards `max_z`.
    South,
    /// Towards `min_x`.
    West,
}

impl Heading {
    /// All headings, clockwise from north.
    pub const ALL: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    /// The opposite heading.
    pub fn opposite(self) -> Heading {
        match self {
            Heading::North => Heading::South,
            Heading::East => Heading::West,
            Heading::South => Heading::North,
            Heading::West => Heading::East,
        }
    }

    /// Coordinate of `rect`'s boundary on this side.
    fn boundary_of(self, rect: &Rect) -> f32 {
        match self {
            Heading::North => rect.min_z,
            Heading::East => rect.max_x,
            Heading::South => rect.max_z,
            Heading::West => rect.min_x,
        }
    }
}

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() <= EPS
}

/// Overlap of two rectangles, or `None` if they are disjoint.
///
/// Rectangles that only touch along an edge or at a corner intersect in
/// a degenerate rectangle.
pub fn intersection(a: &Rect, b: &Rect) -> Option<Rect> {
    let r = Rect::new(
        a.min_x.max(b.min_x),
        a.max_x.min(b.max_x),
        a.min_z.max(b.min_z),
        a.max_z.min(b.max_z),
    );
    if r.min_x > r.max_x + EPS || r.min_z > r.max_z + EPS {
        return None;
    }
    Some(r)
}

/// Sides of `outer` whose boundary line `inner`'s matching edge lies on.
///
/// Empty if `inner` is not contained in `outer`.
pub fn boundary_contacts(inner: &Rect, outer: &Rect) -> SmallVec<[Heading; 4]> {
    if !outer.contains_rect(inner) {
        return SmallVec::new();
    }
    Heading::ALL
        .iter()
        .copied()
        .filter(|h| approx_eq(h.boundary_of(inner), h.boundary_of(outer)))
        .collect()
}

/// A point shared by every rectangle, or `None` if there is none.
///
/// Returns the center of the common overlap.
pub fn common_point(rects: &[Rect]) -> Option<Point2> {
    let (first, rest) = rects.split_first()?;
    rest.iter()
        .try_fold(*first, |acc, r| intersection(&acc, r))
        .map(|r| r.center())
}

/// Whether the rectangles form one connected component, where two
/// rectangles are adjacent if they overlap or touch.
pub fn is_connected(rects: &[Rect]) -> bool {
    if rects.is_empty() {
        return true;
    }
    let mut visited = vec![false; rects.len()];
    let mut stack = vec![0usize];
    visited[0] = true;
    while let Some(i) = stack.pop() {
        for j in 0..rects.len() {
            if !visited[j] && intersection(&rects[i], &rects[j]).is_some() {
                visited[j] = true;
                stack.push(j);
            }
        }
    }
    visited.into_iter().all(|v| v)
}

/// Check that `arms` form a plus shape inside `outer`.
///
/// Every arm must lie inside `outer` and touch exactly one of its walls,
/// no two arms may touch the same wall, and all arms must share a common
/// junction point. Returns the junction.
pub fn verify_cross(outer: &Rect, arms: &[Rect]) -> Result<Point2, SpaceError> {
    let mut seen: SmallVec<[Heading; 4]> = SmallVec::new();
    for (i, arm) in arms.iter().enumerate() {
        let contacts = boundary_contacts(arm, outer);
        if contacts.len() != 1 {
            return Err(SpaceError::NotACross {
                reason: format!(
                    "arm {i} {arm} touches {} walls of {outer}, expected 1",
                    contacts.len()
                ),
            });
        }
        let heading = contacts[0];
        if seen.contains(&heading) {
            return Err(SpaceError::NotACross {
                reason: format!("arm {i} {arm} shares the {heading:?} wall with another arm"),
            });
        }
        seen.push(heading);
    }
    let junction = common_point(arms).ok_or_else(|| SpaceError::NotACross {
        reason: "arms share no common junction".to_string(),
    })?;
    let mut all: Vec<Rect> = arms.to_vec();
    all.push(*outer);
    if !is_connected(&all) {
        return Err(SpaceError::NotACross {
            reason: "rooms are not connected".to_string(),
        });
    }
    Ok(junction)
}
