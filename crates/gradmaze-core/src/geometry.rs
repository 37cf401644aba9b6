//! Axis-aligned floor-plan geometry.
//!
//! The maze lives on the engine's horizontal X/Z plane. Everything the
//! world generator emits is an axis-aligned rectangle on that plane.

use std::fmt;

/// A point on the horizontal X/Z plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point2 {
    /// X coordinate.
    pub x: f32,
    /// Z coordinate.
    pub z: f32,
}

impl Point2 {
    /// Create a point.
    pub const fn new(x: f32, z: f32) -> Self {
        Self { x, z }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Point2) -> f32 {
        ((self.x - other.x).powi(2) + (self.z - other.z).powi(2)).sqrt()
    }
}

impl fmt::Display for Point2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}

/// An axis-aligned rectangle on the X/Z plane, bounds inclusive.
///
/// Degenerate rectangles (`min == max` on one or both axes) are valid:
/// a spawn rectangle collapsed to a single point is the common case.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    /// Minimum X bound.
    pub min_x: f32,
    /// Maximum X bound.
    pub max_x: f32,
    /// Minimum Z bound.
    pub min_z: f32,
    /// Maximum Z bound.
    pub max_z: f32,
}

impl Rect {
    /// Create a rectangle from its bounds. Not validated; see [`validate`](Self::validate).
    pub const fn new(min_x: f32, max_x: f32, min_z: f32, max_z: f32) -> Self {
        Self {
            min_x,
            max_x,
            min_z,
            max_z,
        }
    }

    /// A degenerate rectangle covering exactly one point.
    pub const fn point(p: Point2) -> Self {
        Self::new(p.x, p.x, p.z, p.z)
    }

    /// Check that all bounds are finite and `min <= max` on both axes.
    pub fn validate(&self) -> Result<(), String> {
        let bounds = [self.min_x, self.max_x, self.min_z, self.max_z];
        if bounds.iter().any(|v| !v.is_finite()) {
            return Err(format!("rect {self} has non-finite bounds"));
        }
        if self.min_x > self.max_x {
            return Err(format!(
                "rect {self}: min_x {} exceeds max_x {}",
                self.min_x, self.max_x
            ));
        }
        if self.min_z > self.max_z {
            return Err(format!(
                "rect {self}: min_z {} exceeds max_z {}",
                self.min_z, self.max_z
            ));
        }
        Ok(())
    }

    /// Extent along X.
    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    /// Extent along Z.
    pub fn depth(&self) -> f32 {
        self.max_z - self.min_z
    }

    /// Center point.
    pub fn center(&self) -> Point2 {
        Point2::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_z + self.max_z) / 2.0,
        )
    }

    /// Whether both axes are collapsed to a single value.
    pub fn is_point(&self) -> bool {
        self.min_x == self.max_x && self.min_z == self.max_z
    }

    /// Whether `p` lies inside or on the boundary.
    pub fn contains_point(&self, p: Point2) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.z >= self.min_z && p.z <= self.max_z
    }

    /// Whether `other` lies entirely inside or on the boundary of `self`.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.min_x >= self.min_x
            && other.max_x <= self.max_x
            && other.min_z >= self.min_z
            && other.max_z <= self.max_z
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}]x[{}, {}]",
            self.min_x, self.max_x, self.min_z, self.max_z
        )
    }
}
