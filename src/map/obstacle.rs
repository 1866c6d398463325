//! Axis-aligned rectangular obstacle.

use serde::{Deserialize, Serialize};

use crate::core::{Bounds, Point2D};

/// An axis-aligned rectangular region that a point may not occupy.
///
/// Defined by its lower-left corner and a positive size. Immutable once
/// added to a map.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// X coordinate of the lower-left corner.
    pub x: f32,
    /// Y coordinate of the lower-left corner.
    pub y: f32,
    /// X extent, must be positive.
    pub width: f32,
    /// Y extent, must be positive.
    pub height: f32,
}

impl Obstacle {
    /// Create a new obstacle from its lower-left corner and size.
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Lower-left corner.
    #[inline]
    pub fn min_corner(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }

    /// Upper-right corner.
    #[inline]
    pub fn max_corner(&self) -> Point2D {
        Point2D::new(self.x + self.width, self.y + self.height)
    }

    /// The rectangle as [`Bounds`].
    #[inline]
    pub fn as_bounds(&self) -> Bounds {
        Bounds::new(self.min_corner(), self.max_corner())
    }

    /// Covered area.
    #[inline]
    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Check if a point lies on or inside the rectangle.
    ///
    /// Containment is boundary-inclusive: a point exactly on an edge or
    /// corner counts as on the obstacle. A path endpoint touching an
    /// obstacle edge is still unsafe for a robot footprint.
    #[inline]
    pub fn contains(&self, point: Point2D) -> bool {
        self.contains_within(point, 0.0)
    }

    /// Check containment against the rectangle inflated by `margin` on all
    /// sides. A margin of 0.0 is exact boundary-inclusive containment.
    #[inline]
    pub fn contains_within(&self, point: Point2D, margin: f32) -> bool {
        point.x >= self.x - margin
            && point.x <= self.x + self.width + margin
            && point.y >= self.y - margin
            && point.y <= self.y + self.height + margin
    }
}
