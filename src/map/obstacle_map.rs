//! Obstacle map: bounds plus an ordered obstacle list.

use crate::core::{Bounds, Point2D};

use super::error::MapError;
use super::obstacle::Obstacle;

/// A navigation map: axis-aligned bounds and the obstacles inside them.
///
/// Obstacles are kept in insertion order; the order has no semantic meaning
/// but keeps rendering and collision reporting deterministic. Overlapping
/// obstacles are permitted and get no special handling.
///
/// The map is built once per scene and is read-only afterwards: every query
/// takes `&self`, so a finished map can be shared across threads without
/// locking.
#[derive(Clone, Debug)]
pub struct ObstacleMap {
    bounds: Bounds,
    obstacles: Vec<Obstacle>,
}

impl ObstacleMap {
    /// Create an empty map with the given bounds.
    ///
    /// Fails if the bounds are empty (min exceeds max on either axis).
    pub fn new(bounds: Bounds) -> Result<Self, MapError> {
        if bounds.is_empty() {
            return Err(MapError::EmptyBounds {
                x_min: bounds.min.x,
                x_max: bounds.max.x,
                y_min: bounds.min.y,
                y_max: bounds.max.y,
            });
        }
        Ok(Self {
            bounds,
            obstacles: Vec::new(),
        })
    }

    /// Append an obstacle to the map.
    ///
    /// Fails fast with [`MapError`] if the obstacle has non-positive width
    /// or height, or if it is not fully contained within the map bounds.
    pub fn add_obstacle(&mut self, obstacle: Obstacle) -> Result<(), MapError> {
        let index = self.obstacles.len();

        if obstacle.width <= 0.0 || obstacle.height <= 0.0 {
            return Err(MapError::DegenerateObstacle {
                index,
                width: obstacle.width,
                height: obstacle.height,
            });
        }
        if !self.bounds.contains_bounds(&obstacle.as_bounds()) {
            return Err(MapError::ObstacleOutOfBounds {
                index,
                x: obstacle.x,
                y: obstacle.y,
                width: obstacle.width,
                height: obstacle.height,
            });
        }

        self.obstacles.push(obstacle);
        Ok(())
    }

    /// Map bounds.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Check if a point lies within the map bounds, boundary inclusive.
    ///
    /// This checks bounds membership only, not obstacle-freedom.
    #[inline]
    pub fn contains_point(&self, point: Point2D) -> bool {
        self.bounds.contains(point)
    }

    /// Find the first obstacle (in insertion order) containing the point.
    ///
    /// Containment is boundary-inclusive. Returns the obstacle together
    /// with its insertion index, or `None` if the point is free.
    #[inline]
    pub fn obstacle_at(&self, point: Point2D) -> Option<(usize, &Obstacle)> {
        self.obstacle_within(point, 0.0)
    }

    /// Like [`obstacle_at`](Self::obstacle_at), with every obstacle
    /// rectangle inflated by `margin`.
    pub fn obstacle_within(&self, point: Point2D, margin: f32) -> Option<(usize, &Obstacle)> {
        self.obstacles
            .iter()
            .enumerate()
            .find(|(_, obstacle)| obstacle.contains_within(point, margin))
    }

    /// Obstacles in insertion order.
    #[inline]
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Number of obstacles.
    #[inline]
    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    /// True if the map holds no obstacles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    /// Total area covered by obstacles, overlap counted twice.
    pub fn blocked_area(&self) -> f32 {
        self.obstacles.iter().map(Obstacle::area).sum()
    }
}
