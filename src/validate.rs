//! Start/goal point validation.
//!
//! [`PointValidator`] decides whether a candidate point is usable as a start
//! or goal on a given map. The decision is a pure function of the point, the
//! map and the configured margin: no mutation, no hidden state, identical
//! inputs always produce identical results.
//!
//! A rejection is a first-class result value, not an error. The caller owns
//! the policy on failure (abort, retry with a new point, warn and continue),
//! which keeps the validator reusable in test suites without pulling in any
//! rendering or prompting dependency.

use std::fmt;

use crate::core::Point2D;
use crate::map::ObstacleMap;

/// Why a candidate point was rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rejection {
    /// The point lies outside the map bounds.
    OutOfBounds {
        /// The rejected point.
        point: Point2D,
    },
    /// The point lies on or inside an obstacle.
    ObstacleCollision {
        /// Insertion index of the first colliding obstacle.
        index: usize,
    },
}

impl Rejection {
    /// Short code for logging and metrics.
    pub fn code(&self) -> &'static str {
        match self {
            Self::OutOfBounds { .. } => "OUT_OF_BOUNDS",
            Self::ObstacleCollision { .. } => "OBSTACLE_COLLISION",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { point } => {
                write!(
                    f,
                    "point ({:.2}, {:.2}) is outside the map bounds",
                    point.x, point.y
                )
            }
            Self::ObstacleCollision { index } => {
                write!(f, "point collides with obstacle {}", index)
            }
        }
    }
}

/// Outcome of validating a candidate point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Validation {
    /// The point is inside the map bounds and free of obstacles.
    Accepted,
    /// The point is unusable; the reason says why.
    Rejected(Rejection),
}

impl Validation {
    /// True if the point was accepted.
    #[inline]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// The rejection reason, if any.
    #[inline]
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            Self::Accepted => None,
            Self::Rejected(reason) => Some(*reason),
        }
    }
}

/// Decides whether candidate points are usable as start or goal.
///
/// The `margin` is the near-boundary tolerance: obstacle rectangles are
/// inflated by it during the collision check, so a point within `margin` of
/// an obstacle edge is treated as colliding. The default of 0.0 keeps exact
/// boundary-inclusive containment.
#[derive(Debug, Clone, Copy)]
pub struct PointValidator {
    margin: f32,
}

impl Default for PointValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl PointValidator {
    /// Validator with exact boundary-inclusive containment (margin 0.0).
    pub fn new() -> Self {
        Self { margin: 0.0 }
    }

    /// Validator with a clearance margin around obstacles.
    ///
    /// Negative margins are clamped to 0.0; shrinking obstacles below their
    /// stated footprint is never safe.
    pub fn with_margin(margin: f32) -> Self {
        Self {
            margin: margin.max(0.0),
        }
    }

    /// Configured clearance margin.
    #[inline]
    pub fn margin(&self) -> f32 {
        self.margin
    }

    /// Validate a candidate point against a map.
    ///
    /// Start and goal must each be validated on their own; accepting one
    /// says nothing about the other.
    pub fn validate(&self, point: Point2D, map: &ObstacleMap) -> Validation {
        if !map.contains_point(point) {
            return Validation::Rejected(Rejection::OutOfBounds { point });
        }
        if let Some((index, _)) = map.obstacle_within(point, self.margin) {
            return Validation::Rejected(Rejection::ObstacleCollision { index });
        }
        Validation::Accepted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Bounds;
    use crate::map::Obstacle;

    fn scenario_map() -> ObstacleMap {
        let mut map = ObstacleMap::new(Bounds::from_extents(0.0, 150.0, 0.0, 100.0)).unwrap();
        map.add_obstacle(Obstacle::new(20.0, 20.0, 30.0, 20.0)).unwrap();
        map
    }

    #[test]
    fn test_accepts_free_point() {
        let map = scenario_map();
        let validator = PointValidator::new();

        assert_eq!(
            validator.validate(Point2D::new(10.0, 10.0), &map),
            Validation::Accepted
        );
    }

    #[test]
    fn test_rejects_point_inside_obstacle() {
        let map = scenario_map();
        let validator = PointValidator::new();

        let result = validator.validate(Point2D::new(35.0, 30.0), &map);
        assert_eq!(
            result.rejection(),
            Some(Rejection::ObstacleCollision { index: 0 })
        );
    }

    #[test]
    fn test_rejects_exact_corner() {
        let map = scenario_map();
        let validator = PointValidator::new();

        let result = validator.validate(Point2D::new(20.0, 20.0), &map);
        assert_eq!(
            result.rejection(),
            Some(Rejection::ObstacleCollision { index: 0 })
        );
    }

    #[test]
    fn test_rejects_out_of_bounds_before_collision() {
        let map = scenario_map();
        let validator = PointValidator::new();

        let point = Point2D::new(200.0, 50.0);
        let result = validator.validate(point, &map);
        assert_eq!(result.rejection(), Some(Rejection::OutOfBounds { point }));
    }

    #[test]
    fn test_margin_rejects_near_boundary_point() {
        let map = scenario_map();
        let near = Point2D::new(19.7, 30.0);

        assert!(PointValidator::new().validate(near, &map).is_accepted());
        assert!(
            !PointValidator::with_margin(0.5)
                .validate(near, &map)
                .is_accepted()
        );
    }

    #[test]
    fn test_negative_margin_clamped() {
        let validator = PointValidator::with_margin(-1.0);
        assert_eq!(validator.margin(), 0.0);
    }

    #[test]
    fn test_validation_is_idempotent() {
        let map = scenario_map();
        let validator = PointValidator::new();

        for point in [
            Point2D::new(35.0, 30.0),
            Point2D::new(10.0, 10.0),
            Point2D::new(200.0, 50.0),
        ] {
            let first = validator.validate(point, &map);
            let second = validator.validate(point, &map);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_rejection_display() {
        let reason = Rejection::ObstacleCollision { index: 3 };
        assert_eq!(reason.to_string(), "point collides with obstacle 3");
        assert_eq!(reason.code(), "OBSTACLE_COLLISION");

        let reason = Rejection::OutOfBounds {
            point: Point2D::new(200.0, 50.0),
        };
        assert_eq!(
            reason.to_string(),
            "point (200.00, 50.00) is outside the map bounds"
        );
        assert_eq!(reason.code(), "OUT_OF_BOUNDS");
    }
}
