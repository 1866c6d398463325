//! Random sampling of collision-free points.
//!
//! Draws uniform candidates inside the map bounds and keeps the first one
//! the validator accepts. Useful for generating valid start/goal pairs in
//! bulk, e.g. when producing datasets for later pathfinding work.

use rand::Rng;
use tracing::warn;

use crate::core::Point2D;
use crate::map::ObstacleMap;
use crate::validate::PointValidator;

/// Sample a point that the validator accepts on the given map.
///
/// Draws up to `max_attempts` uniform candidates from the map bounds and
/// returns the first accepted one, or `None` if every attempt was rejected
/// (e.g. a map that is almost fully blocked). Deterministic for a seeded
/// RNG.
pub fn sample_free_point(
    map: &ObstacleMap,
    validator: &PointValidator,
    rng: &mut impl Rng,
    max_attempts: usize,
) -> Option<Point2D> {
    let bounds = map.bounds();

    for _ in 0..max_attempts {
        let candidate = Point2D::new(
            rng.random_range(bounds.min.x..=bounds.max.x),
            rng.random_range(bounds.min.y..=bounds.max.y),
        );
        if validator.validate(candidate, map).is_accepted() {
            return Some(candidate);
        }
    }

    warn!(
        "no collision-free point found after {} attempts",
        max_attempts
    );
    None
}
