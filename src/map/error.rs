//! Setup-time errors for map construction.

use thiserror::Error;

/// Configuration errors raised while building an [`ObstacleMap`].
///
/// These are setup-time, non-recoverable errors: map construction must be
/// aborted when one surfaces.
///
/// [`ObstacleMap`]: super::ObstacleMap
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MapError {
    #[error("map bounds are empty: ({x_min:.2}, {y_min:.2}) to ({x_max:.2}, {y_max:.2})")]
    EmptyBounds {
        x_min: f32,
        x_max: f32,
        y_min: f32,
        y_max: f32,
    },

    #[error("obstacle {index} has non-positive size {width:.2} x {height:.2}")]
    DegenerateObstacle {
        /// Insertion index the obstacle would have received.
        index: usize,
        width: f32,
        height: f32,
    },

    #[error(
        "obstacle {index} at ({x:.2}, {y:.2}) size {width:.2} x {height:.2} \
         extends outside the map bounds"
    )]
    ObstacleOutOfBounds {
        /// Insertion index the obstacle would have received.
        index: usize,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
}
