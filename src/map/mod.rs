//! Obstacle map data model.
//!
//! - [`Obstacle`]: axis-aligned rectangle a point may not occupy
//! - [`ObstacleMap`]: bounds plus the ordered obstacle list, with
//!   containment queries
//! - [`MapError`]: setup-time configuration errors

mod error;
mod obstacle;
mod obstacle_map;

pub use error::MapError;
pub use obstacle::Obstacle;
pub use obstacle_map::ObstacleMap;
