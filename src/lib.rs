//! # Marga-Map: Navigation Map Validation and Rendering
//!
//! A small library for describing 2D navigation maps made of axis-aligned
//! rectangular obstacles, checking that candidate start and goal points are
//! usable, and rendering the result to SVG. It is a visualization and
//! validation aid for later pathfinding development; no search algorithm
//! lives here.
//!
//! ## Quick Start
//!
//! ```rust
//! use marga_map::core::{Bounds, Point2D};
//! use marga_map::map::{Obstacle, ObstacleMap};
//! use marga_map::validate::{PointValidator, Validation};
//!
//! // Build a map: bounds first, then obstacles (each checked on insert)
//! let mut map = ObstacleMap::new(Bounds::from_extents(0.0, 120.0, 0.0, 60.0))?;
//! map.add_obstacle(Obstacle::new(20.0, 20.0, 30.0, 20.0))?;
//!
//! // Validate candidate points; rejection is a result value, not an error
//! let validator = PointValidator::new();
//! assert!(validator.validate(Point2D::new(10.0, 50.0), &map).is_accepted());
//!
//! match validator.validate(Point2D::new(35.0, 30.0), &map) {
//!     Validation::Accepted => println!("point is usable"),
//!     Validation::Rejected(reason) => println!("rejected: {}", reason),
//! }
//! # Ok::<(), marga_map::map::MapError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: fundamental geometry ([`Point2D`](core::Point2D), [`Bounds`](core::Bounds))
//! - [`map`]: the obstacle map data model and its containment queries
//! - [`validate`]: the pure start/goal decision with structured rejections
//! - [`scene`]: TOML-loadable scene configuration with a built-in floor plan
//! - [`render`]: explicit SVG renderer for validated scenes
//! - [`sample`]: seeded sampling of collision-free points
//!
//! ## Containment Policy
//!
//! Obstacle containment is boundary-inclusive: a point exactly on an
//! obstacle edge or corner is treated as colliding, matching robot-footprint
//! conservatism. The tolerance is widenable per run via the validation
//! margin. Map-bounds membership is inclusive on all four edges.
//!
//! ## Lifecycle
//!
//! A map is built once per scene and read-only afterwards; validation and
//! rendering never mutate it. Queries take `&self`, so batch validation may
//! share one map across threads without locking.

pub mod core;
pub mod error;
pub mod map;
pub mod render;
pub mod sample;
pub mod scene;
pub mod validate;

pub use error::{MargaError, Result};
pub use map::{MapError, Obstacle, ObstacleMap};
pub use render::{SvgColorScheme, SvgConfig, SvgVisualizer};
pub use sample::sample_free_point;
pub use scene::SceneConfig;
pub use validate::{PointValidator, Rejection, Validation};
