//! Scene configuration.
//!
//! A scene describes one validation-and-render run: map bounds, obstacle
//! list, start and goal points, the validation margin, and output settings.
//! Scenes are plain data passed into map construction and validation, so
//! changing a run's inputs never means editing source constants.
//!
//! Scenes load from TOML; every field has a default, and the default scene
//! is a 120 x 60 apartment floor plan with 19 rectangular obstacles.

use std::path::Path;

use serde::Deserialize;

use crate::core::{Bounds, Point2D};
use crate::error::{MargaError, Result};
use crate::map::{MapError, Obstacle, ObstacleMap};

/// Full scene description.
#[derive(Clone, Debug, Deserialize, Default)]
pub struct SceneConfig {
    #[serde(default)]
    pub map: MapSection,
    #[serde(default)]
    pub points: PointsSection,
    #[serde(default)]
    pub validation: ValidationSection,
    #[serde(default)]
    pub output: OutputSection,
}

/// Map bounds and obstacle list.
#[derive(Clone, Debug, Deserialize)]
pub struct MapSection {
    /// Left edge of the navigable area.
    #[serde(default = "default_x_min")]
    pub x_min: f32,

    /// Right edge of the navigable area.
    #[serde(default = "default_x_max")]
    pub x_max: f32,

    /// Bottom edge of the navigable area.
    #[serde(default = "default_y_min")]
    pub y_min: f32,

    /// Top edge of the navigable area.
    #[serde(default = "default_y_max")]
    pub y_max: f32,

    /// Obstacle rectangles; defaults to the built-in floor plan.
    #[serde(default = "default_floor_plan")]
    pub obstacles: Vec<Obstacle>,
}

/// Start and goal points for the run.
#[derive(Clone, Debug, Deserialize)]
pub struct PointsSection {
    /// Start point (default (10, 50)).
    #[serde(default = "default_start")]
    pub start: Point2D,

    /// Goal point (default (110, 10)).
    #[serde(default = "default_goal")]
    pub goal: Point2D,
}

/// Validation settings.
#[derive(Clone, Debug, Deserialize)]
pub struct ValidationSection {
    /// Clearance margin around obstacles (default 0.0: exact
    /// boundary-inclusive containment).
    #[serde(default)]
    pub margin: f32,
}

/// Output settings.
#[derive(Clone, Debug, Deserialize)]
pub struct OutputSection {
    /// Path for the rendered SVG.
    #[serde(default = "default_svg_path")]
    pub svg_path: String,

    /// Title drawn above the map.
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_x_min() -> f32 {
    0.0
}
fn default_x_max() -> f32 {
    120.0
}
fn default_y_min() -> f32 {
    0.0
}
fn default_y_max() -> f32 {
    60.0
}
fn default_start() -> Point2D {
    Point2D::new(10.0, 50.0)
}
fn default_goal() -> Point2D {
    Point2D::new(110.0, 10.0)
}
fn default_svg_path() -> String {
    "output/map.svg".to_string()
}
fn default_title() -> String {
    "Navigation Map".to_string()
}

/// The built-in apartment floor plan: 19 rectangles inside (0,0)-(120,60).
fn default_floor_plan() -> Vec<Obstacle> {
    vec![
        Obstacle::new(0.0, 30.0, 7.0, 10.0),
        Obstacle::new(15.0, 30.0, 11.0, 10.0),
        Obstacle::new(20.0, 40.0, 1.0, 20.0),
        Obstacle::new(34.0, 30.0, 6.0, 10.0),
        Obstacle::new(36.0, 28.0, 4.0, 2.0),
        Obstacle::new(40.0, 28.0, 2.0, 5.0),
        Obstacle::new(40.0, 33.0, 2.0, 14.0),
        Obstacle::new(42.0, 33.0, 26.0, 14.0),
        Obstacle::new(62.0, 30.0, 6.0, 3.0),
        Obstacle::new(42.0, 10.0, 20.0, 3.0),
        Obstacle::new(62.0, 10.0, 6.0, 11.0),
        Obstacle::new(36.0, 10.0, 6.0, 10.0),
        Obstacle::new(36.0, 0.0, 32.0, 3.0),
        Obstacle::new(76.0, 20.0, 24.0, 4.0),
        Obstacle::new(88.0, 0.0, 12.0, 20.0),
        Obstacle::new(109.0, 24.0, 11.0, 6.0),
        Obstacle::new(116.0, 30.0, 4.0, 30.0),
        Obstacle::new(68.0, 56.0, 48.0, 4.0),
        Obstacle::new(40.0, 55.0, 28.0, 5.0),
    ]
}

impl Default for MapSection {
    fn default() -> Self {
        Self {
            x_min: default_x_min(),
            x_max: default_x_max(),
            y_min: default_y_min(),
            y_max: default_y_max(),
            obstacles: default_floor_plan(),
        }
    }
}

impl Default for PointsSection {
    fn default() -> Self {
        Self {
            start: default_start(),
            goal: default_goal(),
        }
    }
}

impl Default for ValidationSection {
    fn default() -> Self {
        Self { margin: 0.0 }
    }
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            svg_path: default_svg_path(),
            title: default_title(),
        }
    }
}

impl SceneConfig {
    /// Load a scene from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| MargaError::Config(format!("failed to read scene file: {}", e)))?;
        let scene: SceneConfig = toml::from_str(&content)?;
        Ok(scene)
    }

    /// Map bounds described by the scene.
    pub fn bounds(&self) -> Bounds {
        Bounds::from_extents(self.map.x_min, self.map.x_max, self.map.y_min, self.map.y_max)
    }

    /// Build the obstacle map described by the scene.
    ///
    /// Fails fast with [`MapError`] on the first invalid obstacle.
    pub fn build_map(&self) -> std::result::Result<ObstacleMap, MapError> {
        let mut map = ObstacleMap::new(self.bounds())?;
        for &obstacle in &self.map.obstacles {
            map.add_obstacle(obstacle)?;
        }
        Ok(map)
    }
}
