//! marga-map: validate and render a navigation map.
//!
//! Loads a scene (TOML file or built-in defaults), checks that the start
//! and goal points are inside the map bounds and clear of every obstacle,
//! and renders the scene to SVG. A rejected point aborts the render step
//! with its reason; nothing invalid is ever drawn.

use std::path::{Path, PathBuf};

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{error, info};

use marga_map::core::Point2D;
use marga_map::error::{MargaError, Result};
use marga_map::map::ObstacleMap;
use marga_map::render::{SvgConfig, SvgVisualizer};
use marga_map::sample::sample_free_point;
use marga_map::scene::SceneConfig;
use marga_map::validate::{PointValidator, Validation};

/// Validate and render a navigation map
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Scene configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the start point as "x,y"
    #[arg(long)]
    start: Option<String>,

    /// Override the goal point as "x,y"
    #[arg(long)]
    goal: Option<String>,

    /// Output SVG path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Title drawn above the map
    #[arg(long)]
    title: Option<String>,

    /// Sample a random collision-free start point
    #[arg(long)]
    random_start: bool,

    /// Sample a random collision-free goal point
    #[arg(long)]
    random_goal: bool,

    /// RNG seed for random sampling
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

/// Attempts when sampling a random free point before giving up.
const SAMPLE_ATTEMPTS: usize = 1000;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("marga_map=info".parse().unwrap()),
        )
        .init();

    let args = Args::parse();

    let mut scene = match &args.config {
        Some(path) => {
            info!("Loading scene from {:?}", path);
            SceneConfig::load(path)?
        }
        None if Path::new("marga.toml").exists() => {
            info!("Loading scene from marga.toml");
            SceneConfig::load(Path::new("marga.toml"))?
        }
        None => {
            info!("Using built-in default scene");
            SceneConfig::default()
        }
    };

    // CLI overrides are applied after the file, so a run's inputs never
    // require editing the scene file.
    if let Some(s) = &args.start {
        scene.points.start = parse_point(s)?;
    }
    if let Some(s) = &args.goal {
        scene.points.goal = parse_point(s)?;
    }
    if let Some(path) = &args.output {
        scene.output.svg_path = path.display().to_string();
    }
    if let Some(title) = &args.title {
        scene.output.title = title.clone();
    }

    let map = scene.build_map()?;
    let bounds = map.bounds();
    info!(
        "Map bounds ({:.0}, {:.0}) to ({:.0}, {:.0}), {} obstacles, {:.0} units² blocked",
        bounds.min.x,
        bounds.min.y,
        bounds.max.x,
        bounds.max.y,
        map.len(),
        map.blocked_area()
    );

    let validator = PointValidator::with_margin(scene.validation.margin);
    if validator.margin() > 0.0 {
        info!("Validation margin: {:.2} units", validator.margin());
    }

    let mut rng = StdRng::seed_from_u64(args.seed);
    if args.random_start {
        scene.points.start = sample_free_point(&map, &validator, &mut rng, SAMPLE_ATTEMPTS)
            .ok_or_else(|| {
                MargaError::Config(format!(
                    "no collision-free start point found in {} attempts",
                    SAMPLE_ATTEMPTS
                ))
            })?;
        info!(
            "Sampled start point ({:.2}, {:.2})",
            scene.points.start.x, scene.points.start.y
        );
    }
    if args.random_goal {
        scene.points.goal = sample_free_point(&map, &validator, &mut rng, SAMPLE_ATTEMPTS)
            .ok_or_else(|| {
                MargaError::Config(format!(
                    "no collision-free goal point found in {} attempts",
                    SAMPLE_ATTEMPTS
                ))
            })?;
        info!(
            "Sampled goal point ({:.2}, {:.2})",
            scene.points.goal.x, scene.points.goal.y
        );
    }

    // Start and goal are validated independently; either rejection aborts
    // the render step.
    require_valid("start", scene.points.start, &validator, &map)?;
    require_valid("goal", scene.points.goal, &validator, &map)?;
    info!(
        "Start ({:.1}, {:.1}) and goal ({:.1}, {:.1}) validated, {:.1} units apart",
        scene.points.start.x,
        scene.points.start.y,
        scene.points.goal.x,
        scene.points.goal.y,
        scene.points.start.distance(&scene.points.goal)
    );

    let svg_path = PathBuf::from(&scene.output.svg_path);
    if let Some(parent) = svg_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let visualizer = SvgVisualizer::new(map, SvgConfig::default())
        .with_title(&scene.output.title)
        .with_start(scene.points.start)
        .with_goal(scene.points.goal);
    visualizer.save(&svg_path)?;
    info!("SVG saved to {:?}", svg_path);

    Ok(())
}

/// Apply the shell's policy to a validation outcome: report and abort.
fn require_valid(
    which: &'static str,
    point: Point2D,
    validator: &PointValidator,
    map: &ObstacleMap,
) -> Result<()> {
    match validator.validate(point, map) {
        Validation::Accepted => Ok(()),
        Validation::Rejected(reason) => {
            error!(
                "{} point ({:.2}, {:.2}) rejected [{}]: {}",
                which,
                point.x,
                point.y,
                reason.code(),
                reason
            );
            Err(MargaError::RejectedPoint { which, reason })
        }
    }
}

/// Parse a point given as "x,y".
fn parse_point(s: &str) -> Result<Point2D> {
    let parse = |part: Option<&str>| {
        part.and_then(|p| p.trim().parse::<f32>().ok())
            .ok_or_else(|| MargaError::Config(format!("invalid point '{}', expected \"x,y\"", s)))
    };

    let mut parts = s.split(',');
    let x = parse(parts.next())?;
    let y = parse(parts.next())?;
    if parts.next().is_some() {
        return Err(MargaError::Config(format!(
            "invalid point '{}', expected \"x,y\"",
            s
        )));
    }
    Ok(Point2D::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_point() {
        assert_eq!(parse_point("10,50").unwrap(), Point2D::new(10.0, 50.0));
        assert_eq!(parse_point(" 1.5, 2.5 ").unwrap(), Point2D::new(1.5, 2.5));
    }

    #[test]
    fn test_parse_point_rejects_garbage() {
        assert!(parse_point("10").is_err());
        assert!(parse_point("a,b").is_err());
        assert!(parse_point("1,2,3").is_err());
    }
}
