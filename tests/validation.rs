//! Integration tests for map construction and point validation.

use marga_map::core::{Bounds, Point2D};
use marga_map::map::{MapError, Obstacle, ObstacleMap};
use marga_map::validate::{PointValidator, Rejection, Validation};

/// Map bounds (0,0)-(150,100) with one obstacle at (20,20), 30 x 20.
fn scenario_map() -> ObstacleMap {
    let mut map = ObstacleMap::new(Bounds::from_extents(0.0, 150.0, 0.0, 100.0)).unwrap();
    map.add_obstacle(Obstacle::new(20.0, 20.0, 30.0, 20.0)).unwrap();
    map
}

#[test]
fn degenerate_obstacles_fail_construction() {
    let mut map = ObstacleMap::new(Bounds::from_extents(0.0, 100.0, 0.0, 100.0)).unwrap();

    for (width, height) in [(0.0, 10.0), (10.0, 0.0), (-5.0, 10.0), (10.0, -5.0)] {
        let result = map.add_obstacle(Obstacle::new(10.0, 10.0, width, height));
        assert!(
            matches!(result, Err(MapError::DegenerateObstacle { .. })),
            "size {}x{} must be rejected",
            width,
            height
        );
    }
    assert!(map.is_empty());
}

#[test]
fn obstacles_outside_bounds_fail_construction() {
    let mut map = ObstacleMap::new(Bounds::from_extents(0.0, 100.0, 0.0, 100.0)).unwrap();

    // Fully outside
    let result = map.add_obstacle(Obstacle::new(200.0, 200.0, 10.0, 10.0));
    assert!(matches!(result, Err(MapError::ObstacleOutOfBounds { .. })));

    // Partially leaking over the right edge
    let result = map.add_obstacle(Obstacle::new(95.0, 10.0, 10.0, 10.0));
    assert!(matches!(result, Err(MapError::ObstacleOutOfBounds { .. })));

    assert!(map.is_empty());
}

#[test]
fn point_strictly_inside_obstacle_is_found() {
    let map = scenario_map();

    let (index, obstacle) = map.obstacle_at(Point2D::new(35.0, 30.0)).unwrap();
    assert_eq!(index, 0);
    assert_eq!(*obstacle, Obstacle::new(20.0, 20.0, 30.0, 20.0));
}

#[test]
fn point_on_obstacle_boundary_is_found() {
    let map = scenario_map();

    // All four corners and an edge midpoint count as on the obstacle.
    for point in [
        Point2D::new(20.0, 20.0),
        Point2D::new(50.0, 20.0),
        Point2D::new(50.0, 40.0),
        Point2D::new(20.0, 40.0),
        Point2D::new(35.0, 40.0),
    ] {
        assert!(
            map.obstacle_at(point).is_some(),
            "({}, {}) must collide",
            point.x,
            point.y
        );
    }
}

#[test]
fn free_point_within_bounds_is_accepted() {
    let map = scenario_map();
    let validator = PointValidator::new();

    assert_eq!(
        validator.validate(Point2D::new(10.0, 10.0), &map),
        Validation::Accepted
    );
}

#[test]
fn out_of_bounds_wins_over_obstacle_overlap() {
    // Obstacle touching the right edge; a point past the edge is reported
    // as out of bounds, not as a collision.
    let mut map = ObstacleMap::new(Bounds::from_extents(0.0, 100.0, 0.0, 100.0)).unwrap();
    map.add_obstacle(Obstacle::new(90.0, 0.0, 10.0, 100.0)).unwrap();
    let validator = PointValidator::new();

    let point = Point2D::new(100.1, 50.0);
    assert_eq!(
        validator.validate(point, &map),
        Validation::Rejected(Rejection::OutOfBounds { point })
    );
}

#[test]
fn validation_is_idempotent() {
    let map = scenario_map();
    let validator = PointValidator::new();

    for point in [
        Point2D::new(35.0, 30.0),
        Point2D::new(10.0, 10.0),
        Point2D::new(200.0, 50.0),
        Point2D::new(20.0, 20.0),
    ] {
        assert_eq!(
            validator.validate(point, &map),
            validator.validate(point, &map)
        );
    }
}

#[test]
fn validating_start_says_nothing_about_goal() {
    let map = scenario_map();
    let validator = PointValidator::new();

    // Accepted start, rejected goal: both outcomes must be computed
    // independently.
    assert!(
        validator
            .validate(Point2D::new(10.0, 10.0), &map)
            .is_accepted()
    );
    assert!(
        !validator
            .validate(Point2D::new(35.0, 30.0), &map)
            .is_accepted()
    );
}

#[test]
fn probe_points_cover_all_outcomes() {
    let map = scenario_map();
    let validator = PointValidator::new();

    // (35, 30) is inside the obstacle
    assert_eq!(
        validator.validate(Point2D::new(35.0, 30.0), &map),
        Validation::Rejected(Rejection::ObstacleCollision { index: 0 })
    );

    // (10, 10) is free
    assert_eq!(
        validator.validate(Point2D::new(10.0, 10.0), &map),
        Validation::Accepted
    );

    // (200, 50) is outside the map
    let point = Point2D::new(200.0, 50.0);
    assert_eq!(
        validator.validate(point, &map),
        Validation::Rejected(Rejection::OutOfBounds { point })
    );

    // (20, 20) is the obstacle's exact corner
    assert_eq!(
        validator.validate(Point2D::new(20.0, 20.0), &map),
        Validation::Rejected(Rejection::ObstacleCollision { index: 0 })
    );
}

#[test]
fn margin_widens_the_collision_check() {
    let map = scenario_map();
    let near = Point2D::new(19.6, 30.0);

    // 0.4 units left of the obstacle edge.
    assert!(PointValidator::new().validate(near, &map).is_accepted());
    assert_eq!(
        PointValidator::with_margin(0.5).validate(near, &map),
        Validation::Rejected(Rejection::ObstacleCollision { index: 0 })
    );
}

#[test]
fn shared_map_validates_concurrently() {
    use std::thread;

    // The map is read-only after setup; concurrent validation of many
    // candidate pairs needs no locking.
    let map = scenario_map();
    let validator = PointValidator::new();

    thread::scope(|s| {
        for i in 0..4 {
            let map = &map;
            s.spawn(move || {
                let point = Point2D::new(5.0 + i as f32, 5.0);
                assert!(validator.validate(point, map).is_accepted());
            });
        }
    });
}
