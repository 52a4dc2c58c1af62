//! Integration tests for the screen edge pipeline
//!
//! These tests drive ScreenEdgeCollider end to end with a matrix Camera or
//! a closure projection, a fixed display and an in-memory WallScene.
//!
//! Run with: cargo test --test pipeline_integration_tests

use screen_edge_collider::edge3d::camera::{Camera, CameraFrame, Resolution, Viewport};
use screen_edge_collider::edge3d::scene::WallScene;
use screen_edge_collider::edge3d::walls::{
    look_rotation, EdgeWallPlanner, FrustumRectangleProjector, ScreenRect,
    WALL_BOTTOM, WALL_LEFT, WALL_RIGHT, WALL_TOP,
};
use screen_edge_collider::edge3d::{Error, ScreenEdgeCollider, ScreenEdgeConfig};
use screen_edge_collider::glam::{Mat4, Vec2, Vec3};

const EPSILON: f32 = 1e-3;

// ============================================================================
// HELPERS
// ============================================================================

fn flat_projection(p: Vec2, d: f32) -> Vec3 {
    Vec3::new(p.x - 1.0, p.y - 1.0, d)
}

/// 200x100 viewport, 90 degree vertical FOV, looking down +Z from the origin.
fn wide_camera() -> Camera {
    let viewport = Viewport::from_size(200.0, 100.0);
    let projection = Mat4::perspective_rh(std::f32::consts::FRAC_PI_2, viewport.aspect_ratio(), 0.1, 100.0);
    Camera::from_look_to(Vec3::ZERO, Vec3::Z, Vec3::Y, projection, viewport, 0.1)
}

// ============================================================================
// SCENARIOS
// ============================================================================

#[test]
fn test_integration_flat_projection_walls() {
    let camera = CameraFrame::new(Vec3::ZERO, Vec3::Z, 0.0, &flat_projection);
    let config = ScreenEdgeConfig::default().with_screen_size(2.0, 2.0);
    let mut collider = ScreenEdgeCollider::new(config, WallScene::new());

    let walls = collider.recompute(&camera, &Resolution::new(1, 1)).unwrap();

    let corners = collider.corners().unwrap();
    assert_eq!(corners.bottom_left, Vec3::new(-1.0, -1.0, 4.0));
    assert_eq!(corners.bottom_right, Vec3::new(1.0, -1.0, 4.0));
    assert_eq!(corners.top_left, Vec3::new(-1.0, 1.0, 4.0));
    assert_eq!(corners.top_right, Vec3::new(1.0, 1.0, 4.0));

    let top = walls[WALL_TOP];
    assert_eq!(top.position, Vec3::new(0.0, 1.0, 4.0));
    assert!(top.direction.abs_diff_eq(Vec3::new(0.0, 1.0, 4.0).normalize(), 1e-6));
    assert_eq!(top.tangential_extent(), 2.0);
    assert!((top.rotation * Vec3::Z).abs_diff_eq(top.direction, 1e-5));

    let scene = collider.materializer();
    let (_, wall) = scene.wall_by_name("TopCollider").unwrap();
    assert_eq!(wall.position, top.position);
}

#[test]
fn test_integration_empty_rect_is_rejected() {
    let camera = CameraFrame::new(Vec3::ZERO, Vec3::Z, 0.0, &flat_projection);

    for (width, height) in [(0.0, 2.0), (2.0, 0.0)] {
        let config = ScreenEdgeConfig::default().with_screen_size(width, height);
        let mut collider = ScreenEdgeCollider::new(config, WallScene::new());

        let result = collider.recompute(&camera, &Resolution::new(1, 1));

        assert!(matches!(result, Err(Error::InvalidRect(_))));
        assert_eq!(collider.materializer().wall_count(), 0);
    }
}

#[test]
fn test_integration_camera_on_edge_midpoint_is_degenerate() {
    let camera = CameraFrame::new(Vec3::new(1.0, 0.0, 4.0), Vec3::Z, 0.0, &flat_projection);
    let config = ScreenEdgeConfig::default().with_screen_size(2.0, 2.0);
    let mut collider = ScreenEdgeCollider::new(config, WallScene::new());

    let result = collider.recompute(&camera, &Resolution::new(1, 1));

    assert!(matches!(result, Err(Error::DegenerateGeometry(_))));
    assert_eq!(collider.materializer().wall_count(), 0);
}

#[test]
fn test_integration_automatic_resolution_from_display() {
    let config = ScreenEdgeConfig::default();

    let rect = config.resolve_rect(&Resolution::new(1080, 1920)).unwrap();

    assert_eq!(rect, ScreenRect { width: 1080.0, height: 1920.0 });
}

// ============================================================================
// MATRIX CAMERA
// ============================================================================

#[test]
fn test_integration_perspective_camera_frames_the_frustum() {
    let camera = wide_camera();
    // Depth 0.1 + 4.9 = 5: half height 5, half width 10.
    let config = ScreenEdgeConfig::default().with_z_distance(4.9);
    let mut collider = ScreenEdgeCollider::new(config, WallScene::new());

    let walls = collider.recompute(&camera, &Resolution::new(200, 100)).unwrap();

    assert!(walls[WALL_TOP].position.abs_diff_eq(Vec3::new(0.0, 5.0, 5.0), EPSILON));
    assert!(walls[WALL_BOTTOM].position.abs_diff_eq(Vec3::new(0.0, -5.0, 5.0), EPSILON));
    assert!(walls[WALL_RIGHT].position.abs_diff_eq(Vec3::new(-10.0, 0.0, 5.0), EPSILON));
    assert!(walls[WALL_LEFT].position.abs_diff_eq(Vec3::new(10.0, 0.0, 5.0), EPSILON));

    assert!((walls[WALL_TOP].tangential_extent() - 20.0).abs() < EPSILON);
    assert!((walls[WALL_RIGHT].tangential_extent() - 10.0).abs() < EPSILON);
    for wall in walls {
        assert_eq!(wall.thickness(), 1.0);
        assert!(wall.rotation.abs_diff_eq(look_rotation(wall.direction), 1e-6));
    }
}

#[test]
fn test_integration_corners_lie_on_one_plane() {
    let camera = wide_camera();
    let rect = ScreenRect::new(200.0, 100.0).unwrap();

    let c = FrustumRectangleProjector::compute_corners_from(&camera, rect, 2.0).unwrap();

    let normal = (c.bottom_right - c.bottom_left).cross(c.top_left - c.bottom_left);
    assert!(normal.dot(c.top_right - c.bottom_left).abs() < EPSILON);
    assert!(((c.top_right - c.top_left) - (c.bottom_right - c.bottom_left)).length() < EPSILON);
}

#[test]
fn test_integration_recompute_is_idempotent() {
    let camera = wide_camera();
    let mut collider = ScreenEdgeCollider::new(ScreenEdgeConfig::default(), WallScene::new());
    let display = Resolution::new(200, 100);

    let first = collider.recompute(&camera, &display).unwrap();
    let second = collider.recompute(&camera, &display).unwrap();

    assert_eq!(first, second);
    assert_eq!(collider.materializer().wall_count(), 4);

    let corners = FrustumRectangleProjector::compute_corners_from(
        &camera,
        ScreenRect::new(200.0, 100.0).unwrap(),
        4.0,
    )
    .unwrap();
    let planned = EdgeWallPlanner::compute_wall_placements(&corners, camera.position(), 1.0).unwrap();
    assert_eq!(planned, second);
}

#[test]
fn test_integration_walls_follow_camera_movement() {
    let mut camera = wide_camera();
    let mut collider = ScreenEdgeCollider::new(ScreenEdgeConfig::default(), WallScene::new());
    let display = Resolution::new(200, 100);

    let before = collider.recompute(&camera, &display).unwrap();
    camera.set_view(Mat4::look_to_rh(Vec3::new(0.0, 3.0, 0.0), Vec3::Z, Vec3::Y));
    let after = collider.recompute(&camera, &display).unwrap();

    for (a, b) in before.iter().zip(after.iter()) {
        assert!((b.position - a.position).abs_diff_eq(Vec3::new(0.0, 3.0, 0.0), EPSILON));
    }
    assert_eq!(collider.materializer().wall_count(), 4);
}

#[test]
fn test_integration_missing_camera() {
    let camera: Option<Camera> = None;
    let mut collider = ScreenEdgeCollider::new(ScreenEdgeConfig::default(), WallScene::new());

    let result = collider.refresh_points(&camera, &Resolution::new(200, 100));

    assert_eq!(result, Err(Error::MissingCamera));
}
