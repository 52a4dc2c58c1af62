/// CameraFrame — the camera snapshot a corner projection reads.
///
/// A frame borrows its screen-to-world projection from whoever provides
/// the camera (host engine, matrix `Camera`, test closure). It is read
/// once per computation and never stored by the core.

use std::fmt;
use glam::{Vec2, Vec3};

/// Maps a screen-space point plus a depth to a world-space point.
///
/// `screen` is in pixels with the origin at the bottom-left of the screen.
/// `depth` is the distance along the camera's view axis, in world units.
///
/// Any `Fn(Vec2, f32) -> Vec3` is a projection:
///
/// ```
/// use screen_edge_collider::edge3d::camera::ScreenToWorld;
/// use screen_edge_collider::glam::{Vec2, Vec3};
///
/// let flat = |p: Vec2, d: f32| Vec3::new(p.x - 1.0, p.y - 1.0, d);
/// assert_eq!(flat.screen_to_world(Vec2::ZERO, 4.0), Vec3::new(-1.0, -1.0, 4.0));
/// ```
pub trait ScreenToWorld {
    fn screen_to_world(&self, screen: Vec2, depth: f32) -> Vec3;
}

impl<F> ScreenToWorld for F
where
    F: Fn(Vec2, f32) -> Vec3,
{
    fn screen_to_world(&self, screen: Vec2, depth: f32) -> Vec3 {
        self(screen, depth)
    }
}

/// Immutable camera snapshot used for one corner projection.
#[derive(Clone, Copy)]
pub struct CameraFrame<'a> {
    /// World-space camera position
    pub position: Vec3,
    /// Unit forward direction
    pub forward: Vec3,
    /// Near clip plane distance
    pub near_clip: f32,
    /// Screen-to-world projection of the camera
    pub projection: &'a dyn ScreenToWorld,
}

impl<'a> CameraFrame<'a> {
    pub fn new(
        position: Vec3,
        forward: Vec3,
        near_clip: f32,
        projection: &'a dyn ScreenToWorld,
    ) -> Self {
        Self {
            position,
            forward,
            near_clip,
            projection,
        }
    }

    /// Project a screen point at `depth` through the camera's projection.
    pub fn screen_to_world(&self, screen: Vec2, depth: f32) -> Vec3 {
        self.projection.screen_to_world(screen, depth)
    }
}

impl fmt::Debug for CameraFrame<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CameraFrame")
            .field("position", &self.position)
            .field("forward", &self.forward)
            .field("near_clip", &self.near_clip)
            .finish_non_exhaustive()
    }
}

/// Source of the current camera.
///
/// Returns `None` when no camera is configured; projection then fails
/// with `Error::MissingCamera`.
pub trait CameraProvider {
    fn camera_frame(&self) -> Option<CameraFrame<'_>>;
}

impl CameraProvider for CameraFrame<'_> {
    fn camera_frame(&self) -> Option<CameraFrame<'_>> {
        Some(*self)
    }
}

impl<T: CameraProvider> CameraProvider for Option<T> {
    fn camera_frame(&self) -> Option<CameraFrame<'_>> {
        self.as_ref().and_then(|camera| camera.camera_frame())
    }
}

impl<T: CameraProvider + ?Sized> CameraProvider for &T {
    fn camera_frame(&self) -> Option<CameraFrame<'_>> {
        (**self).camera_frame()
    }
}

#[cfg(test)]
#[path = "camera_frame_tests.rs"]
mod tests;
