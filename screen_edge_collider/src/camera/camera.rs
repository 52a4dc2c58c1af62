/// Camera — matrix-backed camera with a screen-to-world projection.
///
/// Holds the view and projection matrices, the viewport in screen pixels
/// and the near clip distance. The caller computes the matrices; the camera
/// only inverts them to turn screen points back into world points.
///
/// Conventions follow glam's right-handed helpers (`look_to_rh`,
/// `perspective_rh`, `orthographic_rh`): the camera looks down its local
/// -Z axis and NDC depth spans [0, 1]. Screen pixels have their origin at
/// the bottom-left corner of the viewport.
///
/// `FrustumRectangleProjector` reads the depth from the world z of the
/// forward axis, so only a camera oriented to look along world +Z (e.g.
/// `from_look_to(.., Vec3::Z, ..)`) puts the corners in front of it.

use glam::{Mat4, Vec2, Vec3};
use super::camera_frame::{CameraFrame, CameraProvider, ScreenToWorld};

/// Viewport rectangle in screen pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Viewport anchored at the screen origin.
    pub fn from_size(width: f32, height: f32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width,
            height,
        }
    }

    /// Width divided by height.
    pub fn aspect_ratio(&self) -> f32 {
        self.width / self.height
    }
}

/// Matrix-backed camera.
#[derive(Debug, Clone)]
pub struct Camera {
    view_matrix: Mat4,
    projection_matrix: Mat4,
    viewport: Viewport,
    near_clip: f32,
}

impl Camera {
    /// Create a camera from precomputed matrices.
    ///
    /// `near_clip` must match the near plane baked into `projection`.
    pub fn new(view: Mat4, projection: Mat4, viewport: Viewport, near_clip: f32) -> Self {
        Self {
            view_matrix: view,
            projection_matrix: projection,
            viewport,
            near_clip,
        }
    }

    /// Create a camera at `position` looking along `forward`.
    ///
    /// `forward` and `up` are normalized before building the view matrix.
    pub fn from_look_to(
        position: Vec3,
        forward: Vec3,
        up: Vec3,
        projection: Mat4,
        viewport: Viewport,
        near_clip: f32,
    ) -> Self {
        Self::new(
            Mat4::look_to_rh(position, forward.normalize(), up.normalize()),
            projection,
            viewport,
            near_clip,
        )
    }

    // ===== GETTERS =====

    pub fn view_matrix(&self) -> &Mat4 {
        &self.view_matrix
    }

    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection_matrix
    }

    /// Combined view-projection matrix (projection * view).
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix * self.view_matrix
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn near_clip(&self) -> f32 {
        self.near_clip
    }

    /// World-space position (translation of the inverse view matrix).
    pub fn position(&self) -> Vec3 {
        self.view_matrix.inverse().w_axis.truncate()
    }

    /// Unit world-space viewing direction.
    pub fn forward(&self) -> Vec3 {
        self.view_matrix
            .inverse()
            .transform_vector3(Vec3::NEG_Z)
            .normalize()
    }

    // ===== SETTERS =====

    pub fn set_view(&mut self, matrix: Mat4) {
        self.view_matrix = matrix;
    }

    pub fn set_projection(&mut self, matrix: Mat4, near_clip: f32) {
        self.projection_matrix = matrix;
        self.near_clip = near_clip;
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Distance of a world point along the view axis.
    fn view_depth(&self, world: Vec3) -> f32 {
        -self.view_matrix.transform_point3(world).z
    }
}

impl ScreenToWorld for Camera {
    /// Unproject the pixel's near/far points and pick the one at `depth`.
    ///
    /// View depth is affine along the pixel ray for both perspective and
    /// orthographic projections, so a single interpolation is exact.
    /// Requires a finite far plane.
    fn screen_to_world(&self, screen: Vec2, depth: f32) -> Vec3 {
        let ndc = Vec2::new(
            (screen.x - self.viewport.x) / self.viewport.width * 2.0 - 1.0,
            (screen.y - self.viewport.y) / self.viewport.height * 2.0 - 1.0,
        );

        let inverse_vp = self.view_projection_matrix().inverse();
        let near = inverse_vp.project_point3(ndc.extend(0.0));
        let far = inverse_vp.project_point3(ndc.extend(1.0));

        let near_depth = self.view_depth(near);
        let span = self.view_depth(far) - near_depth;
        if span.abs() <= f32::EPSILON {
            return near;
        }

        near.lerp(far, (depth - near_depth) / span)
    }
}

impl CameraProvider for Camera {
    fn camera_frame(&self) -> Option<CameraFrame<'_>> {
        Some(CameraFrame::new(
            self.position(),
            self.forward(),
            self.near_clip,
            self,
        ))
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
