/// FrustumRectangleProjector — screen rectangle to world-space corners.
///
/// The offset `forward * (near_clip + z_distance)` is added to each screen
/// corner `(x, y, 0)`: its x/y shift the screen point and its z is passed to
/// the camera's screen-to-world projection as the view depth. The projector
/// does not model the projection itself; it only builds the four screen
/// points and collects the results.
///
/// The corners land at `near_clip + z_distance` along the forward axis only
/// when `forward` is world +Z. Any other forward axis skews or mirrors them.

use glam::{Vec2, Vec3};
use crate::camera::{CameraFrame, CameraProvider};
use crate::error::{Error, Result};
use crate::{edge_err, edge_trace};
use super::corners::Corners;
use super::screen_rect::ScreenRect;

const SOURCE: &str = "edge3d::Projector";

/// Projects the screen rectangle onto the plane at a fixed depth.
pub struct FrustumRectangleProjector;

impl FrustumRectangleProjector {
    /// Compute the world-space corners of `rect` at `z_distance` past the
    /// near plane.
    ///
    /// `z_distance` is used as given; a negative value yields a plane at or
    /// behind the near plane.
    ///
    /// Expects `camera.forward` to be world +Z. A camera looking down -Z gets
    /// its corners mirrored behind it, and one looking along X gets a depth
    /// of 0, collapsing all four corners onto the camera position.
    ///
    /// # Errors
    ///
    /// `Error::InvalidRect` if either side of `rect` is not strictly positive.
    pub fn compute_corners(
        camera: &CameraFrame<'_>,
        rect: ScreenRect,
        z_distance: f32,
    ) -> Result<Corners> {
        rect.validate().map_err(|err| edge_err!(SOURCE, err))?;

        let depth_offset = camera.forward * (camera.near_clip + z_distance);
        let project = |x: f32, y: f32| {
            let screen = Vec3::new(x, y, 0.0) + depth_offset;
            camera.screen_to_world(Vec2::new(screen.x, screen.y), screen.z)
        };

        let corners = Corners {
            bottom_left: project(0.0, 0.0),
            bottom_right: project(rect.width, 0.0),
            top_left: project(0.0, rect.height),
            top_right: project(rect.width, rect.height),
        };

        edge_trace!(
            SOURCE,
            "{}x{} at depth offset {:?} -> {:?}",
            rect.width,
            rect.height,
            depth_offset,
            corners
        );

        Ok(corners)
    }

    /// Like `compute_corners`, reading the camera from `provider`.
    ///
    /// # Errors
    ///
    /// - `Error::MissingCamera` if the provider has no camera
    /// - `Error::InvalidRect` as for `compute_corners`
    pub fn compute_corners_from<P: CameraProvider + ?Sized>(
        provider: &P,
        rect: ScreenRect,
        z_distance: f32,
    ) -> Result<Corners> {
        let camera = provider
            .camera_frame()
            .ok_or_else(|| edge_err!(SOURCE, Error::MissingCamera))?;
        Self::compute_corners(&camera, rect, z_distance)
    }
}

#[cfg(test)]
#[path = "projector_tests.rs"]
mod tests;
