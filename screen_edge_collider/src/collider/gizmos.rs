/// Gizmo diagnostics — debug spheres and rays for the last computation.

use glam::Vec3;
use crate::scene::SceneMaterializer;
use super::screen_edge_collider::ScreenEdgeCollider;

/// Gizmo colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GizmoColor {
    /// Projected corners
    Green,
    /// Wall centers
    Blue,
    /// Camera rays
    Red,
}

impl GizmoColor {
    /// Linear RGBA
    pub fn rgba(self) -> [f32; 4] {
        match self {
            GizmoColor::Green => [0.0, 1.0, 0.0, 1.0],
            GizmoColor::Blue => [0.0, 0.0, 1.0, 1.0],
            GizmoColor::Red => [1.0, 0.0, 0.0, 1.0],
        }
    }
}

/// Debug draw sink (host editor, line renderer, test recorder).
pub trait GizmoDrawer {
    fn draw_sphere(&mut self, center: Vec3, radius: f32, color: GizmoColor);

    /// Draw a segment from `origin` to `origin + direction`.
    fn draw_ray(&mut self, origin: Vec3, direction: Vec3, color: GizmoColor);
}

impl<M: SceneMaterializer> ScreenEdgeCollider<M> {
    /// Draw the corners and wall centers of the last computation.
    ///
    /// Nothing is drawn when gizmos are disabled or no corners are known.
    /// Corners are green spheres and wall centers blue spheres, both of
    /// radius `point_size`. With `rays` enabled, red rays go from the camera
    /// to each corner and along each unit wall direction.
    pub fn draw_gizmos<D: GizmoDrawer + ?Sized>(&self, drawer: &mut D) {
        let config = self.config();
        if !config.gizmos {
            return;
        }
        let Some(corners) = self.corners() else {
            return;
        };

        for corner in corners.to_array() {
            drawer.draw_sphere(corner, config.point_size, GizmoColor::Green);
        }

        let placements = self.placements();
        if let Some(walls) = placements {
            for wall in walls {
                drawer.draw_sphere(wall.position, config.point_size, GizmoColor::Blue);
            }
        }

        if !config.rays {
            return;
        }
        let Some(camera_position) = self.camera_position() else {
            return;
        };

        for corner in corners.to_array() {
            drawer.draw_ray(camera_position, corner - camera_position, GizmoColor::Red);
        }
        if let Some(walls) = placements {
            for wall in walls {
                drawer.draw_ray(camera_position, wall.direction, GizmoColor::Red);
            }
        }
    }
}

#[cfg(test)]
#[path = "gizmos_tests.rs"]
mod tests;
