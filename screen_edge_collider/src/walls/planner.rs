/// EdgeWallPlanner — turns projected corners into four wall placements.
///
/// Each wall sits on the midpoint of one rectangle edge and faces away
/// from the camera. Sizing reuses one horizontal measurement (top edge) for
/// TOP/BOTTOM and one vertical measurement (left edge) for RIGHT/LEFT; the
/// rectangle is assumed to have equal opposite edges and is not re-checked.

use glam::{Mat3, Quat, Vec3};
use crate::error::{Error, Result};
use crate::{edge_debug, edge_err};
use super::corners::Corners;
use super::wall_placement::{Edge, WallPlacement};

const SOURCE: &str = "edge3d::Planner";

/// Up axis used to orient walls.
pub const WORLD_UP: Vec3 = Vec3::Y;

/// Up axis used instead of `WORLD_UP` when a wall faces straight up or down.
pub const FALLBACK_UP: Vec3 = Vec3::Z;

/// Rotation whose local +Z axis points along `direction`, with local +Y
/// as close to `WORLD_UP` as possible.
///
/// When `direction` is parallel to `WORLD_UP`, `FALLBACK_UP` is used. A zero
/// or non-finite `direction` yields `Quat::IDENTITY`.
pub fn look_rotation(direction: Vec3) -> Quat {
    let Some(forward) = direction.try_normalize() else {
        return Quat::IDENTITY;
    };

    let mut right = WORLD_UP.cross(forward);
    if right.length_squared() <= 1e-12 {
        right = FALLBACK_UP.cross(forward);
    }
    let right = right.normalize();
    let up = forward.cross(right);

    Quat::from_mat3(&Mat3::from_cols(right, up, forward)).normalize()
}

/// Computes wall placements from projected corners.
pub struct EdgeWallPlanner;

impl EdgeWallPlanner {
    /// Compute the TOP, RIGHT, BOTTOM, LEFT wall placements (in that order).
    ///
    /// # Errors
    ///
    /// `Error::DegenerateGeometry` if a wall center coincides with
    /// `camera_position` (or is not finite), leaving no outward direction.
    pub fn compute_wall_placements(
        corners: &Corners,
        camera_position: Vec3,
        thickness: f32,
    ) -> Result<[WallPlacement; 4]> {
        let horizontal = corners.horizontal_extent();
        let vertical = corners.vertical_extent();

        let mut placements = [WallPlacement {
            edge: Edge::Top,
            position: Vec3::ZERO,
            direction: Vec3::Z,
            rotation: Quat::IDENTITY,
            scale: Vec3::ZERO,
        }; 4];

        for edge in Edge::ALL {
            let position = corners.edge_center(edge);
            let direction = (position - camera_position).try_normalize().ok_or_else(|| {
                edge_err!(
                    SOURCE,
                    Error::DegenerateGeometry(format!(
                        "{} wall center {:?} has no direction from camera at {:?}",
                        edge.name(),
                        position,
                        camera_position
                    ))
                )
            })?;

            let scale = if edge.is_horizontal() {
                Vec3::new(horizontal, 0.0, thickness)
            } else {
                Vec3::new(0.0, vertical, thickness)
            };

            placements[edge.index()] = WallPlacement {
                edge,
                position,
                direction,
                rotation: look_rotation(direction),
                scale,
            };
        }

        edge_debug!(
            SOURCE,
            "Planned walls: horizontal extent {}, vertical extent {}, thickness {}",
            horizontal,
            vertical,
            thickness
        );

        Ok(placements)
    }
}

#[cfg(test)]
#[path = "planner_tests.rs"]
mod tests;
