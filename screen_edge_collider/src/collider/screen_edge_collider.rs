/// ScreenEdgeCollider — keeps four walls glued to the screen edges.
///
/// Each `recompute` reads the camera and display, projects the screen
/// rectangle, plans the walls and only then replaces the materialized set.
/// A failure before materialization leaves the previous walls untouched.

use glam::Vec3;
use crate::camera::{CameraFrame, CameraProvider, DisplayProvider};
use crate::config::ScreenEdgeConfig;
use crate::error::{Error, Result};
use crate::scene::SceneMaterializer;
use crate::walls::{Corners, EdgeWallPlanner, FrustumRectangleProjector, WallPlacement};
use crate::{edge_debug, edge_err, edge_warn};

const SOURCE: &str = "edge3d::Collider";

/// Screen edge wall manager
///
/// Owns the configuration and the scene materializer, and remembers the
/// corners, placements and wall handles of the last successful computation.
pub struct ScreenEdgeCollider<M: SceneMaterializer> {
    config: ScreenEdgeConfig,
    materializer: M,
    /// Corners from the last `refresh_points` / `recompute`
    corners: Option<Corners>,
    /// Camera position the corners were computed from
    camera_position: Option<Vec3>,
    /// Placements from the last successful `recompute`
    placements: Option<[WallPlacement; 4]>,
    /// Handles of the currently materialized walls (wall order)
    wall_handles: Vec<M::Handle>,
}

impl<M: SceneMaterializer> ScreenEdgeCollider<M> {
    pub fn new(config: ScreenEdgeConfig, materializer: M) -> Self {
        Self {
            config,
            materializer,
            corners: None,
            camera_position: None,
            placements: None,
            wall_handles: Vec::with_capacity(4),
        }
    }

    pub fn config(&self) -> &ScreenEdgeConfig {
        &self.config
    }

    /// Replace the configuration. Takes effect on the next computation.
    pub fn set_config(&mut self, config: ScreenEdgeConfig) {
        self.config = config;
    }

    pub fn materializer(&self) -> &M {
        &self.materializer
    }

    pub fn materializer_mut(&mut self) -> &mut M {
        &mut self.materializer
    }

    /// Corners of the last computation
    pub fn corners(&self) -> Option<&Corners> {
        self.corners.as_ref()
    }

    /// Camera position of the last computation
    pub fn camera_position(&self) -> Option<Vec3> {
        self.camera_position
    }

    /// Placements of the currently materialized walls
    pub fn placements(&self) -> Option<&[WallPlacement; 4]> {
        self.placements.as_ref()
    }

    /// Handles of the currently materialized walls, in TOP, RIGHT, BOTTOM,
    /// LEFT order. Empty before the first successful `recompute`.
    pub fn wall_handles(&self) -> &[M::Handle] {
        &self.wall_handles
    }

    /// Recompute the corners only (no walls are created or destroyed).
    ///
    /// # Errors
    ///
    /// - `Error::InvalidConfig` if the configuration does not validate
    /// - `Error::InvalidRect` if the resolved screen rectangle is empty
    /// - `Error::MissingCamera` if `camera` has no camera
    pub fn refresh_points<C, D>(&mut self, camera: &C, display: &D) -> Result<Corners>
    where
        C: CameraProvider + ?Sized,
        D: DisplayProvider + ?Sized,
    {
        let frame = self.camera_frame(camera)?;
        let corners = self.project(&frame, display)?;

        self.corners = Some(corners);
        self.camera_position = Some(frame.position);

        Ok(corners)
    }

    /// Recompute corners and placements, then replace the materialized walls.
    ///
    /// All geometry is computed before the scene is touched. The previous
    /// walls are then destroyed and the four new walls materialized. If the
    /// materializer fails, the walls created by this call are destroyed and
    /// the collider is left with no walls. Corners and camera position are
    /// only stored once all four walls exist, so after any failure they still
    /// describe the last successful computation.
    ///
    /// # Errors
    ///
    /// - Everything `refresh_points` returns
    /// - `Error::DegenerateGeometry` if the camera sits on a wall center
    /// - `Error::MaterializationFailed` (or any error) from the materializer
    pub fn recompute<C, D>(&mut self, camera: &C, display: &D) -> Result<[WallPlacement; 4]>
    where
        C: CameraProvider + ?Sized,
        D: DisplayProvider + ?Sized,
    {
        let frame = self.camera_frame(camera)?;
        let corners = self.project(&frame, display)?;
        let placements = EdgeWallPlanner::compute_wall_placements(
            &corners,
            frame.position,
            self.config.collider_thickness,
        )?;

        self.clear();

        let mut created = Vec::with_capacity(placements.len());
        for placement in &placements {
            match self.materializer.materialize(placement) {
                Ok(handle) => created.push(handle),
                Err(err) => {
                    edge_warn!(
                        SOURCE,
                        "{} wall failed, rolling back {} created wall(s)",
                        placement.edge.name(),
                        created.len()
                    );
                    for handle in created {
                        self.materializer.destroy(handle);
                    }
                    return Err(edge_err!(SOURCE, err));
                }
            }
        }

        self.corners = Some(corners);
        self.camera_position = Some(frame.position);
        self.wall_handles = created;
        self.placements = Some(placements);

        edge_debug!(
            SOURCE,
            "Recomputed walls at depth {} (thickness {})",
            self.config.z_distance,
            self.config.collider_thickness
        );

        Ok(placements)
    }

    /// Destroy all materialized walls. Corners are kept for gizmos.
    pub fn clear(&mut self) {
        for handle in self.wall_handles.drain(..) {
            self.materializer.destroy(handle);
        }
        self.placements = None;
    }

    fn camera_frame<'c, C: CameraProvider + ?Sized>(&self, camera: &'c C) -> Result<CameraFrame<'c>> {
        camera
            .camera_frame()
            .ok_or_else(|| edge_err!(SOURCE, Error::MissingCamera))
    }

    fn project<D: DisplayProvider + ?Sized>(
        &self,
        frame: &CameraFrame<'_>,
        display: &D,
    ) -> Result<Corners> {
        self.config.validate()?;
        let rect = self.config.resolve_rect(display)?;
        FrustumRectangleProjector::compute_corners(frame, rect, self.config.z_distance)
    }
}

#[cfg(test)]
#[path = "screen_edge_collider_tests.rs"]
mod tests;
