/// ScreenEdgeConfig — tuning options for the screen edge walls.
///
/// Plain data with builder-style setters. Values are only checked by
/// `validate()`, which the collider calls before every computation.

use crate::camera::DisplayProvider;
use crate::error::{Error, Result};
use crate::walls::ScreenRect;
use crate::{edge_debug, edge_err};

const SOURCE: &str = "edge3d::Config";

/// Screen edge collider configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenEdgeConfig {
    /// Depth of the wall plane past the camera's near plane
    pub z_distance: f32,
    /// Wall thickness along the outward axis
    pub collider_thickness: f32,
    /// Take the screen rectangle from the display instead of `screen_width`/`screen_height`
    pub automatic_resolution: bool,
    pub screen_width: f32,
    pub screen_height: f32,
    /// Draw corner and wall center spheres
    pub gizmos: bool,
    /// Draw camera-to-corner and wall direction rays
    pub rays: bool,
    /// Gizmo sphere radius
    pub point_size: f32,
}

impl Default for ScreenEdgeConfig {
    fn default() -> Self {
        Self {
            z_distance: 4.0,
            collider_thickness: 1.0,
            automatic_resolution: true,
            screen_width: 1080.0,
            screen_height: 1920.0,
            gizmos: true,
            rays: false,
            point_size: 0.005,
        }
    }
}

impl ScreenEdgeConfig {
    pub fn with_z_distance(mut self, z_distance: f32) -> Self {
        self.z_distance = z_distance;
        self
    }

    pub fn with_collider_thickness(mut self, thickness: f32) -> Self {
        self.collider_thickness = thickness;
        self
    }

    /// Use a fixed screen rectangle (disables automatic resolution).
    pub fn with_screen_size(mut self, width: f32, height: f32) -> Self {
        self.automatic_resolution = false;
        self.screen_width = width;
        self.screen_height = height;
        self
    }

    pub fn with_automatic_resolution(mut self, automatic: bool) -> Self {
        self.automatic_resolution = automatic;
        self
    }

    pub fn with_gizmos(mut self, gizmos: bool) -> Self {
        self.gizmos = gizmos;
        self
    }

    pub fn with_rays(mut self, rays: bool) -> Self {
        self.rays = rays;
        self
    }

    pub fn with_point_size(mut self, point_size: f32) -> Self {
        self.point_size = point_size;
        self
    }

    /// Check the numeric options.
    ///
    /// The screen size is not checked here; `resolve_rect` validates the
    /// rectangle actually used. A negative `z_distance` is accepted.
    ///
    /// # Errors
    ///
    /// `Error::InvalidConfig` for a non-finite `z_distance`, or a negative or
    /// non-finite `collider_thickness` or `point_size`.
    pub fn validate(&self) -> Result<()> {
        if !self.z_distance.is_finite() {
            return Err(edge_err!(SOURCE, Error::InvalidConfig(format!(
                "z_distance must be finite (got {})",
                self.z_distance
            ))));
        }
        if !(self.collider_thickness.is_finite() && self.collider_thickness >= 0.0) {
            return Err(edge_err!(SOURCE, Error::InvalidConfig(format!(
                "collider_thickness must be finite and >= 0 (got {})",
                self.collider_thickness
            ))));
        }
        if !(self.point_size.is_finite() && self.point_size >= 0.0) {
            return Err(edge_err!(SOURCE, Error::InvalidConfig(format!(
                "point_size must be finite and >= 0 (got {})",
                self.point_size
            ))));
        }
        Ok(())
    }

    /// Screen rectangle to project.
    ///
    /// # Errors
    ///
    /// `Error::InvalidRect` if the display resolution (automatic mode) or the
    /// explicit size has a side that is not strictly positive.
    pub fn resolve_rect<D: DisplayProvider + ?Sized>(&self, display: &D) -> Result<ScreenRect> {
        let rect = if self.automatic_resolution {
            ScreenRect::from(display.current_resolution())
        } else {
            ScreenRect {
                width: self.screen_width,
                height: self.screen_height,
            }
        };
        rect.validate().map_err(|err| edge_err!(SOURCE, err))?;

        edge_debug!(
            SOURCE,
            "Resolved screen rect {}x{} (automatic: {})",
            rect.width,
            rect.height,
            self.automatic_resolution
        );

        Ok(rect)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
