/// ScreenRect — size of the screen area framed by the walls.

use crate::error::{Error, Result};
use crate::camera::Resolution;

/// Screen rectangle size in pixels. Both sides must be strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    pub width: f32,
    pub height: f32,
}

impl ScreenRect {
    /// Create a validated rectangle.
    pub fn new(width: f32, height: f32) -> Result<Self> {
        let rect = Self { width, height };
        rect.validate()?;
        Ok(rect)
    }

    /// Check that both sides are strictly positive (NaN is rejected).
    pub fn validate(&self) -> Result<()> {
        if !(self.width > 0.0) {
            return Err(Error::InvalidRect(format!(
                "width must be > 0 (got {})",
                self.width
            )));
        }
        if !(self.height > 0.0) {
            return Err(Error::InvalidRect(format!(
                "height must be > 0 (got {})",
                self.height
            )));
        }
        Ok(())
    }
}

impl From<Resolution> for ScreenRect {
    fn from(resolution: Resolution) -> Self {
        Self {
            width: resolution.width as f32,
            height: resolution.height as f32,
        }
    }
}
