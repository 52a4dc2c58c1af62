//! Display resolution source for automatic-resolution mode.

/// Display size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Exposes the display's current resolution.
pub trait DisplayProvider {
    fn current_resolution(&self) -> Resolution;
}

/// A fixed display.
impl DisplayProvider for Resolution {
    fn current_resolution(&self) -> Resolution {
        *self
    }
}

impl<T: DisplayProvider + ?Sized> DisplayProvider for &T {
    fn current_resolution(&self) -> Resolution {
        (**self).current_resolution()
    }
}
