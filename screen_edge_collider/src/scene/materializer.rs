/// SceneMaterializer — host hook that creates and destroys wall objects.

use crate::error::Result;
use crate::walls::WallPlacement;

/// Creates scene objects for wall placements.
///
/// The collider destroys every handle it received before materializing a
/// new set, and destroys the handles of a partially materialized set if a
/// later `materialize` call fails.
pub trait SceneMaterializer {
    /// Identifies one materialized wall
    type Handle: Copy;

    /// Create a wall object at `placement`.
    ///
    /// # Errors
    ///
    /// `Error::MaterializationFailed` if the host cannot create the object.
    fn materialize(&mut self, placement: &WallPlacement) -> Result<Self::Handle>;

    /// Remove a wall object. Unknown handles are ignored.
    fn destroy(&mut self, handle: Self::Handle);
}

impl<M: SceneMaterializer + ?Sized> SceneMaterializer for &mut M {
    type Handle = M::Handle;

    fn materialize(&mut self, placement: &WallPlacement) -> Result<Self::Handle> {
        (**self).materialize(placement)
    }

    fn destroy(&mut self, handle: Self::Handle) {
        (**self).destroy(handle)
    }
}
