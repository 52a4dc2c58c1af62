//! Wall geometry module
//!
//! Projects the screen rectangle onto a plane in front of the camera and
//! derives the four boundary wall placements from its corners.

mod screen_rect;
mod corners;
mod wall_placement;
mod projector;
mod planner;

pub use screen_rect::ScreenRect;
pub use corners::Corners;
pub use wall_placement::{
    Edge, WallPlacement,
    WALL_TOP, WALL_RIGHT, WALL_BOTTOM, WALL_LEFT,
};
pub use projector::FrustumRectangleProjector;
pub use planner::{EdgeWallPlanner, look_rotation, WORLD_UP, FALLBACK_UP};
