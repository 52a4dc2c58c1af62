//! Scene module
//!
//! Turns wall placements into host scene objects. The collider only sees
//! the `SceneMaterializer` trait; `WallScene` is an in-memory host used
//! for headless runs and tests.

mod materializer;
mod wall_scene;

pub use materializer::SceneMaterializer;
pub use wall_scene::{WallScene, WallKey, WallInstance};
