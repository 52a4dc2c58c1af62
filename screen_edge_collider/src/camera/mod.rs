//! Camera module — camera snapshots, projection and display providers.
//!
//! The core never owns a camera. It reads a `CameraFrame` from a
//! `CameraProvider` once per computation and asks a `DisplayProvider`
//! for the resolution when automatic resolution is enabled.

mod camera;
mod camera_frame;
mod display;

pub use camera::{Camera, Viewport};
pub use camera_frame::{CameraFrame, CameraProvider, ScreenToWorld};
pub use display::{DisplayProvider, Resolution};
