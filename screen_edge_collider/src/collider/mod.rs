//! Collider module
//!
//! `ScreenEdgeCollider` drives the projector, the planner and a scene
//! materializer, and draws diagnostic gizmos for the last computation.

mod screen_edge_collider;
mod gizmos;

pub use screen_edge_collider::ScreenEdgeCollider;
pub use gizmos::{GizmoDrawer, GizmoColor};
