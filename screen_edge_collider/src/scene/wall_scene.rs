/// WallScene — in-memory wall objects keyed by SlotMap keys.
///
/// Each materialized placement becomes a named `WallInstance` with a
/// transform. Keys stay valid until their own wall is destroyed.

use glam::{Mat4, Quat, Vec3};
use slotmap::{new_key_type, SlotMap};
use crate::error::Result;
use crate::edge_trace;
use crate::walls::{Edge, WallPlacement};
use super::materializer::SceneMaterializer;

const SOURCE: &str = "edge3d::WallScene";

new_key_type! {
    /// Stable key for a wall within a WallScene.
    pub struct WallKey;
}

/// A materialized wall
#[derive(Debug, Clone, PartialEq)]
pub struct WallInstance {
    /// "TopCollider", "RightCollider", "BottomCollider" or "LeftCollider"
    pub name: String,
    pub edge: Edge,
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl WallInstance {
    pub fn from_placement(placement: &WallPlacement) -> Self {
        Self {
            name: format!("{}Collider", placement.edge.name()),
            edge: placement.edge,
            position: placement.position,
            rotation: placement.rotation,
            scale: placement.scale,
        }
    }

    /// Local-to-world transform (scale, then rotation, then translation).
    pub fn world_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }
}

/// In-memory scene holding the materialized walls.
#[derive(Debug, Default)]
pub struct WallScene {
    walls: SlotMap<WallKey, WallInstance>,
}

impl WallScene {
    pub fn new() -> Self {
        Self {
            walls: SlotMap::with_key(),
        }
    }

    /// Get a wall by key
    pub fn wall(&self, key: WallKey) -> Option<&WallInstance> {
        self.walls.get(key)
    }

    /// Find a wall by its object name
    pub fn wall_by_name(&self, name: &str) -> Option<(WallKey, &WallInstance)> {
        self.walls.iter().find(|(_, wall)| wall.name == name)
    }

    pub fn wall_count(&self) -> usize {
        self.walls.len()
    }

    /// Iterate over all walls (key, wall)
    pub fn walls(&self) -> impl Iterator<Item = (WallKey, &WallInstance)> {
        self.walls.iter()
    }
}

impl SceneMaterializer for WallScene {
    type Handle = WallKey;

    fn materialize(&mut self, placement: &WallPlacement) -> Result<WallKey> {
        let wall = WallInstance::from_placement(placement);
        edge_trace!(SOURCE, "Materialize {} at {:?}", wall.name, wall.position);
        Ok(self.walls.insert(wall))
    }

    fn destroy(&mut self, handle: WallKey) {
        if let Some(wall) = self.walls.remove(handle) {
            edge_trace!(SOURCE, "Destroy {}", wall.name);
        }
    }
}

#[cfg(test)]
#[path = "wall_scene_tests.rs"]
mod tests;
