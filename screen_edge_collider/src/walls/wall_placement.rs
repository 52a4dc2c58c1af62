/// Wall placement — where one boundary volume goes and how it is shaped.

use glam::{Quat, Vec3};

/// Wall indices, in the order walls are produced.
pub const WALL_TOP: usize = 0;
pub const WALL_RIGHT: usize = 1;
pub const WALL_BOTTOM: usize = 2;
pub const WALL_LEFT: usize = 3;

/// Screen edge framed by a wall
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    /// All edges in wall order (TOP, RIGHT, BOTTOM, LEFT).
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];

    /// Index of the wall in a `[WallPlacement; 4]`.
    pub const fn index(self) -> usize {
        match self {
            Edge::Top => WALL_TOP,
            Edge::Right => WALL_RIGHT,
            Edge::Bottom => WALL_BOTTOM,
            Edge::Left => WALL_LEFT,
        }
    }

    /// Top and bottom walls run horizontally across the screen.
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Edge::Top | Edge::Bottom)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Edge::Top => "Top",
            Edge::Right => "Right",
            Edge::Bottom => "Bottom",
            Edge::Left => "Left",
        }
    }
}

/// Placement of one wall.
///
/// The wall's local +Z axis points along `direction`. `scale.z` is the
/// thickness; the tangential extent is on `scale.x` for horizontal walls
/// and on `scale.y` for vertical walls. The remaining axis is 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallPlacement {
    pub edge: Edge,
    /// Midpoint of the framed edge
    pub position: Vec3,
    /// Unit vector from the camera to `position`
    pub direction: Vec3,
    /// Rotation taking local +Z onto `direction`
    pub rotation: Quat,
    pub scale: Vec3,
}

impl WallPlacement {
    /// Extent along the framed edge.
    pub fn tangential_extent(&self) -> f32 {
        if self.edge.is_horizontal() {
            self.scale.x
        } else {
            self.scale.y
        }
    }

    /// Extent along the outward axis.
    pub fn thickness(&self) -> f32 {
        self.scale.z
    }
}
