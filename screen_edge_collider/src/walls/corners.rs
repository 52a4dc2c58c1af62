/// Corners — the projected screen rectangle in world space.
///
/// The four points lie on the plane at `near_clip + z_distance` in front
/// of the camera. Opposite edges are parallel and, for projections affine
/// in screen coordinates, equally long.

use glam::Vec3;
use super::wall_placement::Edge;

/// World-space corners of the projected screen rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Corners {
    pub bottom_left: Vec3,
    pub bottom_right: Vec3,
    pub top_left: Vec3,
    pub top_right: Vec3,
}

impl Corners {
    /// Corners in row-major screen order: bottom-left, bottom-right,
    /// top-left, top-right.
    pub fn to_array(&self) -> [Vec3; 4] {
        [self.bottom_left, self.bottom_right, self.top_left, self.top_right]
    }

    /// The two corners bounding an edge.
    pub fn edge_endpoints(&self, edge: Edge) -> (Vec3, Vec3) {
        match edge {
            Edge::Top => (self.top_left, self.top_right),
            Edge::Right => (self.top_right, self.bottom_right),
            Edge::Bottom => (self.bottom_left, self.bottom_right),
            Edge::Left => (self.bottom_left, self.top_left),
        }
    }

    /// Midpoint of an edge.
    pub fn edge_center(&self, edge: Edge) -> Vec3 {
        let (a, b) = self.edge_endpoints(edge);
        (a + b) / 2.0
    }

    /// Length of the top edge, shared by the TOP and BOTTOM walls.
    pub fn horizontal_extent(&self) -> f32 {
        self.top_left.distance(self.top_right)
    }

    /// Length of the left edge, shared by the RIGHT and LEFT walls.
    pub fn vertical_extent(&self) -> f32 {
        self.top_left.distance(self.bottom_left)
    }

    /// Intersection of the diagonals.
    pub fn center(&self) -> Vec3 {
        (self.bottom_left + self.top_right) / 2.0
    }
}

#[cfg(test)]
#[path = "corners_tests.rs"]
mod tests;
