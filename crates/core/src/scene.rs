//! Scene model: a fixed wireframe solid plus a depth offset.

use arrayvec::ArrayVec;

use crate::projection::Projector;
use crate::types::{Edge, Point3, ScreenPoint, MAX_VERTICES};

/// Vertices of the reference cube (±1 on every axis).
///
/// Indices 0-3 are the back face (z = -1), 4-7 the front face (z = +1).
pub const CUBE_VERTICES: [Point3; 8] = [
    Point3::new(-1.0, -1.0, -1.0),
    Point3::new(1.0, -1.0, -1.0),
    Point3::new(1.0, 1.0, -1.0),
    Point3::new(-1.0, 1.0, -1.0),
    Point3::new(-1.0, -1.0, 1.0),
    Point3::new(1.0, -1.0, 1.0),
    Point3::new(1.0, 1.0, 1.0),
    Point3::new(-1.0, 1.0, 1.0),
];

/// Edges of the reference cube.
pub const CUBE_EDGES: [Edge; 12] = [
    // Back face
    Edge::new(0, 1),
    Edge::new(1, 2),
    Edge::new(2, 3),
    Edge::new(3, 0),
    // Front face
    Edge::new(4, 5),
    Edge::new(5, 6),
    Edge::new(6, 7),
    Edge::new(7, 4),
    // Connecting edges
    Edge::new(0, 4),
    Edge::new(1, 5),
    Edge::new(2, 6),
    Edge::new(3, 7),
];

/// Projected vertex positions, one slot per scene vertex.
pub type ProjectedVertices = ArrayVec<Option<ScreenPoint>, MAX_VERTICES>;

/// A wireframe solid and its current depth offset.
///
/// The geometry is borrowed from static tables and never changes. The depth
/// offset is the only mutable state.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    vertices: &'static [Point3],
    edges: &'static [Edge],
    depth_offset: f32,
}

impl Scene {
    /// Build a scene from static geometry.
    ///
    /// Returns `None` when there are more than [`MAX_VERTICES`] vertices or an
    /// edge refers to a missing vertex.
    pub fn new(vertices: &'static [Point3], edges: &'static [Edge]) -> Option<Self> {
        if vertices.len() > MAX_VERTICES {
            return None;
        }
        if !edges.iter().all(|e| e.is_within(vertices.len())) {
            return None;
        }
        Some(Self {
            vertices,
            edges,
            depth_offset: 0.0,
        })
    }

    /// The reference cube at offset 0.
    pub fn cube() -> Self {
        Self {
            vertices: &CUBE_VERTICES,
            edges: &CUBE_EDGES,
            depth_offset: 0.0,
        }
    }

    pub fn vertices(&self) -> &[Point3] {
        self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        self.edges
    }

    pub fn depth_offset(&self) -> f32 {
        self.depth_offset
    }

    /// Position the solid for a given frame: offset = `frame * step`.
    ///
    /// Computed from the frame index rather than accumulated, so the offset
    /// after N frames is exactly what one multiplication gives.
    pub fn set_frame(&mut self, frame: u32, step: f32) {
        // Frame 0 would give -0.0 for a negative step.
        self.depth_offset = if frame == 0 { 0.0 } else { frame as f32 * step };
    }

    /// Project every vertex with the current offset applied.
    pub fn project(&self, projector: &Projector) -> ProjectedVertices {
        self.vertices
            .iter()
            .map(|v| projector.project(v.translated_z(self.depth_offset)))
            .collect()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::cube()
    }
}
