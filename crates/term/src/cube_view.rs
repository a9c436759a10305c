//! CubeView: draws a wireframe scene into a framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{Projector, Scene};
use crate::fb::FrameBuffer;
use crate::types::{EDGE_CHAR, VERTEX_CHAR};

/// Counts from one rendered frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    /// Vertices in front of the near plane.
    pub visible_vertices: usize,
    /// Edges with both endpoints visible.
    pub drawn_edges: usize,
}

/// Wireframe renderer for a [`Scene`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubeView {
    projector: Projector,
    edge_char: char,
    vertex_char: char,
}

impl Default for CubeView {
    fn default() -> Self {
        Self {
            projector: Projector::default(),
            edge_char: EDGE_CHAR,
            vertex_char: VERTEX_CHAR,
        }
    }
}

impl CubeView {
    pub fn new(projector: Projector) -> Self {
        Self {
            projector,
            ..Self::default()
        }
    }

    pub fn with_chars(mut self, edge_char: char, vertex_char: char) -> Self {
        self.edge_char = edge_char;
        self.vertex_char = vertex_char;
        self
    }

    pub fn projector(&self) -> &Projector {
        &self.projector
    }

    /// Clear `fb` and draw the scene at its current depth offset.
    ///
    /// Edges go first and vertex markers on top. An edge with an endpoint
    /// behind the camera is skipped entirely.
    pub fn render_into(&self, scene: &Scene, fb: &mut FrameBuffer) -> FrameStats {
        fb.clear();

        let projected = scene.project(&self.projector);
        let mut stats = FrameStats::default();

        for edge in scene.edges() {
            if let (Some(a), Some(b)) = (projected[edge.a], projected[edge.b]) {
                fb.draw_line(a, b, self.edge_char);
                stats.drawn_edges += 1;
            }
        }

        for p in projected.iter().flatten() {
            fb.set_pixel(p.x, p.y, self.vertex_char);
            stats.visible_vertices += 1;
        }

        stats
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, scene: &Scene) -> FrameBuffer {
        let mut fb = FrameBuffer::new(self.projector.width, self.projector.height);
        self.render_into(scene, &mut fb);
        fb
    }
}
