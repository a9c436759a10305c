//! Perspective projection from model space onto the character grid.

use crate::types::{
    Point3, ScreenPoint, CAMERA_DISTANCE, GRID_HEIGHT, GRID_WIDTH, HORIZONTAL_SCALE,
    NEAR_PLANE_EPSILON, VERTICAL_SCALE,
};

/// Camera and viewport parameters used by [`Projector::project`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projector {
    pub width: u16,
    pub height: u16,
    pub camera_distance: f32,
    pub near_epsilon: f32,
    pub scale_x: f32,
    pub scale_y: f32,
}

impl Default for Projector {
    fn default() -> Self {
        Self {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            camera_distance: CAMERA_DISTANCE,
            near_epsilon: NEAR_PLANE_EPSILON,
            scale_x: HORIZONTAL_SCALE,
            scale_y: VERTICAL_SCALE,
        }
    }
}

impl Projector {
    /// Screen center as integer cell coordinates.
    pub fn center(&self) -> ScreenPoint {
        ScreenPoint::new((self.width / 2) as i32, (self.height / 2) as i32)
    }

    /// Project a model-space point.
    ///
    /// Returns `None` when the point is behind the camera, inside the near
    /// plane, or has a non-finite coordinate. Visible points may still fall
    /// outside the grid; callers clip when plotting.
    pub fn project(&self, p: Point3) -> Option<ScreenPoint> {
        let depth = p.z + self.camera_distance;
        if !depth.is_finite() || depth <= self.near_epsilon {
            return None;
        }

        let x_proj = p.x / depth;
        let y_proj = p.y / depth;

        // Rows grow downward, model y grows upward.
        let sx = (self.width / 2) as f32 + x_proj * self.scale_x;
        let sy = (self.height / 2) as f32 - y_proj * self.scale_y;

        if !sx.is_finite() || !sy.is_finite() {
            return None;
        }

        // `as` truncates toward zero and saturates on overflow.
        Some(ScreenPoint::new(sx as i32, sy as i32))
    }
}

/// Project with the reference camera and an 80x24 grid.
pub fn project(x: f32, y: f32, z: f32) -> Option<ScreenPoint> {
    Projector::default().project(Point3::new(x, y, z))
}
