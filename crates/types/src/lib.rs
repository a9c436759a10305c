//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the renderer.
//! All types are plain data with no external dependencies, so they can be
//! used from pure math, the terminal layer and the animation driver alike.
//!
//! # Grid Dimensions
//!
//! The visible area is a fixed character grid:
//!
//! - **Width**: 80 columns (indexed 0-79)
//! - **Height**: 24 rows (indexed 0-23)
//! - **Center**: (40, 12)
//!
//! # Camera Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `CAMERA_DISTANCE` | 5.0 | Camera placement behind the scene origin |
//! | `NEAR_PLANE_EPSILON` | 0.1 | Minimum visible depth |
//! | `HORIZONTAL_SCALE` | 20.0 | Columns per projected unit |
//! | `VERTICAL_SCALE` | 10.0 | Rows per projected unit |
//!
//! The scales are tuned by eye for typical 2:1 terminal glyphs rather than
//! derived from a field of view.
//!
//! # Animation Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_COUNT` | 100 | Frames per run |
//! | `FRAME_MS` | 100 | Delay after each flushed frame |
//! | `STARTUP_MS` | 1000 | Delay before the first frame |
//! | `DEPTH_STEP` | -0.1 | Depth offset change per frame |
//!
//! # Examples
//!
//! ```
//! use wirecube_types::{Edge, MenuInput, Point3, GRID_HEIGHT, GRID_WIDTH};
//!
//! let p = Point3::new(1.0, -1.0, 1.0);
//! assert_eq!(p.translated_z(-0.5).z, 0.5);
//!
//! let e = Edge::new(0, 1);
//! assert!(e.is_within(8));
//!
//! assert_eq!(MenuInput::from_str("confirm"), Some(MenuInput::Confirm));
//!
//! assert_eq!(GRID_WIDTH, 80);
//! assert_eq!(GRID_HEIGHT, 24);
//! ```

/// Grid width in character columns (80)
pub const GRID_WIDTH: u16 = 80;

/// Grid height in character rows (24)
pub const GRID_HEIGHT: u16 = 24;

/// Distance from the camera to the scene origin along the depth axis.
pub const CAMERA_DISTANCE: f32 = 5.0;

/// Points whose camera-relative depth is at or below this are not drawn.
pub const NEAR_PLANE_EPSILON: f32 = 0.1;

/// Screen columns per unit of projected x.
pub const HORIZONTAL_SCALE: f32 = 20.0;

/// Screen rows per unit of projected y.
pub const VERTICAL_SCALE: f32 = 10.0;

/// Depth offset applied per frame.
///
/// Negative values move the solid toward the camera.
pub const DEPTH_STEP: f32 = -0.1;

/// Number of frames in one animation run (100)
pub const FRAME_COUNT: u32 = 100;

/// Delay after each frame in milliseconds (100ms)
pub const FRAME_MS: u64 = 100;

/// Delay before the first frame in milliseconds (1s)
pub const STARTUP_MS: u64 = 1000;

/// Character used for rasterized edges.
pub const EDGE_CHAR: char = '#';

/// Character used for projected vertices.
pub const VERTEX_CHAR: char = '*';

/// Background character written by `clear`.
pub const BACKGROUND_CHAR: char = ' ';

/// Upper bound on the number of vertices a scene may hold.
pub const MAX_VERTICES: usize = 16;

/// Upper bound on the number of items in a menu.
pub const MAX_MENU_ITEMS: usize = 10;


/// A point in model space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Working copy shifted along the depth axis.
    pub fn translated_z(self, offset: f32) -> Self {
        Self {
            z: self.z + offset,
            ..self
        }
    }
}

/// A visible point in screen space (column, row).
///
/// Coordinates are signed: projected points may land outside the grid and
/// are clipped when plotted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
}

impl ScreenPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An undirected edge between two vertex indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
}

impl Edge {
    pub const fn new(a: usize, b: usize) -> Self {
        Self { a, b }
    }

    /// True when both endpoints index into a vertex list of `len` entries.
    pub fn is_within(&self, len: usize) -> bool {
        self.a < len && self.b < len
    }
}

/// Input events understood by menu screens
///
/// Produced by the terminal input layer, consumed by the menu model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuInput {
    /// Move the selection up one enabled item
    Up,
    /// Move the selection down one enabled item
    Down,
    /// Activate the selected item
    Confirm,
    /// Leave the current menu
    Cancel,
    /// Jump to and activate the item bound to this key
    Shortcut(char),
    /// Nothing happened
    None,
}

impl MenuInput {
    /// Parse a named input (case-insensitive).
    ///
    /// Shortcuts carry a key and have no name, so they never parse.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(MenuInput::Up),
            "down" => Some(MenuInput::Down),
            "confirm" => Some(MenuInput::Confirm),
            "cancel" => Some(MenuInput::Cancel),
            "none" => Some(MenuInput::None),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MenuInput::Up => "up",
            MenuInput::Down => "down",
            MenuInput::Confirm => "confirm",
            MenuInput::Cancel => "cancel",
            MenuInput::Shortcut(_) => "shortcut",
            MenuInput::None => "none",
        }
    }
}
