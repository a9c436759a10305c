//! Core rendering logic - pure, deterministic, and testable
//!
//! This crate holds the math behind the wireframe renderer and the menu
//! state. It has **no dependencies** on terminals or I/O:
//!
//! - **Deterministic**: the same scene and frame index always produce the
//!   same screen coordinates
//! - **Allocation-free hot path**: projected vertices live in a fixed-capacity
//!   [`arrayvec::ArrayVec`]
//!
//! # Module Structure
//!
//! - [`projection`]: perspective divide and screen mapping
//! - [`raster`]: integer midpoint line walking
//! - [`scene`]: the reference cube and its depth offset
//! - [`menu`]: menu selection state
//!
//! # Example
//!
//! ```
//! use wirecube_core::{project, Line, Scene, Projector};
//! use wirecube_core::types::ScreenPoint;
//!
//! // The origin sits at the screen center.
//! assert_eq!(project(0.0, 0.0, 0.0), Some(ScreenPoint::new(40, 12)));
//!
//! // A horizontal line covers every column between its endpoints.
//! let cells: Vec<_> = Line::new(ScreenPoint::new(0, 0), ScreenPoint::new(3, 0)).collect();
//! assert_eq!(cells.len(), 4);
//!
//! let scene = Scene::cube();
//! let projected = scene.project(&Projector::default());
//! assert_eq!(projected[0], Some(ScreenPoint::new(35, 14)));
//! ```

pub mod menu;
pub mod projection;
pub mod raster;
pub mod scene;

pub use wirecube_types as types;

pub use menu::{Menu, MenuItem, MenuOutcome};
pub use projection::{project, Projector};
pub use raster::{for_each_line_point, Line};
pub use scene::{ProjectedVertices, Scene, CUBE_EDGES, CUBE_VERTICES};
