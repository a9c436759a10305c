//! Terminal rendering layer.
//!
//! A small, game-oriented rendering layer: views draw into a plain
//! framebuffer of character cells, and [`TerminalRenderer`] flushes that
//! buffer to the terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Clip every write at the framebuffer so projected geometry never needs
//!   range checks of its own
//! - Encode whole frames into memory so they can be inspected in tests

pub mod cube_view;
pub mod fb;
pub mod menu_view;
pub mod renderer;

pub use wirecube_core as core;
pub use wirecube_types as types;

pub use cube_view::{CubeView, FrameStats};
pub use fb::{Cell, CellStyle, FrameBuffer};
pub use menu_view::{render_message, MenuView, MENU_HINT};
pub use renderer::{encode_frame_into, TerminalRenderer};
