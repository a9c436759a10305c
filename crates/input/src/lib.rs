//! Terminal input module.
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::MenuInput`], recognizes the
//! keys that stop a running animation, and paces frames while watching for
//! those keys.

pub mod map;
pub mod pace;

pub use wirecube_types as types;

pub use map::{map_menu_key, should_stop};
pub use pace::{poll_terminal_key, wait_for_stop};
