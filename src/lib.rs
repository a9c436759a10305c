//! Wirecube (workspace facade crate).
//!
//! Re-exports the member crates as `wirecube::{core, engine, input, term, types}`
//! and defines the menu screens the binary shows.

pub mod screens;

pub use wirecube_core as core;
pub use wirecube_engine as engine;
pub use wirecube_input as input;
pub use wirecube_term as term;
pub use wirecube_types as types;
