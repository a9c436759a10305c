//! Animation engine.
//!
//! Drives the wireframe scene through a fixed number of frames. The engine
//! never touches the terminal directly: frames are handed to a
//! [`FrameSink`], which also decides how long to pause and whether to stop.

pub mod animation;
pub mod config;

pub use wirecube_core as core;
pub use wirecube_term as term;
pub use wirecube_types as types;

pub use animation::{Animation, AnimationState, FrameSink, FrameStatus, Pace, RunSummary};
pub use config::{AnimationConfig, FRAME_COUNT_PRESETS, FRAME_DELAY_PRESETS_MS};
