//! Animation configuration.
//!
//! Defaults come from the compile-time constants in `wirecube-types`.
//! [`AnimationConfig::from_env`] lets a few of them be overridden without a
//! rebuild.

use std::str::FromStr;
use std::time::Duration;

use crate::types::{DEPTH_STEP, FRAME_COUNT, FRAME_MS, STARTUP_MS};

/// Frame counts offered by the settings menu.
pub const FRAME_COUNT_PRESETS: [u32; 4] = [50, 100, 200, 400];

/// Frame delays (ms) offered by the settings menu.
pub const FRAME_DELAY_PRESETS_MS: [u64; 4] = [33, 50, 100, 200];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationConfig {
    /// Frames rendered before the run ends.
    pub frame_count: u32,
    /// Pause after each presented frame.
    pub frame_delay: Duration,
    /// Pause before the first frame.
    pub startup_delay: Duration,
    /// Depth offset change per frame.
    pub depth_step: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            frame_count: FRAME_COUNT,
            frame_delay: Duration::from_millis(FRAME_MS),
            startup_delay: Duration::from_millis(STARTUP_MS),
            depth_step: DEPTH_STEP,
        }
    }
}

impl AnimationConfig {
    /// Create from environment variables.
    ///
    /// - `WIRECUBE_FRAMES`: frame count
    /// - `WIRECUBE_FRAME_MS`: per-frame delay in milliseconds
    /// - `WIRECUBE_STARTUP_MS`: startup delay in milliseconds
    /// - `WIRECUBE_DEPTH_STEP`: depth offset change per frame
    ///
    /// Unset or unparsable values keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let d = Self::default();

        let frame_count = parse_or("WIRECUBE_FRAMES", &lookup, d.frame_count);
        let frame_ms = parse_or(
            "WIRECUBE_FRAME_MS",
            &lookup,
            d.frame_delay.as_millis() as u64,
        );
        let startup_ms = parse_or(
            "WIRECUBE_STARTUP_MS",
            &lookup,
            d.startup_delay.as_millis() as u64,
        );
        let depth_step: f32 = parse_or("WIRECUBE_DEPTH_STEP", &lookup, d.depth_step);
        let depth_step = if depth_step.is_finite() {
            depth_step
        } else {
            log::warn!("ignoring non-finite WIRECUBE_DEPTH_STEP");
            d.depth_step
        };

        Self {
            frame_count,
            frame_delay: Duration::from_millis(frame_ms),
            startup_delay: Duration::from_millis(startup_ms),
            depth_step,
        }
    }

    /// Advance `frame_count` to the next preset, wrapping around.
    pub fn cycle_frame_count(&mut self) {
        self.frame_count = next_preset(&FRAME_COUNT_PRESETS, self.frame_count);
    }

    /// Advance `frame_delay` to the next preset, wrapping around.
    pub fn cycle_frame_delay(&mut self) {
        let ms = next_preset(&FRAME_DELAY_PRESETS_MS, self.frame_delay.as_millis() as u64);
        self.frame_delay = Duration::from_millis(ms);
    }
}

fn parse_or<T: FromStr>(name: &str, lookup: &impl Fn(&str) -> Option<String>, default: T) -> T {
    let Some(raw) = lookup(name) else {
        return default;
    };
    match raw.trim().parse() {
        Ok(v) => v,
        Err(_) => {
            log::warn!("ignoring invalid {name}={raw:?}");
            default
        }
    }
}

/// First preset strictly greater than `current`, or the smallest one.
fn next_preset<T: Copy + PartialOrd>(presets: &[T], current: T) -> T {
    presets
        .iter()
        .copied()
        .find(|&p| p > current)
        .unwrap_or(presets[0])
}
