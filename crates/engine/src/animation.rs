//! Animation driver: renders the scene frame by frame.
//!
//! The driver owns the [`Scene`] and the [`FrameBuffer`]. Presentation and
//! pacing go through a [`FrameSink`], so the loop itself is plain
//! synchronous code that tests can run without a terminal or real sleeps.

use std::time::Duration;

use anyhow::Result;

use crate::config::AnimationConfig;
use crate::core::Scene;
use crate::term::{CubeView, FrameBuffer, FrameStats};

/// Driver lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationState {
    Idle,
    /// Next frame to render.
    Rendering { frame: u32 },
    Done,
}

/// What the sink wants after a pause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pace {
    Continue,
    Stop,
}

/// Status of one rendered frame, shown below the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStatus {
    pub frame: u32,
    pub depth_offset: f32,
    pub depth_step: f32,
    pub stats: FrameStats,
}

impl FrameStatus {
    pub fn headline(&self) -> String {
        format!("Frame {} - Z offset: {:.1}", self.frame, self.depth_offset)
    }

    pub fn motion(&self) -> &'static str {
        if self.depth_step < 0.0 {
            "The cube is moving toward the camera!"
        } else if self.depth_step > 0.0 {
            "The cube is moving away from the camera!"
        } else {
            "The cube is holding still."
        }
    }
}

/// Where frames go.
pub trait FrameSink {
    /// Show a finished frame.
    fn present(&mut self, fb: &FrameBuffer, status: &FrameStatus) -> Result<()>;

    /// Block for `delay`, reporting whether the run should go on.
    fn wait(&mut self, delay: Duration) -> Result<Pace>;
}

/// Outcome of [`Animation::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub frames_rendered: u32,
    pub cancelled: bool,
}

pub struct Animation {
    config: AnimationConfig,
    scene: Scene,
    view: CubeView,
    fb: FrameBuffer,
    state: AnimationState,
    frames_rendered: u32,
}

impl Animation {
    /// Animate the reference cube.
    pub fn new(config: AnimationConfig) -> Self {
        Self::with_scene(config, Scene::cube(), CubeView::default())
    }

    pub fn with_scene(config: AnimationConfig, scene: Scene, view: CubeView) -> Self {
        let projector = view.projector();
        let fb = FrameBuffer::new(projector.width, projector.height);
        Self {
            config,
            scene,
            view,
            fb,
            state: AnimationState::Idle,
            frames_rendered: 0,
        }
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.fb
    }

    pub fn frames_rendered(&self) -> u32 {
        self.frames_rendered
    }

    /// Idle -> Rendering. A zero frame count goes straight to Done.
    pub fn start(&mut self) {
        if self.state != AnimationState::Idle {
            return;
        }
        self.state = if self.config.frame_count == 0 {
            AnimationState::Done
        } else {
            AnimationState::Rendering { frame: 0 }
        };
    }

    /// Render the next frame into the framebuffer.
    ///
    /// Returns `None` unless the driver is rendering.
    pub fn step(&mut self) -> Option<FrameStatus> {
        let AnimationState::Rendering { frame } = self.state else {
            return None;
        };

        self.scene.set_frame(frame, self.config.depth_step);
        let stats = self.view.render_into(&self.scene, &mut self.fb);
        self.frames_rendered += 1;

        let next = frame + 1;
        self.state = if next >= self.config.frame_count {
            AnimationState::Done
        } else {
            AnimationState::Rendering { frame: next }
        };

        log::trace!(
            "frame {frame}: offset {:.2}, {} vertices, {} edges",
            self.scene.depth_offset(),
            stats.visible_vertices,
            stats.drawn_edges
        );

        Some(FrameStatus {
            frame,
            depth_offset: self.scene.depth_offset(),
            depth_step: self.config.depth_step,
            stats,
        })
    }

    /// Stop before the remaining frames are rendered.
    pub fn cancel(&mut self) {
        self.state = AnimationState::Done;
    }

    /// Run from Idle to Done, presenting and pacing every frame.
    ///
    /// A sink error aborts the run and is returned as-is.
    pub fn run(&mut self, sink: &mut impl FrameSink) -> Result<RunSummary> {
        self.start();
        log::info!(
            "animation started: {} frames, {:?} per frame, step {}",
            self.config.frame_count,
            self.config.frame_delay,
            self.config.depth_step
        );

        let mut cancelled = false;
        if self.state != AnimationState::Done
            && !self.config.startup_delay.is_zero()
            && sink.wait(self.config.startup_delay)? == Pace::Stop
        {
            self.cancel();
            cancelled = true;
        }

        while let Some(status) = self.step() {
            sink.present(&self.fb, &status)?;
            if sink.wait(self.config.frame_delay)? == Pace::Stop {
                self.cancel();
                cancelled = true;
            }
        }

        let summary = RunSummary {
            frames_rendered: self.frames_rendered,
            cancelled,
        };
        if cancelled {
            log::info!("animation cancelled after {} frames", summary.frames_rendered);
        } else {
            log::info!("animation complete: {} frames", summary.frames_rendered);
        }
        Ok(summary)
    }
}
