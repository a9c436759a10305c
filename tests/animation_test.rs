use std::time::Duration;

use anyhow::{bail, Result};
use approx::assert_abs_diff_eq;

use wirecube::core::{Projector, Scene};
use wirecube::engine::{
    Animation, AnimationConfig, AnimationState, FrameSink, FrameStatus, Pace,
};
use wirecube::term::{CubeView, FrameBuffer};
use wirecube::types::{GRID_HEIGHT, GRID_WIDTH, VERTEX_CHAR};

/// Records every presented frame and every requested pause.
#[derive(Default)]
struct RecordingSink {
    statuses: Vec<FrameStatus>,
    marker_counts: Vec<usize>,
    waits: Vec<Duration>,
    stop_after: Option<usize>,
    fail_on_frame: Option<u32>,
}

impl FrameSink for RecordingSink {
    fn present(&mut self, fb: &FrameBuffer, status: &FrameStatus) -> Result<()> {
        if self.fail_on_frame == Some(status.frame) {
            bail!("display went away");
        }
        assert_eq!(fb.width(), GRID_WIDTH);
        assert_eq!(fb.height(), GRID_HEIGHT);
        assert_eq!(fb.cells().len(), GRID_WIDTH as usize * GRID_HEIGHT as usize);
        self.marker_counts.push(fb.positions_of(VERTEX_CHAR).len());
        self.statuses.push(*status);
        Ok(())
    }

    fn wait(&mut self, delay: Duration) -> Result<Pace> {
        self.waits.push(delay);
        match self.stop_after {
            Some(n) if self.statuses.len() >= n => Ok(Pace::Stop),
            _ => Ok(Pace::Continue),
        }
    }
}

fn config(frames: u32) -> AnimationConfig {
    AnimationConfig {
        frame_count: frames,
        ..AnimationConfig::default()
    }
}

#[test]
fn runs_exactly_the_configured_frame_count() {
    let mut anim = Animation::new(AnimationConfig::default());
    let mut sink = RecordingSink::default();
    let summary = anim.run(&mut sink).unwrap();

    assert_eq!(summary.frames_rendered, 100);
    assert!(!summary.cancelled);
    assert_eq!(anim.state(), AnimationState::Done);

    let frames: Vec<u32> = sink.statuses.iter().map(|s| s.frame).collect();
    assert_eq!(frames, (0..100).collect::<Vec<_>>());
}

#[test]
fn pacing_is_startup_then_one_wait_per_frame() {
    let mut anim = Animation::new(config(3));
    let mut sink = RecordingSink::default();
    anim.run(&mut sink).unwrap();
    assert_eq!(
        sink.waits,
        vec![
            Duration::from_millis(1000),
            Duration::from_millis(100),
            Duration::from_millis(100),
            Duration::from_millis(100),
        ]
    );
}

#[test]
fn depth_offset_is_frame_times_step() {
    let mut anim = Animation::new(config(100));
    let mut sink = RecordingSink::default();
    anim.run(&mut sink).unwrap();

    for status in &sink.statuses {
        assert_abs_diff_eq!(
            status.depth_offset,
            status.frame as f32 * -0.1,
            epsilon = 1e-4
        );
    }
    assert_eq!(sink.statuses[0].headline(), "Frame 0 - Z offset: 0.0");
    assert_eq!(sink.statuses[99].headline(), "Frame 99 - Z offset: -9.9");
}

#[test]
fn first_frame_shows_all_vertices_then_cube_passes_camera() {
    let mut anim = Animation::new(config(100));
    let mut sink = RecordingSink::default();
    anim.run(&mut sink).unwrap();

    assert_eq!(sink.marker_counts[0], 8);
    // Past offset -6 even the front face is behind the camera.
    assert!(sink.marker_counts[70..].iter().all(|&n| n == 0));
    assert!(sink.statuses[70..]
        .iter()
        .all(|s| s.stats.visible_vertices == 0 && s.stats.drawn_edges == 0));
}

#[test]
fn receding_cube_contracts_toward_center() {
    let cfg = AnimationConfig {
        frame_count: 30,
        depth_step: 0.5,
        ..AnimationConfig::default()
    };
    let mut anim = Animation::new(cfg);
    anim.start();

    let center = Projector::default().center();
    let mut spreads = Vec::new();
    while anim.step().is_some() {
        let spread = anim
            .framebuffer()
            .positions_of(VERTEX_CHAR)
            .iter()
            .map(|p| (p.x - center.x).abs() + (p.y - center.y).abs())
            .max()
            .unwrap_or(0);
        spreads.push(spread);
    }

    assert_eq!(spreads.len(), 30);
    assert_eq!(spreads[0], 8);
    for w in spreads.windows(2) {
        assert!(w[1] <= w[0], "{spreads:?}");
    }
    assert!(spreads[29] <= 3);
}

#[test]
fn stop_signal_cancels_between_frames() {
    let mut anim = Animation::new(config(100));
    let mut sink = RecordingSink {
        stop_after: Some(5),
        ..RecordingSink::default()
    };
    let summary = anim.run(&mut sink).unwrap();

    assert!(summary.cancelled);
    assert_eq!(summary.frames_rendered, 5);
    assert_eq!(sink.statuses.len(), 5);
    assert_eq!(anim.state(), AnimationState::Done);
}

#[test]
fn stop_during_startup_renders_nothing() {
    let mut anim = Animation::new(config(10));
    let mut sink = RecordingSink {
        stop_after: Some(0),
        ..RecordingSink::default()
    };
    let summary = anim.run(&mut sink).unwrap();
    assert!(summary.cancelled);
    assert_eq!(summary.frames_rendered, 0);
    assert!(sink.statuses.is_empty());
}

#[test]
fn display_error_aborts_the_run() {
    let mut anim = Animation::new(config(10));
    let mut sink = RecordingSink {
        fail_on_frame: Some(3),
        ..RecordingSink::default()
    };
    let err = anim.run(&mut sink).unwrap_err();
    assert!(err.to_string().contains("display went away"));
    assert_eq!(sink.statuses.len(), 3);
}

#[test]
fn custom_view_sets_buffer_size() {
    let projector = Projector {
        width: 40,
        height: 12,
        ..Projector::default()
    };
    let anim = Animation::with_scene(config(1), Scene::cube(), CubeView::new(projector));
    assert_eq!(anim.framebuffer().width(), 40);
    assert_eq!(anim.framebuffer().height(), 12);
}
