// Host-side tests for the cooperative frame loop and its stop handle.

use instant::Instant;
use portfolio_core::counter::{CounterAnimation, CounterText};
use portfolio_core::*;
use std::time::Duration;

#[derive(Default)]
struct Counting {
    frames: u32,
    dts: Vec<Duration>,
    stop_after: Option<u32>,
}

impl FrameTask for Counting {
    fn frame(&mut self, dt: Duration) -> LoopState {
        self.frames += 1;
        self.dts.push(dt);
        match self.stop_after {
            Some(n) if self.frames >= n => LoopState::Stopped,
            _ => LoopState::Running,
        }
    }
}

#[test]
fn loop_runs_until_stop_handle_fires() {
    let mut lp = FrameLoop::new(Counting::default());
    let handle = lp.stop_handle();
    let t0 = Instant::now();
    for i in 0..5 {
        assert_eq!(lp.tick(t0 + Duration::from_millis(16 * i)), LoopState::Running);
    }
    assert_eq!(lp.task().frames, 5);

    handle.stop();
    assert!(handle.is_stopped());
    assert_eq!(lp.state(), LoopState::Stopped);
    assert_eq!(lp.tick(t0 + Duration::from_millis(200)), LoopState::Stopped);
    assert_eq!(lp.task().frames, 5, "stopped loop must not run its task");
    assert_eq!(lp.frames(), 5);
}

#[test]
fn first_tick_has_zero_dt_then_measures_elapsed() {
    let mut lp = FrameLoop::new(Counting::default());
    let t0 = Instant::now();
    lp.tick(t0);
    lp.tick(t0 + Duration::from_millis(16));
    lp.tick(t0 + Duration::from_millis(50));
    assert_eq!(
        lp.task().dts,
        vec![
            Duration::ZERO,
            Duration::from_millis(16),
            Duration::from_millis(34)
        ]
    );
}

#[test]
fn task_can_finish_the_loop_itself() {
    let mut lp = FrameLoop::new(Counting {
        stop_after: Some(3),
        ..Counting::default()
    });
    let handle = lp.stop_handle();
    let t0 = Instant::now();
    assert_eq!(lp.tick(t0), LoopState::Running);
    assert_eq!(lp.tick(t0), LoopState::Running);
    assert_eq!(lp.tick(t0), LoopState::Stopped);
    assert!(handle.is_stopped());
    assert_eq!(lp.tick(t0), LoopState::Stopped);
    assert_eq!(lp.task().frames, 3);
}

#[test]
fn particle_scene_keeps_running() {
    struct NullCanvas;
    impl Canvas2d for NullCanvas {
        fn clear_rect(&mut self, _: f32, _: f32, _: f32, _: f32) {}
        fn fill_circle(&mut self, _: glam::Vec2, _: f32, _: Rgba) {}
        fn stroke_line(&mut self, _: glam::Vec2, _: glam::Vec2, _: f32, _: Rgba) {}
    }
    let field = ParticleField::with_defaults(Surface::new(800, 600), 1);
    let scene = ParticleScene::new(NullCanvas, field, PointerTracker::new());
    let mut lp = FrameLoop::new(scene);
    let t0 = Instant::now();
    for _ in 0..100 {
        assert_eq!(lp.tick(t0), LoopState::Running);
    }
    assert_eq!(lp.frames(), 100);
}

#[test]
fn counter_reaches_exact_target_and_stops() {
    let text = CounterText::parse("50+").unwrap();
    let mut anim = CounterAnimation::new(text);
    let mut frames = Vec::new();
    loop {
        let f = anim.advance();
        let done = f.state == LoopState::Stopped;
        frames.push(f.text);
        if done {
            break;
        }
        assert!(frames.len() < 200, "counter never finished");
    }
    assert_eq!(frames.last().map(String::as_str), Some("50+"));
    // 1500 ms at 16 ms per frame is about 94 frames.
    assert!((90..=96).contains(&frames.len()), "{} frames", frames.len());
    let values: Vec<u64> = frames
        .iter()
        .map(|t| t.trim_end_matches('+').parse().unwrap())
        .collect();
    assert!(values.windows(2).all(|w| w[0] <= w[1]));
}
