// Frame generation, fallback and playback against a recording rasterizer.

use std::time::Duration;
use wave_core::*;

/// Stands in for a canvas: the "bitmap" is the readout text plus the op count.
#[derive(Default)]
struct Recorder {
    rasterized: usize,
    fail_from: Option<usize>,
}

impl Recorder {
    fn failing_from(index: usize) -> Self {
        Self {
            rasterized: 0,
            fail_from: Some(index),
        }
    }
}

impl Rasterizer for Recorder {
    type Bitmap = (usize, usize);

    fn rasterize(&mut self, scene: &Scene) -> Result<Self::Bitmap, RenderError> {
        if let Some(n) = self.fail_from {
            if self.rasterized >= n {
                return Err(RenderError::Rasterize(format!("frame {}", self.rasterized)));
            }
        }
        let id = self.rasterized;
        self.rasterized += 1;
        Ok((id, scene.ops.len()))
    }
}

#[test]
fn generation_yields_exactly_twenty_frames() {
    let mut r = Recorder::default();
    let mut reports = Vec::new();
    let frames = generate_frames(WaveParams::default(), &mut r, |p| reports.push(p)).unwrap();
    assert_eq!(frames.len(), FRAMES_PER_CYCLE);
    assert_eq!(r.rasterized, FRAMES_PER_CYCLE);
    assert_eq!(reports.len(), FRAMES_PER_CYCLE);
    assert_eq!(reports.last().copied(), Some(1.0));
    assert!(reports.windows(2).all(|w| w[0] < w[1]));
    let ids: Vec<usize> = frames.iter().map(|(id, _)| *id).collect();
    assert_eq!(ids, (0..FRAMES_PER_CYCLE).collect::<Vec<_>>());
}

#[test]
fn each_generation_starts_from_scratch() {
    let mut r = Recorder::default();
    let params = WaveParams::default();
    let a = generate_frames(params, &mut r, |_| {}).unwrap();
    let b = generate_frames(params, &mut r, |_| {}).unwrap();
    assert_eq!(a.len(), b.len());
    assert_eq!(r.rasterized, 2 * FRAMES_PER_CYCLE);
}

#[test]
fn collector_steps_report_progress_then_complete() {
    let mut r = Recorder::default();
    let mut collector = FrameCollector::new(WaveParams::default());
    assert_eq!(collector.progress(), 0.0);
    let mut pending = 0;
    loop {
        match collector.step(&mut r).unwrap() {
            Step::Pending { progress } => {
                pending += 1;
                assert!(progress > 0.0 && progress < 1.0);
            }
            Step::Complete => break,
        }
    }
    assert_eq!(pending, FRAMES_PER_CYCLE - 1);
    // stepping a finished collector is harmless
    assert_eq!(collector.step(&mut r).unwrap(), Step::Complete);
    assert_eq!(collector.finish().unwrap().len(), FRAMES_PER_CYCLE);
}

#[test]
fn unfinished_collector_refuses_to_finish() {
    let mut r = Recorder::default();
    let mut collector = FrameCollector::new(WaveParams::default());
    collector.step(&mut r).unwrap();
    match collector.finish() {
        Err(RenderError::IncompleteCycle { expected, actual }) => {
            assert_eq!(expected, FRAMES_PER_CYCLE);
            assert_eq!(actual, 1);
        }
        other => panic!("expected incomplete cycle, got {:?}", other.map(|f| f.len())),
    }
}

#[test]
fn successful_build_loops_from_frame_zero() {
    let mut r = Recorder::default();
    let params = WaveParams::builder().speed(2.0).build().unwrap();
    let mut animation = build_animation(params, &mut r, |_| {}).unwrap();
    assert!(animation.is_looping());
    assert_eq!(animation.current().map(|(id, _)| *id), Some(0));
    match &mut animation {
        Animation::Looping { playback, .. } => {
            assert_eq!(playback.delay(), params.frame_delay());
            assert_eq!(playback.frame_count(), FRAMES_PER_CYCLE);
            assert_eq!(playback.advance(params.frame_delay()), Some(1));
        }
        Animation::Static { .. } => unreachable!(),
    }
    assert_eq!(animation.current().map(|(id, _)| *id), Some(1));
}

#[test]
fn vanishing_speed_builds_a_paused_loop() {
    let params = WaveParams::builder().speed(1e-300).build().unwrap();
    let mut r = Recorder::default();
    let mut animation = build_animation(params, &mut r, |_| {}).unwrap();
    assert!(animation.is_looping(), "{animation:?}");
    if let Animation::Looping { playback, .. } = &mut animation {
        assert_eq!(playback.delay(), Duration::MAX);
        assert_eq!(playback.advance(Duration::from_secs(3600)), None);
        assert_eq!(playback.current(), 0);
    }
}

#[test]
fn failed_generation_falls_back_to_a_still_frame() {
    // fail on the sixth frame; the fallback gets rendered afterwards
    let mut r = Recorder::failing_from(5);
    let animation = build_animation(WaveParams::default(), &mut r, |_| {});
    // the recorder keeps failing, so even the fallback cannot be produced
    assert!(matches!(animation, Err(RenderError::Rasterize(_))));

    struct FailOnce {
        failed: bool,
    }
    impl Rasterizer for FailOnce {
        type Bitmap = &'static str;
        fn rasterize(&mut self, _scene: &Scene) -> Result<&'static str, RenderError> {
            if self.failed {
                Ok("still")
            } else {
                self.failed = true;
                Err(RenderError::Rasterize("gpu lost".into()))
            }
        }
    }
    let mut once = FailOnce { failed: false };
    match build_animation(WaveParams::default(), &mut once, |_| {}).unwrap() {
        Animation::Static { frame, reason } => {
            assert_eq!(frame, "still");
            assert_eq!(reason, RenderError::Rasterize("gpu lost".into()));
        }
        Animation::Looping { .. } => panic!("expected the static fallback"),
    }
}

#[test]
fn display_failure_can_be_turned_into_a_still_frame() {
    let mut r = Recorder::default();
    let reason = RenderError::Display("putImageData rejected".into());
    let animation = fallback(WaveParams::default(), &mut r, reason.clone()).unwrap();
    assert!(!animation.is_looping());
    match animation {
        Animation::Static { frame, reason: why } => {
            assert_eq!(frame.0, 0);
            assert_eq!(why, reason);
        }
        Animation::Looping { .. } => unreachable!(),
    }
}

#[test]
fn playback_cycles_through_all_frames_forever() {
    let params = WaveParams::default();
    let mut p = Playback::new(FRAMES_PER_CYCLE, params.frame_delay());
    let mut seen = vec![0usize];
    for _ in 0..(3 * FRAMES_PER_CYCLE) {
        if let Some(i) = p.advance(params.frame_delay()) {
            seen.push(i);
        }
    }
    assert_eq!(seen.len(), 3 * FRAMES_PER_CYCLE + 1);
    for (n, i) in seen.iter().enumerate() {
        assert_eq!(*i, n % FRAMES_PER_CYCLE);
    }
    // 16ms ticks at 50ms delay only move on every third or fourth tick
    let mut q = Playback::new(FRAMES_PER_CYCLE, Duration::from_millis(50));
    let moves = (0..30)
        .filter(|_| q.advance(Duration::from_millis(16)).is_some())
        .count();
    assert_eq!(moves, 9);
}
