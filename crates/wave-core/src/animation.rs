//! Frame generation for one animation cycle and the typed outcome handed to
//! the presentation layer.

use crate::constants::FRAMES_PER_CYCLE;
use crate::error::RenderError;
use crate::params::WaveParams;
use crate::playback::Playback;
use crate::scene::{compose, Scene};
use crate::wave::SampleGrid;

/// Turns a composed [`Scene`] into a bitmap.
pub trait Rasterizer {
    type Bitmap;

    fn rasterize(&mut self, scene: &Scene) -> Result<Self::Bitmap, RenderError>;
}

/// `count` equally spaced time points covering `[0, 1)`.
pub fn time_points(count: usize) -> Vec<f64> {
    (0..count).map(|i| i as f64 / count as f64).collect()
}

/// Lazy, finite sequence of the scenes making up one cycle.
///
/// Both sample grids are built once and shared by every frame.
#[derive(Clone, Debug)]
pub struct FrameGenerator {
    params: WaveParams,
    grid: SampleGrid,
    particles: SampleGrid,
    times: Vec<f64>,
    next: usize,
}

impl FrameGenerator {
    pub fn new(params: WaveParams) -> Self {
        Self {
            params,
            grid: SampleGrid::standard(),
            particles: SampleGrid::particles(),
            times: time_points(FRAMES_PER_CYCLE),
            next: 0,
        }
    }

    #[inline]
    pub fn params(&self) -> &WaveParams {
        &self.params
    }

    #[inline]
    pub fn frame_count(&self) -> usize {
        self.times.len()
    }

    /// Fraction of the cycle already handed out, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        if self.times.is_empty() {
            1.0
        } else {
            self.next as f64 / self.times.len() as f64
        }
    }

    /// Scene for an arbitrary frame index, independent of iteration state.
    pub fn scene_at(&self, index: usize) -> Option<Scene> {
        self.times
            .get(index)
            .map(|&t| compose(&self.params, t, &self.grid, &self.particles))
    }

    /// The still frame shown when animation is abandoned (t = 0).
    pub fn still(&self) -> Scene {
        compose(&self.params, 0.0, &self.grid, &self.particles)
    }
}

impl Iterator for FrameGenerator {
    type Item = Scene;

    fn next(&mut self) -> Option<Scene> {
        let scene = self.scene_at(self.next)?;
        self.next += 1;
        Some(scene)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.times.len() - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for FrameGenerator {}

/// All bitmaps of one cycle, in time order.
#[derive(Clone, Debug)]
pub struct FrameSet<B> {
    params: WaveParams,
    frames: Vec<B>,
}

impl<B> FrameSet<B> {
    #[inline]
    pub fn params(&self) -> &WaveParams {
        &self.params
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
    #[inline]
    pub fn get(&self, index: usize) -> Option<&B> {
        self.frames.get(index)
    }
    pub fn iter(&self) -> std::slice::Iter<'_, B> {
        self.frames.iter()
    }
}

/// Result of a single [`FrameCollector::step`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Step {
    Pending { progress: f64 },
    Complete,
}

/// Incremental frame generation, one rasterized frame per step, so a host can
/// update a progress indicator between frames. Nothing is displayed until
/// [`FrameCollector::finish`] hands back the complete set.
pub struct FrameCollector<B> {
    generator: FrameGenerator,
    frames: Vec<B>,
}

impl<B> FrameCollector<B> {
    pub fn new(params: WaveParams) -> Self {
        let generator = FrameGenerator::new(params);
        let frames = Vec::with_capacity(generator.frame_count());
        Self { generator, frames }
    }

    #[inline]
    pub fn params(&self) -> &WaveParams {
        self.generator.params()
    }

    #[inline]
    pub fn progress(&self) -> f64 {
        self.generator.progress()
    }

    pub fn step<R>(&mut self, rasterizer: &mut R) -> Result<Step, RenderError>
    where
        R: Rasterizer<Bitmap = B>,
    {
        let Some(scene) = self.generator.next() else {
            return Ok(Step::Complete);
        };
        self.frames.push(rasterizer.rasterize(&scene)?);
        log::debug!(
            "[frames] rasterized {}/{}",
            self.frames.len(),
            self.generator.frame_count()
        );
        if self.frames.len() == self.generator.frame_count() {
            Ok(Step::Complete)
        } else {
            Ok(Step::Pending {
                progress: self.generator.progress(),
            })
        }
    }

    pub fn finish(self) -> Result<FrameSet<B>, RenderError> {
        let expected = self.generator.frame_count();
        if self.frames.len() != expected {
            return Err(RenderError::IncompleteCycle {
                expected,
                actual: self.frames.len(),
            });
        }
        Ok(FrameSet {
            params: *self.generator.params(),
            frames: self.frames,
        })
    }
}

/// Rasterize a full cycle synchronously, reporting progress after each frame.
pub fn generate_frames<R: Rasterizer>(
    params: WaveParams,
    rasterizer: &mut R,
    mut on_progress: impl FnMut(f64),
) -> Result<FrameSet<R::Bitmap>, RenderError> {
    let mut collector = FrameCollector::new(params);
    loop {
        match collector.step(rasterizer)? {
            Step::Pending { progress } => on_progress(progress),
            Step::Complete => {
                on_progress(1.0);
                return collector.finish();
            }
        }
    }
}

/// What the presentation layer should show.
#[derive(Debug)]
pub enum Animation<B> {
    Looping {
        frames: FrameSet<B>,
        playback: Playback,
    },
    /// A single frame at t = 0, shown after generation or display failed.
    Static { frame: B, reason: RenderError },
}

impl<B> Animation<B> {
    pub fn looping(frames: FrameSet<B>) -> Self {
        let playback = Playback::new(frames.len(), frames.params().frame_delay());
        Animation::Looping { frames, playback }
    }

    pub fn is_looping(&self) -> bool {
        matches!(self, Animation::Looping { .. })
    }

    /// Bitmap that should currently be on screen.
    pub fn current(&self) -> Option<&B> {
        match self {
            Animation::Looping { frames, playback } => frames.get(playback.current()),
            Animation::Static { frame, .. } => Some(frame),
        }
    }
}

/// Render the still fallback frame for `params` after `reason`.
pub fn fallback<R: Rasterizer>(
    params: WaveParams,
    rasterizer: &mut R,
    reason: RenderError,
) -> Result<Animation<R::Bitmap>, RenderError> {
    log::warn!("[frames] falling back to a static frame: {reason}");
    let frame = rasterizer.rasterize(&FrameGenerator::new(params).still())?;
    Ok(Animation::Static { frame, reason })
}

/// Generate a full cycle, or the still fallback frame if that fails.
///
/// An error is only returned when the fallback frame itself cannot be
/// rasterized.
pub fn build_animation<R: Rasterizer>(
    params: WaveParams,
    rasterizer: &mut R,
    on_progress: impl FnMut(f64),
) -> Result<Animation<R::Bitmap>, RenderError> {
    match generate_frames(params, rasterizer, on_progress) {
        Ok(frames) => Ok(Animation::looping(frames)),
        Err(reason) => fallback(params, rasterizer, reason),
    }
}
