//! Chart composition: turns one time sample of the wave into a display list.
//!
//! A [`Scene`] is plain data in frame pixel coordinates (origin top-left,
//! y down). Rasterizing it is left to a [`crate::Rasterizer`] so the chart
//! layout stays testable without a canvas.

use crate::color::{Rgb, Theme};
use crate::constants::*;
use crate::params::WaveParams;
use crate::wave::{envelope, evaluate, SampleGrid};
use glam::DVec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub min: DVec2,
    pub max: DVec2,
}

impl Rect {
    pub fn new(min: DVec2, max: DVec2) -> Self {
        Self { min, max }
    }
    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }
    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
    #[inline]
    pub fn contains(&self, p: DVec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Rgb,
    pub alpha: f64,
    pub width: f64,
    pub dash: Option<[f64; 2]>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextBaseline {
    Top,
    Middle,
    Bottom,
}

/// Rounded box drawn behind a text run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Backdrop {
    pub fill: Rgb,
    pub edge: Rgb,
    pub alpha: f64,
    pub padding: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Text {
    pub anchor: DVec2,
    pub content: String,
    pub font_px: f64,
    pub color: Rgb,
    pub align: TextAlign,
    pub baseline: TextBaseline,
    /// Rotation about the anchor, radians clockwise.
    pub rotation: f64,
    pub backdrop: Option<Backdrop>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    FillRect { rect: Rect, color: Rgb },
    StrokeRect { rect: Rect, stroke: Stroke },
    Polyline { points: Vec<DVec2>, stroke: Stroke },
    Dots { centers: Vec<DVec2>, radius: f64, color: Rgb },
    Text(Text),
}

/// Ordered display list for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub ops: Vec<DrawOp>,
}

/// Maps data coordinates on the fixed axes to frame pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotTransform {
    pub area: Rect,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
}

impl PlotTransform {
    /// The fixed layout: x in [0, 2], y in [-1.2, 1.2], inside the frame margins.
    pub fn standard() -> Self {
        let area = Rect::new(
            DVec2::new(MARGIN_LEFT_PX, MARGIN_TOP_PX),
            DVec2::new(
                FRAME_WIDTH_PX as f64 - MARGIN_RIGHT_PX,
                FRAME_HEIGHT_PX as f64 - MARGIN_BOTTOM_PX,
            ),
        );
        Self {
            area,
            x_range: (X_MIN, X_MAX),
            y_range: (Y_MIN, Y_MAX),
        }
    }

    #[inline]
    pub fn to_px(&self, x: f64, y: f64) -> DVec2 {
        let (x0, x1) = self.x_range;
        let (y0, y1) = self.y_range;
        let u = (x - x0) / (x1 - x0);
        let v = (y - y0) / (y1 - y0);
        DVec2::new(
            self.area.min.x + u * self.area.width(),
            self.area.max.y - v * self.area.height(),
        )
    }

    /// Point given as a fraction of the plot area (0,0 bottom-left).
    #[inline]
    pub fn axes_fraction(&self, fx: f64, fy: f64) -> DVec2 {
        DVec2::new(
            self.area.min.x + fx * self.area.width(),
            self.area.max.y - fy * self.area.height(),
        )
    }
}

/// Tick positions from `start` in `step` increments up to `end` inclusive.
pub fn ticks(start: f64, end: f64, step: f64) -> Vec<f64> {
    let n = ((end - start) / step + 1e-9).floor() as i64;
    (0..=n.max(0)).map(|i| start + step * i as f64).collect()
}

/// Compose the chart for time `t`.
///
/// `grid` is the line sample grid and `particles` the sparse overlay grid;
/// both are passed in so a whole animation shares one pair.
pub fn compose(params: &WaveParams, t: f64, grid: &SampleGrid, particles: &SampleGrid) -> Scene {
    let flags = params.flags();
    let theme = Theme::select(flags.dark_mode);
    let plot = PlotTransform::standard();
    let mut ops = Vec::new();

    ops.push(DrawOp::FillRect {
        rect: Rect::new(
            DVec2::ZERO,
            DVec2::new(FRAME_WIDTH_PX as f64, FRAME_HEIGHT_PX as f64),
        ),
        color: theme.background,
    });

    if flags.grid {
        push_grid(&mut ops, &plot, &theme);
    }
    push_axes(&mut ops, &plot, &theme);

    let xs = grid.positions();
    let ys = evaluate(xs, t, params);
    ops.push(DrawOp::Polyline {
        points: to_pixels(&plot, xs, &ys),
        stroke: Stroke {
            color: params.color(),
            alpha: 1.0,
            width: WAVE_LINE_WIDTH_PX,
            dash: None,
        },
    });

    if flags.envelope && params.damping_rate() > 0.0 {
        let upper: Vec<f64> = xs.iter().map(|&x| envelope(params, x)).collect();
        let lower: Vec<f64> = upper.iter().map(|y| -y).collect();
        let stroke = Stroke {
            color: theme.overlay,
            alpha: ENVELOPE_ALPHA,
            width: ENVELOPE_LINE_WIDTH_PX,
            dash: Some(ENVELOPE_DASH_PX),
        };
        ops.push(DrawOp::Polyline {
            points: to_pixels(&plot, xs, &upper),
            stroke,
        });
        ops.push(DrawOp::Polyline {
            points: to_pixels(&plot, xs, &lower),
            stroke,
        });
    }

    if flags.particles {
        let px = particles.positions();
        let py = evaluate(px, t, params);
        ops.push(DrawOp::Dots {
            centers: to_pixels(&plot, px, &py),
            radius: PARTICLE_RADIUS_PX,
            color: theme.overlay,
        });
    }

    ops.push(DrawOp::Text(Text {
        anchor: plot.axes_fraction(READOUT_ANCHOR_AXES[0], READOUT_ANCHOR_AXES[1]),
        content: params.readout(),
        font_px: READOUT_FONT_PX,
        color: theme.foreground,
        align: TextAlign::Left,
        baseline: TextBaseline::Top,
        rotation: 0.0,
        backdrop: Some(Backdrop {
            fill: theme.readout_fill,
            edge: theme.readout_edge,
            alpha: READOUT_BACKDROP_ALPHA,
            padding: 0.3 * READOUT_FONT_PX,
        }),
    }));

    Scene {
        width: FRAME_WIDTH_PX,
        height: FRAME_HEIGHT_PX,
        ops,
    }
}

fn to_pixels(plot: &PlotTransform, xs: &[f64], ys: &[f64]) -> Vec<DVec2> {
    xs.iter()
        .zip(ys)
        .map(|(&x, &y)| plot.to_px(x, y))
        .collect()
}

fn push_grid(ops: &mut Vec<DrawOp>, plot: &PlotTransform, theme: &Theme) {
    let stroke = Stroke {
        color: theme.grid,
        alpha: GRID_ALPHA,
        width: GRID_LINE_WIDTH_PX,
        dash: Some(GRID_DASH_PX),
    };
    for x in ticks(X_MIN, X_MAX, X_TICK_STEP) {
        ops.push(DrawOp::Polyline {
            points: vec![plot.to_px(x, Y_MIN), plot.to_px(x, Y_MAX)],
            stroke,
        });
    }
    for y in ticks(-1.0, 1.0, Y_TICK_STEP) {
        ops.push(DrawOp::Polyline {
            points: vec![plot.to_px(X_MIN, y), plot.to_px(X_MAX, y)],
            stroke,
        });
    }
}

fn push_axes(ops: &mut Vec<DrawOp>, plot: &PlotTransform, theme: &Theme) {
    ops.push(DrawOp::StrokeRect {
        rect: plot.area,
        stroke: Stroke {
            color: theme.foreground,
            alpha: 1.0,
            width: AXIS_LINE_WIDTH_PX,
            dash: None,
        },
    });

    let label = |anchor: DVec2, content: String, font_px: f64, align, baseline, rotation| {
        DrawOp::Text(Text {
            anchor,
            content,
            font_px,
            color: theme.foreground,
            align,
            baseline,
            rotation,
            backdrop: None,
        })
    };

    for x in ticks(X_MIN, X_MAX, X_TICK_STEP) {
        let at = plot.to_px(x, Y_MIN) + DVec2::new(0.0, 6.0);
        ops.push(label(
            at,
            format!("{x:.2}"),
            TICK_FONT_PX,
            TextAlign::Center,
            TextBaseline::Top,
            0.0,
        ));
    }
    for y in ticks(-1.0, 1.0, Y_TICK_STEP) {
        let at = plot.to_px(X_MIN, y) - DVec2::new(6.0, 0.0);
        ops.push(label(
            at,
            format!("{y:.1}"),
            TICK_FONT_PX,
            TextAlign::Right,
            TextBaseline::Middle,
            0.0,
        ));
    }

    let bottom_center = DVec2::new(
        plot.area.min.x + plot.area.width() / 2.0,
        FRAME_HEIGHT_PX as f64 - 8.0,
    );
    ops.push(label(
        bottom_center,
        X_AXIS_LABEL.to_string(),
        LABEL_FONT_PX,
        TextAlign::Center,
        TextBaseline::Bottom,
        0.0,
    ));
    let left_center = DVec2::new(20.0, plot.area.min.y + plot.area.height() / 2.0);
    ops.push(label(
        left_center,
        Y_AXIS_LABEL.to_string(),
        LABEL_FONT_PX,
        TextAlign::Center,
        TextBaseline::Middle,
        -std::f64::consts::FRAC_PI_2,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{DisplayFlags, WaveKind};

    fn scene_with(flags: DisplayFlags, damping: f64) -> Scene {
        let params = WaveParams::builder()
            .damping_rate(damping)
            .flags(flags)
            .build()
            .unwrap();
        compose(&params, 0.0, &SampleGrid::standard(), &SampleGrid::particles())
    }

    fn polylines(scene: &Scene) -> Vec<&Vec<DVec2>> {
        scene
            .ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Polyline { points, .. } => Some(points),
                _ => None,
            })
            .collect()
    }

    fn no_flags() -> DisplayFlags {
        DisplayFlags {
            envelope: false,
            particles: false,
            grid: false,
            dark_mode: false,
        }
    }

    #[test]
    fn transform_maps_axis_corners_to_plot_area() {
        let plot = PlotTransform::standard();
        assert_eq!(plot.to_px(X_MIN, Y_MAX), plot.area.min);
        assert_eq!(plot.to_px(X_MAX, Y_MIN), plot.area.max);
        let mid = plot.to_px(1.0, 0.0);
        assert!((mid.x - (plot.area.min.x + plot.area.width() / 2.0)).abs() < 1e-9);
        assert!((mid.y - (plot.area.min.y + plot.area.height() / 2.0)).abs() < 1e-9);
    }

    #[test]
    fn ticks_cover_the_axis_inclusively() {
        assert_eq!(ticks(0.0, 2.0, 0.25).len(), 9);
        assert_eq!(ticks(-1.0, 1.0, 0.5), vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
    }

    #[test]
    fn bare_scene_has_only_the_wave_line() {
        let scene = scene_with(no_flags(), 0.0);
        let lines = polylines(&scene);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].len(), SAMPLE_COUNT);
        assert!(!scene.ops.iter().any(|op| matches!(op, DrawOp::Dots { .. })));
    }

    #[test]
    fn envelope_needs_damping() {
        let flags = DisplayFlags {
            envelope: true,
            ..no_flags()
        };
        assert_eq!(polylines(&scene_with(flags, 0.0)).len(), 1);
        assert_eq!(polylines(&scene_with(flags, 0.1)).len(), 3);
    }

    #[test]
    fn particles_add_thirty_dots() {
        let flags = DisplayFlags {
            particles: true,
            ..no_flags()
        };
        let scene = scene_with(flags, 0.0);
        let dots = scene.ops.iter().find_map(|op| match op {
            DrawOp::Dots { centers, .. } => Some(centers.len()),
            _ => None,
        });
        assert_eq!(dots, Some(PARTICLE_COUNT));
    }

    #[test]
    fn grid_lines_are_dashed() {
        let flags = DisplayFlags {
            grid: true,
            ..no_flags()
        };
        let scene = scene_with(flags, 0.0);
        let dashed = scene
            .ops
            .iter()
            .filter(|op| {
                matches!(op, DrawOp::Polyline { stroke, .. } if stroke.dash == Some(GRID_DASH_PX))
            })
            .count();
        assert_eq!(dashed, 9 + 5);
    }

    #[test]
    fn dark_mode_switches_background() {
        let flags = DisplayFlags {
            dark_mode: true,
            ..no_flags()
        };
        let scene = scene_with(flags, 0.0);
        assert!(matches!(
            scene.ops.first(),
            Some(DrawOp::FillRect { color, .. }) if *color == Rgb::BLACK
        ));
    }

    #[test]
    fn wave_stays_inside_the_plot_area() {
        let params = WaveParams::builder()
            .kind(WaveKind::Square)
            .amplitude(1.0)
            .build()
            .unwrap();
        let scene = compose(&params, 0.3, &SampleGrid::standard(), &SampleGrid::particles());
        let area = PlotTransform::standard().area;
        for line in polylines(&scene) {
            assert!(line.iter().all(|p| area.contains(*p)));
        }
    }

    #[test]
    fn readout_is_stamped_last() {
        let scene = scene_with(DisplayFlags::default(), 0.0);
        match scene.ops.last() {
            Some(DrawOp::Text(text)) => {
                assert!(text.content.starts_with("Waveform: Sine"));
                assert!(text.backdrop.is_some());
            }
            other => panic!("expected readout text, got {other:?}"),
        }
    }
}
