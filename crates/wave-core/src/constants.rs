// Sampling, timing and chart geometry shared by the evaluator, the chart
// composer and the web front-end.

// Sample grid
pub const SAMPLE_COUNT: usize = 1000;
pub const PARTICLE_COUNT: usize = 30;
pub const X_MIN: f64 = 0.0;
pub const X_MAX: f64 = 2.0;

// Fixed vertical axis (data units)
pub const Y_MIN: f64 = -1.2;
pub const Y_MAX: f64 = 1.2;

// Animation
pub const FRAMES_PER_CYCLE: usize = 20;
pub const BASE_FRAME_DELAY_SEC: f64 = 0.05; // divided by the speed multiplier

// Frame bitmap size (10x6 inches at 100 dpi)
pub const FRAME_WIDTH_PX: u32 = 1000;
pub const FRAME_HEIGHT_PX: u32 = 600;

// Plot area margins inside the frame (pixels)
pub const MARGIN_LEFT_PX: f64 = 80.0;
pub const MARGIN_RIGHT_PX: f64 = 24.0;
pub const MARGIN_TOP_PX: f64 = 24.0;
pub const MARGIN_BOTTOM_PX: f64 = 64.0;

// Grid / tick spacing (data units)
pub const X_TICK_STEP: f64 = 0.25;
pub const Y_TICK_STEP: f64 = 0.5;

// Stroke and marker styling
pub const WAVE_LINE_WIDTH_PX: f64 = 3.0;
pub const ENVELOPE_LINE_WIDTH_PX: f64 = 1.5;
pub const ENVELOPE_ALPHA: f64 = 0.5;
pub const ENVELOPE_DASH_PX: [f64; 2] = [6.0, 4.0];
pub const GRID_LINE_WIDTH_PX: f64 = 0.8;
pub const GRID_ALPHA: f64 = 0.7;
pub const GRID_DASH_PX: [f64; 2] = [4.0, 3.0];
pub const PARTICLE_RADIUS_PX: f64 = 3.0;
pub const AXIS_LINE_WIDTH_PX: f64 = 1.0;

// Text
pub const READOUT_FONT_PX: f64 = 14.0;
pub const READOUT_BACKDROP_ALPHA: f64 = 0.7;
pub const READOUT_ANCHOR_AXES: [f64; 2] = [0.02, 0.95]; // fraction of the plot area
pub const LABEL_FONT_PX: f64 = 14.0;
pub const TICK_FONT_PX: f64 = 12.0;
pub const X_AXIS_LABEL: &str = "Distance";
pub const Y_AXIS_LABEL: &str = "Displacement";

pub const FALLBACK_WARNING: &str = "Animation paused. Adjust parameters to see changes.";
