// Raw control values as read from the DOM, and their validation into
// `WaveParams`. Free of `web_sys` so host tests can include it directly.

use wave_core::{controls, DisplayFlags, ParamError, Rgb, WaveKind, WaveParams};

/// Control values exactly as the browser reports them.
#[derive(Clone, Debug, PartialEq)]
pub struct RawControls {
    pub waveform: String,
    pub frequency: String,
    pub amplitude: String,
    pub phase: String,
    pub damping: String,
    pub speed: String,
    pub color: String,
    pub envelope: bool,
    pub particles: bool,
    pub grid: bool,
    pub dark_mode: bool,
}

impl Default for RawControls {
    fn default() -> Self {
        Self {
            waveform: WaveKind::default().name().to_string(),
            frequency: controls::FREQUENCY.format(controls::FREQUENCY.default),
            amplitude: controls::AMPLITUDE.format(controls::AMPLITUDE.default),
            phase: controls::PHASE.format(controls::PHASE.default),
            damping: controls::DAMPING.format(controls::DAMPING.default),
            speed: controls::SPEED.format(controls::SPEED.default),
            color: controls::DEFAULT_COLOR_HEX.to_string(),
            envelope: controls::SHOW_ENVELOPE.default,
            particles: controls::SHOW_PARTICLES.default,
            grid: controls::SHOW_GRID.default,
            dark_mode: controls::DARK_MODE.default,
        }
    }
}

fn number(name: &'static str, raw: &str) -> Result<f64, ParamError> {
    raw.trim().parse::<f64>().map_err(|_| ParamError::NotANumber {
        name,
        raw: raw.to_string(),
    })
}

/// Parse and validate, snapping slider values to their step grid first.
pub fn params_from_raw(raw: &RawControls) -> Result<WaveParams, ParamError> {
    let kind: WaveKind = raw.waveform.parse()?;
    let color: Rgb = raw.color.parse()?;
    let slider = |spec: &controls::SliderSpec, name, text: &str| {
        number(name, text).map(|v| {
            if v.is_finite() {
                spec.snap(v)
            } else {
                v
            }
        })
    };
    WaveParams::builder()
        .kind(kind)
        .frequency_hz(slider(&controls::FREQUENCY, "frequency", &raw.frequency)?)
        .amplitude(slider(&controls::AMPLITUDE, "amplitude", &raw.amplitude)?)
        .phase_degrees(slider(&controls::PHASE, "phase", &raw.phase)?)
        .damping_rate(slider(&controls::DAMPING, "damping", &raw.damping)?)
        .speed(slider(&controls::SPEED, "speed", &raw.speed)?)
        .color(color)
        .flags(DisplayFlags {
            envelope: raw.envelope,
            particles: raw.particles,
            grid: raw.grid,
            dark_mode: raw.dark_mode,
        })
        .build()
}
