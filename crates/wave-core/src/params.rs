use crate::color::Rgb;
use crate::constants::BASE_FRAME_DELAY_SEC;
use crate::controls;
use crate::error::ParamError;
use std::f64::consts::TAU;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Periodic shape evaluated along the x axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum WaveKind {
    #[default]
    Sine,
    Square,
    Sawtooth,
    Triangle,
}

impl WaveKind {
    pub const ALL: [WaveKind; 4] = [
        WaveKind::Sine,
        WaveKind::Square,
        WaveKind::Sawtooth,
        WaveKind::Triangle,
    ];

    pub fn name(self) -> &'static str {
        match self {
            WaveKind::Sine => "Sine",
            WaveKind::Square => "Square",
            WaveKind::Sawtooth => "Sawtooth",
            WaveKind::Triangle => "Triangle",
        }
    }
}

impl fmt::Display for WaveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WaveKind {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        WaveKind::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParamError::UnknownKind(s.to_string()))
    }
}

/// Optional chart decorations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayFlags {
    pub envelope: bool,
    pub particles: bool,
    pub grid: bool,
    pub dark_mode: bool,
}

impl Default for DisplayFlags {
    fn default() -> Self {
        Self {
            envelope: controls::SHOW_ENVELOPE.default,
            particles: controls::SHOW_PARTICLES.default,
            grid: controls::SHOW_GRID.default,
            dark_mode: controls::DARK_MODE.default,
        }
    }
}

/// One complete, validated set of wave settings.
///
/// Values are only obtainable through [`WaveParamsBuilder::build`], which
/// enforces the data-model bounds; the evaluator therefore never sees
/// out-of-range or non-finite input. A new value is built on every control
/// change and the previous one is dropped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveParams {
    kind: WaveKind,
    frequency_hz: f64,
    amplitude: f64,
    phase_degrees: f64,
    damping_rate: f64,
    speed: f64,
    color: Rgb,
    flags: DisplayFlags,
}

impl WaveParams {
    pub fn builder() -> WaveParamsBuilder {
        WaveParamsBuilder::default()
    }

    #[inline]
    pub fn kind(&self) -> WaveKind {
        self.kind
    }
    #[inline]
    pub fn frequency_hz(&self) -> f64 {
        self.frequency_hz
    }
    #[inline]
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }
    #[inline]
    pub fn phase_degrees(&self) -> f64 {
        self.phase_degrees
    }
    #[inline]
    pub fn phase_radians(&self) -> f64 {
        self.phase_degrees.to_radians()
    }
    #[inline]
    pub fn damping_rate(&self) -> f64 {
        self.damping_rate
    }
    #[inline]
    pub fn speed(&self) -> f64 {
        self.speed
    }
    #[inline]
    pub fn color(&self) -> Rgb {
        self.color
    }
    #[inline]
    pub fn flags(&self) -> DisplayFlags {
        self.flags
    }

    /// Phase advance per unit of animation time (radians).
    #[inline]
    pub fn angular_velocity(&self) -> f64 {
        self.frequency_hz * TAU * self.speed
    }

    /// Delay between two displayed frames. Saturates for vanishingly small speeds.
    pub fn frame_delay(&self) -> Duration {
        Duration::try_from_secs_f64(BASE_FRAME_DELAY_SEC / self.speed).unwrap_or(Duration::MAX)
    }

    /// Text stamped onto every frame.
    pub fn readout(&self) -> String {
        format!(
            "Waveform: {} | Frequency: {} Hz | Amplitude: {:?}",
            self.kind, self.frequency_hz, self.amplitude
        )
    }

    /// Start a builder pre-filled with these values, for deriving a variant.
    pub fn to_builder(&self) -> WaveParamsBuilder {
        WaveParamsBuilder {
            kind: self.kind,
            frequency_hz: self.frequency_hz,
            amplitude: self.amplitude,
            phase_degrees: self.phase_degrees,
            damping_rate: self.damping_rate,
            speed: self.speed,
            color: self.color,
            flags: self.flags,
        }
    }
}

impl Default for WaveParams {
    fn default() -> Self {
        // defaults come from the control tables and are in range by construction
        let b = WaveParamsBuilder::default();
        Self {
            kind: b.kind,
            frequency_hz: b.frequency_hz,
            amplitude: b.amplitude,
            phase_degrees: b.phase_degrees,
            damping_rate: b.damping_rate,
            speed: b.speed,
            color: b.color,
            flags: b.flags,
        }
    }
}

/// Collects raw settings and validates them into a [`WaveParams`].
#[derive(Clone, Debug)]
pub struct WaveParamsBuilder {
    kind: WaveKind,
    frequency_hz: f64,
    amplitude: f64,
    phase_degrees: f64,
    damping_rate: f64,
    speed: f64,
    color: Rgb,
    flags: DisplayFlags,
}

impl Default for WaveParamsBuilder {
    fn default() -> Self {
        Self {
            kind: WaveKind::default(),
            frequency_hz: controls::FREQUENCY.default,
            amplitude: controls::AMPLITUDE.default,
            phase_degrees: controls::PHASE.default,
            damping_rate: controls::DAMPING.default,
            speed: controls::SPEED.default,
            color: Rgb::DODGER_BLUE,
            flags: DisplayFlags::default(),
        }
    }
}

impl WaveParamsBuilder {
    pub fn kind(mut self, kind: WaveKind) -> Self {
        self.kind = kind;
        self
    }
    pub fn frequency_hz(mut self, hz: f64) -> Self {
        self.frequency_hz = hz;
        self
    }
    pub fn amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }
    pub fn phase_degrees(mut self, degrees: f64) -> Self {
        self.phase_degrees = degrees;
        self
    }
    pub fn damping_rate(mut self, rate: f64) -> Self {
        self.damping_rate = rate;
        self
    }
    pub fn speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }
    pub fn color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }
    pub fn flags(mut self, flags: DisplayFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn build(self) -> Result<WaveParams, ParamError> {
        Ok(WaveParams {
            kind: self.kind,
            frequency_hz: positive("frequency", self.frequency_hz)?,
            amplitude: within("amplitude", self.amplitude, 0.0, 1.0)?,
            phase_degrees: within("phase", self.phase_degrees, 0.0, 360.0)?,
            damping_rate: within("damping", self.damping_rate, 0.0, f64::INFINITY)?,
            speed: positive("speed", self.speed)?,
            color: self.color,
            flags: self.flags,
        })
    }
}

fn finite(name: &'static str, value: f64) -> Result<f64, ParamError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ParamError::NotFinite { name, value })
    }
}

fn positive(name: &'static str, value: f64) -> Result<f64, ParamError> {
    let value = finite(name, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(ParamError::NotPositive { name, value })
    }
}

fn within(name: &'static str, value: f64, min: f64, max: f64) -> Result<f64, ParamError> {
    let value = finite(name, value)?;
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(ParamError::OutOfRange {
            name,
            value,
            min,
            max,
        })
    }
}
