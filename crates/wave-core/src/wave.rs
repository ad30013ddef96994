//! Closed-form evaluation of a traveling wave.

use crate::constants::{PARTICLE_COUNT, SAMPLE_COUNT, X_MAX, X_MIN};
use crate::params::{WaveKind, WaveParams};
use std::f64::consts::TAU;

/// Evenly spaced sample positions, endpoints included.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleGrid {
    xs: Vec<f64>,
}

impl SampleGrid {
    pub fn linspace(start: f64, end: f64, count: usize) -> Self {
        let xs = match count {
            0 => Vec::new(),
            1 => vec![start],
            n => {
                let step = (end - start) / (n - 1) as f64;
                (0..n)
                    .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                    .collect()
            }
        };
        Self { xs }
    }

    /// The 1000-point grid every frame is drawn on.
    pub fn standard() -> Self {
        Self::linspace(X_MIN, X_MAX, SAMPLE_COUNT)
    }

    /// The sparser grid used for the particle overlay.
    pub fn particles() -> Self {
        Self::linspace(X_MIN, X_MAX, PARTICLE_COUNT)
    }

    #[inline]
    pub fn positions(&self) -> &[f64] {
        &self.xs
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }
}

/// Phase at animation time `t`, in radians.
#[inline]
pub fn effective_phase(params: &WaveParams, t: f64) -> f64 {
    params.phase_radians() + t * params.angular_velocity()
}

/// Amplitude after exponential distance damping.
#[inline]
pub fn effective_amplitude(params: &WaveParams, x: f64) -> f64 {
    if params.damping_rate() > 0.0 {
        params.amplitude() * (-params.damping_rate() * x.abs()).exp()
    } else {
        params.amplitude()
    }
}

/// Upper envelope bound at `x`; the lower bound is its negation.
#[inline]
pub fn envelope(params: &WaveParams, x: f64) -> f64 {
    params.amplitude() * (-params.damping_rate() * x.abs()).exp()
}

/// Displacement at position `x` and time `t`.
pub fn displacement(params: &WaveParams, x: f64, t: f64) -> f64 {
    let phase = effective_phase(params, t);
    let amp = effective_amplitude(params, x);
    let u = TAU * params.frequency_hz() * x + phase;
    let cycles = params.frequency_hz() * x + phase / TAU;
    amp * params.kind().shape(u, cycles)
}

/// Evaluate the wave over every position in `xs`.
pub fn evaluate(xs: &[f64], t: f64, params: &WaveParams) -> Vec<f64> {
    xs.iter().map(|&x| displacement(params, x, t)).collect()
}

impl WaveKind {
    /// Unit-amplitude shape. `u` is the angle in radians and `cycles` the same
    /// position expressed in whole cycles (`u / 2π`).
    #[inline]
    pub fn shape(self, u: f64, cycles: f64) -> f64 {
        match self {
            WaveKind::Sine => u.sin(),
            WaveKind::Square => sign(u.sin()),
            WaveKind::Sawtooth => 2.0 * frac(cycles) - 1.0,
            WaveKind::Triangle => 2.0 * (2.0 * frac(cycles) - 1.0).abs() - 1.0,
        }
    }
}

/// Sign with `sign(0) == 0`, unlike `f64::signum`.
#[inline]
fn sign(v: f64) -> f64 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Fractional part in `[0, 1)`, floored for negative input.
#[inline]
fn frac(v: f64) -> f64 {
    let r = v.rem_euclid(1.0);
    // rem_euclid can round up to exactly 1.0 for tiny negative input
    if r >= 1.0 {
        0.0
    } else {
        r
    }
}
