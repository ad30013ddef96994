//! Declarative description of the settings panel.
//!
//! The web front-end builds its DOM from these tables, and
//! [`crate::WaveParams::default`] takes its values from the same defaults, so
//! a freshly loaded page and a default-constructed parameter set always agree.

/// A numeric range input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderSpec {
    pub id: &'static str,
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
    pub help: &'static str,
}

impl SliderSpec {
    /// Clamp a value into the slider range and snap it to the step grid.
    pub fn snap(&self, value: f64) -> f64 {
        let clamped = value.clamp(self.min, self.max);
        let steps = ((clamped - self.min) / self.step).round();
        // round to the step's decimal precision so 0.1 * 3 reads back as 0.3
        let decimals = self.decimals() as i32;
        let scale = 10f64.powi(decimals);
        ((self.min + steps * self.step) * scale).round() / scale
    }

    /// Number of decimals needed to print values on this slider's grid.
    pub fn decimals(&self) -> usize {
        let mut step = self.step;
        let mut decimals = 0;
        while (step - step.round()).abs() > 1e-9 && decimals < 6 {
            step *= 10.0;
            decimals += 1;
        }
        decimals
    }

    pub fn format(&self, value: f64) -> String {
        format!("{:.*}", self.decimals(), value)
    }
}

/// A boolean display toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleSpec {
    pub id: &'static str,
    pub label: &'static str,
    pub default: bool,
    pub help: &'static str,
}

pub const WAVEFORM_SELECT_ID: &str = "waveform";
pub const WAVEFORM_LABEL: &str = "Select Waveform";
pub const WAVEFORM_HELP: &str = "Shape of one cycle of the wave";

pub const COLOR_PICKER_ID: &str = "wave-color";
pub const COLOR_LABEL: &str = "Wave Color";
pub const COLOR_HELP: &str = "Color of the plotted wave line";
pub const DEFAULT_COLOR_HEX: &str = "#1E90FF";

pub const FREQUENCY: SliderSpec = SliderSpec {
    id: "frequency",
    label: "Frequency (Hz)",
    min: 1.0,
    max: 20.0,
    step: 1.0,
    default: 5.0,
    help: "Number of complete cycles per second",
};

pub const AMPLITUDE: SliderSpec = SliderSpec {
    id: "amplitude",
    label: "Amplitude",
    min: 0.1,
    max: 1.0,
    step: 0.1,
    default: 0.8,
    help: "Maximum displacement from the center line",
};

pub const PHASE: SliderSpec = SliderSpec {
    id: "phase",
    label: "Phase (degrees)",
    min: 0.0,
    max: 360.0,
    step: 1.0,
    default: 0.0,
    help: "Horizontal shift of the wave",
};

pub const DAMPING: SliderSpec = SliderSpec {
    id: "damping",
    label: "Damping Factor",
    min: 0.0,
    max: 0.2,
    step: 0.01,
    default: 0.0,
    help: "Rate at which the amplitude decreases over time/distance",
};

pub const SPEED: SliderSpec = SliderSpec {
    id: "speed",
    label: "Animation Speed",
    min: 0.1,
    max: 2.0,
    step: 0.1,
    default: 1.0,
    help: "Playback rate of the animation loop",
};

pub const SLIDERS: [SliderSpec; 5] = [FREQUENCY, AMPLITUDE, PHASE, DAMPING, SPEED];

pub const ADVANCED_GROUP_LABEL: &str = "Advanced Options";

pub const SHOW_ENVELOPE: ToggleSpec = ToggleSpec {
    id: "show-envelope",
    label: "Show Envelope",
    default: false,
    help: "Draw the decaying amplitude bounds (needs damping above zero)",
};

pub const SHOW_PARTICLES: ToggleSpec = ToggleSpec {
    id: "show-particles",
    label: "Show Particle Motion",
    default: false,
    help: "Mark sample points of the medium riding on the wave",
};

pub const SHOW_GRID: ToggleSpec = ToggleSpec {
    id: "show-grid",
    label: "Show Grid",
    default: true,
    help: "Draw dashed grid lines behind the wave",
};

pub const DARK_MODE: ToggleSpec = ToggleSpec {
    id: "dark-mode",
    label: "Dark Mode",
    default: false,
    help: "Render the chart on a dark background",
};

pub const TOGGLES: [ToggleSpec; 4] = [SHOW_ENVELOPE, SHOW_PARTICLES, SHOW_GRID, DARK_MODE];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_lie_on_their_sliders() {
        for s in SLIDERS {
            assert!(s.default >= s.min && s.default <= s.max, "{}", s.id);
            assert_eq!(s.snap(s.default), s.default, "{}", s.id);
        }
    }

    #[test]
    fn snap_clamps_and_rounds_to_step() {
        assert_eq!(AMPLITUDE.snap(0.34), 0.3);
        assert_eq!(AMPLITUDE.snap(5.0), 1.0);
        assert_eq!(DAMPING.snap(0.057), 0.06);
        assert_eq!(FREQUENCY.snap(0.0), 1.0);
    }

    #[test]
    fn format_uses_step_precision() {
        assert_eq!(FREQUENCY.format(5.0), "5");
        assert_eq!(AMPLITUDE.format(0.8), "0.8");
        assert_eq!(DAMPING.format(0.05), "0.05");
    }

    #[test]
    fn control_ids_are_unique() {
        let mut ids: Vec<&str> = SLIDERS.iter().map(|s| s.id).collect();
        ids.extend(TOGGLES.iter().map(|t| t.id));
        ids.push(WAVEFORM_SELECT_ID);
        ids.push(COLOR_PICKER_ID);
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }
}
