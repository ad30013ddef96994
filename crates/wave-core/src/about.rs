//! Static explanatory copy shown next to the chart.

use crate::params::WaveKind;

pub const TITLE: &str = "Interactive Sound Wave Visualizer";

pub const INTRO: &str = "Explore the fascinating world of sound waves with this interactive app! \
Adjust the parameters to see how different waveforms, frequencies, and amplitudes \
affect sound waves.";

pub const WHAT_AM_I_SEEING_TITLE: &str = "What Am I Seeing?";

pub const WHAT_AM_I_SEEING: &str =
    "This visualization shows how sound waves propagate through a medium.";

/// (name, summary) pairs for the waveform list.
pub const WAVEFORM_SUMMARIES: [(&str, &str); 4] = [
    ("Sine", "The purest tone, with smooth transitions"),
    ("Square", "Rich in harmonics, sounds buzzy"),
    ("Sawtooth", "Bright, harsh sound with many harmonics"),
    ("Triangle", "Softer than square, with odd harmonics"),
];

/// (control, meaning) pairs for the controls list.
pub const CONTROL_SUMMARIES: [(&str, &str); 4] = [
    ("Frequency", "Number of cycles per second (Hz)"),
    ("Amplitude", "How loud the sound is"),
    ("Phase", "Shifts the wave left/right"),
    ("Damping", "How quickly the wave dies out"),
];

pub const FUN_FACTS_TITLE: &str = "Fun Facts About Sound";

pub const FUN_FACTS: [&str; 5] = [
    "Sound cannot travel in a vacuum - it needs a medium to propagate",
    "The speed of sound in air is about 343 meters per second",
    "Human ears can typically hear frequencies between 20 Hz and 20,000 Hz",
    "A sound wave's amplitude determines how loud it sounds",
    "Interference occurs when two sound waves meet and combine",
];

pub fn heading(kind: WaveKind) -> String {
    format!("About {kind} Waves")
}

pub fn description(kind: WaveKind) -> &'static str {
    match kind {
        WaveKind::Sine => {
            "Sine waves are the fundamental building blocks of sound. They represent pure tones \
with a single frequency. All other complex sounds can be created by combining sine waves \
of different frequencies and amplitudes."
        }
        WaveKind::Square => {
            "Square waves alternate between two fixed values, creating a buzzy sound. They contain \
a fundamental frequency plus odd harmonics. In music synthesis, square waves are often \
used for bass and lead sounds."
        }
        WaveKind::Sawtooth => {
            "Sawtooth waves rise linearly and then drop vertically. They contain both odd and \
even harmonics, creating a bright, harsh sound. They're commonly used in synthesizers \
for strings and brass simulations."
        }
        WaveKind::Triangle => {
            "Triangle waves rise and fall linearly. They contain only odd harmonics that decrease \
more rapidly than square waves, creating a softer sound. They're often used for flute-like \
sounds in synthesis."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_a_summary_and_description() {
        for kind in WaveKind::ALL {
            assert!(WAVEFORM_SUMMARIES.iter().any(|(n, _)| *n == kind.name()));
            assert!(description(kind).starts_with(kind.name()));
        }
        assert_eq!(heading(WaveKind::Triangle), "About Triangle Waves");
    }
}
