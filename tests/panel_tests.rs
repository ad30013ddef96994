// Host-side tests for panel parsing.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod panel {
    include!("../src/panel.rs");
}

use panel::*;
use wave_core::{ParamError, Rgb, WaveKind, WaveParams};

#[test]
fn default_panel_yields_default_params() {
    let params = params_from_raw(&RawControls::default()).unwrap();
    assert_eq!(params, WaveParams::default());
}

#[test]
fn browser_values_are_parsed() {
    let raw = RawControls {
        waveform: "Triangle".into(),
        frequency: "12".into(),
        amplitude: "0.4".into(),
        phase: "270".into(),
        damping: "0.15".into(),
        speed: "1.7".into(),
        color: "#ff8800".into(),
        envelope: true,
        particles: true,
        grid: false,
        dark_mode: true,
    };
    let p = params_from_raw(&raw).unwrap();
    assert_eq!(p.kind(), WaveKind::Triangle);
    assert_eq!(p.frequency_hz(), 12.0);
    assert_eq!(p.amplitude(), 0.4);
    assert_eq!(p.phase_degrees(), 270.0);
    assert_eq!(p.damping_rate(), 0.15);
    assert_eq!(p.speed(), 1.7);
    assert_eq!(p.color(), Rgb::new(0xff, 0x88, 0x00));
    let f = p.flags();
    assert!(f.envelope && f.particles && !f.grid && f.dark_mode);
}

#[test]
fn slider_values_snap_to_their_grid() {
    let raw = RawControls {
        amplitude: "0.8000000000000002".into(),
        frequency: "25".into(),
        speed: "0.0".into(),
        ..RawControls::default()
    };
    let p = params_from_raw(&raw).unwrap();
    assert_eq!(p.amplitude(), 0.8);
    assert_eq!(p.frequency_hz(), 20.0);
    assert_eq!(p.speed(), 0.1);
}

#[test]
fn unknown_waveform_never_reaches_the_evaluator() {
    let raw = RawControls {
        waveform: "Noise".into(),
        ..RawControls::default()
    };
    assert_eq!(
        params_from_raw(&raw),
        Err(ParamError::UnknownKind("Noise".into()))
    );
}

#[test]
fn garbage_numbers_and_colors_are_rejected() {
    let raw = RawControls {
        phase: "ninety".into(),
        ..RawControls::default()
    };
    assert!(matches!(
        params_from_raw(&raw),
        Err(ParamError::NotANumber { name: "phase", .. })
    ));

    let raw = RawControls {
        damping: "NaN".into(),
        ..RawControls::default()
    };
    assert!(matches!(
        params_from_raw(&raw),
        Err(ParamError::NotFinite { name: "damping", .. })
    ));

    let raw = RawControls {
        color: "blue".into(),
        ..RawControls::default()
    };
    assert!(matches!(
        params_from_raw(&raw),
        Err(ParamError::InvalidColor(_))
    ));
}
