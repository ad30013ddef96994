// Host-side tests for DOM ids and their relationship to the control tables.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use wave_core::controls;

fn page_ids() -> Vec<&'static str> {
    vec![
        CONTROLS_ROOT_ID,
        CANVAS_ID,
        PROGRESS_ID,
        WARNING_ID,
        ABOUT_HEADING_ID,
        ABOUT_BODY_ID,
        EXPLAINER_ID,
        FUN_FACTS_ID,
    ]
}

#[test]
fn page_ids_are_unique_and_non_empty() {
    let mut ids = page_ids();
    assert!(ids.iter().all(|id| !id.is_empty() && !id.contains(' ')));
    let total = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), total);
}

#[test]
fn page_ids_do_not_collide_with_controls() {
    let mut control_ids: Vec<String> = controls::SLIDERS.iter().map(|s| s.id.to_string()).collect();
    control_ids.extend(
        controls::SLIDERS
            .iter()
            .map(|s| format!("{}{}", s.id, VALUE_SUFFIX)),
    );
    control_ids.extend(controls::TOGGLES.iter().map(|t| t.id.to_string()));
    control_ids.push(controls::WAVEFORM_SELECT_ID.to_string());
    control_ids.push(controls::COLOR_PICKER_ID.to_string());
    for id in page_ids() {
        assert!(!control_ids.iter().any(|c| c == id), "{id} collides");
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn progress_resolution_is_positive() {
    assert!(PROGRESS_MAX > 0);
}
