// DOM element ids and CSS hooks shared by the page and the wasm front-end.
// Control ids themselves come from `wave_core::controls`.

pub const CONTROLS_ROOT_ID: &str = "controls";
pub const CANVAS_ID: &str = "wave-canvas";
pub const PROGRESS_ID: &str = "frame-progress";
pub const WARNING_ID: &str = "render-warning";

pub const ABOUT_HEADING_ID: &str = "about-heading";
pub const ABOUT_BODY_ID: &str = "about-body";
pub const EXPLAINER_ID: &str = "explainer";
pub const FUN_FACTS_ID: &str = "fun-facts";

// Suffix for the live value readout next to each slider
pub const VALUE_SUFFIX: &str = "-value";

// Class toggled on elements that should not be displayed
pub const HIDDEN_CLASS: &str = "hidden";

// Progress element resolution (value attribute runs 0..=PROGRESS_MAX)
pub const PROGRESS_MAX: u32 = 100;
