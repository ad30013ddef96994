use thiserror::Error;

/// Rejected control input. Raised while building [`crate::WaveParams`], never
/// by the evaluator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamError {
    #[error("unknown waveform kind `{0}`")]
    UnknownKind(String),
    #[error("{name} is not a number: `{raw}`")]
    NotANumber { name: &'static str, raw: String },
    #[error("{name} must be finite, got {value}")]
    NotFinite { name: &'static str, value: f64 },
    #[error("{name} must be greater than zero, got {value}")]
    NotPositive { name: &'static str, value: f64 },
    #[error("{name} must lie in [{min}, {max}], got {value}")]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("invalid color `{0}`, expected #RRGGBB or #RGB")]
    InvalidColor(String),
}

/// Failure while producing or presenting animation frames.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    #[error("rasterization failed: {0}")]
    Rasterize(String),
    #[error("display failed: {0}")]
    Display(String),
    #[error("incomplete cycle: expected {expected} frames, got {actual}")]
    IncompleteCycle { expected: usize, actual: usize },
}
