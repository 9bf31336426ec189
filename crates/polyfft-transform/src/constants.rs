//! Numeric constants shared by the transform and its callers.

/// Full turn in radians (2π). Twiddle angles are `±TAU / n`.
pub const TAU: f64 = std::f64::consts::TAU;

/// Default absolute tolerance when comparing transform or product outputs.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Scale applied to both butterfly outputs at every inverse level.
///
/// Over log2(n) levels this multiplies out to the usual 1/n normalization.
pub const INVERSE_LEVEL_SCALE: f64 = 0.5;
