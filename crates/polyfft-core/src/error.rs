//! Error type for polynomial multiplication.

use polyfft_transform::TransformError;

/// Error type for polynomial multiplication.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PolyError {
    /// The transform rejected its input length.
    #[error(transparent)]
    Transform(#[from] TransformError),

    /// A coefficient is NaN/infinite or could not be parsed.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// A calculation error occurred.
    #[error("calculation error: {0}")]
    Calculation(String),

    /// Two multipliers disagree beyond the tolerance.
    #[error("result mismatch at coefficient {index}: {left} != {right}")]
    Mismatch {
        /// Coefficient index of the first disagreement.
        index: usize,
        /// Value from the reference result.
        left: f64,
        /// Value from the compared result.
        right: f64,
    },
}
