//! Transform error type.

/// Error type for transform length validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransformError {
    /// Length is zero or not a power of two.
    #[error("invalid transform length {0}: expected a non-zero power of two")]
    InvalidLength(usize),

    /// Rounding up to a power of two does not fit in `usize`.
    #[error("transform length overflow: no power of two >= {0} fits in usize")]
    LengthOverflow(usize),
}
