//! Validated power-of-two transform length.

use crate::error::TransformError;

/// A non-zero power of two, the only length the transform accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PowerOfTwo(usize);

impl PowerOfTwo {
    /// Validate an exact length.
    pub fn new(n: usize) -> Result<Self, TransformError> {
        if n.is_power_of_two() {
            Ok(Self(n))
        } else {
            Err(TransformError::InvalidLength(n))
        }
    }

    /// Smallest power of two `>= n`. `n == 0` rounds up to 1.
    pub fn at_least(n: usize) -> Result<Self, TransformError> {
        n.checked_next_power_of_two()
            .map(Self)
            .ok_or(TransformError::LengthOverflow(n))
    }

    /// Padded length for multiplying polynomials with `len_a` and `len_b`
    /// coefficients: the smallest power of two `>= len_a + len_b`.
    pub fn for_product(len_a: usize, len_b: usize) -> Result<Self, TransformError> {
        let total = len_a
            .checked_add(len_b)
            .ok_or(TransformError::LengthOverflow(len_a))?;
        Self::at_least(total)
    }

    /// The length as a plain `usize`.
    #[must_use]
    pub fn get(self) -> usize {
        self.0
    }

    /// Number of radix-2 levels, i.e. the recursion depth.
    #[must_use]
    pub fn log2(self) -> u32 {
        self.0.trailing_zeros()
    }

    /// Half the length, or `None` for the length-1 base case.
    #[must_use]
    pub fn half(self) -> Option<Self> {
        if self.0 == 1 {
            None
        } else {
            Some(Self(self.0 / 2))
        }
    }
}

impl TryFrom<usize> for PowerOfTwo {
    type Error = TransformError;

    fn try_from(n: usize) -> Result<Self, Self::Error> {
        Self::new(n)
    }
}

impl From<PowerOfTwo> for usize {
    fn from(n: PowerOfTwo) -> Self {
        n.0
    }
}

impl std::fmt::Display for PowerOfTwo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
