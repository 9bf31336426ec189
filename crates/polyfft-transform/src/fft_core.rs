//! Core FFT transform: forward and inverse over complex sequences.
//!
//! Radix-2 decimation in time. Each level copies the even- and odd-indexed
//! samples into fresh buffers, transforms them recursively, and combines
//! them with the butterfly
//!
//! ```text
//! out[j]       = E[j] + w^j * O[j]
//! out[j + n/2] = E[j] - w^j * O[j]
//! ```
//!
//! where `w = e^(∓2πi/n)`. The inverse also halves both outputs at every
//! level, so the 1/n normalization is spread over the log2(n) levels.

use num_complex::Complex64;
use num_traits::One;

use crate::constants::{INVERSE_LEVEL_SCALE, TAU};
use crate::error::TransformError;
use crate::length::PowerOfTwo;
use crate::numeric::twiddle;

/// Transform direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Time to frequency domain, `w = e^(-2πi/n)`.
    Forward,
    /// Frequency to time domain, `w = e^(+2πi/n)` with a 1/2 scale per level.
    Inverse,
}

impl Direction {
    fn angle_sign(self) -> f64 {
        match self {
            Self::Forward => -1.0,
            Self::Inverse => 1.0,
        }
    }

    fn level_scale(self) -> f64 {
        match self {
            Self::Forward => 1.0,
            Self::Inverse => INVERSE_LEVEL_SCALE,
        }
    }
}

/// Forward DFT of `data`, returned as a new sequence of the same length.
pub fn forward_transform(data: &[Complex64]) -> Result<Vec<Complex64>, TransformError> {
    let mut out = data.to_vec();
    forward_transform_in_place(&mut out)?;
    Ok(out)
}

/// Inverse DFT of `data`, returned as a new sequence of the same length.
pub fn inverse_transform(data: &[Complex64]) -> Result<Vec<Complex64>, TransformError> {
    let mut out = data.to_vec();
    inverse_transform_in_place(&mut out)?;
    Ok(out)
}

/// Forward DFT, overwriting `data`.
pub fn forward_transform_in_place(data: &mut [Complex64]) -> Result<(), TransformError> {
    transform_checked(data, Direction::Forward)
}

/// Inverse DFT, overwriting `data`.
pub fn inverse_transform_in_place(data: &mut [Complex64]) -> Result<(), TransformError> {
    transform_checked(data, Direction::Inverse)
}

fn transform_checked(data: &mut [Complex64], direction: Direction) -> Result<(), TransformError> {
    let n = PowerOfTwo::new(data.len())?;
    tracing::trace!(n = n.get(), levels = n.log2(), ?direction, "fft transform");
    transform_recursive(data, direction);
    Ok(())
}

/// Recursive Cooley-Tukey step. `data.len()` must be a power of two.
fn transform_recursive(data: &mut [Complex64], direction: Direction) {
    let n = data.len();
    if n == 1 {
        return;
    }
    let half = n / 2;

    // Split into even and odd samples
    let mut even: Vec<Complex64> = data.iter().step_by(2).copied().collect();
    let mut odd: Vec<Complex64> = data.iter().skip(1).step_by(2).copied().collect();

    transform_recursive(&mut even, direction);
    transform_recursive(&mut odd, direction);

    // One cos/sin pair per level, powers accumulated by multiplication.
    let w = twiddle(direction.angle_sign() * TAU / n as f64);
    let scale = direction.level_scale();
    let mut w_j = Complex64::one();

    for (j, (e, o)) in even.iter().zip(&odd).enumerate() {
        let t = w_j * o;
        data[j] = (e + t) * scale;
        data[j + half] = (e - t) * scale;
        w_j *= w;
    }
}
