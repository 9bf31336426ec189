//! The `PolyMultiplier` trait and its three implementations.
//!
//! `FftMultiplier` is the O(n log n) path, `NaiveMultiplier` the quadratic
//! reference with its fixed `2 * max_len - 1` sizing, and `DirectMultiplier`
//! the general direct convolution.

use crate::error::PolyError;
use crate::poly::{convolve, multiply, multiply_naive};

/// Common interface for polynomial multipliers, consumed by orchestration.
pub trait PolyMultiplier: Send + Sync {
    /// Multiply the polynomials with coefficients `a` and `b`.
    fn multiply(&self, a: &[f64], b: &[f64]) -> Result<Vec<f64>, PolyError>;

    /// Get the name of this multiplier.
    fn name(&self) -> &str;
}

/// Frequency-domain multiplication via the recursive FFT.
#[derive(Debug, Default, Clone, Copy)]
pub struct FftMultiplier;

impl FftMultiplier {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl PolyMultiplier for FftMultiplier {
    fn multiply(&self, a: &[f64], b: &[f64]) -> Result<Vec<f64>, PolyError> {
        multiply(a, b)
    }

    fn name(&self) -> &str {
        "FFT"
    }
}

/// Quadratic double-loop reference.
#[derive(Debug, Default, Clone, Copy)]
pub struct NaiveMultiplier;

impl NaiveMultiplier {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl PolyMultiplier for NaiveMultiplier {
    fn multiply(&self, a: &[f64], b: &[f64]) -> Result<Vec<f64>, PolyError> {
        Ok(multiply_naive(a, b))
    }

    fn name(&self) -> &str {
        "Naive"
    }
}

/// General direct convolution of length `len(a) + len(b) - 1`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DirectMultiplier;

impl DirectMultiplier {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl PolyMultiplier for DirectMultiplier {
    fn multiply(&self, a: &[f64], b: &[f64]) -> Result<Vec<f64>, PolyError> {
        Ok(convolve(a, b))
    }

    fn name(&self) -> &str {
        "Direct"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: [f64; 3] = [1.0, 2.0, 3.0];
    const B: [f64; 3] = [4.0, 5.0, 6.0];
    const PRODUCT: [f64; 5] = [4.0, 13.0, 28.0, 27.0, 18.0];

    #[test]
    fn names() {
        assert_eq!(FftMultiplier::new().name(), "FFT");
        assert_eq!(NaiveMultiplier::new().name(), "Naive");
        assert_eq!(DirectMultiplier::new().name(), "Direct");
    }

    #[test]
    fn all_multipliers_agree_on_prefix() {
        let multipliers: Vec<Box<dyn PolyMultiplier>> = vec![
            Box::new(FftMultiplier::new()),
            Box::new(NaiveMultiplier::new()),
            Box::new(DirectMultiplier::new()),
        ];
        for m in &multipliers {
            let got = m.multiply(&A, &B).unwrap();
            assert!(got.len() >= PRODUCT.len(), "{} too short", m.name());
            for (i, (g, e)) in got.iter().zip(PRODUCT.iter()).enumerate() {
                assert!((g - e).abs() < 1e-9, "{} differs at {i}: {g} != {e}", m.name());
            }
        }
    }

    #[test]
    fn output_lengths() {
        assert_eq!(FftMultiplier::new().multiply(&A, &B).unwrap().len(), 8);
        assert_eq!(NaiveMultiplier::new().multiply(&A, &B).unwrap().len(), 5);
        assert_eq!(DirectMultiplier::new().multiply(&A, &[1.0]).unwrap().len(), 3);
    }
}
