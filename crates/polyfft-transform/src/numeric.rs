//! Small numeric helpers shared by the transform and the multipliers.

use num_complex::Complex64;

/// Unit complex number `e^(i·angle) = cos(angle) + i·sin(angle)`.
#[inline]
#[must_use]
pub fn twiddle(angle: f64) -> Complex64 {
    Complex64::new(angle.cos(), angle.sin())
}

/// Largest element-wise distance between two complex sequences.
///
/// Returns `f64::INFINITY` when the lengths differ.
#[must_use]
pub fn max_abs_diff(a: &[Complex64], b: &[Complex64]) -> f64 {
    if a.len() != b.len() {
        return f64::INFINITY;
    }
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).norm())
        .fold(0.0, f64::max)
}

/// Largest element-wise distance between two real sequences.
///
/// Returns `f64::INFINITY` when the lengths differ.
#[must_use]
pub fn max_abs_diff_real(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() {
        return f64::INFINITY;
    }
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f64::max)
}

/// First index where `a` and `b` differ by more than `tolerance`.
#[must_use]
pub fn first_mismatch(a: &[f64], b: &[f64], tolerance: f64) -> Option<usize> {
    a.iter()
        .zip(b)
        .position(|(x, y)| (x - y).abs() > tolerance || x.is_nan() != y.is_nan())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::TAU;

    #[test]
    fn twiddle_quarter_turn() {
        let w = twiddle(TAU / 4.0);
        assert!((w.re - 0.0).abs() < 1e-15);
        assert!((w.im - 1.0).abs() < 1e-15);
    }

    #[test]
    fn twiddle_powers_close_the_circle() {
        let w = twiddle(-TAU / 8.0);
        let mut acc = Complex64::new(1.0, 0.0);
        for _ in 0..8 {
            acc *= w;
        }
        assert!((acc - Complex64::new(1.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn diff_helpers() {
        let a = [Complex64::new(1.0, 1.0), Complex64::new(0.0, 0.0)];
        let b = [Complex64::new(1.0, 1.0), Complex64::new(3.0, 4.0)];
        assert_eq!(max_abs_diff(&a, &b), 5.0);
        assert_eq!(max_abs_diff(&a, &b[..1]), f64::INFINITY);
        assert_eq!(max_abs_diff_real(&[1.0, 2.0], &[1.5, 2.0]), 0.5);
        assert_eq!(max_abs_diff_real(&[], &[]), 0.0);
    }

    #[test]
    fn first_mismatch_respects_tolerance() {
        let a = [1.0, 2.0, 3.0];
        assert_eq!(first_mismatch(&a, &[1.0, 2.0 + 1e-12, 3.0], 1e-9), None);
        assert_eq!(first_mismatch(&a, &[1.0, 2.5, 3.5], 1e-9), Some(1));
        assert_eq!(first_mismatch(&a, &[1.0, 2.0, f64::NAN], 1e-9), Some(2));
    }
}
