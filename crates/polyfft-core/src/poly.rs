//! Polynomial multiplication over real coefficient sequences.
//!
//! Index `i` of a coefficient slice holds the coefficient of `x^i`.

use num_complex::Complex64;
use tracing::debug;

use polyfft_transform::{forward_transform_in_place, inverse_transform_in_place, PowerOfTwo};

use crate::error::PolyError;

/// Multiply two polynomials through the frequency domain.
///
/// Both inputs are zero-padded to the smallest power of two `n >= a.len() + b.len()`,
/// transformed, multiplied point-wise, and transformed back. The result has
/// length `n`; entries past `a.len() + b.len() - 2` are approximately zero and
/// are left in place (see [`trim_to_product`]).
pub fn multiply(a: &[f64], b: &[f64]) -> Result<Vec<f64>, PolyError> {
    ensure_finite(a, "a")?;
    ensure_finite(b, "b")?;

    let n = PowerOfTwo::for_product(a.len(), b.len())?;
    debug!(len_a = a.len(), len_b = b.len(), padded = n.get(), "fft multiply");

    let mut fa = promote(a, n);
    let mut fb = promote(b, n);

    forward_transform_in_place(&mut fa)?;
    forward_transform_in_place(&mut fb)?;

    // Element-wise product in the frequency domain
    let mut product = pointwise_multiply(&fa, &fb);

    inverse_transform_in_place(&mut product)?;

    Ok(product.iter().map(|c| c.re).collect())
}

/// Quadratic reference product.
///
/// The result length is `2 * max(a.len(), b.len()) - 1`, sized from the
/// longer input only. For equal lengths that is exactly the product length;
/// for unequal lengths the tail is zero-padded. Missing coefficients of the
/// shorter input count as zero. Two empty inputs give an empty result.
#[must_use]
pub fn multiply_naive(a: &[f64], b: &[f64]) -> Vec<f64> {
    let n = a.len().max(b.len());
    if n == 0 {
        return Vec::new();
    }

    let mut ans = vec![0.0; (n - 1) + n];
    for (i, &ai) in a.iter().enumerate() {
        for (j, &bj) in b.iter().enumerate() {
            ans[i + j] += ai * bj;
        }
    }
    ans
}

/// Full discrete convolution, length `a.len() + b.len() - 1`.
///
/// Empty when either input is empty.
#[must_use]
pub fn convolve(a: &[f64], b: &[f64]) -> Vec<f64> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let mut ans = vec![0.0; a.len() + b.len() - 1];
    for (i, &ai) in a.iter().enumerate() {
        for (j, &bj) in b.iter().enumerate() {
            ans[i + j] += ai * bj;
        }
    }
    ans
}

/// The meaningful prefix of a product of polynomials with `len_a` and
/// `len_b` coefficients.
#[must_use]
pub fn trim_to_product(coeffs: &[f64], len_a: usize, len_b: usize) -> &[f64] {
    if len_a == 0 || len_b == 0 {
        return &[];
    }
    let len = (len_a + len_b - 1).min(coeffs.len());
    &coeffs[..len]
}

/// Promote real coefficients to complex samples, zero-padded to `n`.
#[must_use]
pub fn promote(coeffs: &[f64], n: PowerOfTwo) -> Vec<Complex64> {
    let mut out = Vec::with_capacity(n.get());
    out.extend(coeffs.iter().map(|&c| Complex64::new(c, 0.0)));
    out.resize(n.get(), Complex64::new(0.0, 0.0));
    out
}

/// Point-wise product of two equal-length spectra.
#[must_use]
pub fn pointwise_multiply(a: &[Complex64], b: &[Complex64]) -> Vec<Complex64> {
    assert_eq!(a.len(), b.len());
    a.iter().zip(b).map(|(x, y)| x * y).collect()
}

fn ensure_finite(coeffs: &[f64], name: &str) -> Result<(), PolyError> {
    match coeffs.iter().position(|c| !c.is_finite()) {
        Some(i) => Err(PolyError::InvalidInput(format!(
            "{name}[{i}] is not finite: {}",
            coeffs[i]
        ))),
        None => Ok(()),
    }
}
