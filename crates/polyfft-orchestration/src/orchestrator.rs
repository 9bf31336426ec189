//! Core orchestration: running multipliers and cross-checking their results.

use std::sync::Arc;
use std::time::Instant;

use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use tracing::{info, warn};

use polyfft_core::{PolyError, PolyMultiplier};
use polyfft_transform::numeric::first_mismatch;

use crate::interfaces::MultiplicationResult;

/// Multiply `a` by `b` with every given multiplier.
///
/// A single multiplier runs on the calling thread; several run on the rayon
/// pool, each producing its own result.
pub fn execute_multiplications(
    multipliers: &[Arc<dyn PolyMultiplier>],
    a: &[f64],
    b: &[f64],
) -> Vec<MultiplicationResult> {
    if let [single] = multipliers {
        return vec![run_one(single.as_ref(), a, b)];
    }

    multipliers
        .par_iter()
        .map(|m| run_one(m.as_ref(), a, b))
        .collect()
}

fn run_one(multiplier: &dyn PolyMultiplier, a: &[f64], b: &[f64]) -> MultiplicationResult {
    let start = Instant::now();
    let outcome = multiplier.multiply(a, b);
    let duration = start.elapsed();

    match &outcome {
        Ok(coeffs) => info!(
            algorithm = multiplier.name(),
            len = coeffs.len(),
            ?duration,
            "multiplication finished"
        ),
        Err(e) => warn!(algorithm = multiplier.name(), error = %e, "multiplication failed"),
    }

    MultiplicationResult {
        algorithm: multiplier.name().to_string(),
        outcome,
        duration,
    }
}

/// Check that all successful results agree on the product coefficients.
///
/// Each result is compared with the first successful one over the first
/// `product_len` entries (fewer if either result is shorter), so padded
/// tails of different sizes are ignored. `tolerance` is relative to the
/// largest reference coefficient, floored at 1.
pub fn analyze_comparison_results(
    results: &[MultiplicationResult],
    product_len: usize,
    tolerance: f64,
) -> Result<(), PolyError> {
    let mut valid = results.iter().filter_map(MultiplicationResult::coefficients);

    let Some(reference) = valid.next() else {
        return Err(PolyError::Calculation("no valid results".into()));
    };

    let reference = &reference[..product_len.min(reference.len())];
    let scale = reference.iter().fold(1.0f64, |m, x| m.max(x.abs()));
    let tol = tolerance * scale;

    for other in valid {
        let k = reference.len().min(other.len());
        if let Some(index) = first_mismatch(&reference[..k], &other[..k], tol) {
            warn!(index, tolerance = tol, "multiplier results disagree");
            return Err(PolyError::Mismatch {
                index,
                left: reference[index],
                right: other[index],
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use polyfft_core::multiplier::{DirectMultiplier, FftMultiplier, NaiveMultiplier};

    fn ok(algorithm: &str, coeffs: &[f64]) -> MultiplicationResult {
        MultiplicationResult {
            algorithm: algorithm.into(),
            outcome: Ok(coeffs.to_vec()),
            duration: Duration::from_millis(1),
        }
    }

    fn failed(algorithm: &str) -> MultiplicationResult {
        MultiplicationResult {
            algorithm: algorithm.into(),
            outcome: Err(PolyError::Calculation("failed".into())),
            duration: Duration::from_millis(1),
        }
    }

    #[test]
    fn execute_single_multiplier() {
        let m: Arc<dyn PolyMultiplier> = Arc::new(NaiveMultiplier::new());
        let results = execute_multiplications(&[m], &[3.0, 2.0, 1.0, 5.0], &[0.0, 0.0, 5.0, 2.0]);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].algorithm, "Naive");
        assert_eq!(
            results[0].coefficients().unwrap(),
            &[0.0, 0.0, 15.0, 16.0, 9.0, 27.0, 10.0]
        );
    }

    #[test]
    fn execute_multiple_multipliers_parallel() {
        let ms: Vec<Arc<dyn PolyMultiplier>> = vec![
            Arc::new(FftMultiplier::new()),
            Arc::new(NaiveMultiplier::new()),
            Arc::new(DirectMultiplier::new()),
        ];
        let a = [3.0, 2.0, 1.0, 5.0];
        let b = [0.0, 0.0, 5.0, 2.0];
        let results = execute_multiplications(&ms, &a, &b);
        assert_eq!(results.len(), 3);
        // Order follows the input slice.
        assert_eq!(results[0].algorithm, "FFT");
        assert_eq!(results[1].algorithm, "Naive");
        assert_eq!(results[2].algorithm, "Direct");
        for r in &results {
            assert!(r.outcome.is_ok(), "{} failed", r.algorithm);
        }
        assert!(analyze_comparison_results(&results, 7, 1e-9).is_ok());
    }

    #[test]
    fn execute_reports_errors() {
        let m: Arc<dyn PolyMultiplier> = Arc::new(FftMultiplier::new());
        let results = execute_multiplications(&[m], &[f64::NAN], &[1.0]);
        assert!(matches!(
            results[0].outcome,
            Err(PolyError::InvalidInput(_))
        ));
    }

    #[test]
    fn analyze_matching_results() {
        let results = vec![
            ok("A", &[1.0, 3.0, 3.0, 1.0, 0.0, 0.0, 0.0, 0.0]),
            ok("B", &[1.0, 3.0, 3.0, 1.0, 0.0]),
        ];
        assert!(analyze_comparison_results(&results, 4, 1e-9).is_ok());
    }

    #[test]
    fn analyze_within_tolerance() {
        let results = vec![
            ok("A", &[1.0, 3.0, 3.0, 1.0]),
            ok("B", &[1.0 + 1e-12, 3.0, 3.0 - 1e-12, 1.0]),
        ];
        assert!(analyze_comparison_results(&results, 4, 1e-9).is_ok());
    }

    #[test]
    fn analyze_tolerance_scales_with_magnitude() {
        let results = vec![
            ok("A", &[1.0e6, 2.0e6]),
            ok("B", &[1.0e6 + 1e-4, 2.0e6]),
        ];
        assert!(analyze_comparison_results(&results, 2, 1e-9).is_ok());
    }

    #[test]
    fn analyze_mismatching_results() {
        let results = vec![ok("A", &[1.0, 3.0, 3.0]), ok("B", &[1.0, 3.0, 4.0])];
        assert_eq!(
            analyze_comparison_results(&results, 3, 1e-9),
            Err(PolyError::Mismatch {
                index: 2,
                left: 3.0,
                right: 4.0,
            })
        );
    }

    #[test]
    fn analyze_ignores_tail_past_product() {
        // Past product_len the entries are padding and not compared.
        let results = vec![ok("A", &[1.0, 2.0, 0.5]), ok("B", &[1.0, 2.0, 0.0])];
        assert!(analyze_comparison_results(&results, 2, 1e-9).is_ok());
    }

    #[test]
    fn analyze_ignores_error_entries() {
        let results = vec![ok("A", &[5.0]), failed("B"), ok("C", &[5.0])];
        assert!(analyze_comparison_results(&results, 1, 1e-9).is_ok());
    }

    #[test]
    fn analyze_no_valid_results() {
        let results = vec![failed("A")];
        assert!(matches!(
            analyze_comparison_results(&results, 1, 1e-9),
            Err(PolyError::Calculation(_))
        ));
        assert!(analyze_comparison_results(&[], 1, 1e-9).is_err());
    }

    #[test]
    fn analyze_third_result_mismatches() {
        let results = vec![ok("A", &[2.0, 1.0]), ok("B", &[2.0, 1.0]), ok("C", &[2.5, 1.0])];
        assert!(matches!(
            analyze_comparison_results(&results, 2, 1e-9),
            Err(PolyError::Mismatch { index: 0, .. })
        ));
    }
}
