//! Orchestration interfaces.

use std::time::Duration;

use polyfft_core::PolyError;

/// Trait for presenting results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present one multiplier's coefficients.
    fn present_result(&self, algorithm: &str, coefficients: &[f64], duration: Duration);

    /// Present a side-by-side summary of several runs.
    fn present_comparison(&self, results: &[MultiplicationResult]);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Result of a single multiplication.
#[derive(Debug, Clone)]
pub struct MultiplicationResult {
    /// Multiplier name.
    pub algorithm: String,
    /// The product coefficients or a structured error.
    pub outcome: Result<Vec<f64>, PolyError>,
    /// Computation duration.
    pub duration: Duration,
}

impl MultiplicationResult {
    /// Coefficients if the run succeeded.
    #[must_use]
    pub fn coefficients(&self) -> Option<&[f64]> {
        self.outcome.as_deref().ok()
    }
}
