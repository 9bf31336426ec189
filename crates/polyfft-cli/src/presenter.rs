//! CLI result presenter.

use std::time::Duration;

use polyfft_orchestration::interfaces::{MultiplicationResult, ResultPresenter};

use crate::output::{format_coefficients, format_duration, format_polynomial};

/// CLI result presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
    precision: usize,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool, precision: usize) -> Self {
        Self {
            verbose,
            quiet,
            precision,
        }
    }

    /// Text block for one result, as printed by `present_result`.
    #[must_use]
    pub fn render_result(&self, algorithm: &str, coefficients: &[f64], duration: Duration) -> String {
        let coeffs = format_coefficients(coefficients, self.precision);
        if self.quiet {
            return coeffs;
        }

        let mut out = format!(
            "{algorithm} ({}):\n  {coeffs}",
            format_duration(duration)
        );
        if self.verbose {
            out.push_str(&format!(
                "\n  length: {}\n  p(x) = {}",
                coefficients.len(),
                format_polynomial(coefficients, self.precision)
            ));
        }
        out
    }

    /// Comparison table, empty in quiet mode.
    #[must_use]
    pub fn render_comparison(&self, results: &[MultiplicationResult]) -> String {
        if self.quiet {
            return String::new();
        }

        let mut out = format!("\nComparison Results:\n{:-<60}", "");
        for result in results {
            let status = if result.outcome.is_err() {
                "ERROR"
            } else {
                "OK"
            };
            out.push_str(&format!(
                "\n  {:<20} {:>10} [{}]",
                result.algorithm,
                format_duration(result.duration),
                status,
            ));
        }
        out
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_result(&self, algorithm: &str, coefficients: &[f64], duration: Duration) {
        println!("{}", self.render_result(algorithm, coefficients, duration));
    }

    fn present_comparison(&self, results: &[MultiplicationResult]) {
        if !self.quiet {
            println!("{}", self.render_comparison(results));
        }
    }

    fn present_error(&self, error: &str) {
        eprintln!("Error: {error}");
    }
}
