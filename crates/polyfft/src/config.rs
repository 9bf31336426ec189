//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use polyfft_core::PolyError;

/// PolyFFT: multiply two polynomials with a recursive FFT and compare the
/// result against direct convolution.
#[derive(Parser, Debug)]
#[command(name = "polyfft", version, about)]
pub struct AppConfig {
    /// Coefficients of the first polynomial, lowest degree first (comma-separated).
    #[arg(short, long, default_value = "3,2,1,5", env = "POLYFFT_A", allow_hyphen_values = true)]
    pub a: String,

    /// Coefficients of the second polynomial, lowest degree first (comma-separated).
    #[arg(short, long, default_value = "0,0,5,2", env = "POLYFFT_B", allow_hyphen_values = true)]
    pub b: String,

    /// Multiplier to use: fft, naive, direct, or all.
    #[arg(long, default_value = "all")]
    pub algo: String,

    /// Show only the len(a)+len(b)-1 product coefficients.
    #[arg(short, long)]
    pub trim: bool,

    /// Digits after the decimal point when printing coefficients.
    #[arg(short, long, default_value = "4")]
    pub precision: usize,

    /// Relative tolerance for cross-checking multipliers.
    #[arg(long, default_value = "1e-9", allow_negative_numbers = true)]
    pub tolerance: f64,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode (only output the coefficients).
    #[arg(short, long)]
    pub quiet: bool,

    /// Write a JSON report to this path.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format on stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

/// Output format for results on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    Text,
    /// The JSON report.
    Json,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Coefficients of the first polynomial.
    pub fn coefficients_a(&self) -> Result<Vec<f64>, PolyError> {
        parse_coefficients(&self.a)
    }

    /// Coefficients of the second polynomial.
    pub fn coefficients_b(&self) -> Result<Vec<f64>, PolyError> {
        parse_coefficients(&self.b)
    }

    /// Check option values that clap cannot check on its own.
    pub fn validate(&self) -> Result<(), PolyError> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(PolyError::Config(format!(
                "tolerance must be a non-negative number, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}

/// Parse a comma-separated coefficient list like `"3, 2, 1, 5"`.
///
/// A blank string is the empty polynomial.
pub fn parse_coefficients(s: &str) -> Result<Vec<f64>, PolyError> {
    if s.trim().is_empty() {
        return Ok(Vec::new());
    }
    s.split(',')
        .enumerate()
        .map(|(i, part)| {
            let part = part.trim();
            match part.parse::<f64>() {
                Ok(v) if v.is_finite() => Ok(v),
                _ => Err(PolyError::InvalidInput(format!(
                    "invalid coefficient '{part}' at position {i}"
                ))),
            }
        })
        .collect()
}
