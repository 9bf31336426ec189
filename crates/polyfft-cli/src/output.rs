//! CLI output formatting.

use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

/// Format one coefficient with `precision` decimals, dropping trailing zeros.
///
/// Values that round to zero print as `0`, so FFT noise such as `-1e-15`
/// does not show up as `-0`.
#[must_use]
pub fn format_coefficient(value: f64, precision: usize) -> String {
    let s = format!("{value:.precision$}");
    let s = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    };
    if s == "-0" {
        "0".to_string()
    } else {
        s
    }
}

/// Format a coefficient sequence as `[c0, c1, ...]`.
#[must_use]
pub fn format_coefficients(coeffs: &[f64], precision: usize) -> String {
    let parts: Vec<String> = coeffs
        .iter()
        .map(|&c| format_coefficient(c, precision))
        .collect();
    format!("[{}]", parts.join(", "))
}

/// Format coefficients as a polynomial in `x`, lowest degree first.
#[must_use]
pub fn format_polynomial(coeffs: &[f64], precision: usize) -> String {
    let mut terms = Vec::new();
    for (i, &c) in coeffs.iter().enumerate() {
        let s = format_coefficient(c, precision);
        if s == "0" {
            continue;
        }
        let term = match (i, s.as_str()) {
            (0, _) => s,
            (1, "1") => "x".to_string(),
            (1, "-1") => "-x".to_string(),
            (1, _) => format!("{s}x"),
            (_, "1") => format!("x^{i}"),
            (_, "-1") => format!("-x^{i}"),
            _ => format!("{s}x^{i}"),
        };
        terms.push(term);
    }
    if terms.is_empty() {
        return "0".to_string();
    }
    terms.join(" + ").replace("+ -", "- ")
}

/// Format a duration for display.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Write text to a file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: impl AsRef<Path>, contents: &str) -> io::Result<()> {
    tracing::debug!(path = %path.as_ref().display(), bytes = contents.len(), "writing output");
    let mut file = std::fs::File::create(path)?;
    file.write_all(contents.as_bytes())?;
    Ok(())
}
