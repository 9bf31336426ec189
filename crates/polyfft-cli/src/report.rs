//! JSON report of a multiplication run.

use serde::{Deserialize, Serialize};

use polyfft_orchestration::MultiplicationResult;

/// Full report: inputs plus one entry per multiplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Left operand coefficients.
    pub a: Vec<f64>,
    /// Right operand coefficients.
    pub b: Vec<f64>,
    /// Per-multiplier results, in execution order.
    pub results: Vec<ReportEntry>,
}

/// One multiplier's outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub algorithm: String,
    pub coefficients: Option<Vec<f64>>,
    pub error: Option<String>,
    pub duration_us: u64,
}

impl Report {
    /// Build a report; with `trim`, coefficients are cut to the product length.
    #[must_use]
    pub fn new(a: &[f64], b: &[f64], results: &[MultiplicationResult], trim: bool) -> Self {
        let results = results
            .iter()
            .map(|r| {
                let (coefficients, error) = match &r.outcome {
                    Ok(c) if trim => (
                        Some(polyfft_core::trim_to_product(c, a.len(), b.len()).to_vec()),
                        None,
                    ),
                    Ok(c) => (Some(c.clone()), None),
                    Err(e) => (None, Some(e.to_string())),
                };
                ReportEntry {
                    algorithm: r.algorithm.clone(),
                    coefficients,
                    error,
                    duration_us: u64::try_from(r.duration.as_micros()).unwrap_or(u64::MAX),
                }
            })
            .collect();

        Self {
            a: a.to_vec(),
            b: b.to_vec(),
            results,
        }
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use polyfft_core::PolyError;

    fn results() -> Vec<MultiplicationResult> {
        vec![
            MultiplicationResult {
                algorithm: "FFT".into(),
                outcome: Ok(vec![1.0, 3.0, 3.0, 1.0, 0.0, 0.0, 0.0, 0.0]),
                duration: Duration::from_micros(12),
            },
            MultiplicationResult {
                algorithm: "Naive".into(),
                outcome: Err(PolyError::Calculation("boom".into())),
                duration: Duration::from_micros(3),
            },
        ]
    }

    #[test]
    fn report_entries() {
        let report = Report::new(&[1.0, 1.0], &[1.0, 2.0, 1.0], &results(), false);
        assert_eq!(report.results.len(), 2);
        assert_eq!(report.results[0].coefficients.as_ref().unwrap().len(), 8);
        assert_eq!(report.results[0].duration_us, 12);
        assert_eq!(
            report.results[1].error.as_deref(),
            Some("calculation error: boom")
        );
        assert!(report.results[1].coefficients.is_none());
    }

    #[test]
    fn report_trim() {
        let report = Report::new(&[1.0, 1.0], &[1.0, 2.0, 1.0], &results(), true);
        assert_eq!(
            report.results[0].coefficients.as_deref(),
            Some(&[1.0, 3.0, 3.0, 1.0][..])
        );
    }

    #[test]
    fn report_json_roundtrip() {
        let report = Report::new(&[1.0], &[2.0], &results(), false);
        let json = report.to_json().unwrap();
        assert!(json.contains("\"algorithm\": \"FFT\""));
        let parsed: Report = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }
}
