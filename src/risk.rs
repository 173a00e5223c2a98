//! Composite medical-history risk score.

use std::collections::HashMap;

use lazy_static::lazy_static;

/// Separator between disease labels in a medical-history answer.
pub const HISTORY_SEPARATOR: &str = " & ";

/// Highest cumulative severity the models were calibrated against.
pub const RISK_NORMALIZER: f64 = 14.0;

lazy_static! {
    /// Severity per lower-cased disease label.
    static ref SEVERITY: HashMap<&'static str, u32> = HashMap::from([
        ("diabetes", 6),
        ("heart disease", 8),
        ("high blood pressure", 6),
        ("thyroid", 5),
        ("no disease", 0),
        ("none", 0),
    ]);
}

/// Severity of a single lower-cased disease label. Unknown labels score 0.
pub fn severity(disease: &str) -> u32 {
    SEVERITY.get(disease).copied().unwrap_or(0)
}

/// Sums the severity of every label in `medical_history` and divides by
/// [`RISK_NORMALIZER`]. Matching is case-insensitive; the result is not clamped.
pub fn normalized_risk(medical_history: &str) -> f64 {
    let history = medical_history.to_lowercase();
    let total: u32 = history.split(HISTORY_SEPARATOR).map(severity).sum();

    total as f64 / RISK_NORMALIZER
}
