//! Evaluator
//!
//! Turns a raw submission into an `AnalysisReport`. Stateless: each call
//! recomputes everything from the input and the Standards Table.

use crate::assessment::{AnalysisReport, Level, PollutantResult};
use crate::reading::RawReading;
use crate::standards::{standard_for, Pollutant, UNIT};

/// Readings above `standard * HIGH_EXCEEDANCE_FACTOR` are classified high
pub const HIGH_EXCEEDANCE_FACTOR: f64 = 1.2;

/// Classify a reading against its standard, returning the level and message.
///
/// - `actual > standard * 1.2` => High, "Exceedance of {diff:.2} mg/m3"
/// - `actual > standard` => Borderline, "Minor exceedance"
/// - otherwise => Normal, "Within norm ({standard} mg/m3)"
pub fn classify(actual: f64, standard: f64) -> (Level, String) {
    if actual > standard * HIGH_EXCEEDANCE_FACTOR {
        (
            Level::High,
            format!("Exceedance of {:.2} {}", round_half_up(actual - standard), UNIT),
        )
    } else if actual > standard {
        (Level::Borderline, "Minor exceedance".to_string())
    } else {
        (Level::Normal, format!("Within norm ({} {})", standard, UNIT))
    }
}

/// Round to two decimals with ties away from zero, so `{:.2}` prints
/// 10.125 as "10.13" rather than the tie-to-even "10.12".
fn round_half_up(diff: f64) -> f64 {
    (diff * 100.0).round() / 100.0
}

/// Evaluate one pollutant from the submission
pub fn evaluate_pollutant(pollutant: Pollutant, raw: &RawReading) -> PollutantResult {
    let actual_value = raw.value_of(pollutant);
    let standard_value = standard_for(pollutant);
    let (level, message) = classify(actual_value, standard_value);

    PollutantResult {
        pollutant,
        actual_value,
        standard_value,
        level,
        message,
    }
}

/// Evaluate a full submission, in Standards Table order.
pub fn evaluate(raw: &RawReading) -> AnalysisReport {
    let analysis = Pollutant::ALL
        .into_iter()
        .map(|p| evaluate_pollutant(p, raw))
        .collect();

    let report = AnalysisReport::from_results(analysis);

    tracing::debug!(
        summary = report.summary.label(),
        exceeded = report.exceeded_count(),
        "Evaluated air quality submission"
    );

    report
}
