//! Assessment Types
//!
//! Output structures for the evaluator: one classified result per pollutant
//! plus the overall verdict and its recommendation.

use serde::{Deserialize, Serialize};

use crate::standards::Pollutant;

/// Classification of a single reading against its standard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// At or below the standard
    Normal,
    /// Above the standard, up to 1.2x
    Borderline,
    /// More than 1.2x the standard
    High,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Normal => "normal",
            Level::Borderline => "borderline",
            Level::High => "high",
        }
    }

    /// CSS class used by the HTML views
    pub fn css_class(&self) -> &'static str {
        self.as_str()
    }

    /// Accent colour for result blocks (green / yellow / red)
    pub fn accent_color(&self) -> &'static str {
        match self {
            Level::Normal => "#86efac",
            Level::Borderline => "#fde047",
            Level::High => "#fca5a5",
        }
    }

    /// Background tint paired with `accent_color`
    pub fn background_color(&self) -> &'static str {
        match self {
            Level::Normal => "#dcfce7",
            Level::Borderline => "#fef9c3",
            Level::High => "#fee2e2",
        }
    }
}

/// Overall air-quality verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Summary {
    Good,
    Moderate,
    Poor,
}

impl Summary {
    /// Verdict from the number of pollutants at `Level::High`
    pub fn from_exceeded_count(exceeded: usize) -> Self {
        match exceeded {
            0 => Summary::Good,
            1..=2 => Summary::Moderate,
            _ => Summary::Poor,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Summary::Good => "Good",
            Summary::Moderate => "Moderate",
            Summary::Poor => "Poor",
        }
    }

    pub fn recommendation(&self) -> &'static str {
        match self {
            Summary::Good => "No action required.",
            Summary::Moderate => "Ventilate the space and reduce outdoor activity.",
            Summary::Poor => "Limit time outdoors and use air purifiers.",
        }
    }
}

/// Result for one pollutant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollutantResult {
    pub pollutant: Pollutant,
    /// Parsed reading (0.0 when missing or unparseable)
    pub actual_value: f64,
    /// Standards Table entry at evaluation time
    pub standard_value: f64,
    pub level: Level,
    pub message: String,
}

impl PollutantResult {
    /// Amount above the standard, 0.0 when within it
    pub fn exceedance(&self) -> f64 {
        (self.actual_value - self.standard_value).max(0.0)
    }

    /// One-line rendering, e.g. "CO2: Minor exceedance (entered: 55)"
    pub fn display_line(&self) -> String {
        format!("{}: {} (entered: {})", self.pollutant, self.message, self.actual_value)
    }
}

/// Complete analysis of one submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// One result per pollutant, in Standards Table order
    pub analysis: Vec<PollutantResult>,
    pub summary: Summary,
    pub recommendation: String,
}

impl AnalysisReport {
    /// Assemble a report, deriving summary and recommendation from the results
    pub fn from_results(analysis: Vec<PollutantResult>) -> Self {
        let exceeded = analysis.iter().filter(|r| r.level == Level::High).count();
        let summary = Summary::from_exceeded_count(exceeded);

        Self {
            analysis,
            summary,
            recommendation: summary.recommendation().to_string(),
        }
    }

    /// Number of pollutants at `Level::High`
    pub fn exceeded_count(&self) -> usize {
        self.analysis.iter().filter(|r| r.level == Level::High).count()
    }

    pub fn result_for(&self, pollutant: Pollutant) -> Option<&PollutantResult> {
        self.analysis.iter().find(|r| r.pollutant == pollutant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(pollutant: Pollutant, level: Level) -> PollutantResult {
        PollutantResult {
            pollutant,
            actual_value: 0.0,
            standard_value: pollutant.standard(),
            level,
            message: String::new(),
        }
    }

    #[test]
    fn test_summary_from_count() {
        assert_eq!(Summary::from_exceeded_count(0), Summary::Good);
        assert_eq!(Summary::from_exceeded_count(1), Summary::Moderate);
        assert_eq!(Summary::from_exceeded_count(2), Summary::Moderate);
        assert_eq!(Summary::from_exceeded_count(3), Summary::Poor);
        assert_eq!(Summary::from_exceeded_count(4), Summary::Poor);
    }

    #[test]
    fn test_recommendations() {
        assert_eq!(Summary::Good.recommendation(), "No action required.");
        assert_eq!(
            Summary::Moderate.recommendation(),
            "Ventilate the space and reduce outdoor activity."
        );
        assert_eq!(
            Summary::Poor.recommendation(),
            "Limit time outdoors and use air purifiers."
        );
    }

    #[test]
    fn test_borderline_does_not_count_as_exceeded() {
        let report = AnalysisReport::from_results(vec![
            result(Pollutant::Co2, Level::Borderline),
            result(Pollutant::No2, Level::Borderline),
            result(Pollutant::So2, Level::Borderline),
            result(Pollutant::Dust, Level::Borderline),
        ]);
        assert_eq!(report.exceeded_count(), 0);
        assert_eq!(report.summary, Summary::Good);
        assert_eq!(report.recommendation, "No action required.");
    }

    #[test]
    fn test_report_summary_from_high_count() {
        let report = AnalysisReport::from_results(vec![
            result(Pollutant::Co2, Level::High),
            result(Pollutant::No2, Level::High),
            result(Pollutant::So2, Level::Normal),
            result(Pollutant::Dust, Level::Borderline),
        ]);
        assert_eq!(report.exceeded_count(), 2);
        assert_eq!(report.summary, Summary::Moderate);
        assert!(report.result_for(Pollutant::So2).is_some());
    }

    #[test]
    fn test_display_line() {
        let r = PollutantResult {
            pollutant: Pollutant::Co2,
            actual_value: 55.0,
            standard_value: 50.0,
            level: Level::Borderline,
            message: "Minor exceedance".to_string(),
        };
        assert_eq!(r.display_line(), "CO2: Minor exceedance (entered: 55)");
        assert_eq!(r.exceedance(), 5.0);
    }

    #[test]
    fn test_level_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Level::Borderline).unwrap(), "\"borderline\"");
        assert_eq!(serde_json::to_string(&Summary::Moderate).unwrap(), "\"Moderate\"");
    }
}
