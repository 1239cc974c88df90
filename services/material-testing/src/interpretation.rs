//! Qualitative reading of metrics and sub-scores.
//!
//! Sub-scores live on a 0-10 scale where higher is better. Risk scores
//! (cytotoxicity, allergenic potential) are read inverted, as `10 - score`.

use prosthetix_models::{SkinCompatibilityResults, TestResult};
use serde::Serialize;

use crate::scoring::{temperature_deviation, COMFORT_TEMPERATURE_RESPONSE};

/// Five-step reading of a 0-10 sub-score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreInterpretation {
    Excellent,
    Good,
    Moderate,
    Poor,
    VeryPoor,
}

impl ScoreInterpretation {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::Poor => "Poor",
            Self::VeryPoor => "Very Poor",
        }
    }
}

/// Three-step traffic-light level of a 0-10 sub-score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorLevel {
    Good,
    Moderate,
    Poor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Low,
    Moderate,
    High,
}

impl Level {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThermalComfort {
    Good,
    Poor,
}

impl ThermalComfort {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Poor => "Poor",
        }
    }
}

fn adjusted(score: f64, inverse: bool) -> f64 {
    if inverse {
        10.0 - score
    } else {
        score
    }
}

pub fn interpret_score(score: f64, inverse: bool) -> ScoreInterpretation {
    let score = adjusted(score, inverse);
    if score >= 8.0 {
        ScoreInterpretation::Excellent
    } else if score >= 6.0 {
        ScoreInterpretation::Good
    } else if score >= 4.0 {
        ScoreInterpretation::Moderate
    } else if score >= 2.0 {
        ScoreInterpretation::Poor
    } else {
        ScoreInterpretation::VeryPoor
    }
}

pub fn indicator_level(score: f64, inverse: bool) -> IndicatorLevel {
    let score = adjusted(score, inverse);
    if score >= 8.0 {
        IndicatorLevel::Good
    } else if score >= 5.0 {
        IndicatorLevel::Moderate
    } else {
        IndicatorLevel::Poor
    }
}

pub fn friction_level(friction_coefficient: f64) -> Level {
    if friction_coefficient < 0.4 {
        Level::Low
    } else if friction_coefficient < 0.7 {
        Level::Moderate
    } else {
        Level::High
    }
}

pub fn moisture_level(moisture_retention: f64) -> Level {
    if moisture_retention < 3.0 {
        Level::Low
    } else if moisture_retention < 7.0 {
        Level::Moderate
    } else {
        Level::High
    }
}

pub fn maceration_risk(maceration: f64) -> Level {
    if maceration < 3.0 {
        Level::Low
    } else if maceration < 6.0 {
        Level::Moderate
    } else {
        Level::High
    }
}

/// Comfortable when the response is within 10 of the neutral point.
pub fn thermal_comfort(temperature_response: f64) -> ThermalComfort {
    if (temperature_response - COMFORT_TEMPERATURE_RESPONSE).abs() < 10.0 {
        ThermalComfort::Good
    } else {
        ThermalComfort::Poor
    }
}

/// A 0-10 sub-score with its indicator level and interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradedScore {
    pub value: f64,
    pub indicator: IndicatorLevel,
    pub interpretation: ScoreInterpretation,
}

impl GradedScore {
    fn new(value: f64, inverse: bool) -> Self {
        Self {
            value,
            indicator: indicator_level(value, inverse),
            interpretation: interpret_score(value, inverse),
        }
    }
}

/// A raw metric with the indicator level of its 0-10 projection and a
/// metric-specific assessment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradedMetric<A> {
    pub value: f64,
    pub indicator: IndicatorLevel,
    pub assessment: A,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkinAnalysis {
    pub ph_compatibility: GradedScore,
    pub cytotoxicity: GradedScore,
    pub allergenic: GradedScore,
    pub breathability: GradedScore,
    pub friction: GradedMetric<Level>,
    pub moisture: GradedMetric<Level>,
    pub temperature: GradedMetric<ThermalComfort>,
    pub maceration: GradedMetric<Level>,
}

pub fn analyze_skin(skin: &SkinCompatibilityResults) -> SkinAnalysis {
    SkinAnalysis {
        ph_compatibility: GradedScore::new(skin.ph_compatibility_score, false),
        cytotoxicity: GradedScore::new(skin.cytotoxicity_risk, true),
        allergenic: GradedScore::new(skin.allergenic_risk, true),
        breathability: GradedScore::new(skin.breathability_score, false),
        friction: GradedMetric {
            value: skin.friction_coefficient,
            indicator: indicator_level(10.0 - skin.friction_coefficient * 5.0, false),
            assessment: friction_level(skin.friction_coefficient),
        },
        moisture: GradedMetric {
            value: skin.moisture_retention,
            indicator: indicator_level(10.0 - skin.moisture_retention / 2.0, false),
            assessment: moisture_level(skin.moisture_retention),
        },
        temperature: GradedMetric {
            value: skin.temperature_response,
            indicator: indicator_level(10.0 - temperature_deviation(skin.temperature_response), false),
            assessment: thermal_comfort(skin.temperature_response),
        },
        maceration: GradedMetric {
            value: skin.maceration,
            indicator: indicator_level(10.0 - skin.maceration, false),
            assessment: maceration_risk(skin.maceration),
        },
    }
}

/// Headline reading of a test result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSummary {
    /// Recovery rate above 5.
    pub excellent_recovery: bool,
    /// Friction coefficient below 0.5.
    pub good_skin_contact: bool,
    /// Fatigue resistance rounded to whole cycles.
    pub estimated_service_cycles: u64,
    pub good_candidate: bool,
}

pub fn summarize(result: &TestResult) -> ResultSummary {
    let excellent_recovery = result.stress_test.recovery_rate > 5.0;
    let good_skin_contact = result.skin_compatibility.friction_coefficient < 0.5;
    ResultSummary {
        excellent_recovery,
        good_skin_contact,
        // fatigue resistance is non-negative for validated inputs
        estimated_service_cycles: result.durability_test.fatigue_resistance.round().max(0.0) as u64,
        good_candidate: excellent_recovery && good_skin_contact,
    }
}

impl std::fmt::Display for ResultSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Based on the simulation, this material shows {} recovery rate and {} skin compatibility.",
            if self.excellent_recovery { "excellent" } else { "poor" },
            if self.good_skin_contact { "good" } else { "moderate" },
        )?;
        writeln!(
            f,
            "The durability tests indicate it would last approximately {} cycles before requiring replacement.",
            self.estimated_service_cycles
        )?;
        if self.good_candidate {
            write!(f, "This material appears to be a good candidate for prosthetic applications.")
        } else {
            write!(
                f,
                "This material may need modifications to improve its performance for prosthetic applications."
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpret_score_steps() {
        assert_eq!(interpret_score(8.0, false), ScoreInterpretation::Excellent);
        assert_eq!(interpret_score(7.99, false), ScoreInterpretation::Good);
        assert_eq!(interpret_score(6.0, false), ScoreInterpretation::Good);
        assert_eq!(interpret_score(4.0, false), ScoreInterpretation::Moderate);
        assert_eq!(interpret_score(2.0, false), ScoreInterpretation::Poor);
        assert_eq!(interpret_score(1.99, false), ScoreInterpretation::VeryPoor);
    }

    #[test]
    fn test_interpret_score_inverted_for_risks() {
        assert_eq!(interpret_score(1.0, true), ScoreInterpretation::Excellent);
        assert_eq!(interpret_score(10.0, true), ScoreInterpretation::VeryPoor);
        assert_eq!(interpret_score(5.0, true).label(), "Moderate");
    }

    #[test]
    fn test_indicator_level_steps() {
        assert_eq!(indicator_level(8.0, false), IndicatorLevel::Good);
        assert_eq!(indicator_level(5.0, false), IndicatorLevel::Moderate);
        assert_eq!(indicator_level(4.99, false), IndicatorLevel::Poor);
        assert_eq!(indicator_level(2.5, true), IndicatorLevel::Moderate);
    }

    #[test]
    fn test_metric_levels() {
        assert_eq!(friction_level(0.39), Level::Low);
        assert_eq!(friction_level(0.62), Level::Moderate);
        assert_eq!(friction_level(0.7), Level::High);

        assert_eq!(moisture_level(2.4), Level::Low);
        assert_eq!(moisture_level(3.0), Level::Moderate);
        assert_eq!(moisture_level(7.0), Level::High);

        assert_eq!(maceration_risk(2.8), Level::Low);
        assert_eq!(maceration_risk(6.0), Level::High);
    }

    #[test]
    fn test_thermal_comfort_window() {
        assert_eq!(thermal_comfort(30.0), ThermalComfort::Good);
        assert_eq!(thermal_comfort(21.0), ThermalComfort::Good);
        assert_eq!(thermal_comfort(20.0), ThermalComfort::Poor);
        assert_eq!(thermal_comfort(2.5), ThermalComfort::Poor);
    }

    #[test]
    fn test_analyze_skin_projects_metrics() {
        let skin = SkinCompatibilityResults {
            friction_coefficient: 0.62,
            moisture_retention: 2.4,
            temperature_response: 2.5,
            ph_compatibility_score: 10.0,
            cytotoxicity_risk: 1.0,
            allergenic_risk: 2.5,
            breathability_score: 4.8,
            maceration: 2.8,
        };
        let analysis = analyze_skin(&skin);

        assert_eq!(analysis.ph_compatibility.interpretation, ScoreInterpretation::Excellent);
        assert_eq!(analysis.cytotoxicity.indicator, IndicatorLevel::Good);
        assert_eq!(analysis.allergenic.interpretation, ScoreInterpretation::Good);
        assert_eq!(analysis.breathability.interpretation, ScoreInterpretation::Moderate);
        // 10 - 0.62 * 5
        assert_eq!(analysis.friction.indicator, IndicatorLevel::Moderate);
        assert_eq!(analysis.friction.assessment, Level::Moderate);
        assert_eq!(analysis.moisture.indicator, IndicatorLevel::Good);
        assert_eq!(analysis.temperature.indicator, IndicatorLevel::Poor);
        assert_eq!(analysis.temperature.assessment, ThermalComfort::Poor);
        assert_eq!(analysis.maceration.assessment, Level::Low);
    }

    #[test]
    fn test_summary_display() {
        let summary = ResultSummary {
            excellent_recovery: true,
            good_skin_contact: true,
            estimated_service_cycles: 40,
            good_candidate: true,
        };
        let text = summary.to_string();
        assert!(text.contains("excellent recovery rate and good skin compatibility"));
        assert!(text.contains("approximately 40 cycles"));
        assert!(text.ends_with("good candidate for prosthetic applications."));
    }
}
