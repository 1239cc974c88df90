//! Evaluation report
//!
//! Everything a results view needs for one `TestResult`: the raw result,
//! the recommendations, the verdicts, per-metric interpretation and the
//! chart series. Serializes to JSON and renders as plain text.

use std::fmt;

use prosthetix_models::TestResult;
use serde::Serialize;

use crate::chart::{category_series, performance_series, ChartSeries};
use crate::interpretation::{analyze_skin, summarize, ResultSummary, SkinAnalysis};
use crate::recommendations::{
    overall_verdict, recommendations, skin_compatibility_band, OverallVerdict, Recommendation,
    SkinCompatibilityBand,
};

pub const METHODOLOGY_NOTE: &str = "Skin compatibility testing is based on ISO 10993 standards for \
biocompatibility evaluation of medical devices. Results are simulated approximations and do not \
replace laboratory testing.";

/// Width of a full-scale bar in the text rendering.
const BAR_WIDTH: usize = 40;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportCharts {
    pub performance: ChartSeries,
    pub categories: ChartSeries,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationReport {
    pub result: TestResult,
    pub recommendations: Vec<Recommendation>,
    pub verdict: OverallVerdict,
    pub skin_band: SkinCompatibilityBand,
    pub skin_analysis: SkinAnalysis,
    pub summary: ResultSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charts: Option<ReportCharts>,
    pub methodology: &'static str,
}

impl EvaluationReport {
    pub fn build(result: &TestResult) -> Self {
        Self {
            result: result.clone(),
            recommendations: recommendations(&result.skin_compatibility),
            verdict: overall_verdict(&result.overall_scores),
            skin_band: skin_compatibility_band(result.overall_scores.skin_compatibility),
            skin_analysis: analyze_skin(&result.skin_compatibility),
            summary: summarize(result),
            charts: Some(ReportCharts {
                performance: performance_series(result),
                categories: category_series(result),
            }),
            methodology: METHODOLOGY_NOTE,
        }
    }

    pub fn without_charts(mut self) -> Self {
        self.charts = None;
        self
    }
}

impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = &self.result;
        let stress = &result.stress_test;
        let skin = &result.skin_compatibility;
        let durability = &result.durability_test;
        let scores = &result.overall_scores;
        let analysis = &self.skin_analysis;

        writeln!(f, "Material Test Report: {}", result.material_name)?;
        writeln!(f, "Material ID: {}", result.material_id)?;
        writeln!(f, "Tested at: {}", result.timestamp.to_rfc3339())?;
        writeln!(f)?;

        writeln!(f, "Stress Test")?;
        writeln!(f, "  Max Deformation:      {:.2}", stress.max_deformation)?;
        writeln!(f, "  Recovery Rate:        {:.2}", stress.recovery_rate)?;
        writeln!(f, "  Breaking Point:       {:.2} MPa", stress.breaking_point)?;
        writeln!(f)?;

        writeln!(f, "Skin Compatibility")?;
        writeln!(
            f,
            "  pH Compatibility:     {:.2} ({})",
            skin.ph_compatibility_score,
            analysis.ph_compatibility.interpretation.label()
        )?;
        writeln!(
            f,
            "  Cytotoxicity Risk:    {:.2} ({})",
            skin.cytotoxicity_risk,
            analysis.cytotoxicity.interpretation.label()
        )?;
        writeln!(
            f,
            "  Allergenic Risk:      {:.2} ({})",
            skin.allergenic_risk,
            analysis.allergenic.interpretation.label()
        )?;
        writeln!(
            f,
            "  Breathability:        {:.2} ({})",
            skin.breathability_score,
            analysis.breathability.interpretation.label()
        )?;
        writeln!(
            f,
            "  Friction Coefficient: {:.2} ({})",
            skin.friction_coefficient,
            analysis.friction.assessment.label()
        )?;
        writeln!(
            f,
            "  Moisture Retention:   {:.2}% ({})",
            skin.moisture_retention,
            analysis.moisture.assessment.label()
        )?;
        writeln!(
            f,
            "  Temperature Response: {:.2} K ({} thermal comfort)",
            skin.temperature_response,
            analysis.temperature.assessment.label()
        )?;
        writeln!(
            f,
            "  Maceration:           {:.2} ({} risk)",
            skin.maceration,
            analysis.maceration.assessment.label()
        )?;
        writeln!(f)?;

        writeln!(f, "Durability")?;
        writeln!(f, "  Wear Resistance:      {:.2}", durability.wear_resistance)?;
        writeln!(f, "  Fatigue Resistance:   {:.2} cycles", durability.fatigue_resistance)?;
        writeln!(f)?;

        writeln!(f, "Overall Scores")?;
        writeln!(f, "  Mechanical:           {:.2}", scores.mech_performance)?;
        writeln!(f, "  Skin Compatibility:   {:.2} ({})", scores.skin_compatibility, self.skin_band)?;
        writeln!(f, "  Durability:           {:.2}", scores.durability)?;
        writeln!(f, "  Verdict:              {}", self.verdict)?;
        writeln!(f)?;

        writeln!(f, "Recommendations")?;
        for recommendation in &self.recommendations {
            writeln!(f, "  - {}", recommendation.message)?;
        }
        writeln!(f)?;

        writeln!(f, "Summary")?;
        writeln!(f, "{}", self.summary)?;

        if let Some(charts) = &self.charts {
            writeln!(f)?;
            write_chart(f, &charts.performance)?;
            writeln!(f)?;
            write_chart(f, &charts.categories)?;
        }

        writeln!(f)?;
        write!(f, "{}", self.methodology)
    }
}

fn write_chart(f: &mut fmt::Formatter<'_>, series: &ChartSeries) -> fmt::Result {
    writeln!(f, "{}", series.title)?;
    let label_width = series.labels.iter().map(|label| label.len()).max().unwrap_or(0);
    for (label, value) in series.points() {
        writeln!(
            f,
            "  {:<width$} |{} {:.2}",
            label,
            "#".repeat(bar_length(value, series.axis_max)),
            value,
            width = label_width
        )?;
    }
    Ok(())
}

/// Bars are drawn within the axis; the printed value shows any overshoot.
fn bar_length(value: f64, axis_max: f64) -> usize {
    let fraction = (value / axis_max).clamp(0.0, 1.0);
    (fraction * BAR_WIDTH as f64).round() as usize
}
