//! Chart-ready series for the result bar charts.
//!
//! Raw metrics live on very different scales, so the performance series
//! divides each one by a fixed factor to land roughly on the 0-10 axis.
//! Values are never clamped; a bar may overshoot the axis maximum.

use prosthetix_models::TestResult;
use serde::Serialize;

pub const AXIS_MAX: f64 = 10.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    pub title: String,
    pub labels: Vec<&'static str>,
    pub values: Vec<f64>,
    pub axis_max: f64,
}

impl ChartSeries {
    fn from_points(title: String, points: &[(&'static str, f64)]) -> Self {
        Self {
            title,
            labels: points.iter().map(|(label, _)| *label).collect(),
            values: points.iter().map(|(_, value)| *value).collect(),
            axis_max: AXIS_MAX,
        }
    }

    pub fn points(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.labels.iter().copied().zip(self.values.iter().copied())
    }
}

pub fn performance_series(result: &TestResult) -> ChartSeries {
    let stress = &result.stress_test;
    let skin = &result.skin_compatibility;
    let durability = &result.durability_test;

    ChartSeries::from_points(
        format!("{} - Performance Metrics", result.material_name),
        &[
            ("Deformation", stress.max_deformation / 10.0),
            ("Recovery Rate", stress.recovery_rate / 10.0),
            ("Breaking Point", stress.breaking_point / 100.0),
            ("Friction", skin.friction_coefficient),
            ("Moisture", skin.moisture_retention),
            ("Temperature Response", skin.temperature_response / 10.0),
            ("Wear Resistance", durability.wear_resistance / 10.0),
            ("Fatigue Resistance", durability.fatigue_resistance / 100.0),
        ],
    )
}

pub fn category_series(result: &TestResult) -> ChartSeries {
    let scores = &result.overall_scores;

    ChartSeries::from_points(
        format!("{} - Category Scores", result.material_name),
        &[
            ("Mechanical Performance", scores.mech_performance),
            ("Skin Compatibility", scores.skin_compatibility),
            ("Durability", scores.durability),
        ],
    )
}
