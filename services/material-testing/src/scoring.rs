//! Score Aggregator
//!
//! Blends raw metrics into the three category scores. Unbounded metrics
//! (friction, moisture retention, temperature deviation) are clamped into
//! [0, 10] before weighting. The pH, cytotoxicity, allergenic and
//! breathability terms are weighted as computed, so an out-of-range
//! breathability score carries straight into the skin compatibility score.
//! No category score is clamped.

use prosthetix_models::{DurabilityResults, OverallScores, SkinCompatibilityResults, StressTestResults};

/// Skin temperature response treated as neutral.
pub const COMFORT_TEMPERATURE_RESPONSE: f64 = 30.0;

pub fn mech_performance(stress: &StressTestResults) -> f64 {
    (stress.recovery_rate / 10.0
        + (stress.breaking_point / 100.0) * 0.6
        + (10.0 - stress.max_deformation / 5.0) * 0.4)
        / 2.0
}

pub fn skin_compatibility(skin: &SkinCompatibilityResults) -> f64 {
    let friction = 10.0 - (skin.friction_coefficient * 10.0).min(10.0);
    let moisture = 10.0 - (skin.moisture_retention / 2.0).min(10.0);
    let temperature = 10.0 - temperature_deviation(skin.temperature_response).min(10.0);

    // Unclamped terms
    let ph = skin.ph_compatibility_score;
    let cytotoxicity = 10.0 - skin.cytotoxicity_risk;
    let allergenic = 10.0 - skin.allergenic_risk;
    let breathability = skin.breathability_score;

    friction * 0.15
        + moisture * 0.10
        + temperature * 0.15
        + ph * 0.20
        + cytotoxicity * 0.15
        + allergenic * 0.15
        + breathability * 0.10
}

pub fn durability(durability: &DurabilityResults) -> f64 {
    (durability.wear_resistance / 10.0 + durability.fatigue_resistance / 100.0) / 2.0
}

/// Distance from the comfort point on the 0-10 scale, unclamped.
pub fn temperature_deviation(temperature_response: f64) -> f64 {
    (temperature_response - COMFORT_TEMPERATURE_RESPONSE).abs() / 3.0
}

pub fn overall_scores(
    stress: &StressTestResults,
    skin: &SkinCompatibilityResults,
    durability_results: &DurabilityResults,
) -> OverallScores {
    OverallScores {
        mech_performance: mech_performance(stress),
        skin_compatibility: skin_compatibility(skin),
        durability: durability(durability_results),
    }
}
