//! Evaluation output models.
//!
//! A `TestResult` is produced fresh for every evaluation and handed to the
//! caller, which owns it from then on. Field names serialize in the camelCase
//! shape consumed by the tabular and charting collaborators.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::MaterialId;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TestResult {
    pub material_id: MaterialId,
    pub material_name: String,
    pub timestamp: DateTime<Utc>,
    pub stress_test: StressTestResults,
    pub skin_compatibility: SkinCompatibilityResults,
    pub durability_test: DurabilityResults,
    pub overall_scores: OverallScores,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StressTestResults {
    pub max_deformation: f64,
    pub recovery_rate: f64,
    /// MPa
    pub breaking_point: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SkinCompatibilityResults {
    pub friction_coefficient: f64,
    pub moisture_retention: f64,
    pub temperature_response: f64,
    #[serde(rename = "pHCompatibilityScore")]
    pub ph_compatibility_score: f64,
    pub cytotoxicity_risk: f64,
    pub allergenic_risk: f64,
    /// Not capped at 10; grows linearly with humidity.
    pub breathability_score: f64,
    pub maceration: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DurabilityResults {
    pub wear_resistance: f64,
    pub fatigue_resistance: f64,
}

/// Category scores, nominally on a 0-10 scale. Extreme inputs can push them
/// outside that range; they are reported as computed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OverallScores {
    pub mech_performance: f64,
    pub skin_compatibility: f64,
    pub durability: f64,
}

impl OverallScores {
    /// Unweighted mean of the three category scores.
    pub fn mean(&self) -> f64 {
        (self.mech_performance + self.skin_compatibility + self.durability) / 3.0
    }
}

impl TestResult {
    /// Every numeric metric and score keyed by its serialized name, in
    /// declaration order.
    pub fn named_values(&self) -> [(&'static str, f64); 16] {
        let stress = &self.stress_test;
        let skin = &self.skin_compatibility;
        let durability = &self.durability_test;
        let scores = &self.overall_scores;
        [
            ("maxDeformation", stress.max_deformation),
            ("recoveryRate", stress.recovery_rate),
            ("breakingPoint", stress.breaking_point),
            ("frictionCoefficient", skin.friction_coefficient),
            ("moistureRetention", skin.moisture_retention),
            ("temperatureResponse", skin.temperature_response),
            ("pHCompatibilityScore", skin.ph_compatibility_score),
            ("cytotoxicityRisk", skin.cytotoxicity_risk),
            ("allergenicRisk", skin.allergenic_risk),
            ("breathabilityScore", skin.breathability_score),
            ("maceration", skin.maceration),
            ("wearResistance", durability.wear_resistance),
            ("fatigueResistance", durability.fatigue_resistance),
            ("mechPerformance", scores.mech_performance),
            ("skinCompatibility", scores.skin_compatibility),
            ("durability", scores.durability),
        ]
    }

    /// Name of the first metric or score that is NaN or infinite, if any.
    pub fn first_non_finite(&self) -> Option<&'static str> {
        self.named_values()
            .into_iter()
            .find(|(_, value)| !value.is_finite())
            .map(|(name, _)| name)
    }
}
