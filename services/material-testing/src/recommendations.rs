//! Recommendation Engine
//!
//! Threshold rules over the skin compatibility metrics, evaluated in a fixed
//! priority order. Fired rules are appended in table order and never
//! re-sorted by severity. When no rule fires a single fallback
//! recommendation is returned.
//!
//! The overall verdict and the skin compatibility band are derived from the
//! category scores on demand; neither is stored on the `TestResult`.

use prosthetix_models::{OverallScores, SkinCompatibilityResults};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationRule {
    PhBuffering,
    FrictionReduction,
    MoistureManagement,
    BiocompatibleCoating,
    HypoallergenicBarrier,
    Breathability,
    WearTimeLimit,
    NoModificationNeeded,
}

impl RecommendationRule {
    pub fn message(&self) -> &'static str {
        match self {
            Self::PhBuffering => {
                "Consider pH buffering coatings to improve skin compatibility."
            }
            Self::FrictionReduction => {
                "High friction detected. Consider surface treatments or lubricants to reduce friction against skin."
            }
            Self::MoistureManagement => {
                "High moisture retention may lead to skin maceration. Consider more breathable material options or adding ventilation."
            }
            Self::BiocompatibleCoating => {
                "Elevated cytotoxicity risk. Consider biocompatible coatings or alternative materials with lower cytotoxicity."
            }
            Self::HypoallergenicBarrier => {
                "Significant allergenic potential. Consider hypoallergenic materials or barrier layers between material and skin."
            }
            Self::Breathability => {
                "Poor breathability. Consider perforations, mesh structures, or more vapor-permeable materials to improve air and moisture exchange."
            }
            Self::WearTimeLimit => {
                "High risk of skin maceration with prolonged use. Recommend limited continuous wear time or improved moisture management."
            }
            Self::NoModificationNeeded => {
                "Material shows excellent skin compatibility characteristics. No specific modifications needed."
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub rule: RecommendationRule,
    pub message: String,
}

impl From<RecommendationRule> for Recommendation {
    fn from(rule: RecommendationRule) -> Self {
        Self {
            rule,
            message: rule.message().to_string(),
        }
    }
}

type RuleCheck = fn(&SkinCompatibilityResults) -> bool;

fn needs_ph_buffering(skin: &SkinCompatibilityResults) -> bool {
    skin.ph_compatibility_score < 6.0
}

fn has_high_friction(skin: &SkinCompatibilityResults) -> bool {
    skin.friction_coefficient > 0.5
}

fn retains_moisture(skin: &SkinCompatibilityResults) -> bool {
    skin.moisture_retention > 5.0
}

fn is_cytotoxic(skin: &SkinCompatibilityResults) -> bool {
    skin.cytotoxicity_risk > 3.0
}

fn is_allergenic(skin: &SkinCompatibilityResults) -> bool {
    skin.allergenic_risk > 5.0
}

fn breathes_poorly(skin: &SkinCompatibilityResults) -> bool {
    skin.breathability_score < 5.0
}

fn risks_maceration(skin: &SkinCompatibilityResults) -> bool {
    skin.maceration > 6.0
}

/// Threshold rules in priority order.
const RULES: [(RecommendationRule, RuleCheck); 7] = [
    (RecommendationRule::PhBuffering, needs_ph_buffering),
    (RecommendationRule::FrictionReduction, has_high_friction),
    (RecommendationRule::MoistureManagement, retains_moisture),
    (RecommendationRule::BiocompatibleCoating, is_cytotoxic),
    (RecommendationRule::HypoallergenicBarrier, is_allergenic),
    (RecommendationRule::Breathability, breathes_poorly),
    (RecommendationRule::WearTimeLimit, risks_maceration),
];

/// Evaluates the threshold rules. The result is never empty.
pub fn recommendations(skin: &SkinCompatibilityResults) -> Vec<Recommendation> {
    let mut fired: Vec<Recommendation> = RULES
        .iter()
        .filter(|(_, check)| check(skin))
        .map(|(rule, _)| Recommendation::from(*rule))
        .collect();

    if fired.is_empty() {
        fired.push(Recommendation::from(RecommendationRule::NoModificationNeeded));
    }

    debug!(
        rules = ?fired.iter().map(|r| r.rule).collect::<Vec<_>>(),
        "Evaluated recommendation rules"
    );
    fired
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverallVerdict {
    /// Category mean above 7
    HighlyRecommended,
    /// Category mean in (5, 7]
    SuitableWithLimitations,
    /// Category mean at or below 5
    NotRecommendedWithoutModification,
}

impl OverallVerdict {
    pub fn from_mean(mean: f64) -> Self {
        if mean > 7.0 {
            Self::HighlyRecommended
        } else if mean > 5.0 {
            Self::SuitableWithLimitations
        } else {
            Self::NotRecommendedWithoutModification
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::HighlyRecommended => "Highly recommended",
            Self::SuitableWithLimitations => "Suitable with limitations",
            Self::NotRecommendedWithoutModification => "Not recommended without modification",
        }
    }
}

impl std::fmt::Display for OverallVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

pub fn overall_verdict(scores: &OverallScores) -> OverallVerdict {
    OverallVerdict::from_mean(scores.mean())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkinCompatibilityBand {
    Excellent,
    Acceptable,
    IrritationRisk,
}

impl SkinCompatibilityBand {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent biocompatibility",
            Self::Acceptable => "Acceptable, consider coatings",
            Self::IrritationRisk => "Risk of irritation, consider alternatives",
        }
    }
}

impl std::fmt::Display for SkinCompatibilityBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

pub fn skin_compatibility_band(score: f64) -> SkinCompatibilityBand {
    if score > 7.0 {
        SkinCompatibilityBand::Excellent
    } else if score > 5.0 {
        SkinCompatibilityBand::Acceptable
    } else {
        SkinCompatibilityBand::IrritationRisk
    }
}
