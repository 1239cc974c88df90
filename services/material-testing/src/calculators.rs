//! Metric Calculators
//!
//! Leaf functions turning material properties and test conditions into raw
//! physical and biochemical metrics. The formulas are fixed empirical
//! approximations; their constants define the scoring behaviour and must not
//! be tuned.
//!
//! Every function here is total. Divisors (`stress`, `cycles`, `density`) are
//! checked by the engine before any calculator runs.

use prosthetix_models::{
    AllergenicPotential, DurabilityResults, Material, SkinCompatibilityResults, StressTestResults,
    TestParameters,
};

/// Human skin surface pH.
pub const SKIN_REFERENCE_PH: f64 = 5.5;

/// Risk assigned to allergenic categories outside the known set.
pub const UNRECOGNIZED_ALLERGEN_RISK: f64 = 5.0;

// ===== Mechanical =====

pub fn max_deformation(material: &Material, stress: f64) -> f64 {
    (material.elasticity * stress) / (material.density * 10.0)
}

pub fn recovery_rate(material: &Material, stress: f64) -> f64 {
    material.elasticity / (stress * 0.8)
}

pub fn breaking_point(material: &Material) -> f64 {
    material.tensile_strength * 0.9
}

// ===== Skin interaction =====

pub fn friction_coefficient(material: &Material) -> f64 {
    material.surface_roughness * 0.5 + material.hardness * 0.003
}

pub fn moisture_retention(material: &Material) -> f64 {
    material.water_absorption * 1.2
}

pub fn temperature_response(material: &Material, temperature: f64) -> f64 {
    material.thermal_conductivity * temperature * 0.5
}

/// 10 at the skin reference pH, losing 2 points per pH unit of deviation,
/// floored at 0.
pub fn ph_compatibility_score(material: &Material) -> f64 {
    (10.0 - 2.0 * (material.ph_compatibility - SKIN_REFERENCE_PH).abs()).max(0.0)
}

pub fn cytotoxicity_risk(material: &Material) -> f64 {
    material.cytotoxicity / 10.0
}

pub fn allergenic_risk(allergenic: &AllergenicPotential) -> f64 {
    match allergenic {
        AllergenicPotential::Negligible => 0.0,
        AllergenicPotential::Low => 2.5,
        AllergenicPotential::Moderate => 6.0,
        AllergenicPotential::High => 10.0,
        AllergenicPotential::Unrecognized(_) => UNRECOGNIZED_ALLERGEN_RISK,
    }
}

/// Vapor permeability term, capped at 10 (1000 g/m²/24h).
fn vapor_factor(material: &Material) -> f64 {
    (material.vapor_permeability / 100.0).min(10.0)
}

/// Humidity scales the vapor term linearly with 50% RH as the neutral point.
/// The humidity factor is unbounded, so the score exceeds 10 for highly
/// permeable materials in humid conditions.
pub fn breathability_score(material: &Material, humidity: f64) -> f64 {
    let oxygen = (material.oxygen_permeability / 100.0).min(10.0);
    0.6 * vapor_factor(material) * (humidity / 50.0) + 0.4 * oxygen
}

/// Wear time saturates at 3x the 8 hour reference day.
pub fn maceration(material: &Material, wear_time: f64) -> f64 {
    (10.0 - vapor_factor(material)) * 0.7 * (wear_time / 8.0).min(3.0)
}

// ===== Durability =====

pub fn wear_resistance(material: &Material, cycles: u32) -> f64 {
    material.hardness / (f64::from(cycles) * 0.01)
}

pub fn fatigue_resistance(material: &Material, cycles: u32) -> f64 {
    material.tensile_strength / (f64::from(cycles) * 0.005)
}

// ===== Grouped results =====

pub fn stress_test(material: &Material, params: &TestParameters) -> StressTestResults {
    StressTestResults {
        max_deformation: max_deformation(material, params.stress),
        recovery_rate: recovery_rate(material, params.stress),
        breaking_point: breaking_point(material),
    }
}

pub fn skin_compatibility(material: &Material, params: &TestParameters) -> SkinCompatibilityResults {
    SkinCompatibilityResults {
        friction_coefficient: friction_coefficient(material),
        moisture_retention: moisture_retention(material),
        temperature_response: temperature_response(material, params.temperature),
        ph_compatibility_score: ph_compatibility_score(material),
        cytotoxicity_risk: cytotoxicity_risk(material),
        allergenic_risk: allergenic_risk(&material.allergenic),
        breathability_score: breathability_score(material, params.humidity),
        maceration: maceration(material, params.wear_time),
    }
}

pub fn durability(material: &Material, params: &TestParameters) -> DurabilityResults {
    DurabilityResults {
        wear_resistance: wear_resistance(material, params.cycles),
        fatigue_resistance: fatigue_resistance(material, params.cycles),
    }
}
