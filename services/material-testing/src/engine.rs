//! Evaluation pipeline
//!
//! Runs the metric calculators, the score aggregator and returns a fully
//! populated `TestResult`. The pipeline is pure apart from reading the clock
//! in `evaluate`; `evaluate_at` takes the timestamp from the caller.
//!
//! Inputs are not range-checked here. Only the conditions that would make the
//! arithmetic non-finite are rejected: zero, negative or non-finite divisors
//! (`stress`, `cycles`, `density`) and non-finite inputs. Either the whole
//! result is produced or an error is returned.

use chrono::{DateTime, Utc};
use prosthetix_models::{Material, TestParameters, TestResult};
use prosthetix_utils::{ensure_finite, ensure_positive_divisor, ProsthetixError, ProsthetixResult};
use tracing::{debug, info, warn};

use crate::{calculators, scoring};

pub fn evaluate(material: &Material, params: &TestParameters) -> ProsthetixResult<TestResult> {
    evaluate_at(material, params, Utc::now())
}

pub fn evaluate_at(
    material: &Material,
    params: &TestParameters,
    timestamp: DateTime<Utc>,
) -> ProsthetixResult<TestResult> {
    if let Err(error) = check_preconditions(material, params) {
        warn!(
            material_id = material.id,
            error_code = error.error_code(),
            "Rejected evaluation input: {}",
            error
        );
        return Err(error);
    }

    if !material.allergenic.is_recognized() {
        warn!(
            material_id = material.id,
            allergenic = %material.allergenic,
            risk = calculators::UNRECOGNIZED_ALLERGEN_RISK,
            "Unrecognized allergenic category, using fallback risk"
        );
    }

    let stress_test = calculators::stress_test(material, params);
    let skin_compatibility = calculators::skin_compatibility(material, params);
    let durability_test = calculators::durability(material, params);
    debug!(
        material_id = material.id,
        ?stress_test,
        ?skin_compatibility,
        ?durability_test,
        "Computed raw metrics"
    );

    let overall_scores = scoring::overall_scores(&stress_test, &skin_compatibility, &durability_test);

    let result = TestResult {
        material_id: material.id,
        material_name: material.name.clone(),
        timestamp,
        stress_test,
        skin_compatibility,
        durability_test,
        overall_scores,
    };

    if let Some(metric) = result.first_non_finite() {
        warn!(material_id = material.id, metric, "Evaluation produced a non-finite value");
        return Err(ProsthetixError::non_finite_metric(metric));
    }

    info!(
        material_id = material.id,
        material = %material.name,
        mech_performance = overall_scores.mech_performance,
        skin_compatibility = overall_scores.skin_compatibility,
        durability = overall_scores.durability,
        "Evaluated material"
    );
    Ok(result)
}

fn check_preconditions(material: &Material, params: &TestParameters) -> ProsthetixResult<()> {
    ensure_positive_divisor("stress", params.stress)?;
    ensure_positive_divisor("cycles", f64::from(params.cycles))?;
    ensure_positive_divisor("density", material.density)?;

    let inputs = [
        ("temperature", params.temperature),
        ("humidity", params.humidity),
        ("wearTime", params.wear_time),
        ("elasticity", material.elasticity),
        ("tensileStrength", material.tensile_strength),
        ("hardness", material.hardness),
        ("surfaceRoughness", material.surface_roughness),
        ("waterAbsorption", material.water_absorption),
        ("thermalConductivity", material.thermal_conductivity),
        ("pHCompatibility", material.ph_compatibility),
        ("cytotoxicity", material.cytotoxicity),
        ("vaporPermeability", material.vapor_permeability),
        ("oxygenPermeability", material.oxygen_permeability),
    ];
    for (field, value) in inputs {
        ensure_finite(field, value)?;
    }

    Ok(())
}
