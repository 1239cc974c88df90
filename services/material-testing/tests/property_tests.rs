//! Property-based tests for the evaluation pipeline
//!
//! For every material and test condition inside the validated ranges the
//! engine must produce a finite result with a usable recommendation list.

use proptest::prelude::*;
use prosthetix_material_testing::{evaluate, recommendations, RecommendationRule};
use prosthetix_models::{AllergenicPotential, Material, MaterialType, TestParameters};

fn arb_allergenic() -> impl Strategy<Value = AllergenicPotential> {
    prop_oneof![
        Just(AllergenicPotential::Negligible),
        Just(AllergenicPotential::Low),
        Just(AllergenicPotential::Moderate),
        Just(AllergenicPotential::High),
        "[a-z]{3,12}".prop_map(|raw| AllergenicPotential::parse(&raw)),
    ]
}

prop_compose! {
    fn arb_material()(
        density in 0.01..20.0f64,
        elasticity in 0.0..5000.0f64,
        tensile_strength in 0.0..2000.0f64,
        hardness in 0.0..=100.0f64,
        surface_roughness in 0.0..10.0f64,
        water_absorption in 0.0..=100.0f64,
        thermal_conductivity in 0.0..400.0f64,
        ph_compatibility in 4.0..=9.0f64,
        cytotoxicity in 0.0..=100.0f64,
        allergenic in arb_allergenic(),
        vapor_permeability in 0.0..5000.0f64,
        oxygen_permeability in 0.0..5000.0f64,
    ) -> Material {
        Material {
            id: 1,
            name: "Generated material".to_string(),
            material_type: MaterialType::Other,
            density,
            elasticity,
            tensile_strength,
            hardness,
            surface_roughness,
            water_absorption,
            thermal_conductivity,
            ph_compatibility,
            cytotoxicity,
            allergenic,
            vapor_permeability,
            oxygen_permeability,
        }
    }
}

prop_compose! {
    fn arb_parameters()(
        stress in 1.0..=50.0f64,
        temperature in 0.0..=60.0f64,
        cycles in 100u32..=10000,
        humidity in 0.0..=100.0f64,
        wear_time in 0.5..=24.0f64,
    ) -> TestParameters {
        TestParameters::new(stress, temperature, cycles).with_exposure(humidity, wear_time)
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_in_range_inputs_produce_finite_results(
        material in arb_material(),
        params in arb_parameters(),
    ) {
        let result = evaluate(&material, &params);
        prop_assert!(result.is_ok());

        let result = result.unwrap();
        prop_assert_eq!(result.first_non_finite(), None);
    }

    #[test]
    fn prop_ph_score_stays_in_range(
        material in arb_material(),
        ph in -20.0..40.0f64,
    ) {
        let mut material = material;
        material.ph_compatibility = ph;
        let result = evaluate(&material, &TestParameters::default()).unwrap();

        let score = result.skin_compatibility.ph_compatibility_score;
        prop_assert!((0.0..=10.0).contains(&score));
    }

    #[test]
    fn prop_recommendations_never_empty_and_fallback_alone(
        material in arb_material(),
        params in arb_parameters(),
    ) {
        let result = evaluate(&material, &params).unwrap();
        let rules: Vec<_> = recommendations(&result.skin_compatibility)
            .into_iter()
            .map(|r| r.rule)
            .collect();

        prop_assert!(!rules.is_empty());
        if rules.contains(&RecommendationRule::NoModificationNeeded) {
            prop_assert_eq!(rules.len(), 1);
        }
    }

    #[test]
    fn prop_zero_stress_never_yields_a_result(
        material in arb_material(),
        params in arb_parameters(),
    ) {
        let mut params = params;
        params.stress = 0.0;
        let error = evaluate(&material, &params).unwrap_err();
        prop_assert_eq!(error.error_code(), "DIVISION_BY_ZERO");
    }
}
