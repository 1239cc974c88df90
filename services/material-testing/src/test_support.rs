use prosthetix_models::{AllergenicPotential, Material, MaterialType};

pub(crate) const TOLERANCE: f64 = 1e-9;

pub(crate) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "expected {} to be within {} of {}",
        actual,
        TOLERANCE,
        expected
    );
}

/// Silicone-like elastomer used across the unit tests. With the default test
/// parameters it fires the friction and breathability rules.
pub(crate) fn reference_material() -> Material {
    Material {
        id: 1,
        name: "Reference elastomer".to_string(),
        material_type: MaterialType::Silicone,
        density: 1.0,
        elasticity: 50.0,
        tensile_strength: 20.0,
        hardness: 40.0,
        surface_roughness: 1.0,
        water_absorption: 2.0,
        thermal_conductivity: 0.2,
        ph_compatibility: 5.5,
        cytotoxicity: 10.0,
        allergenic: AllergenicPotential::Low,
        vapor_permeability: 600.0,
        oxygen_permeability: 300.0,
    }
}
