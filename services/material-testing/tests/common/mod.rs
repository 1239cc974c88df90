#![allow(dead_code)]

use prosthetix_models::{AllergenicPotential, Material, MaterialType};

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {} to be close to {}",
        actual,
        expected
    );
}

pub fn material(name: &str) -> Material {
    Material {
        id: 1,
        name: name.to_string(),
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
