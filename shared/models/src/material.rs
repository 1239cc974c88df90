//! Material domain models for the Prosthetix testing system.
//!
//! This module defines the candidate prosthetic material record together with
//! its classification enums and the range rules a material must satisfy
//! before it is handed to the evaluation engine.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Session-unique identity of a material.
pub type MaterialId = u64;

/// Represents a candidate prosthetic material with its mechanical,
/// thermal, and biochemical properties.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_material_properties"))]
pub struct Material {
    #[serde(default)]
    pub id: MaterialId,
    #[validate(length(min = 1, max = 255, message = "Material name is required"))]
    pub name: String,
    #[serde(rename = "type")]
    pub material_type: MaterialType,
    /// g/cm³
    #[validate(range(min = 0.0, message = "Density must be positive"))]
    pub density: f64,
    /// MPa
    #[validate(range(min = 0.0, message = "Elasticity must not be negative"))]
    pub elasticity: f64,
    /// MPa
    #[validate(range(min = 0.0, message = "Tensile strength must not be negative"))]
    pub tensile_strength: f64,
    /// Shore A
    #[validate(range(min = 0.0, max = 100.0, message = "Hardness must be between 0 and 100 Shore A"))]
    pub hardness: f64,
    /// μm
    #[validate(range(min = 0.0, message = "Surface roughness must not be negative"))]
    pub surface_roughness: f64,
    /// %
    #[validate(range(min = 0.0, max = 100.0, message = "Water absorption must be between 0 and 100%"))]
    pub water_absorption: f64,
    /// W/m·K
    #[validate(range(min = 0.0, message = "Thermal conductivity must not be negative"))]
    pub thermal_conductivity: f64,
    /// Surface pH of the material.
    #[serde(rename = "pHCompatibility")]
    #[validate(range(min = 4.0, max = 9.0, message = "Surface pH must be between 4 and 9"))]
    pub ph_compatibility: f64,
    #[validate(range(min = 0.0, max = 100.0, message = "Cytotoxicity index must be between 0 and 100"))]
    pub cytotoxicity: f64,
    pub allergenic: AllergenicPotential,
    /// g/m²/24h
    #[validate(range(min = 0.0, message = "Vapor permeability must not be negative"))]
    pub vapor_permeability: f64,
    /// cm³/m²/24h
    #[validate(range(min = 0.0, message = "Oxygen permeability must not be negative"))]
    pub oxygen_permeability: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MaterialType {
    Polymer,
    Metal,
    Composite,
    Ceramic,
    Silicone,
    Hydrogel,
    Other,
}

impl std::fmt::Display for MaterialType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Polymer => write!(f, "polymer"),
            Self::Metal => write!(f, "metal"),
            Self::Composite => write!(f, "composite"),
            Self::Ceramic => write!(f, "ceramic"),
            Self::Silicone => write!(f, "silicone"),
            Self::Hydrogel => write!(f, "hydrogel"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// Allergenic potential category reported for a material.
///
/// Categories outside the known set are kept verbatim as `Unrecognized`
/// instead of failing deserialization; the engine scores them with a
/// fallback risk. An `Unrecognized` value is only built by `parse`, so it
/// never carries one of the known labels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum AllergenicPotential {
    Negligible,
    Low,
    Moderate,
    High,
    Unrecognized(UnrecognizedAllergen),
}

/// Raw text of an allergenic category outside the known set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnrecognizedAllergen(String);

impl UnrecognizedAllergen {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AllergenicPotential {
    /// Parse from string
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "negligible" => Self::Negligible,
            "low" => Self::Low,
            "moderate" => Self::Moderate,
            "high" => Self::High,
            _ => Self::Unrecognized(UnrecognizedAllergen(value.to_string())),
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Negligible => "negligible",
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::Unrecognized(raw) => raw.as_str(),
        }
    }
}

impl From<String> for AllergenicPotential {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<AllergenicPotential> for String {
    fn from(value: AllergenicPotential) -> Self {
        match value {
            AllergenicPotential::Unrecognized(raw) => raw.0,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for AllergenicPotential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// Custom validation functions
fn validate_material_properties(material: &Material) -> Result<(), ValidationError> {
    let numeric = [
        material.density,
        material.elasticity,
        material.tensile_strength,
        material.hardness,
        material.surface_roughness,
        material.water_absorption,
        material.thermal_conductivity,
        material.ph_compatibility,
        material.cytotoxicity,
        material.vapor_permeability,
        material.oxygen_permeability,
    ];
    if numeric.iter().any(|value| !value.is_finite()) {
        return Err(ValidationError::new("non_finite_property"));
    }

    // range(min = 0.0) admits zero; density is a divisor
    if material.density <= 0.0 {
        return Err(ValidationError::new("non_positive_density"));
    }

    Ok(())
}
