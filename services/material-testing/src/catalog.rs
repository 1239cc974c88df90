//! Material Catalog
//!
//! In-memory, caller-owned collection of validated materials. Ids are
//! assigned on insertion and are unique within one catalog.

use prosthetix_models::{Material, MaterialId, TestParameters, TestResult};
use prosthetix_utils::{validate_model, ProsthetixError, ProsthetixResult};
use serde::Serialize;
use tracing::{debug, info};

use crate::engine;

/// Lightweight listing row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialSummary {
    pub id: MaterialId,
    pub name: String,
    #[serde(rename = "type")]
    pub material_type: String,
    /// g/cm³
    pub density: f64,
    /// MPa
    pub elasticity: f64,
}

#[derive(Debug, Clone, Default)]
pub struct MaterialCatalog {
    materials: Vec<Material>,
    next_id: MaterialId,
}

impl MaterialCatalog {
    pub fn new() -> Self {
        Self {
            materials: Vec::new(),
            next_id: 1,
        }
    }

    /// Validates the material and stores it under a fresh id. Any id on the
    /// incoming record is replaced.
    pub fn add(&mut self, mut material: Material) -> ProsthetixResult<MaterialId> {
        validate_model(&material)?;

        // Default-constructed catalogs start at zero
        let id = self.next_id.max(1);
        self.next_id = id + 1;
        material.id = id;

        info!(material_id = id, material = %material.name, "Added material to catalog");
        self.materials.push(material);
        Ok(id)
    }

    pub fn get(&self, id: MaterialId) -> Option<&Material> {
        self.materials.iter().find(|material| material.id == id)
    }

    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    pub fn summaries(&self) -> Vec<MaterialSummary> {
        self.materials
            .iter()
            .map(|material| MaterialSummary {
                id: material.id,
                name: material.name.clone(),
                material_type: material.material_type.to_string(),
                density: material.density,
                elasticity: material.elasticity,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    pub fn evaluate(&self, id: MaterialId, params: &TestParameters) -> ProsthetixResult<TestResult> {
        let material = self
            .get(id)
            .ok_or_else(|| ProsthetixError::not_found(format!("material {}", id)))?;
        engine::evaluate(material, params)
    }

    /// Evaluates every material independently, in insertion order.
    pub fn evaluate_all(&self, params: &TestParameters) -> Vec<(MaterialId, ProsthetixResult<TestResult>)> {
        debug!(count = self.materials.len(), "Evaluating catalog");
        self.materials
            .iter()
            .map(|material| (material.id, engine::evaluate(material, params)))
            .collect()
    }
}
