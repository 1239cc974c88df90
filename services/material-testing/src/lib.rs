//! # Prosthetix Material Testing
//!
//! Simulation and scoring engine for candidate prosthetic materials. Given a
//! `Material` and a set of `TestParameters` it computes mechanical, skin
//! interaction and durability metrics, blends them into three category
//! scores and derives recommendations from the skin metrics.
//!
//! ## Pipeline
//!
//! - **calculators**: raw metrics from material properties and test conditions
//! - **scoring**: weighted category scores
//! - **recommendations**: threshold rules, overall verdict, skin band
//! - **interpretation**, **chart**, **report**: presentation-ready views
//! - **catalog**: caller-owned collection of validated materials
//!
//! `engine::evaluate` is the entry point. Evaluation is synchronous and
//! deterministic apart from the result timestamp.

pub mod calculators;
pub mod catalog;
pub mod chart;
pub mod engine;
pub mod interpretation;
pub mod recommendations;
pub mod report;
pub mod scoring;

#[cfg(test)]
pub(crate) mod test_support;

pub use catalog::{MaterialCatalog, MaterialSummary};
pub use engine::{evaluate, evaluate_at};
pub use recommendations::{
    overall_verdict, recommendations, skin_compatibility_band, OverallVerdict, Recommendation,
    RecommendationRule, SkinCompatibilityBand,
};
pub use report::EvaluationReport;
