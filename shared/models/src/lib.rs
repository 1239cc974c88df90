//! # Prosthetix Core Domain Models
//!
//! This crate contains the domain records exchanged between the data-entry
//! collaborator and the material evaluation engine. All models implement
//! serialization with serde and range validation with the validator crate.
//!
//! ## Key Models
//!
//! - **Material**: a candidate prosthetic material with mechanical, thermal and
//!   biochemical properties
//! - **TestParameters**: loading and exposure conditions for one simulated run
//! - **TestResult**: the metrics and category scores produced by one evaluation
//!
//! ## Validation
//!
//! `Material` and `TestParameters` carry the type/range checks performed by
//! the data-entry layer. The engine does not re-run them.

pub mod material;
pub mod parameters;
pub mod result;


pub use material::*;
pub use parameters::*;
pub use result::*;
