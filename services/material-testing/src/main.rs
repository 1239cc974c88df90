//! Prosthetix Material Testing runner
//!
//! Evaluates one material from a JSON request file and prints the report.
//!
//! ```text
//! prosthetix-material-testing <request.json>
//! ```
//!
//! The request is `{ "material": {...}, "parameters": {...} }`. When
//! `parameters` is omitted the configured test defaults are used.

use std::process::ExitCode;

use anyhow::{anyhow, Context, Result};
use prosthetix_material_testing::{evaluate, EvaluationReport};
use prosthetix_models::{Material, TestParameters};
use prosthetix_utils::{init_logging, validate_model, AppConfig, ErrorResponse, ProsthetixError};
use serde::Deserialize;
use tracing::{error, info};

#[derive(Debug, Deserialize)]
struct EvaluationRequest {
    material: Material,
    parameters: Option<TestParameters>,
}

fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", ProsthetixError::from(err));
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = init_logging(&config.logging) {
        eprintln!("Failed to initialize logging: {:#}", err);
        return ExitCode::FAILURE;
    }

    match run(&config) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("Evaluation failed: {:#}", err);
            report_error(&config, &err);
            ExitCode::FAILURE
        }
    }
}

fn run(config: &AppConfig) -> Result<String> {
    let path = std::env::args()
        .nth(1)
        .ok_or_else(|| anyhow!("usage: prosthetix-material-testing <request.json>"))?;

    let raw = std::fs::read_to_string(&path).with_context(|| format!("failed to read {}", path))?;
    run_request(&raw, config)
}

/// Evaluates one JSON request and renders the report in the configured format.
fn run_request(raw: &str, config: &AppConfig) -> Result<String> {
    let request: EvaluationRequest = serde_json::from_str(raw).map_err(ProsthetixError::from)?;
    let params = request
        .parameters
        .unwrap_or_else(|| config.testing.parameters());

    validate_model(&request.material)?;
    validate_model(&params)?;

    info!(
        material = %request.material.name,
        stress = params.stress,
        temperature = params.temperature,
        cycles = params.cycles,
        "Running material evaluation"
    );
    let result = evaluate(&request.material, &params)?;

    let mut report = EvaluationReport::build(&result);
    if !config.output.include_chart {
        report = report.without_charts();
    }

    if config.output.is_json() {
        Ok(serde_json::to_string_pretty(&report).map_err(ProsthetixError::from)?)
    } else {
        Ok(report.to_string())
    }
}

fn report_error(config: &AppConfig, err: &anyhow::Error) {
    if !config.output.is_json() {
        eprintln!("Error: {:#}", err);
        return;
    }

    match serde_json::to_string_pretty(&error_response(err)) {
        Ok(body) => println!("{}", body),
        Err(_) => eprintln!("Error: {:#}", err),
    }
}

fn error_response(err: &anyhow::Error) -> ErrorResponse {
    match err.downcast_ref::<ProsthetixError>() {
        Some(prosthetix_error) => ErrorResponse::from(prosthetix_error.clone()),
        None => ErrorResponse {
            error: "INTERNAL_ERROR".to_string(),
            code: "INTERNAL_ERROR".to_string(),
            message: format!("{:#}", err),
            details: None,
        },
    }
}
