use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ProsthetixError {
    #[error("Division by zero: {operand} must be greater than zero")]
    DivisionByZero { operand: String },

    #[error("Invalid input: {field} - {message}")]
    InvalidInput { field: String, message: String },

    #[error("Non-finite metric: {metric}")]
    NonFiniteMetric { metric: String },

    #[error("Validation error: {field} - {message}")]
    Validation { field: String, message: String },

    #[error("Not found: {resource}")]
    NotFound { resource: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl ProsthetixError {
    pub fn division_by_zero(operand: impl Into<String>) -> Self {
        Self::DivisionByZero {
            operand: operand.into(),
        }
    }

    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn non_finite_metric(metric: impl Into<String>) -> Self {
        Self::NonFiniteMetric {
            metric: metric.into(),
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::DivisionByZero { .. } => "DIVISION_BY_ZERO",
            Self::InvalidInput { .. } => "INVALID_INPUT",
            Self::NonFiniteMetric { .. } => "NON_FINITE_METRIC",
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Configuration { .. } => "CONFIGURATION_ERROR",
            Self::Serialization { .. } => "SERIALIZATION_ERROR",
        }
    }

    /// True for errors caused by the caller handing the engine inputs that
    /// violate its preconditions.
    pub fn is_precondition_violation(&self) -> bool {
        matches!(
            self,
            Self::DivisionByZero { .. } | Self::InvalidInput { .. } | Self::Validation { .. }
        )
    }
}

pub type ProsthetixResult<T> = Result<T, ProsthetixError>;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

impl From<ProsthetixError> for ErrorResponse {
    fn from(error: ProsthetixError) -> Self {
        let details = match &error {
            ProsthetixError::DivisionByZero { operand } => {
                Some(serde_json::json!({ "operand": operand }))
            }
            ProsthetixError::InvalidInput { field, .. } | ProsthetixError::Validation { field, .. } => {
                Some(serde_json::json!({ "field": field }))
            }
            ProsthetixError::NonFiniteMetric { metric } => Some(serde_json::json!({ "metric": metric })),
            _ => None,
        };
        Self {
            error: error.error_code().to_string(),
            code: error.error_code().to_string(),
            message: error.to_string(),
            details,
        }
    }
}

// Conversion from common error types
impl From<serde_json::Error> for ProsthetixError {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: error.to_string(),
        }
    }
}

impl From<config::ConfigError> for ProsthetixError {
    fn from(error: config::ConfigError) -> Self {
        Self::configuration(error.to_string())
    }
}
