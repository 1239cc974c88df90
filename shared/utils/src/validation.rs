use crate::error::{ProsthetixError, ProsthetixResult};
use validator::{Validate, ValidationErrors};

pub fn validate_model<T: Validate>(model: &T) -> ProsthetixResult<()> {
    match model.validate() {
        Ok(()) => Ok(()),
        Err(errors) => {
            let error_messages = format_validation_errors(&errors);
            Err(ProsthetixError::validation("model", error_messages))
        }
    }
}

pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages = Vec::new();

    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            let message = match (&error.message, error.code.as_ref()) {
                (Some(message), _) => format!("{}: {}", field, message),
                (None, "length") => format!("Length validation failed for field '{}'", field),
                (None, "range") => format!("Value out of range for field '{}'", field),
                (None, "required") => format!("Field '{}' is required", field),
                (None, code) => format!("Validation failed for field '{}': {}", field, code),
            };
            messages.push(message);
        }
    }
    // field_errors() is a HashMap; keep the message order stable
    messages.sort();

    messages.join(", ")
}

/// Checks a divisor before it is used. Zero is reported as a division by
/// zero; negative and non-finite values as invalid input.
pub fn ensure_positive_divisor(operand: &str, value: f64) -> ProsthetixResult<()> {
    if !value.is_finite() {
        return Err(ProsthetixError::invalid_input(operand, "value must be finite"));
    }
    if value == 0.0 {
        return Err(ProsthetixError::division_by_zero(operand));
    }
    if value < 0.0 {
        return Err(ProsthetixError::invalid_input(
            operand,
            format!("value must be greater than zero, got {}", value),
        ));
    }

    Ok(())
}

pub fn ensure_finite(field: &str, value: f64) -> ProsthetixResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ProsthetixError::invalid_input(field, "value must be finite"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prosthetix_models::TestParameters;

    #[test]
    fn test_validate_model_accepts_defaults() {
        assert!(validate_model(&TestParameters::default()).is_ok());
    }

    #[test]
    fn test_validate_model_reports_field_message() {
        let params = TestParameters::new(75.0, 25.0, 1000);
        let error = validate_model(&params).unwrap_err();
        assert_eq!(error.error_code(), "VALIDATION_ERROR");
        assert!(error.to_string().contains("Stress must be between 1 and 50 MPa"));
    }

    #[test]
    fn test_ensure_positive_divisor() {
        assert!(ensure_positive_divisor("stress", 10.0).is_ok());
        assert_eq!(
            ensure_positive_divisor("stress", 0.0),
            Err(ProsthetixError::division_by_zero("stress"))
        );
        assert_eq!(
            ensure_positive_divisor("cycles", -1.0).unwrap_err().error_code(),
            "INVALID_INPUT"
        );
        assert_eq!(
            ensure_positive_divisor("density", f64::NAN).unwrap_err().error_code(),
            "INVALID_INPUT"
        );
    }

    #[test]
    fn test_ensure_finite() {
        assert!(ensure_finite("temperature", -5.0).is_ok());
        assert!(ensure_finite("temperature", f64::INFINITY).is_err());
    }
}
