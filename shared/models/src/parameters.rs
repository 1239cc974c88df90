//! Test condition models.
//!
//! `TestParameters` carries the loading and wear conditions for a single
//! simulated test run. The range rules mirror the reference slider bounds of
//! the data-entry layer; the engine itself only relies on the divisors being
//! positive.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_test_conditions"))]
pub struct TestParameters {
    /// Applied stress in MPa.
    #[validate(range(min = 1.0, max = 50.0, message = "Stress must be between 1 and 50 MPa"))]
    pub stress: f64,
    /// °C
    #[validate(range(min = 0.0, max = 60.0, message = "Temperature must be between 0 and 60 °C"))]
    pub temperature: f64,
    /// Number of load cycles.
    #[validate(range(min = 100, max = 10000, message = "Cycles must be between 100 and 10000"))]
    pub cycles: u32,
    /// Relative humidity in %.
    #[validate(range(min = 0.0, max = 100.0, message = "Humidity must be between 0 and 100%"))]
    pub humidity: f64,
    /// Hours of wear per day.
    #[validate(range(min = 0.0, max = 24.0, message = "Wear time must be between 0 and 24 hours"))]
    pub wear_time: f64,
}

impl Default for TestParameters {
    fn default() -> Self {
        Self {
            stress: 10.0,
            temperature: 25.0,
            cycles: 1000,
            humidity: 50.0,
            wear_time: 8.0,
        }
    }
}

impl TestParameters {
    pub fn new(stress: f64, temperature: f64, cycles: u32) -> Self {
        Self {
            stress,
            temperature,
            cycles,
            ..Self::default()
        }
    }

    /// Sets humidity and daily wear time, keeping the loading conditions.
    pub fn with_exposure(mut self, humidity: f64, wear_time: f64) -> Self {
        self.humidity = humidity;
        self.wear_time = wear_time;
        self
    }
}

fn validate_test_conditions(params: &TestParameters) -> Result<(), ValidationError> {
    let numeric = [
        params.stress,
        params.temperature,
        params.humidity,
        params.wear_time,
    ];
    if numeric.iter().any(|value| !value.is_finite()) {
        return Err(ValidationError::new("non_finite_parameter"));
    }

    if params.wear_time <= 0.0 {
        return Err(ValidationError::new("non_positive_wear_time"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_parameters_match_reference_sliders() {
        let params = TestParameters::default();
        assert_eq!(params.stress, 10.0);
        assert_eq!(params.temperature, 25.0);
        assert_eq!(params.cycles, 1000);
        assert_eq!(params.humidity, 50.0);
        assert_eq!(params.wear_time, 8.0);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_new_keeps_default_exposure() {
        let params = TestParameters::new(20.0, 37.0, 5000);
        assert_eq!(params.cycles, 5000);
        assert_eq!(params.humidity, 50.0);
        assert_eq!(params.wear_time, 8.0);

        let params = params.with_exposure(90.0, 12.0);
        assert_eq!(params.stress, 20.0);
        assert_eq!(params.humidity, 90.0);
        assert_eq!(params.wear_time, 12.0);
    }

    #[test]
    fn test_out_of_range_parameters_fail_validation() {
        let mut params = TestParameters::default();
        params.stress = 0.0;
        assert!(params.validate().is_err());

        let mut params = TestParameters::default();
        params.cycles = 50;
        assert!(params.validate().is_err());

        let mut params = TestParameters::default();
        params.humidity = 120.0;
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_zero_wear_time_fails_schema_validation() {
        let params = TestParameters::default().with_exposure(50.0, 0.0);
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_parameters_deserialize_camel_case() {
        let json = r#"{"stress": 12, "temperature": 30, "cycles": 2000, "humidity": 65, "wearTime": 10}"#;
        let params: TestParameters = serde_json::from_str(json).unwrap();
        assert_eq!(params.cycles, 2000);
        assert_eq!(params.wear_time, 10.0);
    }
}
