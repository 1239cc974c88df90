use config::{Config, ConfigError, Environment, File};
use prosthetix_models::TestParameters;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub testing: TestingConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub file_path: Option<String>,
}

/// Test conditions used when a request does not supply its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TestingConfig {
    pub stress: f64,
    pub temperature: f64,
    pub cycles: u32,
    pub humidity: f64,
    pub wear_time: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// "text" or "json"
    pub format: String,
    pub include_chart: bool,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let config = Config::builder()
            // Start with default values
            .add_source(File::with_name("config/default").required(false))
            // Add environment-specific config
            .add_source(
                File::with_name(&format!(
                    "config/{}",
                    env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into())
                ))
                .required(false),
            )
            // Add local config (gitignored)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables with PROSTHETIX prefix
            .add_source(
                Environment::with_prefix("PROSTHETIX")
                    .separator("__")
                    .try_parsing(true),
            );

        config.build()?.try_deserialize()
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
            file_path: None,
        }
    }
}

impl Default for TestingConfig {
    fn default() -> Self {
        let defaults = TestParameters::default();
        Self {
            stress: defaults.stress,
            temperature: defaults.temperature,
            cycles: defaults.cycles,
            humidity: defaults.humidity,
            wear_time: defaults.wear_time,
        }
    }
}

impl TestingConfig {
    pub fn parameters(&self) -> TestParameters {
        TestParameters {
            stress: self.stress,
            temperature: self.temperature,
            cycles: self.cycles,
            humidity: self.humidity,
            wear_time: self.wear_time,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
            include_chart: true,
        }
    }
}

impl OutputConfig {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}
