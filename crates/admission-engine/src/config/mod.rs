use std::env;
use std::fmt;
use std::str::FromStr;

use crate::prediction::DEFAULT_INFLATION_FACTOR;

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub predictor: PredictorConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );
        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            predictor: PredictorConfig::from_env()?,
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Tuning dials for the prediction engine.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictorConfig {
    /// Yearly growth applied when projecting an older cutoff onto the target year.
    pub inflation_factor: f64,
    /// Candidates scoring below this probability are dropped.
    pub probability_floor: u8,
    pub home_state_bonus: u8,
    /// Ceiling the home-state bonus may raise a probability to.
    pub probability_cap: u8,
    /// Fixed target year; the current calendar year when unset.
    pub target_year: Option<i32>,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            inflation_factor: DEFAULT_INFLATION_FACTOR,
            probability_floor: 10,
            home_state_bonus: 5,
            probability_cap: 95,
            target_year: None,
        }
    }
}

impl PredictorConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let inflation_factor =
            parse_var("PREDICTOR_INFLATION_FACTOR")?.unwrap_or(defaults.inflation_factor);
        if !inflation_factor.is_finite() || inflation_factor < 1.0 {
            return Err(ConfigError::OutOfRange {
                variable: "PREDICTOR_INFLATION_FACTOR",
                expected: "a finite number >= 1.0",
            });
        }

        Ok(Self {
            inflation_factor,
            probability_floor: parse_percent("PREDICTOR_PROBABILITY_FLOOR")?
                .unwrap_or(defaults.probability_floor),
            home_state_bonus: parse_percent("PREDICTOR_HOME_STATE_BONUS")?
                .unwrap_or(defaults.home_state_bonus),
            probability_cap: parse_percent("PREDICTOR_PROBABILITY_CAP")?
                .unwrap_or(defaults.probability_cap),
            target_year: parse_var("PREDICTOR_TARGET_YEAR")?,
        })
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

fn parse_var<T: FromStr>(variable: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(variable) {
        Ok(raw) if raw.trim().is_empty() => Ok(None),
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { variable, value: raw }),
        Err(_) => Ok(None),
    }
}

fn parse_percent(variable: &'static str) -> Result<Option<u8>, ConfigError> {
    match parse_var::<u8>(variable)? {
        Some(value) if value > 100 => Err(ConfigError::OutOfRange {
            variable,
            expected: "a percentage between 0 and 100",
        }),
        other => Ok(other),
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Invalid {
        variable: &'static str,
        value: String,
    },
    OutOfRange {
        variable: &'static str,
        expected: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid { variable, value } => {
                write!(f, "{variable} could not be parsed from '{value}'")
            }
            ConfigError::OutOfRange { variable, expected } => {
                write!(f, "{variable} must be {expected}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
