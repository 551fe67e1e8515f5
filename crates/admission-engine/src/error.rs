use crate::config::ConfigError;
use crate::eligibility::EligibilityError;
use crate::prediction::PredictionError;
use crate::records::ImportError;
use crate::telemetry::TelemetryError;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Import(ImportError),
    Eligibility(EligibilityError),
    Prediction(PredictionError),
    Output(serde_json::Error),
}

impl AppError {
    /// True for failures caused by the caller's input rather than the environment.
    pub fn is_user_error(&self) -> bool {
        matches!(self, AppError::Eligibility(_) | AppError::Prediction(_))
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Import(err) => write!(f, "import error: {}", err),
            AppError::Eligibility(err) => write!(f, "{}", err),
            AppError::Prediction(err) => write!(f, "{}", err),
            AppError::Output(err) => write!(f, "output error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Import(err) => Some(err),
            AppError::Eligibility(err) => Some(err),
            AppError::Prediction(err) => Some(err),
            AppError::Output(err) => Some(err),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<ImportError> for AppError {
    fn from(value: ImportError) -> Self {
        Self::Import(value)
    }
}

impl From<EligibilityError> for AppError {
    fn from(value: EligibilityError) -> Self {
        Self::Eligibility(value)
    }
}

impl From<PredictionError> for AppError {
    fn from(value: PredictionError) -> Self {
        Self::Prediction(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Output(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prediction::RankError;

    #[test]
    fn user_errors_are_distinguished_from_environment_errors() {
        let prediction = AppError::from(PredictionError::InvalidRank(RankError::Zero));
        assert!(prediction.is_user_error());
        assert_eq!(prediction.to_string(), "rank must be greater than zero");

        let config = AppError::from(ConfigError::OutOfRange {
            variable: "PREDICTOR_PROBABILITY_CAP",
            expected: "a percentage between 0 and 100",
        });
        assert!(!config.is_user_error());
        assert!(config.to_string().starts_with("configuration error"));
    }
}
