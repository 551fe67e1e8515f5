use serde::{Deserialize, Serialize};

use crate::domain::Category;

/// Rank as supplied by a caller, before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RankInput {
    Integer(i64),
    Decimal(f64),
    Text(String),
}

impl From<i64> for RankInput {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<&str> for RankInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Distinct reasons a rank cannot be used.
#[derive(Debug, Clone, PartialEq, thiserror::Error, Serialize, Deserialize)]
pub enum RankError {
    #[error("a rank is required to predict colleges")]
    Missing,
    #[error("rank '{0}' is not a number")]
    NotNumeric(String),
    #[error("rank cannot be negative (got {0})")]
    Negative(String),
    #[error("rank must be greater than zero")]
    Zero,
}

/// Coerce a caller-supplied rank to a positive whole rank, flooring decimals.
pub fn validate_rank(input: Option<&RankInput>) -> Result<i64, RankError> {
    let value = match input {
        None => return Err(RankError::Missing),
        Some(RankInput::Integer(value)) => *value as f64,
        Some(RankInput::Decimal(value)) => *value,
        Some(RankInput::Text(raw)) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return Err(RankError::Missing);
            }
            trimmed
                .parse::<f64>()
                .map_err(|_| RankError::NotNumeric(raw.clone()))?
        }
    };

    if !value.is_finite() {
        return Err(RankError::NotNumeric(value.to_string()));
    }
    if value < 0.0 {
        return Err(RankError::Negative(value.to_string()));
    }

    let floored = value.floor();
    if floored < 1.0 {
        return Err(RankError::Zero);
    }
    if floored > i64::MAX as f64 {
        return Err(RankError::NotNumeric(value.to_string()));
    }

    Ok(floored as i64)
}

/// Parse a declared category; only a missing or blank category is an error.
pub fn validate_category(raw: Option<&str>) -> Option<Category> {
    raw.and_then(Category::parse)
}
