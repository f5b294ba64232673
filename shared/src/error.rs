//! Errors raised before scoring starts

use thiserror::Error;

/// Rejected engine input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecommendationError {
    #[error("Invalid soil sample: {field} {reason}")]
    InvalidSample {
        field: &'static str,
        reason: &'static str,
    },

    #[error("Invalid weather snapshot: {field} {reason}")]
    InvalidWeather {
        field: &'static str,
        reason: &'static str,
    },
}

impl RecommendationError {
    pub fn field(&self) -> &'static str {
        match self {
            RecommendationError::InvalidSample { field, .. }
            | RecommendationError::InvalidWeather { field, .. } => field,
        }
    }
}
