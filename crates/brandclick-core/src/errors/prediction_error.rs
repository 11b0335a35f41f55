//! Prediction input errors.

use super::error_code::{self, BrandclickErrorCode};

/// Inputs the engine refuses to evaluate.
#[derive(Debug, thiserror::Error)]
pub enum PredictionError {
    #[error("unknown month: {name:?} (expected January..December)")]
    InvalidMonth { name: String },

    #[error("input {field} is not a finite number: {value}")]
    NonFiniteInput { field: &'static str, value: f64 },
}

impl BrandclickErrorCode for PredictionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidMonth { .. } => error_code::INVALID_MONTH,
            Self::NonFiniteInput { .. } => error_code::INVALID_INPUT,
        }
    }
}
