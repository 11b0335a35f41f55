//! Error handling for brandclick.
//! One error enum per subsystem, `thiserror` only, aggregated into [`BrandclickError`].

pub mod config_error;
pub mod error_code;
pub mod export_error;
pub mod prediction_error;

pub use config_error::ConfigError;
pub use error_code::BrandclickErrorCode;
pub use export_error::ExportError;
pub use prediction_error::PredictionError;

/// Top-level error for every fallible brandclick operation.
#[derive(Debug, thiserror::Error)]
pub enum BrandclickError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Prediction(#[from] PredictionError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

impl BrandclickErrorCode for BrandclickError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Prediction(e) => e.error_code(),
            Self::Export(e) => e.error_code(),
        }
    }
}

pub type BrandclickResult<T> = Result<T, BrandclickError>;
