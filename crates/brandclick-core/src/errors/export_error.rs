//! CSV export errors.

use super::error_code::{self, BrandclickErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("CSV write failed: {message}")]
    Csv { message: String },

    #[error("JSON serialization failed: {message}")]
    Json { message: String },

    #[error("export I/O failed for {path}: {message}")]
    Io { path: String, message: String },
}

impl BrandclickErrorCode for ExportError {
    fn error_code(&self) -> &'static str {
        error_code::EXPORT_ERROR
    }
}
