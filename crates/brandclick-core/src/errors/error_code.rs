//! Stable error codes for front ends.

/// Every error enum implements this to expose a structured code string
/// that survives message rewording.
pub trait BrandclickErrorCode {
    /// Returns the error code (e.g., "INVALID_MONTH").
    fn error_code(&self) -> &'static str;

    /// Returns `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const INVALID_MONTH: &str = "INVALID_MONTH";
pub const INVALID_INPUT: &str = "INVALID_INPUT";
pub const EXPORT_ERROR: &str = "EXPORT_ERROR";
