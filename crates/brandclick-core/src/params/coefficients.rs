use serde::{Deserialize, Serialize};

/// Regression weights for the four features plus the intercept.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoefficientSet {
    /// Weight applied to the month's seasonality index.
    pub seasonality: f64,
    pub awareness: f64,
    pub branded_search: f64,
    pub publications: f64,
    /// Folded into the seasonality contribution.
    pub intercept: f64,
}

impl CoefficientSet {
    pub fn new(
        seasonality: f64,
        awareness: f64,
        branded_search: f64,
        publications: f64,
        intercept: f64,
    ) -> Self {
        Self {
            seasonality,
            awareness,
            branded_search,
            publications,
            intercept,
        }
    }
}
