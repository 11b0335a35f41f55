use serde::{Deserialize, Serialize};

use crate::types::Factor;

/// The four additive terms of a prediction and their total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContributionBreakdown {
    /// Seasonality term including the intercept.
    pub seasonality: f64,
    pub awareness: f64,
    pub branded_search: f64,
    pub publications: f64,
    pub predicted_value: f64,
}

/// GA-unit breakdown; same shape as the primary one.
pub type SecondaryBreakdown = ContributionBreakdown;

impl ContributionBreakdown {
    pub fn term(&self, factor: Factor) -> f64 {
        match factor {
            Factor::Seasonality => self.seasonality,
            Factor::Awareness => self.awareness,
            Factor::BrandedSearch => self.branded_search,
            Factor::Publications => self.publications,
        }
    }

    /// `(factor, term)` pairs in canonical order.
    pub fn terms(&self) -> [(Factor, f64); 4] {
        Factor::ALL.map(|f| (f, self.term(f)))
    }

    /// Plain sum of the four terms, without any rounding.
    pub fn sum_of_terms(&self) -> f64 {
        self.seasonality + self.awareness + self.branded_search + self.publications
    }
}
