use brandclick_core::models::ContributionBreakdown;
use brandclick_core::params::{CoefficientSet, RoundingPolicy, SeasonalityTable};
use brandclick_core::types::FeatureVector;

/// Unrounded contribution terms, straight from `coefficient × input`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawContributions {
    pub seasonality: f64,
    pub awareness: f64,
    pub branded_search: f64,
    pub publications: f64,
}

impl RawContributions {
    pub fn compute(
        features: &FeatureVector,
        coef: &CoefficientSet,
        table: &SeasonalityTable,
    ) -> Self {
        let index = f64::from(table.lookup(features.month));
        Self {
            seasonality: coef.seasonality * index + coef.intercept,
            awareness: coef.awareness * features.awareness_spend,
            branded_search: coef.branded_search * features.branded_search_spend,
            publications: coef.publications * features.publication_count,
        }
    }

    /// Apply `policy` to each term and to the sum of the resulting terms.
    pub fn breakdown(&self, policy: RoundingPolicy) -> ContributionBreakdown {
        let seasonality = policy.apply(self.seasonality);
        let awareness = policy.apply(self.awareness);
        let branded_search = policy.apply(self.branded_search);
        let publications = policy.apply(self.publications);

        let predicted_value =
            policy.apply(seasonality + awareness + branded_search + publications);

        ContributionBreakdown {
            seasonality,
            awareness,
            branded_search,
            publications,
            predicted_value,
        }
    }
}

/// Compute the primary breakdown for one feature vector.
///
/// Pure: identical inputs always give identical outputs.
pub fn predict(
    features: &FeatureVector,
    coef: &CoefficientSet,
    table: &SeasonalityTable,
    policy: RoundingPolicy,
) -> ContributionBreakdown {
    RawContributions::compute(features, coef, table).breakdown(policy)
}
