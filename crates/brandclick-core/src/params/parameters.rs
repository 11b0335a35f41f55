use super::{CoefficientSet, ModelVariant, RoundingPolicy, SeasonalityTable, SecondaryMetric};

/// Everything the engine needs, resolved once at start-up and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelParameters {
    pub coefficients: CoefficientSet,
    pub seasonality: SeasonalityTable,
    pub rounding: RoundingPolicy,
    /// `None` disables the GA figures.
    pub secondary: Option<SecondaryMetric>,
}

impl Default for ModelParameters {
    fn default() -> Self {
        ModelVariant::default().parameters()
    }
}
