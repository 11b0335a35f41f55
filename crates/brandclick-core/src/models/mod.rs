//! Result models produced by the prediction engine.

pub mod breakdown;
pub mod prediction_outcome;

pub use breakdown::{ContributionBreakdown, SecondaryBreakdown};
pub use prediction_outcome::PredictionOutcome;
