//! GA-unit breakdown.

use brandclick_core::models::{ContributionBreakdown, SecondaryBreakdown};
use brandclick_core::params::{RoundingPolicy, SecondaryMetric};

use crate::formula::RawContributions;

/// Scale a prediction into GA units.
///
/// Terms come from `raw` (never from the rounded primary terms, which can
/// differ in the last digit); the total comes from the primary predicted value.
/// Every value is rounded independently under `policy`.
pub fn compute(
    raw: &RawContributions,
    primary: &ContributionBreakdown,
    metric: &SecondaryMetric,
    policy: RoundingPolicy,
) -> SecondaryBreakdown {
    let scaled = |v: f64| policy.apply(metric.scale(v));
    SecondaryBreakdown {
        seasonality: scaled(raw.seasonality),
        awareness: scaled(raw.awareness),
        branded_search: scaled(raw.branded_search),
        publications: scaled(raw.publications),
        predicted_value: scaled(primary.predicted_value),
    }
}
