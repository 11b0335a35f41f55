//! Rounding configuration.

use serde::{Deserialize, Serialize};

use crate::params::RoundingPolicy;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct RoundingConfig {
    /// `"none"` or `"per-stage"`. Default: the variant's policy.
    pub policy: Option<RoundingPolicy>,
}
