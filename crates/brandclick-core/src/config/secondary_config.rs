//! GA secondary-metric configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct SecondaryConfig {
    /// Compute GA figures. Default: on for `extended`, off for `baseline`.
    pub enabled: Option<bool>,
    /// Clicks → GA conversion factor. Default: 0.0221.
    pub factor: Option<f64>,
}
