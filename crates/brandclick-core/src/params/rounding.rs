use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// When contributions are rounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundingPolicy {
    /// Full precision throughout.
    #[serde(rename = "none")]
    Unrounded,
    /// Each contribution is rounded to one decimal as soon as it is computed,
    /// and the total is re-rounded after summing the rounded terms, so the
    /// displayed detail always adds up to the displayed total.
    #[default]
    #[serde(rename = "per-stage")]
    PerStage,
}

impl RoundingPolicy {
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::Unrounded => value,
            Self::PerStage => round_one_decimal(value),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unrounded => "none",
            Self::PerStage => "per-stage",
        }
    }
}

impl fmt::Display for RoundingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoundingPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::Unrounded),
            "per-stage" => Ok(Self::PerStage),
            other => Err(format!("unknown rounding policy {other:?} (expected none|per-stage)")),
        }
    }
}

/// Round to one decimal place, correctly rounded on the exact binary value
/// with ties to even.
///
/// `(x * 10.0).round() / 10.0` double-rounds and rounds ties away from zero;
/// going through the exact decimal formatter avoids both.
pub fn round_one_decimal(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{value:.1}").parse().unwrap_or(value)
}
