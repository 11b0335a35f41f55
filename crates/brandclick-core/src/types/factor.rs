use serde::{Deserialize, Serialize};

/// One additive term of the prediction.
///
/// Declaration order is the canonical display and export order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    /// Seasonality index term, intercept folded in.
    Seasonality,
    Awareness,
    BrandedSearch,
    Publications,
}

impl Factor {
    pub const ALL: [Factor; 4] = [
        Factor::Seasonality,
        Factor::Awareness,
        Factor::BrandedSearch,
        Factor::Publications,
    ];

    /// Display label used in rendered output and CSV rows.
    pub fn label(self) -> &'static str {
        match self {
            Self::Seasonality => "ベース認知",
            Self::Awareness => "認知費",
            Self::BrandedSearch => "指名検索費",
            Self::Publications => "記事掲載数",
        }
    }
}
