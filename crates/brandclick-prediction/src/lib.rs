//! # brandclick-prediction
//!
//! Linear brand-keyword-click prediction with an additive per-factor breakdown.
//!
//! ```text
//! seasonality    = w_seasonality × index(month) + intercept
//! awareness      = w_awareness × awareness_spend
//! branded_search = w_branded_search × branded_search_spend
//! publications   = w_publications × publication_count
//! predicted      = seasonality + awareness + branded_search + publications
//! ```
//!
//! ## Rounding
//!
//! | Policy | Behavior |
//! |--------|----------|
//! | `none` | Full precision throughout |
//! | `per-stage` | Each term rounded to 0.1 as computed; total re-rounded from the rounded terms |
//!
//! ## GA figures
//!
//! GA terms are scaled from the *unrounded* contributions, then rounded on
//! their own. The GA total is scaled from the (possibly rounded) predicted value.

pub mod engine;
pub mod export;
pub mod formula;
pub mod secondary;

pub use engine::PredictionEngine;
pub use export::{format_value, to_csv_bytes, write_csv, write_csv_file};
pub use formula::{predict, RawContributions};
