//! Plain-text rendering of prediction results.

use std::fmt::Write;

use brandclick_core::models::PredictionOutcome;
use brandclick_core::params::SeasonalityTable;
use brandclick_prediction::format_value;

pub fn render_outcome(outcome: &PredictionOutcome) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "予測brand keyword click: {}",
        format_value(outcome.predicted_value())
    );
    if let Some(ga) = outcome.predicted_secondary() {
        let _ = writeln!(out, "予測GA: {}", format_value(ga));
    }
    let _ = writeln!(out, "---詳細---");
    for (factor, value) in outcome.primary.terms() {
        let _ = write!(out, "{} click: {}", factor.label(), format_value(value));
        if let Some(ga) = &outcome.secondary {
            let _ = write!(out, " (GA: {})", format_value(ga.term(factor)));
        }
        out.push('\n');
    }
    out
}

pub fn render_months(table: &SeasonalityTable) -> String {
    table
        .entries()
        .map(|(month, index)| format!("{month}\t{index}\n"))
        .collect()
}
