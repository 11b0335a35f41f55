//! CSV export of a prediction breakdown.
//!
//! Layout: header `要因,寄与値,GA寄与値`, then one row per factor in canonical
//! order. The GA column is dropped when the outcome has no GA breakdown.

use std::io::Write;
use std::path::Path;

use brandclick_core::constants::{
    CSV_HEADER_CONTRIBUTION, CSV_HEADER_FACTOR, CSV_HEADER_SECONDARY,
};
use brandclick_core::errors::ExportError;
use brandclick_core::models::PredictionOutcome;
use brandclick_core::types::Factor;

/// Write the breakdown of `outcome` as UTF-8 CSV to `writer`.
pub fn write_csv<W: Write>(outcome: &PredictionOutcome, writer: W) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    let mut header = vec![CSV_HEADER_FACTOR, CSV_HEADER_CONTRIBUTION];
    if outcome.secondary.is_some() {
        header.push(CSV_HEADER_SECONDARY);
    }
    csv_writer.write_record(&header).map_err(csv_error)?;

    for factor in Factor::ALL {
        let mut row = vec![
            factor.label().to_string(),
            format_value(outcome.primary.term(factor)),
        ];
        if let Some(secondary) = &outcome.secondary {
            row.push(format_value(secondary.term(factor)));
        }
        csv_writer.write_record(&row).map_err(csv_error)?;
    }

    csv_writer.flush().map_err(|e| ExportError::Csv {
        message: e.to_string(),
    })
}

/// CSV bytes for `outcome`, ready for download or writing elsewhere.
pub fn to_csv_bytes(outcome: &PredictionOutcome) -> Result<Vec<u8>, ExportError> {
    let mut buf = Vec::new();
    write_csv(outcome, &mut buf)?;
    Ok(buf)
}

/// Write the CSV to `path`, replacing any existing file.
pub fn write_csv_file(outcome: &PredictionOutcome, path: &Path) -> Result<(), ExportError> {
    let file = std::fs::File::create(path).map_err(|e| ExportError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    write_csv(outcome, std::io::BufWriter::new(file))?;
    tracing::info!(path = %path.display(), "exported breakdown CSV");
    Ok(())
}

/// Shortest round-trip form, keeping `.0` on integral values (`332946.0`).
pub fn format_value(value: f64) -> String {
    format!("{value:?}")
}

fn csv_error(e: csv::Error) -> ExportError {
    ExportError::Csv {
        message: e.to_string(),
    }
}
