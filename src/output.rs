//! Output formatting and persistence for survey summaries.
//!
//! Supports the plain three-number line, JSON, a labeled report view,
//! and CSV append/export.

use anyhow::Result;
use tracing::debug;

use crate::dataset::Respondent;
use crate::stats::SurveySummary;
use csv::WriterBuilder;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Writes the three aggregates space-separated on one line, unrounded.
/// This matches the original survey script's output exactly.
pub fn write_plain<W: Write>(out: &mut W, summary: &SurveySummary) -> Result<()> {
    writeln!(
        out,
        "{} {} {}",
        summary.avg_potential, summary.avg_interest, summary.prefers_simulations_pct
    )?;
    Ok(())
}

/// Writes the full summary as pretty-printed JSON.
pub fn write_json<W: Write>(out: &mut W, summary: &SurveySummary) -> Result<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(summary)?)?;
    Ok(())
}

/// Writes a labeled, two-decimal report view. Display-only rounding;
/// the underlying aggregates stay at full precision.
pub fn write_report<W: Write>(out: &mut W, summary: &SurveySummary) -> Result<()> {
    writeln!(out, "Respondents:           {}", summary.respondents)?;
    writeln!(out, "Potential:             {:.2} / 10", summary.avg_potential)?;
    writeln!(out, "Interest:              {:.2} / 10", summary.avg_interest)?;
    writeln!(
        out,
        "Prefers simulations:   {:.1}% ({} of {})",
        summary.prefers_simulations_pct, summary.prefers_simulations, summary.respondents
    )?;
    Ok(())
}

/// Appends a [`SurveySummary`] record as a row to a CSV file.
///
/// Creates the file with headers if it does not already exist.
pub fn append_record(path: &str, summary: &SurveySummary) -> Result<()> {
    let file_exists = Path::new(path).exists();
    debug!(path, file_exists, "Appending CSV record");

    let file = OpenOptions::new().append(true).create(true).open(path)?;

    let mut writer = WriterBuilder::new()
        .has_headers(!file_exists) // IMPORTANT when appending
        .from_writer(file);

    writer.serialize(summary)?;
    writer.flush()?;

    Ok(())
}

/// Writes the full respondent table as CSV, one row per record.
pub fn export_table(path: &str, table: &[Respondent]) -> Result<()> {
    debug!(path, rows = table.len(), "Exporting respondent table");

    let mut writer = WriterBuilder::new().from_path(path)?;
    for respondent in table {
        writer.serialize(respondent)?;
    }
    writer.flush()?;

    Ok(())
}
