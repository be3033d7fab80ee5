//! CSV ingestion with structural and statistical validation.
//!
//! Parses tabular text into a [`Signal`] feeding the same scoring path as
//! the synthetic generator. Dataset-level problems are hard failures
//! ([`IngestError`]); row-level problems (short rows, non-numeric cells) are
//! silently dropped by design. No resampling or interpolation is performed
//! and row order is preserved. Plain comma split — no quoting support.

use thiserror::Error;

use crate::signal::{CHANNEL_COUNT, MIN_SAMPLES, Sample, Signal};

/// Required header columns, lower-cased: the time column plus the montage.
const REQUIRED_COLUMNS: [&str; 6] = ["time", "fp1", "f3", "c3", "p3", "o1"];

/// Dataset-level validation failure. Never fatal to the process; ingestion
/// failures short-circuit before any spectral computation runs and must not
/// fall back to simulated data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IngestError {
    /// No data rows at all (fewer than header + one row).
    #[error("malformed input: CSV contains no data rows")]
    MalformedInput,

    /// Header lacks one or more required columns.
    #[error("schema mismatch: missing required column(s): {}", missing.join(", "))]
    SchemaMismatch { missing: Vec<String> },

    /// Every data row was filtered out by the row-level checks.
    #[error("empty dataset: no valid data rows after filtering")]
    EmptyDataset,

    /// Fewer valid rows than the minimum needed for band estimation.
    #[error(
        "insufficient samples: {rows} valid row(s), need at least {MIN_SAMPLES} (~0.5 s at 256 Hz)"
    )]
    InsufficientSamples { rows: usize },
}

/// Parse CSV text into a [`Signal`], applying the validation ladder in
/// order (first failure wins): presence of data rows, header schema, then
/// aggregate row-count checks after silent row filtering.
pub fn parse_csv(text: &str) -> Result<Signal, IngestError> {
    let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    if lines.len() < 2 {
        return Err(IngestError::MalformedInput);
    }

    let header: Vec<String> = lines[0]
        .split(',')
        .map(|c| c.trim().to_lowercase())
        .collect();

    let mut column_index = [0usize; REQUIRED_COLUMNS.len()];
    let mut missing = Vec::new();
    for (i, name) in REQUIRED_COLUMNS.iter().enumerate() {
        match header.iter().position(|h| h == name) {
            Some(pos) => column_index[i] = pos,
            None => missing.push((*name).to_string()),
        }
    }
    if !missing.is_empty() {
        return Err(IngestError::SchemaMismatch { missing });
    }

    let mut samples = Vec::with_capacity(lines.len() - 1);
    let mut skipped = 0usize;
    for row in &lines[1..] {
        let cells: Vec<&str> = row.split(',').collect();
        if cells.len() < header.len() {
            skipped += 1;
            continue;
        }
        match parse_row(&cells, &column_index) {
            Some(sample) => samples.push(sample),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        log::debug!("ingest: silently dropped {skipped} malformed row(s)");
    }

    if samples.is_empty() {
        return Err(IngestError::EmptyDataset);
    }
    if samples.len() < MIN_SAMPLES {
        return Err(IngestError::InsufficientSamples {
            rows: samples.len(),
        });
    }

    let mut signal = Signal {
        samples,
        sample_rate: 0.0,
    };
    signal.sample_rate = signal.sample_rate_estimate();
    Ok(signal)
}

/// One row's required cells as a sample, or `None` on any numeric failure.
fn parse_row(cells: &[&str], column_index: &[usize; 6]) -> Option<Sample> {
    let time: f64 = cells[column_index[0]].trim().parse().ok()?;
    let mut channels = [0.0f64; CHANNEL_COUNT];
    for (ch, slot) in channels.iter_mut().enumerate() {
        *slot = cells[column_index[ch + 1]].trim().parse().ok()?;
    }
    Some(Sample { time, channels })
}
