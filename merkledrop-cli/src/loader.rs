//! The CSV input collaborator.
//!
//! Supplies the engine with an ordered sequence of textual (address,
//! allocation) rows. A malformed or missing field aborts the whole batch with
//! an error naming the row: a silently dropped record would change the
//! committed root without anyone noticing.

use anyhow::{anyhow, Context, Result};
use csv::ReaderBuilder;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// One raw CSV row, untrimmed of semantics: the address and allocation
/// exactly as the input spelled them (whitespace stripped).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationRow {
    pub address: String,
    pub allocation: String,
}

/// Reads a headered allocation CSV from disk. Row order is preserved; it is
/// part of the committed data.
pub fn read_allocations(path: &Path) -> Result<Vec<AllocationRow>> {
    let file = File::open(path).with_context(|| format!("failed to open input file {path:?}"))?;
    read_allocations_from(BufReader::new(file))
        .with_context(|| format!("failed to read allocations from {path:?}"))
}

/// Reads allocation rows from any reader. The first column is the address,
/// the second the allocation amount (the header may call it `allocation` or
/// `amount`; only the position matters).
pub fn read_allocations_from<R: Read>(reader: R) -> Result<Vec<AllocationRow>> {
    let mut csv_reader = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let mut rows = Vec::new();
    for (i, result) in csv_reader.records().enumerate() {
        let row = i + 1;
        let record = result.with_context(|| format!("failed to read CSV record at row {row}"))?;

        let address = record
            .get(0)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| anyhow!("missing address at row {row}"))?
            .to_owned();
        let allocation = record
            .get(1)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| anyhow!("missing allocation at row {row}"))?
            .to_owned();

        rows.push(AllocationRow { address, allocation });
    }
    Ok(rows)
}
