//! CSV manifest loader for bulk check-in.
//!
//! # CSV format
//!
//! One row per passenger, checked in in file order.  `group` may be empty or
//! omitted (ungrouped).
//!
//! ```csv
//! name,class,group
//! Ana,1,
//! Ben,2,7
//! Cy,2,7
//! Dee,5,0
//! ```
//!
//! Every row goes through [`Gate::check_in`], so each row is individually
//! atomic.  The first rejected row stops the load; rows before it stay
//! checked in and the error names the offending row.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::{CheckInConfirmation, Gate, ManifestError, ManifestResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ManifestRecord {
    name:  String,
    class: i64,
    #[serde(default)]
    group: Option<u32>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Check in every passenger listed in the CSV file at `path`.
pub fn load_manifest_csv(gate: &mut Gate, path: &Path) -> ManifestResult<Vec<CheckInConfirmation>> {
    let file = std::fs::File::open(path)?;
    load_manifest_reader(gate, file)
}

/// Like [`load_manifest_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for piping a manifest in
/// on stdin.
pub fn load_manifest_reader<R: Read>(
    gate:   &mut Gate,
    reader: R,
) -> ManifestResult<Vec<CheckInConfirmation>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut confirmations = Vec::new();
    for (i, result) in csv_reader.deserialize::<ManifestRecord>().enumerate() {
        let row = result.map_err(|e| ManifestError::Parse(e.to_string()))?;
        let confirmation = gate
            .check_in(row.name, row.class, row.group.unwrap_or(0))
            .map_err(|source| ManifestError::Rejected { row: i + 1, source })?;
        confirmations.push(confirmation);
    }

    info!(passengers = confirmations.len(), "manifest loaded");
    Ok(confirmations)
}
