// src/export/tabular.rs

use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::write_atomic;
use crate::models::Schedule;
use crate::render::{HEADERS, RosterTable};
use std::path::Path;

/// Snapshot JSON, same shape as the stored records.
pub(crate) fn export_json(schedule: &Schedule, path: &Path) -> AppResult<()> {
    let json = serde_json::to_string_pretty(&schedule.to_snapshot())
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    write_atomic(path, json.as_bytes())
}

/// CSV with the rendered column labels as header.
pub(crate) fn export_csv(table: &RosterTable, path: &Path) -> AppResult<()> {
    let mut wtr = csv::Writer::from_writer(Vec::new());

    wtr.write_record(HEADERS)
        .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;

    for row in &table.rows {
        wtr.write_record(&row.cells)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;

    write_atomic(path, &bytes)
}
