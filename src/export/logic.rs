// src/export/logic.rs

use crate::config::Config;
use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::tabular::{export_csv, export_json};
use crate::export::xlsx::export_xlsx;
use crate::export::{ExportFormat, notify_export_success};
use crate::models::Schedule;
use crate::render::{DocumentRenderer, FontSet, ImageRenderer, Renderer, RosterTable};
use crate::ui::messages::info;
use std::path::Path;

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    /// Export di una escala nel formato richiesto.
    ///
    /// - `format`: pdf | png | csv | json | xlsx
    /// - `file`: file di output; se esiste serve conferma oppure `force`
    pub fn export(
        schedule: &Schedule,
        format: ExportFormat,
        file: &Path,
        force: bool,
        cfg: &Config,
    ) -> AppResult<()> {
        ensure_writable(file, force)?;

        info(format!(
            "Exporting to {}: {}",
            format.label(),
            file.display()
        ));

        Self::write(schedule, format, file, cfg)?;

        notify_export_success(format.label(), file);
        Ok(())
    }

    /// Writes without prompting.
    pub fn write(
        schedule: &Schedule,
        format: ExportFormat,
        file: &Path,
        cfg: &Config,
    ) -> AppResult<()> {
        let table = RosterTable::from_schedule(schedule);

        match format {
            ExportFormat::Pdf => DocumentRenderer::new().render_table(&table, file),
            ExportFormat::Png => {
                let fonts = FontSet::load(
                    Some(Path::new(&cfg.font_regular)),
                    Some(Path::new(&cfg.font_bold)),
                );
                ImageRenderer::new(fonts).render_table(&table, file)
            }
            ExportFormat::Csv => export_csv(&table, file),
            ExportFormat::Json => export_json(schedule, file),
            ExportFormat::Xlsx => export_xlsx(&table, file),
        }
    }
}
