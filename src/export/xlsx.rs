// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::write_atomic;
use crate::render::layout::{LayoutPlan, Medium, Rgb};
use crate::render::{HEADERS, RosterTable};
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Characters of column width per layout grid unit.
const CHARS_PER_UNIT: f64 = 2.0;

/// Export XLSX con gli stessi colori del PDF/PNG.
pub(crate) fn export_xlsx(table: &RosterTable, path: &Path) -> AppResult<()> {
    let plan = table.plan(Medium::Document);

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Escala").map_err(to_app_error)?;

    // ---------------------------
    // Titolo
    // ---------------------------
    let title_format = Format::new()
        .set_bold()
        .set_font_size(16)
        .set_font_color(color(plan.title_color))
        .set_align(FormatAlign::Center);

    worksheet
        .merge_range(0, 0, 0, (HEADERS.len() - 1) as u16, &table.title, &title_format)
        .map_err(to_app_error)?;

    // ---------------------------
    // Header
    // ---------------------------
    let header_format = Format::new()
        .set_bold()
        .set_font_color(color(plan.header_text_color))
        .set_background_color(color(plan.header_color))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
        .set_border_color(color(plan.header_border_color))
        .set_align(FormatAlign::Center);

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet
            .write_with_format(1, col as u16, *header, &header_format)
            .map_err(to_app_error)?;
    }

    worksheet.set_freeze_panes(2, 0).map_err(to_app_error)?;

    // ---------------------------
    // Righe
    // ---------------------------
    let mut col_widths = column_widths(&plan);

    for (i, row) in table.rows.iter().enumerate() {
        let fmt = Format::new()
            .set_background_color(color(plan.row_color(i, row.is_weekend)))
            .set_pattern(FormatPattern::Solid)
            .set_border(FormatBorder::Thin)
            .set_border_color(color(plan.grid_color))
            .set_align(FormatAlign::Center);

        for (col, value) in row.cells.iter().enumerate() {
            worksheet
                .write_with_format((i + 2) as u32, col as u16, value.as_str(), &fmt)
                .map_err(to_app_error)?;

            let fit = UnicodeWidthStr::width(value.as_str()) as f64 + 2.0;
            col_widths[col] = col_widths[col].max(fit);
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w)
            .map_err(to_app_error)?;
    }

    let bytes = workbook.save_to_buffer().map_err(to_app_error)?;
    write_atomic(path, &bytes)
}

/// Starting widths keep the shared column ratio.
fn column_widths(plan: &LayoutPlan) -> [f64; 5] {
    plan.column_ratio().map(|units| units as f64 * CHARS_PER_UNIT)
}

fn color(c: Rgb) -> Color {
    Color::RGB(c.to_u32())
}

fn to_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
