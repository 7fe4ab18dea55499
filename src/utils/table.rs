//! Table rendering utilities for CLI outputs.

use crate::utils::formatting::pad_right;

pub struct Column {
    pub header: String,
    pub width: usize,
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<(Vec<String>, bool)>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Adds a row; `highlight` rows are rendered with the weekend colour.
    pub fn add_row(&mut self, row: Vec<String>, highlight: bool) {
        self.rows.push((row, highlight));
    }

    /// Renders every column padded to its display width; `decorate`
    /// receives each data line and its highlight flag.
    pub fn render_with<F>(&self, decorate: F) -> String
    where
        F: Fn(&str, bool) -> String,
    {
        let mut out = String::new();

        // Header
        let header: Vec<String> = self
            .columns
            .iter()
            .map(|c| pad_right(&c.header, c.width))
            .collect();
        out.push_str(header.join(" ").trim_end());
        out.push('\n');

        // Rows
        for (row, highlight) in &self.rows {
            let cells: Vec<String> = self
                .columns
                .iter()
                .enumerate()
                .map(|(i, col)| {
                    let value = row.get(i).map(String::as_str).unwrap_or("");
                    pad_right(value, col.width)
                })
                .collect();
            out.push_str(&decorate(&cells.join(" "), *highlight));
            out.push('\n');
        }

        out
    }
}
