//! Roster rendering: a paginated PDF and a standalone PNG that share one
//! [`LayoutPlan`] for geometry and colours.

pub mod document;
pub mod fonts;
pub mod layout;
pub mod metrics;
pub mod raster;

pub use document::DocumentRenderer;
pub use fonts::{FontSet, RasterFont};
pub use layout::{LayoutPlan, Medium, Rgb};
pub use metrics::{Helvetica, TextMetrics};
pub use raster::ImageRenderer;

use crate::errors::AppResult;
use crate::models::{Schedule, Slot};
use std::path::Path;

/// Column labels, in table order.
pub const HEADERS: [&str; 5] = ["Data", "Dia da Semana", "Noite", "Tarde", "Manhã"];

pub fn title_for(schedule: &Schedule) -> String {
    format!(
        "Escala de Plantão - {}/{}",
        schedule.month_name(),
        schedule.year()
    )
}

/// One rendered table row. Empty assignments stay as empty cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub cells: [String; 5],
    pub is_weekend: bool,
}

/// Everything a backend draws: title plus data rows in calendar order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterTable {
    pub title: String,
    pub rows: Vec<TableRow>,
}

impl RosterTable {
    pub fn new(title: impl Into<String>, rows: Vec<TableRow>) -> Self {
        Self {
            title: title.into(),
            rows,
        }
    }

    pub fn from_schedule(schedule: &Schedule) -> Self {
        let rows = schedule
            .days()
            .iter()
            .map(|r| TableRow {
                cells: [
                    r.day.display_date(),
                    r.day.weekday_name().to_string(),
                    r.shifts.get(Slot::Night).to_string(),
                    r.shifts.get(Slot::Afternoon).to_string(),
                    r.shifts.get(Slot::Morning).to_string(),
                ],
                is_weekend: r.day.is_weekend,
            })
            .collect();

        Self::new(title_for(schedule), rows)
    }

    /// Plan for this table's row count.
    pub fn plan(&self, medium: Medium) -> LayoutPlan {
        LayoutPlan::for_rows(self.rows.len(), medium)
    }
}

/// Common contract of the output backends.
pub trait Renderer {
    /// Encodes the table fully in memory.
    fn encode(&self, table: &RosterTable) -> AppResult<Vec<u8>>;

    /// Renders `table` to `path`. Fails with `RenderIo` if the destination
    /// cannot be written; a previous file at `path` is replaced only once
    /// the new content is complete.
    fn render_table(&self, table: &RosterTable, path: &Path) -> AppResult<()> {
        let bytes = self.encode(table)?;
        crate::export::fs_utils::write_atomic(path, &bytes)
    }

    fn render(&self, schedule: &Schedule, path: &Path) -> AppResult<()> {
        self.render_table(&RosterTable::from_schedule(schedule), path)
    }
}
