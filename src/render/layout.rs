//! Geometry and colour rules shared by every output medium.
//!
//! All lengths are defined once in abstract grid units and scaled by the
//! medium's unit size, so the PDF and the PNG keep the same proportions.

use crate::models::Schedule;

/// Millimetres to PDF points.
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * 72.0 / 25.4
}

/// Target output technology.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Medium {
    /// Paginated document, lengths in PDF points.
    Document,
    /// Bitmap, lengths in pixels.
    Raster,
}

impl Medium {
    /// Size of one grid unit in the medium's native unit.
    pub fn unit(&self) -> f32 {
        match self {
            Medium::Document => mm_to_pt(5.0),
            Medium::Raster => 18.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn hex(v: u32) -> Self {
        Rgb((v >> 16) as u8, (v >> 8) as u8, v as u8)
    }

    pub fn to_u32(self) -> u32 {
        ((self.0 as u32) << 16) | ((self.1 as u32) << 8) | self.2 as u32
    }

    /// Components in 0.0..=1.0, as PDF content streams expect.
    pub fn to_unit(self) -> (f32, f32, f32) {
        (
            self.0 as f32 / 255.0,
            self.1 as f32 / 255.0,
            self.2 as f32 / 255.0,
        )
    }
}

pub const TITLE_COLOR: Rgb = Rgb::hex(0x1A237E);
pub const HEADER_COLOR: Rgb = Rgb::hex(0x5C6BC0);
pub const HEADER_BORDER_COLOR: Rgb = Rgb::hex(0x4A5A9F);
pub const HEADER_TEXT_COLOR: Rgb = Rgb::hex(0xFFFFFF);
pub const GRID_COLOR: Rgb = Rgb::hex(0xD0D0D0);
pub const WEEKEND_COLOR: Rgb = Rgb::hex(0x8AB4F8);
pub const EVEN_ROW_COLOR: Rgb = Rgb::hex(0xF5F5F5);
pub const ODD_ROW_COLOR: Rgb = Rgb::hex(0xFFFFFF);
pub const TEXT_COLOR: Rgb = Rgb::hex(0x000000);
pub const BACKGROUND_COLOR: Rgb = Rgb::hex(0xFFFFFF);

// Grid units
const COLUMN_UNITS: [f32; 5] = [7.0, 8.0, 12.0, 12.0, 12.0];
const ROW_UNITS: f32 = 2.0;
const HEADER_UNITS: f32 = 3.0;
const TITLE_UNITS: f32 = 3.0;
const MARGIN_UNITS: f32 = 3.0;
const TITLE_FONT_UNITS: f32 = 1.2;
const HEADER_FONT_UNITS: f32 = 0.8;
const CELL_FONT_UNITS: f32 = 0.65;

/// Border widths, in grid units.
const HEADER_BORDER_UNITS: f32 = 1.0 / 9.0;
const GRID_LINE_UNITS: f32 = 1.0 / 18.0;

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutPlan {
    pub medium: Medium,
    pub row_count: usize,
    pub column_widths: [f32; 5],
    pub row_height: f32,
    pub header_height: f32,
    pub title_height: f32,
    pub margin: f32,
    pub title_font_size: f32,
    pub header_font_size: f32,
    pub cell_font_size: f32,
    pub header_border_width: f32,
    pub grid_line_width: f32,
    pub header_color: Rgb,
    pub header_text_color: Rgb,
    pub header_border_color: Rgb,
    pub grid_color: Rgb,
    pub title_color: Rgb,
    pub text_color: Rgb,
}

impl LayoutPlan {
    pub fn compute(schedule: &Schedule, medium: Medium) -> Self {
        Self::for_rows(schedule.len(), medium)
    }

    /// Plan for a table of `row_count` data rows.
    pub fn for_rows(row_count: usize, medium: Medium) -> Self {
        let u = medium.unit();

        Self {
            medium,
            row_count,
            column_widths: COLUMN_UNITS.map(|c| c * u),
            row_height: ROW_UNITS * u,
            header_height: HEADER_UNITS * u,
            title_height: TITLE_UNITS * u,
            margin: MARGIN_UNITS * u,
            title_font_size: TITLE_FONT_UNITS * u,
            header_font_size: HEADER_FONT_UNITS * u,
            cell_font_size: CELL_FONT_UNITS * u,
            header_border_width: HEADER_BORDER_UNITS * u,
            grid_line_width: GRID_LINE_UNITS * u,
            header_color: HEADER_COLOR,
            header_text_color: HEADER_TEXT_COLOR,
            header_border_color: HEADER_BORDER_COLOR,
            grid_color: GRID_COLOR,
            title_color: TITLE_COLOR,
            text_color: TEXT_COLOR,
        }
    }

    /// Background of data row `index`.
    ///
    /// Weekend rows are always highlighted. Other rows alternate on the raw
    /// row index, so weekends do not reset the alternation.
    pub fn row_color(&self, index: usize, is_weekend: bool) -> Rgb {
        row_color(index, is_weekend)
    }

    pub fn table_width(&self) -> f32 {
        self.column_widths.iter().sum()
    }

    /// Header band plus every data row.
    pub fn table_height(&self) -> f32 {
        self.header_height + self.row_count as f32 * self.row_height
    }

    /// Full drawing: margins, title band and table.
    pub fn content_size(&self) -> (f32, f32) {
        (
            self.table_width() + 2.0 * self.margin,
            self.title_height + self.table_height() + 2.0 * self.margin,
        )
    }

    /// Left edge of each column, relative to the table's left edge.
    pub fn column_offsets(&self) -> [f32; 5] {
        let mut offsets = [0.0; 5];
        let mut x = 0.0;
        for (i, w) in self.column_widths.iter().enumerate() {
            offsets[i] = x;
            x += w;
        }
        offsets
    }

    /// Column widths divided by the medium unit; equal across media.
    pub fn column_ratio(&self) -> [f32; 5] {
        let u = self.medium.unit();
        self.column_widths.map(|w| w / u)
    }

    /// Left coordinate that centres `text_width` in `[left, left + span]`.
    /// Text wider than the span starts at `left`.
    pub fn centered_x(&self, left: f32, span: f32, text_width: f32) -> f32 {
        left + ((span - text_width) / 2.0).max(0.0)
    }
}

/// See [`LayoutPlan::row_color`].
pub fn row_color(index: usize, is_weekend: bool) -> Rgb {
    if is_weekend {
        WEEKEND_COLOR
    } else if index % 2 == 0 {
        EVEN_ROW_COLOR
    } else {
        ODD_ROW_COLOR
    }
}
