//! PNG backend.

use crate::errors::{AppError, AppResult};
use crate::render::fonts::{FontSet, RasterFont};
use crate::render::layout::{BACKGROUND_COLOR, LayoutPlan, Medium, Rgb};
use crate::render::metrics::TextMetrics;
use crate::render::{HEADERS, Renderer, RosterTable, TableRow};
use image::{ImageFormat, Rgb as Pixel, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_rect_mut};
use imageproc::rect::Rect;
use std::io::Cursor;

pub struct ImageRenderer {
    fonts: FontSet,
}

impl ImageRenderer {
    pub fn new(fonts: FontSet) -> Self {
        Self { fonts }
    }

    /// Canvas size in pixels for `plan`.
    pub fn canvas_size(plan: &LayoutPlan) -> (u32, u32) {
        let (w, h) = plan.content_size();
        (w.round() as u32, h.round() as u32)
    }

    /// Draws the table onto a fresh canvas.
    pub fn draw(&self, table: &RosterTable) -> RgbImage {
        let plan = table.plan(Medium::Raster);
        let (width, height) = Self::canvas_size(&plan);
        let mut img = RgbImage::from_pixel(width, height, pixel(BACKGROUND_COLOR));

        let margin = plan.margin.round() as i32;

        // Titolo centrato sulla larghezza dell'immagine e nella sua fascia
        let title_h = plan.title_height.round() as i32;
        centered_text(
            &mut img,
            &self.fonts.bold,
            &plan,
            (0, margin, width as i32, title_h),
            plan.title_font_size,
            plan.title_color,
            &table.title,
        );

        let mut y = margin + title_h;
        self.draw_header(&mut img, &plan, margin, y);
        y += plan.header_height.round() as i32;

        let row_h = plan.row_height.round() as i32;
        for (i, row) in table.rows.iter().enumerate() {
            self.draw_row(&mut img, &plan, margin, y, i, row);
            y += row_h;
        }

        img
    }

    fn draw_header(&self, img: &mut RgbImage, plan: &LayoutPlan, left: i32, y: i32) {
        let h = plan.header_height.round() as i32;
        let border = (plan.header_border_width.round() as i32).max(1);
        let mut x = left;

        for (i, label) in HEADERS.iter().enumerate() {
            let w = plan.column_widths[i].round() as i32;

            fill(img, x, y, w, h, plan.header_color);
            for t in 0..border {
                outline(img, x + t, y + t, w - 2 * t, h - 2 * t, plan.header_border_color);
            }

            centered_text(
                img,
                &self.fonts.bold,
                plan,
                (x, y, w, h),
                plan.header_font_size,
                plan.header_text_color,
                label,
            );

            x += w;
        }
    }

    fn draw_row(
        &self,
        img: &mut RgbImage,
        plan: &LayoutPlan,
        left: i32,
        y: i32,
        index: usize,
        row: &TableRow,
    ) {
        let h = plan.row_height.round() as i32;
        let bg = plan.row_color(index, row.is_weekend);
        let mut x = left;

        for (i, text) in row.cells.iter().enumerate() {
            let w = plan.column_widths[i].round() as i32;

            fill(img, x, y, w, h, bg);
            outline(img, x, y, w, h, plan.grid_color);

            if !text.is_empty() {
                centered_text(
                    img,
                    &self.fonts.regular,
                    plan,
                    (x, y, w, h),
                    plan.cell_font_size,
                    plan.text_color,
                    text,
                );
            }

            x += w;
        }
    }
}

impl Renderer for ImageRenderer {
    fn encode(&self, table: &RosterTable) -> AppResult<Vec<u8>> {
        let img = self.draw(table);
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, ImageFormat::Png)
            .map_err(|e| AppError::Export(format!("PNG encoding error: {e}")))?;
        Ok(buf.into_inner())
    }
}

fn pixel(c: Rgb) -> Pixel<u8> {
    Pixel([c.0, c.1, c.2])
}

fn fill(img: &mut RgbImage, x: i32, y: i32, w: i32, h: i32, color: Rgb) {
    if w > 0 && h > 0 {
        draw_filled_rect_mut(img, Rect::at(x, y).of_size(w as u32, h as u32), pixel(color));
    }
}

fn outline(img: &mut RgbImage, x: i32, y: i32, w: i32, h: i32, color: Rgb) {
    if w > 0 && h > 0 {
        draw_hollow_rect_mut(img, Rect::at(x, y).of_size(w as u32, h as u32), pixel(color));
    }
}

/// Draws `text` centred horizontally and vertically in `cell` (x, y, w, h).
fn centered_text(
    img: &mut RgbImage,
    font: &RasterFont,
    plan: &LayoutPlan,
    cell: (i32, i32, i32, i32),
    size: f32,
    color: Rgb,
    text: &str,
) {
    let (x, y, w, h) = cell;
    let tw = font.text_width(text, size);
    let th = font.text_height(text, size);

    let tx = plan.centered_x(x as f32, w as f32, tw).round() as i32;
    let ty = y + ((h as f32 - th) / 2.0).max(0.0).round() as i32;

    font.draw(img, tx, ty, size, color, text);
}
