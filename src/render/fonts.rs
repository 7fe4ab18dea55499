//! Fonts for the raster backend.
//!
//! The configured TrueType file is tried first, then a few well-known system
//! locations. If none loads, a built-in 8x8 bitmap face is used so the render
//! still completes.

use crate::render::layout::Rgb;
use crate::render::metrics::TextMetrics;
use crate::ui::messages::warning;
use ab_glyph::{Font, FontVec, PxScale, ScaleFont};
use font8x8::{BASIC_FONTS, LATIN_FONTS, UnicodeFonts};
use image::{Rgb as Pixel, RgbImage};
use std::fs;
use std::path::{Path, PathBuf};

const SYSTEM_REGULAR: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

const SYSTEM_BOLD: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/Library/Fonts/Arial Bold.ttf",
    "C:\\Windows\\Fonts\\arialbd.ttf",
];

pub enum RasterFont {
    Outline(FontVec),
    Bitmap,
}

impl RasterFont {
    /// First candidate that parses as a font, or the bitmap face.
    pub fn load(candidates: &[PathBuf]) -> Self {
        candidates
            .iter()
            .find_map(|p| Self::from_file(p))
            .unwrap_or(RasterFont::Bitmap)
    }

    pub fn from_file(path: &Path) -> Option<Self> {
        let bytes = fs::read(path).ok()?;
        FontVec::try_from_vec(bytes).ok().map(RasterFont::Outline)
    }

    pub fn is_bitmap(&self) -> bool {
        matches!(self, RasterFont::Bitmap)
    }

    /// Height of the drawn glyph box for `size`.
    pub fn text_height(&self, text: &str, size: f32) -> f32 {
        match self {
            RasterFont::Outline(font) => {
                imageproc::drawing::text_size(PxScale::from(size), font, text).1 as f32
            }
            RasterFont::Bitmap => 8.0 * bitmap_scale(size) as f32,
        }
    }

    /// Draws `text` with its top-left corner at (`x`, `y`).
    pub fn draw(&self, img: &mut RgbImage, x: i32, y: i32, size: f32, color: Rgb, text: &str) {
        let px = Pixel([color.0, color.1, color.2]);
        match self {
            RasterFont::Outline(font) => {
                imageproc::drawing::draw_text_mut(img, px, x, y, PxScale::from(size), font, text);
            }
            RasterFont::Bitmap => draw_bitmap_text(img, x, y, bitmap_scale(size), px, text),
        }
    }
}

impl TextMetrics for RasterFont {
    fn text_width(&self, text: &str, size: f32) -> f32 {
        match self {
            RasterFont::Outline(font) => {
                let scaled = font.as_scaled(PxScale::from(size));
                let mut width = 0.0;
                let mut prev = None;
                for c in text.chars() {
                    let id = scaled.glyph_id(c);
                    if let Some(p) = prev {
                        width += scaled.kern(p, id);
                    }
                    width += scaled.h_advance(id);
                    prev = Some(id);
                }
                width
            }
            RasterFont::Bitmap => (text.chars().count() * 8) as f32 * bitmap_scale(size) as f32,
        }
    }
}

/// Regular face for cells, bold face for title and header.
pub struct FontSet {
    pub regular: RasterFont,
    pub bold: RasterFont,
}

impl FontSet {
    /// Loads the preferred files, falling back to system fonts and finally
    /// to the bitmap face. Never fails.
    pub fn load(regular: Option<&Path>, bold: Option<&Path>) -> Self {
        let regular = RasterFont::load(&candidates(regular, SYSTEM_REGULAR));
        let bold = RasterFont::load(&candidates(bold, SYSTEM_BOLD));

        if regular.is_bitmap() || bold.is_bitmap() {
            warning("TrueType font not available, using the built-in bitmap font.");
        }

        Self { regular, bold }
    }

    /// Bitmap faces only; output does not depend on installed fonts.
    pub fn bitmap() -> Self {
        Self {
            regular: RasterFont::Bitmap,
            bold: RasterFont::Bitmap,
        }
    }
}

fn candidates(preferred: Option<&Path>, system: &[&str]) -> Vec<PathBuf> {
    preferred
        .map(Path::to_path_buf)
        .into_iter()
        .chain(system.iter().map(PathBuf::from))
        .collect()
}

fn bitmap_scale(size: f32) -> u32 {
    ((size / 8.0).round() as u32).max(1)
}

fn bitmap_glyph(c: char) -> [u8; 8] {
    BASIC_FONTS
        .get(c)
        .or_else(|| LATIN_FONTS.get(c))
        .or_else(|| BASIC_FONTS.get('?'))
        .unwrap_or([0; 8])
}

fn draw_bitmap_text(img: &mut RgbImage, x: i32, y: i32, scale: u32, px: Pixel<u8>, text: &str) {
    let step = 8 * scale as i32;
    for (i, c) in text.chars().enumerate() {
        let glyph = bitmap_glyph(c);
        let gx = x + i as i32 * step;
        for (row, bits) in glyph.iter().enumerate() {
            for col in 0..8 {
                // bit 0 is the leftmost pixel
                if bits & (1 << col) == 0 {
                    continue;
                }
                for dy in 0..scale as i32 {
                    for dx in 0..scale as i32 {
                        let px_x = gx + col * scale as i32 + dx;
                        let px_y = y + row as i32 * scale as i32 + dy;
                        if px_x >= 0
                            && px_y >= 0
                            && (px_x as u32) < img.width()
                            && (px_y as u32) < img.height()
                        {
                            img.put_pixel(px_x as u32, px_y as u32, px);
                        }
                    }
                }
            }
        }
    }
}
