//! Paginated PDF backend (A4 landscape, built-in Helvetica).

use crate::errors::AppResult;
use crate::render::layout::{LayoutPlan, Medium, Rgb, mm_to_pt};
use crate::render::metrics::{Helvetica, TextMetrics, win_ansi_bytes};
use crate::render::{HEADERS, Renderer, RosterTable, TableRow};
use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};

/// Helvetica cap height, as a fraction of the font size.
const CAP_HEIGHT: f32 = 0.718;

pub struct DocumentRenderer {
    page_w: f32,
    page_h: f32,
}

impl Default for DocumentRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentRenderer {
    /// A4 landscape.
    pub fn new() -> Self {
        Self {
            page_w: mm_to_pt(297.0),
            page_h: mm_to_pt(210.0),
        }
    }

    pub fn page_size(&self) -> (f32, f32) {
        (self.page_w, self.page_h)
    }

    /// Data rows that fit on a page below the header band.
    pub fn rows_per_page(&self, plan: &LayoutPlan, first_page: bool) -> usize {
        let mut avail = self.page_h - 2.0 * plan.margin - plan.header_height;
        if first_page {
            avail -= plan.title_height;
        }
        // tolerance for mm -> pt rounding when rows fill the page exactly
        (((avail + 1e-3) / plan.row_height).floor() as usize).max(1)
    }

    /// Pages needed for `plan.row_count` rows. Always at least one.
    pub fn page_count(&self, plan: &LayoutPlan) -> usize {
        let first = self.rows_per_page(plan, true);
        if plan.row_count <= first {
            return 1;
        }
        let rest = self.rows_per_page(plan, false);
        1 + (plan.row_count - first).div_ceil(rest)
    }
}

impl Renderer for DocumentRenderer {
    fn encode(&self, table: &RosterTable) -> AppResult<Vec<u8>> {
        let plan = table.plan(Medium::Document);
        let mut pdf = PdfPages::new(self.page_w, self.page_h, plan);

        let mut remaining: &[TableRow] = &table.rows;
        let mut first_row = 0;
        let mut first_page = true;

        // Almeno una pagina, anche senza righe: titolo + intestazione
        loop {
            let capacity = self.rows_per_page(&pdf.plan, first_page);
            let take = capacity.min(remaining.len());

            let mut content = pdf.new_page();
            let mut top = self.page_h - pdf.plan.margin;

            if first_page {
                pdf.draw_title(&mut content, top, &table.title);
                top -= pdf.plan.title_height;
            }

            pdf.draw_header(&mut content, top);
            top -= pdf.plan.header_height;

            for (i, row) in remaining[..take].iter().enumerate() {
                pdf.draw_row(&mut content, top, first_row + i, row);
                top -= pdf.plan.row_height;
            }

            pdf.finalize_page(content);

            remaining = &remaining[take..];
            first_row += take;
            first_page = false;

            if remaining.is_empty() {
                break;
            }
        }

        Ok(pdf.finish())
    }
}

/// Low-level page assembly.
struct PdfPages {
    pdf: Pdf,
    plan: LayoutPlan,
    catalog_id: Ref,
    pages_id: Ref,
    regular_id: Ref,
    bold_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,
    next_id: i32,
    page_w: f32,
    page_h: f32,
    table_x: f32,
}

impl PdfPages {
    fn new(page_w: f32, page_h: f32, plan: LayoutPlan) -> Self {
        let mut pdf = Pdf::new();

        // ID gestiti a mano
        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let regular_id = Ref::new(3);
        let bold_id = Ref::new(4);

        for (id, face) in [(regular_id, Helvetica::REGULAR), (bold_id, Helvetica::BOLD)] {
            pdf.type1_font(id)
                .base_font(Name(face.base_font()))
                .encoding_predefined(Name(b"WinAnsiEncoding"));
        }

        let table_x = (page_w - plan.table_width()) / 2.0;

        Self {
            pdf,
            plan,
            catalog_id,
            pages_id,
            regular_id,
            bold_id,
            page_refs: Vec::new(),
            current_content_id: None,
            next_id: 5,
            page_w,
            page_h,
            table_x,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    fn new_page(&mut self) -> Content {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
            .contents(content_id);

        page.resources()
            .fonts()
            .pair(Name(Helvetica::REGULAR.resource_name()), self.regular_id)
            .pair(Name(Helvetica::BOLD.resource_name()), self.bold_id);

        self.current_content_id = Some(content_id);

        Content::new()
    }

    fn finalize_page(&mut self, content: Content) {
        if let Some(id) = self.current_content_id.take() {
            self.pdf.stream(id, &content.finish());
        }
    }

    fn finish(mut self) -> Vec<u8> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);

        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.iter().copied());
        drop(pages);

        self.pdf.finish()
    }

    fn draw_title(&self, content: &mut Content, top: f32, title: &str) {
        let face = Helvetica::BOLD;
        let size = self.plan.title_font_size;
        let w = face.text_width(title, size);
        let x = self.plan.centered_x(0.0, self.page_w, w);
        let y = baseline(top - self.plan.title_height, self.plan.title_height, size);

        draw_text(content, face, x, y, size, self.plan.title_color, title);
    }

    fn draw_header(&self, content: &mut Content, top: f32) {
        let plan = &self.plan;
        let y = top - plan.header_height;
        let offsets = plan.column_offsets();

        for (i, label) in HEADERS.iter().enumerate() {
            let x = self.table_x + offsets[i];
            let w = plan.column_widths[i];

            fill_rect(content, x, y, w, plan.header_height, plan.header_color);
            stroke_rect(
                content,
                x,
                y,
                w,
                plan.header_height,
                plan.header_border_color,
                plan.header_border_width,
            );

            let face = Helvetica::BOLD;
            let size = plan.header_font_size;
            let tx = plan.centered_x(x, w, face.text_width(label, size));
            let ty = baseline(y, plan.header_height, size);
            draw_text(content, face, tx, ty, size, plan.header_text_color, label);
        }
    }

    fn draw_row(&self, content: &mut Content, top: f32, index: usize, row: &TableRow) {
        let plan = &self.plan;
        let y = top - plan.row_height;
        let bg = plan.row_color(index, row.is_weekend);
        let offsets = plan.column_offsets();

        fill_rect(content, self.table_x, y, plan.table_width(), plan.row_height, bg);

        for (i, text) in row.cells.iter().enumerate() {
            let x = self.table_x + offsets[i];
            let w = plan.column_widths[i];

            stroke_rect(
                content,
                x,
                y,
                w,
                plan.row_height,
                plan.grid_color,
                plan.grid_line_width,
            );

            if text.is_empty() {
                continue;
            }

            let face = Helvetica::REGULAR;
            let size = plan.cell_font_size;
            let tx = plan.centered_x(x, w, face.text_width(text, size));
            let ty = baseline(y, plan.row_height, size);
            draw_text(content, face, tx, ty, size, plan.text_color, text);
        }
    }
}

/// Baseline that centres the cap height vertically in a band.
fn baseline(bottom: f32, height: f32, size: f32) -> f32 {
    bottom + (height - size * CAP_HEIGHT) / 2.0
}

fn draw_text(
    content: &mut Content,
    face: Helvetica,
    x: f32,
    y: f32,
    size: f32,
    color: Rgb,
    text: &str,
) {
    let (r, g, b) = color.to_unit();
    let bytes = win_ansi_bytes(text);

    content.save_state();
    content.set_fill_rgb(r, g, b);
    content.begin_text();
    content.set_font(Name(face.resource_name()), size);
    content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
    content.show(Str(&bytes));
    content.end_text();
    content.restore_state();
}

fn fill_rect(content: &mut Content, x: f32, y: f32, w: f32, h: f32, color: Rgb) {
    let (r, g, b) = color.to_unit();
    content.save_state();
    content.set_fill_rgb(r, g, b);
    content.rect(x, y, w, h);
    content.fill_nonzero();
    content.restore_state();
}

fn stroke_rect(content: &mut Content, x: f32, y: f32, w: f32, h: f32, color: Rgb, width: f32) {
    let (r, g, b) = color.to_unit();
    content.save_state();
    content.set_stroke_rgb(r, g, b);
    content.set_line_width(width);
    content.rect(x, y, w, h);
    content.stroke();
    content.restore_state();
}
