mod common;

use common::sample_schedule;
use rplantao::models::Schedule;
use rplantao::render::layout::{
    EVEN_ROW_COLOR, HEADER_COLOR, ODD_ROW_COLOR, WEEKEND_COLOR, mm_to_pt, row_color,
};
use rplantao::render::{ImageRenderer, LayoutPlan, Medium};

#[test]
fn test_compute_is_pure() {
    let s = sample_schedule(2024, 7);

    for medium in [Medium::Document, Medium::Raster] {
        let a = LayoutPlan::compute(&s, medium);
        let b = LayoutPlan::compute(&s, medium);
        assert_eq!(a, b);
        assert_eq!(a.header_color, HEADER_COLOR);
        for i in 0..s.len() {
            assert_eq!(a.row_color(i, false), b.row_color(i, false));
            assert_eq!(a.row_color(i, true), b.row_color(i, true));
        }
    }
}

#[test]
fn test_plan_depends_only_on_row_count() {
    let filled = sample_schedule(2024, 7);
    let blank = Schedule::blank(2025, 10).unwrap();
    assert_eq!(filled.len(), blank.len());

    assert_eq!(
        LayoutPlan::compute(&filled, Medium::Raster),
        LayoutPlan::compute(&blank, Medium::Raster)
    );
}

#[test]
fn test_column_ratio_shared_between_media() {
    let doc = LayoutPlan::for_rows(31, Medium::Document);
    let img = LayoutPlan::for_rows(31, Medium::Raster);

    let dr = doc.column_ratio();
    let ir = img.column_ratio();
    for i in 0..5 {
        assert!((dr[i] - ir[i]).abs() < 1e-4, "column {i}: {} vs {}", dr[i], ir[i]);
    }

    // two narrow columns, three equal shift columns
    let w = img.column_widths;
    assert!(w[0] < w[2] && w[1] < w[2]);
    assert_eq!(w[2], w[3]);
    assert_eq!(w[3], w[4]);

    let doc_to_img = img.row_height / doc.row_height;
    assert!((img.header_height / doc.header_height - doc_to_img).abs() < 1e-4);
    assert!((img.margin / doc.margin - doc_to_img).abs() < 1e-4);
    assert!((img.cell_font_size / doc.cell_font_size - doc_to_img).abs() < 1e-4);
}

#[test]
fn test_document_units_are_points() {
    let doc = LayoutPlan::for_rows(0, Medium::Document);

    // 35 / 40 / 60 / 60 / 60 mm columns and 15 mm margins
    let expected = [35.0, 40.0, 60.0, 60.0, 60.0].map(mm_to_pt);
    for (w, e) in doc.column_widths.iter().zip(expected) {
        assert!((w - e).abs() < 1e-3);
    }
    assert!((doc.margin - mm_to_pt(15.0)).abs() < 1e-3);
}

#[test]
fn test_row_colors() {
    let plan = LayoutPlan::for_rows(31, Medium::Raster);

    for i in 0..31 {
        assert_eq!(plan.row_color(i, true), WEEKEND_COLOR);
    }

    assert_eq!(plan.row_color(0, false), EVEN_ROW_COLOR);
    assert_eq!(plan.row_color(1, false), ODD_ROW_COLOR);
    assert_eq!(plan.row_color(2, false), EVEN_ROW_COLOR);

    // alternation follows the raw row index, weekend rows in between do not shift it
    assert_eq!(row_color(7, false), ODD_ROW_COLOR);
    assert_eq!(row_color(8, false), EVEN_ROW_COLOR);
}

#[test]
fn test_raster_canvas_size() {
    let plan = LayoutPlan::for_rows(31, Medium::Raster);
    assert_eq!(ImageRenderer::canvas_size(&plan), (1026, 1332));

    let empty = LayoutPlan::for_rows(0, Medium::Raster);
    assert_eq!(ImageRenderer::canvas_size(&empty), (1026, 216));
}

#[test]
fn test_centered_x() {
    let plan = LayoutPlan::for_rows(1, Medium::Raster);

    assert_eq!(plan.centered_x(100.0, 200.0, 50.0), 175.0);
    // wider than the cell: start at the left edge
    assert_eq!(plan.centered_x(100.0, 200.0, 260.0), 100.0);
}

#[test]
fn test_column_offsets() {
    let plan = LayoutPlan::for_rows(1, Medium::Raster);
    assert_eq!(plan.column_offsets(), [0.0, 126.0, 270.0, 486.0, 702.0]);
    assert_eq!(plan.table_width(), 918.0);
}
