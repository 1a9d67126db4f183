//! Printable document export
//!
//! A single table across as many A4 pages as the rows need. The header row
//! repeats on every page. Styling is fixed.
//!
//! Layout is computed first as plain data ([`DocumentLayout`]) and then drawn
//! with `printpdf`, so wrapping and pagination can be checked without
//! reading PDF bytes back.

use super::table::ExportTable;
use super::{ExportFormat, Renderer};
use crate::domain::{RegistryError, Result};
use printpdf::path::{PaintMode, WindingOrder};
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfLayerReference, Point, Polygon, Rgb,
};
use std::io::BufWriter;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 14.0;

const PT_TO_MM: f32 = 0.352_778;
pub const FONT_SIZE_PT: f32 = 8.0;
pub const CELL_PADDING_PT: f32 = 3.0;
const LINE_HEIGHT_FACTOR: f32 = 1.15;
// Rough Helvetica advance per character, as a fraction of the font size
const AVG_CHAR_WIDTH_EM: f32 = 0.55;

pub const HEADER_FILL: (u8, u8, u8) = (22, 160, 133);
pub const HEADER_TEXT: (u8, u8, u8) = (255, 255, 255);
pub const BODY_TEXT: (u8, u8, u8) = (0, 0, 0);
pub const ALTERNATE_ROW_FILL: (u8, u8, u8) = (245, 245, 245);

const DOCUMENT_TITLE: &str = "Registrations";

/// One table row placed on a page
///
/// Each cell holds its wrapped lines; the row is as tall as its tallest cell.
#[derive(Debug, Clone, PartialEq)]
pub struct RowLayout {
    pub cells: Vec<Vec<String>>,
    pub height_mm: f32,
}

impl RowLayout {
    fn wrap(row: &[String], max_chars: usize, line_height_mm: f32, padding_mm: f32) -> Self {
        let cells: Vec<Vec<String>> = row.iter().map(|cell| wrap_cell(cell, max_chars)).collect();
        let lines = cells.iter().map(Vec::len).max().unwrap_or(0).max(1);
        Self {
            cells,
            height_mm: lines as f32 * line_height_mm + 2.0 * padding_mm,
        }
    }

    /// Lines in the tallest cell
    pub fn line_count(&self) -> usize {
        self.cells.iter().map(Vec::len).max().unwrap_or(0).max(1)
    }
}

/// Rows that land on one page
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    /// Index of the first body row on this page, across the whole table
    pub first_row: usize,

    pub rows: Vec<RowLayout>,
}

impl PageLayout {
    pub fn body_height_mm(&self) -> f32 {
        self.rows.iter().map(|r| r.height_mm).sum()
    }
}

/// Complete placement of a table on pages
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentLayout {
    /// Header row, repeated at the top of every page
    pub header: RowLayout,

    pub column_width_mm: f32,
    pub line_height_mm: f32,

    /// Height left for body rows under the header
    pub body_capacity_mm: f32,

    pub pages: Vec<PageLayout>,
}

impl DocumentLayout {
    /// Lay out `table` on A4 portrait pages
    ///
    /// Cell text wraps at word boundaries; a word wider than its column is
    /// split across lines. Pages fill by accumulated row height. Always
    /// yields at least one page, even with no body rows.
    pub fn compute(table: &ExportTable) -> Self {
        let usable_width = PAGE_WIDTH_MM - 2.0 * MARGIN_MM;
        let usable_height = PAGE_HEIGHT_MM - 2.0 * MARGIN_MM;
        let columns = table.column_count().max(1);

        let column_width_mm = usable_width / columns as f32;
        let padding_mm = CELL_PADDING_PT * PT_TO_MM;
        let line_height_mm = FONT_SIZE_PT * PT_TO_MM * LINE_HEIGHT_FACTOR;
        let max_chars = max_chars_for_width(column_width_mm - 2.0 * padding_mm);

        let header = RowLayout::wrap(&table.header, max_chars, line_height_mm, padding_mm);
        let body_capacity_mm = usable_height - header.height_mm;

        let mut pages = vec![PageLayout {
            first_row: 0,
            rows: Vec::new(),
        }];
        let mut used_mm = 0.0;

        for (index, row) in table.rows.iter().enumerate() {
            let row = RowLayout::wrap(row, max_chars, line_height_mm, padding_mm);

            // a row taller than a whole page still gets a page to itself
            let page_full = used_mm + row.height_mm > body_capacity_mm;
            if page_full && pages.last().map_or(false, |p| !p.rows.is_empty()) {
                pages.push(PageLayout {
                    first_row: index,
                    rows: Vec::new(),
                });
                used_mm = 0.0;
            }

            used_mm += row.height_mm;
            if let Some(page) = pages.last_mut() {
                page.rows.push(row);
            }
        }

        Self {
            header,
            column_width_mm,
            line_height_mm,
            body_capacity_mm,
            pages,
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

/// Whether a body row gets the alternate shading
pub fn is_shaded(row_index: usize) -> bool {
    row_index % 2 == 1
}

fn max_chars_for_width(width_mm: f32) -> usize {
    let char_width_mm = FONT_SIZE_PT * PT_TO_MM * AVG_CHAR_WIDTH_EM;
    ((width_mm / char_width_mm).floor() as usize).max(1)
}

/// Break cell text into lines of at most `max_chars` characters
///
/// Lines break between words. A single word longer than a line is split
/// into line-sized pieces. Empty text gives no lines.
pub fn wrap_cell(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();
        let mut current_len = 0;

        for word in paragraph.split_whitespace() {
            let word_len = word.chars().count();
            let joined_len = if current_len == 0 {
                word_len
            } else {
                current_len + 1 + word_len
            };

            if joined_len <= max_chars {
                if current_len > 0 {
                    current.push(' ');
                }
                current.push_str(word);
                current_len = joined_len;
                continue;
            }

            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }

            let chars: Vec<char> = word.chars().collect();
            let mut pieces = chars.chunks(max_chars).peekable();
            while let Some(piece) = pieces.next() {
                let piece_text: String = piece.iter().collect();
                if pieces.peek().is_some() {
                    lines.push(piece_text);
                } else {
                    current = piece_text;
                    current_len = piece.len();
                }
            }
        }

        if current_len > 0 {
            lines.push(current);
        }
    }

    lines
}

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(Rgb::new(
        f32::from(r) / 255.0,
        f32::from(g) / 255.0,
        f32::from(b) / 255.0,
        None,
    ))
}

fn pdf_error(context: &str, e: impl std::fmt::Display) -> RegistryError {
    RegistryError::Render(format!("PDF {context} error: {e}"))
}

/// Renders an [`ExportTable`] into a paginated PDF
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentRenderer;

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

impl DocumentRenderer {
    pub fn new() -> Self {
        Self
    }

    fn fill_row(layer: &PdfLayerReference, top: f32, height: f32, fill: (u8, u8, u8)) {
        let (left, right, bottom) = (MARGIN_MM, PAGE_WIDTH_MM - MARGIN_MM, top - height);
        layer.set_fill_color(rgb(fill));
        layer.add_polygon(Polygon {
            rings: vec![vec![
                (Point::new(Mm(left), Mm(bottom)), false),
                (Point::new(Mm(right), Mm(bottom)), false),
                (Point::new(Mm(right), Mm(top)), false),
                (Point::new(Mm(left), Mm(top)), false),
            ]],
            mode: PaintMode::Fill,
            winding_order: WindingOrder::NonZero,
        });
    }

    fn write_cells(
        layer: &PdfLayerReference,
        layout: &DocumentLayout,
        row: &RowLayout,
        top: f32,
        font: &IndirectFontRef,
        color: (u8, u8, u8),
    ) {
        let padding_mm = CELL_PADDING_PT * PT_TO_MM;
        let first_baseline = top - padding_mm - FONT_SIZE_PT * PT_TO_MM;
        layer.set_fill_color(rgb(color));
        for (col, lines) in row.cells.iter().enumerate() {
            let x = MARGIN_MM + col as f32 * layout.column_width_mm + padding_mm;
            for (line_no, line) in lines.iter().enumerate() {
                let baseline = first_baseline - line_no as f32 * layout.line_height_mm;
                layer.use_text(line.as_str(), FONT_SIZE_PT, Mm(x), Mm(baseline), font);
            }
        }
    }

    fn draw_page(layer: &PdfLayerReference, layout: &DocumentLayout, page: &PageLayout, fonts: &Fonts) {
        let mut top = PAGE_HEIGHT_MM - MARGIN_MM;

        Self::fill_row(layer, top, layout.header.height_mm, HEADER_FILL);
        Self::write_cells(layer, layout, &layout.header, top, &fonts.bold, HEADER_TEXT);
        top -= layout.header.height_mm;

        for (offset, row) in page.rows.iter().enumerate() {
            if is_shaded(page.first_row + offset) {
                Self::fill_row(layer, top, row.height_mm, ALTERNATE_ROW_FILL);
            }
            Self::write_cells(layer, layout, row, top, &fonts.regular, BODY_TEXT);
            top -= row.height_mm;
        }
    }
}

impl Renderer for DocumentRenderer {
    fn format(&self) -> ExportFormat {
        ExportFormat::Document
    }

    fn render(&self, table: &ExportTable) -> Result<Vec<u8>> {
        let layout = DocumentLayout::compute(table);

        let (doc, first_page, first_layer) = PdfDocument::new(
            DOCUMENT_TITLE,
            Mm(PAGE_WIDTH_MM),
            Mm(PAGE_HEIGHT_MM),
            "Layer 1",
        );
        let fonts = Fonts {
            regular: doc
                .add_builtin_font(BuiltinFont::Helvetica)
                .map_err(|e| pdf_error("font", e))?,
            bold: doc
                .add_builtin_font(BuiltinFont::HelveticaBold)
                .map_err(|e| pdf_error("font", e))?,
        };

        for (i, page) in layout.pages.iter().enumerate() {
            let (page_idx, layer_idx) = if i == 0 {
                (first_page, first_layer)
            } else {
                doc.add_page(
                    Mm(PAGE_WIDTH_MM),
                    Mm(PAGE_HEIGHT_MM),
                    format!("Layer {}", i + 1),
                )
            };
            let layer = doc.get_page(page_idx).get_layer(layer_idx);
            Self::draw_page(&layer, &layout, page, &fonts);
        }

        let mut buf = BufWriter::new(Vec::new());
        doc.save(&mut buf).map_err(|e| pdf_error("save", e))?;
        let bytes = buf.into_inner().map_err(|e| pdf_error("buffer", e))?;

        tracing::debug!(
            rows = table.row_count(),
            pages = layout.page_count(),
            bytes = bytes.len(),
            "Document rendered"
        );

        Ok(bytes)
    }
}
