//! Monthly transaction export rendered with printpdf.
//!
//! Lays out a [`MonthTable`] on A4 portrait pages using the builtin Helvetica fonts.
//! The column header row is repeated at the top of each continuation page.

use std::io::BufWriter;

use printpdf::{
    BuiltinFont, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference, PdfLayerIndex,
    PdfPageIndex, Point,
};

use crate::server::{
    error::{internal::InternalError, AppError},
    model::report::{MonthTable, MONTH_TABLE_HEADERS},
};

// A4 portrait (mm)
const PAGE_W: f32 = 210.0;
const PAGE_H: f32 = 297.0;
const MARGIN_TOP: f32 = 20.0;
const MARGIN_BOTTOM: f32 = 20.0;
const MARGIN_LEFT: f32 = 15.0;
const MARGIN_RIGHT: f32 = 15.0;
const ROW_H: f32 = 5.5;
const FONT_SIZE: f32 = 8.0;
const HEADER_SIZE: f32 = 9.0;
const TITLE_SIZE: f32 = 16.0;

/// Column widths in mm, one per entry of `MONTH_TABLE_HEADERS`.
const COLUMNS: [Col; 6] = [
    Col { width: 20.0, align: Align::Left },
    Col { width: 46.0, align: Align::Left },
    Col { width: 30.0, align: Align::Left },
    Col { width: 20.0, align: Align::Right },
    Col { width: 20.0, align: Align::Right },
    Col { width: 44.0, align: Align::Left },
];

fn approx_text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * 0.18
}

fn pdf_err(e: impl std::fmt::Debug) -> AppError {
    InternalError::PdfRender(format!("{e:?}")).into()
}

#[derive(Clone, Copy)]
enum Align {
    Left,
    Right,
}

struct Col {
    width: f32,
    align: Align,
}

struct PdfWriter {
    doc: PdfDocumentReference,
    font: IndirectFontRef,
    font_bold: IndirectFontRef,
    current_page: PdfPageIndex,
    current_layer: PdfLayerIndex,
    /// Distance from the top edge of the current page.
    y: f32,
}

impl PdfWriter {
    fn new(title: &str) -> Result<Self, AppError> {
        let (doc, page, layer) = PdfDocument::new(title, Mm(PAGE_W), Mm(PAGE_H), "Layer 1");
        let font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(pdf_err)?;
        let font_bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(pdf_err)?;

        Ok(Self {
            doc,
            font,
            font_bold,
            current_page: page,
            current_layer: layer,
            y: MARGIN_TOP,
        })
    }

    fn pdf_y(&self) -> f32 {
        PAGE_H - self.y
    }

    fn new_page(&mut self) {
        let (page, layer) = self.doc.add_page(Mm(PAGE_W), Mm(PAGE_H), "Layer");
        self.current_page = page;
        self.current_layer = layer;
        self.y = MARGIN_TOP;
    }

    /// Starts a new page when `needed` mm do not fit. Returns whether it did.
    fn ensure_space(&mut self, needed: f32) -> bool {
        if self.y + needed > PAGE_H - MARGIN_BOTTOM {
            self.new_page();
            return true;
        }
        false
    }

    fn text(&self, s: &str, x: f32, size: f32, bold: bool) {
        let font = if bold { &self.font_bold } else { &self.font };
        let layer = self
            .doc
            .get_page(self.current_page)
            .get_layer(self.current_layer);
        layer.use_text(s, size, Mm(x), Mm(self.pdf_y()), font);
    }

    fn hline(&self) {
        let layer = self
            .doc
            .get_page(self.current_page)
            .get_layer(self.current_layer);
        layer.set_outline_thickness(0.5);
        layer.add_line(Line {
            points: vec![
                (Point::new(Mm(MARGIN_LEFT), Mm(self.pdf_y())), false),
                (Point::new(Mm(PAGE_W - MARGIN_RIGHT), Mm(self.pdf_y())), false),
            ],
            is_closed: false,
        });
    }

    fn title(&mut self, title: &str) {
        self.text(title, MARGIN_LEFT, TITLE_SIZE, true);
        self.y += 12.0;
    }

    fn cells(&self, values: &[String], size: f32, bold: bool) {
        let mut x = MARGIN_LEFT;
        for (col, value) in COLUMNS.iter().zip(values) {
            match col.align {
                Align::Left => self.text(value, x, size, bold),
                Align::Right => {
                    let tw = approx_text_width(value, size);
                    self.text(value, x + col.width - tw, size, bold);
                }
            }
            x += col.width;
        }
    }

    fn table_header(&mut self) {
        let headers = MONTH_TABLE_HEADERS.map(str::to_string);
        self.cells(&headers, HEADER_SIZE, true);
        self.y += ROW_H - 2.0;
        self.hline();
        self.y += 4.0;
    }

    fn table_row(&mut self, values: &[String], bold: bool) {
        if self.ensure_space(ROW_H) {
            self.table_header();
        }
        self.cells(values, FONT_SIZE, bold);
        self.y += ROW_H;
    }

    fn separator(&mut self) {
        if self.ensure_space(ROW_H) {
            self.table_header();
        }
        self.y -= 3.0;
        self.hline();
        self.y += 4.0;
    }

    fn to_bytes(self) -> Result<Vec<u8>, AppError> {
        let mut buf = BufWriter::new(Vec::new());
        self.doc.save(&mut buf).map_err(pdf_err)?;
        buf.into_inner().map_err(|e| pdf_err(e.error()))
    }
}

/// Renders a month's transaction table as a PDF document.
///
/// # Arguments
/// - `table` - Formatted rows and summary for the month
/// - `business_name` - Shown in the document title
///
/// # Returns
/// - `Ok(Vec<u8>)` - PDF bytes
/// - `Err(AppError::InternalErr(PdfRender))` - printpdf failed
pub fn render_month(table: &MonthTable, business_name: &str) -> Result<Vec<u8>, AppError> {
    let title = format!(
        "{} - {}/{}",
        business_name,
        table.period.month(),
        table.period.year()
    );

    let mut pdf = PdfWriter::new(&title)?;
    pdf.title(&title);
    pdf.table_header();

    for row in &table.rows {
        pdf.table_row(row, false);
    }

    pdf.separator();
    for row in &table.summary {
        pdf.table_row(row, true);
    }

    pdf.to_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::model::period::YearMonth;

    fn table(rows: usize) -> MonthTable {
        let row = [
            "2025-03-01".to_string(),
            "Fahrstunde".to_string(),
            "Einnahmen Fahrstunden".to_string(),
            "95.00".to_string(),
            String::new(),
            String::new(),
        ];
        let mut table = MonthTable::build(YearMonth::new(2025, 3).unwrap(), &[]);
        table.rows = vec![row; rows];
        table
    }

    #[test]
    fn renders_empty_month() {
        let bytes = render_month(&table(0), "Fahrschule Saferide").unwrap();

        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn long_month_spans_pages() {
        let short = render_month(&table(5), "Fahrschule Saferide").unwrap();
        let long = render_month(&table(200), "Fahrschule Saferide").unwrap();

        assert!(long.starts_with(b"%PDF"));
        assert!(long.len() > short.len());
    }
}
