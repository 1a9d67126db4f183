//! Spreadsheet export
//!
//! One worksheet, header in the first row, every cell written as a string,
//! every column the same width.

use super::table::ExportTable;
use super::{ExportFormat, Renderer};
use crate::domain::{RegistryError, Result};
use rust_xlsxwriter::Workbook;

/// Width of every column, in pixels
pub const COLUMN_WIDTH_PX: u16 = 150;

/// Default worksheet name
pub const DEFAULT_SHEET_NAME: &str = "Registrations";

/// Renders an [`ExportTable`] into an `.xlsx` workbook
#[derive(Debug, Clone)]
pub struct SpreadsheetRenderer {
    sheet_name: String,
}

impl SpreadsheetRenderer {
    pub fn new(sheet_name: impl Into<String>) -> Self {
        Self {
            sheet_name: sheet_name.into(),
        }
    }
}

impl Default for SpreadsheetRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_SHEET_NAME)
    }
}

impl Renderer for SpreadsheetRenderer {
    fn format(&self) -> ExportFormat {
        ExportFormat::Spreadsheet
    }

    fn render(&self, table: &ExportTable) -> Result<Vec<u8>> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&self.sheet_name)?;

        for (col, label) in table.header.iter().enumerate() {
            let col = column_index(col)?;
            worksheet.write_string(0, col, label)?;
            worksheet.set_column_width_pixels(col, COLUMN_WIDTH_PX)?;
        }

        for (row_idx, row) in table.rows.iter().enumerate() {
            let row_num = u32::try_from(row_idx + 1)
                .map_err(|_| RegistryError::Render("Too many rows for a worksheet".to_string()))?;
            for (col, text) in row.iter().enumerate() {
                if text.is_empty() {
                    continue;
                }
                worksheet.write_string(row_num, column_index(col)?, text)?;
            }
        }

        let bytes = workbook.save_to_buffer()?;

        tracing::debug!(
            rows = table.row_count(),
            columns = table.column_count(),
            bytes = bytes.len(),
            "Spreadsheet rendered"
        );

        Ok(bytes)
    }
}

fn column_index(col: usize) -> Result<u16> {
    u16::try_from(col)
        .map_err(|_| RegistryError::Render("Too many columns for a worksheet".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};

    fn part(bytes: &[u8], name: &str) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut xml = String::new();
        archive
            .by_name(name)
            .unwrap()
            .read_to_string(&mut xml)
            .unwrap();
        xml
    }

    fn table() -> ExportTable {
        ExportTable {
            header: vec!["Name".to_string(), "Email".to_string()],
            rows: vec![
                vec!["Asha".to_string(), "asha@example.org".to_string()],
                vec!["Ravi".to_string(), String::new()],
            ],
        }
    }

    #[test]
    fn test_render_produces_zip_container() {
        let bytes = SpreadsheetRenderer::default().render(&table()).unwrap();
        // xlsx is a zip archive
        assert_eq!(&bytes[0..2], b"PK");
    }

    #[test]
    fn test_workbook_contents_read_back() {
        let bytes = SpreadsheetRenderer::default().render(&table()).unwrap();

        let workbook = part(&bytes, "xl/workbook.xml");
        assert!(workbook.contains(r#"name="Registrations""#));

        let sheet = part(&bytes, "xl/worksheets/sheet1.xml");
        for row in ["1", "2", "3"] {
            assert!(sheet.contains(&format!(r#"<row r="{row}""#)));
        }
        assert!(!sheet.contains(r#"<row r="4""#));
        assert!(sheet.contains("<cols>"));
        assert!(sheet.contains(r#"customWidth="1""#));
        assert!(sheet.contains(r#"r="B2""#));
        // blank cells are not written
        assert!(!sheet.contains(r#"r="B3""#));

        let strings = part(&bytes, "xl/sharedStrings.xml");
        let positions: Vec<usize> = ["Name", "Email", "Asha", "asha@example.org", "Ravi"]
            .iter()
            .map(|s| strings.find(&format!("<t>{s}</t>")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_render_header_only() {
        let empty = ExportTable {
            header: vec!["Name".to_string()],
            rows: vec![],
        };
        assert!(SpreadsheetRenderer::default().render(&empty).is_ok());
    }

    #[test]
    fn test_render_rejects_invalid_sheet_name() {
        let renderer = SpreadsheetRenderer::new("bad/name");
        assert!(matches!(
            renderer.render(&table()),
            Err(RegistryError::Render(_))
        ));
    }

    #[test]
    fn test_format_and_file_name() {
        let renderer = SpreadsheetRenderer::default();
        assert_eq!(renderer.format(), ExportFormat::Spreadsheet);
        assert_eq!(renderer.format().file_name(), "registrations.xlsx");
    }
}
