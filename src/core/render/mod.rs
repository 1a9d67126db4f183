//! Export renderers
//!
//! Both formats start from the same [`ExportTable`]:
//!
//! - [`SpreadsheetRenderer`] - `registrations.xlsx`
//! - [`DocumentRenderer`] - `registrations.pdf`

pub mod document;
pub mod spreadsheet;
pub mod table;

pub use document::{DocumentLayout, DocumentRenderer};
pub use spreadsheet::SpreadsheetRenderer;
pub use table::{build_table, ExportTable};

use crate::domain::{Result, ValidationError};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Output format of an export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Spreadsheet (`.xlsx`)
    Spreadsheet,
    /// Printable document (`.pdf`)
    Document,
}

impl ExportFormat {
    /// Name of the produced file
    pub fn file_name(&self) -> &'static str {
        match self {
            ExportFormat::Spreadsheet => "registrations.xlsx",
            ExportFormat::Document => "registrations.pdf",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Spreadsheet => write!(f, "xlsx"),
            ExportFormat::Document => write!(f, "pdf"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ValidationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "xlsx" | "excel" | "csv" | "spreadsheet" => Ok(Self::Spreadsheet),
            "pdf" | "document" => Ok(Self::Document),
            _ => Err(ValidationError::InvalidFormat(s.to_string())),
        }
    }
}

/// Turns a table into file bytes
pub trait Renderer: Send + Sync {
    fn format(&self) -> ExportFormat;

    /// # Errors
    ///
    /// Returns a render error if the underlying library fails.
    fn render(&self, table: &ExportTable) -> Result<Vec<u8>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("xlsx", ExportFormat::Spreadsheet)]
    #[test_case("Excel", ExportFormat::Spreadsheet)]
    #[test_case("csv", ExportFormat::Spreadsheet)]
    #[test_case("PDF", ExportFormat::Document)]
    #[test_case(" document ", ExportFormat::Document)]
    fn test_export_format_from_str(input: &str, expected: ExportFormat) {
        assert_eq!(input.parse::<ExportFormat>().unwrap(), expected);
    }

    #[test]
    fn test_export_format_from_str_invalid() {
        assert_eq!(
            "docx".parse::<ExportFormat>(),
            Err(ValidationError::InvalidFormat("docx".to_string()))
        );
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for format in [ExportFormat::Spreadsheet, ExportFormat::Document] {
            assert_eq!(format.to_string().parse::<ExportFormat>().unwrap(), format);
        }
    }
}
