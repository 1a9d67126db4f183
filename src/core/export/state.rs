//! In-flight export state of a dialog session

use crate::core::render::ExportFormat;
use serde::Serialize;

/// What the dialog is waiting on
///
/// Exports are mutually exclusive: at most one format is in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportState {
    #[default]
    Idle,
    FetchingSpreadsheet,
    FetchingDocument,
}

impl ExportState {
    /// State for an export of `format` awaiting its response
    pub fn fetching(format: ExportFormat) -> Self {
        match format {
            ExportFormat::Spreadsheet => ExportState::FetchingSpreadsheet,
            ExportFormat::Document => ExportState::FetchingDocument,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, ExportState::Idle)
    }

    /// Format of the export in flight, if any
    pub fn in_flight(&self) -> Option<ExportFormat> {
        match self {
            ExportState::Idle => None,
            ExportState::FetchingSpreadsheet => Some(ExportFormat::Spreadsheet),
            ExportState::FetchingDocument => Some(ExportFormat::Document),
        }
    }

    /// Whether the button for `format` shows as loading
    pub fn is_fetching(&self, format: ExportFormat) -> bool {
        self.in_flight() == Some(format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        let state = ExportState::default();
        assert!(state.is_idle());
        assert_eq!(state.in_flight(), None);
    }

    #[test]
    fn test_fetching_tracks_format() {
        let state = ExportState::fetching(ExportFormat::Document);
        assert!(!state.is_idle());
        assert!(state.is_fetching(ExportFormat::Document));
        assert!(!state.is_fetching(ExportFormat::Spreadsheet));
        assert_eq!(state.in_flight(), Some(ExportFormat::Document));
    }
}
