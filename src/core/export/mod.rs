//! Export orchestration
//!
//! - [`ExportCoordinator`] - validate, fetch, clean, render, deliver
//! - [`ExportState`] - what a dialog session is waiting on

pub mod coordinator;
pub mod state;

pub use coordinator::ExportCoordinator;
pub use state::ExportState;

use crate::core::render::ExportFormat;
use crate::domain::{FieldSelection, WireDateRange};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// A validated export request, ready to be fetched
#[derive(Debug, Clone)]
pub struct ExportJob {
    pub format: ExportFormat,
    pub range: WireDateRange,
    pub fields: FieldSelection,
    pub started: Instant,
}

/// Rendered file bytes not yet handed to the sink
#[derive(Debug, Clone)]
pub struct RenderedExport {
    pub format: ExportFormat,
    pub bytes: Vec<u8>,
    pub records: usize,
}

/// Result of a delivered export
#[derive(Debug, Clone, PartialEq)]
pub struct ExportReceipt {
    pub format: ExportFormat,
    pub path: PathBuf,
    pub records: usize,
    pub duration: Duration,
}
