//! Operator-facing session state
//!
//! - [`HomePage`] - landing page actions
//! - [`ExportDialog`] - date range, field picks and the in-flight export

pub mod dialog;
pub mod home;

pub use dialog::{ExportDialog, ExportOutcome};
pub use home::{HomePage, Route};
