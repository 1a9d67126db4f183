//! Export dialog session
//!
//! Holds the view state of the "export registrations" dialog and drives one
//! [`ExportCoordinator`] attempt per request. The handle is cheap to clone and
//! every clone sees the same state, so a close from one place invalidates an
//! export awaiting its response somewhere else.

use crate::adapters::notify::{Notification, Notifier};
use crate::core::export::{
    ExportCoordinator, ExportJob, ExportReceipt, ExportState, RenderedExport,
};
use crate::core::render::ExportFormat;
use crate::domain::{
    DateRange, FieldDescriptor, FieldSelection, RegistryError, Result, ValidationError,
};
use chrono::NaiveDate;
use std::sync::{Arc, Mutex, MutexGuard};

/// How an export request ended
#[derive(Debug)]
pub enum ExportOutcome {
    /// File written
    Delivered(ExportReceipt),

    /// Input rejected before anything was sent
    Rejected(RegistryError),

    /// The source or the renderer failed
    Failed(RegistryError),

    /// The dialog was closed while waiting; the response was dropped
    Discarded,
}

impl ExportOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, ExportOutcome::Delivered(_))
    }

    pub fn error(&self) -> Option<&RegistryError> {
        match self {
            ExportOutcome::Rejected(e) | ExportOutcome::Failed(e) => Some(e),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
struct DialogState {
    open: bool,
    range: DateRange,
    selection: FieldSelection,
    export: ExportState,
    // bumped on close; a request only applies its result if it still matches
    generation: u64,
}

impl DialogState {
    fn reset_inputs(&mut self) {
        self.range.clear();
        self.selection.clear();
    }
}

/// Shared handle to one dialog
#[derive(Clone)]
pub struct ExportDialog {
    coordinator: Arc<ExportCoordinator>,
    notifier: Arc<dyn Notifier>,
    state: Arc<Mutex<DialogState>>,
}

impl ExportDialog {
    pub fn new(coordinator: Arc<ExportCoordinator>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            coordinator,
            notifier,
            state: Arc::new(Mutex::new(DialogState::default())),
        }
    }

    fn lock(&self) -> MutexGuard<'_, DialogState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn open(&self) {
        self.lock().open = true;
    }

    /// Hide the dialog and reset its inputs
    ///
    /// Any export still waiting on the source is invalidated. No request is
    /// made.
    pub fn close(&self) {
        let mut state = self.lock();
        state.open = false;
        state.reset_inputs();
        state.export = ExportState::Idle;
        state.generation = state.generation.wrapping_add(1);
        tracing::debug!(generation = state.generation, "Export dialog closed");
    }

    pub fn is_open(&self) -> bool {
        self.lock().open
    }

    pub fn set_from(&self, date: Option<NaiveDate>) {
        self.lock().range.from = date;
    }

    pub fn set_to(&self, date: Option<NaiveDate>) {
        self.lock().range.to = date;
    }

    pub fn date_range(&self) -> DateRange {
        self.lock().range
    }

    /// Add a field to the selection; `false` if already selected
    pub fn select(&self, field: FieldDescriptor) -> bool {
        self.lock().selection.insert(field)
    }

    /// Drop a field from the selection; `false` if it wasn't selected
    pub fn deselect(&self, field: &FieldDescriptor) -> bool {
        self.lock().selection.remove(field)
    }

    pub fn set_selection(&self, selection: FieldSelection) {
        self.lock().selection = selection;
    }

    pub fn selection(&self) -> FieldSelection {
        self.lock().selection.clone()
    }

    pub fn export_state(&self) -> ExportState {
        self.lock().export
    }

    /// Whether any export is waiting on the source
    pub fn is_loading(&self) -> bool {
        !self.lock().export.is_idle()
    }

    fn begin(&self, format: ExportFormat) -> Result<(ExportJob, u64)> {
        let mut state = self.lock();

        if !state.export.is_idle() {
            return Err(ValidationError::ExportInProgress.into());
        }

        let job = self
            .coordinator
            .prepare(format, &state.range, &state.selection)?;
        state.export = ExportState::fetching(format);
        Ok((job, state.generation))
    }

    /// Store a rendered export and reset the dialog, unless it was closed
    ///
    /// The staleness check, the file write and the reset share one critical
    /// section, so a close either lands before anything is written or after
    /// the dialog has already been reset. `None` means the result was stale.
    fn complete(
        &self,
        job: &ExportJob,
        generation: u64,
        rendered: Result<RenderedExport>,
    ) -> Option<Result<ExportReceipt>> {
        let mut state = self.lock();
        if state.generation != generation {
            return None;
        }

        let result = rendered.and_then(|r| self.coordinator.store(job, r));

        state.export = ExportState::Idle;
        state.reset_inputs();
        if result.is_ok() {
            state.open = false;
        }
        Some(result)
    }

    /// Export the current inputs in `format`
    ///
    /// Errors are reported through the notifier as well as returned in the
    /// outcome. After the request reaches the source, the in-flight state
    /// and the inputs are reset whatever the result, unless the dialog was
    /// closed in the meantime.
    pub async fn request_export(&self, format: ExportFormat) -> ExportOutcome {
        let (job, generation) = match self.begin(format) {
            Ok(started) => started,
            Err(e) => {
                tracing::debug!(error = %e, "Export request rejected");
                self.notifier.notify(Notification::error(e.user_message()));
                return ExportOutcome::Rejected(e);
            }
        };

        let rendered = self
            .coordinator
            .fetch(&job)
            .await
            .and_then(|records| self.coordinator.render(&job, &records));

        let Some(result) = self.complete(&job, generation, rendered) else {
            tracing::info!(format = %format, "Dialog closed during export; result discarded");
            return ExportOutcome::Discarded;
        };

        match result {
            Ok(receipt) => {
                self.notifier.notify(Notification::info(format!(
                    "Exported {} registrations to {}",
                    receipt.records,
                    receipt.path.display()
                )));
                ExportOutcome::Delivered(receipt)
            }
            Err(e) => {
                self.notifier.notify(Notification::error(e.user_message()));
                ExportOutcome::Failed(e)
            }
        }
    }
}
