//! Export coordinator - orchestrates one export attempt
//!
//! Validate, fetch, clean, render, store. The steps are public on their own
//! so a dialog session can check for staleness before anything is stored;
//! [`ExportCoordinator::request_export`] chains them for callers that don't
//! need to.

use super::{ExportJob, ExportReceipt, RenderedExport};
use crate::adapters::output::{DirectorySink, ExportSink};
use crate::adapters::registry::{HttpRegistrationSource, RegistrationSource};
use crate::config::RegistryConfig;
use crate::core::render::{
    build_table, DocumentRenderer, ExportFormat, Renderer, SpreadsheetRenderer,
};
use crate::core::transform::clean_records;
use crate::domain::errors::EMPTY_RESULTS_MESSAGE;
use crate::domain::{
    CleanedRecord, DateRange, FieldSelection, Result, SourceError, ValidationError,
};
use crate::{log_export_complete, log_export_start};
use std::sync::Arc;
use std::time::Instant;

/// Export coordinator
pub struct ExportCoordinator {
    source: Arc<dyn RegistrationSource>,
    sink: Arc<dyn ExportSink>,
    spreadsheet: SpreadsheetRenderer,
    document: DocumentRenderer,
}

impl ExportCoordinator {
    /// Create a coordinator over an arbitrary source and sink
    pub fn new(source: Arc<dyn RegistrationSource>, sink: Arc<dyn ExportSink>) -> Self {
        Self {
            source,
            sink,
            spreadsheet: SpreadsheetRenderer::default(),
            document: DocumentRenderer::new(),
        }
    }

    /// Create a coordinator talking HTTP and writing to the configured directory
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built.
    pub fn from_config(config: &RegistryConfig) -> Result<Self> {
        let source = Arc::new(HttpRegistrationSource::new(&config.source)?);
        let sink = Arc::new(DirectorySink::new(&config.output.directory));
        Ok(Self::new(source, sink).with_sheet_name(&config.output.sheet_name))
    }

    /// Override the worksheet name used for spreadsheet exports
    pub fn with_sheet_name(mut self, sheet_name: impl Into<String>) -> Self {
        self.spreadsheet = SpreadsheetRenderer::new(sheet_name);
        self
    }

    fn renderer(&self, format: ExportFormat) -> &dyn Renderer {
        match format {
            ExportFormat::Spreadsheet => &self.spreadsheet,
            ExportFormat::Document => &self.document,
        }
    }

    /// Check operator input and build the job
    ///
    /// Nothing is sent to the source from here.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::MissingDateRange`] if either date is unset
    /// - [`ValidationError::NoFieldsSelected`] if no field is selected
    /// - [`ValidationError::InvertedDateRange`] if `from` is after `to`
    pub fn prepare(
        &self,
        format: ExportFormat,
        range: &DateRange,
        fields: &FieldSelection,
    ) -> Result<ExportJob> {
        if !range.is_complete() {
            return Err(ValidationError::MissingDateRange.into());
        }

        if fields.is_empty() {
            return Err(ValidationError::NoFieldsSelected.into());
        }

        let wire_range = range.to_wire()?;

        Ok(ExportJob {
            format,
            range: wire_range,
            fields: fields.clone(),
            started: Instant::now(),
        })
    }

    /// Fetch the job's range and strip excluded fields
    ///
    /// # Errors
    ///
    /// - [`SourceError::EmptyResults`] when the source returns no records,
    ///   carrying the server's message if it sent one
    /// - any error from the source itself
    pub async fn fetch(&self, job: &ExportJob) -> Result<Vec<CleanedRecord>> {
        log_export_start!(job.format, job.range, job.fields.len());

        let response = match self.source.fetch_registrations(&job.range).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(error = %e, range = %job.range, "Error fetching registrations");
                return Err(e);
            }
        };

        let records = match response.data {
            Some(records) if !records.is_empty() => records,
            _ => {
                let message = response
                    .message
                    .unwrap_or_else(|| EMPTY_RESULTS_MESSAGE.to_string());
                tracing::warn!(range = %job.range, message = %message, "No registrations in range");
                return Err(SourceError::EmptyResults(message).into());
            }
        };

        tracing::debug!(records = records.len(), "Cleaning registration records");
        Ok(clean_records(records))
    }

    /// Render cleaned records in the job's format
    ///
    /// # Errors
    ///
    /// Returns a render error.
    pub fn render(&self, job: &ExportJob, records: &[CleanedRecord]) -> Result<RenderedExport> {
        let table = build_table(records, &job.fields)?;
        let bytes = self.renderer(job.format).render(&table)?;
        Ok(RenderedExport {
            format: job.format,
            bytes,
            records: records.len(),
        })
    }

    /// Hand rendered bytes to the sink under the format's file name
    ///
    /// # Errors
    ///
    /// Returns an I/O error from the sink.
    pub fn store(&self, job: &ExportJob, rendered: RenderedExport) -> Result<ExportReceipt> {
        let path = self
            .sink
            .deliver(rendered.format.file_name(), &rendered.bytes)?;

        let duration = job.started.elapsed();
        log_export_complete!(rendered.records, path.display(), duration);

        Ok(ExportReceipt {
            format: rendered.format,
            path,
            records: rendered.records,
            duration,
        })
    }

    /// Render and store in one step
    ///
    /// # Errors
    ///
    /// Any error from [`render`](Self::render) or [`store`](Self::store).
    pub fn deliver(&self, job: &ExportJob, records: &[CleanedRecord]) -> Result<ExportReceipt> {
        let rendered = self.render(job, records)?;
        self.store(job, rendered)
    }

    /// Run a whole export attempt
    ///
    /// # Errors
    ///
    /// Any error from [`prepare`](Self::prepare), [`fetch`](Self::fetch) or
    /// [`deliver`](Self::deliver).
    pub async fn request_export(
        &self,
        format: ExportFormat,
        range: &DateRange,
        fields: &FieldSelection,
    ) -> Result<ExportReceipt> {
        let job = self.prepare(format, range, fields)?;
        let records = self.fetch(&job).await?;
        self.deliver(&job, &records)
    }
}
