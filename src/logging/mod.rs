//! Logging setup and the export log macros shared by the coordinator.

pub mod structured;

pub use structured::{init_logging, LoggingGuard, LOG_FILE_NAME};

/// Log the start of an export attempt
///
/// # Example
///
/// ```no_run
/// use registry_export::log_export_start;
///
/// log_export_start!("xlsx", "2024/01/01 - 2024/01/31", 3);
/// ```
#[macro_export]
macro_rules! log_export_start {
    ($format:expr, $range:expr, $field_count:expr) => {
        tracing::info!(
            format = %$format,
            range = %$range,
            fields = $field_count,
            "Starting export"
        );
    };
}

/// Log the completion of an export
///
/// # Example
///
/// ```no_run
/// use registry_export::log_export_complete;
/// use std::time::Duration;
///
/// log_export_complete!(42, "registrations.xlsx", Duration::from_millis(180));
/// ```
#[macro_export]
macro_rules! log_export_complete {
    ($count:expr, $file:expr, $duration:expr) => {
        tracing::info!(
            records = $count,
            file = %$file,
            duration_ms = $duration.as_millis() as u64,
            "Export completed"
        );
    };
}
