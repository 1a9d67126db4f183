//! Core logic of the registration export.
//!
//! # Modules
//!
//! - [`export`] - Export orchestration and the in-flight state
//! - [`render`] - Spreadsheet and document renderers
//! - [`session`] - Landing page and export dialog state
//! - [`transform`] - Stripping excluded fields from records
//!
//! # Export Workflow
//!
//! 1. **Validate**: both dates set, at least one field selected
//! 2. **Fetch**: POST the date range to the registration service
//! 3. **Clean**: drop internal and address fields from each record
//! 4. **Render**: build the table and write `.xlsx` or `.pdf` bytes
//! 5. **Deliver**: hand the file to the configured sink
//!
//! # Example
//!
//! ```rust,no_run
//! use registry_export::config::load_config;
//! use registry_export::core::export::ExportCoordinator;
//! use registry_export::core::render::ExportFormat;
//! use registry_export::domain::{parse_date, DateRange, FieldSelection};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("registry-export.toml")?;
//! let coordinator = ExportCoordinator::from_config(&config)?;
//!
//! let range = DateRange::between(parse_date("2024-03-01")?, parse_date("2024-03-31")?);
//! let fields = FieldSelection::from_names(["Name", "Email"])?;
//!
//! let receipt = coordinator
//!     .request_export(ExportFormat::Spreadsheet, &range, &fields)
//!     .await?;
//! println!("Wrote {}", receipt.path.display());
//! # Ok(())
//! # }
//! ```

pub mod export;
pub mod render;
pub mod session;
pub mod transform;
