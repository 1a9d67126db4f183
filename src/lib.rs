// registry-export - Patient registration export tool
// Copyright (c) 2025 registry-export contributors
// Licensed under the MIT License

//! # registry-export
//!
//! Exports patient registrations recorded between two dates to a spreadsheet
//! (`.xlsx`) or a printable document (`.pdf`), keeping only the fields the
//! operator picks.
//!
//! ## Overview
//!
//! - **Fetching** registrations from the registration service by date range
//! - **Cleaning** internal bookkeeping and address fields from every record
//! - **Rendering** the selected columns as a worksheet or an A4 table
//! - **Tracking** the export dialog: inputs, the in-flight export, late responses
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Export orchestration, renderers, session state
//! - [`adapters`] - Registration service client, file sink, notifications
//! - [`domain`] - Field catalog, records, date ranges, errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use registry_export::config::load_config_or_default;
//! use registry_export::core::export::ExportCoordinator;
//! use registry_export::core::render::ExportFormat;
//! use registry_export::domain::{parse_date, DateRange, FieldSelection};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config_or_default("registry-export.toml")?;
//!     let coordinator = ExportCoordinator::from_config(&config)?;
//!
//!     let range = DateRange::between(parse_date("2024-01-01")?, parse_date("2024-01-31")?);
//!     let fields = FieldSelection::from_names(["Name", "Mobile Number"])?;
//!
//!     let receipt = coordinator
//!         .request_export(ExportFormat::Document, &range, &fields)
//!         .await?;
//!
//!     println!("Exported {} registrations", receipt.records);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every fallible operation returns [`domain::Result`], whose error type
//! [`domain::RegistryError`] carries the text shown to the operator:
//!
//! ```rust
//! use registry_export::domain::{RegistryError, ValidationError};
//!
//! let err = RegistryError::from(ValidationError::NoFieldsSelected);
//! assert_eq!(err.user_message(), "Please select at least one header.");
//! ```
//!
//! ## Logging
//!
//! Structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn};
//!
//! info!("Starting export");
//! warn!(range = "2024/01/01 - 2024/01/31", "No registrations in range");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
