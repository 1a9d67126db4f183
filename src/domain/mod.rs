//! Domain models and types.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Field catalog and selection** ([`FieldDescriptor`], [`FieldSelection`])
//! - **Records** ([`RegistrationRecord`], [`CleanedRecord`])
//! - **Date range** ([`DateRange`], [`WireDateRange`])
//! - **Error types** ([`RegistryError`], [`ValidationError`], [`SourceError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, RegistryError>`]:
//!
//! ```rust
//! use registry_export::domain::{DateRange, Result};
//!
//! fn example(range: DateRange) -> Result<()> {
//!     let wire = range.to_wire()?;
//!     println!("{wire}");
//!     Ok(())
//! }
//! ```

pub mod date_range;
pub mod errors;
pub mod fields;
pub mod record;
pub mod result;

pub use date_range::{parse_date, DateRange, WireDateRange};
pub use errors::{RegistryError, SourceError, ValidationError};
pub use fields::{FieldDescriptor, FieldSelection, FIELD_CATALOG};
pub use record::{CleanedRecord, RegistrationRecord, EXCLUDED_FIELDS};
pub use result::Result;
