//! Result type alias
//!
//! Convenience alias using [`RegistryError`] as the error type.

use super::errors::RegistryError;

/// Result type alias for registry-export operations
///
/// # Examples
///
/// ```
/// use registry_export::domain::result::Result;
/// use registry_export::domain::errors::{RegistryError, ValidationError};
///
/// fn failing_function() -> Result<()> {
///     Err(RegistryError::Validation(ValidationError::NoFieldsSelected))
/// }
/// ```
pub type Result<T> = std::result::Result<T, RegistryError>;
