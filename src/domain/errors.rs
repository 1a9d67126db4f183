//! Domain error types
//!
//! The error hierarchy mirrors the three failure tiers of an export attempt:
//! client-side validation, errors reported by the registration source, and
//! local failures while rendering or writing the file. No variant exposes a
//! third-party type.

use thiserror::Error;

/// Generic toast text used when the source gives no message of its own
pub const FETCH_FAILED_MESSAGE: &str = "Error fetching registrations";

/// Toast text used when the source returns no records and no message
pub const EMPTY_RESULTS_MESSAGE: &str = "Empty Registrations";

/// Main error type
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Operator input rejected before any network call
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Errors from the remote registration source
    #[error("Registration source error: {0}")]
    Source(#[from] SourceError),

    /// Spreadsheet or document generation failed
    #[error("Render error: {0}")]
    Render(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

impl RegistryError {
    /// Text shown to the operator for this error
    ///
    /// Validation and source errors carry their own wording; everything
    /// else collapses to the generic fetch failure message.
    pub fn user_message(&self) -> String {
        match self {
            RegistryError::Validation(e) => e.to_string(),
            RegistryError::Source(e) => e.user_message(),
            _ => FETCH_FAILED_MESSAGE.to_string(),
        }
    }

    /// Whether this error was raised before anything was sent to the source
    pub fn is_validation(&self) -> bool {
        matches!(self, RegistryError::Validation(_))
    }
}

/// Operator input errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// One or both ends of the date range are unset
    #[error("Please select both from and to dates.")]
    MissingDateRange,

    /// The field selection is empty
    #[error("Please select at least one header.")]
    NoFieldsSelected,

    /// The from date is after the to date
    #[error("The from date ({from}) must not be after the to date ({to}).")]
    InvertedDateRange { from: String, to: String },

    /// A field name does not match any catalog entry
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// A date argument could not be parsed
    #[error("Invalid date '{0}'. Expected YYYY-MM-DD or YYYY/MM/DD.")]
    InvalidDate(String),

    /// An export format name is not recognised
    #[error("Invalid export format '{0}'. Expected 'xlsx' or 'pdf'.")]
    InvalidFormat(String),

    /// Another export is still waiting on the source
    #[error("An export is already in progress.")]
    ExportInProgress,
}

/// Registration source errors
///
/// Server messages are kept verbatim so they can be surfaced unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// The request never produced a response
    #[error("Failed to connect to registration source: {0}")]
    ConnectionFailed(String),

    /// Non-success HTTP status
    #[error("Server error: {status}{}", .message.as_deref().map(|m| format!(" - {m}")).unwrap_or_default())]
    Server { status: u16, message: Option<String> },

    /// The response body was not the expected shape
    #[error("Invalid response from registration source: {0}")]
    InvalidResponse(String),

    /// The source answered but had no records for the range
    #[error("No registrations returned: {0}")]
    EmptyResults(String),
}

impl SourceError {
    /// Text shown to the operator
    pub fn user_message(&self) -> String {
        match self {
            SourceError::Server {
                message: Some(message),
                ..
            } => message.clone(),
            SourceError::EmptyResults(message) => message.clone(),
            _ => FETCH_FAILED_MESSAGE.to_string(),
        }
    }
}

impl From<std::io::Error> for RegistryError {
    fn from(err: std::io::Error) -> Self {
        RegistryError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for RegistryError {
    fn from(err: serde_json::Error) -> Self {
        RegistryError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for RegistryError {
    fn from(err: toml::de::Error) -> Self {
        RegistryError::Configuration(format!("TOML parse error: {err}"))
    }
}

impl From<rust_xlsxwriter::XlsxError> for RegistryError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        RegistryError::Render(format!("Spreadsheet error: {err}"))
    }
}
