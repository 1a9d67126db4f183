//! Configuration schema types
//!
//! This module defines the configuration structure mapped from the TOML file.

use serde::{Deserialize, Serialize};
use url::Url;

/// Main configuration
///
/// Every section is optional in the file; missing sections take defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Remote registration source
    #[serde(default)]
    pub source: SourceConfig,

    /// Where exported files land
    #[serde(default)]
    pub output: OutputConfig,

    /// Registration-entry screen
    #[serde(default)]
    pub registration: RegistrationConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl RegistryConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.source.validate()?;
        self.output.validate()?;
        self.registration.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// URL of the registration-entry screen
    ///
    /// Falls back to `{source.base_url}/register` when not configured.
    pub fn registration_url(&self) -> String {
        match &self.registration.entry_url {
            Some(url) => url.clone(),
            None => format!("{}/register", self.source.base_url.trim_end_matches('/')),
        }
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Remote registration source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Base URL of the registration service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Path of the listing endpoint, appended to `base_url`
    #[serde(default = "default_listing_path")]
    pub listing_path: String,

    /// Request timeout in seconds; unset waits for the transport to give up
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

impl SourceConfig {
    fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("source.base_url cannot be empty".to_string());
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err("source.base_url must start with http:// or https://".to_string());
        }

        Url::parse(&self.base_url)
            .map_err(|e| format!("source.base_url is not a valid URL: {e}"))?;

        if !self.listing_path.starts_with('/') {
            return Err(format!(
                "source.listing_path must start with '/', got '{}'",
                self.listing_path
            ));
        }

        if self.timeout_seconds == Some(0) {
            return Err("source.timeout_seconds must be greater than 0 when set".to_string());
        }

        Ok(())
    }

    /// Full URL of the listing endpoint
    pub fn listing_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.listing_path)
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            listing_path: default_listing_path(),
            timeout_seconds: None,
        }
    }
}

/// Characters Excel refuses in worksheet names
const SHEET_NAME_FORBIDDEN: [char; 7] = ['[', ']', ':', '*', '?', '/', '\\'];

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory exported files are written to
    #[serde(default = "default_output_directory")]
    pub directory: String,

    /// Worksheet name in the spreadsheet export
    #[serde(default = "default_sheet_name")]
    pub sheet_name: String,
}

impl OutputConfig {
    fn validate(&self) -> Result<(), String> {
        if self.directory.trim().is_empty() {
            return Err("output.directory cannot be empty".to_string());
        }

        // Excel's own limit on worksheet names
        if self.sheet_name.is_empty() || self.sheet_name.chars().count() > 31 {
            return Err(format!(
                "output.sheet_name must be 1-31 characters, got '{}'",
                self.sheet_name
            ));
        }

        if let Some(c) = self
            .sheet_name
            .chars()
            .find(|c| SHEET_NAME_FORBIDDEN.contains(c))
        {
            return Err(format!(
                "output.sheet_name cannot contain '{c}', got '{}'",
                self.sheet_name
            ));
        }

        if self.sheet_name.starts_with('\'') || self.sheet_name.ends_with('\'') {
            return Err(format!(
                "output.sheet_name cannot start or end with an apostrophe, got '{}'",
                self.sheet_name
            ));
        }

        Ok(())
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_directory(),
            sheet_name: default_sheet_name(),
        }
    }
}

/// Registration-entry screen configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistrationConfig {
    /// URL the register action navigates to
    #[serde(default)]
    pub entry_url: Option<String>,
}

impl RegistrationConfig {
    fn validate(&self) -> Result<(), String> {
        if let Some(url) = &self.entry_url {
            Url::parse(url)
                .map_err(|e| format!("registration.entry_url is not a valid URL: {e}"))?;
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log file path
    #[serde(default = "default_log_path")]
    pub local_path: String,

    /// Log rotation (daily, hourly, never)
    #[serde(default = "default_log_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.is_empty() {
            return Err(
                "logging.local_path cannot be empty when local_enabled = true".to_string(),
            );
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_log_path(),
            local_rotation: default_log_rotation(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_base_url() -> String {
    "https://giostar.onrender.com".to_string()
}

fn default_listing_path() -> String {
    "/registration/getAll".to_string()
}

fn default_output_directory() -> String {
    ".".to_string()
}

fn default_sheet_name() -> String {
    "Registrations".to_string()
}

fn default_log_path() -> String {
    "logs".to_string()
}

fn default_log_rotation() -> String {
    "daily".to_string()
}
