//! Configuration management.
//!
//! TOML configuration with `${VAR_NAME}` substitution, `REGISTRY_EXPORT_*`
//! environment overrides and validation on load.
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [source]
//! base_url = "https://giostar.onrender.com"
//! listing_path = "/registration/getAll"
//!
//! [output]
//! directory = "${HOME}/exports"
//! sheet_name = "Registrations"
//!
//! [registration]
//! entry_url = "https://giostar.example.org/register"
//!
//! [logging]
//! local_enabled = false
//! ```
//!
//! # Loading
//!
//! ```rust,no_run
//! use registry_export::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("registry-export.toml")?;
//! println!("Listing endpoint: {}", config.source.listing_url());
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod schema;

pub use loader::{load_config, load_config_or_default};
pub use schema::{
    ApplicationConfig, LoggingConfig, OutputConfig, RegistrationConfig, RegistryConfig,
    SourceConfig,
};
