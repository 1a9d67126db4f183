//! Register command implementation
//!
//! The landing page's "register" action: points the operator at the
//! registration-entry screen.

use crate::config::{load_config_or_default, RegistryConfig};
use crate::core::session::Route;
use clap::Args;

/// Arguments for the register command
#[derive(Args, Debug)]
pub struct RegisterArgs {}

impl RegisterArgs {
    /// Execute the register command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match load_config_or_default(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Configuration error: {e}");
                return Ok(2);
            }
        };

        let route = Route::Registration;
        let url = resolve_route(&config, route);
        tracing::info!(route = %route, url = %url, "Registration entry");

        println!("📝 Register a new patient at: {url}");
        Ok(0)
    }
}

/// Absolute URL a landing-page route points to
pub fn resolve_route(config: &RegistryConfig, route: Route) -> String {
    match route {
        Route::Home => format!("{}{}", config.source.base_url.trim_end_matches('/'), route),
        Route::Registration => config.registration_url(),
    }
}
