//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "registry-export.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing registry-export configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        match fs::write(&self.output, Self::sample_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Validate configuration: registry-export validate-config");
                println!(
                    "  3. Run export: registry-export export --from 2024-01-01 --to 2024-01-31 --fields name,email"
                );
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5) // Fatal error exit code
            }
        }
    }

    fn sample_config() -> &'static str {
        r#"# registry-export configuration
#
# Values may reference environment variables with ${VAR}; any setting can
# also be overridden with REGISTRY_EXPORT_<SECTION>_<KEY>.

[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

[source]
# Registration service
base_url = "https://giostar.onrender.com"
listing_path = "/registration/getAll"
# Request timeout; unset waits indefinitely
# timeout_seconds = 30

[output]
# Directory exported files are written to
directory = "."
# Worksheet name in spreadsheet exports (max 31 characters)
sheet_name = "Registrations"

[registration]
# Registration-entry screen; defaults to {base_url}/register
# entry_url = "https://giostar.onrender.com/register"

[logging]
# JSON log file alongside console output
local_enabled = false
local_path = "logs"
# daily | hourly | never
local_rotation = "daily"
"#
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RegistryConfig;

    #[test]
    fn test_sample_config_parses_and_validates() {
        let config: RegistryConfig = toml::from_str(InitArgs::sample_config()).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.source.listing_path, "/registration/getAll");
        assert_eq!(config.output.sheet_name, "Registrations");
    }

    #[tokio::test]
    async fn test_refuses_to_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("registry-export.toml");
        fs::write(&path, "# existing").unwrap();

        let args = InitArgs {
            output: path.to_string_lossy().into_owned(),
            force: false,
        };
        assert_eq!(args.execute().await.unwrap(), 2);
        assert_eq!(fs::read_to_string(&path).unwrap(), "# existing");

        let args = InitArgs {
            output: path.to_string_lossy().into_owned(),
            force: true,
        };
        assert_eq!(args.execute().await.unwrap(), 0);
        assert!(fs::read_to_string(&path).unwrap().contains("[source]"));
    }
}
