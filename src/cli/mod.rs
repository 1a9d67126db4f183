//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for registry-export using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// registry-export - patient registration export tool
#[derive(Parser, Debug)]
#[command(name = "registry-export")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(
        short,
        long,
        default_value = "registry-export.toml",
        env = "REGISTRY_EXPORT_CONFIG"
    )]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "REGISTRY_EXPORT_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export registrations in a date range to a spreadsheet or PDF
    Export(commands::export::ExportArgs),

    /// List the fields that can be exported
    Fields(commands::fields::FieldsArgs),

    /// Show where new patients are registered
    Register(commands::register::RegisterArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
