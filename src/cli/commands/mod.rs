//! CLI command implementations
//!
//! This module contains all CLI command implementations.

pub mod export;
pub mod fields;
pub mod init;
pub mod register;
pub mod validate;
