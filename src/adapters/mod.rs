//! External integrations
//!
//! - [`registry`] - the remote registration source
//! - [`output`] - where rendered exports are written
//! - [`notify`] - operator-facing notifications

pub mod notify;
pub mod output;
pub mod registry;
