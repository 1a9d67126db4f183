//! Remote registration source
//!
//! [`RegistrationSource`] is the seam between the export orchestrator and the
//! hospital registration service. [`HttpRegistrationSource`] is the production
//! implementation.

pub mod client;
pub mod models;

pub use client::HttpRegistrationSource;
pub use models::RegistrationResponse;

use crate::domain::{Result, WireDateRange};
use async_trait::async_trait;

/// Anything that can list registrations for a date range
#[async_trait]
pub trait RegistrationSource: Send + Sync {
    /// Fetch every registration in the inclusive range
    ///
    /// # Errors
    ///
    /// Returns a [`crate::domain::SourceError`] for transport failures,
    /// non-success statuses and malformed bodies. An empty list is not an
    /// error at this layer.
    async fn fetch_registrations(&self, range: &WireDateRange) -> Result<RegistrationResponse>;
}
