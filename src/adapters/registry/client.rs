//! HTTP registration source
//!
//! Talks to the hospital registration service's listing endpoint with a
//! single `POST` per export. No retries: every failure is terminal for the
//! current attempt.

use super::models::{ErrorBody, RegistrationResponse};
use super::RegistrationSource;
use crate::config::SourceConfig;
use crate::domain::{RegistryError, Result, SourceError, WireDateRange};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use std::time::Duration;

/// Registration source backed by the listing endpoint
///
/// # Example
///
/// ```no_run
/// use registry_export::adapters::registry::{HttpRegistrationSource, RegistrationSource};
/// use registry_export::config::SourceConfig;
/// use registry_export::domain::DateRange;
/// use chrono::NaiveDate;
///
/// # async fn example() -> registry_export::domain::Result<()> {
/// let source = HttpRegistrationSource::new(&SourceConfig::default())?;
/// let range = DateRange::between(
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
/// );
/// let response = source.fetch_registrations(&range.to_wire()?).await?;
/// println!("{} records", response.record_count());
/// # Ok(())
/// # }
/// ```
pub struct HttpRegistrationSource {
    listing_url: String,
    client: Client,
}

impl HttpRegistrationSource {
    /// Build a source from configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built.
    pub fn new(config: &SourceConfig) -> Result<Self> {
        let mut builder = ClientBuilder::new()
            .user_agent(concat!("registry-export/", env!("CARGO_PKG_VERSION")));

        if let Some(secs) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let client = builder.build().map_err(|e| {
            RegistryError::Configuration(format!("Failed to build HTTP client: {e}"))
        })?;

        Ok(Self {
            listing_url: config.listing_url(),
            client,
        })
    }

    pub fn listing_url(&self) -> &str {
        &self.listing_url
    }
}

#[async_trait]
impl RegistrationSource for HttpRegistrationSource {
    async fn fetch_registrations(&self, range: &WireDateRange) -> Result<RegistrationResponse> {
        tracing::debug!(url = %self.listing_url, range = %range, "Requesting registrations");

        let resp = self
            .client
            .post(&self.listing_url)
            .json(range)
            .send()
            .await
            .map_err(|e| SourceError::ConnectionFailed(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.message);

            tracing::warn!(
                status = status.as_u16(),
                message = message.as_deref().unwrap_or(""),
                "Registration source returned an error status"
            );

            return Err(SourceError::Server {
                status: status.as_u16(),
                message,
            }
            .into());
        }

        let response = resp
            .json::<RegistrationResponse>()
            .await
            .map_err(|e| SourceError::InvalidResponse(e.to_string()))?;

        tracing::debug!(
            records = response.record_count(),
            "Registration source responded"
        );

        Ok(response)
    }
}
