//! The one-shot dataset fetch.

use std::time::Duration;

use dash_config::ClientConfig;
use dash_core::Record;

use crate::dashboard::DashboardEvent;
use crate::error::ViewError;

/// HTTP client for the data provider's read endpoint.
#[derive(Debug, Clone)]
pub struct DataClient {
    http: reqwest::Client,
    data_url: String,
}

impl DataClient {
    /// # Errors
    ///
    /// Returns `ViewError::Client` if the HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self, ViewError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ViewError::Client(e.to_string()))?;
        Ok(Self {
            http,
            data_url: config.data_url(),
        })
    }

    #[must_use]
    pub fn data_url(&self) -> &str {
        &self.data_url
    }

    /// GET the full record set.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::Fetch` on transport failure, a non-success status,
    /// or a body that is not a JSON array of records.
    pub async fn fetch_all(&self) -> Result<Vec<Record>, ViewError> {
        let records = self
            .http
            .get(&self.data_url)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<Record>>()
            .await?;
        Ok(records)
    }

    /// Fetch once and turn the outcome into a controller event.
    ///
    /// Failures become `FetchFailed`, which leaves the dashboard empty.
    pub async fn load_event(&self) -> DashboardEvent {
        match self.fetch_all().await {
            Ok(records) => DashboardEvent::Loaded(records),
            Err(error) => DashboardEvent::FetchFailed(error.to_string()),
        }
    }
}
