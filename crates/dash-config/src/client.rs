//! Dashboard client configuration.

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClientConfig {
    /// Base URL of the data provider.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Upper bound on the single dataset fetch.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ClientConfig {
    /// Full URL of the dataset endpoint.
    #[must_use]
    pub fn data_url(&self) -> String {
        format!("{}/api/data", self.base_url.trim_end_matches('/'))
    }
}
