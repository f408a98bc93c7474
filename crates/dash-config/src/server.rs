//! HTTP server configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    5000
}

fn default_static_dir() -> String {
    "client/build".to_string()
}

const fn default_cors_permissive() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Interface to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port to bind.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the built client. `index.html` inside it is the
    /// fallback for every non-API path.
    #[serde(default = "default_static_dir")]
    pub static_dir: String,

    /// Allow any origin to call the API.
    #[serde(default = "default_cors_permissive")]
    pub cors_permissive: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
            cors_permissive: default_cors_permissive(),
        }
    }
}

impl ServerConfig {
    /// `host:port` string suitable for `TcpListener::bind`.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Path of the single-page entry point.
    #[must_use]
    pub fn index_path(&self) -> PathBuf {
        PathBuf::from(&self.static_dir).join("index.html")
    }
}
