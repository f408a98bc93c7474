//! Record store configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_url() -> String {
    "dashboard.db".to_string()
}

fn default_collection() -> String {
    "internship".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Local database path, `:memory:`, or a remote `libsql://` / `https://` URL.
    #[serde(default = "default_url")]
    pub url: String,

    /// Auth token for remote databases. Ignored for local paths.
    #[serde(default)]
    pub auth_token: String,

    /// Collection (table) holding the records.
    #[serde(default = "default_collection")]
    pub collection: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            auth_token: String::new(),
            collection: default_collection(),
        }
    }
}

impl StoreConfig {
    /// Whether the URL points at a remote server rather than a local file.
    #[must_use]
    pub fn is_remote(&self) -> bool {
        ["libsql://", "https://", "http://"]
            .iter()
            .any(|scheme| self.url.starts_with(scheme))
    }

    /// Check the fields that are interpolated into SQL or required for access.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the collection is not a plain
    /// identifier, the URL is empty, or a remote URL has no auth token.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "store.url".into(),
                reason: "must not be empty".into(),
            });
        }
        if !is_identifier(&self.collection) {
            return Err(ConfigError::InvalidValue {
                field: "store.collection".into(),
                reason: format!(
                    "'{}' must start with a letter or '_' and contain only ASCII letters, digits, or '_'",
                    self.collection
                ),
            });
        }
        if self.is_remote() && self.auth_token.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "store.auth_token".into(),
                reason: "required for remote databases".into(),
            });
        }
        Ok(())
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_local_and_valid() {
        let config = StoreConfig::default();
        assert!(!config.is_remote());
        assert_eq!(config.collection, "internship");
        config.validate().unwrap();
    }

    #[test]
    fn rejects_collection_with_sql_metacharacters() {
        let config = StoreConfig {
            collection: "records; DROP TABLE x".into(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "store.collection"
        ));
    }

    #[test]
    fn rejects_leading_digit() {
        let config = StoreConfig {
            collection: "1records".into(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn remote_requires_token() {
        let mut config = StoreConfig {
            url: "libsql://dash-org.turso.io".into(),
            ..Default::default()
        };
        assert!(config.is_remote());
        assert!(config.validate().is_err());

        config.auth_token = "token".into();
        config.validate().unwrap();
    }
}
