//! Dataset seeding configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// When startup seeding inserts the bundled dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedMode {
    /// Insert only when the collection holds no records.
    #[default]
    IfEmpty,
    /// Insert on every run, appending duplicates.
    Always,
    /// Never seed at startup.
    Never,
}

impl SeedMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::IfEmpty => "if_empty",
            Self::Always => "always",
            Self::Never => "never",
        }
    }
}

impl fmt::Display for SeedMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeedMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "if_empty" => Ok(Self::IfEmpty),
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            other => Err(ConfigError::InvalidValue {
                field: "seed.mode".into(),
                reason: format!("unknown mode '{other}' (expected if_empty, always, never)"),
            }),
        }
    }
}

fn default_dataset_path() -> String {
    "data.json".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SeedConfig {
    /// JSON array of records read at startup.
    #[serde(default = "default_dataset_path")]
    pub dataset_path: String,

    #[serde(default)]
    pub mode: SeedMode,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            dataset_path: default_dataset_path(),
            mode: SeedMode::default(),
        }
    }
}
