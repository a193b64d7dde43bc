//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::infrastructure::repositories::default_store_path;

use super::loader::{self, ConfigWarning};

/// Where book records are kept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Process-local map, gone on exit
    Memory,
    /// Single TOML file on disk
    #[default]
    Toml,
}

/// Where dispatched events go
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventSink {
    /// Dropped
    None,
    /// Logged through `tracing`
    #[default]
    Log,
    /// Printed as NDJSON on stdout
    Json,
}

impl std::str::FromStr for EventSink {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" | "off" => Ok(EventSink::None),
            "log" => Ok(EventSink::Log),
            "json" => Ok(EventSink::Json),
            other => Err(format!("unknown event sink '{other}' (expected none, log or json)")),
        }
    }
}

impl std::str::FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "memory" => Ok(StoreBackend::Memory),
            "toml" => Ok(StoreBackend::Toml),
            other => Err(format!("unknown store backend '{other}' (expected memory or toml)")),
        }
    }
}

/// Store configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: StoreBackend,

    /// Store file; defaults to the user data directory
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Id generation configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdConfig {
    /// Cap on collision retries; unset means retry forever
    #[serde(default)]
    pub max_attempts: Option<u32>,
}

/// Event configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventsConfig {
    #[serde(default)]
    pub sink: EventSink,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub ids: IdConfig,

    #[serde(default)]
    pub events: EventsConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let (config, _warnings) = Self::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys)
    pub fn load_with_warnings(path: &Path) -> Result<(Self, Vec<ConfigWarning>), ConfigError> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults, then apply env overrides
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root)
    }

    /// Effective store file path
    pub fn store_path(&self) -> PathBuf {
        self.store.path.clone().unwrap_or_else(default_store_path)
    }
}
