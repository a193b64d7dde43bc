//! Configuration module for Librarian
//!
//! Implements configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (LIBRARIAN_*)
//! 3. Project config (./librarian.toml)
//! 4. User config (~/.config/librarian/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    apply_overrides, parse_with_warnings, with_env_overrides, ConfigWarning, PROJECT_CONFIG_FILE,
};
pub use types::{Config, EventSink, EventsConfig, IdConfig, StoreBackend, StoreConfig};
