//! Configuration loading
//!
//! Precedence, highest first:
//! 1. CLI flags (applied by the binary)
//! 2. Environment variables (`LIBRARIAN_*`)
//! 3. Project config (`./librarian.toml`)
//! 4. User config (`<config dir>/librarian/config.toml`)
//! 5. Built-in defaults

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::ConfigError;

use super::types::Config;

/// File name of the project-level config
pub const PROJECT_CONFIG_FILE: &str = "librarian.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> Result<(Config, Vec<ConfigWarning>), ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

/// Parse configuration text; `path` is only used for messages.
pub fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> Result<(Config, Vec<ConfigWarning>), ConfigError> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ConfigError::Parse {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults
///
/// A config file that fails to load is logged and skipped.
pub fn load_or_default(project_root: Option<&Path>) -> Config {
    let mut candidates = Vec::new();
    if let Some(root) = project_root {
        candidates.push(root.join(PROJECT_CONFIG_FILE));
    }
    if let Some(user_config_dir) = dirs::config_dir() {
        candidates.push(user_config_dir.join("librarian/config.toml"));
    }

    for path in candidates {
        if !path.exists() {
            continue;
        }
        match load_with_warnings(&path) {
            Ok((config, warnings)) => {
                for warning in warnings {
                    warn!("{}", warning);
                }
                return with_env_overrides(config);
            }
            Err(e) => warn!("ignoring config: {}", e),
        }
    }

    with_env_overrides(Config::default())
}

/// Apply environment variable overrides (LIBRARIAN_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |key| std::env::var(key).ok())
}

/// Apply overrides from an arbitrary variable lookup
///
/// Unparseable values are logged and ignored.
pub fn apply_overrides<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    // LIBRARIAN_STORE
    if let Some(path) = lookup("LIBRARIAN_STORE") {
        if !path.trim().is_empty() {
            config.store.path = Some(PathBuf::from(path));
        }
    }

    // LIBRARIAN_BACKEND
    if let Some(backend) = lookup("LIBRARIAN_BACKEND") {
        match backend.parse() {
            Ok(backend) => config.store.backend = backend,
            Err(e) => warn!("LIBRARIAN_BACKEND: {}", e),
        }
    }

    // LIBRARIAN_EVENTS
    if let Some(sink) = lookup("LIBRARIAN_EVENTS") {
        match sink.parse() {
            Ok(sink) => config.events.sink = sink,
            Err(e) => warn!("LIBRARIAN_EVENTS: {}", e),
        }
    }

    // LIBRARIAN_MAX_ID_ATTEMPTS (0 or empty clears the cap)
    if let Some(attempts) = lookup("LIBRARIAN_MAX_ID_ATTEMPTS") {
        match attempts.trim() {
            "" | "0" => config.ids.max_attempts = None,
            value => match value.parse::<u32>() {
                Ok(n) => config.ids.max_attempts = Some(n),
                Err(e) => warn!("LIBRARIAN_MAX_ID_ATTEMPTS: {}", e),
            },
        }
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "store",
        "backend",
        "path",
        "ids",
        "max_attempts",
        "events",
        "sink",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
