//! Configuration loading
//!
//! Resolution order for the config file: `--config` flag, the
//! `STACKLENS_CONFIG` environment variable, then
//! `$HOME/.stacklens/stacklens.toml`. An explicitly named file must exist;
//! a missing default file falls back to built-in defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use stacklens_render::DEFAULT_MAX_WIDTH;
use tracing::debug;

/// Template written by `stacklens init`.
pub const DEFAULT_CONFIG: &str = r#"# stacklens configuration

[render]
# Overall box character width
max_width = 100
# Also emit unparsed frame text for each group
raw_frames = false

[log]
# Log level when RUST_LOG is not set: error, warn, info, debug, trace
level = "info"
"#;

/// Errors that can occur during config loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub render: RenderSection,
    pub log: LogSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSection {
    /// Overall box character width
    pub max_width: usize,
    /// Also emit unparsed frame text for each group
    pub raw_frames: bool,
}

impl Default for RenderSection {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
            raw_frames: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSection {
    /// Default log level when RUST_LOG is not set
    pub level: String,
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

enum Resolved {
    /// Named on the command line or via the environment; must exist
    Explicit(PathBuf),
    /// Well-known default location; may be absent
    Default(PathBuf),
}

/// Resolve and load configuration.
pub fn load(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    match resolve_path(explicit) {
        Resolved::Explicit(path) => {
            if !path.exists() {
                return Err(ConfigError::NotFound(path));
            }
            read(&path)
        }
        Resolved::Default(path) => {
            if path.exists() {
                read(&path)
            } else {
                debug!(path = %path.display(), "no config file, using defaults");
                Ok(Config::default())
            }
        }
    }
}

fn resolve_path(explicit: Option<&Path>) -> Resolved {
    if let Some(path) = explicit {
        return Resolved::Explicit(path.to_path_buf());
    }
    if let Ok(env_path) = std::env::var("STACKLENS_CONFIG") {
        if !env_path.is_empty() {
            return Resolved::Explicit(PathBuf::from(env_path));
        }
    }
    Resolved::Default(default_config_path())
}

/// `$HOME/.stacklens/stacklens.toml`
pub fn default_config_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".stacklens").join("stacklens.toml")
}

/// Where `stacklens init` writes its file.
pub fn init_path(explicit: Option<&Path>) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(default_config_path)
}

fn read(path: &Path) -> Result<Config, ConfigError> {
    debug!(path = %path.display(), "loading config file");
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}
