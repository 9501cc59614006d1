//! Editor configuration
//!
//! Read from `~/.config/modelt/config.yaml` unless another path is given.
//! Every key is optional and a broken file never stops the editor.

use crate::error::ConfigError;
use crate::export::ExportFormat;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "modelt";

pub const DEFAULT_PROVIDER: &str = "ore";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Catalog provider executable, invoked as `<provider> fields|models`.
    #[serde(default = "default_provider")]
    pub provider: String,
    #[serde(default)]
    pub export_format: ExportFormat,
    /// `EnvFilter` directives used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_provider() -> String {
    DEFAULT_PROVIDER.to_string()
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            export_format: ExportFormat::default(),
            log_filter: default_log_filter(),
        }
    }
}

impl EditorConfig {
    /// Reads the config at `path`. A missing file is `Ok(None)`.
    pub fn read(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Some(config))
    }
}

/// `$XDG_CONFIG_HOME/modelt` or `~/.config/modelt`; `%APPDATA%\modelt` on
/// Windows.
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}
