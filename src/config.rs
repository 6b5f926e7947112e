//! Installation-level configuration.
//!
//! Stored in a machine-readable TOML file under the OS data directory
//! (overridable with `ADAPTPLAY_HOME`). Everything here tunes the ambient
//! pieces — where profile documents live, whether adjustment decisions are
//! logged — and the engine runs fine on `AppConfig::default()`.

use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

use crate::adaptation::{AdjustmentLog, AdjustmentSink, NullSink};
use crate::profiles::FileProfileStore;

/// Root configuration persisted per installation.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageSettings,
    #[serde(default)]
    pub observability: ObservabilitySettings,
}

/// Where profile documents and the adjustment log are kept.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Overrides the OS-resolved data directory when set.
    pub data_dir: Option<PathBuf>,
    /// File name of the adjustment-decision log inside the data directory.
    #[serde(default = "default_adjustment_log_file")]
    pub adjustment_log_file: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            data_dir: None,
            adjustment_log_file: default_adjustment_log_file(),
        }
    }
}

fn default_adjustment_log_file() -> String {
    "adjustments.jsonl".to_string()
}

/// Diagnostic-channel toggles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilitySettings {
    /// Whether rule firings are appended to the adjustment log.
    #[serde(default = "default_log_adjustments")]
    pub log_adjustments: bool,
}

impl Default for ObservabilitySettings {
    fn default() -> Self {
        Self {
            log_adjustments: default_log_adjustments(),
        }
    }
}

const fn default_log_adjustments() -> bool {
    true
}

pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Returns the root directory where adaptplay stores data.
///
/// Order of precedence:
/// 1. `ADAPTPLAY_HOME` environment variable.
/// 2. OS-specific data directory via `directories::BaseDirs`.
pub fn data_root() -> Result<PathBuf> {
    if let Ok(path) = env::var("ADAPTPLAY_HOME") {
        return Ok(PathBuf::from(path));
    }
    let base_dirs = BaseDirs::new().context("Unable to determine OS data directory")?;
    Ok(base_dirs.data_dir().join("Adaptplay"))
}

/// Path to the config file.
pub fn config_file_path() -> Result<PathBuf> {
    Ok(data_root()?.join(CONFIG_FILE_NAME))
}

/// Loads the configuration from disk, falling back to defaults when the file
/// is missing, unreadable, or malformed.
pub fn load_or_default() -> AppConfig {
    try_load().ok().flatten().unwrap_or_default()
}

fn try_load() -> Result<Option<AppConfig>> {
    let path = config_file_path()?;
    if !path.exists() {
        return Ok(None);
    }
    let data = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file {:?}", path))?;
    let config = toml::from_str(&data)
        .with_context(|| format!("Failed to parse config file {:?}", path))?;
    Ok(Some(config))
}

/// Persists the configuration to disk.
pub fn save(config: &AppConfig) -> Result<()> {
    let root = data_root()?;
    fs::create_dir_all(&root)?;
    let data = toml::to_string_pretty(config)?;
    fs::write(root.join(CONFIG_FILE_NAME), data)?;
    Ok(())
}

impl AppConfig {
    /// Directory holding persisted profiles and logs.
    pub fn resolved_data_dir(&self) -> Result<PathBuf> {
        match &self.storage.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => data_root(),
        }
    }

    /// File-backed profile store rooted at the resolved data directory.
    pub fn profile_store(&self) -> Result<FileProfileStore> {
        Ok(FileProfileStore::new(
            self.resolved_data_dir()?.join("profiles"),
        ))
    }

    /// Path of the JSONL adjustment log.
    pub fn adjustment_log_path(&self) -> Result<PathBuf> {
        Ok(self
            .resolved_data_dir()?
            .join(&self.storage.adjustment_log_file))
    }

    /// Adjustment sink honoring the observability toggle.
    pub fn adjustment_sink(&self) -> Result<Box<dyn AdjustmentSink>> {
        if self.observability.log_adjustments {
            Ok(Box::new(AdjustmentLog::new(self.adjustment_log_path()?)))
        } else {
            Ok(Box::new(NullSink))
        }
    }
}
