//! Configuration structures for the watcher and output table.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{PojistError, Result};

/// Main configuration for pojist.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PojistConfig {
    /// Folder locations used by the watcher.
    pub watch: WatchConfig,

    /// Output table configuration.
    pub output: OutputConfig,
}

/// Folder watching configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchConfig {
    /// Folder scanned for incoming PDFs.
    pub watch_folder: PathBuf,

    /// Destination for successfully processed PDFs.
    pub sorted_folder: PathBuf,

    /// Destination for unrecognized or failing PDFs.
    pub error_folder: PathBuf,

    /// Delay between two scans of the watch folder, in milliseconds.
    pub poll_interval_ms: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            watch_folder: PathBuf::from("inbox"),
            sorted_folder: PathBuf::from("sorted"),
            error_folder: PathBuf::from("errors"),
            poll_interval_ms: 1000,
        }
    }
}

/// Output table configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// CSV file rows are appended to.
    pub csv_path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from("pojistky.csv"),
        }
    }
}

impl PojistConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| PojistError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| PojistError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
