//! Subcommand implementations.

pub mod batch;
pub mod config;
pub mod process;
pub mod watch;

use std::path::{Path, PathBuf};

use pojist_core::PojistConfig;
use tracing::debug;

/// Default location of the configuration file.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pojist")
        .join("config.json")
}

/// Load the explicit config file, else the default one if present, else defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<PojistConfig> {
    if let Some(path) = config_path {
        return Ok(PojistConfig::from_file(Path::new(path))?);
    }

    let default_path = default_config_path();
    if default_path.exists() {
        debug!("Using config file {}", default_path.display());
        Ok(PojistConfig::from_file(&default_path)?)
    } else {
        Ok(PojistConfig::default())
    }
}
