//! Common functionality shared between commands
use log::*;
use std::path::{Path, PathBuf};

use crate::{
    Result,
    config::{Config, DEFAULT_CONFIG_FILE},
    error::UpgradeNotesError,
};

/// Config path from the --config flag, defaulting to upgrade-notes.toml in
/// `project_dir`.
pub fn config_path(config_flag: Option<&str>, project_dir: &Path) -> PathBuf {
    match config_flag {
        Some(path) => PathBuf::from(path),
        None => project_dir.join(DEFAULT_CONFIG_FILE),
    }
}

/// Loads configuration. An explicitly passed config file must exist.
pub fn load_config(config_flag: Option<&str>, project_dir: &Path) -> Result<Config> {
    let path = config_path(config_flag, project_dir);

    if config_flag.is_some() && !path.is_file() {
        return Err(UpgradeNotesError::invalid_args(format!(
            "config file does not exist: {}",
            path.display()
        )));
    }

    debug!("loading configuration from {}", path.display());
    Config::load(&path)
}

/// Notes limit from the CLI override or the configuration.
pub fn notes_limit(config: &Config, cli_override: Option<usize>) -> Result<usize> {
    match cli_override {
        Some(0) => Err(UpgradeNotesError::invalid_args(
            "--notes-limit must be greater than 0",
        )),
        Some(limit) => Ok(limit),
        None => Ok(config.notes_limit),
    }
}
