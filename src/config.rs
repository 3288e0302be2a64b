//! Configuration loading and parsing for `upgrade-notes.toml` files.
//!
//! Also resolves the vendor directory the notes files are read from, falling
//! back to the `config.vendor-dir` setting of the project's `composer.json`.
use derive_builder::Builder;
use log::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    Result,
    error::UpgradeNotesError,
    notes::{DEFAULT_NOTES_FILE, DEFAULT_NOTES_LIMIT},
};

/// Default configuration filename.
pub const DEFAULT_CONFIG_FILE: &str = "upgrade-notes.toml";

/// Vendor directory used when nothing else is configured.
pub const DEFAULT_VENDOR_DIR: &str = "vendor";

/// Package manager manifest consulted for `config.vendor-dir`.
pub const COMPOSER_JSON_FILE: &str = "composer.json";

/// Root configuration structure for `upgrade-notes.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(setter(into, strip_option), default)]
#[serde(default)] // Use default for missing fields
pub struct Config {
    /// Directory holding installed packages. Falls back to composer.json
    /// `config.vendor-dir`, then "vendor".
    pub vendor_dir: Option<String>,
    /// Name of the upgrade-notes file inside each package (default: UPGRADE.md)
    pub notes_file: String,
    /// Maximum number of note lines shown per package (default: 250)
    pub notes_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vendor_dir: None,
            notes_file: DEFAULT_NOTES_FILE.into(),
            notes_limit: DEFAULT_NOTES_LIMIT,
        }
    }
}

impl Config {
    /// Parse configuration from TOML content and validate it.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from `path`, using defaults when it does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            info!(
                "configuration not found at {}: using default",
                path.display()
            );
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if self.notes_limit == 0 {
            return Err(UpgradeNotesError::invalid_config(
                "notes_limit must be greater than 0",
            ));
        }

        if self.notes_file.trim().is_empty() {
            return Err(UpgradeNotesError::invalid_config(
                "notes_file must not be empty",
            ));
        }

        Ok(())
    }

    /// Resolves the vendor directory for `project_dir`.
    ///
    /// Precedence: `cli_override`, then `vendor_dir` from this config, then
    /// composer.json `config.vendor-dir`, then "vendor". Relative paths are
    /// joined onto `project_dir`.
    pub fn resolve_vendor_dir(
        &self,
        project_dir: &Path,
        cli_override: Option<&str>,
    ) -> PathBuf {
        let vendor_dir = cli_override
            .map(String::from)
            .or_else(|| self.vendor_dir.clone())
            .or_else(|| composer_vendor_dir(project_dir))
            .unwrap_or_else(|| DEFAULT_VENDOR_DIR.to_string());

        let trimmed = vendor_dir.trim_end_matches('/');
        let trimmed = if trimmed.is_empty() { "/" } else { trimmed };

        let path = Path::new(trimmed);

        if path.is_absolute() {
            path.to_path_buf()
        } else {
            project_dir.join(path)
        }
    }
}

/// Reads `config.vendor-dir` from the project's composer.json, if present.
fn composer_vendor_dir(project_dir: &Path) -> Option<String> {
    let path = project_dir.join(COMPOSER_JSON_FILE);
    let content = fs::read_to_string(&path).ok()?;

    let doc: Value = match serde_json::from_str(&content) {
        Ok(doc) => doc,
        Err(err) => {
            warn!("ignoring unparseable {}: {err}", path.display());
            return None;
        }
    };

    doc.get("config")
        .and_then(|config| config.get("vendor-dir"))
        .and_then(|dir| dir.as_str())
        .map(String::from)
}
