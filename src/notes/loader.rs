//! Access to the upgrade-notes files bundled with installed packages.
use log::*;
use std::{fs, path::PathBuf};

/// Default name of the upgrade-notes file inside a package directory.
pub const DEFAULT_NOTES_FILE: &str = "UPGRADE.md";

/// Abstraction for loading a package's upgrade-notes text.
///
/// Absence and unreadability are ordinary outcomes, so implementations
/// return None rather than an error.
#[cfg_attr(test, mockall::automock)]
pub trait NotesLoader {
    /// Raw content of the notes file for `package_name`, if there is one.
    fn load_notes(&self, package_name: &str) -> Option<String>;
}

/// Loads `<root_dir>/<package_name>/<notes_file>` from the local filesystem.
#[derive(Debug, Clone)]
pub struct FileNotesLoader {
    root_dir: PathBuf,
    notes_file: String,
}

impl FileNotesLoader {
    pub fn new(root_dir: impl Into<PathBuf>, notes_file: impl Into<String>) -> Self {
        Self {
            root_dir: root_dir.into(),
            notes_file: notes_file.into(),
        }
    }

    /// Location of the notes file for a package, whether or not it exists.
    pub fn notes_path(&self, package_name: &str) -> PathBuf {
        self.root_dir.join(package_name).join(&self.notes_file)
    }
}

impl NotesLoader for FileNotesLoader {
    fn load_notes(&self, package_name: &str) -> Option<String> {
        let path = self.notes_path(package_name);

        if !path.is_file() {
            debug!("no upgrade notes found at {}", path.display());
            return None;
        }

        match fs::read_to_string(&path) {
            Ok(content) => Some(content),
            Err(err) => {
                warn!("unable to read upgrade notes {}: {err}", path.display());
                None
            }
        }
    }
}
