//! Upgrade-notes lookup: loading, section extraction and display layout.
use regex::Regex;
use std::sync::LazyLock;

pub mod display;
pub mod extract;
pub mod loader;

pub use display::{
    DEFAULT_NOTES_LIMIT, NOTES_LIMIT_MESSAGE, apply_display_limit, format_notes,
};
pub use extract::{extract_relevant_notes, heading_version};
pub use loader::{DEFAULT_NOTES_FILE, FileNotesLoader, NotesLoader};

/// Matches any newline convention: \r\n, \n or \r
static LINE_BREAK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r\n|\n|\r").unwrap());

/// Splits notes text into lines on any newline convention.
pub fn split_lines(content: &str) -> Vec<&str> {
    LINE_BREAK_REGEX.split(content).collect()
}

/// Reads a package's notes and returns the lines relevant to an upgrade
/// from `from_version`.
///
/// None means there are no notes to look at (missing, unreadable or blank
/// file). `Some` with an empty list means the file had nothing relevant.
pub fn find_upgrade_notes(
    loader: &dyn NotesLoader,
    package_name: &str,
    from_version: &str,
) -> Option<Vec<String>> {
    let content = loader.load_notes(package_name)?;

    if content.trim().is_empty() {
        log::debug!("upgrade notes for {package_name} are empty");
        return None;
    }

    let lines = split_lines(&content);

    Some(extract_relevant_notes(&lines, from_version))
}
