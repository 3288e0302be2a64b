//! Selection of the upgrade-notes sections relevant to a version transition.
use regex::Regex;
use std::sync::LazyLock;

use crate::version::{is_older, major_version};

/// Matches section headings such as "Upgrade from Yii 2.0.14"
static HEADING_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^Upgrade from (?<name>\w+) (?<version>[0-9]\.[0-9]+\.?[0-9.]*)")
        .unwrap()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Skipping,
    Consuming,
}

/// Returns the version token of an "Upgrade from <name> <version>" heading.
pub fn heading_version(line: &str) -> Option<&str> {
    HEADING_REGEX
        .captures(line)
        .and_then(|caps| caps.name("version"))
        .map(|m| m.as_str())
}

/// Collects the lines relevant to an upgrade starting at `from_version`.
///
/// A heading stops the scan when it is older than `from_version` and either
/// an exact match for `from_version` was already seen or the heading also
/// predates its major line. That heading and everything after it are
/// dropped. Lines before the first heading are skipped; from the first
/// heading that does not stop the scan onward, lines are consumed with
/// headings included. Such a heading may still be older than
/// `from_version` as long as it stays within the major line.
///
/// The caller is expected to have checked `from_version` with
/// [`is_numeric_version`](crate::version::is_numeric_version). An empty
/// result means nothing relevant was found.
pub fn extract_relevant_notes<S: AsRef<str>>(
    lines: &[S],
    from_version: &str,
) -> Vec<String> {
    let from_version_major = major_version(from_version);

    let mut relevant = vec![];
    let mut state = ScanState::Skipping;
    let mut found_exact_match = false;

    for line in lines {
        let line = line.as_ref();

        if let Some(version) = heading_version(line) {
            if version == from_version {
                found_exact_match = true;
            }

            if is_older(version, from_version)
                && (found_exact_match || is_older(version, from_version_major))
            {
                break;
            }

            state = ScanState::Consuming;
        }

        if state == ScanState::Consuming {
            relevant.push(line.to_string());
        }
    }

    relevant
}
