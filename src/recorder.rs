//! Bookkeeping of the package version transitions seen during one update run.
use log::*;
use std::{collections::HashMap, fmt::Display};

use crate::version::is_upgrade;

/// Direction of a version transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Upgrade,
    Downgrade,
}

impl Direction {
    /// Derives the direction from raw versions. Versions that cannot be
    /// compared are treated as a downgrade.
    pub fn between(from: &str, to: &str) -> Self {
        if is_upgrade(from, to) {
            Direction::Upgrade
        } else {
            Direction::Downgrade
        }
    }

    /// Past-tense verb used in console messages.
    pub fn verb(&self) -> &'static str {
        match self {
            Direction::Upgrade => "upgraded",
            Direction::Downgrade => "downgraded",
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Upgrade => f.write_str("up"),
            Direction::Downgrade => f.write_str("down"),
        }
    }
}

/// Net version change of one package within a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageTransition {
    /// Canonical package name, e.g. "acme/widgets"
    pub name: String,
    /// Display name
    pub pretty_name: String,
    /// Source repository URL, possibly empty
    pub source_url: String,
    /// Normalized version before the update
    pub from_version: String,
    /// Human readable version before the update, e.g. "2.0.1" or "dev-main"
    pub from_version_pretty: String,
    /// Normalized version after the update
    pub to_version: String,
    /// Human readable version after the update
    pub to_version_pretty: String,
    pub direction: Direction,
}

impl PackageTransition {
    /// Whether the pretty versions are identical, e.g. dev-main to dev-main.
    pub fn is_noop(&self) -> bool {
        self.from_version_pretty == self.to_version_pretty
    }
}

/// Raw package data for a single observed update.
#[derive(Debug, Clone, Default)]
pub struct PackageUpdate<'a> {
    pub name: &'a str,
    pub pretty_name: &'a str,
    pub source_url: &'a str,
    pub from_version: &'a str,
    pub from_version_pretty: &'a str,
    pub to_version: &'a str,
    pub to_version_pretty: &'a str,
}

/// Run-scoped accumulator of package transitions.
///
/// Transitions are keyed by package name. Recording a package again
/// replaces its data but keeps the position where it was first seen.
#[derive(Debug, Default)]
pub struct UpdateRecorder {
    transitions: Vec<PackageTransition>,
    index: HashMap<String, usize>,
}

impl UpdateRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores or replaces the transition for `update.name`.
    pub fn record(&mut self, update: PackageUpdate<'_>) {
        let transition = PackageTransition {
            name: update.name.to_string(),
            pretty_name: update.pretty_name.to_string(),
            source_url: update.source_url.to_string(),
            from_version: update.from_version.to_string(),
            from_version_pretty: update.from_version_pretty.to_string(),
            to_version: update.to_version.to_string(),
            to_version_pretty: update.to_version_pretty.to_string(),
            direction: Direction::between(update.from_version, update.to_version),
        };

        debug!(
            "recorded {} {} -> {} ({})",
            transition.name,
            transition.from_version_pretty,
            transition.to_version_pretty,
            transition.direction
        );

        if let Some(position) = self.index.get(&transition.name) {
            self.transitions[*position] = transition;
        } else {
            self.index
                .insert(transition.name.clone(), self.transitions.len());
            self.transitions.push(transition);
        }
    }

    /// Recorded transitions in observation order.
    pub fn transitions(&self) -> &[PackageTransition] {
        &self.transitions
    }

    pub fn get(&self, name: &str) -> Option<&PackageTransition> {
        self.index.get(name).map(|position| &self.transitions[*position])
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Consumes the recorder at the end of a run.
    pub fn into_transitions(self) -> Vec<PackageTransition> {
        self.transitions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn update<'a>(name: &'a str, from: &'a str, to: &'a str) -> PackageUpdate<'a> {
        PackageUpdate {
            name,
            pretty_name: name,
            source_url: "https://github.com/acme/widgets",
            from_version: from,
            from_version_pretty: from,
            to_version: to,
            to_version_pretty: to,
        }
    }

    #[test]
    fn records_upgrade_direction() {
        let mut recorder = UpdateRecorder::new();
        recorder.record(update("acme/widgets", "1.0.0.0", "2.0.0.0"));

        let transition = recorder.get("acme/widgets").unwrap();
        assert_eq!(transition.direction, Direction::Upgrade);
        assert_eq!(transition.from_version_pretty, "1.0.0.0");
        assert_eq!(transition.to_version_pretty, "2.0.0.0");
    }

    #[test]
    fn records_downgrade_direction() {
        let mut recorder = UpdateRecorder::new();
        recorder.record(update("acme/widgets", "2.0.0.0", "1.5.0.0"));

        assert_eq!(
            recorder.get("acme/widgets").unwrap().direction,
            Direction::Downgrade
        );
    }

    #[test]
    fn incomparable_versions_record_as_downgrade() {
        let mut recorder = UpdateRecorder::new();
        recorder.record(update("acme/widgets", "dev-main", "dev-feature"));

        assert_eq!(
            recorder.get("acme/widgets").unwrap().direction,
            Direction::Downgrade
        );
    }

    #[test]
    fn later_record_overwrites_and_keeps_position() {
        let mut recorder = UpdateRecorder::new();
        recorder.record(update("acme/widgets", "1.0.0.0", "1.1.0.0"));
        recorder.record(update("acme/gadgets", "3.0.0.0", "3.1.0.0"));
        recorder.record(update("acme/widgets", "1.0.0.0", "2.0.0.0"));

        assert_eq!(recorder.len(), 2);

        let transitions = recorder.transitions();
        assert_eq!(transitions[0].name, "acme/widgets");
        assert_eq!(transitions[0].to_version, "2.0.0.0");
        assert_eq!(transitions[1].name, "acme/gadgets");
    }

    #[test]
    fn into_transitions_preserves_order() {
        let mut recorder = UpdateRecorder::new();
        recorder.record(update("a/a", "1.0", "2.0"));
        recorder.record(update("b/b", "1.0", "2.0"));
        recorder.record(update("c/c", "1.0", "2.0"));

        let names = recorder
            .into_transitions()
            .into_iter()
            .map(|t| t.name)
            .collect::<Vec<String>>();

        assert_eq!(names, vec!["a/a", "b/b", "c/c"]);
    }

    #[test]
    fn noop_transition_compares_pretty_versions() {
        let mut recorder = UpdateRecorder::new();
        recorder.record(update("acme/widgets", "dev-main", "dev-main"));
        assert!(recorder.get("acme/widgets").unwrap().is_noop());
        assert!(!recorder.is_empty());
    }

    #[test]
    fn direction_display_and_verb() {
        assert_eq!(Direction::Upgrade.to_string(), "up");
        assert_eq!(Direction::Downgrade.to_string(), "down");
        assert_eq!(Direction::Upgrade.verb(), "upgraded");
        assert_eq!(Direction::Downgrade.verb(), "downgraded");
    }
}
