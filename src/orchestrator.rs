//! Turns the transitions of an update run into console messages.
//!
//! For every package the reporter decides between three outcomes: nothing at
//! all, the relevant upgrade notes followed by a link, or just a link to the
//! notes online.
use log::*;

use crate::{
    notes::{NotesLoader, apply_display_limit, find_upgrade_notes},
    output::OutputSink,
    recorder::{Direction, PackageTransition},
    version::is_numeric_version,
};

/// Why a package produced no output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Pretty versions are identical, e.g. dev-main to dev-main
    NoopTransition,
    /// Notes file missing, unreadable or blank
    AbsentNotes,
    /// Notes file exists but holds nothing for this upgrade
    NoRelevantNotes,
}

/// What was reported for one package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportOutcome {
    Skipped(SkipReason),
    /// Relevant notes were found; `truncated` is set when the display limit
    /// replaced them with a warning.
    Notes { lines: usize, truncated: bool },
    /// Downgrade or non-numeric origin version: only the online link.
    Link,
}

pub struct Reporter {
    loader: Box<dyn NotesLoader>,
    notes_limit: usize,
}

impl Reporter {
    pub fn new(loader: Box<dyn NotesLoader>, notes_limit: usize) -> Self {
        Self {
            loader,
            notes_limit,
        }
    }

    pub fn notes_limit(&self) -> usize {
        self.notes_limit
    }

    /// Reports every transition in order. One package never prevents the
    /// others from being reported.
    pub fn report(
        &self,
        transitions: &[PackageTransition],
        sink: &mut dyn OutputSink,
    ) -> Vec<ReportOutcome> {
        transitions
            .iter()
            .map(|transition| self.report_transition(transition, sink))
            .collect()
    }

    pub fn report_transition(
        &self,
        transition: &PackageTransition,
        sink: &mut dyn OutputSink,
    ) -> ReportOutcome {
        // Avoid messages like "from version dev-master to dev-master"
        if transition.is_noop() {
            debug!(
                "skipping {}: version unchanged ({})",
                transition.name, transition.from_version_pretty
            );
            return ReportOutcome::Skipped(SkipReason::NoopTransition);
        }

        // Without a numeric origin there is no telling which notes apply
        if transition.direction == Direction::Upgrade
            && is_numeric_version(&transition.from_version_pretty)
        {
            return self.report_notes(transition, sink);
        }

        write_intro(transition, sink);
        sink.write("");
        sink.write(&format!(
            "  You can find the upgrade notes online at: {}",
            transition.source_url
        ));

        ReportOutcome::Link
    }

    fn report_notes(
        &self,
        transition: &PackageTransition,
        sink: &mut dyn OutputSink,
    ) -> ReportOutcome {
        let Some(notes) = find_upgrade_notes(
            self.loader.as_ref(),
            &transition.name,
            &transition.from_version_pretty,
        ) else {
            debug!("skipping {}: no upgrade notes", transition.name);
            return ReportOutcome::Skipped(SkipReason::AbsentNotes);
        };

        if notes.is_empty() {
            debug!(
                "skipping {}: no notes relevant to {}",
                transition.name, transition.from_version_pretty
            );
            return ReportOutcome::Skipped(SkipReason::NoRelevantNotes);
        }

        let truncated = notes.len() > self.notes_limit;

        if truncated {
            warn!(
                "{} relevant note lines for {} exceed the limit of {}",
                notes.len(),
                transition.name,
                self.notes_limit
            );
        }

        write_intro(transition, sink);
        sink.write("");
        sink.write(&apply_display_limit(&notes, self.notes_limit));
        sink.write("");
        sink.write(&format!(
            "  You can find the upgrade notes for all versions online at: {}",
            transition.source_url
        ));

        ReportOutcome::Notes {
            lines: notes.len(),
            truncated,
        }
    }
}

fn write_intro(transition: &PackageTransition, sink: &mut dyn OutputSink) {
    sink.write("");
    sink.write(&format!(
        "  Seems you have {} {} from version {} to {}.",
        transition.direction.verb(),
        transition.pretty_name,
        transition.from_version_pretty,
        transition.to_version_pretty
    ));
    sink.write("");
    sink.write(
        "  Please check the upgrade notes for possible incompatible changes and adjust your application code accordingly.",
    );
}
