//! Tests for packages that produce no output.
//!
//! Tests for:
//! - Identical pretty versions
//! - Missing or blank notes files
//! - Notes files without a relevant section

use super::common::*;

#[test]
fn identical_dev_versions_produce_nothing() {
    let reporter = create_test_reporter(untouched_loader());
    let mut sink = BufferSink::new();

    let outcome = reporter.report_transition(
        &transition("dev-main", "dev-main", "dev-main", "dev-main"),
        &mut sink,
    );

    assert_eq!(outcome, ReportOutcome::Skipped(SkipReason::NoopTransition));
    assert!(sink.lines().is_empty());
}

#[test]
fn missing_notes_file_produces_nothing() {
    let reporter = create_test_reporter(loader_with(None));
    let mut sink = BufferSink::new();

    let outcome = reporter.report_transition(
        &transition("2.5.0.0", "2.5.0", "3.1.0.0", "3.1.0"),
        &mut sink,
    );

    assert_eq!(outcome, ReportOutcome::Skipped(SkipReason::AbsentNotes));
    assert!(sink.lines().is_empty());
}

#[test]
fn blank_notes_file_produces_nothing() {
    let reporter = create_test_reporter(loader_with(Some("\n\n".into())));
    let mut sink = BufferSink::new();

    let outcome = reporter.report_transition(
        &transition("2.5.0.0", "2.5.0", "3.1.0.0", "3.1.0"),
        &mut sink,
    );

    assert_eq!(outcome, ReportOutcome::Skipped(SkipReason::AbsentNotes));
    assert!(sink.lines().is_empty());
}

#[test]
fn notes_without_relevant_section_produce_nothing() {
    let reporter = create_test_reporter(loader_with(Some(
        "Upgrade from Widgets 1.0.0\n- ancient history".into(),
    )));
    let mut sink = BufferSink::new();

    let outcome = reporter.report_transition(
        &transition("2.5.0.0", "2.5.0", "3.1.0.0", "3.1.0"),
        &mut sink,
    );

    assert_eq!(outcome, ReportOutcome::Skipped(SkipReason::NoRelevantNotes));
    assert!(sink.lines().is_empty());
}
