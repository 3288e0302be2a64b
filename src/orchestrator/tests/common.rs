//! Common test utilities for orchestrator tests.

use crate::{
    notes::loader::MockNotesLoader,
    orchestrator::Reporter,
    recorder::{PackageTransition, PackageUpdate, UpdateRecorder},
};

pub use crate::{
    notes::{DEFAULT_NOTES_LIMIT, NOTES_LIMIT_MESSAGE},
    orchestrator::{ReportOutcome, SkipReason},
    output::BufferSink,
};

pub const TEST_PKG_NAME: &str = "acme/widgets";
pub const TEST_SOURCE_URL: &str = "https://github.com/acme/widgets.git";

pub const TEST_NOTES: &str = "Upgrading Instructions for Widgets
==================================

Upgrade from Widgets 3.0.0
--------------------------

- `Widget::spin()` was removed.

Upgrade from Widgets 2.5.0
--------------------------

- Config key `speed` was renamed to `rate`.

Upgrade from Widgets 2.0.0
--------------------------

- PHP 8.1 is required.
";

/// Builds a transition the same way a recorded package update would.
pub fn transition(
    from: &str,
    from_pretty: &str,
    to: &str,
    to_pretty: &str,
) -> PackageTransition {
    let mut recorder = UpdateRecorder::new();
    recorder.record(PackageUpdate {
        name: TEST_PKG_NAME,
        pretty_name: TEST_PKG_NAME,
        source_url: TEST_SOURCE_URL,
        from_version: from,
        from_version_pretty: from_pretty,
        to_version: to,
        to_version_pretty: to_pretty,
    });
    recorder.into_transitions().remove(0)
}

/// Loader returning `content` for the test package.
pub fn loader_with(content: Option<String>) -> MockNotesLoader {
    let mut loader = MockNotesLoader::new();
    loader
        .expect_load_notes()
        .returning(move |_| content.clone());
    loader
}

/// Loader that fails the test if it is ever consulted.
pub fn untouched_loader() -> MockNotesLoader {
    let mut loader = MockNotesLoader::new();
    loader.expect_load_notes().never();
    loader
}

pub fn create_test_reporter(loader: MockNotesLoader) -> Reporter {
    Reporter::new(Box::new(loader), DEFAULT_NOTES_LIMIT)
}
