//! Command execution for upgrade-notes.
//!
//! Each subcommand lives in its own module:
//!
//! - **common**: Configuration and limit handling shared by both commands
//! - **report**: Replays a recorded update run through the event table and
//!   prints the relevant notes for every updated package
//! - **extract**: Runs the notes extraction on a single file, which lets
//!   package maintainers preview what users will see
//!
//! Per-package problems (missing notes, non-numeric versions) never fail a
//! command. Only unreadable configuration or event input does.

/// Common utilities shared by the commands.
pub mod common;

/// Notes extraction for a single file.
pub mod extract;

/// Update-run replay and reporting.
pub mod report;
