//! Shows the upgrade notes relevant to each package version transition of a
//! dependency update.
//!
//! During an update run the dependency manager emits lifecycle events. Every
//! package update is recorded, and when the update command finishes each
//! recorded package's bundled upgrade-notes file is scanned for the sections
//! between the old and the new version.
pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod events;
pub mod notes;
pub mod orchestrator;
pub mod output;
pub mod plugin;
pub mod recorder;
pub mod version;

pub use error::{Result, UpgradeNotesError};
