//! Lifecycle events emitted by the dependency manager during an update.
//!
//! A recorded event stream is either a JSON array or newline-delimited JSON
//! values:
//!
//! ```json
//! {"event": "post-package-update", "operation": {"type": "update",
//!   "initial": {"name": "acme/widgets", "version": "2.5.0.0", "pretty_version": "2.5.0"},
//!   "target": {"name": "acme/widgets", "version": "3.1.0.0", "pretty_version": "3.1.0"}}}
//! {"event": "post-update-cmd"}
//! ```
use serde::Deserialize;
use std::fmt::Display;

use crate::{Result, error::UpgradeNotesError};

/// Identifier used to register event handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleEvent {
    /// A single package operation finished
    PostPackageUpdate,
    /// The whole update command finished
    PostUpdateCmd,
}

impl Display for LifecycleEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LifecycleEvent::PostPackageUpdate => {
                f.write_str("post-package-update")
            }
            LifecycleEvent::PostUpdateCmd => f.write_str("post-update-cmd"),
        }
    }
}

/// Snapshot of a package on one side of an operation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PackageInfo {
    pub name: String,
    #[serde(default)]
    pub pretty_name: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
    pub version: String,
    #[serde(default)]
    pub pretty_version: Option<String>,
}

impl PackageInfo {
    pub fn pretty_name(&self) -> &str {
        self.pretty_name.as_deref().unwrap_or(&self.name)
    }

    pub fn source_url(&self) -> &str {
        self.source_url.as_deref().unwrap_or_default()
    }

    pub fn pretty_version(&self) -> &str {
        self.pretty_version.as_deref().unwrap_or(&self.version)
    }
}

/// Package operation carried by a post-package-update event.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PackageOperation {
    Update {
        initial: PackageInfo,
        target: PackageInfo,
    },
    Install {
        package: PackageInfo,
    },
    Uninstall {
        package: PackageInfo,
    },
}

/// One event of a recorded stream.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum HostEvent {
    PostPackageUpdate { operation: PackageOperation },
    PostUpdateCmd,
}

impl HostEvent {
    pub fn lifecycle(&self) -> LifecycleEvent {
        match self {
            HostEvent::PostPackageUpdate { .. } => {
                LifecycleEvent::PostPackageUpdate
            }
            HostEvent::PostUpdateCmd => LifecycleEvent::PostUpdateCmd,
        }
    }
}

/// Parses a recorded event stream, either a JSON array of events or a
/// sequence of whitespace separated events (JSON lines).
pub fn parse_events(content: &str) -> Result<Vec<HostEvent>> {
    let trimmed = content.trim_start();

    if trimmed.starts_with('[') {
        let events: Vec<HostEvent> = serde_json::from_str(trimmed)?;
        return Ok(events);
    }

    serde_json::Deserializer::from_str(trimmed)
        .into_iter::<HostEvent>()
        .enumerate()
        .map(|(position, event)| {
            event.map_err(|err| {
                UpgradeNotesError::invalid_events(format!(
                    "event {} could not be parsed: {err}",
                    position + 1
                ))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const UPDATE_EVENT: &str = r#"{"event":"post-package-update","operation":{"type":"update","initial":{"name":"acme/widgets","pretty_name":"Acme/Widgets","source_url":"https://github.com/acme/widgets.git","version":"2.5.0.0","pretty_version":"2.5.0"},"target":{"name":"acme/widgets","version":"3.1.0.0","pretty_version":"3.1.0"}}}"#;

    #[test]
    fn parses_json_lines() {
        let content = format!("{UPDATE_EVENT}\n{{\"event\":\"post-update-cmd\"}}\n");
        let events = parse_events(&content).unwrap();

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].lifecycle(), LifecycleEvent::PostPackageUpdate);
        assert_eq!(events[1], HostEvent::PostUpdateCmd);
    }

    #[test]
    fn parses_json_array() {
        let content = format!("[{UPDATE_EVENT}, {{\"event\":\"post-update-cmd\"}}]");
        let events = parse_events(&content).unwrap();

        assert_eq!(events.len(), 2);

        let HostEvent::PostPackageUpdate {
            operation: PackageOperation::Update { initial, target },
        } = &events[0]
        else {
            panic!("expected an update operation");
        };

        assert_eq!(initial.pretty_name(), "Acme/Widgets");
        assert_eq!(initial.pretty_version(), "2.5.0");
        assert_eq!(target.version, "3.1.0.0");
        assert_eq!(target.source_url(), "");
    }

    #[test]
    fn optional_fields_fall_back() {
        let info: PackageInfo =
            serde_json::from_str(r#"{"name":"acme/widgets","version":"1.0.0.0"}"#)
                .unwrap();

        assert_eq!(info.pretty_name(), "acme/widgets");
        assert_eq!(info.pretty_version(), "1.0.0.0");
        assert_eq!(info.source_url(), "");
    }

    #[test]
    fn parses_install_and_uninstall_operations() {
        let content = r#"
{"event":"post-package-update","operation":{"type":"install","package":{"name":"a/a","version":"1.0.0.0"}}}
{"event":"post-package-update","operation":{"type":"uninstall","package":{"name":"b/b","version":"1.0.0.0"}}}
"#;
        let events = parse_events(content).unwrap();

        assert!(matches!(
            events[0],
            HostEvent::PostPackageUpdate {
                operation: PackageOperation::Install { .. }
            }
        ));
        assert!(matches!(
            events[1],
            HostEvent::PostPackageUpdate {
                operation: PackageOperation::Uninstall { .. }
            }
        ));
    }

    #[test]
    fn empty_stream_has_no_events() {
        assert!(parse_events("").unwrap().is_empty());
        assert!(parse_events("  \n").unwrap().is_empty());
        assert!(parse_events("[]").unwrap().is_empty());
    }

    #[test]
    fn unknown_event_is_rejected() {
        let result = parse_events(r#"{"event":"pre-install-cmd"}"#);
        assert!(matches!(result, Err(UpgradeNotesError::InvalidEvents(_))));
    }

    #[test]
    fn malformed_array_is_json_error() {
        let result = parse_events(r#"[{"event":"post-update-cmd"},"#);
        assert!(matches!(result, Err(UpgradeNotesError::JsonParseError(_))));
    }

    #[test]
    fn lifecycle_event_display() {
        assert_eq!(
            LifecycleEvent::PostPackageUpdate.to_string(),
            "post-package-update"
        );
        assert_eq!(LifecycleEvent::PostUpdateCmd.to_string(), "post-update-cmd");
    }
}
