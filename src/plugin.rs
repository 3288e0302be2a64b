//! Observer registration table and the handlers of one update run.
use log::*;
use std::collections::HashMap;

use crate::{
    events::{HostEvent, LifecycleEvent, PackageOperation},
    orchestrator::{ReportOutcome, Reporter},
    output::OutputSink,
    recorder::{PackageUpdate, UpdateRecorder},
};

/// State owned by a single update run.
///
/// The recorder lives exactly as long as the run and is drained when the
/// update command finishes.
pub struct RunContext<'a> {
    pub reporter: &'a Reporter,
    pub recorder: UpdateRecorder,
    pub sink: &'a mut dyn OutputSink,
    /// Whether a post-update-cmd event has been handled
    pub finished: bool,
}

impl<'a> RunContext<'a> {
    pub fn new(reporter: &'a Reporter, sink: &'a mut dyn OutputSink) -> Self {
        Self {
            reporter,
            recorder: UpdateRecorder::new(),
            sink,
            finished: false,
        }
    }
}

pub type EventHandler = fn(&mut RunContext<'_>, &HostEvent);

/// Maps lifecycle events to the handlers subscribed to them.
#[derive(Default)]
pub struct EventTable {
    handlers: HashMap<LifecycleEvent, EventHandler>,
}

impl EventTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table with the handlers this tool listens with.
    pub fn subscribed() -> Self {
        let mut table = Self::new();
        table.register(LifecycleEvent::PostPackageUpdate, record_package_update);
        table.register(LifecycleEvent::PostUpdateCmd, show_upgrade_notes);
        table
    }

    pub fn register(&mut self, event: LifecycleEvent, handler: EventHandler) {
        self.handlers.insert(event, handler);
    }

    pub fn is_subscribed(&self, event: LifecycleEvent) -> bool {
        self.handlers.contains_key(&event)
    }

    /// Invokes the handler registered for `event`. Returns false when
    /// nothing is subscribed to it.
    pub fn dispatch(&self, ctx: &mut RunContext<'_>, event: &HostEvent) -> bool {
        let lifecycle = event.lifecycle();

        match self.handlers.get(&lifecycle) {
            Some(handler) => {
                debug!("dispatching {lifecycle}");
                handler(ctx, event);
                true
            }
            None => {
                debug!("no handler subscribed to {lifecycle}");
                false
            }
        }
    }
}

/// Takes note of package updates. Installs and removals are ignored.
pub fn record_package_update(ctx: &mut RunContext<'_>, event: &HostEvent) {
    let HostEvent::PostPackageUpdate { operation } = event else {
        return;
    };

    match operation {
        PackageOperation::Update { initial, target } => {
            ctx.recorder.record(PackageUpdate {
                name: &initial.name,
                pretty_name: initial.pretty_name(),
                source_url: initial.source_url(),
                from_version: &initial.version,
                from_version_pretty: initial.pretty_version(),
                to_version: &target.version,
                to_version_pretty: target.pretty_version(),
            });
        }
        PackageOperation::Install { package }
        | PackageOperation::Uninstall { package } => {
            debug!("ignoring non-update operation for {}", package.name);
        }
    }
}

/// Reports the recorded transitions and empties the recorder.
pub fn show_upgrade_notes(ctx: &mut RunContext<'_>, _event: &HostEvent) {
    ctx.finished = true;

    let recorder = std::mem::take(&mut ctx.recorder);
    let transitions = recorder.into_transitions();

    info!("reporting {} package update(s)", transitions.len());

    let outcomes = ctx.reporter.report(&transitions, &mut *ctx.sink);

    let shown = outcomes
        .iter()
        .filter(|outcome| !matches!(outcome, ReportOutcome::Skipped(_)))
        .count();

    debug!("{shown} of {} package update(s) produced output", outcomes.len());
}
