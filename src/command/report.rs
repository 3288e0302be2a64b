//! Report command implementation.
use log::*;
use std::{
    fs,
    io::{self, Read},
    path::Path,
};

use crate::{
    Result,
    cli::{ReportArgs, STDIN_PATH},
    command::common,
    events::{HostEvent, parse_events},
    notes::FileNotesLoader,
    orchestrator::Reporter,
    output::{ConsoleSink, OutputSink},
    plugin::{EventTable, RunContext},
};

/// Replays the recorded update run and prints the relevant upgrade notes.
pub fn execute(config_flag: Option<&str>, args: &ReportArgs) -> Result<()> {
    let project_dir = Path::new(&args.project_dir);
    let config = common::load_config(config_flag, project_dir)?;
    let notes_limit = common::notes_limit(&config, args.notes_limit)?;

    let vendor_dir =
        config.resolve_vendor_dir(project_dir, args.vendor_dir.as_deref());
    info!("reading upgrade notes from: {}", vendor_dir.display());

    let content = read_events(&args.events)?;
    let events = parse_events(&content)?;
    info!("loaded {} lifecycle event(s)", events.len());

    let loader = FileNotesLoader::new(vendor_dir, config.notes_file.clone());
    let reporter = Reporter::new(Box::new(loader), notes_limit);

    let mut sink = ConsoleSink;
    run_events(&reporter, &mut sink, &events);

    Ok(())
}

/// Dispatches every event of one update run. When the stream never signals
/// the end of the update command, the run is finished implicitly so the
/// recorded updates are still reported.
pub fn run_events(
    reporter: &Reporter,
    sink: &mut dyn OutputSink,
    events: &[HostEvent],
) {
    let table = EventTable::subscribed();
    let mut ctx = RunContext::new(reporter, sink);

    for event in events {
        table.dispatch(&mut ctx, event);
    }

    if !ctx.finished {
        debug!("event stream ended without post-update-cmd: finishing run");
        table.dispatch(&mut ctx, &HostEvent::PostUpdateCmd);
    }
}

fn read_events(path: &str) -> Result<String> {
    if path == STDIN_PATH {
        debug!("reading events from stdin");
        let mut content = String::new();
        io::stdin().read_to_string(&mut content)?;
        return Ok(content);
    }

    debug!("reading events from: {path}");
    Ok(fs::read_to_string(path)?)
}
