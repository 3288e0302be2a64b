//! Extract command implementation.
use log::*;
use std::{fs, path::Path};

use crate::{
    Result,
    cli::ExtractArgs,
    command::common,
    error::UpgradeNotesError,
    notes::{apply_display_limit, extract_relevant_notes, format_notes, split_lines},
    output::{ConsoleSink, OutputSink},
    version::is_numeric_version,
};

/// Prints the part of a single notes file relevant to an upgrade from
/// `--from`.
pub fn execute(config_flag: Option<&str>, args: &ExtractArgs) -> Result<()> {
    let config = common::load_config(config_flag, Path::new("."))?;
    let notes_limit = common::notes_limit(&config, args.notes_limit)?;

    debug!("reading upgrade notes file: {}", args.file);
    let content = fs::read_to_string(&args.file)?;

    let Some(rendered) =
        render_extract(&content, &args.from, notes_limit, args.all)?
    else {
        info!("no notes in {} relevant to {}", args.file, args.from);
        return Ok(());
    };

    let mut sink = ConsoleSink;
    sink.write(&rendered);

    Ok(())
}

/// Renders the notes relevant to an upgrade from `from_version`. Returns
/// None when nothing in `content` applies.
pub fn render_extract(
    content: &str,
    from_version: &str,
    notes_limit: usize,
    all: bool,
) -> Result<Option<String>> {
    if !is_numeric_version(from_version) {
        return Err(UpgradeNotesError::InvalidVersion(format!(
            "{from_version} does not start with a numeric version"
        )));
    }

    let lines = split_lines(content);
    let notes = extract_relevant_notes(&lines, from_version);

    if notes.is_empty() {
        return Ok(None);
    }

    if all {
        return Ok(Some(format_notes(&notes)));
    }

    Ok(Some(apply_display_limit(&notes, notes_limit)))
}
