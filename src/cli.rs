//! CLI argument parsing.
use clap::{Parser, Subcommand};

/// Reads from stdin when passed as the events path.
pub const STDIN_PATH: &str = "-";

/// Shows the upgrade notes relevant to each package version transition of a
/// dependency update.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, default_value_t = false, global = true)]
    /// Enable debug logging.
    pub debug: bool,

    #[arg(long, global = true)]
    /// Path to the configuration file. Defaults to upgrade-notes.toml in the
    /// project directory.
    pub config: Option<String>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Replay a recorded update run and show the relevant upgrade notes.
    Report(ReportArgs),

    /// Print the notes of a single file relevant to an upgrade from a version.
    Extract(ExtractArgs),
}

#[derive(clap::Args, Debug, Clone)]
pub struct ReportArgs {
    #[arg(long, default_value = STDIN_PATH)]
    /// File holding the recorded lifecycle events, or "-" for stdin.
    pub events: String,

    #[arg(long, default_value = ".")]
    /// Project root containing composer.json and the vendor directory.
    pub project_dir: String,

    #[arg(long)]
    /// Directory holding installed packages. Overrides the configuration
    /// and composer.json.
    pub vendor_dir: Option<String>,

    #[arg(long)]
    /// Maximum number of note lines shown per package.
    pub notes_limit: Option<usize>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ExtractArgs {
    /// Upgrade-notes file to read.
    pub file: String,

    #[arg(long)]
    /// Version being upgraded from, e.g. 2.0.10.
    pub from: String,

    #[arg(long)]
    /// Maximum number of note lines shown.
    pub notes_limit: Option<usize>,

    #[arg(long, default_value_t = false)]
    /// Print every relevant line, ignoring the notes limit.
    pub all: bool,
}
