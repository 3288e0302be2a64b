use clap::Parser;

use upgrade_notes::{
    Result,
    cli::{Args, Command},
    command,
};

fn initialize_logger(debug: bool) -> Result<()> {
    let filter = if debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Warn
    };

    let config = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("upgrade_notes")
        .build();

    // stdout is reserved for the notes themselves
    simplelog::TermLogger::init(
        filter,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    Ok(())
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli_args = Args::parse();

    initialize_logger(cli_args.debug)?;

    let config_flag = cli_args.config.as_deref();

    match &cli_args.command {
        Command::Report(args) => command::report::execute(config_flag, args),
        Command::Extract(args) => command::extract::execute(config_flag, args),
    }
}
