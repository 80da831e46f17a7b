//! buildit CLI entry point
//!
//! Usage:
//!   buildit                      Detect the build system and run it
//!   buildit <target>             Detect, forwarding <target> to the recipe
//!   buildit -<action> [target]   Skip detection and run <action>

use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use buildit::cli::Cli;
use buildit::error::BuildError;
use buildit::probe::EnvironmentProbe;
use buildit::recipe::dispatch;
use buildit::resolver::resolve;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(cli: &Cli) -> Result<(), BuildError> {
    let dir = std::env::current_dir()?;
    let probe = EnvironmentProbe::capture(dir);

    let action = resolve(cli.explicit_action(), &probe)?;
    dispatch(action, cli.forwarded_target(), &probe)
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "buildit=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
