//! Command-line interface layer.

use std::process::ExitCode;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

pub mod args;
pub mod commands;
pub mod exit_status;
pub mod markdown;
pub mod report;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

use commands::{check::check, fix::fix, init::init};

/// Env var holding a `tracing` filter, e.g. `LINGUA_GUARD_LOG=debug`.
pub const LOG_ENV: &str = "LINGUA_GUARD_LOG";

/// Install the stderr log subscriber.
///
/// The filter comes from [`LOG_ENV`] when set, otherwise `debug` with
/// `--verbose` and `warn` without.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    init_tracing(args.verbose());

    let Some(Arguments { command }) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success.into());
    };

    let status = match command {
        Some(Command::Check(cmd)) => check(cmd)?,
        Some(Command::Fix(cmd)) => fix(cmd)?,
        Some(Command::Init) => init()?,
        None => ExitStatus::Success,
    };

    Ok(status.into())
}
