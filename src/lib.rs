//! Core library entry for the `atrium` CLI.
//!
//! [`execute`] runs one external command, relaying its merged stdout and
//! stderr to this process's stdout line by line, and returns its exit code.
//! The rest of the crate drives build tools (Sharpmake, MSBuild, `CMake`)
//! through the same runner.

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod journal;
pub mod logging;
pub mod ports;
pub mod toolchain;

use clap::Parser;

use crate::adapters::live::LiveProcessRunner;
use crate::error::RunError;
use crate::ports::process::{ExecutionRequest, ProcessRunner};

/// Run `argv` as a child process, relaying its output to stdout as it is
/// produced, and return the child's exit code.
///
/// A non-zero exit code is returned, not treated as an error.
///
/// # Errors
///
/// Returns [`RunError::Launch`] if the program cannot be started (including
/// an empty `argv`) and [`RunError::Stream`] if its output cannot be relayed.
pub fn execute<I, S>(argv: I) -> Result<i32, RunError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let request = ExecutionRequest::new(argv);
    LiveProcessRunner.run(&request, &mut std::io::stdout().lock())
}

/// Run the CLI with the provided arguments and return the process exit code.
///
/// Usage errors, `--help` and `--version` are printed by clap and mapped to
/// its exit codes.
///
/// # Errors
///
/// Returns an error string when configuration, tool resolution or command
/// execution fails.
pub fn run<I, T>(args: I) -> Result<i32, String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => {
            err.print().map_err(|e| e.to_string())?;
            return Ok(err.exit_code());
        }
    };
    logging::init(cli.verbose);
    commands::dispatch(&cli)
}
