//! Command dispatch and handlers.

pub mod build;
pub mod cmake;
pub mod exec;
pub mod generate;

use std::env;
use std::io::{self, Write};
use std::path::PathBuf;

use tracing::info;

use crate::cli::{Cli, Command};
use crate::config::{Config, ENV_JOURNAL};
use crate::context::ServiceContext;

/// Dispatch a parsed command line to its handler and return the exit code.
///
/// When `ATRIUM_JOURNAL` is set to a file path, every invocation is recorded
/// to that file.
///
/// # Errors
///
/// Returns an error string if configuration cannot be loaded, the selected
/// command fails to launch a tool, or the journal cannot be written.
pub fn dispatch(cli: &Cli) -> Result<i32, String> {
    let config = Config::load(cli.config.as_deref()).map_err(|e| e.to_string())?;
    let mut ctx = if cli.dry_run {
        ServiceContext::dry_run(config.tools)
    } else {
        ServiceContext::live(config.tools)
    };
    if let Some(path) = env::var_os(ENV_JOURNAL).filter(|p| !p.is_empty()) {
        ctx = ctx.journaled(&PathBuf::from(path));
    }

    let stdout = io::stdout();
    let result = dispatch_with_context(&cli.command, &ctx, &mut stdout.lock());

    // Write the journal after the command completes (even on error)
    if let Some(path) = ctx.finish()? {
        info!(path = %path.display(), "journal written");
    }

    result
}

/// Dispatch a command with the given service context.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch_with_context(
    command: &Command,
    ctx: &ServiceContext,
    out: &mut dyn Write,
) -> Result<i32, String> {
    match command {
        Command::Exec { cwd, command } => exec::run_with_context(ctx, command, cwd.as_deref(), out),
        Command::Generate { path } => generate::run_with_context(ctx, path, out),
        Command::Build { solution, configuration, platform } => {
            build::run_with_context(ctx, solution, configuration, platform, out)
        }
        Command::Cmake { lists, build_dir } => {
            cmake::run_with_context(ctx, lists, build_dir.as_deref(), out)
        }
    }
}
