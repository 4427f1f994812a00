//! `atrium generate` command.

use std::io::Write;
use std::path::PathBuf;

use tracing::info;

use crate::config;
use crate::context::ServiceContext;
use crate::error::ToolError;
use crate::toolchain::invocations::{msbuild_rebuild, sharpmake_generate, SHARPMAKE_BOOTSTRAP};
use crate::toolchain::Tool;

const FAILURE_BANNER: &str = "======================================";

/// Execute the `generate` command: run Sharpmake on `target`.
///
/// Builds Sharpmake first when its executable is missing and a bootstrap
/// solution is configured. A non-zero generator exit prints a failure
/// banner to stderr and is returned as the exit code.
///
/// # Errors
///
/// Returns an error string if a tool cannot be resolved or launched.
pub fn run_with_context(
    ctx: &ServiceContext,
    target: &str,
    out: &mut dyn Write,
) -> Result<i32, String> {
    let sharpmake = match ensure_sharpmake(ctx, out).map_err(|e| e.to_string())? {
        Ok(path) => path,
        Err(code) => {
            eprintln!("Sharpmake bootstrap build failed with exit code {code}");
            return Ok(code);
        }
    };

    let request = sharpmake_generate(&sharpmake, target);
    let code = ctx.runner.run(&request, out).map_err(|e| e.to_string())?;
    if code != 0 {
        eprintln!("{FAILURE_BANNER}");
        eprintln!("FAILED TO GENERATE SOLUTION: {target}");
        eprintln!("{FAILURE_BANNER}");
    }
    Ok(code)
}

/// Resolves Sharpmake, building it from its solution if needed.
///
/// The inner `Err` carries the exit code of a failed bootstrap build.
fn ensure_sharpmake(
    ctx: &ServiceContext,
    out: &mut dyn Write,
) -> Result<Result<PathBuf, i32>, ToolError> {
    let toolchain = &ctx.toolchain;
    let needs_bootstrap = toolchain.verifies_paths()
        && toolchain
            .configured(Tool::Sharpmake)
            .is_some_and(|p| !config::is_bare_program(p) && !p.is_file());

    let bootstrap_solution = toolchain.sharpmake_solution().filter(|_| needs_bootstrap);
    if let Some(solution) = bootstrap_solution {
        let msbuild = toolchain.resolve(Tool::MsBuild)?;
        info!(solution = %solution.display(), "building Sharpmake");
        let (configuration, platform) = SHARPMAKE_BOOTSTRAP;
        let request = msbuild_rebuild(&msbuild, solution, configuration, platform);
        let code = ctx.runner.run(&request, out)?;
        if code != 0 {
            return Ok(Err(code));
        }
    }

    toolchain.resolve(Tool::Sharpmake).map(Ok)
}
