//! `atrium build` command.

use std::io::Write;
use std::path::Path;

use crate::context::ServiceContext;
use crate::toolchain::invocations::msbuild_rebuild;
use crate::toolchain::Tool;

/// Execute the `build` command: full MSBuild rebuild of `solution`.
///
/// # Errors
///
/// Returns an error string if MSBuild cannot be resolved or launched.
pub fn run_with_context(
    ctx: &ServiceContext,
    solution: &Path,
    configuration: &str,
    platform: &str,
    out: &mut dyn Write,
) -> Result<i32, String> {
    let msbuild = ctx.toolchain.resolve(Tool::MsBuild).map_err(|e| e.to_string())?;
    let request = msbuild_rebuild(&msbuild, solution, configuration, platform);
    ctx.runner.run(&request, out).map_err(|e| e.to_string())
}
