//! `atrium cmake` command.

use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::context::ServiceContext;
use crate::toolchain::invocations::cmake_configure;
use crate::toolchain::Tool;

/// Execute the `cmake` command: configure the project at `lists`.
///
/// With `build_dir`, the directory is created when missing and becomes the
/// child's working directory; `lists` is made absolute first so it still
/// points at the same file from there.
///
/// # Errors
///
/// Returns an error string if `CMake` cannot be resolved or launched, or the
/// build directory cannot be prepared.
pub fn run_with_context(
    ctx: &ServiceContext,
    lists: &Path,
    build_dir: Option<&Path>,
    out: &mut dyn Write,
) -> Result<i32, String> {
    let cmake = ctx.toolchain.resolve(Tool::CMake).map_err(|e| e.to_string())?;

    let request = match build_dir {
        None => cmake_configure(&cmake, lists),
        Some(dir) => {
            let lists = std::path::absolute(lists)
                .map_err(|e| format!("Failed to resolve {}: {e}", lists.display()))?;
            if !ctx.dry_run && !dir.is_dir() {
                debug!(dir = %dir.display(), "creating build directory");
                std::fs::create_dir_all(dir)
                    .map_err(|e| format!("Failed to create {}: {e}", dir.display()))?;
            }
            cmake_configure(&cmake, &lists).current_dir(dir)
        }
    };
    ctx.runner.run(&request, out).map_err(|e| e.to_string())
}
