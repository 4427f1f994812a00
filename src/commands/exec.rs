//! `atrium exec` command.

use std::io::Write;
use std::path::Path;

use crate::context::ServiceContext;
use crate::ports::process::ExecutionRequest;

/// Execute the `exec` command: run `argv` through the runner.
///
/// # Errors
///
/// Returns an error string if the program cannot be launched or its output
/// cannot be relayed.
pub fn run_with_context(
    ctx: &ServiceContext,
    argv: &[String],
    cwd: Option<&Path>,
    out: &mut dyn Write,
) -> Result<i32, String> {
    let mut request = ExecutionRequest::new(argv.iter().cloned());
    if let Some(dir) = cwd {
        request = request.current_dir(dir);
    }
    ctx.runner.run(&request, out).map_err(|e| e.to_string())
}
