//! Dry-run adapter: prints resolved command lines instead of running them.

use std::io::Write;

use crate::error::RunError;
use crate::ports::process::{ExecutionRequest, ProcessRunner};

/// Runner that reports what would be executed and always succeeds.
pub struct DryRunProcessRunner;

impl ProcessRunner for DryRunProcessRunner {
    fn run(&self, request: &ExecutionRequest, sink: &mut dyn Write) -> Result<i32, RunError> {
        let Some(program) = request.program() else {
            return Err(RunError::empty_command());
        };
        let program = program.to_string();
        let report = match request.working_dir() {
            Some(dir) => writeln!(sink, "[dry-run] {request} (in {})", dir.display()),
            None => writeln!(sink, "[dry-run] {request}"),
        };
        report.and_then(|()| sink.flush()).map_err(|source| RunError::Stream { program, source })?;
        Ok(0)
    }
}
