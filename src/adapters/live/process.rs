//! Live process runner using `std::process::Command`.
//!
//! The child's stderr is pointed at the same pipe as its stdout before
//! spawning, so the parent reads a single stream in the order the child
//! wrote it. Each line is forwarded to the sink as soon as it is read.

use std::io::{self, BufRead, BufReader, Write};
use std::process::{Child, Command, ExitStatus};
use std::time::Instant;

use tracing::{debug, warn};

use crate::error::RunError;
use crate::ports::process::{ExecutionRequest, ProcessRunner};

/// Live runner that spawns real child processes.
pub struct LiveProcessRunner;

impl ProcessRunner for LiveProcessRunner {
    fn run(&self, request: &ExecutionRequest, sink: &mut dyn Write) -> Result<i32, RunError> {
        let Some(program) = request.program() else {
            return Err(RunError::empty_command());
        };
        let launch = |source| RunError::Launch { program: program.to_string(), source };
        let stream = |source| RunError::Stream { program: program.to_string(), source };

        let (reader, writer) = io::pipe().map_err(launch)?;
        let err_writer = writer.try_clone().map_err(launch)?;

        let mut command = Command::new(program);
        command.args(request.args()).stdout(writer).stderr(err_writer);
        if let Some(dir) = request.working_dir() {
            command.current_dir(dir);
        }

        debug!(command = %request, "spawning child process");
        let started = Instant::now();
        let spawned = command.spawn();
        // The command still owns the parent's copies of the write end; the
        // reader only sees EOF once they are closed.
        drop(command);
        let mut child = spawned.map_err(launch)?;

        if let Err(source) = relay_lines(reader, sink) {
            abandon(&mut child);
            return Err(stream(source));
        }

        let status = child.wait().map_err(stream)?;
        let code = exit_code(status);
        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        debug!(command = %request, code, elapsed_ms, "child exited");
        Ok(code)
    }
}

/// Copies `reader` to `sink` one line at a time until end of input.
///
/// Bytes are forwarded unchanged; a trailing partial line is forwarded as-is.
fn relay_lines(reader: impl io::Read, sink: &mut dyn Write) -> io::Result<()> {
    let mut reader = BufReader::new(reader);
    let mut line = Vec::new();
    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            return Ok(());
        }
        sink.write_all(&line)?;
        sink.flush()?;
    }
}

/// Kills and reaps a child whose output can no longer be relayed.
fn abandon(child: &mut Child) {
    if let Err(e) = child.kill() {
        warn!(error = %e, "failed to kill child process");
    }
    if let Err(e) = child.wait() {
        warn!(error = %e, "failed to reap child process");
    }
}

/// Maps an exit status to an integer code.
///
/// On Unix a child killed by a signal reports `128 + signal`, as shells do.
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    -1
}
