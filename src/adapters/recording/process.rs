//! Recording adapter for the `ProcessRunner` port.

use std::io::Write;
use std::sync::{Arc, Mutex};
use std::time::Instant;

use chrono::Utc;
use tracing::warn;

use crate::error::RunError;
use crate::journal::{JournalRecorder, Outcome};
use crate::ports::process::{ExecutionRequest, ProcessRunner};

/// Journals each invocation while delegating to an inner implementation.
pub struct RecordingProcessRunner {
    inner: Box<dyn ProcessRunner>,
    recorder: Arc<Mutex<JournalRecorder>>,
}

impl RecordingProcessRunner {
    /// Creates a new recording runner wrapping the given implementation.
    pub fn new(inner: Box<dyn ProcessRunner>, recorder: Arc<Mutex<JournalRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl ProcessRunner for RecordingProcessRunner {
    fn run(&self, request: &ExecutionRequest, sink: &mut dyn Write) -> Result<i32, RunError> {
        let started_at = Utc::now();
        let started = Instant::now();
        let result = self.inner.run(request, sink);
        let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        let outcome = match &result {
            Ok(code) => Outcome::Exited(*code),
            Err(e) => Outcome::Failed(e.to_string()),
        };
        match self.recorder.lock() {
            Ok(mut recorder) => recorder.record(request, started_at, duration_ms, outcome),
            Err(_) => warn!(command = %request, "journal lock poisoned; invocation not recorded"),
        }
        result
    }
}
