//! Service context bundling the process runner and toolchain.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::adapters::dry_run::DryRunProcessRunner;
use crate::adapters::live::LiveProcessRunner;
use crate::adapters::recording::RecordingProcessRunner;
use crate::config::ToolPaths;
use crate::journal::JournalRecorder;
use crate::ports::process::ProcessRunner;
use crate::toolchain::Toolchain;

/// Everything a command handler needs to reach the outside world.
///
/// Constructors wire up different runner adapters (live, dry-run), optionally
/// wrapped in a journaling recorder.
pub struct ServiceContext {
    /// Runner used for every external invocation.
    pub runner: Box<dyn ProcessRunner>,
    /// Configured tool locations.
    pub toolchain: Toolchain,
    /// Whether commands should avoid side effects besides printing.
    pub dry_run: bool,
    /// Optional journal; written by `finish` or on drop.
    journal: Option<Arc<Mutex<JournalRecorder>>>,
}

impl ServiceContext {
    /// Creates a live context that launches real processes.
    #[must_use]
    pub fn live(paths: ToolPaths) -> Self {
        Self::from_parts(Box::new(LiveProcessRunner), Toolchain::new(paths), false)
    }

    /// Creates a dry-run context that prints command lines instead of
    /// running them. Configured tool paths are not checked for existence.
    #[must_use]
    pub fn dry_run(paths: ToolPaths) -> Self {
        Self::from_parts(Box::new(DryRunProcessRunner), Toolchain::unverified(paths), true)
    }

    /// Creates a context from an arbitrary runner.
    #[must_use]
    pub fn from_parts(runner: Box<dyn ProcessRunner>, toolchain: Toolchain, dry_run: bool) -> Self {
        Self { runner, toolchain, dry_run, journal: None }
    }

    /// Wraps the runner so every invocation is journaled to `path`.
    ///
    /// The journal is written when the context is finished or dropped.
    #[must_use]
    pub fn journaled(mut self, path: &Path) -> Self {
        let recorder = Arc::new(Mutex::new(JournalRecorder::new(path)));
        // `Drop` forbids moving the field out, so swap a placeholder in.
        let inner = std::mem::replace(&mut self.runner, Box::new(DryRunProcessRunner));
        self.runner = Box::new(RecordingProcessRunner::new(inner, Arc::clone(&recorder)));
        self.journal = Some(recorder);
        self
    }

    /// Writes the journal, if any, and returns its path.
    ///
    /// # Errors
    ///
    /// Returns an error string if the journal cannot be written.
    pub fn finish(mut self) -> Result<Option<PathBuf>, String> {
        self.write_journal()
    }

    fn write_journal(&mut self) -> Result<Option<PathBuf>, String> {
        let Some(journal) = self.journal.take() else {
            return Ok(None);
        };
        let recorder = journal.lock().map_err(|e| format!("Journal lock poisoned: {e}"))?;
        let path = recorder.write().map_err(|e| {
            format!("Failed to write journal {}: {e}", recorder.path().display())
        })?;
        Ok(Some(path))
    }
}

impl Drop for ServiceContext {
    fn drop(&mut self) {
        if let Err(e) = self.write_journal() {
            eprintln!("Warning: {e}");
        }
    }
}
