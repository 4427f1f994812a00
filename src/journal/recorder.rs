//! Collects journal entries and writes them to a YAML file.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use super::format::{Journal, JournalEntry, Outcome};
use crate::ports::process::ExecutionRequest;

/// Records invocations and writes them as a YAML journal file.
#[derive(Debug)]
pub struct JournalRecorder {
    path: PathBuf,
    entries: Vec<JournalEntry>,
    next_seq: u64,
}

impl JournalRecorder {
    /// Create a new recorder that will write to the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), entries: Vec::new(), next_seq: 0 }
    }

    /// Path the journal will be written to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Entries recorded so far.
    #[must_use]
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// Record an invocation. The `seq` field is assigned automatically.
    pub fn record(
        &mut self,
        request: &ExecutionRequest,
        started_at: DateTime<Utc>,
        duration_ms: u64,
        outcome: Outcome,
    ) {
        self.entries.push(JournalEntry {
            seq: self.next_seq,
            request: request.clone(),
            started_at,
            duration_ms,
            outcome,
        });
        self.next_seq += 1;
    }

    /// Write the journal YAML file to disk with the entries recorded so far.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn write(&self) -> Result<PathBuf, std::io::Error> {
        let journal = Journal { finished_at: Utc::now(), entries: self.entries.clone() };
        let yaml = serde_yaml::to_string(&journal).map_err(std::io::Error::other)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, yaml)?;
        Ok(self.path.clone())
    }
}
