//! Journal data structures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ports::process::ExecutionRequest;

/// How an invocation ended.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The child ran to completion with this exit code.
    Exited(i32),
    /// The child could not be launched or its output could not be relayed.
    Failed(String),
}

/// A single recorded invocation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JournalEntry {
    /// Sequence number (assigned automatically by the recorder).
    pub seq: u64,
    /// The command that was run.
    pub request: ExecutionRequest,
    /// When the invocation started.
    pub started_at: DateTime<Utc>,
    /// Wall-clock duration of the invocation.
    pub duration_ms: u64,
    /// Exit code or failure message.
    pub outcome: Outcome,
}

/// A journal file: one session's invocations in order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Journal {
    /// When the journal was written.
    pub finished_at: DateTime<Utc>,
    /// Ordered list of invocations.
    pub entries: Vec<JournalEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yaml_round_trip() {
        let journal = Journal {
            finished_at: Utc::now(),
            entries: vec![
                JournalEntry {
                    seq: 0,
                    request: ExecutionRequest::new(["cmake", "CMakeLists.txt"]).current_dir("build"),
                    started_at: Utc::now(),
                    duration_ms: 1200,
                    outcome: Outcome::Exited(0),
                },
                JournalEntry {
                    seq: 1,
                    request: ExecutionRequest::new(["msbuild"]),
                    started_at: Utc::now(),
                    duration_ms: 3,
                    outcome: Outcome::Failed("failed to launch `msbuild`".into()),
                },
            ],
        };
        let yaml = serde_yaml::to_string(&journal).expect("serialize");
        assert!(yaml.contains("exited"));
        let deserialized: Journal = serde_yaml::from_str(&yaml).expect("deserialize");
        assert_eq!(journal, deserialized);
    }
}
