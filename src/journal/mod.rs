//! Journal of process invocations and their outcomes.

pub mod format;
pub mod recorder;

pub use format::{Journal, JournalEntry, Outcome};
pub use recorder::JournalRecorder;
