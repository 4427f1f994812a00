//! Recording adapters that journal interactions.

pub mod process;

pub use process::RecordingProcessRunner;
