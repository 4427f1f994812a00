//! Port traits defining external boundaries.
//!
//! The only boundary is process execution. Implementations live in
//! `src/adapters/`.

pub mod process;

pub use process::{ExecutionRequest, ProcessRunner};
