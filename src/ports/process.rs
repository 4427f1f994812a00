//! Process runner port for executing external commands.

use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::RunError;

/// A command to execute: the program followed by its arguments, plus an
/// optional working directory for the child.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionRequest {
    /// Program and arguments, in order.
    pub argv: Vec<String>,
    /// Working directory for the child. `None` inherits the caller's.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_dir: Option<PathBuf>,
}

impl ExecutionRequest {
    /// Creates a request from a program and argument sequence.
    pub fn new<I, S>(argv: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { argv: argv.into_iter().map(Into::into).collect(), working_dir: None }
    }

    /// Sets the child's working directory.
    #[must_use]
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// The program to launch, if any.
    #[must_use]
    pub fn program(&self) -> Option<&str> {
        self.argv.first().map(String::as_str)
    }

    /// Arguments following the program.
    #[must_use]
    pub fn args(&self) -> &[String] {
        self.argv.get(1..).unwrap_or_default()
    }

    /// The working directory, if one was set.
    #[must_use]
    pub fn working_dir(&self) -> Option<&Path> {
        self.working_dir.as_deref()
    }
}

impl fmt::Display for ExecutionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, arg) in self.argv.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            if arg.is_empty() || arg.chars().any(char::is_whitespace) {
                write!(f, "\"{arg}\"")?;
            } else {
                f.write_str(arg)?;
            }
        }
        Ok(())
    }
}

/// Runs external commands, relaying their combined output to a sink.
///
/// Abstracting execution lets tool invocations be exercised without the
/// tools installed, and lets invocations be journaled or dry-run.
pub trait ProcessRunner: Send + Sync {
    /// Runs `request` to completion, writing each output line to `sink` as it
    /// arrives, and returns the child's exit code.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::Launch`] if the program cannot be started and
    /// [`RunError::Stream`] if its output cannot be relayed.
    fn run(&self, request: &ExecutionRequest, sink: &mut dyn Write) -> Result<i32, RunError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_program_and_args() {
        let request = ExecutionRequest::new(["cmake", "CMakeLists.txt"]);
        assert_eq!(request.program(), Some("cmake"));
        assert_eq!(request.args(), ["CMakeLists.txt".to_string()]);
        assert!(request.working_dir().is_none());
    }

    #[test]
    fn empty_request_has_no_program() {
        let request = ExecutionRequest::new(Vec::<String>::new());
        assert_eq!(request.program(), None);
        assert!(request.args().is_empty());
    }

    #[test]
    fn display_quotes_args_with_spaces() {
        let request = ExecutionRequest::new(["msbuild", "/p:Platform=Any CPU", ""]);
        assert_eq!(request.to_string(), "msbuild \"/p:Platform=Any CPU\" \"\"");
    }

    #[test]
    fn current_dir_is_recorded() {
        let request = ExecutionRequest::new(["pwd"]).current_dir("/tmp/build");
        assert_eq!(request.working_dir(), Some(Path::new("/tmp/build")));
    }
}
