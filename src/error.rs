//! Error types for process execution, tool resolution and configuration.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to run a child process to completion.
///
/// A non-zero exit status is not an error; it is returned as data.
#[derive(Debug, Error)]
pub enum RunError {
    /// The executable could not be found or started, or the command was empty.
    #[error("failed to launch `{program}`: {source}")]
    Launch {
        /// The program that was requested.
        program: String,
        /// The underlying spawn error.
        source: io::Error,
    },
    /// The merged output stream could not be read or relayed before the
    /// child terminated.
    #[error("output stream of `{program}` failed: {source}")]
    Stream {
        /// The program whose output was being relayed.
        program: String,
        /// The underlying I/O error.
        source: io::Error,
    },
}

impl RunError {
    pub(crate) fn empty_command() -> Self {
        Self::Launch {
            program: String::new(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "empty command"),
        }
    }
}

/// Failure to resolve or invoke an external build tool.
#[derive(Debug, Error)]
pub enum ToolError {
    /// No path was configured for the tool.
    #[error("{tool} is not configured; set {env_var} or `tools.{key}` in atrium.yaml")]
    NotConfigured {
        /// Display name of the tool.
        tool: &'static str,
        /// Environment variable that overrides the tool path.
        env_var: &'static str,
        /// Config file key for the tool path.
        key: &'static str,
    },
    /// A path was configured but no file exists there.
    #[error("{tool} not found at {}", path.display())]
    NotFound {
        /// Display name of the tool.
        tool: &'static str,
        /// The configured path.
        path: PathBuf,
    },
    /// The tool was resolved but running it failed.
    #[error(transparent)]
    Run(#[from] RunError),
}

/// Failure to load the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        /// Path of the config file.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// The file is not valid YAML for the expected shape.
    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        /// Path of the config file.
        path: PathBuf,
        /// The underlying YAML error.
        source: serde_yaml::Error,
    },
}
