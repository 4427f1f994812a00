//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `atrium`.
#[derive(Debug, Parser)]
#[command(name = "atrium", version, about = "Drive external build tools and relay their output")]
pub struct Cli {
    /// Config file (defaults to ./atrium.yaml when present).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print command lines instead of running them.
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Log diagnostics to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run any command, relaying its output and exiting with its exit code.
    Exec {
        /// Working directory for the command.
        #[arg(long, value_name = "DIR")]
        cwd: Option<PathBuf>,
        /// Program followed by its arguments.
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },
    /// Generate solutions with Sharpmake from a script or a folder containing sharpmake.cs.
    Generate {
        /// Sharpmake script (`*.cs`) or folder.
        path: String,
    },
    /// Rebuild a solution with MSBuild.
    Build {
        /// Solution or project file.
        solution: PathBuf,
        /// Build configuration.
        #[arg(long, default_value = "Release")]
        configuration: String,
        /// Target platform.
        #[arg(long, default_value = "x64")]
        platform: String,
    },
    /// Configure a project with CMake.
    Cmake {
        /// Path to CMakeLists.txt.
        lists: PathBuf,
        /// Directory to configure into; created if missing.
        #[arg(long, value_name = "DIR")]
        build_dir: Option<PathBuf>,
    },
}
