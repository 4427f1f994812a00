//! External build tools and their resolution from configuration.
//!
//! Tool locations are never discovered here; they arrive as configured
//! paths. Resolution fails eagerly, before anything is launched, when a tool
//! is unconfigured or its configured file does not exist.

pub mod invocations;

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::{self, ToolPaths};
use crate::error::ToolError;

/// An external tool atrium knows how to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    /// Microsoft Build Engine.
    MsBuild,
    /// `CMake`.
    CMake,
    /// The Sharpmake solution generator.
    Sharpmake,
}

impl Tool {
    /// Human-readable tool name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::MsBuild => "MSBuild",
            Self::CMake => "CMake",
            Self::Sharpmake => "Sharpmake",
        }
    }

    /// Environment variable that overrides the configured path.
    #[must_use]
    pub fn env_var(self) -> &'static str {
        match self {
            Self::MsBuild => config::ENV_MSBUILD,
            Self::CMake => config::ENV_CMAKE,
            Self::Sharpmake => config::ENV_SHARPMAKE,
        }
    }

    /// Key under `tools:` in the config file.
    #[must_use]
    pub fn config_key(self) -> &'static str {
        match self {
            Self::MsBuild => "msbuild",
            Self::CMake => "cmake",
            Self::Sharpmake => "sharpmake",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Configured tool locations plus the policy for checking them.
#[derive(Debug, Clone)]
pub struct Toolchain {
    paths: ToolPaths,
    verify_paths: bool,
}

impl Toolchain {
    /// Creates a toolchain that checks configured paths exist.
    #[must_use]
    pub fn new(paths: ToolPaths) -> Self {
        Self { paths, verify_paths: true }
    }

    /// Creates a toolchain that accepts configured paths without checking
    /// the filesystem. Unconfigured tools are still errors.
    #[must_use]
    pub fn unverified(paths: ToolPaths) -> Self {
        Self { paths, verify_paths: false }
    }

    /// Whether configured paths are checked against the filesystem.
    #[must_use]
    pub fn verifies_paths(&self) -> bool {
        self.verify_paths
    }

    /// The configured path for `tool`, without any checks.
    #[must_use]
    pub fn configured(&self, tool: Tool) -> Option<&Path> {
        match tool {
            Tool::MsBuild => self.paths.msbuild.as_deref(),
            Tool::CMake => self.paths.cmake.as_deref(),
            Tool::Sharpmake => self.paths.sharpmake.as_deref(),
        }
    }

    /// Solution used to bootstrap Sharpmake, if configured.
    #[must_use]
    pub fn sharpmake_solution(&self) -> Option<&Path> {
        self.paths.sharpmake_solution.as_deref()
    }

    /// Resolves `tool` to the path to launch.
    ///
    /// Bare program names are returned as-is for `PATH` lookup at launch.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::NotConfigured`] if no path is set and
    /// [`ToolError::NotFound`] if the configured file does not exist.
    pub fn resolve(&self, tool: Tool) -> Result<PathBuf, ToolError> {
        let path = self.configured(tool).ok_or(ToolError::NotConfigured {
            tool: tool.name(),
            env_var: tool.env_var(),
            key: tool.config_key(),
        })?;
        if self.verify_paths && !config::is_bare_program(path) && !path.is_file() {
            return Err(ToolError::NotFound { tool: tool.name(), path: path.to_path_buf() });
        }
        Ok(path.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconfigured_tool_fails_eagerly() {
        let toolchain = Toolchain::new(ToolPaths::default());
        let err = toolchain.resolve(Tool::CMake).unwrap_err();
        match err {
            ToolError::NotConfigured { env_var, key, .. } => {
                assert_eq!(env_var, "ATRIUM_CMAKE");
                assert_eq!(key, "cmake");
            }
            other => panic!("expected NotConfigured, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_not_found() {
        let paths =
            ToolPaths { msbuild: Some(PathBuf::from("/no/such/MSBuild.exe")), ..ToolPaths::default() };
        let err = Toolchain::new(paths).resolve(Tool::MsBuild).unwrap_err();
        assert!(matches!(err, ToolError::NotFound { tool: "MSBuild", .. }));
    }

    #[test]
    fn existing_file_resolves() {
        let dir = tempfile::tempdir().unwrap();
        let exe = dir.path().join("Sharpmake.Application.exe");
        std::fs::write(&exe, b"").unwrap();
        let paths = ToolPaths { sharpmake: Some(exe.clone()), ..ToolPaths::default() };

        assert_eq!(Toolchain::new(paths).resolve(Tool::Sharpmake).unwrap(), exe);
    }

    #[test]
    fn bare_program_name_is_left_for_path_lookup() {
        let paths = ToolPaths { cmake: Some(PathBuf::from("cmake")), ..ToolPaths::default() };
        assert_eq!(Toolchain::new(paths).resolve(Tool::CMake).unwrap(), PathBuf::from("cmake"));
    }

    #[test]
    fn unverified_toolchain_skips_existence_check() {
        let paths =
            ToolPaths { msbuild: Some(PathBuf::from("/no/such/MSBuild.exe")), ..ToolPaths::default() };
        let toolchain = Toolchain::unverified(paths);
        assert!(!toolchain.verifies_paths());
        assert_eq!(
            toolchain.resolve(Tool::MsBuild).unwrap(),
            PathBuf::from("/no/such/MSBuild.exe")
        );
        assert!(toolchain.resolve(Tool::CMake).is_err());
    }
}
