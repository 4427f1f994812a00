//! Configuration: tool paths from `atrium.yaml` and environment overrides.
//!
//! ```yaml
//! tools:
//!   msbuild: C:/Program Files/Microsoft Visual Studio/2022/Community/MSBuild/Current/Bin/MSBuild.exe
//!   cmake: cmake
//!   sharpmake: tools/Sharpmake/Sharpmake.Application/bin/Release/net6.0/Sharpmake.Application.exe
//!   sharpmake_solution: tools/Sharpmake/Sharpmake.sln
//! ```
//!
//! Relative paths resolve against the directory holding the config file.
//! A value without any path separator is a program name left for `PATH`
//! lookup at launch time.

use std::path::{Component, Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::ConfigError;

/// Default config file name, looked up in the current directory.
pub const CONFIG_FILE_NAME: &str = "atrium.yaml";

/// Environment variable overriding `tools.msbuild`.
pub const ENV_MSBUILD: &str = "ATRIUM_MSBUILD";
/// Environment variable overriding `tools.cmake`.
pub const ENV_CMAKE: &str = "ATRIUM_CMAKE";
/// Environment variable overriding `tools.sharpmake`.
pub const ENV_SHARPMAKE: &str = "ATRIUM_SHARPMAKE";
/// Environment variable overriding `tools.sharpmake_solution`.
pub const ENV_SHARPMAKE_SOLUTION: &str = "ATRIUM_SHARPMAKE_SOLUTION";
/// When set, every invocation is journaled to this path.
pub const ENV_JOURNAL: &str = "ATRIUM_JOURNAL";

/// Paths to the external build tools. Unset tools fail when first needed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolPaths {
    /// MSBuild executable.
    pub msbuild: Option<PathBuf>,
    /// CMake executable.
    pub cmake: Option<PathBuf>,
    /// Sharpmake executable.
    pub sharpmake: Option<PathBuf>,
    /// Solution that builds Sharpmake when its executable is missing.
    pub sharpmake_solution: Option<PathBuf>,
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// External tool locations.
    pub tools: ToolPaths,
}

impl Config {
    /// Loads configuration from `explicit`, or from `atrium.yaml` in the
    /// current directory when no path is given, then applies environment
    /// overrides.
    ///
    /// A missing default file yields an empty config; a missing explicit file
    /// is an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match explicit {
            Some(path) => Self::from_file(path)?,
            None => {
                let default = Path::new(CONFIG_FILE_NAME);
                if default.is_file() {
                    Self::from_file(default)?
                } else {
                    debug!("no {CONFIG_FILE_NAME} in current directory");
                    Self::default()
                }
            }
        };
        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Reads and parses a config file, resolving relative paths against its
    /// parent directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Self::parse(&content, base)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
    }

    /// Parses YAML content, resolving relative paths against `base`.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not a valid config document.
    pub fn parse(content: &str, base: &Path) -> Result<Self, serde_yaml::Error> {
        let mut config: Self = if content.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(content)?
        };
        let tools = &mut config.tools;
        for slot in
            [&mut tools.msbuild, &mut tools.cmake, &mut tools.sharpmake, &mut tools.sharpmake_solution]
        {
            if let Some(path) = slot.take() {
                *slot = Some(resolve_against(base, path));
            }
        }
        Ok(config)
    }

    /// Replaces tool paths with values from `lookup` where it returns a
    /// non-empty value. Environment values are used as given.
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let tools = &mut self.tools;
        for (key, slot) in [
            (ENV_MSBUILD, &mut tools.msbuild),
            (ENV_CMAKE, &mut tools.cmake),
            (ENV_SHARPMAKE, &mut tools.sharpmake),
            (ENV_SHARPMAKE_SOLUTION, &mut tools.sharpmake_solution),
        ] {
            if let Some(value) = lookup(key).filter(|v| !v.is_empty()) {
                debug!(key, value = %value, "tool path overridden from environment");
                *slot = Some(PathBuf::from(value));
            }
        }
    }
}

/// True when `path` is a bare program name to be looked up on `PATH`.
pub(crate) fn is_bare_program(path: &Path) -> bool {
    let mut components = path.components();
    matches!((components.next(), components.next()), (Some(Component::Normal(_)), None))
}

fn resolve_against(base: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() || is_bare_program(&path) {
        path
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_content_is_default() {
        let config = Config::parse("", Path::new("/ws")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn relative_paths_resolve_against_base() {
        let yaml = "tools:\n  sharpmake: tools/Sharpmake.exe\n  msbuild: /opt/msbuild\n  cmake: cmake\n";
        let config = Config::parse(yaml, Path::new("/ws")).unwrap();
        assert_eq!(config.tools.sharpmake, Some(PathBuf::from("/ws/tools/Sharpmake.exe")));
        assert_eq!(config.tools.msbuild, Some(PathBuf::from("/opt/msbuild")));
        assert_eq!(config.tools.cmake, Some(PathBuf::from("cmake")));
        assert_eq!(config.tools.sharpmake_solution, None);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(Config::parse("tools:\n  ninja: ninja\n", Path::new("")).is_err());
    }

    #[test]
    fn env_overrides_win() {
        let mut config = Config::parse("tools:\n  cmake: /usr/bin/cmake\n", Path::new("")).unwrap();
        config.apply_env_overrides(|key| match key {
            ENV_CMAKE => Some("/opt/cmake/bin/cmake".into()),
            ENV_MSBUILD => Some(String::new()),
            _ => None,
        });
        assert_eq!(config.tools.cmake, Some(PathBuf::from("/opt/cmake/bin/cmake")));
        assert_eq!(config.tools.msbuild, None);
    }

    #[test]
    fn from_file_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::from_file(&dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn from_file_uses_file_directory_as_base() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "tools:\n  sharpmake_solution: tools/Sharpmake.sln\n").unwrap();

        let config = Config::from_file(&path).unwrap();

        assert_eq!(config.tools.sharpmake_solution, Some(dir.path().join("tools/Sharpmake.sln")));
    }

    #[test]
    fn bare_program_detection() {
        assert!(is_bare_program(Path::new("cmake")));
        assert!(is_bare_program(Path::new("MSBuild.exe")));
        assert!(!is_bare_program(Path::new("./cmake")));
        assert!(!is_bare_program(Path::new("bin/cmake")));
        assert!(!is_bare_program(Path::new("/usr/bin/cmake")));
        assert!(!is_bare_program(Path::new(".")));
    }
}
