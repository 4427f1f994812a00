//! Command lines for the supported tools.

use std::path::Path;

use crate::ports::process::ExecutionRequest;

/// File name Sharpmake looks for when given a directory.
pub const SHARPMAKE_FILE_NAME: &str = "sharpmake.cs";

/// Configuration and platform used to bootstrap Sharpmake from source.
pub const SHARPMAKE_BOOTSTRAP: (&str, &str) = ("Release", "Any CPU");

fn lossy(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// `cmake <lists>`: configure a `CMake` project into the working directory.
#[must_use]
pub fn cmake_configure(cmake: &Path, lists: &Path) -> ExecutionRequest {
    ExecutionRequest::new([lossy(cmake), lossy(lists)])
}

/// Full MSBuild rebuild of `solution` for one configuration and platform.
///
/// Platform is normally `"Any CPU"` for solutions and `"AnyCPU"` for
/// projects.
#[must_use]
pub fn msbuild_rebuild(
    msbuild: &Path,
    solution: &Path,
    configuration: &str,
    platform: &str,
) -> ExecutionRequest {
    ExecutionRequest::new([
        lossy(msbuild),
        "-clp:Summary".to_string(),
        "-t:rebuild".to_string(),
        "-restore".to_string(),
        lossy(solution),
        "/nologo".to_string(),
        "/verbosity:m".to_string(),
        format!("/p:Configuration={configuration}"),
        format!("/p:Platform={platform}"),
    ])
}

/// The Sharpmake script for `target`: the file itself if it ends in `.cs`,
/// otherwise `sharpmake.cs` inside it. Relative paths are made explicit
/// with a leading `./`.
#[must_use]
pub fn sharpmake_script(target: &str) -> String {
    let target = target.trim_end_matches(['/', '\\']);
    let script = if target.ends_with(".cs") {
        target.to_string()
    } else if target.is_empty() {
        SHARPMAKE_FILE_NAME.to_string()
    } else {
        format!("{target}/{SHARPMAKE_FILE_NAME}")
    };
    if Path::new(&script).is_absolute() || script.starts_with("./") || script.starts_with(".\\") {
        script
    } else {
        format!("./{script}")
    }
}

/// `Sharpmake /sources('<script>')`: generate solutions from a script.
#[must_use]
pub fn sharpmake_generate(sharpmake: &Path, target: &str) -> ExecutionRequest {
    ExecutionRequest::new([lossy(sharpmake), format!("/sources('{}')", sharpmake_script(target))])
}
