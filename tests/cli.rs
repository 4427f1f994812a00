//! Integration tests for top-level CLI behavior.

use std::path::Path;
use std::process::Command;

fn atrium(args: &[&str], dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_atrium"));
    cmd.args(args).current_dir(dir);
    for key in [
        "ATRIUM_MSBUILD",
        "ATRIUM_CMAKE",
        "ATRIUM_SHARPMAKE",
        "ATRIUM_SHARPMAKE_SOLUTION",
        "ATRIUM_JOURNAL",
        "RUST_LOG",
    ] {
        cmd.env_remove(key);
    }
    cmd
}

fn run_atrium(args: &[&str], dir: &Path) -> std::process::Output {
    atrium(args, dir).output().expect("failed to run atrium binary")
}

#[cfg(unix)]
#[test]
fn exec_relays_output_and_exit_code() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_atrium(&["exec", "--", "sh", "-c", "echo out; echo err >&2; exit 3"], dir.path());

    assert_eq!(output.status.code(), Some(3));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "out\nerr\n");
    assert!(output.stderr.is_empty());
}

#[test]
fn exec_missing_binary_fails_with_launch_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_atrium(&["exec", "/no/such/binary-xyz"], dir.path());

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to launch"));
}

#[test]
fn build_dry_run_uses_env_override() {
    let dir = tempfile::tempdir().unwrap();
    let output = atrium(&["build", "game.sln", "--dry-run"], dir.path())
        .env("ATRIUM_MSBUILD", "C:/VS/MSBuild/Current/Bin/msbuild.exe")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("[dry-run] C:/VS/MSBuild/Current/Bin/msbuild.exe -clp:Summary"));
    assert!(stdout.contains("/p:Configuration=Release /p:Platform=x64"));
}

#[test]
fn generate_reads_config_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("atrium.yaml"),
        "tools:\n  sharpmake: tools/Sharpmake.Application.exe\n",
    )
    .unwrap();

    let output = run_atrium(&["--dry-run", "generate", "example"], dir.path());

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("tools/Sharpmake.Application.exe /sources('./example/sharpmake.cs')"));
}

#[test]
fn generate_without_sharpmake_names_the_setting() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_atrium(&["generate", "example"], dir.path());

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ATRIUM_SHARPMAKE"));
}

#[test]
fn explicit_missing_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_atrium(&["--config", "nope.yaml", "exec", "true"], dir.path());

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to read config file"));
}

#[test]
fn help_shows_subcommands() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_atrium(&["--help"], dir.path());
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    for sub in ["exec", "generate", "build", "cmake"] {
        assert!(stdout.contains(sub), "missing {sub} in help");
    }
}

#[test]
fn invalid_subcommand_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_atrium(&["nonsense"], dir.path());
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("unrecognized subcommand"));
}
