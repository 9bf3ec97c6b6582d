//! CLI integration tests for icebuild.
//!
//! These tests run the binary against throwaway project directories and
//! check exit codes and printed configuration.

use std::fs;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get the icebuild binary command, isolated from the caller's environment.
fn icebuild(project: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("icebuild").unwrap();
    cmd.current_dir(project.path())
        .env("HOME", project.path())
        .env("USERPROFILE", project.path())
        .env_remove("ICEBUILD_NUM_JOBS")
        .env_remove("SCONS_NUM_JOBS")
        .env_remove("CXX")
        .env_remove("CC");
    cmd
}

/// Create a temporary directory for test projects.
fn temp_dir() -> TempDir {
    TempDir::new().unwrap()
}

fn write_project_config(project: &TempDir, contents: &str) {
    let dir = project.path().join(".icebuild");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.toml"), contents).unwrap();
}

// ============================================================================
// icebuild configure
// ============================================================================

#[test]
fn test_configure_is_default_command() {
    let tmp = temp_dir();

    icebuild(&tmp)
        .assert()
        .success()
        .stdout(predicate::str::contains("Build:    debug (debug: true, release: false)"));
}

#[test]
fn test_configure_build_modes() {
    let table = [
        ("debug", "\"debug\": true", "\"release\": false"),
        ("release", "\"debug\": false", "\"release\": true"),
        ("release-with-debug", "\"debug\": true", "\"release\": true"),
    ];

    for (mode, debug, release) in table {
        let tmp = temp_dir();
        icebuild(&tmp)
            .args(["--build", mode, "configure", "--format", "json"])
            .assert()
            .success()
            .stdout(predicate::str::contains(debug))
            .stdout(predicate::str::contains(release));
    }
}

#[test]
fn test_invalid_build_mode_exits_1() {
    let tmp = temp_dir();

    icebuild(&tmp)
        .args(["--build", "fastest"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid build: 'fastest'"));
}

#[test]
fn test_unrecognized_compiler_exits_1() {
    let tmp = temp_dir();

    icebuild(&tmp)
        .args(["--compiler", "icc"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("cannot use icc in this environment"))
        .stderr(predicate::str::contains("known compilers are"));
}

#[cfg(not(windows))]
#[test]
fn test_mingw_off_windows_exits_1() {
    let tmp = temp_dir();

    icebuild(&tmp)
        .args(["--compiler", "mingw"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("cannot use mingw in this environment"));
}

#[cfg(not(windows))]
#[test]
fn test_msvc_off_windows_exits_1() {
    let tmp = temp_dir();

    icebuild(&tmp)
        .args(["--compiler", "msvc"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("cannot use msvc in this environment"));
}

#[cfg(windows)]
#[test]
fn test_msvc_on_windows_succeeds() {
    let tmp = temp_dir();

    icebuild(&tmp)
        .args(["--compiler", "msvc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Compiler: default (msvc flags)"));
}

// ============================================================================
// job count
// ============================================================================

#[test]
fn test_jobs_explicit_request() {
    let tmp = temp_dir();

    icebuild(&tmp)
        .args(["-j", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Jobs:     3"));
}

#[test]
fn test_jobs_env_override_wins() {
    let tmp = temp_dir();

    icebuild(&tmp)
        .args(["-j", "3"])
        .env("ICEBUILD_NUM_JOBS", "5")
        .assert()
        .success()
        .stdout(predicate::str::contains("Jobs:     5"));
}

#[test]
fn test_jobs_invalid_env_is_ignored() {
    let tmp = temp_dir();

    icebuild(&tmp)
        .args(["-j", "3"])
        .env("ICEBUILD_NUM_JOBS", "lots")
        .assert()
        .success()
        .stdout(predicate::str::contains("Jobs:     3"))
        .stderr(predicate::str::contains("ignoring job count override 'lots'"));
}

#[test]
fn test_jobs_legacy_env_override() {
    let tmp = temp_dir();

    icebuild(&tmp)
        .args(["-j", "3"])
        .env("SCONS_NUM_JOBS", "6")
        .assert()
        .success()
        .stdout(predicate::str::contains("Jobs:     6"));
}

#[test]
fn test_jobs_primary_env_beats_legacy() {
    let tmp = temp_dir();

    icebuild(&tmp)
        .env("ICEBUILD_NUM_JOBS", "5")
        .env("SCONS_NUM_JOBS", "6")
        .assert()
        .success()
        .stdout(predicate::str::contains("Jobs:     5"));
}

// ============================================================================
// config files
// ============================================================================

#[test]
fn test_project_config_applies() {
    let tmp = temp_dir();
    write_project_config(
        &tmp,
        r#"
[build]
mode = "release"
jobs = 7

[paths]
deps_dir = "vendor"
dependencies = ["glm/include"]
"#,
    );

    icebuild(&tmp)
        .assert()
        .success()
        .stdout(predicate::str::contains("Build:    release"))
        .stdout(predicate::str::contains("Jobs:     7"))
        .stdout(predicate::str::contains("glm/include"))
        .stdout(predicate::str::contains("sqlite3").not());
}

#[test]
fn test_cli_overrides_project_config() {
    let tmp = temp_dir();
    write_project_config(&tmp, "[build]\nmode = \"release\"\n");

    icebuild(&tmp)
        .args(["--build", "debug"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Build:    debug"));
}

#[test]
fn test_invalid_mode_in_config_exits_1() {
    let tmp = temp_dir();
    write_project_config(&tmp, "[build]\nmode = \"turbo\"\n");

    icebuild(&tmp)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid build: 'turbo'"));
}

// ============================================================================
// icebuild flags
// ============================================================================

#[cfg(target_os = "linux")]
#[test]
fn test_flags_release() {
    let tmp = temp_dir();

    icebuild(&tmp)
        .args(["--build", "release", "flags", "--compile", "--oneline"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-Iinclude -Isrc"))
        .stdout(predicate::str::contains("-DNDEBUG"))
        .stdout(predicate::str::contains("-O3"))
        .stdout(predicate::str::contains("-O0").not());
}

#[cfg(target_os = "linux")]
#[test]
fn test_flags_release_with_debug() {
    let tmp = temp_dir();

    icebuild(&tmp)
        .args(["--build", "release-with-debug", "flags", "--compile", "--oneline"])
        .assert()
        .success()
        .stdout(predicate::str::contains(" -g -pg -O3 "))
        .stdout(predicate::str::contains("-DNDEBUG"))
        .stdout(predicate::str::contains("-O0").not())
        .stdout(predicate::str::contains("-DDEBUG").not());
}

#[test]
fn test_flags_clang_has_no_dialect_flags() {
    let tmp = temp_dir();

    icebuild(&tmp)
        .args(["--compiler", "clang", "flags", "--compile", "--oneline"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-DBOOST_SPIRIT_USE_PHOENIX_V3"))
        .stdout(predicate::str::contains("-pg").not())
        .stdout(predicate::str::contains("-std=c++11").not())
        .stdout(predicate::str::contains("-DDEBUG").not());
}

#[test]
fn test_configure_clang_reports_no_dialect() {
    let tmp = temp_dir();

    icebuild(&tmp)
        .args(["--compiler", "clang"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Compiler: clang (no dialect flags)"));
}

#[cfg(target_os = "macos")]
#[test]
fn test_flags_macos_default_has_no_dialect_flags() {
    let tmp = temp_dir();

    icebuild(&tmp)
        .args(["flags", "--compile", "--oneline"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-DBOOST_LOG_DYN_LINK"))
        .stdout(predicate::str::contains("-pg").not())
        .stdout(predicate::str::contains("-O0").not());
}

#[cfg(not(windows))]
#[test]
fn test_flags_link_libraries_from_config() {
    let tmp = temp_dir();
    write_project_config(
        &tmp,
        r#"
[flags]
library_paths = ["deps/sdl/lib"]
libraries = ["SDL2"]
"#,
    );

    icebuild(&tmp)
        .args(["flags", "--link"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-Ldeps/sdl/lib"))
        .stdout(predicate::str::contains("-lSDL2"));
}

// ============================================================================
// icebuild run
// ============================================================================

#[cfg(unix)]
#[test]
fn test_run_exports_settings() {
    let tmp = temp_dir();

    icebuild(&tmp)
        .args(["--build", "release", "-j", "2", "run", "--", "sh", "-c"])
        .arg("test \"$ICEBUILD_MODE\" = release && test \"$ICEBUILD_JOBS\" = 2")
        .assert()
        .success();
}

#[cfg(unix)]
#[test]
fn test_run_exports_clean() {
    let tmp = temp_dir();

    icebuild(&tmp)
        .args(["-c", "run", "--", "sh", "-c"])
        .arg("test \"$ICEBUILD_CLEAN\" = 1")
        .assert()
        .success();

    icebuild(&tmp)
        .args(["run", "--", "sh", "-c"])
        .arg("test \"$ICEBUILD_CLEAN\" = 0")
        .assert()
        .success();
}

#[cfg(unix)]
#[test]
fn test_run_failure_halts() {
    let tmp = temp_dir();

    icebuild(&tmp)
        .args(["run", "--", "sh", "-c", "exit 4"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("script halted due to error(s)"));
}

// ============================================================================
// icebuild platform
// ============================================================================

#[test]
fn test_platform_reports_host() {
    let tmp = temp_dir();

    icebuild(&tmp)
        .arg("platform")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Platform: {}",
            std::env::consts::OS
        )));
}
