//! Running an external build tool with the resolved settings.

use std::borrow::Cow;

use anyhow::{bail, Result};

use crate::builder::Toolchain;
use crate::core::BuildSettings;
use crate::util::process::ProcessBuilder;

/// Prepare `command` with the settings exported as environment variables.
///
/// Exported variables: `CXX`, `CXXFLAGS`, `CPPFLAGS`, `LDFLAGS`, `LIBS`,
/// `ICEBUILD_JOBS`, `ICEBUILD_MODE` and `ICEBUILD_CLEAN`. Flag lists are
/// quoted for the host shell, so paths containing spaces survive word
/// splitting in make recipes and shell scripts.
pub fn build_process(
    settings: &BuildSettings,
    toolchain: &dyn Toolchain,
    command: &[String],
) -> Result<ProcessBuilder> {
    let Some((program, args)) = command.split_first() else {
        bail!("no build command given");
    };

    let ldflags: Vec<String> = settings
        .library_paths
        .iter()
        .map(|dir| toolchain.lib_dir_arg(dir))
        .chain(settings.link_flags.iter().cloned())
        .collect();
    let libs: Vec<String> = settings
        .libraries
        .iter()
        .map(|lib| toolchain.lib_arg(lib))
        .collect();

    let process = ProcessBuilder::new(program)
        .args(args)
        .env("CXX", toolchain.compiler_path().display().to_string())
        .env("CXXFLAGS", shell_join(&settings.cpp_flags))
        .env("CPPFLAGS", shell_join(&toolchain.preprocessor_args(settings)))
        .env("LDFLAGS", shell_join(&ldflags))
        .env("LIBS", shell_join(&libs))
        .env("ICEBUILD_JOBS", settings.jobs.to_string())
        .env("ICEBUILD_MODE", settings.mode.as_str())
        .env("ICEBUILD_CLEAN", if settings.clean { "1" } else { "0" });

    Ok(process)
}

/// Join arguments into one shell-quoted string.
fn shell_join(args: &[String]) -> String {
    args.iter()
        .map(|arg| shell_escape::escape(Cow::from(arg.as_str())))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Run the build command; any non-zero exit halts with an error.
pub fn run_build(settings: &BuildSettings, toolchain: &dyn Toolchain, command: &[String]) -> Result<()> {
    let process = build_process(settings, toolchain, command)?;

    tracing::info!("running `{}`", process.display_command());
    let status = process.status()?;

    if !status.success() {
        tracing::debug!("`{}` exited with {:?}", process.display_command(), status.code());
        bail!("script halted due to error(s)");
    }

    Ok(())
}
