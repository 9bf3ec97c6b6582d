//! Configuration error types and diagnostics.

use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;

use crate::core::build_mode::BuildMode;
use crate::core::compiler::CompilerChoice;
use crate::core::platform::Platform;
use crate::util::diagnostic::Diagnostic;

/// A fatal configuration error. There is no recovery path.
#[derive(Debug, Clone, PartialEq, Eq, Error, MietteDiagnostic)]
pub enum ConfigError {
    #[error("sorry, but it appears your platform is not recognized: `{0}`")]
    #[diagnostic(
        code(icebuild::platform::unsupported),
        help("supported platforms are linux, windows and macos")
    )]
    UnsupportedPlatform(String),

    #[error("invalid build: '{0}'")]
    #[diagnostic(
        code(icebuild::build::invalid_mode),
        help("valid builds are: release, debug, release-with-debug")
    )]
    InvalidBuildMode(String),

    #[error("cannot use {compiler} in this environment ({platform})")]
    #[diagnostic(code(icebuild::compiler::incompatible))]
    IncompatibleCompiler {
        compiler: String,
        platform: Platform,
    },
}

impl ConfigError {
    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.to_string());

        match self {
            ConfigError::UnsupportedPlatform(_) => diag
                .with_context("only linux, windows and macos hosts are recognized"),

            ConfigError::InvalidBuildMode(_) => diag.with_suggestion(format!(
                "Pass one of: {}",
                BuildMode::VALUES.join(", ")
            )),

            ConfigError::IncompatibleCompiler { compiler, platform } => {
                let diag = match CompilerChoice::parse(compiler) {
                    Some(_) => diag.with_context(format!(
                        "`{}` is only available on windows, but this host is {}",
                        compiler, platform
                    )),
                    None => diag.with_context(format!(
                        "known compilers are: {}",
                        CompilerChoice::VALUES.join(", ")
                    )),
                };
                diag.with_suggestion("Drop `--compiler` to use the platform default")
                    .with_suggestion("Use `--compiler gcc` or `--compiler clang`")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ConfigError::InvalidBuildMode("fast".into()).to_string(),
            "invalid build: 'fast'"
        );
        assert_eq!(
            ConfigError::IncompatibleCompiler {
                compiler: "msvc".into(),
                platform: Platform::Linux,
            }
            .to_string(),
            "cannot use msvc in this environment (linux)"
        );
    }

    #[test]
    fn test_diagnostic_suggests_valid_modes() {
        let output = ConfigError::InvalidBuildMode("fast".into())
            .to_diagnostic()
            .format(false);
        assert!(output.contains("error: invalid build: 'fast'"));
        assert!(output.contains("release-with-debug"));
    }

    #[test]
    fn test_diagnostic_incompatible_compiler() {
        let output = ConfigError::IncompatibleCompiler {
            compiler: "msvc".into(),
            platform: Platform::MacOs,
        }
        .to_diagnostic()
        .format(false);
        assert!(output.contains("this host is macos"));
        assert!(output.contains("help: consider:"));
    }

    #[test]
    fn test_diagnostic_unrecognized_compiler_lists_known_names() {
        let output = ConfigError::IncompatibleCompiler {
            compiler: "icc".into(),
            platform: Platform::Linux,
        }
        .to_diagnostic()
        .format(false);
        assert!(output.contains("error: cannot use icc in this environment (linux)"));
        assert!(output.contains("known compilers are: default, gcc, clang, mingw, msvc"));
    }
}
