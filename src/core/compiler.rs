//! Compiler selection and platform compatibility.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::platform::Platform;
use crate::resolver::ConfigError;

/// Compiler requested on the command line or in config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompilerChoice {
    /// The platform's native compiler.
    #[default]
    Default,
    Gcc,
    Clang,
    Mingw,
    Msvc,
}

impl CompilerChoice {
    pub const VALUES: [&'static str; 5] = ["default", "gcc", "clang", "mingw", "msvc"];

    /// Parse a compiler name. An empty name selects the default compiler.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim() {
            "" | "default" => Some(CompilerChoice::Default),
            "gcc" => Some(CompilerChoice::Gcc),
            "clang" => Some(CompilerChoice::Clang),
            "mingw" => Some(CompilerChoice::Mingw),
            "msvc" => Some(CompilerChoice::Msvc),
            _ => None,
        }
    }

    /// Parse `name` and normalize it for the host.
    ///
    /// Names outside the known set cannot be used on any platform.
    pub fn resolve(name: &str, platform: Platform) -> Result<Self, ConfigError> {
        CompilerChoice::parse(name)
            .ok_or_else(|| ConfigError::IncompatibleCompiler {
                compiler: name.trim().to_string(),
                platform,
            })?
            .normalize(platform)
    }

    /// Rewrite the choice for the host and reject incompatible pairings.
    ///
    /// On Windows `gcc` means MinGW and `msvc` is the default compiler.
    pub fn normalize(self, platform: Platform) -> Result<Self, ConfigError> {
        match (self, platform) {
            (CompilerChoice::Gcc, Platform::Windows) => Ok(CompilerChoice::Mingw),
            (CompilerChoice::Msvc, Platform::Windows) => Ok(CompilerChoice::Default),
            (CompilerChoice::Msvc, _) | (CompilerChoice::Mingw, Platform::Linux | Platform::MacOs) => {
                Err(ConfigError::IncompatibleCompiler {
                    compiler: self.as_str().to_string(),
                    platform,
                })
            }
            (choice, _) => Ok(choice),
        }
    }

    /// Flag dialect for this (normalized) choice on the given platform.
    ///
    /// `None` means no optimization or debug flags are derived; only the
    /// platform defines apply. That covers clang everywhere and the default
    /// compiler on macOS, where Apple clang rejects `-pg`.
    pub fn family(self, platform: Platform) -> Option<ToolchainFamily> {
        match (self, platform) {
            (CompilerChoice::Default, Platform::Windows) => Some(ToolchainFamily::Msvc),
            (CompilerChoice::Mingw, Platform::Windows)
            | (CompilerChoice::Gcc, Platform::Linux | Platform::MacOs)
            | (CompilerChoice::Default, Platform::Linux) => Some(ToolchainFamily::Gnu),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CompilerChoice::Default => "default",
            CompilerChoice::Gcc => "gcc",
            CompilerChoice::Clang => "clang",
            CompilerChoice::Mingw => "mingw",
            CompilerChoice::Msvc => "msvc",
        }
    }
}

impl fmt::Display for CompilerChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Command-line dialect of a toolchain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolchainFamily {
    /// GCC, Clang, Apple Clang and MinGW
    Gnu,
    /// Microsoft Visual C++
    Msvc,
}

impl ToolchainFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolchainFamily::Gnu => "gnu",
            ToolchainFamily::Msvc => "msvc",
        }
    }
}

impl fmt::Display for ToolchainFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
