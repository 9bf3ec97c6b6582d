//! The resolved build configuration record.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::build_mode::BuildMode;
use crate::core::compiler::{CompilerChoice, ToolchainFamily};
use crate::core::platform::Platform;

/// A preprocessor define.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Define {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Define {
    /// A define without a value (`-DNAME`).
    pub fn flag(name: impl Into<String>) -> Self {
        Define {
            name: name.into(),
            value: None,
        }
    }

    /// A define with a value (`-DNAME=VALUE`).
    pub fn key_value(name: impl Into<String>, value: impl Into<String>) -> Self {
        Define {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    /// Parse `NAME` or `NAME=VALUE`.
    pub fn parse(s: &str) -> Self {
        match s.split_once('=') {
            Some((name, value)) => Define::key_value(name, value),
            None => Define::flag(s),
        }
    }
}

impl fmt::Display for Define {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(v) => write!(f, "{}={}", self.name, v),
            None => write!(f, "{}", self.name),
        }
    }
}

/// Everything the build tool needs to know, derived once at startup.
///
/// Flag lists are ordered; later entries may override earlier ones on the
/// compiler command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildSettings {
    pub platform: Platform,
    pub mode: BuildMode,
    pub debug: bool,
    pub release: bool,
    pub clean: bool,
    pub compiler: CompilerChoice,
    /// Flag dialect; `None` when only the platform defines were derived
    pub family: Option<ToolchainFamily>,
    pub jobs: usize,
    pub include_paths: Vec<PathBuf>,
    pub defines: Vec<Define>,
    pub cpp_flags: Vec<String>,
    pub link_flags: Vec<String>,
    pub library_paths: Vec<PathBuf>,
    pub libraries: Vec<String>,
}

impl BuildSettings {
    /// Check whether a define with the given name is present.
    pub fn has_define(&self, name: &str) -> bool {
        self.defines.iter().any(|d| d.name == name)
    }

    /// Check whether a compiler flag is present.
    pub fn has_cpp_flag(&self, flag: &str) -> bool {
        self.cpp_flags.iter().any(|f| f == flag)
    }
}
