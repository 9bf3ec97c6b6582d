//! Build mode selection.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::resolver::ConfigError;

/// Controls optimization and debug-symbol behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BuildMode {
    Release,
    #[default]
    Debug,
    ReleaseWithDebug,
}

impl BuildMode {
    /// All accepted spellings, in the order they are listed in help text.
    pub const VALUES: [&'static str; 3] = ["release", "debug", "release-with-debug"];

    /// Whether debug symbols are emitted.
    pub fn is_debug(&self) -> bool {
        matches!(self, BuildMode::Debug | BuildMode::ReleaseWithDebug)
    }

    /// Whether optimizations are enabled.
    pub fn is_release(&self) -> bool {
        matches!(self, BuildMode::Release | BuildMode::ReleaseWithDebug)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BuildMode::Release => "release",
            BuildMode::Debug => "debug",
            BuildMode::ReleaseWithDebug => "release-with-debug",
        }
    }
}

impl std::str::FromStr for BuildMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "release" => Ok(BuildMode::Release),
            "debug" => Ok(BuildMode::Debug),
            "release-with-debug" => Ok(BuildMode::ReleaseWithDebug),
            _ => Err(ConfigError::InvalidBuildMode(s.to_string())),
        }
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
