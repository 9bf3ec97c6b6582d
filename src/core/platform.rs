//! Host platform detection.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::resolver::ConfigError;

/// Operating system family the engine can be built on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Linux,
    Windows,
    #[serde(rename = "macos")]
    MacOs,
}

impl Platform {
    /// Map an OS identifier (as reported by `std::env::consts::OS`).
    pub fn from_os(os: &str) -> Result<Self, ConfigError> {
        match os {
            "linux" => Ok(Platform::Linux),
            "windows" => Ok(Platform::Windows),
            "macos" => Ok(Platform::MacOs),
            other => Err(ConfigError::UnsupportedPlatform(other.to_string())),
        }
    }

    /// Detect the host platform.
    pub fn detect() -> Result<Self, ConfigError> {
        Self::from_os(std::env::consts::OS)
    }

    pub fn is_linux(&self) -> bool {
        *self == Platform::Linux
    }

    pub fn is_windows(&self) -> bool {
        *self == Platform::Windows
    }

    pub fn is_macos(&self) -> bool {
        *self == Platform::MacOs
    }

    /// Get the platform name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Linux => "linux",
            Platform::Windows => "windows",
            Platform::MacOs => "macos",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
