//! Configuration file support.
//!
//! Two configuration file locations are read:
//! - Global: `~/.icebuild/config.toml` - User-wide defaults
//! - Project: `.icebuild/config.toml` - Project-specific overrides
//!
//! Project config takes precedence over global config, and command-line
//! options take precedence over both.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::resolver::BuildOptions;

/// icebuild configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Build settings
    pub build: BuildConfig,

    /// Include and dependency locations
    pub paths: PathsConfig,

    /// Extra toolchain flags
    pub flags: FlagsConfig,
}

/// Build-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Default build mode (release, debug, release-with-debug)
    pub mode: Option<String>,

    /// Default compiler (default, gcc, clang, mingw, msvc)
    pub compiler: Option<String>,

    /// Default number of parallel jobs (None = auto-detect)
    pub jobs: Option<usize>,
}

/// Dependency location configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Directory holding third-party dependencies
    pub deps_dir: Option<PathBuf>,

    /// Dependency include directories, relative to `deps_dir`
    pub dependencies: Option<Vec<String>>,
}

/// Additional flags appended to the derived ones.
///
/// An absent list inherits the lower-precedence config; an empty list clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlagsConfig {
    pub cpp_flags: Option<Vec<String>>,
    pub defines: Option<Vec<String>>,
    pub link_flags: Option<Vec<String>>,
    pub library_paths: Option<Vec<PathBuf>>,
    pub libraries: Option<Vec<String>>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {:#}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    ///
    /// Flag lists are replaced, not concatenated.
    pub fn merge(&mut self, other: Config) {
        if other.build.mode.is_some() {
            self.build.mode = other.build.mode;
        }
        if other.build.compiler.is_some() {
            self.build.compiler = other.build.compiler;
        }
        if other.build.jobs.is_some() {
            self.build.jobs = other.build.jobs;
        }

        if other.paths.deps_dir.is_some() {
            self.paths.deps_dir = other.paths.deps_dir;
        }
        if other.paths.dependencies.is_some() {
            self.paths.dependencies = other.paths.dependencies;
        }

        if other.flags.cpp_flags.is_some() {
            self.flags.cpp_flags = other.flags.cpp_flags;
        }
        if other.flags.defines.is_some() {
            self.flags.defines = other.flags.defines;
        }
        if other.flags.link_flags.is_some() {
            self.flags.link_flags = other.flags.link_flags;
        }
        if other.flags.library_paths.is_some() {
            self.flags.library_paths = other.flags.library_paths;
        }
        if other.flags.libraries.is_some() {
            self.flags.libraries = other.flags.libraries;
        }
    }

    /// Build resolver options from this config; command-line values are
    /// layered on top by the caller.
    pub fn to_build_options(&self) -> BuildOptions {
        let defaults = BuildOptions::default();
        BuildOptions {
            build: self.build.mode.clone(),
            compiler: self.build.compiler.clone(),
            jobs: self.build.jobs,
            clean: false,
            deps_dir: self.paths.deps_dir.clone().unwrap_or(defaults.deps_dir),
            dependencies: self
                .paths
                .dependencies
                .clone()
                .unwrap_or(defaults.dependencies),
            cpp_flags: self.flags.cpp_flags.clone().unwrap_or_default(),
            defines: self.flags.defines.clone().unwrap_or_default(),
            link_flags: self.flags.link_flags.clone().unwrap_or_default(),
            library_paths: self.flags.library_paths.clone().unwrap_or_default(),
            libraries: self.flags.libraries.clone().unwrap_or_default(),
        }
    }
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (.icebuild/config.toml)
/// 2. Global config (~/.icebuild/config.toml)
/// 3. Defaults
pub fn load_config(global_path: Option<&Path>, project_path: &Path) -> Config {
    let mut config = Config::default();

    if let Some(global_path) = global_path {
        if global_path.exists() {
            tracing::debug!("loading global config from {}", global_path.display());
            config.merge(Config::load_or_default(global_path));
        }
    }

    if project_path.exists() {
        tracing::debug!("loading project config from {}", project_path.display());
        config.merge(Config::load_or_default(project_path));
    }

    config
}

/// Get the global icebuild config directory (~/.icebuild).
pub fn global_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".icebuild"))
}

/// Get the global config path (~/.icebuild/config.toml).
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("config.toml"))
}

/// Get the project config path (.icebuild/config.toml).
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(".icebuild").join("config.toml")
}
