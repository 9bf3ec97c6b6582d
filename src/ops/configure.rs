//! Configuration entry point: config files, command line and host, merged.

use std::path::{Path, PathBuf};

use crate::core::BuildSettings;
use crate::resolver::{resolve, BuildOptions, ConfigError};
use crate::util::config::{global_config_path, load_config, project_config_path};

pub use crate::resolver::HostEnvironment;

/// Values given on the command line. `None` leaves the config value alone.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub build: Option<String>,
    pub compiler: Option<String>,
    pub jobs: Option<usize>,
    pub clean: bool,
    pub deps_dir: Option<PathBuf>,
}

impl CliOverrides {
    /// Layer the command-line values over `base`.
    pub fn apply(&self, base: BuildOptions) -> BuildOptions {
        BuildOptions {
            build: self.build.clone().or(base.build),
            compiler: self.compiler.clone().or(base.compiler),
            jobs: self.jobs.or(base.jobs),
            clean: self.clean || base.clean,
            deps_dir: self.deps_dir.clone().unwrap_or(base.deps_dir),
            ..base
        }
    }
}

/// Load config files under `project_root` and merge the command line on top.
pub fn load_options(project_root: &Path, overrides: &CliOverrides) -> BuildOptions {
    let global = global_config_path();
    let config = load_config(global.as_deref(), &project_config_path(project_root));
    overrides.apply(config.to_build_options())
}

/// Resolve options against the host and log the outcome.
pub fn configure(options: &BuildOptions, host: &HostEnvironment) -> Result<BuildSettings, ConfigError> {
    let settings = resolve(options, host)?;

    tracing::info!(
        "configured {} build for {} (compiler: {}, jobs: {})",
        settings.mode,
        settings.platform,
        settings.compiler,
        settings.jobs
    );
    if settings.clean {
        tracing::info!("clean requested");
    }

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_cli_overrides_win() {
        let base = BuildOptions {
            build: Some("release".to_string()),
            compiler: Some("gcc".to_string()),
            jobs: Some(2),
            ..BuildOptions::default()
        };
        let overrides = CliOverrides {
            build: Some("debug".to_string()),
            jobs: Some(16),
            clean: true,
            ..CliOverrides::default()
        };

        let opts = overrides.apply(base);
        assert_eq!(opts.build.as_deref(), Some("debug"));
        assert_eq!(opts.compiler.as_deref(), Some("gcc"));
        assert_eq!(opts.jobs, Some(16));
        assert!(opts.clean);
    }

    #[test]
    fn test_load_options_reads_project_config() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join(".icebuild");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(
            dir.join("config.toml"),
            "[build]\nmode = \"release-with-debug\"\n[paths]\ndeps_dir = \"vendor\"\n",
        )
        .unwrap();

        let opts = load_options(tmp.path(), &CliOverrides::default());
        assert_eq!(opts.build.as_deref(), Some("release-with-debug"));
        assert_eq!(opts.deps_dir, PathBuf::from("vendor"));
    }

    #[test]
    fn test_configure_propagates_errors() {
        let host = HostEnvironment {
            os: "linux".to_string(),
            num_jobs_override: None,
            cpu_count: 2,
        };
        let opts = BuildOptions {
            compiler: Some("msvc".to_string()),
            ..BuildOptions::default()
        };
        assert!(matches!(
            configure(&opts, &host),
            Err(ConfigError::IncompatibleCompiler { .. })
        ));
    }
}
