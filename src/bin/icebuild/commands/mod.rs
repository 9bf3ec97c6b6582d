//! Command implementations

use anyhow::{Context, Result};

use icebuild::ops;
use icebuild::{BuildSettings, HostEnvironment};

use crate::cli::BuildFlags;

pub mod completions;
pub mod configure;
pub mod flags;
pub mod platform;
pub mod run;

/// Resolve settings for the current directory.
fn resolve_settings(flags: &BuildFlags) -> Result<BuildSettings> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let options = ops::load_options(&cwd, &flags.overrides());
    let settings = ops::configure(&options, &HostEnvironment::current())?;
    Ok(settings)
}
