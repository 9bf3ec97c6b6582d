//! `icebuild run` command

use anyhow::Result;

use icebuild::builder::toolchain_for;
use icebuild::ops::run_build;

use crate::cli::{BuildFlags, RunArgs};

pub fn execute(flags: &BuildFlags, args: RunArgs) -> Result<()> {
    let settings = super::resolve_settings(flags)?;
    let toolchain = toolchain_for(&settings);

    run_build(&settings, toolchain.as_ref(), &args.command)?;

    eprintln!("    Finished `{}` build", settings.mode);
    Ok(())
}
