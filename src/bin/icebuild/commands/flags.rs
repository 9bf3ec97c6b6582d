//! `icebuild flags` command

use anyhow::Result;

use icebuild::builder::toolchain_for;

use crate::cli::{BuildFlags, FlagsArgs};

pub fn execute(flags: &BuildFlags, args: FlagsArgs) -> Result<()> {
    let settings = super::resolve_settings(flags)?;
    let toolchain = toolchain_for(&settings);

    if !args.link {
        print_group(
            &format!("Compile flags ({})", toolchain.compiler_path().display()),
            &toolchain.compile_args(&settings),
            args.oneline,
        );
    }

    if !args.compile && !args.link && !args.oneline {
        println!();
    }

    if !args.compile {
        print_group(
            &format!("Link flags ({})", toolchain.linker_path().display()),
            &toolchain.link_args(&settings),
            args.oneline,
        );
    }

    Ok(())
}

fn print_group(title: &str, args: &[String], oneline: bool) {
    if oneline {
        println!("{}", args.join(" "));
        return;
    }

    println!("# {}:", title);
    for arg in args {
        println!("  {}", arg);
    }
}
