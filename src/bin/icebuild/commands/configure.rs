//! `icebuild configure` command

use std::fmt::Display;

use anyhow::{Context, Result};

use icebuild::BuildSettings;

use crate::cli::{BuildFlags, ConfigureArgs, OutputFormat};

pub fn execute(flags: &BuildFlags, args: ConfigureArgs) -> Result<()> {
    let settings = super::resolve_settings(flags)?;

    match args.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&settings)
                .context("failed to serialize build settings")?;
            println!("{}", json);
        }
        OutputFormat::Human => print_human(&settings),
    }

    Ok(())
}

fn print_human(settings: &BuildSettings) {
    println!("Configuration:");
    println!();
    println!("  Platform: {}", settings.platform);
    println!(
        "  Build:    {} (debug: {}, release: {})",
        settings.mode, settings.debug, settings.release
    );
    println!(
        "  Compiler: {} ({} flags)",
        settings.compiler,
        settings.family.map_or("no dialect", |f| f.as_str())
    );
    println!("  Jobs:     {}", settings.jobs);
    println!("  Clean:    {}", settings.clean);

    print_list(
        "Include paths",
        settings.include_paths.iter().map(|p| p.display()),
    );
    print_list("Defines", settings.defines.iter());
    print_list("Compiler flags", settings.cpp_flags.iter());
    print_list("Linker flags", settings.link_flags.iter());
    print_list(
        "Library paths",
        settings.library_paths.iter().map(|p| p.display()),
    );
    print_list("Libraries", settings.libraries.iter());
}

fn print_list<T: Display>(title: &str, items: impl Iterator<Item = T>) {
    println!();
    println!("{}:", title);

    let mut empty = true;
    for item in items {
        println!("  {}", item);
        empty = false;
    }
    if empty {
        println!("  (none)");
    }
}
