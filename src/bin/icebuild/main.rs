//! icebuild CLI - build configuration for the engine

use std::io::IsTerminal;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use icebuild::util::diagnostic::emit;
use icebuild::ConfigError;

mod cli;
mod commands;

use cli::{Cli, Commands, ConfigureArgs};

fn main() {
    let cli = Cli::parse();
    let color = !cli.no_color && std::io::stderr().is_terminal();

    if let Err(e) = run(cli) {
        match e.downcast_ref::<ConfigError>() {
            Some(config_err) => emit(&config_err.to_diagnostic(), color),
            None => eprintln!("error: {:#}", e),
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("icebuild=debug")
    } else {
        EnvFilter::new("icebuild=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_ansi(!cli.no_color)
        .with_writer(std::io::stderr)
        .init();

    let flags = cli.build;

    match cli.command.unwrap_or(Commands::Configure(ConfigureArgs::default())) {
        Commands::Configure(args) => commands::configure::execute(&flags, args),
        Commands::Flags(args) => commands::flags::execute(&flags, args),
        Commands::Run(args) => commands::run::execute(&flags, args),
        Commands::Platform => commands::platform::execute(),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}
