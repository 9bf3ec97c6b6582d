//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use icebuild::ops::CliOverrides;

/// icebuild - resolve the engine's build configuration
#[derive(Parser)]
#[command(name = "icebuild")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(flatten)]
    pub build: BuildFlags,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Options shared by every command that resolves a configuration.
#[derive(Args, Debug, Clone, Default)]
pub struct BuildFlags {
    /// Set the build to compile: release, debug (default), and release-with-debug
    #[arg(long, global = true, value_name = "MODE")]
    pub build: Option<String>,

    /// Set the compiler to use: default, gcc, clang, mingw, msvc
    #[arg(long, global = true, value_name = "NAME")]
    pub compiler: Option<String>,

    /// Number of parallel jobs (ICEBUILD_NUM_JOBS or SCONS_NUM_JOBS takes precedence)
    #[arg(short, long, global = true)]
    pub jobs: Option<usize>,

    /// Clean build outputs instead of building
    #[arg(short, long, global = true)]
    pub clean: bool,

    /// Directory holding third-party dependencies
    #[arg(long, global = true, value_name = "PATH")]
    pub deps_dir: Option<PathBuf>,
}

impl BuildFlags {
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            build: self.build.clone(),
            compiler: self.compiler.clone(),
            jobs: self.jobs,
            clean: self.clean,
            deps_dir: self.deps_dir.clone(),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve and print the build configuration (default)
    Configure(ConfigureArgs),

    /// Show compile/link flags for the resolved configuration
    Flags(FlagsArgs),

    /// Run a build command with the configuration exported to its environment
    Run(RunArgs),

    /// Show the detected host platform
    Platform,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Output format for `configure`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

#[derive(Args, Default)]
pub struct ConfigureArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

#[derive(Args)]
pub struct FlagsArgs {
    /// Show compile flags only
    #[arg(long)]
    pub compile: bool,

    /// Show link flags only
    #[arg(long)]
    pub link: bool,

    /// Print each group on a single line
    #[arg(long)]
    pub oneline: bool,
}

#[derive(Args)]
pub struct RunArgs {
    /// Build command and its arguments
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}
