//! High-level operations behind the CLI commands.

pub mod configure;
pub mod run;

pub use configure::{configure, load_options, CliOverrides};
pub use run::run_build;
