//! icebuild - build configuration for the engine's C++ sources
//!
//! This crate detects the host platform, validates build options and derives
//! the compiler and linker flag lists the build tool consumes.

pub mod builder;
pub mod core;
pub mod ops;
pub mod resolver;
pub mod util;

pub use crate::core::{BuildMode, BuildSettings, CompilerChoice, Define, Platform, ToolchainFamily};
pub use crate::resolver::{resolve, BuildOptions, ConfigError, HostEnvironment};
