//! Core data model: platform, build mode, compiler and the resolved settings.

pub mod build_mode;
pub mod compiler;
pub mod platform;
pub mod settings;

pub use build_mode::BuildMode;
pub use compiler::{CompilerChoice, ToolchainFamily};
pub use platform::Platform;
pub use settings::{BuildSettings, Define};
