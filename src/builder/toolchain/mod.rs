//! Toolchain abstraction for rendering build settings.
//!
//! A [`BuildSettings`] record is dialect-neutral. This module turns it into
//! concrete compiler and linker argument lists for GNU-style drivers
//! (gcc, clang, MinGW) and for MSVC.
//!
//! Compiler program lookup priority:
//! 1. `CXX` environment variable
//! 2. `CC` environment variable, with the C++ driver inferred from it
//! 3. The conventional driver name for the chosen compiler, searched in PATH

use std::path::{Path, PathBuf};

use crate::core::{BuildSettings, Define, ToolchainFamily};

mod detect;
mod gcc;
mod msvc;

pub use detect::{toolchain_for, toolchain_with};
pub use gcc::GccToolchain;
pub use msvc::MsvcToolchain;

/// A command to execute, with program and arguments.
#[derive(Debug, Clone)]
pub struct CommandSpec {
    /// The program to run (e.g., "g++", "cl.exe")
    pub program: PathBuf,
    /// Command arguments
    pub args: Vec<String>,
}

impl CommandSpec {
    /// Create a new command spec.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        CommandSpec {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Add multiple arguments.
    pub fn args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args.extend(args.into_iter().map(|a| a.into()));
        self
    }
}

/// Trait for toolchain implementations.
///
/// Implementors supply the per-argument spelling; the list assembly is shared.
pub trait Toolchain: Send + Sync {
    /// Get the toolchain family.
    fn family(&self) -> ToolchainFamily;

    /// Get the C++ compiler driver path.
    fn compiler_path(&self) -> &Path;

    /// Get the linker path.
    fn linker_path(&self) -> &Path;

    /// Render an include directory.
    fn include_arg(&self, dir: &Path) -> String;

    /// Render a preprocessor define.
    fn define_arg(&self, define: &Define) -> String;

    /// Render a library search path.
    fn lib_dir_arg(&self, dir: &Path) -> String;

    /// Render a library name.
    fn lib_arg(&self, lib: &str) -> String;

    /// Arguments that compile one source file into `output`.
    fn compile_io_args(&self, source: &Path, output: &Path) -> Vec<String>;

    /// Arguments that name the linked `output`.
    fn link_output_args(&self, output: &Path) -> Vec<String>;

    /// Preprocessor arguments: include paths, then defines.
    fn preprocessor_args(&self, settings: &BuildSettings) -> Vec<String> {
        let mut args: Vec<String> = settings
            .include_paths
            .iter()
            .map(|dir| self.include_arg(dir))
            .collect();
        args.extend(settings.defines.iter().map(|d| self.define_arg(d)));
        args
    }

    /// Compile arguments: include paths, then defines, then compiler flags.
    fn compile_args(&self, settings: &BuildSettings) -> Vec<String> {
        let mut args = self.preprocessor_args(settings);
        args.extend(settings.cpp_flags.iter().cloned());
        args
    }

    /// Link arguments: library paths, then libraries, then linker flags.
    fn link_args(&self, settings: &BuildSettings) -> Vec<String> {
        let mut args: Vec<String> = settings
            .library_paths
            .iter()
            .map(|dir| self.lib_dir_arg(dir))
            .collect();
        args.extend(settings.libraries.iter().map(|lib| self.lib_arg(lib)));
        args.extend(settings.link_flags.iter().cloned());
        args
    }

    /// Generate a compile command for one translation unit.
    fn compile_command(&self, settings: &BuildSettings, source: &Path, output: &Path) -> CommandSpec {
        CommandSpec::new(self.compiler_path())
            .args(self.compile_args(settings))
            .args(self.compile_io_args(source, output))
    }

    /// Generate a link command for an executable.
    fn link_command(&self, settings: &BuildSettings, objects: &[PathBuf], output: &Path) -> CommandSpec {
        CommandSpec::new(self.linker_path())
            .args(self.link_output_args(output))
            .args(objects.iter().map(|o| o.display().to_string()))
            .args(self.link_args(settings))
    }
}
