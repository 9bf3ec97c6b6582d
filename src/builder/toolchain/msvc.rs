//! MSVC toolchain implementation.

use std::path::{Path, PathBuf};

use crate::core::{Define, ToolchainFamily};

use super::Toolchain;

/// MSVC toolchain (Windows).
#[derive(Debug, Clone)]
pub struct MsvcToolchain {
    /// Path to cl.exe (compiler)
    pub cl: PathBuf,
    /// Path to link.exe (linker)
    pub link: PathBuf,
}

impl MsvcToolchain {
    /// Create a new MSVC toolchain.
    pub fn new(cl: PathBuf, link: PathBuf) -> Self {
        MsvcToolchain { cl, link }
    }
}

impl Toolchain for MsvcToolchain {
    fn family(&self) -> ToolchainFamily {
        ToolchainFamily::Msvc
    }

    fn compiler_path(&self) -> &Path {
        &self.cl
    }

    fn linker_path(&self) -> &Path {
        &self.link
    }

    fn include_arg(&self, dir: &Path) -> String {
        format!("/I{}", dir.display())
    }

    fn define_arg(&self, define: &Define) -> String {
        format!("/D{}", define)
    }

    fn lib_dir_arg(&self, dir: &Path) -> String {
        format!("/LIBPATH:{}", dir.display())
    }

    fn lib_arg(&self, lib: &str) -> String {
        format!("{}.lib", lib)
    }

    fn compile_io_args(&self, source: &Path, output: &Path) -> Vec<String> {
        // Quiet logo, compile only, force C++
        vec![
            "/nologo".to_string(),
            "/c".to_string(),
            "/TP".to_string(),
            source.display().to_string(),
            format!("/Fo{}", output.display()),
        ]
    }

    fn link_output_args(&self, output: &Path) -> Vec<String> {
        vec!["/nologo".to_string(), format!("/OUT:{}", output.display())]
    }
}
