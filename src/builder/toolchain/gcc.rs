//! GNU-style toolchain (gcc, clang, MinGW).

use std::path::{Path, PathBuf};

use crate::core::{Define, ToolchainFamily};

use super::Toolchain;

/// GNU-style driver; the same program compiles and links.
#[derive(Debug, Clone)]
pub struct GccToolchain {
    /// Path to the C++ compiler driver
    pub cxx: PathBuf,
}

impl GccToolchain {
    /// Create a new GCC-style toolchain.
    pub fn new(cxx: PathBuf) -> Self {
        GccToolchain { cxx }
    }

    /// Infer C++ compiler path from C compiler path.
    ///
    /// Handles common patterns:
    /// - gcc, x86_64-w64-mingw32-gcc -> g++, x86_64-w64-mingw32-g++
    /// - clang -> clang++
    /// - cc, /usr/bin/cc -> c++, /usr/bin/c++
    pub fn infer_cxx(cc: &Path) -> PathBuf {
        let cc_str = cc.to_string_lossy();

        if cc_str.ends_with("gcc") {
            return PathBuf::from(format!("{}++", &cc_str[..cc_str.len() - 2]));
        }

        if cc_str.ends_with("clang") {
            return PathBuf::from(format!("{}++", cc_str));
        }

        // Only a complete "cc" basename, not "mycc"
        let is_standalone_cc = cc_str == "cc"
            || cc_str.ends_with("/cc")
            || cc_str.ends_with("\\cc")
            || cc_str.ends_with("-cc");

        if is_standalone_cc {
            return PathBuf::from(format!("{}++", &cc_str[..cc_str.len() - 1]));
        }

        PathBuf::from(format!("{}++", cc_str))
    }
}

impl Toolchain for GccToolchain {
    fn family(&self) -> ToolchainFamily {
        ToolchainFamily::Gnu
    }

    fn compiler_path(&self) -> &Path {
        &self.cxx
    }

    fn linker_path(&self) -> &Path {
        &self.cxx
    }

    fn include_arg(&self, dir: &Path) -> String {
        format!("-I{}", dir.display())
    }

    fn define_arg(&self, define: &Define) -> String {
        format!("-D{}", define)
    }

    fn lib_dir_arg(&self, dir: &Path) -> String {
        format!("-L{}", dir.display())
    }

    fn lib_arg(&self, lib: &str) -> String {
        format!("-l{}", lib)
    }

    fn compile_io_args(&self, source: &Path, output: &Path) -> Vec<String> {
        vec![
            "-c".to_string(),
            source.display().to_string(),
            "-o".to_string(),
            output.display().to_string(),
        ]
    }

    fn link_output_args(&self, output: &Path) -> Vec<String> {
        vec!["-o".to_string(), output.display().to_string()]
    }
}
