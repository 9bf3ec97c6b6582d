//! Toolchain selection for resolved settings.

use std::path::PathBuf;

use crate::core::{BuildSettings, CompilerChoice, Platform, ToolchainFamily};

use super::{GccToolchain, MsvcToolchain, Toolchain};

/// Pick the toolchain for `settings`, honouring `CXX` and `CC`.
pub fn toolchain_for(settings: &BuildSettings) -> Box<dyn Toolchain> {
    let cxx = std::env::var_os("CXX").map(PathBuf::from);
    let cc = std::env::var_os("CC").map(PathBuf::from);
    toolchain_with(settings, cxx, cc)
}

/// Pick the toolchain for `settings` with explicit compiler overrides.
///
/// An explicit `cxx` wins; otherwise the C++ driver is inferred from `cc`;
/// otherwise the conventional driver for the compiler choice is looked up in
/// PATH, falling back to the bare program name.
pub fn toolchain_with(
    settings: &BuildSettings,
    cxx: Option<PathBuf>,
    cc: Option<PathBuf>,
) -> Box<dyn Toolchain> {
    match settings.family {
        Some(ToolchainFamily::Msvc) => {
            let cl = cxx.unwrap_or_else(|| find_program("cl"));
            let link = find_program("link");
            tracing::debug!("using msvc toolchain: cl={}, link={}", cl.display(), link.display());
            Box::new(MsvcToolchain::new(cl, link))
        }
        Some(ToolchainFamily::Gnu) | None => {
            let cxx = cxx
                .or_else(|| cc.map(|cc| GccToolchain::infer_cxx(&cc)))
                .unwrap_or_else(|| find_program(default_driver(settings.compiler, settings.platform)));
            tracing::debug!("using gnu toolchain: cxx={}", cxx.display());
            Box::new(GccToolchain::new(cxx))
        }
    }
}

/// Conventional C++ driver name for a compiler choice that is not MSVC.
fn default_driver(compiler: CompilerChoice, platform: Platform) -> &'static str {
    match (compiler, platform) {
        (CompilerChoice::Clang, _) | (CompilerChoice::Default, Platform::MacOs) => "clang++",
        _ => "g++",
    }
}

/// Resolve a program through PATH, keeping the bare name if it is absent.
fn find_program(name: &str) -> PathBuf {
    which::which(name).unwrap_or_else(|_| PathBuf::from(name))
}
