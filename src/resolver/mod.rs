//! Configuration resolution.
//!
//! Turns raw build options plus a snapshot of the host environment into an
//! immutable [`BuildSettings`]. Resolution is a pure function: everything it
//! reads from the outside world is captured in [`HostEnvironment`] first.
//!
//! Order of precedence for the job count (highest to lowest):
//! 1. `ICEBUILD_NUM_JOBS` (or the legacy `SCONS_NUM_JOBS`) environment variable
//! 2. An explicit request greater than one
//! 3. The number of CPUs on the host

use std::path::PathBuf;

mod errors;

pub use errors::ConfigError;

use crate::core::{BuildMode, BuildSettings, CompilerChoice, Define, Platform, ToolchainFamily};

/// Environment variable that overrides the job count (useful on CI).
pub const NUM_JOBS_ENV: &str = "ICEBUILD_NUM_JOBS";

/// Job count variable read by older SCons-driven setups.
pub const LEGACY_NUM_JOBS_ENV: &str = "SCONS_NUM_JOBS";

/// Directory holding third-party dependencies, relative to the project root.
pub const DEFAULT_DEPS_DIR: &str = "deps";

/// Include directories of the engine's bundled dependencies, relative to the
/// deps directory.
pub const DEFAULT_DEPENDENCIES: &[&str] = &[
    "freeimage/include",
    "boost/include",
    "bullet/include",
    "sdl/include",
    "assimp/include",
    "glm/include",
    "glew/include",
    "angelscript/include",
    "entityx/include",
    "threadpool11/include",
    "sqlite3/include",
];

/// Raw, unvalidated build options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    /// Build mode name (`None` = debug)
    pub build: Option<String>,
    /// Compiler name (`None` or empty = platform default)
    pub compiler: Option<String>,
    /// Requested number of parallel jobs
    pub jobs: Option<usize>,
    /// Whether the build tool should clean instead of build
    pub clean: bool,
    /// Directory holding third-party dependencies
    pub deps_dir: PathBuf,
    /// Dependency include directories, relative to `deps_dir`
    pub dependencies: Vec<String>,
    /// Extra compiler flags appended after the derived ones
    pub cpp_flags: Vec<String>,
    /// Extra preprocessor defines (`NAME` or `NAME=VALUE`)
    pub defines: Vec<String>,
    /// Extra linker flags
    pub link_flags: Vec<String>,
    /// Library search paths
    pub library_paths: Vec<PathBuf>,
    /// Libraries to link (without prefix or extension)
    pub libraries: Vec<String>,
}

impl Default for BuildOptions {
    fn default() -> Self {
        BuildOptions {
            build: None,
            compiler: None,
            jobs: None,
            clean: false,
            deps_dir: PathBuf::from(DEFAULT_DEPS_DIR),
            dependencies: DEFAULT_DEPENDENCIES.iter().map(|s| s.to_string()).collect(),
            cpp_flags: Vec::new(),
            defines: Vec::new(),
            link_flags: Vec::new(),
            library_paths: Vec::new(),
            libraries: Vec::new(),
        }
    }
}

/// Snapshot of everything resolution reads from the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostEnvironment {
    /// OS identifier, as in `std::env::consts::OS`
    pub os: String,
    /// Value of the job count override variable, if set
    pub num_jobs_override: Option<String>,
    /// Number of CPUs available to the build
    pub cpu_count: usize,
}

impl HostEnvironment {
    /// Capture the current process environment.
    pub fn current() -> Self {
        HostEnvironment {
            os: std::env::consts::OS.to_string(),
            num_jobs_override: read_job_override(|key| std::env::var(key).ok()),
            cpu_count: std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
        }
    }
}

/// First non-empty value of `ICEBUILD_NUM_JOBS`, then `SCONS_NUM_JOBS`.
pub fn read_job_override(get: impl Fn(&str) -> Option<String>) -> Option<String> {
    [NUM_JOBS_ENV, LEGACY_NUM_JOBS_ENV]
        .into_iter()
        .filter_map(|key| get(key))
        .find(|value| !value.trim().is_empty())
}

/// Resolve build options into the final settings record.
pub fn resolve(options: &BuildOptions, host: &HostEnvironment) -> Result<BuildSettings, ConfigError> {
    let platform = Platform::from_os(&host.os)?;

    let mode = match options.build.as_deref() {
        Some(name) => name.parse::<BuildMode>()?,
        None => BuildMode::default(),
    };

    let jobs = resolve_jobs(options.jobs, host);

    let compiler = CompilerChoice::resolve(options.compiler.as_deref().unwrap_or(""), platform)?;
    let family = compiler.family(platform);

    tracing::debug!(
        "resolving {} build for {} with compiler {} ({})",
        mode,
        platform,
        compiler,
        family.map_or("no flag dialect", |f| f.as_str())
    );

    let mut include_paths = vec![PathBuf::from("include"), PathBuf::from("src")];
    include_paths.extend(
        options
            .dependencies
            .iter()
            .map(|dep| options.deps_dir.join(dep)),
    );

    let mut flags = FlagSet::default();
    match family {
        Some(ToolchainFamily::Gnu) => flags.gnu(mode),
        Some(ToolchainFamily::Msvc) => flags.msvc(mode),
        None => {}
    }

    if !platform.is_windows() {
        // Boost.Log is linked dynamically everywhere but Windows
        flags.defines.push(Define::flag("BOOST_LOG_DYN_LINK"));
    }
    // boost::log requires boost::phoenix v3
    flags.defines.push(Define::flag("BOOST_SPIRIT_USE_PHOENIX_V3"));

    flags
        .defines
        .extend(options.defines.iter().map(|d| Define::parse(d)));
    flags.cpp_flags.extend(options.cpp_flags.iter().cloned());
    flags.link_flags.extend(options.link_flags.iter().cloned());

    Ok(BuildSettings {
        platform,
        mode,
        debug: mode.is_debug(),
        release: mode.is_release(),
        clean: options.clean,
        compiler,
        family,
        jobs,
        include_paths,
        defines: flags.defines,
        cpp_flags: flags.cpp_flags,
        link_flags: flags.link_flags,
        library_paths: options.library_paths.clone(),
        libraries: options.libraries.clone(),
    })
}

/// Pick the job count: environment override, then an explicit request above
/// one, then the host CPU count.
///
/// An override that is not a positive integer is ignored with a warning.
pub fn resolve_jobs(requested: Option<usize>, host: &HostEnvironment) -> usize {
    if let Some(raw) = host.num_jobs_override.as_deref() {
        let raw = raw.trim();
        if !raw.is_empty() {
            match raw.parse::<usize>() {
                Ok(n) if n >= 1 => return n,
                _ => tracing::warn!("ignoring job count override '{}': not a positive integer", raw),
            }
        }
    }

    match requested {
        Some(n) if n > 1 => n,
        _ => host.cpu_count.max(1),
    }
}

/// Flags accumulated for one toolchain family.
#[derive(Debug, Default)]
struct FlagSet {
    defines: Vec<Define>,
    cpp_flags: Vec<String>,
    link_flags: Vec<String>,
}

impl FlagSet {
    fn cpp(&mut self, flags: &[&str]) {
        self.cpp_flags.extend(flags.iter().map(|f| f.to_string()));
    }

    /// GCC, Clang and MinGW.
    fn gnu(&mut self, mode: BuildMode) {
        if mode.is_debug() {
            // -pg enables the gprof profiler
            self.cpp(&["-g", "-pg"]);
            if !mode.is_release() {
                self.cpp(&["-O0"]);
                self.defines.push(Define::flag("DEBUG"));
            }
        }

        if mode.is_release() {
            self.cpp(&["-O3"]);
            self.defines.push(Define::flag("NDEBUG"));
        }

        self.cpp(&["-std=c++11", "-pedantic-errors"]);
    }

    /// Microsoft Visual C++.
    fn msvc(&mut self, mode: BuildMode) {
        // no warnings, silence C4350, unwind semantics, dynamic CRT
        self.cpp(&["/w", "/wd4350", "/EHsc", "/MD"]);

        if mode.is_debug() {
            // /FS lets parallel cl.exe processes share one .pdb
            self.cpp(&["/Zi", "/FS"]);
            self.link_flags.push("/DEBUG".to_string());
            if !mode.is_release() {
                self.cpp(&["/Od"]);
                self.defines.push(Define::flag("DEBUG"));
            }
        }

        if mode.is_release() {
            self.cpp(&["/Ox"]);
            self.defines.push(Define::flag("NDEBUG"));
        }
    }
}
