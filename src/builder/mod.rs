//! Rendering of resolved settings into toolchain command lines.

pub mod toolchain;

pub use toolchain::{toolchain_for, CommandSpec, Toolchain};
