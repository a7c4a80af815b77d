//! Library crate root re-exporting the registry, settings and command modules.

#[path = "lib/mod.rs"]
pub mod lib_mod;
pub use lib_mod as lib;
pub mod cli;
pub mod commands;
pub mod registry;
pub mod settings;
