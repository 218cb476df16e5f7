//! Vaultport Library
//!
//! Core functionality for migrating an Obsidian-style Markdown vault into
//! plain, portable Markdown. Primarily used by the `vaultport` binary, but
//! the rewriters can also be embedded in other tools.

pub mod admonitions;
pub mod cli;
pub mod images;
pub mod output;
pub mod vault;

// Re-export commonly used types
pub use output::{ExitCode, JsonOutput, OutputContext};
pub use vault::{migrate, MigrationReport};
