//! Command-line interface definitions using clap.

use clap::Parser;
use std::path::PathBuf;

/// Vaultport
///
/// Migrates an Obsidian-style Markdown vault into plain, portable Markdown.
/// Rewrites `![[embed]]` media references and `[!tag]` callout blockquotes,
/// and renames `attachments/` directories to `assets/`.
///
/// Exit Codes:
///   0  - Migration succeeded
///   1  - Generic error occurred
///   2  - Invalid arguments or usage error (e.g. root is not a directory)
///  10  - File system operation failed mid-run
#[derive(Parser)]
#[command(name = "vaultport")]
#[command(about = "Migrate an Obsidian vault to portable Markdown", long_about = None)]
pub struct Cli {
    /// Vault root directory
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Suppress progress output (for scripting)
    #[arg(short, long)]
    pub quiet: bool,

    /// Emit the migration report as JSON
    #[arg(long)]
    pub json: bool,
}
