//! Vaultport
//!
//! Migrates an Obsidian-style Markdown vault into plain, portable Markdown.
//! Rewrites embedded media references and callout blockquotes, and renames
//! attachment directories, in a single best-effort, non-destructive pass.

use anyhow::{bail, Result};
use clap::Parser;
use vaultport::cli::Cli;
use vaultport::output::{ExitCode, JsonOutput, OutputContext};
use vaultport::vault;

/// Helper to determine exit code from error message
fn error_to_exit_code(error: &anyhow::Error) -> ExitCode {
    if error.downcast_ref::<std::io::Error>().is_some() {
        return ExitCode::ExternalError;
    }

    let error_msg = error.to_string().to_lowercase();
    if error_msg.contains("not a directory") {
        ExitCode::InvalidArgument
    } else if error_msg.contains("failed to rename") || error_msg.contains("failed to write") {
        ExitCode::ExternalError
    } else {
        ExitCode::GenericError
    }
}

fn main() {
    let exit_code = match run() {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("Error: {}", e);
            error_to_exit_code(&e)
        }
    };

    if exit_code != ExitCode::Success {
        std::process::exit(exit_code.code());
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let ctx = OutputContext::new(cli.quiet, cli.json);

    // Validate the root before any mutation
    if !cli.root.is_dir() {
        bail!("{} is not a directory", cli.root.display());
    }

    let report = vault::migrate(&cli.root, &ctx)?;

    if ctx.is_json() {
        let output = JsonOutput::success(report, "migrate");
        println!("{}", output.to_json_string()?);
    } else {
        let _ = ctx.print_success("✓ Migration complete");
    }

    Ok(())
}
