//! Vault traversal: attachment directory renaming and Markdown rewriting.
//!
//! The migration is a single synchronous pass over the tree. Directories
//! named `attachments` are renamed first, then every Markdown file is read,
//! rewritten in memory, and written back only if its content changed. Each
//! file is processed independently; the final content of a file is a pure
//! function of its original content.

use crate::admonitions::rewrite_blockquotes;
use crate::images::rewrite_images;
use crate::output::OutputContext;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A directory rename, attempted or skipped
#[derive(Debug, Clone, Serialize)]
pub struct DirRename {
    /// Original directory path
    pub from: PathBuf,
    /// Target sibling path
    pub to: PathBuf,
}

/// Machine-readable summary of a migration run
#[derive(Debug, Default, Serialize)]
pub struct MigrationReport {
    /// Attachment directories renamed to `assets`
    pub renamed_dirs: Vec<DirRename>,
    /// Renames skipped because the target already existed
    pub skipped_dirs: Vec<DirRename>,
    /// Rewritten Markdown files, relative to the vault root
    pub updated_files: Vec<String>,
    /// Total Markdown files discovered under the root
    pub files_scanned: usize,
}

/// Run the full migration over the vault at `root`.
///
/// Renames attachment directories, then rewrites Markdown files in place.
/// Progress is reported through `ctx` as it happens; the returned report
/// carries the same information for `--json` output.
pub fn migrate(root: &Path, ctx: &OutputContext) -> Result<MigrationReport> {
    let mut report = MigrationReport::default();
    rename_attachment_dirs(root, ctx, &mut report)?;
    update_markdown_files(root, ctx, &mut report)?;
    Ok(report)
}

/// Rename every directory named `attachments` (case-insensitive) under
/// `root` to a sibling named `assets`.
///
/// Traversal is bottom-up (children before parents) so a rename never
/// interferes with still-pending traversal of its ancestors. If the target
/// already exists the rename is skipped and reported; the original
/// directory and its contents are left untouched.
pub fn rename_attachment_dirs(
    root: &Path,
    ctx: &OutputContext,
    report: &mut MigrationReport,
) -> Result<()> {
    let walker = WalkDir::new(root).min_depth(1).contents_first(true);
    for entry in walker.into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_dir() {
            continue;
        }
        if !entry
            .file_name()
            .to_string_lossy()
            .eq_ignore_ascii_case("attachments")
        {
            continue;
        }

        let old_dir = entry.path().to_path_buf();
        let new_dir = old_dir.with_file_name("assets");
        let rename = DirRename {
            from: old_dir.clone(),
            to: new_dir.clone(),
        };

        if new_dir.exists() {
            let _ = ctx.print_info(format!(
                "Skipped {}: {} already exists",
                old_dir.display(),
                new_dir.display()
            ));
            report.skipped_dirs.push(rename);
        } else {
            fs::rename(&old_dir, &new_dir).with_context(|| {
                format!(
                    "Failed to rename {} to {}",
                    old_dir.display(),
                    new_dir.display()
                )
            })?;
            let _ = ctx.print_info(format!(
                "Renamed {} → {}",
                old_dir.display(),
                new_dir.display()
            ));
            report.renamed_dirs.push(rename);
        }
    }
    Ok(())
}

/// Rewrite every Markdown file under `root` in place.
///
/// Files that cannot be read or are not valid UTF-8 are silently skipped.
/// A file is written back only when its content actually changed, so
/// untouched files keep their modification timestamps.
pub fn update_markdown_files(
    root: &Path,
    ctx: &OutputContext,
    report: &mut MigrationReport,
) -> Result<()> {
    for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() || !is_markdown(entry.path()) {
            continue;
        }
        report.files_scanned += 1;

        let Ok(text) = fs::read_to_string(entry.path()) else {
            continue;
        };

        let rewritten = rewrite_blockquotes(&rewrite_images(&text));
        if rewritten == text {
            continue;
        }

        fs::write(entry.path(), &rewritten)
            .with_context(|| format!("Failed to write {}", entry.path().display()))?;
        let rel = entry.path().strip_prefix(root).unwrap_or(entry.path());
        let _ = ctx.print_info(format!("Updated {}", rel.display()));
        report.updated_files.push(rel.display().to_string());
    }
    Ok(())
}

/// Check for `.md`/`.markdown` extension, compared case-insensitively
fn is_markdown(path: &Path) -> bool {
    match path.extension() {
        Some(ext) => {
            let ext = ext.to_string_lossy().to_lowercase();
            ext == "md" || ext == "markdown"
        }
        None => false,
    }
}
