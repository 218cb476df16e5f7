//! Integration tests for the vaultport binary.
//!
//! Covers the CLI contract:
//! 1. End-to-end rewriting of embeds and callouts
//! 2. Attachment directory renaming and skip-on-collision
//! 3. Root validation and exit codes
//! 4. Quiet mode
//! 5. JSON report output

use assert_cmd::assert::OutputAssertExt;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

struct TestContext {
    #[allow(dead_code)]
    temp_dir: TempDir,
    vault_path: PathBuf,
}

impl TestContext {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("create temp dir");
        let vault_path = temp_dir.path().to_path_buf();
        Self {
            temp_dir,
            vault_path,
        }
    }

    fn vault_path(&self) -> &Path {
        &self.vault_path
    }

    fn write_note(&self, rel: &str, content: &str) {
        let path = self.vault_path.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create note parent dir");
        }
        fs::write(path, content).expect("write note");
    }

    fn read_note(&self, rel: &str) -> String {
        fs::read_to_string(self.vault_path.join(rel)).expect("read note")
    }

    fn run(&self, extra_args: &[&str]) -> assert_cmd::assert::Assert {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_vaultport"));
        cmd.arg(&self.vault_path);
        cmd.args(extra_args);
        cmd.assert()
    }
}

#[test]
fn test_end_to_end_rewrites_embeds_and_callouts() {
    let ctx = TestContext::new();
    ctx.write_note("note.md", "![[img/cat.png]]\n> [!note] Remember this\n");

    ctx.run(&[])
        .success()
        .stdout(predicate::str::contains("Updated note.md"))
        .stdout(predicate::str::contains("✓ Migration complete"));

    let content = ctx.read_note("note.md");
    assert!(content.contains("![cat](./assets/cat.png)"));
    assert!(content.contains("> [!note]\n> **Remember this**\n"));
}

#[test]
fn test_exact_output_contracts() {
    let ctx = TestContext::new();
    ctx.write_note(
        "contract.md",
        "![[a/b/img.png|500]]\n\
         ![My Photo](../x/y/photo.jpg)\n\
         > [!warning] Be careful\n\
         > [!tip]\n\
         > [!custom] Hello\n\
         > [!custom]\n",
    );

    ctx.run(&[]).success();

    assert_eq!(
        ctx.read_note("contract.md"),
        "![img](./assets/img.png)\n\
         ![My Photo](./assets/photo.jpg)\n\
         > [!warning]\n\
         > **Be careful**\n\
         > [!tip]\n\
         > **Hello**\n"
    );
}

#[test]
fn test_attachment_dirs_renamed() {
    let ctx = TestContext::new();
    fs::create_dir_all(ctx.vault_path().join("topic/Attachments")).unwrap();
    fs::write(ctx.vault_path().join("topic/Attachments/img.png"), b"png").unwrap();

    ctx.run(&[])
        .success()
        .stdout(predicate::str::contains("Renamed"));

    assert!(ctx.vault_path().join("topic/assets/img.png").exists());
    assert!(!ctx.vault_path().join("topic/Attachments").exists());
}

#[test]
fn test_rename_collision_skipped_with_notice() {
    let ctx = TestContext::new();
    fs::create_dir_all(ctx.vault_path().join("Attachments")).unwrap();
    fs::write(ctx.vault_path().join("Attachments/a.png"), b"a").unwrap();
    fs::create_dir_all(ctx.vault_path().join("assets")).unwrap();
    fs::write(ctx.vault_path().join("assets/b.png"), b"b").unwrap();

    ctx.run(&[])
        .success()
        .stdout(predicate::str::contains("already exists"));

    // Both directories left untouched
    assert!(ctx.vault_path().join("Attachments/a.png").exists());
    assert!(ctx.vault_path().join("assets/b.png").exists());
}

#[test]
fn test_invalid_root_is_usage_error() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("no-such-vault");

    Command::new(env!("CARGO_BIN_EXE_vaultport"))
        .arg(&missing)
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("is not a directory"));
}

#[test]
fn test_root_that_is_a_file_is_usage_error() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("note.md");
    fs::write(&file, "text").unwrap();

    Command::new(env!("CARGO_BIN_EXE_vaultport"))
        .arg(&file)
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("is not a directory"));
}

#[test]
fn test_unchanged_file_not_reported() {
    let ctx = TestContext::new();
    ctx.write_note("plain.md", "# Nothing to do here\n");

    ctx.run(&[])
        .success()
        .stdout(predicate::str::contains("Updated").not());

    assert_eq!(ctx.read_note("plain.md"), "# Nothing to do here\n");
}

#[test]
fn test_quiet_suppresses_progress() {
    let ctx = TestContext::new();
    ctx.write_note("note.md", "![[cat.png]]\n");

    ctx.run(&["--quiet"])
        .success()
        .stdout(predicate::str::is_empty());

    // The rewrite still happened
    assert_eq!(ctx.read_note("note.md"), "![cat](./assets/cat.png)\n");
}

#[test]
fn test_json_report() {
    let ctx = TestContext::new();
    ctx.write_note("note.md", "![[cat.png]]\n");
    fs::create_dir_all(ctx.vault_path().join("attachments")).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_vaultport"))
        .arg(ctx.vault_path())
        .arg("--json")
        .output()
        .expect("run vaultport");
    assert!(output.status.success());

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("parse JSON report");
    assert_eq!(json["success"], true);
    assert_eq!(json["metadata"]["command"], "migrate");
    assert_eq!(json["data"]["updated_files"][0], "note.md");
    assert_eq!(json["data"]["files_scanned"], 1);
    assert_eq!(json["data"]["renamed_dirs"].as_array().unwrap().len(), 1);
    assert!(json["data"]["skipped_dirs"].as_array().unwrap().is_empty());
}

#[test]
fn test_defaults_to_current_directory() {
    let ctx = TestContext::new();
    ctx.write_note("note.md", "![[dog.png]]\n");

    Command::new(env!("CARGO_BIN_EXE_vaultport"))
        .current_dir(ctx.vault_path())
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Migration complete"));

    assert_eq!(ctx.read_note("note.md"), "![dog](./assets/dog.png)\n");
}
