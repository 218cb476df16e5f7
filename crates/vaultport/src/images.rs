//! Image reference rewriting.
//!
//! Normalizes two embedded-media syntaxes into a single standard Markdown
//! image form pointing at a flat `./assets/` directory:
//!
//! - Obsidian embeds: `![[path/img.png|500]]` (optionally followed by a
//!   trailing parenthesized link, which is discarded)
//! - Standard images: `![alt](path/img.png)`
//!
//! Rewriting is a pure text transformation and is idempotent: applying it
//! to its own output yields the same text.

use regex::{Captures, Regex};
use std::path::Path;
use std::sync::OnceLock;

/// Obsidian embed with an optional trailing `()` link
static EMBED_RE: OnceLock<Regex> = OnceLock::new();

fn embed_regex() -> &'static Regex {
    EMBED_RE.get_or_init(|| {
        Regex::new(r"!\[\[([^\]]+?)\]\](?:\([^)]*\))?").expect("Embed regex should compile")
    })
}

/// Standard Markdown image (captures alt + src)
static IMAGE_RE: OnceLock<Regex> = OnceLock::new();

fn image_regex() -> &'static Regex {
    IMAGE_RE
        .get_or_init(|| Regex::new(r"!\[([^\]]*?)\]\((.*?)\)").expect("Image regex should compile"))
}

/// Derive human-readable alt text from a filename.
///
/// Takes the filename's stem and replaces hyphens and underscores with
/// spaces. An empty stem (e.g. an empty filename) passes through unchanged.
///
/// # Examples
///
/// ```
/// use vaultport::images::derive_alt;
///
/// assert_eq!(derive_alt("my-photo_01.png"), "my photo 01");
/// assert_eq!(derive_alt("cat.png"), "cat");
/// ```
pub fn derive_alt(filename: &str) -> String {
    let stem = Path::new(filename)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let alt = stem.replace(['-', '_'], " ");
    if alt.is_empty() {
        stem
    } else {
        alt
    }
}

/// Last path segment of a reference, or empty when there is none
/// (e.g. `..` or a bare `/`).
fn file_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn rewrite_embed(caps: &Captures) -> String {
    // Inner content, e.g. "path/img.png|500"; anything after '|' is a
    // display-size directive and is discarded.
    let inner = &caps[1];
    let path_part = match inner.split_once('|') {
        Some((path, _)) => path,
        None => inner,
    };
    let filename = file_name(path_part);
    let alt = derive_alt(&filename);
    format!("![{}](./assets/{})", alt, filename)
}

fn rewrite_image(caps: &Captures) -> String {
    let mut alt = caps[1].to_string();
    let src = &caps[2];

    // Clean alt text if it carries a size suffix after '|'
    if let Some((head, _)) = alt.split_once('|') {
        alt = head.trim().to_string();
    }
    let filename = file_name(src);
    if alt.is_empty() {
        alt = derive_alt(&filename);
    }

    format!("![{}](./assets/{})", alt, filename)
}

/// Rewrite all media references in `markdown` to the normalized form.
///
/// Embeds are rewritten first, then every standard image (including the
/// just-rewritten embeds) is re-normalized to `./assets/<filename>`. The
/// second pass is a no-op on already-normalized references.
pub fn rewrite_images(markdown: &str) -> String {
    let markdown = embed_regex().replace_all(markdown, |caps: &Captures| rewrite_embed(caps));
    image_regex()
        .replace_all(&markdown, |caps: &Captures| rewrite_image(caps))
        .into_owned()
}
