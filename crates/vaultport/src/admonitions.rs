//! Blockquote admonition rewriting.
//!
//! Obsidian callouts open with a blockquote line carrying a bracketed tag,
//! e.g. `> [!warning] Be careful`. Renderers without callout support show
//! the raw tag, so the header line is rewritten into a bold-text leader.
//! Body lines after the header are ordinary blockquote content and pass
//! through unchanged.

use regex::Regex;
use std::sync::OnceLock;

/// Callout tags the target renderer styles natively. Headers with any other
/// tag have the tag markup dropped.
pub const SUPPORTED_TAGS: [&str; 5] = ["note", "tip", "important", "warning", "caution"];

/// Blockquote first line with an admonition tag: leader, tag, trailing title
static HEADER_RE: OnceLock<Regex> = OnceLock::new();

fn header_regex() -> &'static Regex {
    HEADER_RE.get_or_init(|| {
        Regex::new(r"^(\s*>\s*)\[!([A-Za-z0-9_-]+)\](.*)$")
            .expect("Admonition header regex should compile")
    })
}

fn is_supported(tag: &str) -> bool {
    SUPPORTED_TAGS.iter().any(|t| t.eq_ignore_ascii_case(tag))
}

/// Rewrite admonition headers in `markdown`, line by line.
///
/// Non-matching lines keep their bytes and line endings exactly. For a
/// matching header line:
///
/// - supported tag with a title: the header is split into the bare tag line
///   followed by a blockquote line with the title in bold
/// - supported tag without a title: unchanged
/// - unsupported tag with a title: replaced by the bold title alone
/// - unsupported tag without a title: the line is dropped
pub fn rewrite_blockquotes(markdown: &str) -> String {
    let mut out = String::with_capacity(markdown.len());
    for line in markdown.split_inclusive('\n') {
        let content = line.strip_suffix('\n').unwrap_or(line);
        let Some(caps) = header_regex().captures(content) else {
            out.push_str(line);
            continue;
        };

        let leader = &caps[1];
        let tag = &caps[2];
        let title = caps[3].trim();

        if is_supported(tag) {
            if title.is_empty() {
                out.push_str(line);
            } else {
                out.push_str(&format!("{}[!{}]\n", leader, tag));
                out.push_str(&format!("{}**{}**\n", leader, title));
            }
        } else if !title.is_empty() {
            out.push_str(&format!("{}**{}**\n", leader, title));
        }
        // unsupported tag without a title: skip the line entirely
    }
    out
}
