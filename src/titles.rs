//! Title list loading.

use anyhow::{bail, Context, Result};
use std::path::Path;

use crate::models::TitleEntry;

/// Marks a comment line in the list file.
pub const COMMENT_PREFIX: char = '#';

/// Line boundaries: `\n`, a lone `\r`, and the other Unicode line and
/// record separators. A `\r\n` pair yields an extra empty line, which the
/// blank-line filter drops.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Filter list text into ordered title entries.
/// Blank lines and `#` comments are dropped before numbering.
pub fn parse_titles(text: &str) -> Vec<TitleEntry> {
    text.split(is_line_break)
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(COMMENT_PREFIX))
        .enumerate()
        .map(|(i, line)| TitleEntry {
            index: i + 1,
            title: line.to_string(),
        })
        .collect()
}

/// Read and filter the list file.
///
/// Fails if the file is missing, unreadable or not UTF-8, or if no titles
/// remain after filtering.
pub fn load_titles(path: &Path) -> Result<Vec<TitleEntry>> {
    if !path.exists() {
        bail!("List file not found: {}", path.display());
    }

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read list file {}", path.display()))?;

    let titles = parse_titles(&text);
    if titles.is_empty() {
        bail!("No titles found in list file");
    }

    Ok(titles)
}
