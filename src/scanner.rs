//! Recursive candidate discovery under the source root.

use anyhow::{bail, Result};
use log::{debug, warn};
use std::path::Path;
use walkdir::WalkDir;

use crate::models::Candidate;
use crate::normalize::normalize;

/// Strip a leading dot and surrounding whitespace from a user-supplied extension.
pub fn clean_extension(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_string()
}

/// File name without the `.ext` suffix, or None if the name doesn't end in it.
/// The comparison is case-sensitive. A bare dotfile like `.crt` has no
/// extension to strip, so its whole name is the stem.
pub fn stem_for_extension<'a>(file_name: &'a str, ext: &str) -> Option<&'a str> {
    let stem = file_name
        .strip_suffix(ext)
        .and_then(|rest| rest.strip_suffix('.'))?;
    if stem.is_empty() {
        Some(file_name)
    } else {
        Some(stem)
    }
}

/// Enumerate every regular file under `root` whose name ends in `.ext`.
///
/// Within each directory its files come before its subdirectories; otherwise
/// the filesystem's listing order is kept. The matcher picks the first hit,
/// so any other reordering here would change which file a title gets.
pub fn scan_candidates(root: &Path, ext: &str) -> Result<Vec<Candidate>> {
    let mut candidates = Vec::new();

    // Stable sort: only moves directories behind files
    let walker = WalkDir::new(root)
        .sort_by(|a, b| a.file_type().is_dir().cmp(&b.file_type().is_dir()));

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!("skipping unreadable entry under {}: {}", root.display(), e);
                continue;
            }
        };

        let file_name = entry.file_name().to_string_lossy();
        let Some(stem) = stem_for_extension(&file_name, ext) else {
            continue;
        };

        // Follows symlinks: a link to a regular file counts, a link to a directory doesn't
        if !entry.path().is_file() {
            continue;
        }

        let stem_norm = normalize(stem);
        debug!("candidate {:?} -> {:?}", entry.path(), stem_norm);
        candidates.push(Candidate::new(stem_norm, entry.path()));
    }

    if candidates.is_empty() {
        bail!("No .{} files found under: {}", ext, root.display());
    }

    Ok(candidates)
}
