//! Safety check that keeps a run from clobbering its own inputs.
//!
//! The default layout puts the output directory inside the scanned source
//! tree, so earlier copies show up as candidates on the next run.

use anyhow::{bail, Result};
use std::path::{Path, PathBuf};

fn canonical_or_self(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

/// Validates that copying `source` to `dest` won't overwrite the source.
///
/// Only an existing `dest` can alias `source`; a missing one is always safe.
pub fn validate_destination(source: &Path, dest: &Path) -> Result<()> {
    if dest.exists() && canonical_or_self(dest) == canonical_or_self(source) {
        bail!(
            "Safety check failed: destination '{}' is the source file itself",
            dest.display()
        );
    }
    Ok(())
}
