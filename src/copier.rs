//! Output directory creation and metadata-preserving copies.

use anyhow::{bail, Context, Result};
use std::fs::{self, File, FileTimes};
use std::path::Path;

pub fn ensure_output_dir(path: &Path) -> Result<()> {
    if path.exists() && !path.is_dir() {
        bail!("Output path exists and is not a directory: {}", path.display());
    }
    fs::create_dir_all(path)
        .with_context(|| format!("Failed to create output directory {}", path.display()))
}

/// Copy bytes and permissions, then carry over access/modification times.
/// An existing `dest` is overwritten.
pub fn copy_with_times(source: &Path, dest: &Path) -> Result<()> {
    fs::copy(source, dest).with_context(|| {
        format!("Failed to copy {} -> {}", source.display(), dest.display())
    })?;

    let meta = fs::metadata(source)
        .with_context(|| format!("Failed to read metadata of {}", source.display()))?;

    let mut times = FileTimes::new();
    if let Ok(accessed) = meta.accessed() {
        times = times.set_accessed(accessed);
    }
    if let Ok(modified) = meta.modified() {
        times = times.set_modified(modified);
    }

    // Read-only handle: the copy inherits the source's mode, which may lack write permission
    File::open(dest)
        .and_then(|f| f.set_times(times))
        .with_context(|| format!("Failed to set timestamps on {}", dest.display()))
}
