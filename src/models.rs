//! Core data models for the copier.
//!
//! This module contains the records passed between the loader, scanner,
//! matcher and copier, plus the run statistics written by `--stats`.

use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

// ============================================================================
// Inputs
// ============================================================================

/// One wanted title from the list file.
/// `index` is 1-based and counts only lines that survived filtering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TitleEntry {
    pub index: usize,
    pub title: String,
}

/// A discovered file eligible for matching.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    /// Normalized file name without the target extension
    pub stem_norm: String,
    pub path: PathBuf,
}

impl Candidate {
    pub fn new(stem_norm: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            stem_norm: stem_norm.into(),
            path: path.into(),
        }
    }
}

// ============================================================================
// Match Results
// ============================================================================

/// A resolved title: where to copy from and what to call the copy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CopyPlan {
    pub index: usize,
    pub title: String,
    /// File name inside the output directory, e.g. "1. Elite (1985).crt"
    pub dest_name: String,
    pub source: PathBuf,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatchOutcome {
    Copy(CopyPlan),
    Miss { index: usize, title: String },
}

// ============================================================================
// Run Statistics
// ============================================================================

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct MissRecord {
    pub index: usize,
    pub title: String,
}

/// Statistics for a single run, written as JSON with `--stats`.
#[derive(Debug, Default, Serialize)]
pub struct RunStats {
    pub titles: usize,
    pub candidates: usize,
    pub copied: usize,
    pub missed: usize,
    /// Sources chosen by more than one title
    pub reused_sources: usize,
    pub dry_run: bool,
    pub misses: Vec<MissRecord>,
    pub elapsed_sec: f64,

    #[serde(skip)]
    source_uses: HashMap<PathBuf, usize>,
}

impl RunStats {
    pub fn new(titles: usize, candidates: usize, dry_run: bool) -> Self {
        Self {
            titles,
            candidates,
            dry_run,
            ..Self::default()
        }
    }

    /// Record a successful match against `source`.
    pub fn record_copy(&mut self, source: &Path) {
        self.copied += 1;
        let uses = self.source_uses.entry(source.to_path_buf()).or_insert(0);
        *uses += 1;
        if *uses == 2 {
            self.reused_sources += 1;
        }
    }

    pub fn record_miss(&mut self, index: usize, title: &str) {
        self.missed += 1;
        self.misses.push(MissRecord {
            index,
            title: title.to_string(),
        });
    }

    /// Write stats to a JSON file
    pub fn write_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
