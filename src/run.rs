//! One batch run: load titles, scan candidates, match and copy.

use anyhow::Result;
use log::info;
use std::path::PathBuf;
use std::time::Instant;

use crate::copier::{copy_with_times, ensure_output_dir};
use crate::matcher::Matcher;
use crate::models::{MatchOutcome, RunStats};
use crate::progress::{format_duration, Reporter};
use crate::safety::validate_destination;
use crate::scanner::{clean_extension, scan_candidates};
use crate::titles::load_titles;

pub const DEFAULT_LIST: &str = "Lemon64Top100.txt";
pub const DEFAULT_SRC: &str = ".";
pub const DEFAULT_OUT: &str = "!Lemon64 Top 100 Games";
pub const DEFAULT_EXT: &str = "crt";

#[derive(Clone, Debug)]
pub struct RunConfig {
    pub list: PathBuf,
    pub src: PathBuf,
    pub out: PathBuf,
    /// Target extension without the leading dot
    pub ext: String,
    pub dry_run: bool,
    pub stats_path: Option<PathBuf>,
    pub log_only: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            list: PathBuf::from(DEFAULT_LIST),
            src: PathBuf::from(DEFAULT_SRC),
            out: PathBuf::from(DEFAULT_OUT),
            ext: DEFAULT_EXT.to_string(),
            dry_run: false,
            stats_path: None,
            log_only: false,
        }
    }
}

/// Execute a run. Fatal preconditions (missing list, empty list, no
/// candidates) return before anything is written; per-title misses are
/// reported and the run continues.
pub fn run(config: &RunConfig) -> Result<RunStats> {
    let start = Instant::now();
    let reporter = Reporter::new(config.log_only);
    let ext = clean_extension(&config.ext);

    let titles = load_titles(&config.list)?;
    info!("Loaded {} titles from {}", titles.len(), config.list.display());

    let spinner = reporter.spinner(&format!("Scanning {} for .{} files", config.src.display(), ext));
    let scanned = scan_candidates(&config.src, &ext);
    spinner.finish_and_clear();
    let candidates = scanned?;
    info!("Found {} .{} candidates under {}", candidates.len(), ext, config.src.display());

    if !config.dry_run {
        ensure_output_dir(&config.out)?;
    }

    let matcher = Matcher::new(&candidates, &ext);
    let mut stats = RunStats::new(titles.len(), candidates.len(), config.dry_run);
    let total = titles.len() as u64;
    let pb = reporter.bar(total, "Matching");

    for entry in &titles {
        match matcher.resolve(entry) {
            MatchOutcome::Miss { index, title } => {
                reporter.line(&pb, &format!("MISS: {} {}", index, title));
                stats.record_miss(index, &title);
            }
            MatchOutcome::Copy(plan) => {
                if config.dry_run {
                    reporter.line(
                        &pb,
                        &format!("WOULD COPY: {} -> {}", plan.dest_name, plan.source.display()),
                    );
                } else {
                    let dest = config.out.join(&plan.dest_name);
                    validate_destination(&plan.source, &dest)?;
                    copy_with_times(&plan.source, &dest)?;
                    reporter.line(
                        &pb,
                        &format!("COPY: {} -> {}", plan.dest_name, plan.source.display()),
                    );
                }
                stats.record_copy(&plan.source);
            }
        }

        pb.inc(1);
        reporter.log_progress("Matching", pb.position(), total);
    }
    pb.finish_and_clear();

    stats.elapsed_sec = start.elapsed().as_secs_f64();
    info!(
        "Done in {}: {} copied, {} missed, {} sources used by several titles",
        format_duration(start.elapsed()),
        stats.copied,
        stats.missed,
        stats.reused_sources
    );

    if let Some(path) = &config.stats_path {
        stats.write_to_file(path)?;
        info!("Wrote stats to {}", path.display());
    }

    Ok(stats)
}
