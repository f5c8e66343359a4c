//! Progress bar and report-line utilities.
//!
//! Report lines (COPY/MISS) always go to stdout. The bar and spinner draw on
//! stderr and are hidden in log-only mode, where periodic progress lines are
//! written instead for tail-friendly output.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

/// Emit a log-only progress line every this many titles
pub const LOG_INTERVAL: u64 = 25;

/// Format duration in human-readable format
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 60.0 {
        format!("{:.1}s", secs)
    } else {
        format!("{:.1}m", secs / 60.0)
    }
}

pub struct Reporter {
    log_only: bool,
}

impl Reporter {
    pub fn new(log_only: bool) -> Self {
        Self { log_only }
    }

    /// Spinner for the directory scan, whose size is unknown up front.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        if self.log_only {
            pb.set_draw_target(ProgressDrawTarget::hidden());
        } else {
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("{msg} {spinner} [{elapsed_precise}]")
                    .unwrap(),
            );
            pb.enable_steady_tick(Duration::from_millis(100));
        }
        pb.set_message(msg.to_string());
        pb
    }

    /// Bar over the title list.
    pub fn bar(&self, len: u64, msg: &str) -> ProgressBar {
        let pb = ProgressBar::new(len);
        if self.log_only {
            pb.set_draw_target(ProgressDrawTarget::hidden());
        } else {
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{msg} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len}")
                    .unwrap()
                    .progress_chars("=> "),
            );
        }
        pb.set_message(msg.to_string());
        pb
    }

    /// Print a report line to stdout without tearing the bar.
    pub fn line(&self, pb: &ProgressBar, text: &str) {
        pb.suspend(|| println!("{}", text));
    }

    /// Periodic `[phase] n/total (pct%)` line on stderr, log-only mode only.
    pub fn log_progress(&self, phase: &str, current: u64, total: u64) {
        if self.log_only && total > 0 && (current % LOG_INTERVAL == 0 || current == total) {
            let pct = 100.0 * current as f64 / total as f64;
            eprintln!("[{}] {}/{} ({:.1}%)", phase, current, total, pct);
        }
    }
}
