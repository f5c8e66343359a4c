use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use toplist_copier::run::{run, RunConfig, DEFAULT_EXT, DEFAULT_LIST, DEFAULT_OUT, DEFAULT_SRC};

#[derive(Parser)]
#[command(name = "toplist-copier")]
#[command(about = "Copy files matching an ordered title list into numbered output files")]
struct Args {
    /// Plain text file with one title per line
    #[arg(long, default_value = DEFAULT_LIST)]
    list: PathBuf,

    /// Source directory to scan recursively
    #[arg(long, default_value = DEFAULT_SRC)]
    src: PathBuf,

    /// Output folder, created if missing
    #[arg(long, default_value = DEFAULT_OUT)]
    out: PathBuf,

    /// File extension to collect (leading dot optional)
    #[arg(long, default_value = DEFAULT_EXT)]
    ext: String,

    /// Report matches without creating or copying anything
    #[arg(long)]
    dry_run: bool,

    /// Write run statistics as JSON to this path
    #[arg(long)]
    stats: Option<PathBuf>,

    /// Hide progress bars and log periodic progress lines instead
    #[arg(long)]
    log_only: bool,

    /// Debug logging (per-title keys, every candidate)
    #[arg(short, long)]
    verbose: bool,
}

impl From<Args> for RunConfig {
    fn from(args: Args) -> Self {
        RunConfig {
            list: args.list,
            src: args.src,
            out: args.out,
            ext: args.ext,
            dry_run: args.dry_run,
            stats_path: args.stats,
            log_only: args.log_only,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    run(&RunConfig::from(args))?;
    Ok(())
}
