//! Preview how a title list resolves against a source tree, without copying.
//!
//! Shows every candidate each title's key hits, marks the one a real run
//! would pick, and lists sources that several titles would share.
//!
//! Usage: match-preview --list <list.txt> --src <dir> [--ext crt] [--all]

use anyhow::Result;
use clap::Parser;
use std::collections::HashMap;
use std::path::PathBuf;

use toplist_copier::matcher::Matcher;
use toplist_copier::normalize::normalize;
use toplist_copier::run::{DEFAULT_EXT, DEFAULT_LIST, DEFAULT_SRC};
use toplist_copier::scanner::{clean_extension, scan_candidates};
use toplist_copier::titles::load_titles;

#[derive(Parser)]
#[command(name = "match-preview")]
#[command(about = "Show which file each listed title would pick")]
struct Args {
    #[arg(long, default_value = DEFAULT_LIST)]
    list: PathBuf,

    #[arg(long, default_value = DEFAULT_SRC)]
    src: PathBuf,

    #[arg(long, default_value = DEFAULT_EXT)]
    ext: String,

    /// Print every title, not just misses and ambiguous ones
    #[arg(long)]
    all: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let ext = clean_extension(&args.ext);
    let titles = load_titles(&args.list)?;
    let candidates = scan_candidates(&args.src, &ext)?;
    let matcher = Matcher::new(&candidates, &ext);

    println!("Titles: {}  Candidates: {}", titles.len(), candidates.len());
    println!("{:-<60}", "");

    let mut misses = 0usize;
    let mut ambiguous = 0usize;
    let mut claims: HashMap<PathBuf, Vec<usize>> = HashMap::new();

    for entry in &titles {
        let key = normalize(&entry.title);
        let hits = matcher.hits(&key);

        if let Some(first) = hits.first() {
            claims.entry(first.path.clone()).or_default().push(entry.index);
        }
        if hits.is_empty() {
            misses += 1;
        } else if hits.len() > 1 {
            ambiguous += 1;
        }

        if !args.all && hits.len() == 1 {
            continue;
        }

        let tag = match hits.len() {
            0 => "MISS",
            1 => "OK",
            _ => "AMBIGUOUS",
        };
        println!("{:>4}. [{}] {}  (key: {:?})", entry.index, tag, entry.title, key);
        for (i, hit) in hits.iter().enumerate() {
            let marker = if i == 0 { '*' } else { ' ' };
            println!("        {} {}  [{}]", marker, hit.path.display(), hit.stem_norm);
        }
    }

    let mut shared: Vec<(PathBuf, Vec<usize>)> =
        claims.into_iter().filter(|(_, idx)| idx.len() > 1).collect();
    shared.sort_by(|a, b| a.1[0].cmp(&b.1[0]));

    if !shared.is_empty() {
        println!("{:-<60}", "");
        println!("Sources picked by more than one title:");
        for (path, indices) in &shared {
            let list: Vec<String> = indices.iter().map(|i| i.to_string()).collect();
            println!("  {}  <- titles {}", path.display(), list.join(", "));
        }
    }

    println!("{:=<60}", "");
    println!("  Matched:   {}", titles.len() - misses);
    println!("  Missed:    {}", misses);
    println!("  Ambiguous: {}", ambiguous);
    println!("  Shared:    {}", shared.len());
    println!("{:=<60}", "");

    Ok(())
}
