use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use env_logger::Env;
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use std::path::Path;
use std::sync::Arc;

use lexitag::cli::Cli;
use lexitag::models::RunSummary;
use lexitag::scanner::{discover, process};
use lexitag::tagging::{Lexicon, Tagger};
use lexitag::utils::file::{compile_exclude_patterns, write_json_pretty};

fn main() -> std::io::Result<()> {
    if let Err(err) = run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let start_time = Utc::now();

    let exclude_patterns = compile_exclude_patterns(&cli.exclude);
    let discovery = discover(&cli.dir_path, cli.max_depth, &exclude_patterns)
        .with_context(|| format!("Failed to list {}", cli.dir_path))?;
    info!(
        "Found {} shards in {} directories ({} items excluded)",
        discovery.shards.len(),
        discovery.dirs_count,
        discovery.excluded_count
    );

    let tagger = Tagger::new(load_lexicon(cli.lexicon.as_deref())?);

    let progress_bar = create_progress_bar(discovery.shards.len())?;
    let result = process(
        &cli.dir_path,
        &discovery.shards,
        &tagger,
        cli.write,
        Arc::clone(&progress_bar),
    )?;
    progress_bar.finish_and_clear();

    let summary = RunSummary::from_shards(result.shards, start_time, Utc::now());
    print!("{}", summary.render_text(cli.top, cli.show_limit));

    if !summary.errors.is_empty() {
        warn!("{} shards could not be processed", summary.errors.len());
    }
    if cli.write {
        info!("Wrote {} shards", summary.files_written);
    }

    if let Some(path) = &cli.summary_json {
        write_json_pretty(Path::new(path), &summary)?;
        info!("Summary written to {}", path);
    }
    Ok(())
}

fn load_lexicon(path: Option<&str>) -> Result<Lexicon> {
    match path {
        Some(path) => Lexicon::from_override_file(Path::new(path)),
        None => Ok(Lexicon::german()),
    }
}

fn create_progress_bar(total_shards: usize) -> Result<Arc<ProgressBar>> {
    let progress_bar = ProgressBar::new(total_shards as u64);
    progress_bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} shards tagged ({eta})")?
            .progress_chars("#>-"),
    );
    Ok(Arc::new(progress_bar))
}
