//! CLI tool for inspecting the legacy redirect table.
//!
//! Reads the same CSV file the server loads and answers questions about it
//! without starting the site.
//!
//! # Usage
//!
//! ```bash
//! # List all mappings
//! cargo run --bin redirects -- list
//!
//! # Show where an old URL would be redirected
//! cargo run --bin redirects -- lookup https://old.example.com/guides/setup/
//!
//! # Report mappings without a usable redirect target
//! cargo run --bin redirects -- check --file mapping_old_urls_to_new.csv
//! ```
//!
//! # Environment Variables
//!
//! - `REDIRECT_MAPPING_FILE` (optional): default for `--file`

use outline_mirror::application::services::{LegacyUrlResolver, extract_redirect_path};
use outline_mirror::infrastructure::redirects::load_mappings;
use outline_mirror::utils::path_normalizer::normalize_path;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// CLI tool for the legacy redirect table.
#[derive(Parser)]
#[command(name = "redirects")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Mapping file (CSV with old_url,new_url,title,migrated_at columns)
    #[arg(
        short,
        long,
        global = true,
        env = "REDIRECT_MAPPING_FILE",
        default_value = "mapping_old_urls_to_new.csv"
    )]
    file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print all loaded mappings
    List,

    /// Resolve an old URL or path
    Lookup {
        /// Old URL or path, e.g. "/guides/setup" or "https://old.example.com/guides/setup/"
        path: String,
    },

    /// Report mappings whose new URL yields no redirect target
    Check,
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::List => list(&cli.file).map(|()| true),
        Commands::Lookup { path } => lookup(&cli.file, &path).map(|()| true),
        Commands::Check => check(&cli.file),
    };

    match outcome {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

/// Lists every mapping with its extracted target.
fn list(file: &Path) -> Result<()> {
    let loaded = load_mappings(file)
        .with_context(|| format!("Failed to load {}", file.display()))?;

    println!(
        "{} {}",
        "Redirect mappings in".bright_blue().bold(),
        file.display().to_string().cyan()
    );
    println!();

    if loaded.mappings.is_empty() {
        println!("{}", "No mappings found".yellow());
        return Ok(());
    }

    for mapping in &loaded.mappings {
        let target = extract_redirect_path(&mapping.new_url)
            .map(|path| path.green().to_string())
            .unwrap_or_else(|| "(no target)".red().to_string());

        println!("  {} -> {}", mapping.old_url.bright_white(), target);
        if !mapping.title.is_empty() {
            println!("      {}", mapping.title.dimmed());
        }
    }

    println!();
    println!(
        "Total: {} mappings, {} skipped rows",
        loaded.mappings.len().to_string().bright_white().bold(),
        loaded.skipped.to_string().yellow()
    );

    Ok(())
}

/// Shows how the server would resolve an old URL.
fn lookup(file: &Path, path: &str) -> Result<()> {
    let loaded = load_mappings(file)
        .with_context(|| format!("Failed to load {}", file.display()))?;
    let resolver = LegacyUrlResolver::new(loaded.mappings);

    println!("  Input:      {}", path.bright_white());
    println!("  Normalized: {}", normalize_path(path).cyan());

    match resolver.find_mapping(path) {
        Some(mapping) => {
            println!("  Matched:    {}", mapping.old_url.bright_white());
            println!("  New URL:    {}", mapping.new_url);
            match resolver.get_redirect_url(path) {
                Some(target) => println!("  Redirect:   {}", target.green().bold()),
                None => println!("  Redirect:   {}", "none (new URL has no document path)".red()),
            }
        }
        None => println!("  {}", "No match".yellow()),
    }

    Ok(())
}

/// Reports broken mappings. Returns `false` if any were found.
fn check(file: &Path) -> Result<bool> {
    let loaded = load_mappings(file)
        .with_context(|| format!("Failed to load {}", file.display()))?;

    let broken: Vec<_> = loaded
        .mappings
        .iter()
        .filter(|mapping| extract_redirect_path(&mapping.new_url).is_none())
        .collect();

    for mapping in &broken {
        println!(
            "  {} {} -> {}",
            "✗".red(),
            mapping.old_url.bright_white(),
            mapping.new_url
        );
    }

    if loaded.skipped > 0 {
        println!(
            "{}",
            format!("{} malformed rows were skipped", loaded.skipped).yellow()
        );
    }

    if broken.is_empty() {
        println!(
            "{}",
            format!("✓ All {} mappings have a redirect target", loaded.mappings.len())
                .green()
                .bold()
        );
        Ok(true)
    } else {
        println!(
            "{}",
            format!(
                "{} of {} mappings have no redirect target",
                broken.len(),
                loaded.mappings.len()
            )
            .red()
            .bold()
        );
        Ok(false)
    }
}
