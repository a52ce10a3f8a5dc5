// src/main.rs

//! insights CLI
//!
//! Fetches users and posts from the configured endpoints and prints
//! per-user post counts, duplicated post titles, and nearest-neighbor
//! pairs.

use std::sync::Arc;

use clap::{Parser, Subcommand};

use insights::config::Config;
use insights::error::Result;
use insights::pipeline::{run_report, run_validate};
use insights::services::HttpRecordSource;

#[derive(Parser, Debug)]
#[command(
    name = "insights",
    version,
    about = "User and post report generator"
)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, default_value = "insights.toml")]
    config: String,

    /// Override the user endpoint URL
    #[arg(long)]
    users_url: Option<String>,

    /// Override the post endpoint URL
    #[arg(long)]
    posts_url: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print all three reports
    Report,
    /// Fetch and validate both endpoints without analyzing
    Validate,
    /// Print per-user post counts only
    Counts,
    /// Print duplicated post titles only
    Titles,
    /// Print nearest-neighbor pairs only
    Neighbors,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn print_counts(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}

fn print_titles(repeated: &[String]) {
    if repeated.is_empty() {
        println!("All post titles are unique");
    } else {
        for title in repeated {
            println!("{title}");
        }
    }
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::load_or_default(&cli.config);
    if let Some(url) = cli.users_url {
        config.api.users_url = url;
    }
    if let Some(url) = cli.posts_url {
        config.api.posts_url = url;
    }
    config.validate()?;

    let source = HttpRecordSource::new(Arc::new(config))?;

    match cli.command {
        Command::Report => {
            let report = run_report(&source).await?;
            print_counts(&report.counts);
            println!();
            print_titles(&report.repeated);
            println!();
            print_counts(&report.neighbors);
        }
        Command::Validate => {
            let (users, posts) = run_validate(&source).await?;
            log::info!("Validated {users} user and {posts} post records");
        }
        Command::Counts => {
            let report = run_report(&source).await?;
            print_counts(&report.counts);
        }
        Command::Titles => {
            let report = run_report(&source).await?;
            print_titles(&report.repeated);
        }
        Command::Neighbors => {
            let report = run_report(&source).await?;
            print_counts(&report.neighbors);
        }
    }

    Ok(())
}
