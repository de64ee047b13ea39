//! Command-line front end for QuickLink.
//!
//! Runs the same submission workflow as the web form against a local,
//! in-memory session. Nothing is persisted between runs.
//!
//! # Usage
//!
//! ```bash
//! # Shorten one or more URLs
//! cargo run --bin quicklink-cli -- shorten https://example.com https://rust-lang.org
//!
//! # Prompt for URLs until an empty line
//! cargo run --bin quicklink-cli -- interactive
//!
//! # Show the sample statistics
//! cargo run --bin quicklink-cli -- stats
//! ```
//!
//! # Environment Variables
//!
//! - `SHORT_BASE_URL` (optional): prefix for printed short URLs

use quicklink::application::services::{Session, StatsService};
use quicklink::config::Config;
use quicklink::domain::entities::LinkRecord;
use quicklink::domain::registry::MAX_LINKS;
use quicklink::domain::submission::Outcome;
use quicklink::infrastructure::sample::SampleStatsRepository;
use quicklink::utils::code_generator::{RandomCodeGenerator, generate_session_id};

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use std::sync::Arc;
use std::time::Duration;

/// QuickLink command-line tool.
#[derive(Parser)]
#[command(name = "quicklink-cli")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Simulated processing delay per submission, in milliseconds
    #[arg(long, default_value_t = 0, global = true)]
    latency_ms: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shorten the given URLs in order
    Shorten {
        /// URLs to shorten (at most five are accepted)
        #[arg(required = true)]
        urls: Vec<String>,
    },

    /// Enter URLs one at a time
    Interactive,

    /// Show summary metrics and per-link statistics
    Stats,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let base_url = Config::from_env().short_base_url;
    let latency = Duration::from_millis(cli.latency_ms);

    match cli.command {
        Commands::Shorten { urls } => shorten(&urls, &base_url, latency).await?,
        Commands::Interactive => interactive(&base_url, latency).await?,
        Commands::Stats => stats(&base_url).await?,
    }

    Ok(())
}

fn local_session(latency: Duration) -> Session {
    Session::new(generate_session_id(), Arc::new(RandomCodeGenerator), latency)
}

/// Submits each URL and prints its outcome.
async fn shorten(urls: &[String], base_url: &str, latency: Duration) -> Result<()> {
    let session = local_session(latency);

    for url in urls {
        let outcome = session.submit(url).await?;
        print_outcome(url, &outcome, base_url);
    }

    println!();
    print_links(&session.links().await, base_url);

    Ok(())
}

/// Prompt loop mirroring the landing page form.
///
/// An empty line asks whether to stop; declining returns to the prompt so
/// the empty-input rejection can still be seen.
async fn interactive(base_url: &str, latency: Duration) -> Result<()> {
    println!("{}", "QuickLink".bright_blue().bold());
    println!(
        "  Up to {} links. Submit an empty line to finish.",
        MAX_LINKS.to_string().bright_white().bold()
    );
    println!();

    let session = local_session(latency);

    loop {
        let input: String = Input::new()
            .with_prompt("URL")
            .allow_empty(true)
            .interact_text()?;

        if input.trim().is_empty() {
            let done = Confirm::new()
                .with_prompt("Finish?")
                .default(true)
                .interact()?;
            if done {
                break;
            }
        }

        if !latency.is_zero() {
            println!("{}", "  Shortening...".bright_black());
        }

        let outcome = session.submit(&input).await?;
        print_outcome(input.trim(), &outcome, base_url);
    }

    println!();
    print_links(&session.links().await, base_url);

    Ok(())
}

/// Prints the summary cards and the per-link table.
async fn stats(base_url: &str) -> Result<()> {
    let service = StatsService::new(Arc::new(SampleStatsRepository::new()));
    let report = service
        .get_report()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load statistics: {}", e))?;

    println!("{}", "Statistics".bright_blue().bold());
    println!();
    println!(
        "  Total URLs:     {}",
        report.summary.total_urls.to_string().bright_green().bold()
    );
    println!(
        "  Total clicks:   {}",
        report.summary.total_clicks.to_string().bright_green().bold()
    );
    println!(
        "  Average clicks: {}",
        report.summary.average_clicks.to_string().bright_green().bold()
    );
    println!(
        "  Active links:   {}",
        report.summary.active_links.to_string().bright_green().bold()
    );
    println!();

    print_links(&report.items, base_url);

    Ok(())
}

fn print_outcome(input: &str, outcome: &Outcome, base_url: &str) {
    match outcome {
        Outcome::Accepted(record) => println!(
            "  {} {} {}",
            "✔".green().bold(),
            input.bright_black(),
            record.short_url(base_url).green()
        ),
        Outcome::Rejected(reason) => println!(
            "  {} {} {}",
            "✘".red().bold(),
            input.bright_black(),
            reason.to_string().red()
        ),
    }
}

fn print_links(records: &[LinkRecord], base_url: &str) {
    if records.is_empty() {
        println!("{}", "  No links".yellow());
        return;
    }

    println!(
        "  {:<4} {:<32} {:<8} {}",
        "ID".bright_white().bold(),
        "Short URL".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "Original URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for record in records {
        println!(
            "  {:<4} {:<32} {:<8} {}",
            record.id.to_string().bright_black(),
            record.short_url(base_url).cyan(),
            record.clicks,
            record.original_url
        );
    }

    println!();
    println!(
        "  Total: {}",
        records.len().to_string().bright_white().bold()
    );
}
