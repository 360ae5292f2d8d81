// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Install logging (tracing, controlled by RUST_LOG)
// 3. Dispatch to the crawl or serve subcommand
// 4. Exit with proper code (0 = pages found, 1 = nothing crawled, 2 = error)
// =============================================================================

mod cli;      // src/cli.rs - command-line parsing
mod config;   // src/config.rs - crawler settings and HTTP client
mod crawl;    // src/crawl/ - the concurrent crawl engine
mod extract;  // src/extract/ - email and link extraction
mod logging;  // src/logging.rs - tracing subscriber setup
mod server;   // src/server/ - POST /crawl over HTTP

#[cfg(test)]
mod test_support;

use anyhow::{anyhow, Result};
use clap::Parser;
use url::Url;

use cli::{Cli, Commands};
use crawl::{CrawlRequest, CrawlResult, Crawler};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init();

    let exit_code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e:#}");
            2
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = at least one page crawled
//   Ok(1) = the crawl produced no results
//   Err   = invalid input or internal error
async fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Crawl {
            url,
            depth,
            json,
            crawler,
        } => {
            validate_start_url(&url)?;
            let crawler = Crawler::new(&crawler.into_config())?;
            handle_crawl(&crawler, url, depth, json).await
        }
        Commands::Serve { port, crawler } => {
            let crawler = Crawler::new(&crawler.into_config())?;
            server::run(crawler, port).await?;
            Ok(0)
        }
    }
}

// Runs one crawl and prints the results
async fn handle_crawl(crawler: &Crawler, url: String, depth: u32, json: bool) -> Result<i32> {
    if !json {
        println!("🔍 Crawling: {}", url);
        println!("📊 Depth: {}", depth);
    }

    let results = crawler.crawl(CrawlRequest::new(url, depth)).await;

    print_results(&results, json)?;

    if results.is_empty() {
        Ok(1)
    } else {
        Ok(0)
    }
}

// Only absolute http/https URLs can be crawled
fn validate_start_url(url: &str) -> Result<()> {
    let parsed = Url::parse(url).map_err(|e| anyhow!("Invalid URL '{}': {}", url, e))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(anyhow!("Unsupported scheme '{}' in {}", other, url)),
    }
}

fn print_results(results: &[CrawlResult], json: bool) -> Result<()> {
    if json {
        let json_output = serde_json::to_string_pretty(&serde_json::json!({ "data": results }))?;
        println!("{}", json_output);
    } else {
        print_listing(results);
    }
    Ok(())
}

// Prints each page followed by its emails, then a summary
fn print_listing(results: &[CrawlResult]) {
    println!();
    for result in results {
        println!("📄 {}", result.site_name);
        if result.emails.is_empty() {
            println!("   (no emails)");
        }
        for email in &result.emails {
            println!("   ✉️  {}", email);
        }
    }

    let total_emails: usize = results.iter().map(|r| r.emails.len()).sum();

    println!();
    println!("📊 Summary:");
    println!("   📄 Pages: {}", results.len());
    println!("   ✉️  Emails: {}", total_emails);
}
