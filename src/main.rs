// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap and read config from the env
// 2. Set up logging (tracing, to stderr so stdout stays clean for --json)
// 3. Dispatch to the appropriate subcommand handler
// 4. Exit with proper code (0 = success, 1 = feed failed to load, 2 = error)
//
// Rust concepts used:
// - async/await: The repository fetch runs on the tokio runtime
// - tokio::select!: Wait on "fetch finished" and "user typed a line" at once
// - Result<T, E>: For error handling
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;     // src/cli.rs - command-line parsing
mod config;  // src/config.rs - environment configuration
mod feed;    // src/feed/ - filtering, sorting and paging
mod github;  // src/github/ - GitHub API client
mod render;  // src/render.rs - cards, pager, JSON view

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cli::{parse_browse_command, BrowseCommand, Cli, Commands, BROWSE_HELP};
use config::{Config, LogFormat};
use feed::{spawn_load, LoadStatus, RepositoryFeed};
use github::{GithubClient, RepositorySource};

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // {:#} prints the whole anyhow context chain on one line
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = feed loaded
//   Ok(1) = feed failed to load (already logged)
//   Err   = unexpected error (bad config, stdin closed with an error, ...)
async fn run() -> Result<i32> {
    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(user) = cli.user {
        config.account = user;
    }
    if cli.limit.is_some() {
        config.limit = cli.limit;
    }

    init_logging(&config);

    let client = GithubClient::new(&config.api_base, &config.account, config.timeout)
        .context("could not set up the GitHub client")?;

    tracing::info!(
        account = %config.account,
        endpoint = %client.endpoint(),
        "repo-feed starting"
    );

    match cli.command {
        Commands::Show { page, json } => handle_show(&client, config.limit, page, json).await,
        Commands::Browse => handle_browse(Arc::new(client), config.limit).await,
    }
}

fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("repo_feed=warn"));

    let registry = tracing_subscriber::registry().with(filter);

    match config.log_format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Pretty => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}

fn exit_code_for(status: LoadStatus) -> i32 {
    match status {
        LoadStatus::Failed => 1,
        LoadStatus::Loading | LoadStatus::Ready => 0,
    }
}

// Handles the 'show' subcommand
// Parameters:
//   source: where to fetch repositories from
//   limit:  optional cap on how many repositories to keep
//   page:   1-based page to print
//   json:   whether to output JSON format
async fn handle_show(
    source: &dyn RepositorySource,
    limit: Option<usize>,
    page: usize,
    json: bool,
) -> Result<i32> {
    let mut feed = RepositoryFeed::new(limit);
    let status = feed.load(source).await;

    feed.jump_to(page.saturating_sub(1));
    print_page(&feed, json)?;

    Ok(exit_code_for(status))
}

// Handles the 'browse' subcommand
//
// The fetch runs on its own task while we read commands from stdin, so the
// pager answers immediately even before the listing arrives.
async fn handle_browse(source: Arc<dyn RepositorySource>, limit: Option<usize>) -> Result<i32> {
    let mut feed = RepositoryFeed::new(limit);
    let mut fetch = spawn_load(source);
    let mut fetch_done = false;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}", BROWSE_HELP);
    println!("{}", render::render_page(&feed));

    loop {
        tokio::select! {
            joined = &mut fetch, if !fetch_done => {
                fetch_done = true;
                let result = joined.context("repository fetch task failed")?;
                feed.complete(result);
                println!("\n{}", render::render_page(&feed));
            }
            line = lines.next_line() => {
                // EOF (Ctrl-D or piped input ran out)
                let Some(line) = line? else { break };

                match parse_browse_command(&line) {
                    Some(BrowseCommand::Quit) => break,
                    Some(BrowseCommand::Help) => {
                        println!("{}", BROWSE_HELP);
                        continue;
                    }
                    Some(BrowseCommand::Next) => feed.next(),
                    Some(BrowseCommand::Previous) => feed.previous(),
                    Some(BrowseCommand::Jump(page)) => feed.jump_to(page),
                    None => {
                        println!("Unknown command '{}'. {}", line.trim(), BROWSE_HELP);
                        continue;
                    }
                }

                println!("\n{}", render::render_page(&feed));
            }
        }
    }

    // Leaving before the listing arrived: drop the result on the floor
    if !fetch_done {
        tracing::debug!("exiting before the fetch resolved, aborting it");
        fetch.abort();
    }

    Ok(exit_code_for(feed.status()))
}

// Prints the current page either as cards or JSON
fn print_page(feed: &RepositoryFeed, json: bool) -> Result<()> {
    if json {
        let json_output = serde_json::to_string_pretty(&render::page_view(feed))?;
        println!("{}", json_output);
    } else {
        println!("{}", render::render_page(feed));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(exit_code_for(LoadStatus::Ready), 0);
        assert_eq!(exit_code_for(LoadStatus::Loading), 0);
        assert_eq!(exit_code_for(LoadStatus::Failed), 1);
    }

    #[tokio::test]
    async fn test_show_against_unreachable_api_reports_failure() {
        // Port 9 on localhost (discard) is closed on any sane test machine;
        // either way the request fails fast and the feed ends up Failed
        let base = url::Url::parse("http://127.0.0.1:9").unwrap();
        let client = GithubClient::new(&base, "octo", std::time::Duration::from_secs(2)).unwrap();

        let code = handle_show(&client, None, 1, true).await.unwrap();
        assert_eq!(code, 1);
    }
}
