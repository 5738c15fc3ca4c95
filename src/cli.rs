// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate,
// plus the tiny command language used by `repo-feed browse`.
//
// Rust concepts:
// - Derive macros: clap generates the argument parser from the structs
// - Enums: one variant per subcommand / per browse command
// - Option<T>: flags the user may or may not pass
// =============================================================================

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "repo-feed",
    version = "0.1.0",
    about = "List a GitHub account's repositories, most-starred first, two per page",
    long_about = "repo-feed fetches an account's public repositories once, hides forks, \
                  sorts the rest by stars and shows them two at a time. Use `show` for a \
                  single page or `browse` to flip through pages interactively."
)]
pub struct Cli {
    /// GitHub account to list (overrides REPO_FEED_ACCOUNT)
    #[arg(long, global = true)]
    pub user: Option<String>,

    /// Only keep the N most-starred repositories (overrides REPO_FEED_LIMIT)
    #[arg(long, global = true)]
    pub limit: Option<usize>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Print one page of repositories and exit
    ///
    /// Example: repo-feed show --page 2
    Show {
        /// Page to show, starting at 1 (pages past the end show the last page)
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Output the page as JSON instead of cards
        #[arg(long)]
        json: bool,
    },

    /// Page through repositories interactively
    ///
    /// Commands: n/next, p/prev, a page number, q/quit
    Browse,
}

// One line of input in browse mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseCommand {
    Next,
    Previous,
    /// Zero-based page index
    Jump(usize),
    Help,
    Quit,
}

pub const BROWSE_HELP: &str =
    "Commands: [n]ext (or Enter), [p]rev, <page number>, [h]elp, [q]uit";

// Parses a browse-mode line; None means "not a command"
//
// Page numbers are typed 1-based and returned 0-based.
pub fn parse_browse_command(line: &str) -> Option<BrowseCommand> {
    let line = line.trim().to_lowercase();

    match line.as_str() {
        "" | "n" | "next" => Some(BrowseCommand::Next),
        "p" | "prev" | "previous" => Some(BrowseCommand::Previous),
        "h" | "help" | "?" => Some(BrowseCommand::Help),
        "q" | "quit" | "exit" => Some(BrowseCommand::Quit),
        other => match other.parse::<usize>() {
            Ok(page) if page >= 1 => Some(BrowseCommand::Jump(page - 1)),
            _ => None,
        },
    }
}
