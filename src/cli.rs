// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Every flag can also come from a GITSWITCH_* environment variable, so the
// tool can be configured entirely from a CI job or a cron entry without
// editing any source.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Derive macros: Automatically generate parsing code for our types
// - From trait: the conversion from parsed arguments into a Config
// =============================================================================

use crate::config::{
    Config, Mode, StateFilter, DEFAULT_API_BASE, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

// This struct represents our entire CLI application
//
// There are no subcommands: gitswitch does one thing.
#[derive(Parser, Debug)]
#[command(
    name = "gitswitch",
    version,
    about = "Export GitHub issues as PivotalTracker external stories XML",
    long_about = "gitswitch fetches issues from a GitHub repository and prints them as \
                  PivotalTracker external stories XML, ready to be imported as bugs."
)]
pub struct Cli {
    /// Repository owner's GitHub username (e.g. "rust-lang")
    #[arg(long, env = "GITSWITCH_OWNER")]
    pub owner: String,

    /// Repository to export issues from (e.g. "rust")
    #[arg(long, env = "GITSWITCH_REPO")]
    pub repo: String,

    /// Name shown as "requested by" on every imported story
    #[arg(long, env = "GITSWITCH_REQUESTER")]
    pub requester: String,

    /// Import open or closed issues
    #[arg(long, value_enum, env = "GITSWITCH_STATE", default_value_t = StateFilter::Open)]
    pub state: StateFilter,

    /// How to select issues: all of them, by label, or by keyword
    #[arg(long, value_enum, env = "GITSWITCH_MODE", default_value_t = Mode::List)]
    pub mode: Mode,

    /// Label to filter by (only used with --mode label)
    #[arg(long, env = "GITSWITCH_LABEL")]
    pub label: Option<String>,

    /// Keyword to search for (only used with --mode search)
    #[arg(long, env = "GITSWITCH_KEYWORD")]
    pub keyword: Option<String>,

    /// Base URL of the GitHub API
    #[arg(long, env = "GITSWITCH_API_BASE", default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Give up on the request after this many seconds
    #[arg(long, env = "GITSWITCH_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// User-Agent header sent to GitHub
    #[arg(long, env = "GITSWITCH_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Write the XML to this file instead of standard output
    #[arg(short, long, env = "GITSWITCH_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Log requests and progress to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl From<&Cli> for Config {
    fn from(cli: &Cli) -> Self {
        // Only the parameter matching the selected mode is kept
        let mode_param = match cli.mode {
            Mode::List => None,
            Mode::Label => cli.label.clone(),
            Mode::Search => cli.keyword.clone(),
        };

        let mut config = Config::new(&cli.owner, &cli.repo, &cli.requester);
        config.state_filter = cli.state;
        config.mode = cli.mode;
        config.mode_param = mode_param;
        config.api_base = cli.api_base.clone();
        config.timeout = Duration::from_secs(cli.timeout_secs);
        config.user_agent = cli.user_agent.clone();
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        let mut argv = vec!["gitswitch"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv)
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&["--owner", "o", "--repo", "r", "--requester", "Alice"]).unwrap();
        let config = Config::from(&cli);

        assert_eq!(config.state_filter, StateFilter::Open);
        assert_eq!(config.mode, Mode::List);
        assert_eq!(config.mode_param, None);
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_label_mode_takes_label() {
        let cli = parse(&[
            "--owner", "o", "--repo", "r", "--requester", "Alice",
            "--mode", "label", "--label", "bug", "--keyword", "ignored",
        ])
        .unwrap();
        let config = Config::from(&cli);

        assert_eq!(config.mode, Mode::Label);
        assert_eq!(config.mode_param.as_deref(), Some("bug"));
    }

    #[test]
    fn test_search_mode_takes_keyword() {
        let cli = parse(&[
            "--owner", "o", "--repo", "r", "--requester", "Alice",
            "--mode", "search", "--state", "closed", "--keyword", "crash",
        ])
        .unwrap();
        let config = Config::from(&cli);

        assert_eq!(config.state_filter, StateFilter::Closed);
        assert_eq!(config.mode_param.as_deref(), Some("crash"));
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        let err = parse(&[
            "--owner", "o", "--repo", "r", "--requester", "Alice", "--mode", "everything",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }
}
