// src/config.rs
// =============================================================================
// The settings for one export run.
//
// A Config is built once (from CLI flags / environment variables in cli.rs)
// and passed by reference into export::run. Nothing here is global and
// nothing changes after construction.
//
// Rust concepts:
// - Enums: StateFilter and Mode can only hold the values GitHub understands,
//   so an unknown mode is rejected while parsing arguments
// - Option<String>: the mode parameter only exists for label/search modes
// =============================================================================

use crate::error::ExportError;
use std::fmt;
use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "https://api.github.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// Identifies us to GitHub (the API rejects requests without a User-Agent)
pub const DEFAULT_USER_AGENT: &str = concat!("gitswitch/", env!("CARGO_PKG_VERSION"));

/// Which issues to import: open ones or closed ones
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum StateFilter {
    #[default]
    Open,
    Closed,
}

impl StateFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            StateFilter::Open => "open",
            StateFilter::Closed => "closed",
        }
    }
}

impl fmt::Display for StateFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How issues are selected
///
/// - List: every issue in the given state
/// - Label: issues carrying a label
/// - Search: issues matching a keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Mode {
    #[default]
    List,
    Label,
    Search,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::List => "list",
            Mode::Label => "label",
            Mode::Search => "search",
        }
    }

    /// Whether this mode needs a label or keyword to build its URL
    pub fn needs_param(&self) -> bool {
        !matches!(self, Mode::List)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Repository owner's GitHub username, e.g. "rust-lang"
    pub owner: String,
    /// Repository name, e.g. "rust"
    pub repo: String,
    /// Shown next to "requested by" on every imported story
    pub requester_name: String,
    pub state_filter: StateFilter,
    pub mode: Mode,
    /// Label text (mode=label) or search keyword (mode=search)
    pub mode_param: Option<String>,
    /// Base URL of the GitHub API, without a trailing path for the endpoint
    pub api_base: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Config {
    /// Creates a list-mode config with default API base, timeout and user agent
    pub fn new(
        owner: impl Into<String>,
        repo: impl Into<String>,
        requester_name: impl Into<String>,
    ) -> Self {
        Config {
            owner: owner.into(),
            repo: repo.into(),
            requester_name: requester_name.into(),
            state_filter: StateFilter::default(),
            mode: Mode::default(),
            mode_param: None,
            api_base: DEFAULT_API_BASE.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Checks everything that can be checked before touching the network
    pub fn validate(&self) -> Result<(), ExportError> {
        if self.owner.trim().is_empty() {
            return Err(ExportError::Configuration(
                "repository owner must not be empty".to_string(),
            ));
        }
        if self.repo.trim().is_empty() {
            return Err(ExportError::Configuration(
                "repository name must not be empty".to_string(),
            ));
        }
        if self.mode.needs_param() {
            self.required_mode_param()?;
        }
        if self.timeout.is_zero() {
            return Err(ExportError::Configuration(
                "request timeout must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Returns the label/keyword for modes that need one
    ///
    /// An empty (or all-whitespace) value counts as missing.
    pub fn required_mode_param(&self) -> Result<&str, ExportError> {
        match self.mode_param.as_deref() {
            Some(param) if !param.trim().is_empty() => Ok(param),
            _ => {
                let what = match self.mode {
                    Mode::Label => "a label (--label)",
                    _ => "a keyword (--keyword)",
                };
                Err(ExportError::Configuration(format!(
                    "mode '{}' requires {}",
                    self.mode, what
                )))
            }
        }
    }
}
