// src/github/request.rs
// =============================================================================
// Builds the GitHub API URL for the configured import mode.
//
// URL templates:
//   list:   {api_base}/repos/{owner}/{repo}/issues?state={state}
//   label:  {api_base}/issues/list/{owner}/{repo}/label/{label}
//   search: {api_base}/issues/search/{owner}/{repo}/{state}/{keyword}
//
// Every value we insert becomes exactly one path segment. The url crate
// percent-encodes it, so an owner, repo or label containing '/', '?', '#',
// '%' or spaces can't change the shape of the request. A value of "." or
// ".." can't be encoded that way and is a configuration error.
//
// Rust concepts:
// - url::Url: parsed URLs we can modify safely instead of gluing strings
// - match on an enum: the compiler checks every mode has a template
// =============================================================================

use crate::config::{Config, Mode};
use crate::error::ExportError;
use url::Url;

/// Builds the request URL for `config`
///
/// Fails with a configuration error if the API base isn't a usable URL or the
/// mode needs a label/keyword that wasn't given.
pub fn build_request_url(config: &Config) -> Result<Url, ExportError> {
    let mut url = Url::parse(&config.api_base).map_err(|e| {
        ExportError::Configuration(format!("invalid API base URL '{}': {}", config.api_base, e))
    })?;

    // The base might already carry a query or fragment; we own both
    url.set_query(None);
    url.set_fragment(None);

    // Pick the path segments for this mode
    let owner = path_segment("owner", &config.owner)?;
    let repo = path_segment("repository", &config.repo)?;
    let state = config.state_filter.as_str();

    let segments: Vec<&str> = match config.mode {
        Mode::List => vec!["repos", owner, repo, "issues"],
        Mode::Label => {
            let label = path_segment("label", config.required_mode_param()?)?;
            vec!["issues", "list", owner, repo, "label", label]
        }
        Mode::Search => {
            let keyword = path_segment("keyword", config.required_mode_param()?)?;
            vec!["issues", "search", owner, repo, state, keyword]
        }
    };

    {
        // path_segments_mut fails for URLs like "mailto:x" that have no path
        let mut path = url.path_segments_mut().map_err(|_| {
            ExportError::Configuration(format!(
                "API base URL '{}' cannot carry a path",
                config.api_base
            ))
        })?;
        // Drop the empty segment a trailing slash leaves behind
        path.pop_if_empty();
        path.extend(segments);
    }

    // Only list mode filters through the query string
    if config.mode == Mode::List {
        url.query_pairs_mut().append_pair("state", state);
    }

    Ok(url)
}

// Checks a value can stand as a single path segment
//
// The url crate drops "." and ".." segments instead of encoding them (and
// would encode a "%2E" we wrote ourselves as "%252E"), so those values can't
// be sent at all.
fn path_segment<'a>(what: &str, value: &'a str) -> Result<&'a str, ExportError> {
    if matches!(value, "." | "..") {
        return Err(ExportError::Configuration(format!(
            "{} '{}' can't be used as a URL path segment",
            what, value
        )));
    }
    Ok(value)
}
