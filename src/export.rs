// src/export.rs
// =============================================================================
// The export pipeline: configure -> build URL -> fetch -> parse -> XML.
//
// run() either returns the complete XML document or an error. It never
// returns half a document: the XML is only built after the whole response
// has been fetched and parsed.
// =============================================================================

use crate::config::Config;
use crate::error::ExportError;
use crate::github;
use crate::tracker;
use tracing::{debug, info};

// Runs one export
//
// Parameters:
//   config: the settings for this run (validated here before any request)
//
// Returns: the external stories XML document
pub async fn run(config: &Config) -> Result<String, ExportError> {
    config.validate()?;

    let url = github::build_request_url(config)?;
    let client = github::build_client(config)?;
    info!(mode = %config.mode, %url, "fetching issues");

    let body = github::fetch_raw(&client, &url).await?;
    let issues = github::parse_issues(&body)?;
    debug!(count = issues.len(), "parsed issues");

    let xml = tracker::to_story_xml(&issues, config);
    info!(stories = issues.len(), "built external stories document");

    Ok(xml)
}
