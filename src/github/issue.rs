// src/github/issue.rs
// =============================================================================
// The issue fields we read from the GitHub API response.
//
// GitHub returns a lot more per issue (labels, assignees, user, ...); serde
// ignores everything we don't name here. Text fields that are missing or
// null (issues without a description have "body": null) become "" so one
// sparse issue never aborts the whole export.
// =============================================================================

use crate::error::ExportError;
use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Issue {
    pub number: u64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub body: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub html_url: String,
    /// ISO 8601 timestamp, kept exactly as GitHub sent it
    #[serde(default, deserialize_with = "null_as_empty")]
    pub created_at: String,
}

// `#[serde(default)]` only covers a missing key; this covers an explicit null
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

// Parses a response body into issues
//
// Parameters:
//   bytes: raw response body
//
// Returns: the issues in response order, or a ParseError if the body isn't
//          JSON, isn't an array, or holds an element without a numeric "number"
pub fn parse_issues(bytes: &[u8]) -> Result<Vec<Issue>, ExportError> {
    let value: serde_json::Value = serde_json::from_slice(bytes)
        .map_err(|e| ExportError::Parse(format!("response is not valid JSON: {}", e)))?;

    let items = match value {
        serde_json::Value::Array(items) => items,
        other => {
            return Err(ExportError::Parse(format!(
                "expected a JSON array of issues, got {}",
                json_kind(&other)
            )))
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item)
                .map_err(|e| ExportError::Parse(format!("issue at index {}: {}", index, e)))
        })
        .collect()
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
