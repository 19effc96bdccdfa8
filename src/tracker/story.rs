// src/tracker/story.rs
// =============================================================================
// A PivotalTracker "external story": one importable work item.
//
// Every GitHub issue becomes exactly one story:
//   external_id  = issue number
//   name         = "BUG " + title
//   description  = body + " GitHub URL: " + html_url
//   requested_by = the configured requester name
//   created_at   = the issue's timestamp, unchanged
//   story_type   = "bug"
//   estimate     = 1
// =============================================================================

use crate::github::Issue;

pub const STORY_TYPE: &str = "bug";
pub const ESTIMATE: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryRecord {
    pub external_id: u64,
    pub name: String,
    pub description: String,
    pub requested_by: String,
    pub created_at: String,
    pub story_type: &'static str,
    pub estimate: u32,
}

impl StoryRecord {
    pub fn from_issue(issue: &Issue, requested_by: &str) -> Self {
        StoryRecord {
            external_id: issue.number,
            name: format!("BUG {}", issue.title),
            description: format!("{} GitHub URL: {}", issue.body, issue.html_url),
            requested_by: requested_by.to_string(),
            created_at: issue.created_at.clone(),
            story_type: STORY_TYPE,
            estimate: ESTIMATE,
        }
    }
}
