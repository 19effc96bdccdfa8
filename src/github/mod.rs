// src/github/mod.rs
// =============================================================================
// This module handles everything on the GitHub side of the export.
//
// Currently implements:
// - Building the API URL for the list / label / search modes
// - Fetching the response with a single HTTP GET
// - Parsing the JSON response into Issue values
//
// Rust concepts:
// - Modules: Organizing related functionality
// - Public API: What other parts of the app can use
// =============================================================================

mod fetch;
mod issue;
mod request;

// Re-export the pieces export.rs strings together
pub use fetch::{build_client, fetch_raw};
pub use issue::{parse_issues, Issue};
pub use request::build_request_url;
