// src/tracker/mod.rs
// =============================================================================
// This module handles the PivotalTracker side of the export.
//
// Submodules:
// - story: maps a GitHub issue to an external story record
// - xml: writes story records as an external stories XML document
// =============================================================================

mod story;
mod xml;

pub use xml::to_story_xml;
