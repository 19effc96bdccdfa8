// src/tracker/xml.rs
// =============================================================================
// This module writes stories in PivotalTracker's external story XML format.
//
// Output shape:
//   <?xml version="1.0" encoding="UTF-8"?>
//   <external_stories type="array">
//       <external_story>
//           <external_id>42</external_id>
//           <name>BUG Crash on save</name>
//           <description>Steps... GitHub URL: https://...</description>
//           <requested_by>Alice</requested_by>
//           <created_at type="datetime">2021-01-01T00:00:00Z</created_at>
//           <story_type>bug</story_type>
//           <estimate type="integer">1</estimate>
//       </external_story>
//   </external_stories>
//
// (Indentation is one tab per level.)
//
// Issue titles and bodies are user-written text, so they can contain '<' and
// '&'. All text content goes through escape_text before it's written.
//
// Rust concepts:
// - Cow<str>: html_escape returns the input unchanged (borrowed) when there's
//   nothing to escape, and only allocates when it has to
// - Iterators: filter() to drop characters XML can't represent
// =============================================================================

use super::story::StoryRecord;
use crate::config::Config;
use crate::github::Issue;
use std::borrow::Cow;

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

// Converts issues into a complete external stories XML document
//
// Parameters:
//   issues: parsed GitHub issues, in the order they should appear
//   config: supplies the requester name for every story
//
// Returns: the document as a String; one <external_story> per issue
pub fn to_story_xml(issues: &[Issue], config: &Config) -> String {
    let stories: Vec<StoryRecord> = issues
        .iter()
        .map(|issue| StoryRecord::from_issue(issue, &config.requester_name))
        .collect();

    write_stories(&stories)
}

// Writes already-mapped stories as an XML document
pub fn write_stories(stories: &[StoryRecord]) -> String {
    let mut xml = String::from(XML_DECLARATION);
    xml.push_str("<external_stories type=\"array\">\n");

    for story in stories {
        xml.push_str("\t<external_story>\n");
        push_field(&mut xml, "external_id", None, &story.external_id.to_string());
        push_field(&mut xml, "name", None, &story.name);
        push_field(&mut xml, "description", None, &story.description);
        push_field(&mut xml, "requested_by", None, &story.requested_by);
        push_field(&mut xml, "created_at", Some("datetime"), &story.created_at);
        push_field(&mut xml, "story_type", None, story.story_type);
        push_field(&mut xml, "estimate", Some("integer"), &story.estimate.to_string());
        xml.push_str("\t</external_story>\n");
    }

    xml.push_str("</external_stories>");
    xml
}

// Appends one "\t\t<tag type="...">text</tag>\n" line
fn push_field(xml: &mut String, tag: &str, type_attr: Option<&str>, text: &str) {
    xml.push_str("\t\t<");
    xml.push_str(tag);
    if let Some(type_attr) = type_attr {
        xml.push_str(" type=\"");
        xml.push_str(type_attr);
        xml.push('"');
    }
    xml.push('>');
    xml.push_str(&escape_text(text));
    xml.push_str("</");
    xml.push_str(tag);
    xml.push_str(">\n");
}

// Makes arbitrary text safe to place between XML tags
//
// - '&', '<' and '>' become entity references
// - Characters XML 1.0 doesn't allow at all (most control characters,
//   U+FFFE, U+FFFF) are dropped; there is no way to escape them
pub fn escape_text(text: &str) -> Cow<'_, str> {
    if text.chars().all(is_xml_char) {
        return html_escape::encode_text(text);
    }

    let cleaned: String = text.chars().filter(|&c| is_xml_char(c)).collect();
    Cow::Owned(html_escape::encode_text(&cleaned).into_owned())
}

// XML 1.0 "Char" production (Rust chars are never surrogates)
fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | '\u{20}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}')
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why build the XML with push_str instead of format!?
//    - Every push_str appends to the same growing String
//    - format! would allocate a new String for every line
//
// 2. What does Cow<'_, str> mean in escape_text's signature?
//    - Cow = "clone on write": either a borrowed &str or an owned String
//    - Most titles have nothing to escape, so we hand back the original text
//      without copying it
//    - '_ ties the borrowed case to the lifetime of the input
//
// 3. Why is '\u{20}'..='\u{FFFD}' allowed in a match?
//    - char ranges work in patterns just like integer ranges
//    - ..= is an inclusive range (both ends included)
// -----------------------------------------------------------------------------
