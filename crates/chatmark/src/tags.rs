//! Trailer tag extraction.
//!
//! A chat backend appends zero or more `<Name>` markers to the end of a
//! message to drive quick-response buttons. This module splits that trailer
//! run off the display text.

use once_cell::sync::Lazy;
use regex::Regex;

// The maximal trailing run of markers, trailing whitespace ignored. Leftmost
// match with the end anchor makes the run maximal.
static TRAILER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?:\s*<[^<>]+>)+\s*$").unwrap());

static MARKER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<([^<>]+)>").unwrap());

/// A cleaned message body paired with the tags found in its trailer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Extraction {
    /// Message text with the trailer run removed and the result trimmed.
    /// Never contains the extracted trailer substring.
    pub clean_content: String,

    /// Tag names in left-to-right trailer order, trimmed. Duplicates are
    /// preserved. Empty when the message carries no trailer.
    pub tags: Vec<String>,
}

/// Split the trailing `<Tag>` marker run off a raw message.
///
/// Always returns a result; a message without a trailer comes back trimmed
/// with an empty tag list. Re-running on its own `clean_content` is a no-op.
pub fn extract_tags(raw: &str) -> Extraction {
    match TRAILER_RE.find(raw) {
        Some(run) => {
            let tags = MARKER_RE
                .captures_iter(run.as_str())
                .map(|caps| caps[1].trim().to_string())
                .filter(|tag| !tag.is_empty())
                .collect();
            Extraction {
                clean_content: raw[..run.start()].trim().to_string(),
                tags,
            }
        }
        None => Extraction {
            clean_content: raw.trim().to_string(),
            tags: Vec::new(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_trailer() {
        let result = extract_tags("  just a message  ");
        assert_eq!(result.clean_content, "just a message");
        assert!(result.tags.is_empty());
    }

    #[test]
    fn test_trailer_run_order_preserved() {
        let result = extract_tags("Pick one <Wet><Dry><Senior>");
        assert_eq!(result.clean_content, "Pick one");
        assert_eq!(result.tags, vec!["Wet", "Dry", "Senior"]);
    }

    #[test]
    fn test_trailing_whitespace_ignored() {
        let result = extract_tags("Hello <Yes> <No>  \n");
        assert_eq!(result.clean_content, "Hello");
        assert_eq!(result.tags, vec!["Yes", "No"]);
    }

    #[test]
    fn test_marker_names_trimmed() {
        let result = extract_tags("Go < Fast >< Slow >");
        assert_eq!(result.tags, vec!["Fast", "Slow"]);
    }

    #[test]
    fn test_duplicates_preserved() {
        let result = extract_tags("Again <A><A>");
        assert_eq!(result.tags, vec!["A", "A"]);
    }

    #[test]
    fn test_markers_mid_text_kept() {
        let result = extract_tags("compare <a> with this text");
        assert_eq!(result.clean_content, "compare <a> with this text");
        assert!(result.tags.is_empty());
    }

    #[test]
    fn test_only_tags() {
        let result = extract_tags("<One><Two>");
        assert_eq!(result.clean_content, "");
        assert_eq!(result.tags, vec!["One", "Two"]);
    }

    #[test]
    fn test_idempotent_on_clean_content() {
        let first = extract_tags("Pick one <Wet><Dry>");
        let second = extract_tags(&first.clean_content);
        assert_eq!(second.clean_content, first.clean_content);
        assert!(second.tags.is_empty());
    }
}
