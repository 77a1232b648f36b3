//! Inline span rewrites: code spans, links, emphasis.
//!
//! Precondition for every pass here: fenced code has already been replaced by
//! placeholder tokens, so none of these patterns can reach into code bodies.
//! All interiors match non-greedy (or exclude the delimiter), so the shortest
//! valid span wins and one pair of markers never swallows a later pair.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::options::FormatOptions;

static CODE_SPAN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`\n]+)`").unwrap());

static LINK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

static STRIKE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"~~(.+?)~~").unwrap());

// Triple asterisks handled before bold: otherwise the bold pass leaves a
// stray single asterisk on each side and the italic pass pairs them across
// the strong element, producing overlapped tags.
static STRONG_EM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*\*(.+?)\*\*\*").unwrap());

static STRONG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());

static EM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*([^*\n]+)\*").unwrap());

/// Rewrite single-backtick spans as inline code elements.
///
/// The span body is emitted as-is: surrounding text in the dialect is already
/// safe plain text, and only fenced blocks get escaped.
pub fn code_spans(text: &str) -> String {
    CODE_SPAN_RE.replace_all(text, "<code>$1</code>").into_owned()
}

/// Rewrite `[text](url)` as anchors targeting a new browsing context with no
/// referrer/opener trust.
pub fn links(text: &str, options: &FormatOptions) -> String {
    LINK_RE
        .replace_all(text, |caps: &Captures| {
            format!(
                "<a href=\"{}\" target=\"{}\" rel=\"{}\">{}</a>",
                &caps[2], options.link_target, options.link_rel, &caps[1]
            )
        })
        .into_owned()
}

/// Rewrite strikethrough, bold, and italic spans, in that order.
///
/// Bold runs before italic so a double asterisk is never half-consumed by the
/// single-asterisk rule; the italic pass then only sees asterisks the bold
/// pass left behind.
pub fn emphasis(text: &str) -> String {
    let text = STRIKE_RE.replace_all(text, "<del>$1</del>");
    let text = STRONG_EM_RE.replace_all(&text, "<strong><em>$1</em></strong>");
    let text = STRONG_RE.replace_all(&text, "<strong>$1</strong>");
    EM_RE.replace_all(&text, "<em>$1</em>").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_span() {
        assert_eq!(code_spans("use `foo()` here"), "use <code>foo()</code> here");
    }

    #[test]
    fn test_code_span_unbalanced_is_literal() {
        assert_eq!(code_spans("a ` b"), "a ` b");
    }

    #[test]
    fn test_link() {
        let options = FormatOptions::default();
        assert_eq!(
            links("see [docs](https://example.com)", &options),
            "see <a href=\"https://example.com\" target=\"_blank\" \
             rel=\"noopener noreferrer\">docs</a>"
        );
    }

    #[test]
    fn test_link_malformed_is_literal() {
        let options = FormatOptions::default();
        assert_eq!(links("[text without url]", &options), "[text without url]");
        assert_eq!(links("[text](", &options), "[text](");
    }

    #[test]
    fn test_bold_and_italic() {
        assert_eq!(
            emphasis("**bold** and *italic*"),
            "<strong>bold</strong> and <em>italic</em>"
        );
    }

    #[test]
    fn test_strikethrough() {
        assert_eq!(emphasis("~~gone~~"), "<del>gone</del>");
    }

    #[test]
    fn test_triple_asterisk() {
        assert_eq!(emphasis("***x***"), "<strong><em>x</em></strong>");
    }

    #[test]
    fn test_italic_inside_bold() {
        assert_eq!(
            emphasis("**a *b* c**"),
            "<strong>a <em>b</em> c</strong>"
        );
    }

    #[test]
    fn test_shortest_span_wins() {
        // Non-greedy interior: two separate bold spans, not one giant one
        assert_eq!(
            emphasis("**a** plain **b**"),
            "<strong>a</strong> plain <strong>b</strong>"
        );
    }

    #[test]
    fn test_lone_asterisk_is_literal() {
        assert_eq!(emphasis("2 * 3 = 6"), "2 * 3 = 6");
    }
}
