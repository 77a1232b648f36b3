//! ChatmarkService - the main entry point for chat message formatting.

use chatmark_core::{
    assemble_lists, blockquotes, code_spans, contains_list_syntax, emphasis, headings,
    horizontal_rules, links, paragraphs, tables, CodeBlocks, FormatOptions,
};

use crate::tags::extract_tags;

/// A fully processed chat message: renderable markup plus the trailer tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMessage {
    /// HTML markup for the message body.
    pub html: String,

    /// Tags from the message trailer, in order of appearance.
    pub tags: Vec<String>,
}

/// The main service for converting chat dialect text to HTML
pub struct ChatmarkService {
    options: FormatOptions,
}

impl ChatmarkService {
    /// Create a new ChatmarkService with default options
    pub fn new() -> Self {
        Self {
            options: FormatOptions::default(),
        }
    }

    /// Create a ChatmarkService with custom options
    pub fn with_options(options: FormatOptions) -> Self {
        Self { options }
    }

    /// Get the current options
    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut FormatOptions {
        &mut self.options
    }

    /// Process a raw message end to end: extract the trailer tags, then
    /// format the cleaned body.
    pub fn render(&self, raw: &str) -> RenderedMessage {
        let extraction = extract_tags(raw);
        RenderedMessage {
            html: self.format(&extraction.clean_content),
            tags: extraction.tags,
        }
    }

    /// Convert dialect text to HTML markup.
    ///
    /// The stages run in a fixed order; each one relies on what the previous
    /// stages guarantee and must not re-interpret markup they produced.
    /// Fenced code is tokenized first and restored last, so code bodies are
    /// immune to every rewrite in between.
    pub fn format(&self, text: &str) -> String {
        let mut code = CodeBlocks::new();

        let text = code.extract(text);
        let text = code_spans(&text);
        let text = links(&text, &self.options);
        let text = emphasis(&text);
        let text = headings(&text);
        let text = blockquotes(&text);
        let text = horizontal_rules(&text);
        let text = tables(&text);

        // Texts with no list syntax at all take the simple paragraph path;
        // anything structural goes through the line state machine.
        let text = if contains_list_syntax(&text) {
            assemble_lists(&text, &self.options)
        } else {
            paragraphs(&text)
        };

        code.restore(&text)
    }
}

impl Default for ChatmarkService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_prose() {
        let service = ChatmarkService::new();
        assert_eq!(service.format("Hello there"), "<p>Hello there</p>");
    }

    #[test]
    fn test_heading() {
        let service = ChatmarkService::new();
        assert_eq!(service.format("# Welcome"), "<h1>Welcome</h1>");
    }

    #[test]
    fn test_emphasis_in_prose() {
        let service = ChatmarkService::new();
        assert_eq!(
            service.format("**bold** and *italic*"),
            "<p><strong>bold</strong> and <em>italic</em></p>"
        );
    }

    #[test]
    fn test_link_options() {
        let options = FormatOptions {
            link_target: "_self".to_string(),
            ..Default::default()
        };
        let service = ChatmarkService::with_options(options);
        let html = service.format("[here](https://example.com)");
        assert!(html.contains("target=\"_self\""));
    }

    #[test]
    fn test_blockquote_and_rule() {
        let service = ChatmarkService::new();
        let html = service.format("> quoted\n---");
        assert!(html.contains("<blockquote>quoted</blockquote>"));
        assert!(html.contains("<hr/>"));
    }

    #[test]
    fn test_blank_input_is_empty() {
        let service = ChatmarkService::new();
        assert_eq!(service.format(""), "");
        assert_eq!(service.format("\n\n\n"), "");
    }

    #[test]
    fn test_render_runs_extractor_first() {
        let service = ChatmarkService::new();
        let message = service.render("**Done!** <Ok><Cancel>");
        assert_eq!(message.tags, vec!["Ok", "Cancel"]);
        assert_eq!(message.html, "<p><strong>Done!</strong></p>");
    }
}
