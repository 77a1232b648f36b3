//! Fenced code block extraction and restoration.
//!
//! Fenced regions are pulled out of the working text before any other stage
//! runs and substituted back after the last one, so code contents are never
//! touched by the inline or block rewrites in between. Extraction and
//! restoration share a keyed side table scoped to one formatting call.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::escape::escape_html;

/// Sentinel delimiting placeholder tokens. A private-use codepoint, so no
/// rewrite pattern and no realistic chat input can collide with it.
const TOKEN_SENTINEL: char = '\u{e000}';

static FENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```(?:([A-Za-z0-9_+-]+)\n)?(.*?)```").unwrap());

/// Side table mapping placeholder tokens to pre-rendered code markup.
///
/// Created fresh for each formatting call; holding no global state keeps the
/// pipeline pure and reentrant.
pub struct CodeBlocks {
    slots: IndexMap<String, String>,
}

impl CodeBlocks {
    pub fn new() -> Self {
        Self {
            slots: IndexMap::new(),
        }
    }

    /// Replace every fenced region with a unique token and record its escaped
    /// rendering. An info string after the opening fence becomes a
    /// `language-*` class on the code element.
    ///
    /// An unclosed fence never matches and passes through as literal text.
    pub fn extract(&mut self, text: &str) -> String {
        let mut next = 0usize;

        FENCE_RE
            .replace_all(text, |caps: &Captures| {
                let token = format!("{TOKEN_SENTINEL}code{next}{TOKEN_SENTINEL}");
                next += 1;

                let body = caps.get(2).map_or("", |m| m.as_str());
                let body = body.strip_prefix('\n').unwrap_or(body);
                let body = body.strip_suffix('\n').unwrap_or(body);
                let escaped = escape_html(body);

                let html = match caps.get(1) {
                    Some(lang) => format!(
                        "<pre><code class=\"language-{}\">{}</code></pre>",
                        lang.as_str(),
                        escaped
                    ),
                    None => format!("<pre><code>{}</code></pre>", escaped),
                };

                self.slots.insert(token.clone(), html);
                token
            })
            .into_owned()
    }

    /// Substitute every token back with its recorded markup, verbatim, in the
    /// order the regions were extracted.
    pub fn restore(&self, text: &str) -> String {
        let mut result = text.to_string();
        for (token, html) in &self.slots {
            result = result.replace(token.as_str(), html);
        }
        result
    }

    /// Check whether a line is exactly one placeholder token.
    ///
    /// The block passes must leave such lines alone; the markup they stand
    /// for is block-level.
    pub fn is_token_line(line: &str) -> bool {
        let line = line.trim();
        line.starts_with(TOKEN_SENTINEL) && line.ends_with(TOKEN_SENTINEL) && line.len() > 1
    }
}

impl Default for CodeBlocks {
    fn default() -> Self {
        Self::new()
    }
}
