//! chatmark-core - formatting stages for the chatmark dialect
//!
//! This crate provides the individual rewrite stages that turn a chat
//! message written in a constrained, markdown-like dialect into HTML
//! markup. The stages are pure string transforms; the `chatmark` crate
//! composes them into the full pipeline.
//!
//! # Architecture
//!
//! ```text
//! dialect text ──▶ code fences ──▶ inline spans ──▶ block lines ──▶ HTML
//!                 (placeholders)                                (restored)
//! ```
//!
//! Stage order matters: fenced code is pulled out first so its contents are
//! immune to every later rewrite, and placeholders are substituted back last.
//! Each stage documents what the stages before it guarantee.
//!
//! # Example
//!
//! ```rust
//! use chatmark_core::escape_html;
//!
//! assert_eq!(escape_html("<b>&</b>"), "&lt;b&gt;&amp;&lt;/b&gt;");
//! ```

mod blocks;
mod code;
mod escape;
mod inline;
mod options;

pub use blocks::{
    assemble_lists, blockquotes, contains_list_syntax, headings, horizontal_rules, paragraphs,
    tables, ListKind,
};
pub use code::CodeBlocks;
pub use escape::escape_html;
pub use inline::{code_spans, emphasis, links};
pub use options::FormatOptions;
