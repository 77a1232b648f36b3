//! # chatmark
//!
//! Convert chat messages written in a constrained, markdown-like dialect
//! into HTML markup, and extract the machine-readable `<Tag>` markers a chat
//! backend appends to its messages.
//!
//! ## Design
//!
//! Two independent pieces compose into one pipeline per incoming message:
//!
//! ```text
//! raw message ──▶ tag extractor ──▶ (clean text, tags)
//!                                        │
//!                                        ▼
//!                                  markup formatter ──▶ HTML string
//! ```
//!
//! Both pieces are pure, synchronous, and total: any input string produces a
//! result, malformed syntax degrades to literal text, and no state survives a
//! call. Concurrent use needs no coordination.
//!
//! ## Example
//!
//! ```rust
//! use chatmark::ChatmarkService;
//!
//! let service = ChatmarkService::new();
//!
//! let message = service.render("**Hi!** Pick one <Wet><Dry>");
//! assert_eq!(message.tags, vec!["Wet", "Dry"]);
//! assert!(message.html.contains("<strong>Hi!</strong>"));
//! ```
//!
//! ## Formatting only
//!
//! ```rust
//! use chatmark::ChatmarkService;
//!
//! let service = ChatmarkService::new();
//! let html = service.format("# Title\nSome `code` here");
//! assert!(html.contains("<h1>Title</h1>"));
//! assert!(html.contains("<code>code</code>"));
//! ```

mod service;
mod tags;

pub use chatmark_core::FormatOptions;
pub use service::{ChatmarkService, RenderedMessage};
pub use tags::{extract_tags, Extraction};
