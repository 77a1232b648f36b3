//! Configuration options for the formatting stages.

/// Options for chat message formatting
#[derive(Debug, Clone)]
pub struct FormatOptions {
    /// Browsing context targeted by emitted anchors
    pub link_target: String,

    /// Relationship attribute on emitted anchors
    pub link_rel: String,

    /// Marker glyph for a checked task item
    pub checked_marker: String,

    /// Marker glyph for an unchecked task item
    pub unchecked_marker: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            link_target: "_blank".to_string(),
            link_rel: "noopener noreferrer".to_string(),
            checked_marker: "\u{2611}".to_string(),
            unchecked_marker: "\u{2610}".to_string(),
        }
    }
}
