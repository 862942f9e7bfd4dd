//! Block-level event types.

use crate::Range;

/// Events emitted by the block parser.
///
/// Start and end events always come in balanced pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockEvent {
    /// Start of a paragraph.
    ParagraphStart,
    /// End of a paragraph.
    ParagraphEnd,

    /// Start of a heading.
    HeadingStart {
        /// Heading level (1-6).
        level: u8,
    },
    /// End of a heading.
    HeadingEnd {
        /// Heading level (1-6).
        level: u8,
    },

    /// Start of a list container.
    ListStart {
        /// List type (ordered or unordered).
        kind: ListKind,
    },
    /// End of a list container.
    ListEnd {
        /// List type (ordered or unordered).
        kind: ListKind,
    },

    /// Start of a list item.
    ListItemStart,
    /// End of a list item.
    ListItemEnd,

    /// Join point between two lines of the same paragraph.
    SoftBreak,

    /// Inline content range to be parsed by the inline parser.
    Text(Range),

    /// Content written as-is, without inline parsing (heading text).
    RawText(Range),
}

/// Type of list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// `- item` lines, rendered as `<ul>`.
    Unordered,
    /// `1. item` lines, rendered as `<ol>`.
    Ordered,
}
