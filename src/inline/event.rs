//! Inline-level event types.

use crate::Range;

/// Events emitted by the inline parser.
///
/// Ranges are relative to the text handed to [`InlineParser::parse`].
///
/// [`InlineParser::parse`]: super::InlineParser::parse
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineEvent {
    /// Plain text content.
    Text(Range),

    /// Start of strong emphasis (`**strong**`).
    StrongStart,
    /// End of strong emphasis.
    StrongEnd,
}
