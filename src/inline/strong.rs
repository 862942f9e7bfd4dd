//! `**strong**` span matching.
//!
//! Delimiters pair left to right: each `**` opens a span that closes at the
//! next `**`, and scanning resumes after the closer. Spans never overlap or
//! nest, content may be empty, and an opener without a closer is left as
//! literal text.

use memchr::memmem::Finder;
use smallvec::SmallVec;

/// Delimiter of a strong span.
pub const STRONG_DELIM: &[u8] = b"**";

/// A matched `**...**` span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrongSpan {
    /// Position of the opening `**`.
    pub opener: u32,
    /// Position of the closing `**`.
    pub closer: u32,
}

impl StrongSpan {
    /// Start of the content between the delimiters.
    #[inline]
    pub fn content_start(&self) -> u32 {
        self.opener + STRONG_DELIM.len() as u32
    }

    /// End of the span including the closing delimiter.
    #[inline]
    pub fn end(&self) -> u32 {
        self.closer + STRONG_DELIM.len() as u32
    }
}

/// Collect every strong span in `text`, in order.
pub fn find_strong_spans(
    finder: &Finder<'_>,
    text: &[u8],
    spans: &mut SmallVec<[StrongSpan; 8]>,
) {
    spans.clear();

    let delim = STRONG_DELIM.len();
    let mut pos = 0;
    while let Some(offset) = finder.find(&text[pos..]) {
        let opener = pos + offset;
        let Some(len) = finder.find(&text[opener + delim..]) else {
            // Unmatched opener: the rest of the line stays literal.
            break;
        };
        let closer = opener + delim + len;
        spans.push(StrongSpan {
            opener: opener as u32,
            closer: closer as u32,
        });
        pos = closer + delim;
    }
}
