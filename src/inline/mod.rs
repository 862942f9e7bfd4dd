//! Inline parser for Markdown.
//!
//! Two phases per line of text:
//! 1. Span collection: find `**...**` pairs with a `memmem` searcher
//! 2. Event emission: walk the spans and emit text / strong events
//!
//! Strong emphasis is the only inline construct; everything else is text.

pub mod event;
mod strong;

pub use event::InlineEvent;

use memchr::memmem::Finder;
use smallvec::SmallVec;

use crate::Range;
use strong::{find_strong_spans, StrongSpan, STRONG_DELIM};

/// Inline parser state.
///
/// Reusable across lines: the searcher and span buffer are kept between calls.
pub struct InlineParser {
    finder: Finder<'static>,
    spans: SmallVec<[StrongSpan; 8]>,
}

impl InlineParser {
    /// Create a new inline parser.
    pub fn new() -> Self {
        Self {
            finder: Finder::new(STRONG_DELIM),
            spans: SmallVec::new(),
        }
    }

    /// Parse one line of inline content and append its events.
    pub fn parse(&mut self, text: &[u8], events: &mut Vec<InlineEvent>) {
        find_strong_spans(&self.finder, text, &mut self.spans);

        let mut pos = 0u32;
        for span in &self.spans {
            push_text(events, pos, span.opener);
            events.push(InlineEvent::StrongStart);
            push_text(events, span.content_start(), span.closer);
            events.push(InlineEvent::StrongEnd);
            pos = span.end();
        }
        push_text(events, pos, text.len() as u32);
    }
}

impl Default for InlineParser {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
fn push_text(events: &mut Vec<InlineEvent>, start: u32, end: u32) {
    if end > start {
        events.push(InlineEvent::Text(Range::new(start, end)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Vec<InlineEvent> {
        let mut parser = InlineParser::new();
        let mut events = Vec::new();
        parser.parse(text.as_bytes(), &mut events);
        events
    }

    fn text_of<'a>(text: &'a str, event: &InlineEvent) -> &'a str {
        match event {
            InlineEvent::Text(range) => std::str::from_utf8(range.slice(text.as_bytes())).unwrap(),
            _ => panic!("Expected Text event, got {event:?}"),
        }
    }

    #[test]
    fn test_plain_text() {
        let events = parse("hello");
        assert_eq!(events, vec![InlineEvent::Text(Range::new(0, 5))]);
    }

    #[test]
    fn test_empty_text() {
        assert!(parse("").is_empty());
    }

    #[test]
    fn test_strong_in_middle() {
        let text = "Hello **world** !";
        let events = parse(text);

        assert_eq!(events.len(), 5);
        assert_eq!(text_of(text, &events[0]), "Hello ");
        assert_eq!(events[1], InlineEvent::StrongStart);
        assert_eq!(text_of(text, &events[2]), "world");
        assert_eq!(events[3], InlineEvent::StrongEnd);
        assert_eq!(text_of(text, &events[4]), " !");
    }

    #[test]
    fn test_empty_strong() {
        let events = parse("****");
        assert_eq!(events, vec![InlineEvent::StrongStart, InlineEvent::StrongEnd]);
    }

    #[test]
    fn test_unmatched_is_text() {
        let text = "a **b";
        let events = parse(text);
        assert_eq!(events.len(), 1);
        assert_eq!(text_of(text, &events[0]), "a **b");
    }

    #[test]
    fn test_parser_reuse() {
        let mut parser = InlineParser::new();
        let mut events = Vec::new();
        parser.parse(b"**a**", &mut events);
        events.clear();
        parser.parse(b"plain", &mut events);
        assert_eq!(events, vec![InlineEvent::Text(Range::new(0, 5))]);
    }
}
