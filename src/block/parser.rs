//! Block parser implementation.

use smallvec::SmallVec;
use tracing::trace;

use crate::cursor::Cursor;
use crate::Range;

use super::event::{BlockEvent, ListKind};

/// Deepest heading marker (`######`).
const MAX_HEADING_LEVEL: usize = 6;

/// Block parser state.
///
/// One parser translates one document; all state lives here, so separate
/// documents never share anything.
pub struct BlockParser<'a> {
    /// Input text.
    input: &'a str,
    /// Line cursor over the input.
    cursor: Cursor<'a>,
    /// The list container currently open, if any.
    open_list: Option<ListKind>,
    /// Trimmed lines of the pending paragraph.
    paragraph_lines: SmallVec<[Range; 4]>,
}

impl<'a> BlockParser<'a> {
    /// Create a new block parser.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            cursor: Cursor::new(input.as_bytes()),
            open_list: None,
            paragraph_lines: SmallVec::new(),
        }
    }

    /// Parse all blocks and collect events.
    pub fn parse(&mut self, events: &mut Vec<BlockEvent>) {
        while let Some(line) = self.cursor.next_line() {
            self.parse_line(line, events);
        }

        self.close_paragraph(events);
        self.close_list(events);
    }

    /// Classify one line and update the block state.
    ///
    /// Precedence: heading, unordered item, ordered item, blank, paragraph.
    fn parse_line(&mut self, line: Range, events: &mut Vec<BlockEvent>) {
        let raw = &self.input[std::ops::Range::<usize>::from(line)];
        let Some(line) = trimmed_range(raw, line.start) else {
            trace!("blank line");
            self.close_paragraph(events);
            return;
        };
        let text = line.slice(self.input.as_bytes());

        if let Some((level, content)) = atx_heading(text) {
            trace!(level, "heading");
            self.close_paragraph(events);
            self.close_list(events);
            events.push(BlockEvent::HeadingStart { level });
            if let Some(content) = self.content_after(line, content) {
                events.push(BlockEvent::RawText(content));
            }
            events.push(BlockEvent::HeadingEnd { level });
            return;
        }

        if let Some(content) = unordered_item(text) {
            trace!("unordered list item");
            self.list_item(ListKind::Unordered, line, content, events);
            return;
        }

        if let Some(content) = ordered_item(text) {
            trace!("ordered list item");
            self.list_item(ListKind::Ordered, line, content, events);
            return;
        }

        trace!("paragraph line");
        self.close_list(events);
        self.paragraph_lines.push(line);
    }

    /// Emit one list item, opening (or switching) the list container first.
    fn list_item(
        &mut self,
        kind: ListKind,
        line: Range,
        content: usize,
        events: &mut Vec<BlockEvent>,
    ) {
        self.close_paragraph(events);
        if self.open_list != Some(kind) {
            self.close_list(events);
            events.push(BlockEvent::ListStart { kind });
            self.open_list = Some(kind);
        }

        events.push(BlockEvent::ListItemStart);
        if let Some(content) = self.content_after(line, content) {
            events.push(BlockEvent::Text(content));
        }
        events.push(BlockEvent::ListItemEnd);
    }

    /// Trimmed remainder of `line` after a marker of `marker_len` bytes.
    fn content_after(&self, line: Range, marker_len: usize) -> Option<Range> {
        let start = line.start as usize + marker_len;
        let rest = &self.input[start..line.end as usize];
        trimmed_range(rest, start as u32)
    }

    /// Close the pending paragraph, if any.
    fn close_paragraph(&mut self, events: &mut Vec<BlockEvent>) {
        if self.paragraph_lines.is_empty() {
            return;
        }

        events.push(BlockEvent::ParagraphStart);
        for (i, range) in self.paragraph_lines.drain(..).enumerate() {
            if i > 0 {
                events.push(BlockEvent::SoftBreak);
            }
            events.push(BlockEvent::Text(range));
        }
        events.push(BlockEvent::ParagraphEnd);
    }

    /// Close the open list container, if any.
    fn close_list(&mut self, events: &mut Vec<BlockEvent>) {
        if let Some(kind) = self.open_list.take() {
            events.push(BlockEvent::ListEnd { kind });
        }
    }
}

/// Unicode whitespace plus the ASCII file, group, record and unit separators
/// (`\x1c`-`\x1f`), which `str::trim` keeps.
#[inline]
fn is_trim_char(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Range of `text` with surrounding whitespace removed, or `None` if nothing
/// is left. `base` is the offset of `text` in the document.
fn trimmed_range(text: &str, base: u32) -> Option<Range> {
    let trimmed = text.trim_matches(is_trim_char);
    if trimmed.is_empty() {
        return None;
    }
    let start = base as usize + (text.len() - text.trim_start_matches(is_trim_char).len());
    Some(Range::from_usize(start, start + trimmed.len()))
}

/// Match an ATX heading marker: exactly 1-6 `#` followed by a space.
///
/// Returns the level and the marker length.
fn atx_heading(line: &[u8]) -> Option<(u8, usize)> {
    let mut cursor = Cursor::new(line);
    let level = cursor.skip_while(|b| b == b'#');
    if level == 0 || level > MAX_HEADING_LEVEL || !cursor.eat(b' ') {
        return None;
    }
    Some((level as u8, cursor.offset()))
}

/// Match `- `; returns the marker length.
fn unordered_item(line: &[u8]) -> Option<usize> {
    line.starts_with(b"- ").then_some(2)
}

/// Match one or more ASCII digits, `.`, and a space; returns the marker length.
fn ordered_item(line: &[u8]) -> Option<usize> {
    let mut cursor = Cursor::new(line);
    if cursor.skip_while(|b| b.is_ascii_digit()) == 0 {
        return None;
    }
    if !cursor.eat(b'.') || !cursor.eat(b' ') {
        return None;
    }
    Some(cursor.offset())
}
