//! Byte cursor for line splitting and marker scanning.
//!
//! The block parser uses one cursor to walk the document line by line and
//! short-lived cursors over single lines to recognize block markers.

use memchr::memchr;

use crate::Range;

/// A forward-only cursor over a byte slice.
///
/// # Example
/// ```
/// use markdown2html::cursor::Cursor;
///
/// let mut cursor = Cursor::new(b"## Title");
/// assert_eq!(cursor.skip_while(|b| b == b'#'), 2);
/// assert!(cursor.eat(b' '));
/// assert_eq!(cursor.offset(), 3);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    input: &'a [u8],
    pos: usize,
    /// Set once the final line (the one without a trailing `\n`) is taken.
    exhausted: bool,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `input`.
    #[inline]
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            pos: 0,
            exhausted: false,
        }
    }

    /// Current offset from the start of input.
    #[inline]
    pub fn offset(&self) -> usize {
        self.pos
    }

    #[inline]
    fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Peek the current byte without advancing.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    /// Advance by one byte.
    #[inline]
    pub fn bump(&mut self) {
        debug_assert!(!self.is_eof());
        self.pos += 1;
    }

    /// Check if the current byte is `b`.
    #[inline]
    pub fn at(&self, b: u8) -> bool {
        self.peek() == Some(b)
    }

    /// Consume `b` if it is the current byte.
    #[inline]
    pub fn eat(&mut self, b: u8) -> bool {
        if self.at(b) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Skip bytes while `predicate` holds; returns how many were skipped.
    #[inline]
    pub fn skip_while<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(u8) -> bool,
    {
        let start = self.pos;
        while let Some(b) = self.peek() {
            if !predicate(b) {
                break;
            }
            self.bump();
        }
        self.pos - start
    }

    /// Take the next line, without its `\n`.
    ///
    /// Splits exactly on `\n`: input with `k` newlines yields `k + 1` lines,
    /// so empty input is one empty line and a trailing newline produces a
    /// final empty line.
    pub fn next_line(&mut self) -> Option<Range> {
        if self.exhausted {
            return None;
        }

        let start = self.pos;
        match memchr(b'\n', &self.input[start..]) {
            Some(len) => {
                self.pos = start + len + 1;
                Some(Range::from_usize(start, start + len))
            }
            None => {
                self.pos = self.input.len();
                self.exhausted = true;
                Some(Range::from_usize(start, self.input.len()))
            }
        }
    }
}
