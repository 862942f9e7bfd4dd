//! HTML output writer.
//!
//! Output is a sequence of lines joined by `\n`: every block-level tag that
//! begins a line first writes the separator (except at the very start), so
//! the finished document never ends with a newline.

/// HTML output writer with a pre-allocated, reusable buffer.
///
/// # Example
/// ```
/// use markdown2html::HtmlWriter;
///
/// let mut writer = HtmlWriter::with_capacity_for(16);
/// writer.ul_start();
/// writer.li_start();
/// writer.write_str("item");
/// writer.li_end();
/// writer.ul_end();
///
/// assert_eq!(writer.into_string(), "<ul>\n<li>item</li>\n</ul>");
/// ```
pub struct HtmlWriter {
    out: String,
}

impl HtmlWriter {
    /// Create a new writer with default capacity.
    #[inline]
    pub fn new() -> Self {
        Self {
            out: String::with_capacity(1024),
        }
    }

    /// Create with capacity based on the expected input size.
    ///
    /// Tags add roughly a quarter on top of typical input.
    #[inline]
    pub fn with_capacity_for(input_len: usize) -> Self {
        Self {
            out: String::with_capacity(input_len + input_len / 4),
        }
    }

    /// Wrap an existing buffer, keeping its allocation.
    #[inline]
    pub fn from_buffer(mut out: String) -> Self {
        out.clear();
        Self { out }
    }

    /// Write text as-is.
    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.out.push_str(s);
    }

    /// Write a single character.
    #[inline]
    pub fn write_char(&mut self, c: char) {
        self.out.push(c);
    }

    /// Start a new output line.
    #[inline]
    fn line(&mut self) {
        if !self.out.is_empty() {
            self.out.push('\n');
        }
    }

    /// Current output length.
    #[inline]
    pub fn len(&self) -> usize {
        self.out.len()
    }

    /// Check if output is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    /// Clear output for reuse (keeps capacity).
    #[inline]
    pub fn clear(&mut self) {
        self.out.clear();
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.out
    }

    /// Take ownership of the output.
    #[inline]
    pub fn into_string(self) -> String {
        self.out
    }

    // --- Block elements (each starts a line) ---

    /// Write paragraph start: `<p>`
    #[inline]
    pub fn paragraph_start(&mut self) {
        self.line();
        self.write_str("<p>");
    }

    /// Write paragraph end: `</p>`
    #[inline]
    pub fn paragraph_end(&mut self) {
        self.write_str("</p>");
    }

    /// Write heading start: `<hN>`
    #[inline]
    pub fn heading_start(&mut self, level: u8) {
        debug_assert!((1..=6).contains(&level));
        self.line();
        self.write_str("<h");
        self.write_char(char::from(b'0' + level));
        self.write_char('>');
    }

    /// Write heading end: `</hN>`
    #[inline]
    pub fn heading_end(&mut self, level: u8) {
        debug_assert!((1..=6).contains(&level));
        self.write_str("</h");
        self.write_char(char::from(b'0' + level));
        self.write_char('>');
    }

    /// Write list start (unordered): `<ul>`
    #[inline]
    pub fn ul_start(&mut self) {
        self.line();
        self.write_str("<ul>");
    }

    /// Write list end (unordered): `</ul>`
    #[inline]
    pub fn ul_end(&mut self) {
        self.line();
        self.write_str("</ul>");
    }

    /// Write list start (ordered): `<ol>`
    #[inline]
    pub fn ol_start(&mut self) {
        self.line();
        self.write_str("<ol>");
    }

    /// Write list end (ordered): `</ol>`
    #[inline]
    pub fn ol_end(&mut self) {
        self.line();
        self.write_str("</ol>");
    }

    /// Write list item start: `<li>`
    #[inline]
    pub fn li_start(&mut self) {
        self.line();
        self.write_str("<li>");
    }

    /// Write list item end: `</li>`
    #[inline]
    pub fn li_end(&mut self) {
        self.write_str("</li>");
    }

    // --- Inline elements ---

    /// Write strong start: `<strong>`
    #[inline]
    pub fn strong_start(&mut self) {
        self.write_str("<strong>");
    }

    /// Write strong end: `</strong>`
    #[inline]
    pub fn strong_end(&mut self) {
        self.write_str("</strong>");
    }
}

impl Default for HtmlWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Write for HtmlWriter {
    fn write_str(&mut self, s: &str) -> std::fmt::Result {
        self.out.push_str(s);
        Ok(())
    }
}
