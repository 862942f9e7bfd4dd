//! markdown2html: line-oriented Markdown to HTML converter
//!
//! Translates a small, fixed Markdown subset: ATX headings (levels 1-6),
//! `- ` and `1. ` list items, `**strong**` spans and paragraphs. Output is
//! one HTML element per line, joined by `\n`, with no document wrapper and no
//! HTML escaping.
//!
//! # Design Principles
//! - Events, not a tree: the block parser emits ranges into the input
//! - No regex: byte-prefix checks in a fixed precedence
//! - Total: every input produces output, nothing here returns an error

pub mod block;
pub mod cursor;
pub mod file;
pub mod inline;
pub mod range;
pub mod render;

// Re-export primary types
pub use block::{BlockEvent, BlockParser, ListKind};
pub use file::{convert_file, ConvertError};
pub use inline::{InlineEvent, InlineParser};
pub use range::Range;
pub use render::HtmlWriter;

/// Convert Markdown to HTML.
///
/// This is the primary API for simple use cases.
///
/// # Example
/// ```
/// let html = markdown2html::to_html("# Hello\n\nWorld");
/// assert_eq!(html, "<h1>Hello</h1>\n<p>World</p>");
/// ```
pub fn to_html(input: &str) -> String {
    let mut writer = HtmlWriter::with_capacity_for(input.len());
    render_to_writer(input, &mut writer);
    writer.into_string()
}

/// Convert Markdown to HTML, writing into a provided buffer.
///
/// The buffer is cleared first; its allocation is reused.
pub fn to_html_into(input: &str, out: &mut String) {
    let mut writer = HtmlWriter::from_buffer(std::mem::take(out));
    render_to_writer(input, &mut writer);
    *out = writer.into_string();
}

/// Render Markdown to an HtmlWriter.
fn render_to_writer(input: &str, writer: &mut HtmlWriter) {
    let mut parser = BlockParser::new(input);
    let mut events = Vec::with_capacity((input.len() / 16).max(16));
    parser.parse(&mut events);

    let mut inline_parser = InlineParser::new();
    let mut inline_events = Vec::with_capacity(16);

    for event in &events {
        render_block_event(input, event, writer, &mut inline_parser, &mut inline_events);
    }
}

/// Render a single block event to HTML.
fn render_block_event(
    input: &str,
    event: &BlockEvent,
    writer: &mut HtmlWriter,
    inline_parser: &mut InlineParser,
    inline_events: &mut Vec<InlineEvent>,
) {
    match event {
        BlockEvent::ParagraphStart => writer.paragraph_start(),
        BlockEvent::ParagraphEnd => writer.paragraph_end(),
        BlockEvent::HeadingStart { level } => writer.heading_start(*level),
        BlockEvent::HeadingEnd { level } => writer.heading_end(*level),
        BlockEvent::ListStart { kind } => match kind {
            ListKind::Unordered => writer.ul_start(),
            ListKind::Ordered => writer.ol_start(),
        },
        BlockEvent::ListEnd { kind } => match kind {
            ListKind::Unordered => writer.ul_end(),
            ListKind::Ordered => writer.ol_end(),
        },
        BlockEvent::ListItemStart => writer.li_start(),
        BlockEvent::ListItemEnd => writer.li_end(),
        // Paragraph lines are joined by a single space.
        BlockEvent::SoftBreak => writer.write_char(' '),
        BlockEvent::RawText(range) => writer.write_str(slice(input, *range)),
        BlockEvent::Text(range) => {
            let text = slice(input, *range);
            inline_events.clear();
            inline_parser.parse(text.as_bytes(), inline_events);
            for inline_event in inline_events.iter() {
                render_inline_event(text, inline_event, writer);
            }
        }
    }
}

/// Render a single inline event to HTML.
fn render_inline_event(text: &str, event: &InlineEvent, writer: &mut HtmlWriter) {
    match event {
        InlineEvent::Text(range) => writer.write_str(slice(text, *range)),
        InlineEvent::StrongStart => writer.strong_start(),
        InlineEvent::StrongEnd => writer.strong_end(),
    }
}

/// Text covered by `range`. Event ranges always fall on char boundaries:
/// they are cut at ASCII markers or at the ends of trimmed text.
#[inline]
fn slice(text: &str, range: Range) -> &str {
    &text[std::ops::Range::<usize>::from(range)]
}
