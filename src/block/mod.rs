//! Block-level parser for Markdown.
//!
//! The block parser is line-oriented and handles:
//! - ATX headings (levels 1-6)
//! - Unordered (`- `) and ordered (`1. `) list items
//! - Paragraphs
//!
//! Every line is trimmed before classification. Blank lines end a paragraph
//! but leave an open list alone; any other non-list line closes the list.

mod event;
mod parser;

pub use event::{BlockEvent, ListKind};
pub use parser::BlockParser;
