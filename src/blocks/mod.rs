//! Block-level interpretation of compiled markup.
//!
//! [`parse_blocks`] walks the unescaped markup one line at a time through a
//! [`BlockState`] and produces the ordered [`Block`] sequence both output
//! projectors consume. Runs of blank blocks are collapsed afterwards.

use tracing::debug;

use crate::{entities::unescape_markup, inline::InlineStyle};

mod state;

pub use state::BlockState;

/// A finished unit of output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Header of level 1–4.
    Heading { level: u8, text: String },
    /// Paragraph text, one entry per hard-broken line.
    Paragraph(Vec<String>),
    ListItem(ListItem),
    /// One line of quoted text.
    Quote(String),
    Code(CodeBlock),
    /// Thematic break.
    Rule,
    /// Text outside any recognised block tag.
    Text(String),
    /// Separator line.
    Blank,
}

/// A list entry with its nesting tier (0, 1 or 2).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub depth: usize,
    pub marker: ListMarker,
    /// Task-list state, when the item carries a checkbox.
    pub checked: Option<bool>,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMarker {
    Bullet,
    Ordered(u64),
}

/// The body of a fenced code block.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CodeBlock {
    pub language: Option<String>,
    pub lines: Vec<String>,
}

/// One line of unescaped markup.
#[derive(Debug, Clone, Copy)]
pub struct MarkupLine<'a> {
    pub raw: &'a str,
    pub trimmed: &'a str,
    /// Count of leading spaces and tabs in `raw`.
    pub indent: usize,
}

impl<'a> MarkupLine<'a> {
    #[must_use]
    pub fn new(raw: &'a str) -> Self {
        let indent = raw.len() - raw.trim_start_matches([' ', '\t']).len();
        Self {
            raw,
            trimmed: raw.trim(),
            indent,
        }
    }
}

/// Collapse every run of consecutive [`Block::Blank`] entries to one.
///
/// A single blank at either end of the sequence is kept.
#[must_use]
pub fn collapse_blank_lines(blocks: Vec<Block>) -> Vec<Block> {
    let mut out: Vec<Block> = Vec::with_capacity(blocks.len());
    for block in blocks {
        if block == Block::Blank && out.last() == Some(&Block::Blank) {
            continue;
        }
        out.push(block);
    }
    out
}

/// Interpret `markup` as a sequence of blocks.
///
/// Character references are decoded first. Inline spans are resolved with
/// `style`, so the terminal projector receives pre-styled text.
///
/// # Examples
///
/// ```
/// use parselt::{Block, InlineStyle, parse_blocks};
/// let blocks = parse_blocks("<h2>Quick Start</h2>", InlineStyle::Markdown);
/// assert_eq!(
///     blocks,
///     vec![Block::Heading { level: 2, text: "Quick Start".into() }, Block::Blank]
/// );
/// ```
#[must_use]
pub fn parse_blocks(markup: &str, style: InlineStyle) -> Vec<Block> {
    let text = unescape_markup(markup);
    let mut state = BlockState::new(style);
    let mut out = Vec::new();
    for raw in text.lines() {
        state.step(&MarkupLine::new(raw), &mut out);
    }
    state.finish(&mut out);
    let blocks = collapse_blank_lines(out);
    debug!(blocks = blocks.len(), "interpreted markup");
    blocks
}
