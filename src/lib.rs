//! Render Markdown for the terminal.
//!
//! Source markdown is compiled to markup, interpreted one line at a time
//! into blocks, and projected onto one of two surfaces: styled,
//! word-wrapped terminal text or simplified Markdown for rich-text widgets.
//!
//! Conversions are pure and total. Markup outside the supported tag
//! vocabulary degrades to plain text instead of failing.

use std::borrow::Cow;

use tracing::debug;

#[macro_use]
mod macros;

pub mod blocks;
pub mod compile;
pub mod entities;
pub mod inline;
pub mod io;
pub mod layout;
pub mod projector;
pub mod tags;

pub use blocks::{
    Block, BlockState, CodeBlock, ListItem, ListMarker, MarkupLine, collapse_blank_lines,
    parse_blocks,
};
pub use compile::{CompileOptions, markdown_to_markup};
pub use entities::unescape_markup;
pub use inline::{InlineStyle, resolve_inline};
pub use io::render_file;
pub use layout::{TextSegment, segment_text, wrap_code_line, wrap_prose};

/// The output surface a conversion targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Surface {
    /// Styled, word-wrapped terminal text.
    #[default]
    Terminal,
    /// Simplified Markdown for a rich-text widget.
    Markdown,
}

/// What the input text is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFormat {
    /// Markdown source, compiled before interpretation.
    #[default]
    Markdown,
    /// Markup that has already been compiled.
    Markup,
}

/// Settings for [`render_source`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Column width of the terminal pane. Ignored for the Markdown surface.
    pub width: usize,
    pub surface: Surface,
    pub input: InputFormat,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 80,
            surface: Surface::default(),
            input: InputFormat::default(),
        }
    }
}

/// Convert `markup` into styled terminal text `width` columns wide.
///
/// # Examples
///
/// ```
/// colored::control::set_override(false);
/// let out = parselt::markup_to_terminal("<h2>Quick Start</h2>", 80);
/// assert_eq!(out, "▶▶ Quick Start\n══════════════\n");
/// ```
#[must_use]
pub fn markup_to_terminal(markup: &str, width: usize) -> String {
    let blocks = parse_blocks(markup, InlineStyle::Terminal);
    projector::terminal::render(&blocks, width)
}

/// Convert `markup` into simplified Markdown.
///
/// # Examples
///
/// ```
/// let out = parselt::markup_to_markdown("<li>Item one</li>");
/// assert_eq!(out, "- Item one");
/// ```
#[must_use]
pub fn markup_to_markdown(markup: &str) -> String {
    let blocks = parse_blocks(markup, InlineStyle::Markdown);
    projector::markdown::render(&blocks)
}

/// Render `source` according to `options`.
///
/// Markdown input is compiled first. When a non-empty input produces no
/// output at all, the input is returned unrendered so the reader still sees
/// their text.
#[must_use]
pub fn render_source(source: &str, options: &RenderOptions) -> String {
    let markup: Cow<'_, str> = match options.input {
        InputFormat::Markdown => markdown_to_markup(source, &CompileOptions::default()).into(),
        InputFormat::Markup => source.into(),
    };

    let rendered = match options.surface {
        Surface::Terminal => markup_to_terminal(&markup, options.width),
        Surface::Markdown => markup_to_markdown(&markup),
    };

    if rendered.trim().is_empty() && !source.trim().is_empty() {
        debug!("conversion produced no output; falling back to raw text");
        return source.to_string();
    }
    rendered
}
