//! The line-by-line state machine behind [`parse_blocks`](super::parse_blocks).

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, trace};

use super::{Block, CodeBlock, ListItem, ListMarker, MarkupLine};
use crate::{
    inline::{InlineStyle, resolve_and_strip},
    tags::{self, ListTag},
};

static ORDINAL_RE: LazyLock<Regex> =
    crate::lazy_regex!(r"^(\d+)\.(?:\s+|$)", "leading item ordinal");

/// Deepest nesting tier a list item is rendered at.
const MAX_TIER: usize = 2;

#[derive(Debug, Clone, Copy)]
struct ListContext {
    ordered: bool,
    next: u64,
}

/// A `<li>` whose text arrives on a later line.
#[derive(Debug, Clone, Copy)]
struct PendingItem {
    depth: usize,
    marker: ListMarker,
    checked: Option<bool>,
}

/// A `<p>` still waiting for its closing tag.
#[derive(Debug, Default)]
struct OpenParagraph {
    raw: String,
    quoted: bool,
}

/// Mutable state carried across lines during one conversion.
///
/// `code_block_lines` and `code_block_language` only mean something while
/// `in_code_block` is set; both are reset when a fence opens or closes.
#[derive(Debug, Default)]
pub struct BlockState {
    style: InlineStyle,
    in_code_block: bool,
    code_block_lines: Vec<String>,
    code_block_language: Option<String>,
    lists: Vec<ListContext>,
    quote_depth: usize,
    paragraph: Option<OpenParagraph>,
    pending_item: Option<PendingItem>,
}

impl BlockState {
    #[must_use]
    pub fn new(style: InlineStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    /// Report whether a fenced code block is open.
    #[must_use]
    pub fn in_code_block(&self) -> bool {
        self.in_code_block
    }

    /// Feed one markup line, appending finished blocks to `out`.
    pub fn step(&mut self, line: &MarkupLine<'_>, out: &mut Vec<Block>) {
        if self.in_code_block {
            self.code_body_line(line.raw, out);
            return;
        }

        if line.trimmed.is_empty() {
            self.flush_paragraph(out);
            out.push(Block::Blank);
            return;
        }

        if self.paragraph.is_some() {
            self.continue_paragraph(line.trimmed, out);
            return;
        }

        if let Some(end) = tags::fence_open(line.raw) {
            self.open_code(line.raw, end, out);
            return;
        }

        self.dispatch(line, out);
    }

    /// Flush whatever is still open at the end of input.
    ///
    /// An unterminated fence absorbs every remaining line and is emitted as
    /// a normal code block.
    pub fn finish(&mut self, out: &mut Vec<Block>) {
        if self.in_code_block {
            debug!(
                lines = self.code_block_lines.len(),
                "unterminated code fence at end of input"
            );
            self.close_code(out);
        }
        self.flush_paragraph(out);
    }

    fn clean(&self, fragment: &str) -> String {
        resolve_and_strip(fragment, self.style).trim().to_string()
    }

    fn open_code(&mut self, raw: &str, end: usize, out: &mut Vec<Block>) {
        self.in_code_block = true;
        self.code_block_lines.clear();
        self.code_block_language = tags::extract_code_language(raw);
        trace!(language = ?self.code_block_language, "code fence opened");

        let rest = &raw[end..];
        if let Some(close) = tags::fence_close(rest) {
            self.push_code_content(&rest[..close]);
            self.close_code(out);
        } else {
            self.push_code_content(rest);
        }
    }

    fn push_code_content(&mut self, content: &str) {
        if !content.trim().is_empty() {
            self.code_block_lines.push(content.to_string());
        }
    }

    fn code_body_line(&mut self, raw: &str, out: &mut Vec<Block>) {
        if let Some(close) = tags::fence_close(raw) {
            self.push_code_content(&raw[..close]);
            self.close_code(out);
            return;
        }
        if raw.trim().is_empty() {
            self.code_block_lines.push(String::new());
        } else {
            self.code_block_lines.push(raw.to_string());
        }
    }

    fn close_code(&mut self, out: &mut Vec<Block>) {
        self.in_code_block = false;
        let block = CodeBlock {
            language: self.code_block_language.take(),
            lines: std::mem::take(&mut self.code_block_lines),
        };
        trace!(lines = block.lines.len(), "code fence closed");
        out.push(Block::Code(block));
        out.push(Block::Blank);
    }

    fn dispatch(&mut self, line: &MarkupLine<'_>, out: &mut Vec<Block>) {
        let trimmed = line.trimmed;

        if tags::is_rule(trimmed) {
            out.push(Block::Rule);
            out.push(Block::Blank);
            return;
        }

        if let Some(level) = tags::header_level(trimmed)
            && let Some(content) = tags::extract_header_content(trimmed, level)
        {
            let text = self.clean(&content);
            if !text.is_empty() {
                out.push(Block::Heading { level, text });
                out.push(Block::Blank);
            }
            return;
        }

        let list_tags = tags::list_tags(trimmed);
        let (quote_opens, quote_closes) = tags::quote_tags(trimmed);
        let in_quote = self.quote_depth > 0 || quote_opens > 0;
        let had_quote_tag = quote_opens + quote_closes > 0;
        if list_tags.is_empty() && !had_quote_tag {
            self.dispatch_content(line.indent, trimmed, in_quote, false, out);
            return;
        }

        let list_closed = self.apply_list_tags(&list_tags);
        self.quote_depth = (self.quote_depth + quote_opens).saturating_sub(quote_closes);
        let without_lists = tags::strip_list_tags(trimmed);
        let body = tags::strip_quote_tags(&without_lists);
        let body = body.trim();

        if body.is_empty() {
            let quote_closed = quote_closes > 0 && self.quote_depth == 0;
            if list_closed || quote_closed {
                out.push(Block::Blank);
            }
            return;
        }
        self.dispatch_content(line.indent, body, in_quote, had_quote_tag, out);
    }

    /// Apply container tags in order; returns `true` when the outermost
    /// list closed.
    fn apply_list_tags(&mut self, list_tags: &[ListTag]) -> bool {
        let mut closed = false;
        for tag in list_tags {
            match *tag {
                ListTag::OpenOrdered(start) => self.lists.push(ListContext {
                    ordered: true,
                    next: start,
                }),
                ListTag::OpenUnordered => self.lists.push(ListContext {
                    ordered: false,
                    next: 1,
                }),
                ListTag::Close => {
                    self.lists.pop();
                    self.pending_item = None;
                    closed = self.lists.is_empty();
                }
            }
        }
        closed
    }

    fn dispatch_content(
        &mut self,
        indent: usize,
        body: &str,
        in_quote: bool,
        quote_line: bool,
        out: &mut Vec<Block>,
    ) {
        if tags::has_item_tag(body) {
            self.list_item(indent, body, out);
        } else if let Some(end) = tags::paragraph_open(body) {
            self.open_paragraph(&body[end..], in_quote, out);
        } else if quote_line {
            let text = self.clean(body);
            if !text.is_empty() {
                out.push(Block::Quote(text));
            }
        } else {
            self.fallback(body, in_quote, out);
        }
    }

    fn item_depth(&self, indent: usize) -> usize {
        let from_indent = match indent {
            4.. => 2,
            2.. => 1,
            _ => 0,
        };
        let from_nesting = self.lists.len().saturating_sub(1);
        from_indent.max(from_nesting).min(MAX_TIER)
    }

    /// Choose the item marker, consuming an explicit leading ordinal from
    /// `text` when present.
    fn item_marker(&mut self, text: String) -> (ListMarker, String) {
        let counted = self.lists.last_mut().filter(|ctx| ctx.ordered).map(|ctx| {
            let n = ctx.next;
            ctx.next = ctx.next.saturating_add(1);
            n
        });

        if let Some(cap) = ORDINAL_RE.captures(&text)
            && let Ok(n) = cap[1].parse()
        {
            let rest = text[cap[0].len()..].trim().to_string();
            return (ListMarker::Ordered(n), rest);
        }

        match counted {
            Some(n) => (ListMarker::Ordered(n), text),
            None => (ListMarker::Bullet, text),
        }
    }

    fn list_item(&mut self, indent: usize, body: &str, out: &mut Vec<Block>) {
        let checked = tags::checkbox_state(body);
        let content = tags::strip_item_tags(body);
        let text = self.clean(&content);
        let depth = self.item_depth(indent);
        let (marker, text) = self.item_marker(text);

        if text.is_empty() {
            self.pending_item = Some(PendingItem {
                depth,
                marker,
                checked,
            });
            return;
        }
        self.pending_item = None;
        out.push(Block::ListItem(ListItem {
            depth,
            marker,
            checked,
            text,
        }));
    }

    fn take_pending_item(&mut self, text: String) -> Option<Block> {
        self.pending_item.take().map(|item| {
            Block::ListItem(ListItem {
                depth: item.depth,
                marker: item.marker,
                checked: item.checked,
                text,
            })
        })
    }

    fn open_paragraph(&mut self, rest: &str, quoted: bool, out: &mut Vec<Block>) {
        self.paragraph = Some(OpenParagraph {
            raw: String::new(),
            quoted,
        });
        self.continue_paragraph(rest, out);
    }

    fn continue_paragraph(&mut self, text: &str, out: &mut Vec<Block>) {
        let Some(open) = self.paragraph.as_mut() else {
            return;
        };
        let (chunk, closed) = match text.find("</p>") {
            Some(idx) => (&text[..idx], true),
            None => (text, false),
        };
        let chunk = chunk.trim();
        if !chunk.is_empty() {
            if !open.raw.is_empty() {
                open.raw.push(' ');
            }
            open.raw.push_str(chunk);
        }
        if closed {
            self.flush_paragraph(out);
        }
    }

    fn flush_paragraph(&mut self, out: &mut Vec<Block>) {
        let Some(open) = self.paragraph.take() else {
            return;
        };
        let lines: Vec<String> = tags::split_hard_breaks(&open.raw)
            .map(|part| self.clean(part))
            .filter(|line| !line.is_empty())
            .collect();
        if lines.is_empty() {
            return;
        }

        if open.quoted {
            out.extend(lines.into_iter().map(Block::Quote));
            return;
        }
        if let Some(item) = self.take_pending_item(lines.join(" ")) {
            out.push(item);
        } else {
            out.push(Block::Paragraph(lines));
        }
        out.push(Block::Blank);
    }

    fn fallback(&mut self, body: &str, in_quote: bool, out: &mut Vec<Block>) {
        let text = self.clean(body);
        if text.is_empty() {
            return;
        }
        if let Some(item) = self.take_pending_item(text.clone()) {
            out.push(item);
        } else if in_quote {
            out.push(Block::Quote(text));
        } else {
            out.push(Block::Text(text));
        }
    }
}
