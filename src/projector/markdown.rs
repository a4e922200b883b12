//! Simplified markdown for rich-text display widgets.

use crate::blocks::{Block, ListItem, ListMarker};

/// Render `blocks` back to literal markdown.
///
/// Hard-broken paragraph lines are joined with a two-space line break.
///
/// # Examples
///
/// ```
/// use parselt::{InlineStyle, parse_blocks, projector::markdown};
/// let blocks = parse_blocks("<p>Hello <strong>world</strong></p>", InlineStyle::Markdown);
/// assert_eq!(markdown::render(&blocks), "Hello **world**\n");
/// ```
#[must_use]
pub fn render(blocks: &[Block]) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(blocks.len());
    for block in blocks {
        match block {
            Block::Heading { level, text } => {
                lines.push(format!("{} {text}", "#".repeat(usize::from(*level))));
            }
            Block::Paragraph(parts) => lines.push(parts.join("  \n")),
            Block::ListItem(item) => lines.push(list_item(item)),
            Block::Quote(text) => lines.push(format!("> {text}")),
            Block::Code(code) => {
                lines.push(format!("```{}", code.language.as_deref().unwrap_or_default()));
                lines.extend(code.lines.iter().cloned());
                lines.push("```".to_string());
            }
            Block::Rule => lines.push("---".to_string()),
            Block::Text(text) => lines.push(text.clone()),
            Block::Blank => lines.push(String::new()),
        }
    }
    lines.join("\n")
}

fn list_item(item: &ListItem) -> String {
    let mut line = "  ".repeat(item.depth);
    match item.marker {
        ListMarker::Bullet => line.push_str("- "),
        ListMarker::Ordered(n) => line.push_str(&format!("{n}. ")),
    }
    match item.checked {
        Some(true) => line.push_str("[x] "),
        Some(false) => line.push_str("[ ] "),
        None => {}
    }
    line.push_str(&item.text);
    line
}
