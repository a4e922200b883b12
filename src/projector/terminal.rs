//! Styled, word-wrapped terminal text.
//!
//! Blocks should come from [`parse_blocks`](crate::parse_blocks) with
//! [`InlineStyle::Terminal`](crate::InlineStyle::Terminal) so that inline
//! spans already carry their ANSI styling. Whether any styling is emitted at
//! all follows the `colored` crate's global switch.

use colored::{Color, ColoredString, Colorize};

use crate::{
    blocks::{Block, CodeBlock, ListItem, ListMarker},
    layout::{
        RESET, carry_styles, uppercase_visible, visible_width, wrap_code_line, wrap_prose,
    },
};

/// Narrowest width the projector lays out at.
pub const MIN_RENDER_WIDTH: usize = 20;

const BULLETS: [&str; 3] = ["•", "▪", "◦"];
const TAB: &str = "    ";

/// Render `blocks` for a terminal pane `width` columns wide.
///
/// Widths below [`MIN_RENDER_WIDTH`] are raised to it.
///
/// # Examples
///
/// ```
/// use parselt::{Block, projector::terminal};
/// colored::control::set_override(false);
/// let out = terminal::render(&[Block::Text("plain words".into())], 40);
/// assert_eq!(out, "plain words");
/// ```
#[must_use]
pub fn render(blocks: &[Block], width: usize) -> String {
    let width = width.max(MIN_RENDER_WIDTH);
    let mut lines = Vec::new();
    for block in blocks {
        push_block(block, width, &mut lines);
    }
    carry_styles(lines).join("\n")
}

fn push_block(block: &Block, width: usize, out: &mut Vec<String>) {
    match block {
        Block::Heading { level, text } => heading(*level, text, width, out),
        Block::Paragraph(lines) => {
            for line in lines {
                out.extend(wrap_prose(line, width));
            }
        }
        Block::Text(text) => out.extend(wrap_prose(text, width)),
        Block::ListItem(item) => list_item(item, width, out),
        Block::Quote(text) => quote(text, width, out),
        Block::Code(code) => code_panel(code, width, out),
        Block::Rule => out.push("─".repeat(width).dimmed().to_string()),
        Block::Blank => out.push(String::new()),
    }
}

fn heading(level: u8, text: &str, width: usize, out: &mut Vec<String>) {
    let (prefix, color, underline) = match level {
        1 => ("▶", Color::Red, Some("━")),
        2 => ("▶▶", Color::Cyan, Some("═")),
        3 => ("▶▶▶", Color::Yellow, Some("─")),
        _ => ("◦", Color::Magenta, None),
    };
    let text = if level == 1 {
        uppercase_visible(text)
    } else {
        text.to_string()
    };
    let banner = format!("{prefix} {text}");
    let banner_width = visible_width(&banner);

    for line in wrap_prose(&banner, width) {
        out.push(paint_heading(&line, color));
    }
    if let Some(rule) = underline {
        out.push(rule.repeat(banner_width.min(width)).color(color).to_string());
    }
}

/// Style each run of `line` between inline resets, so the heading colour
/// resumes after a styled code span.
fn paint_heading(line: &str, color: Color) -> String {
    line.split(RESET)
        .filter(|run| !run.is_empty())
        .map(|run| run.color(color).bold().to_string())
        .collect()
}

fn list_item(item: &ListItem, width: usize, out: &mut Vec<String>) {
    let marker = match item.marker {
        ListMarker::Bullet => BULLETS[item.depth.min(BULLETS.len() - 1)].to_string(),
        ListMarker::Ordered(n) => format!("{n}."),
    };
    let mut lead = format!("{}{marker} ", "  ".repeat(item.depth));
    match item.checked {
        Some(true) => lead.push_str("☑ "),
        Some(false) => lead.push_str("☐ "),
        None => {}
    }

    let lead_width = visible_width(&lead);
    let hang = " ".repeat(lead_width);
    let room = width.saturating_sub(lead_width).max(1);
    for (i, line) in wrap_prose(&item.text, room).into_iter().enumerate() {
        let prefix = if i == 0 { &lead } else { &hang };
        out.push(format!("{prefix}{line}"));
    }
}

fn quote(text: &str, width: usize, out: &mut Vec<String>) {
    let border = "│ ".bright_black();
    for line in wrap_prose(text, width.saturating_sub(2)) {
        out.push(format!("{border}{}", line.italic()));
    }
}

fn frame(text: &str) -> ColoredString {
    text.bright_black()
}

fn code_panel(code: &CodeBlock, width: usize, out: &mut Vec<String>) {
    // Borders and one column of padding on each side.
    let inner = width.saturating_sub(4);
    let horizontal = width.saturating_sub(2);

    let top = match code.language.as_deref() {
        Some(language) => {
            let label = language.to_uppercase();
            let used = visible_width(&label) + 5;
            let fill = "─".repeat(width.saturating_sub(used));
            format!("{}{}{}", frame("┌─ "), label.bold(), frame(&format!(" {fill}┐")))
        }
        None => frame(&format!("┌{}┐", "─".repeat(horizontal))).to_string(),
    };
    out.push(top);

    for line in &code.lines {
        let expanded = line.replace('\t', TAB);
        for piece in wrap_code_line(&expanded, inner) {
            let pad = " ".repeat(inner.saturating_sub(visible_width(&piece)));
            out.push(format!("{}{piece}{pad}{}", frame("│ "), frame(" │")));
        }
    }

    out.push(frame(&format!("└{}┘", "─".repeat(horizontal))).to_string());
}
