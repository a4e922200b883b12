//! Splitting resolved inline text into wrap segments.

use super::ansi::{ANSI_RE, strip_ansi};

/// A whitespace-delimited run of inline text.
///
/// Code segments contain at least one complete backtick pair and may hold
/// whitespace inside the pair. Joining all segments of a line with single
/// spaces reproduces the line with its whitespace runs collapsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSegment {
    pub text: String,
    pub is_code: bool,
}

impl TextSegment {
    fn new(text: String, is_code: bool) -> Self {
        Self { text, is_code }
    }
}

/// Split `text` on whitespace outside code spans.
///
/// A backtick without a partner later in the text is treated as a literal
/// character and does not open a span. ANSI sequences travel with the
/// segment they precede and contribute nothing to its classification.
///
/// # Examples
///
/// ```
/// use parselt::layout::segment_text;
/// let segs = segment_text("run `cargo test --all` now");
/// let texts: Vec<_> = segs.iter().map(|s| s.text.as_str()).collect();
/// assert_eq!(texts, ["run", "`cargo test --all`", "now"]);
/// assert!(segs[1].is_code);
/// ```
#[must_use]
pub fn segment_text(text: &str) -> Vec<TextSegment> {
    let total_ticks = text.matches('`').count();
    let paired_ticks = total_ticks - total_ticks % 2;

    let mut segments = Vec::new();
    let mut current = String::new();
    let mut in_code = false;
    let mut is_code = false;
    let mut ticks_seen = 0;
    let mut idx = 0;

    while idx < text.len() {
        if text[idx..].starts_with('\x1b')
            && let Some(m) = ANSI_RE.find_at(text, idx)
            && m.start() == idx
        {
            current.push_str(m.as_str());
            idx = m.end();
            continue;
        }
        let Some(ch) = text[idx..].chars().next() else {
            break;
        };
        idx += ch.len_utf8();

        if ch == '`' {
            ticks_seen += 1;
            if ticks_seen <= paired_ticks {
                in_code = !in_code;
                if !in_code {
                    is_code = true;
                }
            }
            current.push(ch);
            continue;
        }

        if ch.is_whitespace() && !in_code {
            if !strip_ansi(&current).is_empty() {
                segments.push(TextSegment::new(std::mem::take(&mut current), is_code));
                is_code = false;
            }
            continue;
        }

        current.push(ch);
    }

    if strip_ansi(&current).is_empty() {
        if let Some(last) = segments.last_mut() {
            last.text.push_str(&current);
        }
    } else {
        segments.push(TextSegment::new(current, is_code));
    }
    segments
}
