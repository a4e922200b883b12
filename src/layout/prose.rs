//! Greedy prose wrapping.

use super::{ansi::visible_width, segment::segment_text};

/// Wrap `text` to `width` columns.
///
/// Segments are packed greedily with one space between them. A segment
/// that does not fit starts a new line; a segment wider than `width` sits
/// alone on its own line and is never split, which keeps code spans whole.
/// Continuation lines carry no indentation.
///
/// # Examples
///
/// ```
/// use parselt::layout::wrap_prose;
/// let lines = wrap_prose("the quick brown fox jumps", 10);
/// assert_eq!(lines, ["the quick", "brown fox", "jumps"]);
/// ```
#[must_use]
pub fn wrap_prose(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for segment in segment_text(text) {
        let seg_width = visible_width(&segment.text);
        if current.is_empty() {
            current = segment.text;
            current_width = seg_width;
            continue;
        }
        if current_width + 1 + seg_width <= width {
            current.push(' ');
            current.push_str(&segment.text);
            current_width += 1 + seg_width;
            continue;
        }
        lines.push(std::mem::replace(&mut current, segment.text));
        current_width = seg_width;
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
