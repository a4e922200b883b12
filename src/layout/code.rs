//! Hard wrapping of over-long code lines.

use tracing::debug;
use unicode_width::UnicodeWidthChar;

/// Narrowest width at which a code line is still broken up. Below it the
/// remainder is emitted as is.
pub const MIN_CODE_WIDTH: usize = 20;

const ELLIPSIS: &str = "...";

/// A line is broken after any of these; spaces are handled separately.
const BREAK_AFTER: [char; 12] = [',', ';', '.', ')', '}', ']', '>', '|', '&', '+', '-', '='];

/// Columns taken by the leading whitespace of `line`, counting a tab as four.
#[must_use]
pub fn indentation_width(line: &str) -> usize {
    line.chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .map(|c| if c == '\t' { 4 } else { 1 })
        .sum()
}

fn char_width(c: char) -> usize {
    UnicodeWidthChar::width(c).unwrap_or(0)
}

fn columns(chars: &[char]) -> usize {
    chars.iter().copied().map(char_width).sum()
}

/// Number of leading `chars` that fit in `limit` columns.
fn fitting(chars: &[char], limit: usize) -> usize {
    let mut used = 0;
    chars
        .iter()
        .take_while(|c| {
            used += char_width(**c);
            used <= limit
        })
        .count()
}

/// Find the break point for `chars` within `limit` columns.
///
/// Searches backwards from the last character that fits to the midpoint.
/// Spaces break before themselves and are dropped; punctuation breaks after
/// itself. Without a candidate the line is cut three columns short of the
/// limit and both halves are marked with `...`.
fn split_at_break(chars: &[char], limit: usize) -> (String, Vec<char>) {
    let fit = fitting(chars, limit);
    for i in (fit / 2..=fit).rev() {
        let Some(&ch) = chars.get(i) else {
            continue;
        };
        if ch == ' ' {
            let head: String = chars[..i].iter().collect();
            if head.trim().is_empty() {
                continue;
            }
            let tail = chars[i..].iter().skip_while(|c| **c == ' ').copied().collect();
            return (head, tail);
        }
        if i < fit && BREAK_AFTER.contains(&ch) {
            return (chars[..=i].iter().collect(), chars[i + 1..].to_vec());
        }
    }

    let cut = fitting(chars, limit.saturating_sub(ELLIPSIS.len())).max(1);
    let mut head: String = chars[..cut].iter().collect();
    head.push_str(ELLIPSIS);
    let mut tail: Vec<char> = ELLIPSIS.chars().collect();
    tail.extend_from_slice(&chars[cut..]);
    (head, tail)
}

/// Hard-wrap a single code line to `width` display columns.
///
/// Continuation lines are indented two columns past the line's own
/// indentation and get correspondingly less room. When that room drops below
/// [`MIN_CODE_WIDTH`] the remainder is emitted unbroken.
///
/// # Examples
///
/// ```
/// use parselt::layout::wrap_code_line;
/// let lines = wrap_code_line("x = foo(aaaa)+bar(bbbb)+baz(cccc)+qux(dddd);", 24);
/// assert_eq!(lines, ["x = foo(aaaa)+bar(bbbb)+", "  baz(cccc)+qux(dddd);"]);
/// ```
#[must_use]
pub fn wrap_code_line(line: &str, width: usize) -> Vec<String> {
    let mut rest: Vec<char> = line.chars().collect();
    if columns(&rest) <= width {
        return vec![line.to_string()];
    }

    let indent = " ".repeat(indentation_width(line) + 2);
    let continuation_limit = width.saturating_sub(indent.len());
    let mut out: Vec<String> = Vec::new();
    let mut limit = width;

    loop {
        let prefix = if out.is_empty() { "" } else { indent.as_str() };
        let fits = columns(&rest) <= limit;
        if fits || limit < MIN_CODE_WIDTH {
            if !fits {
                debug!(limit, "code wrap width below floor; emitting remainder unbroken");
            }
            let tail: String = rest.iter().collect();
            out.push(format!("{prefix}{tail}"));
            break;
        }
        let (head, tail) = split_at_break(&rest, limit);
        out.push(format!("{prefix}{head}"));
        if tail.is_empty() {
            break;
        }
        rest = tail;
        limit = continuation_limit;
    }
    out
}
