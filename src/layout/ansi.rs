//! Helpers for text carrying ANSI SGR sequences.

use std::{borrow::Cow, sync::LazyLock};

use regex::Regex;
use unicode_width::UnicodeWidthStr;

pub(super) static ANSI_RE: LazyLock<Regex> =
    crate::lazy_regex!(r"\x1b\[[0-9;]*m", "ANSI SGR sequence");

pub(crate) const RESET: &str = "\x1b[0m";

/// Remove ANSI SGR sequences from `text`.
#[must_use]
pub fn strip_ansi(text: &str) -> Cow<'_, str> {
    ANSI_RE.replace_all(text, "")
}

/// Display width of `text` once styling is removed.
#[must_use]
pub fn visible_width(text: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(text).as_ref())
}

/// Uppercase the visible text of `text`, leaving escape sequences intact.
#[must_use]
pub fn uppercase_visible(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for m in ANSI_RE.find_iter(text) {
        out.push_str(&text[last..m.start()].to_uppercase());
        out.push_str(m.as_str());
        last = m.end();
    }
    out.push_str(&text[last..].to_uppercase());
    out
}

fn is_reset(seq: &str) -> bool {
    seq == RESET || seq == "\x1b[m"
}

/// Close styles left open at the end of each line and reopen them on the
/// next, so every line renders correctly on its own.
///
/// Lines without styling pass through untouched.
#[must_use]
pub fn carry_styles(lines: Vec<String>) -> Vec<String> {
    let mut active: Vec<String> = Vec::new();
    lines
        .into_iter()
        .map(|line| {
            let reopened = active.concat();
            for m in ANSI_RE.find_iter(&line) {
                if is_reset(m.as_str()) {
                    active.clear();
                } else {
                    active.push(m.as_str().to_string());
                }
            }
            if reopened.is_empty() && active.is_empty() {
                return line;
            }
            let mut out = reopened;
            out.push_str(&line);
            if !active.is_empty() {
                out.push_str(RESET);
            }
            out
        })
        .collect()
}
