//! Resolution of inline code, bold, italic and strikethrough spans.
//!
//! Each tag family is replaced in one pass over the whole fragment, in the
//! order code, bold, italic, strikethrough. Replacement is not recursive and
//! unmatched tags stay in the text for the final tag strip to remove. That
//! strip never reaches into code spans, so `<code>Vec&lt;T&gt;</code>` keeps
//! its generics.

use std::sync::LazyLock;

use colored::Colorize;
use regex::{Captures, Regex};

use crate::tags::remove_all_tags;

static CODE_RE: LazyLock<Regex> =
    crate::lazy_regex!(r"<code(?:\s[^>]*)?>(.*?)</code>", "inline code span");
static STRONG_RE: LazyLock<Regex> =
    crate::lazy_regex!(r"<strong(?:\s[^>]*)?>(.*?)</strong>", "bold span");
static EM_RE: LazyLock<Regex> = crate::lazy_regex!(r"<em(?:\s[^>]*)?>(.*?)</em>", "italic span");
static DEL_RE: LazyLock<Regex> =
    crate::lazy_regex!(r"<del(?:\s[^>]*)?>(.*?)</del>", "strikethrough span");
static HELD_RE: LazyLock<Regex> =
    crate::lazy_regex!(r"\x{E000}(\d+)\x{E001}", "held code span");

// Private-use markers standing in for code spans while tags are stripped.
const HELD_OPEN: char = '\u{E000}';
const HELD_CLOSE: char = '\u{E001}';

/// How resolved spans are written back into the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InlineStyle {
    /// Markdown markers: `` `code` ``, `**bold**`, `*italic*`, `~~struck~~`.
    #[default]
    Markdown,
    /// ANSI styled text. Code spans keep their backticks.
    Terminal,
}

impl InlineStyle {
    fn code(self, content: &str) -> String {
        match self {
            Self::Markdown => format!("`{content}`"),
            Self::Terminal => format!("`{content}`").bright_cyan().on_black().to_string(),
        }
    }

    fn bold(self, content: &str) -> String {
        match self {
            Self::Markdown => format!("**{content}**"),
            Self::Terminal => content.bold().to_string(),
        }
    }

    fn italic(self, content: &str) -> String {
        match self {
            Self::Markdown => format!("*{content}*"),
            Self::Terminal => content.italic().to_string(),
        }
    }

    fn struck(self, content: &str) -> String {
        match self {
            Self::Markdown => format!("~~{content}~~"),
            Self::Terminal => content.strikethrough().to_string(),
        }
    }
}

fn replace_family(text: &str, re: &Regex, render: impl Fn(&str) -> String) -> String {
    re.replace_all(text, |caps: &Captures<'_>| render(caps[1].trim()))
        .into_owned()
}

/// Replace inline span tags in `fragment` according to `style`.
///
/// # Examples
///
/// ```
/// use parselt::{InlineStyle, resolve_inline};
/// let out = resolve_inline("Run <code>cargo</code> <strong>now</strong>", InlineStyle::Markdown);
/// assert_eq!(out, "Run `cargo` **now**");
/// ```
#[must_use]
pub fn resolve_inline(fragment: &str, style: InlineStyle) -> String {
    let text = replace_family(fragment, &CODE_RE, |c| style.code(c));
    let text = replace_family(&text, &STRONG_RE, |c| style.bold(c));
    let text = replace_family(&text, &EM_RE, |c| style.italic(c));
    replace_family(&text, &DEL_RE, |c| style.struck(c))
}

/// Resolve inline spans in `fragment`, then strip every remaining tag
/// outside the code spans.
///
/// Code spans are swapped for placeholders before the other families and
/// the tag strip run, and restored afterwards.
pub(crate) fn resolve_and_strip(fragment: &str, style: InlineStyle) -> String {
    let mut spans = Vec::new();
    let held = CODE_RE.replace_all(fragment, |caps: &Captures<'_>| {
        spans.push(style.code(caps[1].trim()));
        format!("{HELD_OPEN}{}{HELD_CLOSE}", spans.len() - 1)
    });
    let text = replace_family(&held, &STRONG_RE, |c| style.bold(c));
    let text = replace_family(&text, &EM_RE, |c| style.italic(c));
    let text = replace_family(&text, &DEL_RE, |c| style.struck(c));
    let stripped = remove_all_tags(&text);
    HELD_RE
        .replace_all(&stripped, |caps: &Captures<'_>| {
            caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|i| spans.get(i))
                .map_or_else(|| caps[0].to_string(), Clone::clone)
        })
        .into_owned()
}
