//! Tag recognition for single lines of compiled markup.
//!
//! The matcher is deliberately line oriented: it knows the fixed tag
//! vocabulary the compiler emits and nothing else. Opening tags may carry
//! arbitrary attributes; only `class="language-…"` on code fences and the
//! `start` attribute of ordered lists are ever read.

use std::{borrow::Cow, sync::LazyLock};

use regex::Regex;

static HEADER_RES: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    [1, 2, 3, 4].map(|level| {
        Regex::new(&format!(r"<h{level}[^>]*>(.*?)</h{level}>")).expect("valid header regex")
    })
});

static HEADER_OPEN_RE: LazyLock<Regex> =
    crate::lazy_regex!(r"<h([1-4])(?:\s[^>]*)?>", "header opening tag");

static LANGUAGE_RE: LazyLock<Regex> =
    crate::lazy_regex!(r#"class="language-([^"]*)""#, "code language attribute");

static ANY_TAG_RE: LazyLock<Regex> = crate::lazy_regex!(r"<[^>]*>", "generic tag");

static LIST_TAG_RE: LazyLock<Regex> =
    crate::lazy_regex!(r"<(/?)(ol|ul)(\s[^>]*)?>", "list container tag");

static START_ATTR_RE: LazyLock<Regex> =
    crate::lazy_regex!(r#"start="(\d+)""#, "ordered list start attribute");

static QUOTE_TAG_RE: LazyLock<Regex> =
    crate::lazy_regex!(r"<(/?)blockquote(\s[^>]*)?>", "blockquote tag");

static CHECKBOX_RE: LazyLock<Regex> =
    crate::lazy_regex!(r#"<input[^>]*type="checkbox"[^>]*>"#, "task list checkbox");

static RULE_RE: LazyLock<Regex> = crate::lazy_regex!(r"^<hr\s*/?>$", "thematic break");

static ITEM_OPEN_RE: LazyLock<Regex> = crate::lazy_regex!(r"<li(?:\s[^>]*)?>", "list item tag");

static ITEM_TAG_RE: LazyLock<Regex> =
    crate::lazy_regex!(r"<li(?:\s[^>]*)?>|</li>", "list item open or close tag");

static PARAGRAPH_OPEN_RE: LazyLock<Regex> =
    crate::lazy_regex!(r"<p(?:\s[^>]*)?>", "paragraph opening tag");

static BREAK_RE: LazyLock<Regex> = crate::lazy_regex!(r"<br\s*/?>", "hard line break");

static FENCE_OPEN_RE: LazyLock<Regex> =
    crate::lazy_regex!(r"<pre[^>]*>\s*<code[^>]*>", "code fence opening");

static FENCE_CLOSE_RE: LazyLock<Regex> =
    crate::lazy_regex!(r"</code>\s*</pre>", "code fence closing");

/// Extract the trimmed inner text of a level `level` header on `line`.
///
/// The opening and closing tags must sit on the same line. Returns `None`
/// when `level` is outside `1..=4` or no complete header is present.
///
/// # Examples
///
/// ```
/// use parselt::tags::extract_header_content;
/// let line = r#"<h2 id="quick-start">Quick Start</h2>"#;
/// assert_eq!(extract_header_content(line, 2).as_deref(), Some("Quick Start"));
/// assert_eq!(extract_header_content(line, 3), None);
/// ```
#[must_use]
pub fn extract_header_content(line: &str, level: u8) -> Option<String> {
    let idx = usize::from(level).checked_sub(1)?;
    let re = HEADER_RES.get(idx)?;
    re.captures(line)
        .map(|cap| cap[1].trim().to_string())
}

/// Return the header level whose opening tag appears on `line`, if any.
#[must_use]
pub fn header_level(line: &str) -> Option<u8> {
    HEADER_OPEN_RE
        .captures(line)
        .and_then(|cap| cap[1].parse().ok())
}

/// Return the language named by a `class="language-<name>"` attribute.
///
/// An empty name is treated as absent.
#[must_use]
pub fn extract_code_language(line: &str) -> Option<String> {
    LANGUAGE_RE
        .captures(line)
        .map(|cap| cap[1].to_string())
        .filter(|lang| !lang.is_empty())
}

/// Strip every `<…>` tag from `text`, leaving the text between them.
///
/// # Examples
///
/// ```
/// use parselt::tags::remove_all_tags;
/// assert_eq!(remove_all_tags("<p>Hello <b>there</b></p>"), "Hello there");
/// ```
#[must_use]
pub fn remove_all_tags(text: &str) -> Cow<'_, str> {
    ANY_TAG_RE.replace_all(text, "")
}

/// A list container tag found on a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListTag {
    /// `<ol>` with its first number (`start` attribute, default 1).
    OpenOrdered(u64),
    /// `<ul>`.
    OpenUnordered,
    /// `</ol>` or `</ul>`.
    Close,
}

/// Collect the list container tags on `line` in order of appearance.
#[must_use]
pub fn list_tags(line: &str) -> Vec<ListTag> {
    LIST_TAG_RE
        .captures_iter(line)
        .map(|cap| {
            if !cap[1].is_empty() {
                return ListTag::Close;
            }
            if &cap[2] == "ul" {
                return ListTag::OpenUnordered;
            }
            let start = cap
                .get(3)
                .and_then(|attrs| START_ATTR_RE.captures(attrs.as_str()))
                .and_then(|c| c[1].parse().ok())
                .unwrap_or(1);
            ListTag::OpenOrdered(start)
        })
        .collect()
}

/// Remove list container tags from `line`.
#[must_use]
pub fn strip_list_tags(line: &str) -> Cow<'_, str> {
    LIST_TAG_RE.replace_all(line, "")
}

/// Count `<blockquote>` openings and `</blockquote>` closings on `line`.
#[must_use]
pub fn quote_tags(line: &str) -> (usize, usize) {
    QUOTE_TAG_RE
        .captures_iter(line)
        .fold((0, 0), |(open, close), cap| {
            if cap[1].is_empty() {
                (open + 1, close)
            } else {
                (open, close + 1)
            }
        })
}

/// Remove blockquote tags from `line`.
#[must_use]
pub fn strip_quote_tags(line: &str) -> Cow<'_, str> {
    QUOTE_TAG_RE.replace_all(line, "")
}

/// Detect a task-list checkbox, returning whether it is ticked.
#[must_use]
pub fn checkbox_state(line: &str) -> Option<bool> {
    CHECKBOX_RE
        .find(line)
        .map(|m| m.as_str().contains("checked"))
}

/// Report whether `line` is a thematic break.
#[must_use]
pub fn is_rule(line: &str) -> bool {
    RULE_RE.is_match(line)
}

/// Report whether `line` opens a list item.
#[must_use]
pub fn has_item_tag(line: &str) -> bool {
    ITEM_OPEN_RE.is_match(line)
}

/// Remove `<li>` and `</li>` tags from `line`.
#[must_use]
pub fn strip_item_tags(line: &str) -> Cow<'_, str> {
    ITEM_TAG_RE.replace_all(line, "")
}

/// Byte offset just past the first `<p>` opening tag on `line`.
#[must_use]
pub fn paragraph_open(line: &str) -> Option<usize> {
    PARAGRAPH_OPEN_RE.find(line).map(|m| m.end())
}

/// Split `text` at `<br>` hard line breaks.
pub fn split_hard_breaks(text: &str) -> impl Iterator<Item = &str> {
    BREAK_RE.split(text)
}

/// Byte offset just past a `<pre><code …>` fence opening on `line`.
#[must_use]
pub fn fence_open(line: &str) -> Option<usize> {
    FENCE_OPEN_RE.find(line).map(|m| m.end())
}

/// Byte offset where a `</code></pre>` fence closing starts on `line`.
#[must_use]
pub fn fence_close(line: &str) -> Option<usize> {
    FENCE_CLOSE_RE.find(line).map(|m| m.start())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("<h1>Title</h1>", 1, Some("Title"))]
    #[case("<h2>Quick Start</h2>", 2, Some("Quick Start"))]
    #[case(r#"<h3 id="x" class="y">  Spaced  </h3>"#, 3, Some("Spaced"))]
    #[case("<h4>Deep</h4>", 4, Some("Deep"))]
    #[case("<h2>Quick Start</h2>", 1, None)]
    #[case("<h2>Unclosed", 2, None)]
    #[case("<h5>Five</h5>", 5, None)]
    #[case("<h1>Zero</h1>", 0, None)]
    fn extracts_header_content(
        #[case] line: &str,
        #[case] level: u8,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(extract_header_content(line, level).as_deref(), expected);
    }

    #[test]
    fn header_content_is_non_greedy() {
        let line = "<h2>One</h2><h2>Two</h2>";
        assert_eq!(extract_header_content(line, 2).as_deref(), Some("One"));
    }

    #[rstest]
    #[case("<h1>x</h1>", Some(1))]
    #[case(r#"<h4 id="a">x</h4>"#, Some(4))]
    #[case("<h5>x</h5>", None)]
    #[case("<hr />", None)]
    fn detects_header_level(#[case] line: &str, #[case] expected: Option<u8>) {
        assert_eq!(header_level(line), expected);
    }

    #[rstest]
    #[case(r#"<pre><code class="language-go">"#, Some("go"))]
    #[case(r#"<pre><code class="language-c++">int x;"#, Some("c++"))]
    #[case("<pre><code>", None)]
    #[case(r#"<pre><code class="language-">"#, None)]
    fn extracts_code_language(#[case] line: &str, #[case] expected: Option<&str>) {
        assert_eq!(extract_code_language(line).as_deref(), expected);
    }

    #[test]
    fn removes_tags_with_attributes() {
        assert_eq!(
            remove_all_tags(r#"<a href="x">link</a> and <br />break"#),
            "link and break"
        );
    }

    #[test]
    fn recognises_list_tags_in_order() {
        assert_eq!(
            list_tags(r#"</ul><ol start="3"><ul>"#),
            vec![
                ListTag::Close,
                ListTag::OpenOrdered(3),
                ListTag::OpenUnordered
            ]
        );
        assert_eq!(list_tags("<ol>"), vec![ListTag::OpenOrdered(1)]);
        assert!(list_tags("<li>item</li>").is_empty());
    }

    #[test]
    fn strips_list_tags_only() {
        assert_eq!(strip_list_tags("<ul><li>x</li>"), "<li>x</li>");
    }

    #[test]
    fn counts_quote_tags() {
        assert_eq!(quote_tags("<blockquote>"), (1, 0));
        assert_eq!(quote_tags("<blockquote>hi</blockquote>"), (1, 1));
        assert_eq!(quote_tags("</blockquote></blockquote>"), (0, 2));
    }

    #[rstest]
    #[case(r#"<li><input disabled="" type="checkbox"/>"#, Some(false))]
    #[case(r#"<li><input disabled="" type="checkbox" checked=""/>"#, Some(true))]
    #[case("<li>plain</li>", None)]
    fn reads_checkbox_state(#[case] line: &str, #[case] expected: Option<bool>) {
        assert_eq!(checkbox_state(line), expected);
    }

    #[rstest]
    #[case("<hr />", true)]
    #[case("<hr>", true)]
    #[case("<hr/>", true)]
    #[case("<hr> trailing", false)]
    fn detects_rules(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(is_rule(line), expected);
    }

    #[test]
    fn paragraph_tag_is_not_pre() {
        assert_eq!(paragraph_open("<p>text</p>"), Some(3));
        assert_eq!(paragraph_open(r#"<p class="x">text"#), Some(13));
        assert_eq!(paragraph_open("<pre><code>"), None);
    }

    #[test]
    fn locates_fence_markers() {
        let open = r#"<pre><code class="language-go">func main() {}"#;
        let end = fence_open(open).expect("fence opening");
        assert_eq!(&open[end..], "func main() {}");
        assert_eq!(fence_close("x</code></pre>"), Some(1));
        assert_eq!(fence_close("<code>x</code>"), None);
    }

    #[test]
    fn splits_on_every_break_form() {
        let parts: Vec<_> = split_hard_breaks("a<br>b<br/>c<br />d").collect();
        assert_eq!(parts, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn strips_item_tags() {
        assert!(has_item_tag(r#"<li class="task">x</li>"#));
        assert!(!has_item_tag("<link>"));
        assert_eq!(strip_item_tags("<li>x</li>"), "x");
    }
}
