//! Decoding of the character references emitted by the markup compiler.
//!
//! Only the five references the compiler produces are recognised. Decoding
//! happens in a single left-to-right pass, so an escaped ampersand such as
//! `&amp;lt;` yields the literal text `&lt;` rather than `<`.

use std::{borrow::Cow, sync::LazyLock};

use regex::{Captures, Regex};

static ENTITY_RE: LazyLock<Regex> =
    crate::lazy_regex!(r"&(lt|gt|amp|quot|#39);", "character reference pattern");

fn decode(name: &str) -> &'static str {
    match name {
        "lt" => "<",
        "gt" => ">",
        "amp" => "&",
        "quot" => "\"",
        _ => "'",
    }
}

/// Replace `&lt;`, `&gt;`, `&amp;`, `&quot;` and `&#39;` with their literal
/// characters.
///
/// Text without any reference is returned borrowed.
///
/// # Examples
///
/// ```
/// use parselt::unescape_markup;
/// assert_eq!(unescape_markup("a &lt;b&gt; &amp; &quot;c&quot;"), r#"a <b> & "c""#);
/// assert_eq!(unescape_markup("&amp;lt;"), "&lt;");
/// ```
#[must_use]
pub fn unescape_markup(text: &str) -> Cow<'_, str> {
    ENTITY_RE.replace_all(text, |caps: &Captures<'_>| decode(&caps[1]))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("&lt;", "<")]
    #[case("&gt;", ">")]
    #[case("&amp;", "&")]
    #[case("&quot;", "\"")]
    #[case("&#39;", "'")]
    #[case("fn f() -&gt; Vec&lt;T&gt;", "fn f() -> Vec<T>")]
    fn decodes_known_references(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(unescape_markup(input), expected);
    }

    #[test]
    fn leaves_unknown_references_alone() {
        assert_eq!(unescape_markup("&nbsp;&copy;"), "&nbsp;&copy;");
    }

    #[test]
    fn borrows_when_nothing_matches() {
        assert!(matches!(unescape_markup("plain text"), Cow::Borrowed(_)));
    }

    #[test]
    fn decoded_ampersand_is_not_decoded_again() {
        assert_eq!(unescape_markup("&amp;quot;"), "&quot;");
        assert_eq!(unescape_markup("&amp;amp;"), "&amp;");
    }

    #[rstest]
    #[case("x &lt; y &amp;&amp; y &gt; z")]
    #[case("say &quot;hi&quot; &#39;there&#39;")]
    #[case("no references")]
    fn unescape_is_idempotent(#[case] input: &str) {
        let once = unescape_markup(input).into_owned();
        assert_eq!(unescape_markup(&once), once);
    }
}
