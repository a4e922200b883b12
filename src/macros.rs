//! Helper macros used across the crate.

/// Lazily compile a [`Regex`] with a custom panic message.
///
/// The pattern must be a literal known to compile; the message names it so a
/// typo surfaces immediately in tests.
///
/// # Examples
///
/// ```
/// use std::sync::LazyLock;
///
/// use regex::Regex;
/// static HEADING: LazyLock<Regex> = parselt::lazy_regex!(r"<h2[^>]*>", "h2 opening tag");
/// assert!(HEADING.is_match(r#"<h2 id="intro">"#));
/// ```
#[macro_export]
macro_rules! lazy_regex {
    ($pattern:expr, $msg:expr $(,)?) => {
        LazyLock::new(|| Regex::new($pattern).expect($msg))
    };
}
