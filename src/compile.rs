//! Adapter around the upstream markdown compiler.
//!
//! Source markdown is compiled to markup with `pulldown-cmark`, which emits
//! one block tag per line in the vocabulary the block interpreter reads.

use pulldown_cmark::{Event, Options, Parser, html};
use tracing::debug;

/// Settings for [`markdown_to_markup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompileOptions {
    /// Emit soft line breaks as `<br />`, keeping the author's line
    /// structure inside paragraphs.
    pub hard_wraps: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self { hard_wraps: true }
    }
}

// Tables stay off: the block interpreter has no table support, so pipe
// tables pass through as paragraph text.
fn parser_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS
}

/// Compile markdown `source` to markup.
///
/// # Examples
///
/// ```
/// use parselt::compile::{CompileOptions, markdown_to_markup};
/// let markup = markdown_to_markup("## Quick Start", &CompileOptions::default());
/// assert_eq!(markup, "<h2>Quick Start</h2>\n");
/// ```
#[must_use]
pub fn markdown_to_markup(source: &str, options: &CompileOptions) -> String {
    let hard_wraps = options.hard_wraps;
    let events = Parser::new_ext(source, parser_options()).map(move |event| match event {
        Event::SoftBreak if hard_wraps => Event::HardBreak,
        other => other,
    });
    let mut markup = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut markup, events);
    debug!(source = source.len(), markup = markup.len(), "compiled markdown");
    markup
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compile(source: &str) -> String {
        markdown_to_markup(source, &CompileOptions::default())
    }

    #[test]
    fn fenced_code_carries_language_class() {
        let markup = compile("```go\nfunc main() {}\n```\n");
        assert_eq!(
            markup,
            "<pre><code class=\"language-go\">func main() {}\n</code></pre>\n"
        );
    }

    #[test]
    fn soft_breaks_become_hard_breaks_by_default() {
        assert!(compile("one\ntwo").contains("<br />"));
        let soft = markdown_to_markup("one\ntwo", &CompileOptions { hard_wraps: false });
        assert!(!soft.contains("<br"));
    }

    #[test]
    fn task_lists_emit_checkboxes() {
        let markup = compile("- [x] done\n- [ ] open\n");
        assert!(markup.contains("checked"));
        assert_eq!(markup.matches("type=\"checkbox\"").count(), 2);
    }

    #[test]
    fn strikethrough_is_enabled() {
        assert!(compile("~~gone~~").contains("<del>gone</del>"));
    }

    #[test]
    fn tables_are_left_as_text() {
        let markup = compile("| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(!markup.contains("<table>"));
    }
}
