//! Utility helpers shared across integration tests.
#![allow(dead_code, unused_macros, reason = "each test binary uses a subset")]

use parselt::layout::strip_ansi;

/// Build a `Vec<String>` from a list of string slices.
macro_rules! lines_vec {
    ($($line:expr),* $(,)?) => {
        vec![$($line.to_string()),*]
    };
}

/// Split rendered terminal output into lines with ANSI styling removed.
///
/// Assertions built on this hold whether colour is on or off.
pub fn plain(rendered: &str) -> Vec<String> {
    rendered
        .split('\n')
        .map(|line| strip_ansi(line).into_owned())
        .collect()
}

/// Assert that no two consecutive lines are both empty.
pub fn assert_no_adjacent_blanks(lines: &[String]) {
    for pair in lines.windows(2) {
        assert!(
            !(pair[0].is_empty() && pair[1].is_empty()),
            "adjacent blank lines in {lines:#?}"
        );
    }
}

/// Assert that every backtick on every line is paired.
pub fn assert_code_spans_whole(lines: &[String]) {
    for line in lines {
        assert_eq!(line.matches('`').count() % 2, 0, "split code span in {line:?}");
    }
}
