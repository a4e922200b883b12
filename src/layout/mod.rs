//! Text layout for the terminal surface.
//!
//! Prose is packed greedily into lines while inline code spans stay whole.
//! Code lines are hard-wrapped at punctuation with a hanging continuation
//! indent. Widths are measured on the visible text, so ANSI styling applied
//! by the inline resolver never counts towards a line.

mod ansi;
mod code;
mod prose;
mod segment;

pub(crate) use ansi::RESET;
pub use ansi::{carry_styles, strip_ansi, uppercase_visible, visible_width};
pub use code::{MIN_CODE_WIDTH, indentation_width, wrap_code_line};
pub use prose::wrap_prose;
pub use segment::{TextSegment, segment_text};
