//! Output projectors.
//!
//! Both projectors consume the same [`Block`](crate::Block) sequence and are
//! the only place where the two output surfaces diverge. Neither keeps state
//! between calls.

pub mod markdown;
pub mod terminal;
