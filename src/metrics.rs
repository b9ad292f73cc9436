//! Text metrics module
//!
//! Computes the character, line and byte statistics shown by the counter.
//! Everything here is pure: no state, no I/O, and every call recomputes from
//! the full input.
//!
//! Character counts use the UTF-16 code unit as the text unit, so a character
//! outside the Basic Multilingual Plane (most emoji) counts as two. This keeps
//! `utf16_bytes == 2 * total_chars` an exact byte length rather than an
//! estimate.

mod measure;
mod stat_field;
mod text_stats;

pub use measure::measure;
pub use stat_field::{Language, StatField};
pub use text_stats::TextStats;
