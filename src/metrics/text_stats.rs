//! Type definitions for text statistics

use serde::Serialize;

/// Size metrics for one snapshot of the input text
///
/// Produced fresh by every [`measure`](super::measure) call and never mutated
/// afterwards. The default value is the all-zero record, which is also what
/// the empty string measures to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TextStats {
    /// Length in UTF-16 code units
    pub total_chars: usize,
    /// Length with every `\r\n` and lone `\n` removed
    pub chars_without_newlines: usize,
    /// Length with every whitespace character removed
    pub chars_without_spaces: usize,
    /// Number of line segments, 0 only for empty input
    pub lines: usize,
    /// Encoded size in UTF-8
    pub utf8_bytes: usize,
    /// Encoded size in UTF-16, always `2 * total_chars`
    pub utf16_bytes: usize,
}

impl TextStats {
    pub fn is_empty(&self) -> bool {
        self.total_chars == 0
    }
}
