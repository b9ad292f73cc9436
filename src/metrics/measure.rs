use memchr::{memchr_iter, memmem};

use crate::metrics::TextStats;

/// Compute every metric for `input` in one pass over its characters
///
/// Total over all strings. Line breaks are `\r\n` or a lone `\n`; a lone `\r`
/// is kept as an ordinary (whitespace) character and does not start a line.
pub fn measure(input: &str) -> TextStats {
    if input.is_empty() {
        return TextStats::default();
    }

    let bytes = input.as_bytes();
    // Every line break, CRLF or LF, contains exactly one '\n'
    let line_feeds = memchr_iter(b'\n', bytes).count();
    let crlf_pairs = memmem::find_iter(bytes, b"\r\n").count();

    let mut total_chars = 0;
    let mut whitespace_units = 0;
    for ch in input.chars() {
        let units = ch.len_utf16();
        total_chars += units;
        if ch.is_whitespace() {
            whitespace_units += units;
        }
    }

    TextStats {
        total_chars,
        chars_without_newlines: total_chars - line_feeds - crlf_pairs,
        chars_without_spaces: total_chars - whitespace_units,
        lines: line_feeds + 1,
        utf8_bytes: input.len(),
        utf16_bytes: total_chars * 2,
    }
}

#[cfg(test)]
#[path = "measure_tests.rs"]
mod measure_tests;
