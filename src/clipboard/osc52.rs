//! OSC 52 clipboard backend
//!
//! Lets the terminal emulator own the clipboard, which is the only option
//! over SSH or inside tmux.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use std::io::{self, Write};

use super::backend::{ClipboardError, ClipboardResult};

const OSC52_PREFIX: &str = "\x1b]52;c;";
const BEL: &str = "\x07";

pub fn copy(text: &str) -> ClipboardResult {
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(encode_osc52(text).as_bytes())
        .and_then(|_| stdout.flush())
        .map_err(|_| ClipboardError::WriteError)
}

/// `ESC ] 52 ; c ; <base64> BEL`, `c` selecting the clipboard over primary
pub fn encode_osc52(text: &str) -> String {
    format!("{}{}{}", OSC52_PREFIX, STANDARD.encode(text), BEL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn decode_payload(sequence: &str) -> String {
        let payload = sequence
            .strip_prefix(OSC52_PREFIX)
            .and_then(|rest| rest.strip_suffix(BEL))
            .expect("sequence should be framed by the OSC 52 prefix and BEL");
        String::from_utf8(STANDARD.decode(payload).unwrap()).unwrap()
    }

    #[test]
    fn test_encode_osc52_simple() {
        assert_eq!(encode_osc52("hello"), "\x1b]52;c;aGVsbG8=\x07");
    }

    #[test]
    fn test_encode_osc52_empty() {
        assert_eq!(encode_osc52(""), "\x1b]52;c;\x07");
    }

    #[test]
    fn test_encode_osc52_multiline_report() {
        let report = "Lines: 2 lines\nBytes (UTF-8): 4 bytes\n";
        assert_eq!(decode_payload(&encode_osc52(report)), report);
    }

    #[test]
    fn test_encode_osc52_japanese_report() {
        assert_eq!(decode_payload(&encode_osc52("文字数: 3 文字")), "文字数: 3 文字");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Feature: clipboard, Property 1: The payload decodes back to the copied text
        #[test]
        fn prop_osc52_payload_decodes_to_input(text in ".*") {
            prop_assert_eq!(decode_payload(&encode_osc52(&text)), text);
        }
    }
}
