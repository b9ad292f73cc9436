//! Display metadata for each statistic

use serde::Deserialize;

use crate::metrics::TextStats;

/// Language used for field labels and units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ja,
}

/// One of the six statistics, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatField {
    TotalChars,
    CharsWithoutNewlines,
    CharsWithoutSpaces,
    Lines,
    Utf8Bytes,
    Utf16Bytes,
}

impl StatField {
    pub const COUNT: usize = 6;

    pub fn all() -> &'static [StatField] {
        &[
            StatField::TotalChars,
            StatField::CharsWithoutNewlines,
            StatField::CharsWithoutSpaces,
            StatField::Lines,
            StatField::Utf8Bytes,
            StatField::Utf16Bytes,
        ]
    }

    pub fn value(&self, stats: &TextStats) -> usize {
        match self {
            StatField::TotalChars => stats.total_chars,
            StatField::CharsWithoutNewlines => stats.chars_without_newlines,
            StatField::CharsWithoutSpaces => stats.chars_without_spaces,
            StatField::Lines => stats.lines,
            StatField::Utf8Bytes => stats.utf8_bytes,
            StatField::Utf16Bytes => stats.utf16_bytes,
        }
    }

    /// Serialized key, same as the `TextStats` field name
    pub fn key(&self) -> &'static str {
        match self {
            StatField::TotalChars => "total_chars",
            StatField::CharsWithoutNewlines => "chars_without_newlines",
            StatField::CharsWithoutSpaces => "chars_without_spaces",
            StatField::Lines => "lines",
            StatField::Utf8Bytes => "utf8_bytes",
            StatField::Utf16Bytes => "utf16_bytes",
        }
    }

    pub fn label(&self, language: Language) -> &'static str {
        match (language, self) {
            (Language::En, StatField::TotalChars) => "Characters",
            (Language::En, StatField::CharsWithoutNewlines) => "Characters (excluding newlines)",
            (Language::En, StatField::CharsWithoutSpaces) => {
                "Characters (excluding newlines and spaces)"
            }
            (Language::En, StatField::Lines) => "Lines",
            (Language::En, StatField::Utf8Bytes) => "Bytes (UTF-8)",
            (Language::En, StatField::Utf16Bytes) => "Bytes (UTF-16)",
            (Language::Ja, StatField::TotalChars) => "文字数",
            (Language::Ja, StatField::CharsWithoutNewlines) => "改行を除いた文字数",
            (Language::Ja, StatField::CharsWithoutSpaces) => "改行、空白を除いた文字数",
            (Language::Ja, StatField::Lines) => "行数",
            (Language::Ja, StatField::Utf8Bytes) => "バイト数 (UTF-8)",
            (Language::Ja, StatField::Utf16Bytes) => "バイト数 (UTF-16)",
        }
    }

    pub fn unit(&self, language: Language) -> &'static str {
        match (language, self) {
            (
                Language::En,
                StatField::TotalChars
                | StatField::CharsWithoutNewlines
                | StatField::CharsWithoutSpaces,
            ) => "chars",
            (Language::En, StatField::Lines) => "lines",
            (Language::En, StatField::Utf8Bytes | StatField::Utf16Bytes) => "bytes",
            (
                Language::Ja,
                StatField::TotalChars
                | StatField::CharsWithoutNewlines
                | StatField::CharsWithoutSpaces,
            ) => "文字",
            (Language::Ja, StatField::Lines) => "行",
            (Language::Ja, StatField::Utf8Bytes | StatField::Utf16Bytes) => "バイト",
        }
    }
}
