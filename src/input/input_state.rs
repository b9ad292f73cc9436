use ratatui::style::Style;
use tui_textarea::TextArea;

use crate::metrics::Language;
use crate::theme;

/// Line separator used to rebuild the buffer from text-area lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    /// CRLF only when every `\n` in `text` is preceded by `\r`
    pub fn detect(text: &str) -> Self {
        let line_feeds = text.matches('\n').count();
        let crlf_pairs = text.matches("\r\n").count();
        if crlf_pairs > 0 && crlf_pairs == line_feeds {
            LineEnding::CrLf
        } else {
            LineEnding::Lf
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            LineEnding::Lf => "LF",
            LineEnding::CrLf => "CRLF",
        }
    }
}

pub struct InputState {
    pub textarea: TextArea<'static>,
    line_ending: LineEnding,
    language: Language,
}

impl InputState {
    pub fn new(language: Language) -> Self {
        Self {
            textarea: build_textarea(Vec::new(), language),
            line_ending: LineEnding::Lf,
            language,
        }
    }

    /// The full buffer, joined with the detected line ending
    pub fn text(&self) -> String {
        self.textarea.lines().join(self.line_ending.as_str())
    }

    pub fn is_empty(&self) -> bool {
        let lines = self.textarea.lines();
        lines.len() == 1 && lines[0].is_empty()
    }

    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// Replace the whole buffer, keeping CRLF files byte-for-byte intact
    pub fn set_text(&mut self, text: &str) {
        self.line_ending = LineEnding::detect(text);
        let segments: Vec<&str> = text.split('\n').collect();
        let last = segments.len() - 1;
        // Only segments followed by '\n' end in the CR of a CRLF pair
        let lines: Vec<String> = segments
            .into_iter()
            .enumerate()
            .map(|(i, line)| match self.line_ending {
                LineEnding::CrLf if i < last => line.strip_suffix('\r').unwrap_or(line),
                _ => line,
            })
            .map(String::from)
            .collect();
        self.textarea = build_textarea(lines, self.language);
    }

    pub fn clear(&mut self) {
        self.line_ending = LineEnding::Lf;
        self.textarea = build_textarea(Vec::new(), self.language);
    }

    /// Insert pasted text at the cursor, returns whether the buffer changed
    pub fn insert_paste(&mut self, text: &str) -> bool {
        let normalized = normalize_paste(text);
        self.textarea.insert_str(normalized)
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

/// Terminals deliver bracketed paste with `\r`, `\r\n` or `\n` separators,
/// so a pasted lone `\r` is taken as a line break
fn normalize_paste(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

fn build_textarea(lines: Vec<String>, language: Language) -> TextArea<'static> {
    let mut textarea = TextArea::new(lines);
    // Tab must insert a real '\t' so typed text counts as typed
    textarea.set_hard_tab_indent(true);
    textarea.set_cursor_line_style(Style::default());
    textarea.set_cursor_style(theme::input::CURSOR);
    textarea.set_style(Style::default().fg(theme::input::TEXT));
    textarea.set_placeholder_text(match language {
        Language::En => "Type or paste text here...",
        Language::Ja => "ここにテキストを入力してください...",
    });
    textarea.set_placeholder_style(Style::default().fg(theme::input::PLACEHOLDER));
    textarea
}

#[cfg(test)]
#[path = "input_state_tests.rs"]
mod input_state_tests;
