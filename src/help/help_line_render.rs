use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::metrics::Language;
use crate::theme;

macro_rules! hints {
    ($($key:literal => $desc:literal),+ $(,)?) => {
        vec![$(($key, $desc)),+]
    };
}

fn get_context_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let live = app.stats.live_update();
    match app.language {
        Language::En => {
            if app.help.visible {
                hints!["Esc/F1" => "Close", "j/k" => "Scroll", "g/G" => "Top/Bottom"]
            } else if live {
                hints!["F1" => "Help", "Ctrl+L" => "Manual Count", "Ctrl+X" => "Reset", "Ctrl+Y" => "Copy", "Ctrl+Q" => "Print & Quit", "Ctrl+C" => "Quit"]
            } else {
                hints!["F1" => "Help", "Ctrl+R" => "Count", "Ctrl+L" => "Live Count", "Ctrl+X" => "Reset", "Ctrl+Y" => "Copy", "Ctrl+Q" => "Print & Quit", "Ctrl+C" => "Quit"]
            }
        }
        Language::Ja => {
            if app.help.visible {
                hints!["Esc/F1" => "閉じる", "j/k" => "スクロール", "g/G" => "先頭/末尾"]
            } else if live {
                hints!["F1" => "ヘルプ", "Ctrl+L" => "手動カウント", "Ctrl+X" => "リセット", "Ctrl+Y" => "コピー", "Ctrl+Q" => "出力して終了", "Ctrl+C" => "終了"]
            } else {
                hints!["F1" => "ヘルプ", "Ctrl+R" => "カウント", "Ctrl+L" => "リアルタイム", "Ctrl+X" => "リセット", "Ctrl+Y" => "コピー", "Ctrl+Q" => "出力して終了", "Ctrl+C" => "終了"]
            }
        }
    }
}

fn build_styled_spans(hints: &[(&'static str, &'static str)]) -> Vec<Span<'static>> {
    let key_style = Style::default().fg(theme::help_line::KEY);
    let desc_style = Style::default().fg(theme::help_line::DESCRIPTION);
    let sep_style = Style::default().fg(theme::help_line::SEPARATOR);

    let mut spans = Vec::with_capacity(hints.len() * 4 + 1);
    spans.push(Span::raw(" "));

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" \u{2022} ", sep_style));
        }
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, desc_style));
    }

    spans
}

pub fn render_line(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_context_hints(app);
    let spans = build_styled_spans(&hints);
    let help = Paragraph::new(Line::from(spans));
    frame.render_widget(help, area);
}
