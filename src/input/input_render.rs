use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders},
};

use crate::app::App;
use crate::metrics::Language;
use crate::theme;

pub fn render_field(app: &mut App, frame: &mut Frame, area: Rect) -> Rect {
    let title = match app.language {
        Language::En => " Text ",
        Language::Ja => " テキスト ",
    };
    let mut title_spans = vec![Span::styled(title, theme::input::TITLE)];

    if app.is_loading() {
        title_spans.push(Span::styled(
            "(loading...) ",
            Style::default().fg(theme::input::LOADING_HINT),
        ));
    }

    let line_ending_badge = Line::from(Span::styled(
        format!(" {} ", app.input.line_ending().name()),
        Style::default().fg(theme::input::PLACEHOLDER),
    ));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(title_spans))
        .title_top(line_ending_badge.alignment(Alignment::Right))
        .border_style(Style::default().fg(theme::input::BORDER));

    app.input.textarea.set_block(block);
    frame.render_widget(&app.input.textarea, area);
    area
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MojicountError;
    use crate::input::FileLoader;
    use crate::input::loader::LoadingState;
    use crate::test_utils::test_helpers::test_app;
    use ratatui::{Terminal, backend::TestBackend};

    fn render_field_to_string(app: &mut App) -> String {
        let backend = TestBackend::new(60, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                render_field(app, f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_field_shows_text_and_lf_badge() {
        let mut app = test_app("first\nsecond");
        let output = render_field_to_string(&mut app);

        assert!(output.contains("Text"));
        assert!(output.contains("first"));
        assert!(output.contains("second"));
        assert!(output.contains(" LF "));
    }

    #[test]
    fn test_field_shows_placeholder_when_empty() {
        let mut app = test_app("");
        let output = render_field_to_string(&mut app);

        assert!(output.contains("Type or paste text here"));
    }

    #[test]
    fn test_field_shows_loading_hint() {
        // Keep the sender alive so the loader stays in the Loading state
        let (_tx, rx) = std::sync::mpsc::channel::<Result<String, MojicountError>>();
        let mut app = test_app("");
        app.loader = Some(FileLoader {
            state: LoadingState::Loading,
            rx: Some(rx),
        });

        let output = render_field_to_string(&mut app);

        assert!(output.contains("(loading...)"));
    }
}
