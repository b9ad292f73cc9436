use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::help::{HelpSection, help_footer, help_sections};
use crate::metrics::Language;
use crate::theme;
use crate::widgets::popup;

const KEY_COLUMN_WIDTH: usize = 12;

/// Render the help popup
///
/// Returns the popup area, or None when the terminal is too small for it.
pub fn render_popup(app: &mut App, frame: &mut Frame) -> Option<Rect> {
    let frame_area = frame.area();

    if frame_area.width < 40 || frame_area.height < 12 {
        return None;
    }

    // 80% of the screen, min 50x12, max 72x26
    let popup_width = ((frame_area.width as f32 * 0.8) as u16)
        .clamp(50, 72)
        .min(frame_area.width.saturating_sub(2));
    let popup_height = ((frame_area.height as f32 * 0.8) as u16)
        .clamp(12, 26)
        .min(frame_area.height.saturating_sub(2));

    let popup_area = popup::centered_popup(frame_area, popup_width, popup_height);
    popup::clear_area(frame, popup_area);

    let title = match app.language {
        Language::En => " Keyboard Shortcuts ",
        Language::Ja => " キー操作 ",
    };
    let outer_block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(title, theme::help::TITLE))
        .border_style(Style::default().fg(theme::help::BORDER))
        .style(Style::default().bg(theme::help::BACKGROUND));

    let inner_area = outer_block.inner(popup_area);
    frame.render_widget(outer_block, popup_area);

    let [content_area, footer_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner_area);

    let lines = render_help_sections(help_sections(app.language));
    app.help
        .scroll
        .update_bounds(lines.len() as u32, content_area.height);

    let paragraph = Paragraph::new(Text::from(lines)).scroll((app.help.scroll.offset, 0));
    frame.render_widget(paragraph, content_area);

    let footer = Line::from(Span::styled(
        help_footer(app.language),
        Style::default().fg(theme::help::FOOTER),
    ));
    frame.render_widget(Paragraph::new(footer).centered(), footer_area);

    Some(popup_area)
}

fn render_help_sections(sections: &[HelpSection]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for (section_idx, section) in sections.iter().enumerate() {
        if section_idx > 0 {
            lines.push(Line::from(""));
        }
        if let Some(title) = section.title {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(format!("── {} ──", title), theme::help::SECTION_HEADER),
            ]));
        }

        for (key, desc) in section.entries {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:<width$}", key, width = KEY_COLUMN_WIDTH),
                    theme::help::KEY,
                ),
                Span::styled(*desc, Style::default().fg(theme::help::DESCRIPTION)),
            ]));
        }

        for note in section.notes {
            lines.push(Line::from(Span::styled(
                format!("  {}", note),
                Style::default().fg(theme::help::NOTE),
            )));
        }
    }

    lines
}
