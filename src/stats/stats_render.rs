use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::metrics::{Language, StatField, TextStats};
use crate::report::format_count;
use crate::theme;

const CARDS_PER_ROW: usize = 3;

/// Height needed for two rows of cards plus the outer border
pub const GRID_HEIGHT: u16 = 8;

/// Render the six stat cards as a 2x3 grid inside a titled block
pub fn render_grid(app: &App, frame: &mut Frame, area: Rect) -> Rect {
    let language = app.language;
    let live = app.stats.live_update();
    let stale = app.stats.is_stale();

    let mut title_spans = vec![Span::styled(
        match language {
            Language::En => " Stats ",
            Language::Ja => " カウント結果 ",
        },
        theme::stats::TITLE,
    )];
    title_spans.push(mode_badge(live, language));
    if stale && !live {
        title_spans.push(Span::styled(
            match language {
                Language::En => " (stale, Ctrl+R to count) ",
                Language::Ja => " (未反映 Ctrl+R でカウント) ",
            },
            Style::default().fg(theme::stats::STALE_HINT),
        ));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(title_spans))
        .border_style(Style::default().fg(theme::stats::BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::vertical([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)]).split(inner);
    let stats = app.stats.display();

    for (index, field) in StatField::all().iter().enumerate() {
        let row = index / CARDS_PER_ROW;
        let col = index % CARDS_PER_ROW;
        let cols = Layout::horizontal([Constraint::Ratio(1, 3); CARDS_PER_ROW]).split(rows[row]);
        render_card(
            frame,
            cols[col],
            *field,
            stats,
            language,
            theme::stats::CARD_COLORS[index],
            stale,
        );
    }

    area
}

fn mode_badge(live: bool, language: Language) -> Span<'static> {
    let (text, color) = match (live, language) {
        (true, Language::En) => ("[Live]", theme::stats::MODE_LIVE),
        (false, Language::En) => ("[Manual]", theme::stats::MODE_MANUAL),
        (true, Language::Ja) => ("[リアルタイム]", theme::stats::MODE_LIVE),
        (false, Language::Ja) => ("[手動]", theme::stats::MODE_MANUAL),
    };
    Span::styled(text, Style::default().fg(color))
}

fn render_card(
    frame: &mut Frame,
    area: Rect,
    field: StatField,
    stats: &TextStats,
    language: Language,
    color: Color,
    stale: bool,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            format!(" {} ", field.label(language)),
            Style::default().fg(theme::stats::LABEL),
        ))
        .border_style(Style::default().fg(color));

    let mut value_style = Style::default().fg(color).add_modifier(Modifier::BOLD);
    if stale {
        value_style = value_style.add_modifier(theme::stats::STALE_MODIFIER);
    }

    let line = Line::from(vec![
        Span::styled(format_count(field.value(stats)), value_style),
        Span::raw(" "),
        Span::styled(field.unit(language), Style::default().fg(theme::stats::UNIT)),
    ]);

    frame.render_widget(
        Paragraph::new(line).alignment(Alignment::Center).block(block),
        area,
    );
}
