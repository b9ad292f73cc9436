use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::app_state::{App, OutputMode};

fn handle_help_popup_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::F(1) => app.help.close(),
        KeyCode::Char('q') if !key.modifiers.contains(KeyModifiers::CONTROL) => app.help.close(),
        KeyCode::Char('j') | KeyCode::Down => app.help.scroll.scroll_down(1),
        KeyCode::Char('k') | KeyCode::Up => app.help.scroll.scroll_up(1),
        KeyCode::PageDown => app.help.scroll.page_down(),
        KeyCode::PageUp => app.help.scroll.page_up(),
        KeyCode::Char('g') | KeyCode::Home => app.help.scroll.jump_to_top(),
        KeyCode::Char('G') | KeyCode::End => app.help.scroll.jump_to_bottom(),
        _ => {}
    }
}

pub fn handle_global_keys(app: &mut App, key: KeyEvent) -> bool {
    // Ctrl+C quits from anywhere, even with the help popup open
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return true;
    }

    if app.help.visible {
        handle_help_popup_key(app, key);
        return true;
    }

    if key.code == KeyCode::F(1) {
        app.help.toggle();
        return true;
    }

    if !key.modifiers.contains(KeyModifiers::CONTROL) {
        return false;
    }

    match key.code {
        KeyCode::Char('q') => {
            app.flush_pending_count();
            app.output_mode = Some(OutputMode::Report);
            app.should_quit = true;
            true
        }
        KeyCode::Char('l') => {
            app.toggle_live_update();
            true
        }
        KeyCode::Char('r') => {
            app.count_now();
            true
        }
        KeyCode::Char('x') => {
            app.reset();
            true
        }
        _ => false,
    }
}
