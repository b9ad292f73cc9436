use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::backend::copy_to_clipboard;
use crate::app::App;
use crate::metrics::Language;
use crate::report::{self, ReportFormat};

pub fn handle_clipboard_key(app: &mut App, key: KeyEvent) -> bool {
    if key.code == KeyCode::Char('y') && key.modifiers.contains(KeyModifiers::CONTROL) {
        copy_stats(app);
        return true;
    }

    false
}

/// Copy the text report of the displayed stats, returns whether it succeeded
pub fn copy_stats(app: &mut App) -> bool {
    app.flush_pending_count();

    let text = report::render(app.stats.display(), ReportFormat::Text, app.language);

    match copy_to_clipboard(&text, app.clipboard_backend) {
        Ok(()) => {
            app.notification.show(match app.language {
                Language::En => "Copied stats!",
                Language::Ja => "コピーしました",
            });
            true
        }
        Err(e) => {
            app.notification.show_warning(&e.to_string());
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClipboardBackend;
    use crate::test_utils::test_helpers::{key, key_with_mods, test_app};

    #[test]
    fn test_ctrl_y_copies_and_notifies() {
        let mut app = test_app("abc");
        app.clipboard_backend = ClipboardBackend::Osc52;

        let handled = handle_clipboard_key(&mut app, key_with_mods(KeyCode::Char('y'), KeyModifiers::CONTROL));

        assert!(handled);
        assert_eq!(app.notification.current_message(), Some("Copied stats!"));
    }

    #[test]
    fn test_plain_y_is_not_handled() {
        let mut app = test_app("abc");
        assert!(!handle_clipboard_key(&mut app, key(KeyCode::Char('y'))));
        assert!(app.notification.current().is_none());
    }

    #[test]
    fn test_copy_uses_japanese_message() {
        let mut app = test_app("abc");
        app.clipboard_backend = ClipboardBackend::Osc52;
        app.language = Language::Ja;

        assert!(copy_stats(&mut app));
        assert_eq!(app.notification.current_message(), Some("コピーしました"));
    }

    #[test]
    fn test_copy_flushes_pending_debounced_count() {
        let mut app = test_app("");
        app.clipboard_backend = ClipboardBackend::Osc52;
        app.debouncer = crate::stats::Debouncer::new(10_000);
        app.input.insert_paste("hello");
        app.on_text_changed();
        assert_eq!(app.stats.display().total_chars, 0);

        copy_stats(&mut app);
        assert_eq!(app.stats.display().total_chars, 5);
    }
}
