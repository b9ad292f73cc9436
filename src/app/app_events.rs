use ratatui::crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use std::io;
use std::time::Duration;

use super::app_state::App;
use crate::clipboard;
use crate::notification::NotificationType;

mod global;

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    pub fn handle_events(&mut self) -> io::Result<()> {
        self.run_due_count();

        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Paste(text) => {
                    self.handle_paste_event(text);
                }
                _ => {}
            }
        }
        Ok(())
    }

    pub fn handle_paste_event(&mut self, text: String) {
        if self.help.visible || self.is_loading() {
            return;
        }

        if self.input.insert_paste(&text) {
            self.on_text_changed();
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self
            .notification
            .current()
            .is_some_and(|n| n.notification_type == NotificationType::Error)
        {
            self.notification.dismiss();
        }

        if global::handle_global_keys(self, key) {
            return;
        }

        if clipboard::clipboard_events::handle_clipboard_key(self, key) {
            return;
        }

        // Edits would be overwritten once the loader finishes
        if self.is_loading() {
            return;
        }

        if self.input.textarea.input(key) {
            self.on_text_changed();
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
