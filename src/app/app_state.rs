use crate::config::{ClipboardBackend, Config};
use crate::help::HelpPopupState;
use crate::input::{FileLoader, InputState};
use crate::metrics::Language;
use crate::notification::NotificationState;
use crate::stats::{self, Debouncer, StatsState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Print the stats report after the terminal is restored
    Report,
}

pub struct App {
    pub input: InputState,
    pub stats: StatsState,
    pub debouncer: Debouncer,
    pub loader: Option<FileLoader>,
    pub help: HelpPopupState,
    pub notification: NotificationState,
    pub clipboard_backend: ClipboardBackend,
    pub language: Language,
    pub output_mode: Option<OutputMode>,
    pub should_quit: bool,
}

impl App {
    /// Create an app with the initial text already available
    pub fn new(text: String, config: &Config) -> Self {
        let mut app = Self::from_config(config);
        app.load_text(&text);
        app
    }

    /// Create an app whose initial text arrives from a background loader
    pub fn new_with_loader(loader: FileLoader, config: &Config) -> Self {
        let mut app = Self::from_config(config);
        app.loader = Some(loader);
        app
    }

    fn from_config(config: &Config) -> Self {
        let language = config.display.language;

        Self {
            input: InputState::new(language),
            stats: StatsState::new(config.counting.live_update),
            debouncer: Debouncer::new(config.counting.debounce_ms),
            loader: None,
            help: HelpPopupState::new(),
            notification: NotificationState::new(),
            clipboard_backend: config.clipboard.backend,
            language,
            output_mode: None,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn output_mode(&self) -> Option<OutputMode> {
        self.output_mode
    }

    pub fn is_loading(&self) -> bool {
        self.loader.as_ref().is_some_and(|loader| loader.is_loading())
    }

    /// Take the loader result once it is ready
    ///
    /// A failed load leaves the buffer empty and shows an error toast that
    /// stays until the next key press.
    pub fn poll_file_loader(&mut self) {
        let Some(loader) = self.loader.as_mut() else {
            return;
        };

        match loader.poll() {
            None => {}
            Some(Ok(text)) => {
                self.loader = None;
                self.load_text(&text);
            }
            Some(Err(e)) => {
                self.loader = None;

                #[cfg(debug_assertions)]
                log::debug!("Input failed to load: {}", e);

                let message = match self.language {
                    Language::En => format!("Failed to load input: {}", e),
                    Language::Ja => format!("読み込みに失敗しました: {}", e),
                };
                self.notification.show_error(&message);
            }
        }
    }

    /// Replace the buffer and count it, whatever the counting mode
    fn load_text(&mut self, text: &str) {
        self.input.set_text(text);
        self.debouncer.mark_executed();
        self.update_stats();
    }

    pub fn update_stats(&mut self) {
        stats::update_stats_from_app(self);
    }

    /// React to an edit of the text buffer
    pub fn on_text_changed(&mut self) {
        if !self.stats.live_update() {
            self.stats.mark_edited();
        } else if self.debouncer.is_enabled() {
            self.debouncer.schedule_execution();
        } else {
            self.update_stats();
        }
    }

    /// Run a debounced recount whose delay has elapsed
    pub fn run_due_count(&mut self) {
        if self.debouncer.should_execute() {
            self.update_stats();
            self.debouncer.mark_executed();
        }
    }

    /// Run any debounced recount now, whether or not its delay has elapsed
    pub fn flush_pending_count(&mut self) {
        if self.debouncer.has_pending() {
            self.update_stats();
            self.debouncer.mark_executed();
        }
    }

    pub fn count_now(&mut self) {
        self.debouncer.mark_executed();
        self.update_stats();
    }

    pub fn toggle_live_update(&mut self) {
        self.debouncer.mark_executed();
        let text = self.input.text();
        self.stats.toggle_live_update(&text);

        let message = match (self.stats.live_update(), self.language) {
            (true, Language::En) => "Live update on",
            (false, Language::En) => "Live update off",
            (true, Language::Ja) => "リアルタイムカウント オン",
            (false, Language::Ja) => "リアルタイムカウント オフ",
        };
        self.notification.show(message);
    }

    /// Clear the text and zero the stats
    pub fn reset(&mut self) {
        self.debouncer.mark_executed();
        self.input.clear();
        self.stats.reset();
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
