//! State management for text statistics
//!
//! `StatsState` caches the statistics currently on screen. `measure` itself is
//! stateless; everything about *when* it runs lives here.

use crate::app::App;
use crate::metrics::{TextStats, measure};

/// Recompute stats from the current text buffer of the App
///
/// This is the delegation function called by `App::update_stats()`.
pub fn update_stats_from_app(app: &mut App) {
    let text = app.input.text();
    app.stats.recount(&text);
}

/// State for the displayed statistics and the live-update toggle
#[derive(Debug, Clone)]
pub struct StatsState {
    stats: TextStats,
    live_update: bool,
    /// Text changed since `stats` was computed
    stale: bool,
}

impl StatsState {
    pub fn new(live_update: bool) -> Self {
        Self {
            stats: TextStats::default(),
            live_update,
            stale: false,
        }
    }

    /// Replace the displayed stats with a fresh measurement of `text`
    pub fn recount(&mut self, text: &str) {
        self.stats = measure(text);
        self.stale = false;

        #[cfg(debug_assertions)]
        log::debug!(
            "recount: total_chars={} lines={} utf8_bytes={}",
            self.stats.total_chars,
            self.stats.lines,
            self.stats.utf8_bytes
        );
    }

    /// Zero every field, matching what the empty buffer measures to
    pub fn reset(&mut self) {
        self.stats = TextStats::default();
        self.stale = false;
    }

    /// Record that the text changed without recounting
    pub fn mark_edited(&mut self) {
        self.stale = true;
    }

    /// Flip live updating; switching it on recounts `text` immediately
    pub fn toggle_live_update(&mut self, text: &str) {
        self.live_update = !self.live_update;
        if self.live_update {
            self.recount(text);
        }
    }

    pub fn live_update(&self) -> bool {
        self.live_update
    }

    pub fn is_stale(&self) -> bool {
        self.stale
    }

    pub fn display(&self) -> &TextStats {
        &self.stats
    }
}

impl Default for StatsState {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_state_is_live_and_zero() {
        let state = StatsState::default();
        assert!(state.live_update());
        assert!(!state.is_stale());
        assert_eq!(state.display(), &TextStats::default());
    }

    #[test]
    fn test_recount_replaces_stats() {
        let mut state = StatsState::new(true);
        state.recount("abc");
        assert_eq!(state.display().total_chars, 3);

        state.recount("a\nb");
        assert_eq!(state.display().lines, 2);
        assert_eq!(state.display().chars_without_newlines, 2);
    }

    #[test]
    fn test_recount_clears_stale() {
        let mut state = StatsState::new(false);
        state.mark_edited();
        assert!(state.is_stale());

        state.recount("x");
        assert!(!state.is_stale());
    }

    #[test]
    fn test_reset_zeroes_everything() {
        let mut state = StatsState::new(false);
        state.recount("hello\nworld");
        state.mark_edited();

        state.reset();
        assert_eq!(state.display(), &measure(""));
        assert!(!state.is_stale());
    }

    #[test]
    fn test_mark_edited_keeps_previous_stats() {
        let mut state = StatsState::new(false);
        state.recount("abc");
        state.mark_edited();

        assert_eq!(state.display().total_chars, 3);
        assert!(state.is_stale());
    }

    #[test]
    fn test_toggle_on_recounts() {
        let mut state = StatsState::new(false);
        state.mark_edited();

        state.toggle_live_update("abcd");
        assert!(state.live_update());
        assert!(!state.is_stale());
        assert_eq!(state.display().total_chars, 4);
    }

    #[test]
    fn test_toggle_off_keeps_stats() {
        let mut state = StatsState::new(true);
        state.recount("abc");

        state.toggle_live_update("abcdef");
        assert!(!state.live_update());
        assert_eq!(state.display().total_chars, 3);
    }

    // Feature: live-update, Property 1: Recount always matches measure
    // *For any* text, the displayed stats after a recount SHALL equal a direct
    // measurement of that text.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_recount_matches_measure(text in any::<String>(), live: bool) {
            let mut state = StatsState::new(live);
            state.recount(&text);
            prop_assert_eq!(state.display(), &measure(&text));
        }

        #[test]
        fn prop_double_toggle_restores_mode(text in "[a-z\n ]{0,20}", live: bool) {
            let mut state = StatsState::new(live);
            state.toggle_live_update(&text);
            state.toggle_live_update(&text);
            prop_assert_eq!(state.live_update(), live);
        }
    }
}
