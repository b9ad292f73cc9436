use crate::scroll::ScrollState;

#[derive(Debug, Default)]
pub struct HelpPopupState {
    pub visible: bool,
    pub scroll: ScrollState,
}

impl HelpPopupState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self) {
        if self.visible {
            self.close();
        } else {
            self.visible = true;
        }
    }

    /// Hide the popup and forget the scroll position
    pub fn close(&mut self) {
        self.visible = false;
        self.scroll.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_hidden() {
        let state = HelpPopupState::new();
        assert!(!state.visible);
        assert_eq!(state.scroll.offset, 0);
    }

    #[test]
    fn test_toggle_opens_and_closes() {
        let mut state = HelpPopupState::new();
        state.toggle();
        assert!(state.visible);
        state.toggle();
        assert!(!state.visible);
    }

    #[test]
    fn test_close_resets_scroll() {
        let mut state = HelpPopupState::new();
        state.toggle();
        state.scroll.update_bounds(40, 10);
        state.scroll.scroll_down(5);

        state.close();

        assert!(!state.visible);
        assert_eq!(state.scroll.offset, 0);
    }
}
