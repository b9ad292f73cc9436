//! Centralized theme configuration for all UI components.
//!
//! All colors and styles are defined here. When adding or modifying UI components:
//! - Add new colors to the appropriate module
//! - Use `theme::module::CONSTANT` in render files
//! - Do NOT hardcode `Color::*` values directly in render files
//!
//! Theme: Galaxy - Purple/pink accents with deep space blue background

use ratatui::style::{Color, Modifier, Style};

/// Core color palette - shared base colors.
pub mod palette {
    use super::*;

    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const TEXT_DIM: Color = Color::Rgb(90, 92, 119);
    pub const TEXT_MUTED: Color = Color::Rgb(130, 133, 158);

    pub const BG_DARK: Color = Color::Rgb(26, 26, 46);
    pub const BG_RAISED: Color = Color::Rgb(55, 55, 85);

    pub const CYAN: Color = Color::Rgb(0, 217, 255);
    pub const YELLOW: Color = Color::Rgb(255, 217, 61);
    pub const GREEN: Color = Color::Rgb(107, 203, 119);
    pub const PINK: Color = Color::Rgb(255, 107, 157);
    pub const ORANGE: Color = Color::Rgb(255, 184, 108);
    pub const PURPLE: Color = Color::Rgb(189, 147, 249);
    pub const RED: Color = Color::Rgb(224, 108, 117);
    pub const RED_LIGHT: Color = Color::Rgb(255, 135, 145);
}

use palette::*;

/// Text input styles
pub mod input {
    use super::*;

    pub const BORDER: Color = CYAN;
    pub const TITLE: Style = Style::new().fg(CYAN).add_modifier(Modifier::BOLD);
    pub const TEXT: Color = palette::TEXT;
    pub const PLACEHOLDER: Color = TEXT_DIM;
    pub const CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);

    // Title hint while the initial text is still loading
    pub const LOADING_HINT: Color = YELLOW;
}

/// Stats grid styles
pub mod stats {
    use super::*;

    pub const BORDER: Color = TEXT_DIM;
    pub const TITLE: Style = Style::new().fg(TEXT).add_modifier(Modifier::BOLD);

    // Counting mode badge in the block title
    pub const MODE_LIVE: Color = GREEN;
    pub const MODE_MANUAL: Color = YELLOW;

    // Stale numbers are dimmed until the next count
    pub const STALE_HINT: Color = YELLOW;
    pub const STALE_MODIFIER: Modifier = Modifier::DIM;

    pub const LABEL: Color = TEXT_MUTED;
    pub const UNIT: Color = TEXT_MUTED;

    /// One accent per card, in field display order
    pub const CARD_COLORS: [Color; 6] = [CYAN, PURPLE, PINK, GREEN, ORANGE, YELLOW];
}

/// Help popup styles
pub mod help {
    use super::*;

    pub const BORDER: Color = CYAN;
    pub const BACKGROUND: Color = BG_DARK;
    pub const TITLE: Style = Style::new().fg(CYAN).add_modifier(Modifier::BOLD);

    pub const SECTION_HEADER: Style = Style::new().fg(CYAN).add_modifier(Modifier::BOLD);
    pub const KEY: Style = Style::new().fg(YELLOW).add_modifier(Modifier::BOLD);
    pub const DESCRIPTION: Color = TEXT;
    pub const NOTE: Color = TEXT_MUTED;

    pub const FOOTER: Color = TEXT_DIM;
}

/// Notification styles
pub mod notification {
    use super::*;

    pub struct NotificationColors {
        pub fg: Color,
        pub bg: Color,
        pub border: Color,
    }

    pub const INFO: NotificationColors = NotificationColors {
        fg: TEXT,
        bg: BG_RAISED,
        border: TEXT_MUTED,
    };

    pub const WARNING: NotificationColors = NotificationColors {
        fg: BG_DARK,
        bg: YELLOW,
        border: YELLOW,
    };

    pub const ERROR: NotificationColors = NotificationColors {
        fg: TEXT,
        bg: RED,
        border: RED_LIGHT,
    };
}

/// Help line (bottom status bar) styles
pub mod help_line {
    use super::*;

    pub const KEY: Color = TEXT_MUTED;
    pub const DESCRIPTION: Color = TEXT_DIM;
    pub const SEPARATOR: Color = TEXT_DIM;
}
