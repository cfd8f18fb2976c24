//! Color palettes for dark and light rendering.

use ratatui::style::Color;

use crate::config::ThemeSetting;

/// Colors used by the renderer.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Screen background.
    pub background: Color,
    /// Primary text.
    pub foreground: Color,
    /// Secondary text (hints, session counter).
    pub muted: Color,
    /// Borders and frames.
    pub border: Color,
    /// Work phase accent.
    pub work: Color,
    /// Break phase accent.
    pub rest: Color,
    /// Completed accent.
    pub done: Color,
}

impl Theme {
    /// Dark palette.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            background: Color::Black,
            foreground: Color::White,
            muted: Color::DarkGray,
            border: Color::Gray,
            work: Color::LightYellow,
            rest: Color::LightCyan,
            done: Color::LightGreen,
        }
    }

    /// Light palette.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            background: Color::White,
            foreground: Color::Black,
            muted: Color::Gray,
            border: Color::DarkGray,
            work: Color::Yellow,
            rest: Color::Blue,
            done: Color::Green,
        }
    }

    /// Resolve a palette from the configured setting.
    #[must_use]
    pub const fn from_setting(setting: ThemeSetting) -> Self {
        match setting {
            ThemeSetting::Dark => Self::dark(),
            ThemeSetting::Light => Self::light(),
        }
    }
}
