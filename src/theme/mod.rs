//! Theming system for LearnFlow

mod lavender;

pub use lavender::{LAVENDER, LAVENDER_NIGHT};

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use crate::profile::ThemeMode;

/// A color theme for the application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,

    // Background colors
    pub bg_primary: Color,
    pub bg_secondary: Color,
    pub bg_tertiary: Color,

    // Foreground colors
    pub fg_primary: Color,
    pub fg_secondary: Color,
    pub fg_muted: Color,

    // Accent colors
    pub accent_primary: Color,
    pub accent_secondary: Color,

    // Semantic colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,

    // Learning
    pub keyword: Color,
    pub keyword_bg: Color,
    pub streak: Color,

    // UI elements
    pub border: Color,
    pub border_focused: Color,
    pub selection: Color,
}

impl Theme {
    /// Theme matching the learner's light/dark preference
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Theme::lavender(),
            ThemeMode::Dark => Theme::lavender_night(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::lavender()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_is_lavender() {
        let theme = Theme::default();
        assert_eq!(theme.name, "Lavender");
    }

    #[test]
    fn dark_mode_uses_night_palette() {
        assert_eq!(Theme::for_mode(ThemeMode::Dark).name, "Lavender Night");
        assert_eq!(Theme::for_mode(ThemeMode::Light).name, "Lavender");
    }
}
