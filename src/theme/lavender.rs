//! Lavender light and dark palettes

use ratatui::style::Color;

use super::Theme;

/// Light lavender palette
pub const LAVENDER: Theme = Theme {
    name: String::new(), // Will be set properly with const fn when stabilized

    // Background colors
    bg_primary: Color::Rgb(250, 248, 255),   // #faf8ff
    bg_secondary: Color::Rgb(240, 235, 252), // #f0ebfc
    bg_tertiary: Color::Rgb(226, 218, 247),  // #e2daf7

    // Foreground colors
    fg_primary: Color::Rgb(38, 30, 61),     // #261e3d
    fg_secondary: Color::Rgb(70, 60, 102),  // #463c66
    fg_muted: Color::Rgb(128, 118, 158),    // #80769e

    // Accent colors
    accent_primary: Color::Rgb(124, 92, 230),   // #7c5ce6
    accent_secondary: Color::Rgb(168, 140, 245), // #a88cf5

    // Semantic colors
    success: Color::Rgb(46, 160, 103), // #2ea067
    warning: Color::Rgb(214, 140, 30), // #d68c1e
    error: Color::Rgb(220, 68, 84),    // #dc4454
    info: Color::Rgb(124, 92, 230),    // #7c5ce6

    // Learning
    keyword: Color::Rgb(124, 92, 230),     // #7c5ce6
    keyword_bg: Color::Rgb(234, 226, 253), // #eae2fd
    streak: Color::Rgb(240, 120, 40),      // #f07828

    // UI elements
    border: Color::Rgb(214, 206, 236),         // #d6ceec
    border_focused: Color::Rgb(124, 92, 230),  // #7c5ce6
    selection: Color::Rgb(226, 218, 247),      // #e2daf7
};

/// Dark lavender palette
pub const LAVENDER_NIGHT: Theme = Theme {
    name: String::new(),

    bg_primary: Color::Rgb(24, 20, 38),   // #181426
    bg_secondary: Color::Rgb(34, 28, 54), // #221c36
    bg_tertiary: Color::Rgb(52, 44, 80),  // #342c50

    fg_primary: Color::Rgb(236, 232, 250),   // #ece8fa
    fg_secondary: Color::Rgb(204, 196, 232), // #ccc4e8
    fg_muted: Color::Rgb(130, 120, 168),     // #8278a8

    accent_primary: Color::Rgb(168, 140, 245),   // #a88cf5
    accent_secondary: Color::Rgb(196, 176, 250), // #c4b0fa

    success: Color::Rgb(110, 210, 150), // #6ed296
    warning: Color::Rgb(240, 184, 90),  // #f0b85a
    error: Color::Rgb(246, 112, 128),   // #f67080
    info: Color::Rgb(168, 140, 245),    // #a88cf5

    keyword: Color::Rgb(196, 176, 250),  // #c4b0fa
    keyword_bg: Color::Rgb(52, 44, 80),  // #342c50
    streak: Color::Rgb(250, 150, 70),    // #fa9646

    border: Color::Rgb(62, 54, 94),            // #3e365e
    border_focused: Color::Rgb(168, 140, 245), // #a88cf5
    selection: Color::Rgb(52, 44, 80),         // #342c50
};

// Workaround for const String
impl Theme {
    pub fn lavender() -> Self {
        Theme { name: "Lavender".to_string(), ..LAVENDER }
    }

    pub fn lavender_night() -> Self {
        Theme { name: "Lavender Night".to_string(), ..LAVENDER_NIGHT }
    }
}
