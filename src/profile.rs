//! Learner profile and dashboard stats
//!
//! Values are read from the key-value store once when the profile is loaded
//! and written back only when they change.

use std::rc::Rc;

use crate::notify::{Notifier, Severity};
use crate::store::{
    DEFAULT_STREAK, DEFAULT_THEME, DEFAULT_USERNAME, DEFAULT_XP, KeyValueStore, STREAK_KEY,
    THEME_KEY, USERNAME_KEY, XP_KEY,
};

/// XP needed to fill the level progress bar
pub const LEVEL_XP: i64 = 1000;

/// Preferred colour scheme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Anything but "dark" reads as light
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("dark") { ThemeMode::Dark } else { ThemeMode::Light }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

/// Streak, XP, username and theme for the current learner
pub struct Profile {
    store: Rc<dyn KeyValueStore>,
    notifier: Rc<dyn Notifier>,
    streak: i64,
    xp: i64,
    username: String,
    theme: ThemeMode,
}

impl Profile {
    pub fn load(store: Rc<dyn KeyValueStore>, notifier: Rc<dyn Notifier>) -> Self {
        let mut profile = Self {
            store,
            notifier,
            streak: DEFAULT_STREAK,
            xp: DEFAULT_XP,
            username: DEFAULT_USERNAME.to_string(),
            theme: ThemeMode::default(),
        };
        profile.reload();
        profile
    }

    /// Re-read every value from the store (e.g., after a quiz awarded XP)
    pub fn reload(&mut self) {
        self.streak = self.store.get_int(STREAK_KEY, DEFAULT_STREAK);
        self.xp = self.store.get_int(XP_KEY, DEFAULT_XP);
        self.username = self.store.get_string(USERNAME_KEY, DEFAULT_USERNAME);
        self.theme = ThemeMode::parse(&self.store.get_string(THEME_KEY, DEFAULT_THEME));
    }

    /// Rename the learner. Blank names are ignored.
    pub fn set_username(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            tracing::debug!("Ignoring blank username");
            return false;
        }

        self.username = name.to_string();
        self.store.set_string(USERNAME_KEY, &self.username);
        self.notifier.notify("Username updated!", Severity::Success);
        true
    }

    /// Switch between light and dark mode
    pub fn toggle_theme(&mut self) -> ThemeMode {
        self.theme = self.theme.toggled();
        self.store.set_string(THEME_KEY, self.theme.as_str());

        let message = match self.theme {
            ThemeMode::Dark => "Dark mode",
            ThemeMode::Light => "Light mode",
        };
        self.notifier.notify(message, Severity::Info);
        self.theme
    }

    /// Greeting shown when the dashboard opens
    pub fn welcome(&self) {
        self.notifier.notify("Welcome back! Let's keep learning", Severity::Info);
    }

    /// Fill of the level bar, capped at 100
    pub fn level_progress_percent(&self) -> f64 {
        (self.xp as f64 / LEVEL_XP as f64 * 100.0).clamp(0.0, 100.0)
    }

    pub fn streak(&self) -> i64 {
        self.streak
    }

    pub fn xp(&self) -> i64 {
        self.xp
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }
}
