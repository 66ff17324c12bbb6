//! LearnFlow - a terminal app for bite-sized lessons and quizzes
//!
//! Learners browse topics and lessons with keyword-highlighted explanations,
//! mark lessons as understood, and take a multiple choice quiz that awards XP.

pub mod app;
pub mod config;
pub mod content;
pub mod learning;
pub mod notify;
pub mod profile;
pub mod quiz;
pub mod store;
pub mod theme;
pub mod ui;

pub use app::App;
pub use config::Config;
pub use theme::Theme;
