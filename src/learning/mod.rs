//! Lesson browsing
//!
//! The [`Navigator`] walks topics and lessons; [`highlight`] marks keyword
//! words in lesson explanations for rendering.

pub mod highlight;
pub mod navigator;

pub use highlight::{Token, highlight};
pub use navigator::{LessonStatus, Navigator};
