//! Static learning content
//!
//! Topics, lessons, lesson explanations and quiz questions. All of it is
//! read-only once loaded.

pub mod catalog;
pub mod error;
pub mod model;

pub use catalog::Catalog;
pub use error::ContentError;
pub use model::{Lesson, LessonContent, Question, Topic};

/// Read-only access to learning content
pub trait ContentStore {
    /// All topics in display order
    fn topics(&self) -> &[Topic];

    /// Authored content for a lesson, if any was written
    fn lesson_content(&self, lesson_id: &str) -> Option<&LessonContent>;

    /// Quiz questions in quiz order
    fn questions(&self) -> &[Question];

    /// Find a topic by id
    fn topic(&self, topic_id: &str) -> Option<&Topic> {
        self.topics().iter().find(|t| t.id == topic_id)
    }
}
