//! Content model for topics, lessons and quiz questions
//!
//! Everything here is seed data: it is loaded once and never mutated at
//! runtime. Learner progress lives in the navigator and quiz sessions.

use serde::{Deserialize, Serialize};

/// A named group of ordered lessons
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    /// Unique identifier (e.g., "arrays")
    pub id: String,
    /// Display title
    pub title: String,
    /// Lessons in learning order
    pub lessons: Vec<Lesson>,
}

impl Topic {
    /// Create a topic with no lessons
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self { id: id.into(), title: title.into(), lessons: Vec::new() }
    }

    /// Builder-style helper for appending a lesson
    pub fn with_lesson(mut self, lesson: Lesson) -> Self {
        self.lessons.push(lesson);
        self
    }

    /// Find a lesson of this topic by id
    pub fn lesson(&self, lesson_id: &str) -> Option<&Lesson> {
        self.lessons.iter().find(|l| l.id == lesson_id)
    }

    /// Whether the lesson belongs to this topic
    pub fn contains(&self, lesson_id: &str) -> bool {
        self.lesson(lesson_id).is_some()
    }

    /// First lesson that can be opened
    pub fn first_unlocked(&self) -> Option<&Lesson> {
        self.lessons.iter().find(|l| !l.locked)
    }
}

/// A single unit of instruction with static lock/complete flags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    /// Unique identifier (e.g., "a3")
    pub id: String,
    /// Display title
    pub title: String,
    /// Locked lessons cannot be opened
    #[serde(default)]
    pub locked: bool,
    /// Completed according to seed data
    #[serde(default)]
    pub completed: bool,
}

impl Lesson {
    /// Create an unlocked, not yet completed lesson
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self { id: id.into(), title: title.into(), locked: false, completed: false }
    }

    pub fn locked(mut self) -> Self {
        self.locked = true;
        self
    }

    pub fn completed(mut self) -> Self {
        self.completed = true;
        self
    }
}

/// Authored material for a lesson
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonContent {
    /// Prose explanation, rendered with keyword highlighting
    pub explanation: String,
    /// Keyword phrases (may be multi-word)
    pub keywords: Vec<String>,
    /// Code example shown in the expandable panel
    pub example: String,
}

/// A multiple choice quiz question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    /// The question text
    pub question: String,
    /// Answer options (at least two)
    pub options: Vec<String>,
    /// Index into `options` of the right answer
    pub correct: usize,
    /// Shown once the question has been answered
    pub explanation: String,
}

impl Question {
    /// Letter label for an option index ("A", "B", ...)
    pub fn option_label(index: usize) -> char {
        (b'A' + (index % 26) as u8) as char
    }

    /// Check if the given option is the right answer
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_topic() -> Topic {
        Topic::new("sorting", "Sorting Algorithms")
            .with_lesson(Lesson::new("s1", "Bubble Sort").completed())
            .with_lesson(Lesson::new("s2", "Merge Sort"))
            .with_lesson(Lesson::new("s3", "Quick Sort").locked())
    }

    #[test]
    fn topic_finds_lessons_by_id() {
        let topic = sample_topic();
        assert_eq!(topic.lesson("s2").map(|l| l.title.as_str()), Some("Merge Sort"));
        assert!(topic.contains("s3"));
        assert!(!topic.contains("a1"));
    }

    #[test]
    fn first_unlocked_skips_locked_lessons() {
        let topic = Topic::new("trees", "Trees")
            .with_lesson(Lesson::new("t2", "Traversals").locked())
            .with_lesson(Lesson::new("t1", "Basics"));
        assert_eq!(topic.first_unlocked().map(|l| l.id.as_str()), Some("t1"));
    }

    #[test]
    fn first_unlocked_none_when_all_locked() {
        let topic = Topic::new("x", "X").with_lesson(Lesson::new("x1", "X1").locked());
        assert!(topic.first_unlocked().is_none());
    }

    #[test]
    fn option_labels_are_letters() {
        assert_eq!(Question::option_label(0), 'A');
        assert_eq!(Question::option_label(3), 'D');
    }

    #[test]
    fn lesson_flags_default_when_missing_from_json() {
        let lesson: Lesson = serde_json::from_str(r#"{"id":"a1","title":"Intro"}"#).unwrap();
        assert!(!lesson.locked);
        assert!(!lesson.completed);
    }
}
