//! Error types for catalog loading

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating a catalog
#[derive(Debug, Error)]
pub enum ContentError {
    /// Catalog file could not be read
    #[error("Failed to read catalog {path:?}: {source}")]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Catalog file is not valid JSON for the catalog schema
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two topics share an id
    #[error("Duplicate topic id '{0}'")]
    DuplicateTopic(String),

    /// Two lessons share an id (across all topics)
    #[error("Duplicate lesson id '{0}'")]
    DuplicateLesson(String),

    /// Lesson content keyed by an id no topic contains
    #[error("Content provided for unknown lesson '{0}'")]
    UnknownLesson(String),

    /// A question needs at least two options
    #[error("Question {question} has {options} option(s), need at least 2")]
    TooFewOptions {
        /// Question id
        question: u32,
        /// Number of options found
        options: usize,
    },

    /// The correct index does not point at an option
    #[error("Question {question} marks option {correct} correct but has only {options} options")]
    CorrectOutOfRange {
        /// Question id
        question: u32,
        /// Declared correct index
        correct: usize,
        /// Number of options found
        options: usize,
    },
}
