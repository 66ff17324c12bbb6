//! Multiple choice quiz sessions

pub mod session;

pub use session::{
    DEFAULT_FEEDBACK_DURATION, Feedback, OptionState, QuizSession, Verdict, XP_PER_CORRECT,
};
