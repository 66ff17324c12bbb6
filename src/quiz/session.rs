//! Quiz session state machine
//!
//! ```text
//! Answering --submit--> Answered --next--> Answering ... --next--> Finished
//!     ^                                                               |
//!     +---------------------------- restart --------------------------+
//! ```

use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::content::{ContentStore, Question};
use crate::notify::{Notifier, Severity};
use crate::store::{DEFAULT_XP, KeyValueStore, XP_KEY};

/// XP awarded for each correct answer
pub const XP_PER_CORRECT: i64 = 20;

/// Default time the correct/incorrect animation stays up
pub const DEFAULT_FEEDBACK_DURATION: Duration = Duration::from_millis(600);

/// Transient visual signal after submitting an answer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Feedback {
    #[default]
    Idle,
    Correct,
    Incorrect,
}

/// How an answer option should be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionState {
    /// Not chosen, question still open
    Idle,
    /// Chosen, not yet submitted
    Selected,
    /// The right answer, revealed after submitting
    Correct,
    /// The learner's wrong pick
    Wrong,
    /// Any other option after submitting
    Dimmed,
}

/// Summary of a finished quiz
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Perfect,
    Good,
    KeepStudying,
}

impl Verdict {
    fn from_score(score: usize, total: usize) -> Self {
        if score == total {
            Verdict::Perfect
        } else if score * 2 >= total {
            Verdict::Good
        } else {
            Verdict::KeepStudying
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Verdict::Perfect => "Perfect score! You really know your stuff.",
            Verdict::Good => "Good job! Keep practicing to improve.",
            Verdict::KeepStudying => "Keep studying, you'll get there!",
        }
    }
}

/// One run through the quiz questions
pub struct QuizSession {
    content: Rc<dyn ContentStore>,
    store: Rc<dyn KeyValueStore>,
    notifier: Rc<dyn Notifier>,

    current_index: usize,
    selected: Option<usize>,
    answered: bool,
    score: usize,
    finished: bool,

    feedback: Feedback,
    feedback_started: Option<Instant>,
    feedback_duration: Duration,

    /// XP as loaded at session start, written back on every award
    xp: i64,
}

impl QuizSession {
    /// Start a fresh session. A catalog without questions starts finished.
    pub fn new(
        content: Rc<dyn ContentStore>,
        store: Rc<dyn KeyValueStore>,
        notifier: Rc<dyn Notifier>,
    ) -> Self {
        let xp = store.get_int(XP_KEY, DEFAULT_XP);
        let finished = content.questions().is_empty();

        Self {
            content,
            store,
            notifier,
            current_index: 0,
            selected: None,
            answered: false,
            score: 0,
            finished,
            feedback: Feedback::Idle,
            feedback_started: None,
            feedback_duration: DEFAULT_FEEDBACK_DURATION,
            xp,
        }
    }

    /// Override how long feedback stays visible
    pub fn with_feedback_duration(mut self, duration: Duration) -> Self {
        self.feedback_duration = duration;
        self
    }

    /// Choose an option. Refused once the question has been answered.
    pub fn select(&mut self, option: usize) -> bool {
        if self.finished || self.answered {
            tracing::debug!("Selection refused: question already answered");
            return false;
        }

        let Some(question) = self.current_question() else {
            return false;
        };
        if option >= question.options.len() {
            tracing::debug!("Option {} out of range", option);
            return false;
        }

        self.selected = Some(option);
        true
    }

    /// Lock in the selected option and score it
    pub fn submit(&mut self) -> bool {
        if self.finished || self.answered {
            return false;
        }

        let Some(selected) = self.selected else {
            tracing::debug!("Submit refused: nothing selected");
            return false;
        };

        let Some(is_correct) = self.current_question().map(|q| q.is_correct(selected)) else {
            return false;
        };

        self.answered = true;
        self.feedback_started = Some(Instant::now());

        if is_correct {
            self.score += 1;
            self.feedback = Feedback::Correct;
            self.notifier.notify("Correct!", Severity::Success);
            self.award_xp();
        } else {
            self.feedback = Feedback::Incorrect;
            self.notifier.notify("Not quite, check the explanation below.", Severity::Error);
        }

        tracing::debug!(
            question = self.current_index,
            selected,
            is_correct,
            score = self.score,
            "Answer submitted"
        );
        true
    }

    /// Move past an answered question, finishing after the last one
    pub fn next(&mut self) -> bool {
        if self.finished || !self.answered {
            return false;
        }

        if self.is_last_question() {
            self.finished = true;
            let message = format!("Quiz complete! Score: {}/{}", self.score, self.total());
            tracing::info!("{}", message);
            self.notifier.notify(&message, Severity::Info);
        } else {
            self.current_index += 1;
            self.selected = None;
            self.answered = false;
        }
        true
    }

    /// Return to the first question with a clean slate. XP already earned is kept.
    pub fn restart(&mut self) {
        self.current_index = 0;
        self.selected = None;
        self.answered = false;
        self.score = 0;
        self.finished = self.total() == 0;
        self.feedback = Feedback::Idle;
        self.feedback_started = None;
    }

    /// Clear the feedback signal once its duration has elapsed
    pub fn expire_feedback(&mut self, now: Instant) {
        if let Some(started) = self.feedback_started {
            if now.saturating_duration_since(started) >= self.feedback_duration {
                self.feedback = Feedback::Idle;
                self.feedback_started = None;
            }
        }
    }

    /// [`Self::expire_feedback`] against the current time
    pub fn tick(&mut self) {
        self.expire_feedback(Instant::now());
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.content.questions().get(self.current_index)
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn answered(&self) -> bool {
        self.answered
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn finished(&self) -> bool {
        self.finished
    }

    pub fn feedback(&self) -> Feedback {
        self.feedback
    }

    /// When the current feedback signal was raised
    pub fn feedback_started(&self) -> Option<Instant> {
        self.feedback_started
    }

    /// XP total including anything earned this session
    pub fn xp(&self) -> i64 {
        self.xp
    }

    pub fn total(&self) -> usize {
        self.content.questions().len()
    }

    /// Whether `next` will finish the quiz
    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 >= self.total()
    }

    /// Questions answered so far, as a percentage of the quiz
    pub fn progress_percent(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        let done = self.current_index + usize::from(self.answered);
        done as f64 / total as f64 * 100.0
    }

    pub fn option_state(&self, option: usize) -> OptionState {
        let correct = self.current_question().map(|q| q.correct);

        if self.answered {
            if Some(option) == correct {
                OptionState::Correct
            } else if Some(option) == self.selected {
                OptionState::Wrong
            } else {
                OptionState::Dimmed
            }
        } else if Some(option) == self.selected {
            OptionState::Selected
        } else {
            OptionState::Idle
        }
    }

    /// Final verdict, once finished
    pub fn verdict(&self) -> Option<Verdict> {
        self.finished.then(|| Verdict::from_score(self.score, self.total()))
    }

    fn award_xp(&mut self) {
        self.xp += XP_PER_CORRECT;
        self.store.set_int(XP_KEY, self.xp);
    }
}
