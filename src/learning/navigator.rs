//! Topic and lesson navigation state

use std::collections::HashSet;
use std::rc::Rc;

use crate::content::{ContentStore, Lesson, LessonContent, Topic};
use crate::notify::{Notifier, Severity};

use super::highlight::{Token, highlight};

/// How a lesson is shown in the topic tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LessonStatus {
    /// Completed in seed data or marked understood this session
    Completed,
    /// Cannot be opened
    Locked,
    /// Open for learning
    Available,
}

/// Tracks the active topic and lesson, the example panel and which lessons
/// the learner has marked as understood during this session.
///
/// Every operation re-checks its preconditions and returns `false` instead of
/// changing state when they do not hold.
pub struct Navigator {
    content: Rc<dyn ContentStore>,
    notifier: Rc<dyn Notifier>,
    active_topic_id: Option<String>,
    active_lesson_id: Option<String>,
    example_expanded: bool,
    understood: HashSet<String>,
}

impl Navigator {
    /// Start on the first topic, at its first lesson still to be learned
    pub fn new(content: Rc<dyn ContentStore>, notifier: Rc<dyn Notifier>) -> Self {
        let mut navigator = Self {
            content,
            notifier,
            active_topic_id: None,
            active_lesson_id: None,
            example_expanded: false,
            understood: HashSet::new(),
        };

        if let Some(topic) = navigator.content.topics().first() {
            navigator.active_lesson_id = navigator.starting_lesson(topic);
            navigator.active_topic_id = Some(topic.id.clone());
        }

        navigator
    }

    /// Make `topic_id` the active topic.
    ///
    /// If the active lesson is not part of the new topic, the topic's first
    /// unlocked lesson still to be learned is opened instead (or none, when
    /// every lesson is locked) and the example panel collapses.
    pub fn select_topic(&mut self, topic_id: &str) -> bool {
        let Some(topic) = self.content.topic(topic_id) else {
            tracing::debug!("Ignoring unknown topic '{}'", topic_id);
            return false;
        };

        let lesson_in_topic =
            self.active_lesson_id.as_deref().is_some_and(|lesson_id| topic.contains(lesson_id));
        if !lesson_in_topic {
            let next_lesson = self.starting_lesson(topic);
            self.active_lesson_id = next_lesson;
            self.example_expanded = false;
        }

        self.active_topic_id = Some(topic_id.to_string());
        true
    }

    /// Open a lesson of the active topic. Locked lessons are refused.
    pub fn select_lesson(&mut self, lesson_id: &str) -> bool {
        let Some(lesson) = self.active_topic().and_then(|t| t.lesson(lesson_id)) else {
            tracing::debug!("Lesson '{}' is not in the active topic", lesson_id);
            return false;
        };

        if lesson.locked {
            tracing::debug!("Lesson '{}' is locked", lesson_id);
            return false;
        }

        self.active_lesson_id = Some(lesson_id.to_string());
        self.example_expanded = false;
        true
    }

    /// Expand or collapse the code example
    pub fn toggle_example(&mut self) {
        self.example_expanded = !self.example_expanded;
    }

    /// Record that the learner understood the active lesson.
    ///
    /// Only the active lesson can be marked, and only once.
    pub fn mark_understood(&mut self, lesson_id: &str) -> bool {
        if self.active_lesson_id.as_deref() != Some(lesson_id) {
            tracing::debug!("Lesson '{}' is not the active lesson", lesson_id);
            return false;
        }

        if !self.understood.insert(lesson_id.to_string()) {
            return false;
        }

        tracing::info!("Lesson '{}' marked as understood", lesson_id);
        self.notifier.notify("Nice! Marked as understood", Severity::Success);
        true
    }

    /// Open the next unlocked lesson in the active topic
    pub fn select_next_lesson(&mut self) -> bool {
        let candidates = self.unlocked_lesson_ids();
        let position = self.active_position(&candidates);
        let next = match position {
            Some(i) => candidates.get(i + 1),
            None => candidates.first(),
        };
        match next.cloned() {
            Some(id) => self.select_lesson(&id),
            None => false,
        }
    }

    /// Open the previous unlocked lesson in the active topic
    pub fn select_previous_lesson(&mut self) -> bool {
        let candidates = self.unlocked_lesson_ids();
        let position = self.active_position(&candidates);
        let previous = match position {
            Some(i) if i > 0 => candidates.get(i - 1),
            Some(_) => None,
            None => candidates.last(),
        };
        match previous.cloned() {
            Some(id) => self.select_lesson(&id),
            None => false,
        }
    }

    /// Cycle to the next topic, wrapping around
    pub fn select_next_topic(&mut self) -> bool {
        self.cycle_topic(1)
    }

    /// Cycle to the previous topic, wrapping around
    pub fn select_previous_topic(&mut self) -> bool {
        self.cycle_topic(-1)
    }

    pub fn active_topic(&self) -> Option<&Topic> {
        self.active_topic_id.as_deref().and_then(|id| self.content.topic(id))
    }

    pub fn active_lesson(&self) -> Option<&Lesson> {
        let lesson_id = self.active_lesson_id.as_deref()?;
        self.active_topic()?.lesson(lesson_id)
    }

    pub fn active_topic_id(&self) -> Option<&str> {
        self.active_topic_id.as_deref()
    }

    pub fn active_lesson_id(&self) -> Option<&str> {
        self.active_lesson_id.as_deref()
    }

    /// Content for the active lesson; `None` when nothing has been written for it
    pub fn active_content(&self) -> Option<&LessonContent> {
        self.active_lesson_id.as_deref().and_then(|id| self.content.lesson_content(id))
    }

    /// Explanation of the active lesson split into highlighted tokens
    pub fn highlighted_explanation(&self) -> Option<Vec<Token>> {
        self.active_content().map(|c| highlight(&c.explanation, c.keywords.as_slice()))
    }

    pub fn example_expanded(&self) -> bool {
        self.example_expanded
    }

    pub fn topics(&self) -> &[Topic] {
        self.content.topics()
    }

    pub fn is_understood(&self, lesson_id: &str) -> bool {
        self.understood.contains(lesson_id)
    }

    /// Number of lessons marked understood this session
    pub fn understood_count(&self) -> usize {
        self.understood.len()
    }

    /// Complete in seed data or understood this session
    pub fn is_complete(&self, lesson: &Lesson) -> bool {
        lesson.completed || self.understood.contains(&lesson.id)
    }

    pub fn lesson_status(&self, lesson: &Lesson) -> LessonStatus {
        if self.is_complete(lesson) {
            LessonStatus::Completed
        } else if lesson.locked {
            LessonStatus::Locked
        } else {
            LessonStatus::Available
        }
    }

    /// Completed lessons in a topic; zero for unknown topics
    pub fn completed_count(&self, topic_id: &str) -> usize {
        self.content
            .topic(topic_id)
            .map(|t| t.lessons.iter().filter(|l| self.is_complete(l)).count())
            .unwrap_or(0)
    }

    /// Lesson to open when entering a topic
    fn starting_lesson(&self, topic: &Topic) -> Option<String> {
        topic
            .lessons
            .iter()
            .find(|l| !l.locked && !self.is_complete(l))
            .or_else(|| topic.first_unlocked())
            .map(|l| l.id.clone())
    }

    fn unlocked_lesson_ids(&self) -> Vec<String> {
        self.active_topic()
            .map(|t| t.lessons.iter().filter(|l| !l.locked).map(|l| l.id.clone()).collect())
            .unwrap_or_default()
    }

    fn active_position(&self, ids: &[String]) -> Option<usize> {
        let active = self.active_lesson_id.as_deref()?;
        ids.iter().position(|id| id == active)
    }

    fn cycle_topic(&mut self, step: isize) -> bool {
        let topics = self.content.topics();
        if topics.is_empty() {
            return false;
        }

        let len = topics.len() as isize;
        let current = self
            .active_topic_id
            .as_deref()
            .and_then(|id| topics.iter().position(|t| t.id == id))
            .unwrap_or(0) as isize;
        let next = (current + step).rem_euclid(len) as usize;
        let topic_id = topics[next].id.clone();

        self.select_topic(&topic_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Catalog;
    use crate::notify::ToastQueue;
    use proptest::prelude::*;

    fn navigator() -> (Navigator, Rc<ToastQueue>) {
        let toasts = Rc::new(ToastQueue::default());
        let nav = Navigator::new(Rc::new(Catalog::builtin()), toasts.clone());
        (nav, toasts)
    }

    #[test]
    fn starts_on_first_lesson_to_learn() {
        let (nav, _) = navigator();
        assert_eq!(nav.active_topic_id(), Some("arrays"));
        assert_eq!(nav.active_lesson_id(), Some("a3"));
        assert!(!nav.example_expanded());
    }

    #[test]
    fn select_lesson_collapses_example() {
        let (mut nav, _) = navigator();
        nav.toggle_example();
        assert!(nav.example_expanded());

        assert!(nav.select_lesson("a1"));
        assert_eq!(nav.active_lesson_id(), Some("a1"));
        assert!(!nav.example_expanded());
    }

    #[test]
    fn locked_lesson_is_refused() {
        let (mut nav, _) = navigator();
        nav.toggle_example();

        assert!(!nav.select_lesson("a4"));
        assert_eq!(nav.active_lesson_id(), Some("a3"));
        assert!(nav.example_expanded());
    }

    #[test]
    fn lesson_outside_active_topic_is_refused() {
        let (mut nav, _) = navigator();
        assert!(!nav.select_lesson("s2"));
        assert!(!nav.select_lesson("missing"));
        assert_eq!(nav.active_lesson_id(), Some("a3"));
    }

    #[test]
    fn unknown_topic_is_ignored() {
        let (mut nav, _) = navigator();
        assert!(!nav.select_topic("graphs"));
        assert_eq!(nav.active_topic_id(), Some("arrays"));
    }

    #[test]
    fn topic_switch_opens_lesson_in_new_topic() {
        let (mut nav, _) = navigator();
        nav.toggle_example();

        assert!(nav.select_topic("sorting"));
        assert_eq!(nav.active_topic_id(), Some("sorting"));
        assert_eq!(nav.active_lesson_id(), Some("s2"));
        assert!(!nav.example_expanded());
    }

    #[test]
    fn reselecting_active_topic_keeps_lesson_and_example() {
        let (mut nav, _) = navigator();
        nav.select_lesson("a2");
        nav.toggle_example();

        assert!(nav.select_topic("arrays"));
        assert_eq!(nav.active_lesson_id(), Some("a2"));
        assert!(nav.example_expanded());
    }

    #[test]
    fn topic_switch_leaves_understood_alone() {
        let (mut nav, _) = navigator();
        nav.mark_understood("a3");
        nav.select_topic("trees");
        assert!(nav.is_understood("a3"));
    }

    #[test]
    fn mark_understood_is_idempotent_and_notifies_once() {
        let (mut nav, toasts) = navigator();

        assert!(nav.mark_understood("a3"));
        assert!(!nav.mark_understood("a3"));

        assert_eq!(nav.understood_count(), 1);
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts.latest().map(|t| t.severity), Some(Severity::Success));
    }

    #[test]
    fn mark_understood_requires_active_lesson() {
        let (mut nav, toasts) = navigator();
        assert!(!nav.mark_understood("a1"));
        assert_eq!(nav.understood_count(), 0);
        assert!(toasts.is_empty());
    }

    #[test]
    fn completed_count_includes_understood_lessons() {
        let (mut nav, _) = navigator();
        assert_eq!(nav.completed_count("arrays"), 2);

        nav.mark_understood("a3");
        assert_eq!(nav.completed_count("arrays"), 3);
        assert_eq!(nav.completed_count("sorting"), 1);
        assert_eq!(nav.completed_count("nope"), 0);
    }

    #[test]
    fn lesson_status_prefers_completed() {
        let (mut nav, _) = navigator();
        let topic = nav.active_topic().cloned().unwrap();

        assert_eq!(nav.lesson_status(&topic.lessons[0]), LessonStatus::Completed);
        assert_eq!(nav.lesson_status(&topic.lessons[2]), LessonStatus::Available);
        assert_eq!(nav.lesson_status(&topic.lessons[3]), LessonStatus::Locked);

        nav.mark_understood("a3");
        assert_eq!(nav.lesson_status(&topic.lessons[2]), LessonStatus::Completed);

        let seeded = Lesson::new("z", "Z").locked().completed();
        assert_eq!(nav.lesson_status(&seeded), LessonStatus::Completed);
    }

    #[test]
    fn missing_content_is_none() {
        let (mut nav, _) = navigator();
        assert!(nav.select_topic("sorting"));
        assert!(nav.active_content().is_some());

        let catalog = Catalog {
            topics: vec![Topic::new("x", "X").with_lesson(Lesson::new("x1", "Empty"))],
            ..Default::default()
        };
        let nav = Navigator::new(Rc::new(catalog), Rc::new(ToastQueue::default()));
        assert_eq!(nav.active_lesson_id(), Some("x1"));
        assert!(nav.active_content().is_none());
        assert!(nav.highlighted_explanation().is_none());
    }

    #[test]
    fn all_locked_topic_has_no_active_lesson() {
        let catalog = Catalog {
            topics: vec![
                Topic::new("open", "Open").with_lesson(Lesson::new("o1", "O1")),
                Topic::new("closed", "Closed").with_lesson(Lesson::new("c1", "C1").locked()),
            ],
            ..Default::default()
        };
        let mut nav = Navigator::new(Rc::new(catalog), Rc::new(ToastQueue::default()));

        assert!(nav.select_topic("closed"));
        assert_eq!(nav.active_lesson_id(), None);
        assert!(nav.active_lesson().is_none());
        assert!(!nav.mark_understood("c1"));
    }

    #[test]
    fn empty_catalog_has_nothing_active() {
        let mut nav = Navigator::new(Rc::new(Catalog::default()), Rc::new(ToastQueue::default()));
        assert!(nav.active_topic().is_none());
        assert!(!nav.select_next_topic());
        assert!(!nav.select_next_lesson());
    }

    #[test]
    fn next_and_previous_lesson_skip_locked() {
        let (mut nav, _) = navigator();
        assert!(!nav.select_next_lesson()); // a4 is locked
        assert_eq!(nav.active_lesson_id(), Some("a3"));

        assert!(nav.select_previous_lesson());
        assert_eq!(nav.active_lesson_id(), Some("a2"));
        assert!(nav.select_previous_lesson());
        assert!(!nav.select_previous_lesson());
        assert_eq!(nav.active_lesson_id(), Some("a1"));
    }

    #[test]
    fn topic_cycling_wraps() {
        let (mut nav, _) = navigator();
        assert!(nav.select_previous_topic());
        assert_eq!(nav.active_topic_id(), Some("trees"));
        assert!(nav.select_next_topic());
        assert_eq!(nav.active_topic_id(), Some("arrays"));
    }

    #[derive(Debug, Clone)]
    enum Op {
        Topic(usize),
        Lesson(usize),
        Toggle,
        Mark,
    }

    const TOPIC_IDS: [&str; 4] = ["arrays", "sorting", "trees", "unknown"];
    const LESSON_IDS: [&str; 11] = ["a1", "a2", "a3", "a4", "s1", "s2", "s3", "t1", "t2", "t3", "zz"];

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0..TOPIC_IDS.len()).prop_map(Op::Topic),
            (0..LESSON_IDS.len()).prop_map(Op::Lesson),
            Just(Op::Toggle),
            Just(Op::Mark),
        ]
    }

    proptest! {
        #[test]
        fn active_lesson_is_never_locked_and_belongs_to_topic(ops in prop::collection::vec(op(), 0..60)) {
            let (mut nav, _) = navigator();

            for op in ops {
                let before = nav.active_lesson_id().map(str::to_string);
                match op {
                    Op::Topic(i) => { nav.select_topic(TOPIC_IDS[i]); }
                    Op::Lesson(i) => {
                        let target = LESSON_IDS[i];
                        let locked = nav.topics().iter()
                            .flat_map(|t| t.lessons.iter())
                            .any(|l| l.id == target && l.locked);
                        nav.select_lesson(target);
                        if locked {
                            prop_assert_eq!(nav.active_lesson_id().map(str::to_string), before);
                        }
                    }
                    Op::Toggle => nav.toggle_example(),
                    Op::Mark => {
                        let id = nav.active_lesson_id().map(str::to_string);
                        let count = nav.understood_count();
                        if let Some(id) = id {
                            let was = nav.is_understood(&id);
                            nav.mark_understood(&id);
                            prop_assert_eq!(nav.understood_count(), if was { count } else { count + 1 });
                        }
                    }
                }

                if let Some(lesson) = nav.active_lesson() {
                    prop_assert!(!lesson.locked);
                }
                if let Some(id) = nav.active_lesson_id() {
                    prop_assert!(nav.active_topic().is_some_and(|t| t.contains(id)));
                }
            }
        }
    }
}
