//! Read-only catalog of topics, lesson content and quiz questions

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::ContentError;
use super::model::{Lesson, LessonContent, Question, Topic};
use super::ContentStore;

/// In-memory catalog, either built in or loaded from JSON
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Topics in display order
    pub topics: Vec<Topic>,
    /// Authored content keyed by lesson id
    #[serde(default)]
    pub lessons: BTreeMap<String, LessonContent>,
    /// Quiz questions in quiz order
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl Catalog {
    /// Load and validate a catalog from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self, ContentError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|source| ContentError::Io { path: path.to_path_buf(), source })?;
        let catalog = Self::from_json(&contents)?;
        tracing::info!(
            "Loaded catalog from {:?}: {} topics, {} questions",
            path,
            catalog.topics.len(),
            catalog.questions.len()
        );
        Ok(catalog)
    }

    /// Parse and validate a catalog from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Check structural invariants the state machines rely on
    pub fn validate(&self) -> Result<(), ContentError> {
        let mut topic_ids = HashSet::new();
        let mut lesson_ids = HashSet::new();

        for topic in &self.topics {
            if !topic_ids.insert(topic.id.as_str()) {
                return Err(ContentError::DuplicateTopic(topic.id.clone()));
            }
            for lesson in &topic.lessons {
                if !lesson_ids.insert(lesson.id.as_str()) {
                    return Err(ContentError::DuplicateLesson(lesson.id.clone()));
                }
            }
        }

        if let Some(unknown) = self.lessons.keys().find(|id| !lesson_ids.contains(id.as_str())) {
            return Err(ContentError::UnknownLesson(unknown.clone()));
        }

        for q in &self.questions {
            if q.options.len() < 2 {
                return Err(ContentError::TooFewOptions { question: q.id, options: q.options.len() });
            }
            if q.correct >= q.options.len() {
                return Err(ContentError::CorrectOutOfRange {
                    question: q.id,
                    correct: q.correct,
                    options: q.options.len(),
                });
            }
        }

        Ok(())
    }

    /// The catalog shipped with the application
    pub fn builtin() -> Self {
        let topics = vec![
            Topic::new("arrays", "Arrays & Strings")
                .with_lesson(Lesson::new("a1", "Introduction to Arrays").completed())
                .with_lesson(Lesson::new("a2", "Two Pointer Technique").completed())
                .with_lesson(Lesson::new("a3", "Sliding Window"))
                .with_lesson(Lesson::new("a4", "Prefix Sums").locked()),
            Topic::new("sorting", "Sorting Algorithms")
                .with_lesson(Lesson::new("s1", "Bubble Sort").completed())
                .with_lesson(Lesson::new("s2", "Merge Sort"))
                .with_lesson(Lesson::new("s3", "Quick Sort").locked()),
            Topic::new("trees", "Trees & Graphs")
                .with_lesson(Lesson::new("t1", "Binary Tree Basics"))
                .with_lesson(Lesson::new("t2", "Tree Traversals").locked())
                .with_lesson(Lesson::new("t3", "BST Operations").locked()),
        ];

        let mut lessons = BTreeMap::new();
        lessons.insert(
            "a1".to_string(),
            content(
                "An array is a contiguous block of memory that stores elements of the same type. \
                 Arrays allow O(1) access by index but O(n) insertion and deletion in the worst case.",
                &["contiguous memory", "O(1) access", "index-based"],
                "const nums = [1, 2, 3, 4, 5];\nconsole.log(nums[2]); // Output: 3\n\n\
                 // Inserting at index 1\nnums.splice(1, 0, 10);\n// nums is now [1, 10, 2, 3, 4, 5]",
            ),
        );
        lessons.insert(
            "a2".to_string(),
            content(
                "The two-pointer technique uses two pointers that move through the array, often \
                 from opposite ends, to solve problems in O(n) time instead of O(n²).",
                &["two pointers", "O(n) time", "sorted arrays"],
                "function twoSum(nums, target) {\n  let left = 0, right = nums.length - 1;\n  \
                 while (left < right) {\n    const sum = nums[left] + nums[right];\n    \
                 if (sum === target) return [left, right];\n    if (sum < target) left++;\n    \
                 else right--;\n  }\n}",
            ),
        );
        lessons.insert(
            "a3".to_string(),
            content(
                "The sliding window technique maintains a window of elements that slides across \
                 the array. It's great for problems involving subarrays or substrings of a fixed \
                 or variable size.",
                &["window", "subarray", "optimization"],
                "function maxSubarraySum(nums, k) {\n  let sum = 0;\n  \
                 for (let i = 0; i < k; i++) sum += nums[i];\n  let max = sum;\n  \
                 for (let i = k; i < nums.length; i++) {\n    sum += nums[i] - nums[i - k];\n    \
                 max = Math.max(max, sum);\n  }\n  return max;\n}",
            ),
        );
        lessons.insert(
            "s1".to_string(),
            content(
                "Bubble sort repeatedly steps through the list, compares adjacent elements, and \
                 swaps them if they're in the wrong order. It's simple but inefficient with O(n²) \
                 time complexity.",
                &["comparison sort", "O(n²)", "stable sort"],
                "function bubbleSort(arr) {\n  for (let i = 0; i < arr.length; i++) {\n    \
                 for (let j = 0; j < arr.length - i - 1; j++) {\n      \
                 if (arr[j] > arr[j+1]) {\n        [arr[j], arr[j+1]] = [arr[j+1], arr[j]];\n      \
                 }\n    }\n  }\n  return arr;\n}",
            ),
        );
        lessons.insert(
            "s2".to_string(),
            content(
                "Merge sort divides the array in half recursively, sorts each half, and merges \
                 them back together. It guarantees O(n log n) time complexity.",
                &["divide and conquer", "O(n log n)", "recursive"],
                "function mergeSort(arr) {\n  if (arr.length <= 1) return arr;\n  \
                 const mid = Math.floor(arr.length / 2);\n  \
                 const left = mergeSort(arr.slice(0, mid));\n  \
                 const right = mergeSort(arr.slice(mid));\n  return merge(left, right);\n}",
            ),
        );
        lessons.insert(
            "t1".to_string(),
            content(
                "A binary tree is a hierarchical data structure where each node has at most two \
                 children: left and right. The topmost node is called the root.",
                &["root node", "left child", "right child", "hierarchical"],
                "class TreeNode {\n  constructor(val) {\n    this.val = val;\n    \
                 this.left = null;\n    this.right = null;\n  }\n}\n\n\
                 const root = new TreeNode(1);\nroot.left = new TreeNode(2);\n\
                 root.right = new TreeNode(3);",
            ),
        );

        let questions = vec![
            question(
                1,
                "What is the time complexity of accessing an element in an array by index?",
                &["O(n)", "O(1)", "O(log n)", "O(n²)"],
                1,
                "Arrays store elements in contiguous memory, so accessing by index is a direct \
                 memory offset calculation, constant time O(1).",
            ),
            question(
                2,
                "Which sorting algorithm uses the divide-and-conquer approach?",
                &["Bubble Sort", "Insertion Sort", "Merge Sort", "Selection Sort"],
                2,
                "Merge sort divides the array into halves, recursively sorts each half, then \
                 merges them. A classic divide-and-conquer pattern.",
            ),
            question(
                3,
                "In a binary tree, what is the maximum number of children a node can have?",
                &["1", "2", "3", "Unlimited"],
                1,
                "A binary tree allows at most two children per node: a left child and a right child.",
            ),
            question(
                4,
                "What technique uses two variables that move through data to find a solution?",
                &["Dynamic Programming", "Greedy Algorithm", "Two Pointer Technique", "Backtracking"],
                2,
                "The two-pointer technique uses two variables (pointers) that traverse the data, \
                 often from opposite ends, to solve problems efficiently.",
            ),
            question(
                5,
                "What is the best-case time complexity of Bubble Sort?",
                &["O(n²)", "O(n log n)", "O(n)", "O(1)"],
                2,
                "When the array is already sorted and an optimization flag is used, Bubble Sort \
                 only needs one pass through the array: O(n).",
            ),
        ];

        Self { topics, lessons, questions }
    }
}

fn content(explanation: &str, keywords: &[&str], example: &str) -> LessonContent {
    LessonContent {
        explanation: explanation.to_string(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        example: example.to_string(),
    }
}

fn question(id: u32, text: &str, options: &[&str], correct: usize, explanation: &str) -> Question {
    Question {
        id,
        question: text.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
        correct,
        explanation: explanation.to_string(),
    }
}

impl ContentStore for Catalog {
    fn topics(&self) -> &[Topic] {
        &self.topics
    }

    fn lesson_content(&self, lesson_id: &str) -> Option<&LessonContent> {
        self.lessons.get(lesson_id)
    }

    fn questions(&self) -> &[Question] {
        &self.questions
    }
}
