//! Keyword highlighting for lesson explanations

use std::collections::HashSet;

/// A whitespace-delimited piece of an explanation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The original text, punctuation included
    pub text: String,
    /// Whether the token should be emphasised
    pub is_keyword: bool,
}

impl Token {
    fn new(text: &str, is_keyword: bool) -> Self {
        Self { text: text.to_string(), is_keyword }
    }
}

/// Split `text` into tokens and flag the ones that are keyword words.
///
/// Matching is word-level: every keyword phrase is lower-cased and split on
/// whitespace, and a token matches when its lower-cased form (minus trailing
/// `.` and `,`) equals one of those words. "two pointers" therefore lights up
/// "two" and "pointers" wherever they appear, but not "pointer".
pub fn highlight<S: AsRef<str>>(text: &str, keywords: &[S]) -> Vec<Token> {
    let words: HashSet<String> = keywords
        .iter()
        .flat_map(|phrase| {
            phrase.as_ref().split_whitespace().map(str::to_lowercase).collect::<Vec<_>>()
        })
        .collect();

    text.split_whitespace()
        .map(|raw| {
            let normalized = raw.trim_end_matches(['.', ',']).to_lowercase();
            Token::new(raw, words.contains(&normalized))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn flags(tokens: &[Token]) -> Vec<(&str, bool)> {
        tokens.iter().map(|t| (t.text.as_str(), t.is_keyword)).collect()
    }

    #[test]
    fn word_level_match_not_phrase_or_substring() {
        let tokens =
            highlight("Two Pointer Technique uses two pointers", &["two pointers", "O(n) time"]);

        assert_eq!(
            flags(&tokens),
            vec![
                ("Two", true),
                ("Pointer", false),
                ("Technique", false),
                ("uses", false),
                ("two", true),
                ("pointers", true),
            ]
        );
    }

    #[test]
    fn trailing_punctuation_is_ignored_but_kept_in_text() {
        let tokens = highlight("solve it in O(n) time.", &["O(n) time"]);
        assert_eq!(
            flags(&tokens),
            vec![("solve", false), ("it", false), ("in", false), ("O(n)", true), ("time.", true)]
        );
    }

    #[test]
    fn only_trailing_punctuation_is_stripped() {
        let tokens = highlight("a.b, window,,", &["a", "window"]);
        assert_eq!(flags(&tokens), vec![("a.b,", false), ("window,,", true)]);
    }

    #[test]
    fn empty_text_yields_no_tokens() {
        assert!(highlight("", &["anything"]).is_empty());
        assert!(highlight("   \n ", &["anything"]).is_empty());
    }

    #[test]
    fn no_keywords_means_no_highlights() {
        let none: [&str; 0] = [];
        let tokens = highlight("The root node", &none);
        assert_eq!(tokens.len(), 3);
        assert!(tokens.iter().all(|t| !t.is_keyword));
    }

    #[test]
    fn builtin_tree_lesson_highlights() {
        let tokens = highlight(
            "each node has at most two children: left and right. The topmost node is called the root.",
            &["root node", "left child", "right child", "hierarchical"],
        );
        let marked: Vec<&str> =
            tokens.iter().filter(|t| t.is_keyword).map(|t| t.text.as_str()).collect();
        assert_eq!(marked, vec!["node", "left", "right.", "node", "root."]);
    }
}
