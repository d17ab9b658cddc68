//! Exclusion rules
//!
//! An exclusion rule vetoes a token as a gap candidate. Rules are pure
//! predicates over a [`TokenContext`]; they never look at gap state.

use std::collections::HashSet;

use regex::Regex;

use crate::annotation::TokenContext;

/// Predicate deciding that a token must never become a gap
pub trait ExclusionRule: Send + Sync {
    /// Short identifier used in logs
    fn name(&self) -> &str;

    /// `true` if the token must not be a gap candidate
    fn excludes(&self, context: &TokenContext<'_>) -> bool;
}

/// Excludes tokens shorter than a minimum number of characters
#[derive(Debug, Clone)]
pub struct TooShort {
    min_length: usize,
}

impl TooShort {
    pub fn new(min_length: usize) -> Self {
        Self { min_length }
    }
}

impl ExclusionRule for TooShort {
    fn name(&self) -> &str {
        "too_short"
    }

    fn excludes(&self, context: &TokenContext<'_>) -> bool {
        context.token.char_len() < self.min_length
    }
}

/// Excludes punctuation, numbers and anything else without a letter
#[derive(Debug, Clone, Default)]
pub struct NonAlphabetic;

impl ExclusionRule for NonAlphabetic {
    fn name(&self) -> &str {
        "non_alphabetic"
    }

    fn excludes(&self, context: &TokenContext<'_>) -> bool {
        !context.text().chars().any(char::is_alphabetic)
    }
}

/// Capitalization-based named entity guess.
///
/// A capitalized word of two or more characters is treated as a name unless
/// the preceding token is a sentence terminator. The first token of a text
/// has no preceding terminator and is therefore treated like any other word.
#[derive(Debug, Clone)]
pub struct SimpleNamedEntity {
    pattern: Regex,
    terminators: Vec<char>,
}

impl SimpleNamedEntity {
    pub fn new(terminators: Vec<char>) -> Self {
        Self {
            pattern: Regex::new(r"^\p{Lu}.+$").expect("static pattern is valid"),
            terminators,
        }
    }

    fn follows_terminator(&self, context: &TokenContext<'_>) -> bool {
        context.previous.is_some_and(|prev| {
            !prev.text().is_empty() && prev.text().chars().all(|ch| self.terminators.contains(&ch))
        })
    }
}

impl ExclusionRule for SimpleNamedEntity {
    fn name(&self) -> &str {
        "simple_named_entity"
    }

    fn excludes(&self, context: &TokenContext<'_>) -> bool {
        self.pattern.is_match(context.text()) && !self.follows_terminator(context)
    }
}

/// Excludes tokens whose part-of-speech tag marks a proper noun
#[derive(Debug, Clone)]
pub struct ProperNounTag {
    tags: HashSet<String>,
}

impl ProperNounTag {
    pub fn new(tags: impl IntoIterator<Item = String>) -> Self {
        Self {
            tags: tags.into_iter().collect(),
        }
    }
}

impl ExclusionRule for ProperNounTag {
    fn name(&self) -> &str {
        "proper_noun_tag"
    }

    fn excludes(&self, context: &TokenContext<'_>) -> bool {
        context
            .token
            .pos()
            .is_some_and(|tag| self.tags.contains(tag))
    }
}

/// Excludes listed words, case-insensitively
#[derive(Debug, Clone)]
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    pub fn new(words: impl IntoIterator<Item = String>) -> Self {
        Self {
            words: words.into_iter().map(|w| w.to_lowercase()).collect(),
        }
    }
}

impl ExclusionRule for WordList {
    fn name(&self) -> &str {
        "word_list"
    }

    fn excludes(&self, context: &TokenContext<'_>) -> bool {
        self.words.contains(&context.text().to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::AnnotatedToken;

    fn token(text: &str) -> AnnotatedToken {
        AnnotatedToken::new(text, 0, text.len())
    }

    fn excludes_alone(rule: &dyn ExclusionRule, text: &str) -> bool {
        let token = token(text);
        rule.excludes(&TokenContext::standalone(&token))
    }

    fn excludes_after(rule: &dyn ExclusionRule, previous: &str, text: &str) -> bool {
        let previous = token(previous);
        let token = token(text);
        let context = TokenContext {
            token: &token,
            previous: Some(&previous),
            sentence_index: 0,
            index_in_sentence: 1,
        };
        rule.excludes(&context)
    }

    #[test]
    fn test_too_short_single_char() {
        let rule = TooShort::new(2);
        assert!(excludes_alone(&rule, "I"));
        assert!(!excludes_alone(&rule, "Idiosynkrasie"));
        assert!(!excludes_alone(&rule, "an"));
    }

    #[test]
    fn test_too_short_counts_characters() {
        let rule = TooShort::new(2);
        assert!(excludes_alone(&rule, "ß"));
        assert!(!excludes_alone(&rule, "öl"));
    }

    #[test]
    fn test_non_alphabetic() {
        let rule = NonAlphabetic;
        assert!(excludes_alone(&rule, "."));
        assert!(excludes_alone(&rule, "1984"));
        assert!(excludes_alone(&rule, "--"));
        assert!(!excludes_alone(&rule, "R2D2"));
        assert!(!excludes_alone(&rule, "Straße"));
    }

    #[test]
    fn test_simple_named_entity() {
        let rule = SimpleNamedEntity::new(vec!['.', '!', '?']);
        assert!(excludes_after(&rule, "met", "Alice"));
        assert!(!excludes_after(&rule, ".", "Alice"));
        assert!(!excludes_after(&rule, "?", "Where"));
        assert!(!excludes_after(&rule, "met", "alice"));
        // single capital letters do not match the pattern
        assert!(!excludes_after(&rule, "met", "A"));
    }

    #[test]
    fn test_simple_named_entity_at_text_start() {
        let rule = SimpleNamedEntity::new(vec!['.']);
        assert!(excludes_alone(&rule, "The"));
    }

    #[test]
    fn test_proper_noun_tag() {
        let rule = ProperNounTag::new(vec!["NNP".to_string(), "PROPN".to_string()]);

        let tagged = token("Berlin").with_pos("PROPN");
        assert!(rule.excludes(&TokenContext::standalone(&tagged)));

        let noun = token("city").with_pos("NN");
        assert!(!rule.excludes(&TokenContext::standalone(&noun)));

        let untagged = token("Berlin");
        assert!(!rule.excludes(&TokenContext::standalone(&untagged)));
    }

    #[test]
    fn test_word_list_is_case_insensitive() {
        let rule = WordList::new(vec!["Etc".to_string()]);
        assert!(excludes_alone(&rule, "etc"));
        assert!(excludes_alone(&rule, "ETC"));
        assert!(!excludes_alone(&rule, "etcetera"));
    }
}
