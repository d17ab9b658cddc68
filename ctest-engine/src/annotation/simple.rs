//! Rule-based tokenizer and sentence splitter

use std::sync::Arc;

use unicode_segmentation::UnicodeSegmentation;

use crate::annotation::{AnnotatedSentence, AnnotatedText, AnnotatedToken, Annotator};
use crate::error::{EngineError, Result};
use crate::language::{EmbeddedResources, ResourceProvider};

/// Annotator built on Unicode word boundaries and per-language terminators.
///
/// A sentence ends after a token made only of terminator characters, unless
/// the token before it is a known abbreviation. Terminators that follow a
/// sentence end are attached to that sentence, so `"Wait..."` and
/// `"Really?!"` stay single sentences. Closing punctuation is attached only
/// when it touches the terminator; after whitespace it opens the next one.
/// No part-of-speech tags or lemmas are produced.
#[derive(Clone)]
pub struct SimpleAnnotator {
    resources: Arc<dyn ResourceProvider>,
}

impl std::fmt::Debug for SimpleAnnotator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimpleAnnotator").finish_non_exhaustive()
    }
}

impl Default for SimpleAnnotator {
    fn default() -> Self {
        Self::new()
    }
}

impl SimpleAnnotator {
    /// Annotator using the embedded language configurations
    pub fn new() -> Self {
        Self::with_resources(Arc::new(EmbeddedResources))
    }

    /// Annotator using segmentation data from a custom provider
    pub fn with_resources(resources: Arc<dyn ResourceProvider>) -> Self {
        Self { resources }
    }
}

impl Annotator for SimpleAnnotator {
    fn annotate(&self, text: &str, language: &str) -> Result<AnnotatedText> {
        let resources = self.resources.resources(language).map_err(|e| {
            EngineError::Initialization(format!(
                "no segmentation data for language '{language}': {e}"
            ))
        })?;

        let mut sentences: Vec<AnnotatedSentence> = Vec::new();
        let mut current: Vec<AnnotatedToken> = Vec::new();

        for (begin, word) in segments(text) {
            let token = AnnotatedToken::new(word, begin, begin + word.len());
            let is_terminator = resources.is_terminator_token(word);

            // trailing punctuation after a sentence end belongs to that sentence;
            // a closer only when nothing separates it from the terminator
            let touches_previous = sentences
                .last()
                .and_then(|s| s.tokens().last())
                .is_some_and(|prev| prev.end() == begin);
            let trails = is_terminator || (touches_previous && resources.is_closer_token(word));
            if current.is_empty() && trails {
                if let Some(last) = sentences.pop() {
                    let mut tokens = last.tokens().to_vec();
                    tokens.push(token);
                    sentences.push(AnnotatedSentence::new(tokens));
                    continue;
                }
            }

            let after_abbreviation = current
                .last()
                .is_some_and(|prev| resources.is_abbreviation(prev.text()));

            current.push(token);

            if is_terminator && !after_abbreviation {
                sentences.push(AnnotatedSentence::new(std::mem::take(&mut current)));
            }
        }

        if !current.is_empty() {
            sentences.push(AnnotatedSentence::new(current));
        }

        tracing::debug!(
            language = language,
            sentences = sentences.len(),
            "annotated text"
        );

        Ok(AnnotatedText::new(language, sentences))
    }
}

/// Word-boundary segments without whitespace.
///
/// Hyphenated compounds such as `well-known` are split by the Unicode word
/// boundary rules and are joined back into one segment here.
fn segments(text: &str) -> Vec<(usize, &str)> {
    let mut segments: Vec<(usize, &str)> = Vec::new();
    let mut pieces = text.split_word_bound_indices().peekable();

    while let Some((begin, word)) = pieces.next() {
        if word.chars().all(char::is_whitespace) {
            continue;
        }

        if word == "-" {
            let joined = match (segments.last(), pieces.peek()) {
                (Some(&(last_begin, last)), Some(&(next_begin, next))) => {
                    let touches_left = last_begin + last.len() == begin
                        && last.chars().last().is_some_and(char::is_alphanumeric);
                    let touches_right = next_begin == begin + word.len()
                        && next.chars().next().is_some_and(char::is_alphanumeric);
                    (touches_left && touches_right).then_some((last_begin, next_begin + next.len()))
                }
                _ => None,
            };

            if let Some((start, end)) = joined {
                segments.pop();
                segments.push((start, &text[start..end]));
                pieces.next();
                continue;
            }
        }

        segments.push((begin, word));
    }

    segments
}
