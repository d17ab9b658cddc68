//! Annotated input text
//!
//! Tokenization, sentence segmentation and linguistic annotation happen
//! outside the gapping algorithm. An [`Annotator`] turns raw text into an
//! [`AnnotatedText`]; exclusion rules and gap index finders then look at each
//! token through a [`TokenContext`].

mod simple;

pub use simple::SimpleAnnotator;

use crate::error::Result;

/// A word token with its surface span and optional annotations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedToken {
    text: String,
    begin: usize,
    end: usize,
    pos: Option<String>,
    lemma: Option<String>,
}

impl AnnotatedToken {
    /// Create a token covering `begin..end` (byte offsets into the source text)
    pub fn new(text: impl Into<String>, begin: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            begin,
            end,
            pos: None,
            lemma: None,
        }
    }

    /// Attach a part-of-speech tag
    pub fn with_pos(mut self, pos: impl Into<String>) -> Self {
        self.pos = Some(pos.into());
        self
    }

    /// Attach a lemma
    pub fn with_lemma(mut self, lemma: impl Into<String>) -> Self {
        self.lemma = Some(lemma.into());
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the surface form in characters
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn begin(&self) -> usize {
        self.begin
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn pos(&self) -> Option<&str> {
        self.pos.as_deref()
    }

    pub fn lemma(&self) -> Option<&str> {
        self.lemma.as_deref()
    }
}

/// An ordered run of tokens forming one sentence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotatedSentence {
    tokens: Vec<AnnotatedToken>,
}

impl AnnotatedSentence {
    pub fn new(tokens: Vec<AnnotatedToken>) -> Self {
        Self { tokens }
    }

    pub fn tokens(&self) -> &[AnnotatedToken] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Text split into sentences and tokens
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotatedText {
    language: String,
    sentences: Vec<AnnotatedSentence>,
}

impl AnnotatedText {
    pub fn new(language: impl Into<String>, sentences: Vec<AnnotatedSentence>) -> Self {
        Self {
            language: language.into(),
            sentences,
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn sentences(&self) -> &[AnnotatedSentence] {
        &self.sentences
    }

    /// Total number of tokens over all sentences
    pub fn token_count(&self) -> usize {
        self.sentences.iter().map(AnnotatedSentence::len).sum()
    }

    /// Every token in document order, with its context
    pub fn contexts(&self) -> impl Iterator<Item = TokenContext<'_>> {
        let mut previous: Option<&AnnotatedToken> = None;
        self.sentences
            .iter()
            .enumerate()
            .flat_map(|(sentence_index, sentence)| {
                sentence
                    .tokens()
                    .iter()
                    .enumerate()
                    .map(move |(index_in_sentence, token)| {
                        (sentence_index, index_in_sentence, token)
                    })
            })
            .map(move |(sentence_index, index_in_sentence, token)| {
                let context = TokenContext {
                    token,
                    previous,
                    sentence_index,
                    index_in_sentence,
                };
                previous = Some(token);
                context
            })
    }
}

/// A token as seen by exclusion rules and gap index finders
#[derive(Debug, Clone, Copy)]
pub struct TokenContext<'a> {
    /// The token under inspection
    pub token: &'a AnnotatedToken,
    /// The preceding token in document order, across sentence boundaries
    pub previous: Option<&'a AnnotatedToken>,
    /// 0-based index of the sentence containing the token
    pub sentence_index: usize,
    /// 0-based position of the token within its sentence
    pub index_in_sentence: usize,
}

impl<'a> TokenContext<'a> {
    /// Context for a token without neighbours, mostly useful in tests
    pub fn standalone(token: &'a AnnotatedToken) -> Self {
        Self {
            token,
            previous: None,
            sentence_index: 0,
            index_in_sentence: 0,
        }
    }

    pub fn text(&self) -> &'a str {
        self.token.text()
    }
}

/// Produces annotated text for a language
///
/// Implementations must not validate the language code; resolving an
/// unsupported code to language-independent behaviour is their concern.
pub trait Annotator: Send + Sync {
    /// Split `text` into annotated sentences.
    ///
    /// Fails with [`EngineError::Initialization`](crate::EngineError::Initialization)
    /// when the annotation resources cannot be prepared.
    fn annotate(&self, text: &str, language: &str) -> Result<AnnotatedText>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence(words: &[&str]) -> AnnotatedSentence {
        AnnotatedSentence::new(
            words
                .iter()
                .map(|word| AnnotatedToken::new(*word, 0, word.len()))
                .collect(),
        )
    }

    #[test]
    fn test_contexts_track_previous_across_sentences() {
        let text = AnnotatedText::new("en", vec![sentence(&["Hi", "."]), sentence(&["Bye"])]);

        let contexts: Vec<_> = text.contexts().collect();
        assert_eq!(contexts.len(), 3);

        assert!(contexts[0].previous.is_none());
        assert_eq!(contexts[1].previous.map(AnnotatedToken::text), Some("Hi"));
        assert_eq!(contexts[2].previous.map(AnnotatedToken::text), Some("."));
        assert_eq!(contexts[2].sentence_index, 1);
        assert_eq!(contexts[2].index_in_sentence, 0);
    }

    #[test]
    fn test_token_count() {
        let text = AnnotatedText::new("", vec![sentence(&["a", "b"]), sentence(&["c"])]);
        assert_eq!(text.token_count(), 3);
        assert_eq!(text.sentences().len(), 2);
    }

    #[test]
    fn test_token_annotations() {
        let token = AnnotatedToken::new("Berlin", 4, 10)
            .with_pos("PROPN")
            .with_lemma("Berlin");
        assert_eq!(token.pos(), Some("PROPN"));
        assert_eq!(token.lemma(), Some("Berlin"));
        assert_eq!(token.begin(), 4);
        assert_eq!(token.end(), 10);
        assert_eq!(token.char_len(), 6);
    }
}
