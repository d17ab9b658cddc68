//! The generated C-Test document

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::token::CTestToken;

/// A C-Test document: tokens in document order plus the language they are in.
///
/// Sentence boundaries are not stored separately; the last token of every
/// sentence carries [`CTestToken::is_last_token_in_sentence`].
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CTestObject {
    language: String,
    tokens: Vec<CTestToken>,
}

impl CTestObject {
    /// Create an empty document.
    ///
    /// `language` is an ISO 639-1 code, or empty for language-independent mode.
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            tokens: Vec::new(),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn tokens(&self) -> &[CTestToken] {
        &self.tokens
    }

    /// Mutable access for in-place regapping
    pub fn tokens_mut(&mut self) -> &mut [CTestToken] {
        &mut self.tokens
    }

    pub fn into_tokens(self) -> Vec<CTestToken> {
        self.tokens
    }

    pub fn add_token(&mut self, token: CTestToken) {
        self.tokens.push(token);
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Number of tokens currently gapped
    pub fn gap_count(&self) -> usize {
        self.tokens.iter().filter(|token| token.is_gap()).count()
    }

    /// Gapped tokens in document order
    pub fn gaps(&self) -> impl Iterator<Item = &CTestToken> {
        self.tokens.iter().filter(|token| token.is_gap())
    }

    /// Split the document into sentences.
    ///
    /// A run of tokens after the last flagged token forms a final sentence.
    pub fn sentences(&self) -> Vec<&[CTestToken]> {
        let mut sentences = Vec::new();
        let mut start = 0;

        for (i, token) in self.tokens.iter().enumerate() {
            if token.is_last_token_in_sentence() {
                sentences.push(&self.tokens[start..=i]);
                start = i + 1;
            }
        }

        if start < self.tokens.len() {
            sentences.push(&self.tokens[start..]);
        }

        sentences
    }

    /// Surface text with tokens joined by single spaces
    pub fn text(&self) -> String {
        self.tokens
            .iter()
            .map(CTestToken::text)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Assign one error rate per gap, in document order.
    ///
    /// Fails when the number of rates differs from the number of gaps.
    pub fn apply_error_rates(&mut self, rates: &[f64]) -> Result<()> {
        let gap_count = self.gap_count();
        if rates.len() != gap_count {
            return Err(ModelError::Argument(format!(
                "expected {gap_count} error rates (one per gap), got {}",
                rates.len()
            )));
        }

        for (token, rate) in self
            .tokens
            .iter_mut()
            .filter(|token| token.is_gap())
            .zip(rates)
        {
            token.set_error_rate(*rate);
        }

        Ok(())
    }
}
