//! A single word-level unit of a C-Test

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One token of a C-Test document.
///
/// A gap hides the tail of the word: everything before `gap_index` stays
/// visible, everything from `gap_index` on must be supplied by the test-taker.
/// All offsets are counted in characters (Unicode scalar values), not bytes.
///
/// The token keeps `is_gap ⇒ is_candidate` at all times: marking a token as a
/// gap also marks it as a candidate, and withdrawing candidacy clears the gap.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawToken"))]
pub struct CTestToken {
    text: String,
    id: String,
    is_gap: bool,
    is_candidate: bool,
    gap_index: usize,
    prompt: String,
    error_rate: f64,
    other_solutions: Vec<String>,
    gap_type: String,
    is_last_token_in_sentence: bool,
}

/// Wire form of [`CTestToken`], normalized through the setters on the way in
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawToken {
    text: String,
    #[serde(default)]
    id: String,
    #[serde(default)]
    is_gap: bool,
    #[serde(default)]
    is_candidate: bool,
    #[serde(default)]
    gap_index: usize,
    #[serde(default)]
    prompt: String,
    #[serde(default)]
    error_rate: f64,
    #[serde(default)]
    other_solutions: Vec<String>,
    #[serde(default)]
    gap_type: String,
    #[serde(default)]
    is_last_token_in_sentence: bool,
}

#[cfg(feature = "serde")]
impl From<RawToken> for CTestToken {
    fn from(raw: RawToken) -> Self {
        let mut token = CTestToken::new(raw.text);
        token.set_id(raw.id);
        token.set_gap_index(raw.gap_index);
        // a gap listed as a non-candidate keeps its gap
        token.set_candidate(raw.is_candidate);
        token.set_gap(raw.is_gap);
        token.set_prompt(raw.prompt);
        token.set_error_rate(raw.error_rate);
        token.set_other_solutions(raw.other_solutions);
        token.set_gap_type(raw.gap_type);
        token.set_last_token_in_sentence(raw.is_last_token_in_sentence);
        token
    }
}

impl CTestToken {
    /// Create an ungapped, non-candidate token
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            id: String::new(),
            is_gap: false,
            is_candidate: false,
            gap_index: 0,
            prompt: String::new(),
            error_rate: 0.0,
            other_solutions: Vec::new(),
            gap_type: String::new(),
            is_last_token_in_sentence: false,
        }
    }

    /// Surface form of the token
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the surface form in characters
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }

    pub fn is_gap(&self) -> bool {
        self.is_gap
    }

    /// Mark or unmark the token as a gap.
    ///
    /// Gapping a non-candidate promotes it to a candidate.
    pub fn set_gap(&mut self, is_gap: bool) {
        self.is_gap = is_gap;
        if is_gap {
            self.is_candidate = true;
        }
    }

    pub fn is_candidate(&self) -> bool {
        self.is_candidate
    }

    /// Mark or unmark the token as a gap candidate.
    ///
    /// Withdrawing candidacy also removes the gap.
    pub fn set_candidate(&mut self, is_candidate: bool) {
        self.is_candidate = is_candidate;
        if !is_candidate {
            self.is_gap = false;
        }
    }

    /// Character offset where the visible prefix ends
    pub fn gap_index(&self) -> usize {
        self.gap_index
    }

    /// Set the gap index, clamped to the token length
    pub fn set_gap_index(&mut self, gap_index: usize) {
        self.gap_index = gap_index.min(self.char_len());
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    /// Fraction of attempts answered incorrectly, as recorded by a scorer
    pub fn error_rate(&self) -> f64 {
        self.error_rate
    }

    pub fn set_error_rate(&mut self, error_rate: f64) {
        self.error_rate = error_rate;
    }

    pub fn other_solutions(&self) -> &[String] {
        &self.other_solutions
    }

    pub fn set_other_solutions(&mut self, solutions: Vec<String>) {
        self.other_solutions = solutions;
    }

    pub fn has_other_solutions(&self) -> bool {
        !self.other_solutions.is_empty()
    }

    pub fn gap_type(&self) -> &str {
        &self.gap_type
    }

    pub fn set_gap_type(&mut self, gap_type: impl Into<String>) {
        self.gap_type = gap_type.into();
    }

    pub fn is_last_token_in_sentence(&self) -> bool {
        self.is_last_token_in_sentence
    }

    pub fn set_last_token_in_sentence(&mut self, last: bool) {
        self.is_last_token_in_sentence = last;
    }

    /// The part of the word shown to the test-taker
    pub fn visible_prefix(&self) -> &str {
        &self.text[..self.gap_byte_offset()]
    }

    /// The hidden part of the word, i.e. the literal solution
    pub fn hidden_suffix(&self) -> &str {
        &self.text[self.gap_byte_offset()..]
    }

    /// The literal solution followed by all alternative solutions
    pub fn all_solutions(&self) -> Vec<String> {
        let mut solutions = Vec::with_capacity(self.other_solutions.len() + 1);
        solutions.push(self.hidden_suffix().to_string());
        solutions.extend(self.other_solutions.iter().cloned());
        solutions
    }

    fn gap_byte_offset(&self) -> usize {
        self.text
            .char_indices()
            .nth(self.gap_index)
            .map_or(self.text.len(), |(offset, _)| offset)
    }
}
