//! Quality warnings for full generations

use std::fmt;

use serde::{Deserialize, Serialize};

/// Advisory finding about a generated C-Test
///
/// Warnings never make a generation fail; they tell the caller that the
/// input text did not fit the configured gap scheme well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Warning {
    /// Fewer than three sentences, or the text ended before the sentence
    /// limit was reached
    InsufficientSentences,
    /// Some sentences were not used because the gap limit was reached early
    TooManySentences,
    /// Fewer gaps than the configured limit could be placed
    InsufficientGaps {
        /// The configured gap limit
        gap_limit: usize,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::InsufficientSentences => write!(
                f,
                "INSUFFICIENT NUMBER OF SENTENCES - The supplied text did not contain enough \
                 sentences. You may need to add additional sentences."
            ),
            Warning::TooManySentences => write!(
                f,
                "TOO MANY SENTENCES - The supplied text contained more sentences than \
                 necessary. The c-test did not use all sentences."
            ),
            Warning::InsufficientGaps { gap_limit } => write!(
                f,
                "INSUFFICIENT NUMBER OF GAPS - The supplied text was too short to produce at \
                 least {gap_limit} gaps. Try to add more words."
            ),
        }
    }
}

/// Final counters of a full generation
#[derive(Debug, Clone, Copy)]
pub(crate) struct RunSummary {
    /// Number of annotated sentences
    pub total_sentences: usize,
    /// Sentence limit after the walk; may have been lowered by the gap limit
    pub sentence_limit: isize,
    pub gap_count: usize,
    pub gap_limit: usize,
}

/// Derive the warnings of a full generation, in a fixed order
///
/// The sentence comparison uses the total sentence count against the final
/// limit. Since the limit starts one below the total, a text whose gap limit
/// is never reached still reports [`Warning::TooManySentences`].
pub(crate) fn generate_warnings(summary: &RunSummary) -> Vec<Warning> {
    let mut warnings = Vec::new();
    let sentence_count = summary.total_sentences as isize;

    if sentence_count < summary.sentence_limit || summary.total_sentences < 3 {
        warnings.push(Warning::InsufficientSentences);
    }

    // FIXME: compares the total instead of the last sentence used for gapping
    if sentence_count > summary.sentence_limit {
        warnings.push(Warning::TooManySentences);
    }

    if summary.gap_count < summary.gap_limit {
        warnings.push(Warning::InsufficientGaps {
            gap_limit: summary.gap_limit,
        });
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(total: usize, limit: isize, gaps: usize, gap_limit: usize) -> RunSummary {
        RunSummary {
            total_sentences: total,
            sentence_limit: limit,
            gap_count: gaps,
            gap_limit,
        }
    }

    #[test]
    fn test_limit_reached_in_second_sentence() {
        // five sentences, limit lowered to 2
        let warnings = generate_warnings(&summary(5, 2, 20, 20));
        assert_eq!(warnings, vec![Warning::TooManySentences]);
    }

    #[test]
    fn test_short_text_gets_all_warnings() {
        let warnings = generate_warnings(&summary(2, 1, 3, 20));
        assert_eq!(
            warnings,
            vec![
                Warning::InsufficientSentences,
                Warning::TooManySentences,
                Warning::InsufficientGaps { gap_limit: 20 },
            ]
        );
    }

    #[test]
    fn test_limit_never_lowered_still_reports_too_many_sentences() {
        let warnings = generate_warnings(&summary(4, 3, 20, 20));
        assert_eq!(warnings, vec![Warning::TooManySentences]);
    }

    #[test]
    fn test_two_sentences_are_not_enough() {
        let warnings = generate_warnings(&summary(2, 2, 5, 5));
        assert_eq!(warnings, vec![Warning::InsufficientSentences]);
    }

    #[test]
    fn test_empty_text() {
        let warnings = generate_warnings(&summary(0, -1, 0, 20));
        assert_eq!(
            warnings,
            vec![
                Warning::InsufficientSentences,
                Warning::TooManySentences,
                Warning::InsufficientGaps { gap_limit: 20 },
            ]
        );
    }

    #[test]
    fn test_display_messages() {
        assert!(Warning::InsufficientSentences
            .to_string()
            .starts_with("INSUFFICIENT NUMBER OF SENTENCES"));
        assert!(Warning::TooManySentences
            .to_string()
            .starts_with("TOO MANY SENTENCES"));
        assert_eq!(
            Warning::InsufficientGaps { gap_limit: 20 }.to_string(),
            "INSUFFICIENT NUMBER OF GAPS - The supplied text was too short to produce at \
             least 20 gaps. Try to add more words."
        );
    }
}
