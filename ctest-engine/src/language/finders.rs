//! Gap index finders
//!
//! A finder proposes the earliest character offset at which the hidden
//! suffix of a word may start. The generator takes the largest proposal of
//! all finders and then splits the remainder of the word in half.

use crate::annotation::TokenContext;

/// Suggests a lower bound for the gap boundary of a token
pub trait GapIndexFinder: Send + Sync {
    /// Short identifier used in logs
    fn name(&self) -> &str;

    /// Earliest allowed gap start in characters, or `None` if the finder
    /// has nothing to say about this token
    fn propose(&self, context: &TokenContext<'_>) -> Option<usize>;
}

/// Keeps the gap inside the last component of a hyphenated compound
///
/// `well-known` proposes offset 5, so only `known` can be partially hidden.
#[derive(Debug, Clone, Default)]
pub struct HyphenatedCompound;

impl GapIndexFinder for HyphenatedCompound {
    fn name(&self) -> &str {
        "hyphenated_compound"
    }

    fn propose(&self, context: &TokenContext<'_>) -> Option<usize> {
        let chars: Vec<char> = context.text().chars().collect();
        let last_hyphen = chars.iter().rposition(|&ch| ch == '-')?;

        // leading or trailing hyphens do not split a compound
        if last_hyphen == 0 || last_hyphen + 1 >= chars.len() {
            return None;
        }

        Some(last_hyphen + 1)
    }
}

/// Keeps listed prefixes visible
///
/// Matching is case-insensitive and the longest matching prefix wins. A word
/// that consists of nothing but the prefix gets no proposal.
#[derive(Debug, Clone)]
pub struct PrefixFinder {
    /// Lowercased prefixes, longest first
    prefixes: Vec<String>,
}

impl PrefixFinder {
    pub fn new(prefixes: impl IntoIterator<Item = String>) -> Self {
        let mut prefixes: Vec<String> = prefixes.into_iter().map(|p| p.to_lowercase()).collect();
        prefixes.sort_by_key(|p| std::cmp::Reverse(p.chars().count()));
        Self { prefixes }
    }
}

impl GapIndexFinder for PrefixFinder {
    fn name(&self) -> &str {
        "prefix"
    }

    fn propose(&self, context: &TokenContext<'_>) -> Option<usize> {
        let word = context.text().to_lowercase();
        let word_len = word.chars().count();

        self.prefixes
            .iter()
            .find(|prefix| word.starts_with(prefix.as_str()))
            .map(|prefix| prefix.chars().count())
            .filter(|&len| len < word_len)
    }
}
