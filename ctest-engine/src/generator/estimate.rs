//! Gap index estimation

use crate::annotation::TokenContext;
use crate::language::GapIndexFinder;

/// Character offset at which the hidden suffix of a token starts.
///
/// Every finder may propose a lower bound; the largest proposal wins and
/// defaults to 0. The rest of the word after that bound is split in half,
/// rounding towards the visible side, so `"example"` becomes `exa|mple`.
/// The result never exceeds the length of the token.
pub fn estimate_gap_index(context: &TokenContext<'_>, finders: &[Box<dyn GapIndexFinder>]) -> usize {
    let len = context.token.char_len();

    let start = finders
        .iter()
        .filter_map(|finder| finder.propose(context))
        .max()
        .unwrap_or(0)
        .min(len);

    start + (len - start) / 2
}
