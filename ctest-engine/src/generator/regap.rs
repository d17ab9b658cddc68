//! Regapping of existing token sequences

use ctest_core::CTestToken;

/// Default regap target: about half of the candidates
pub(crate) fn default_target(tokens: &[CTestToken], gap_first: bool) -> i64 {
    let candidates = tokens.iter().filter(|t| t.is_candidate()).count() as i64;
    (candidates - if gap_first { 0 } else { 1 }) / 2
}

/// Recompute the gaps of `tokens` towards `target` gaps.
///
/// Candidates keep their flag and are gapped with the interval rule. When
/// they run out before the target is met, the walk continues right after the
/// last gap and turns every following token into a candidate. Tokens after
/// the final gap are always left ungapped.
///
/// Returns the number of gapped tokens afterwards.
pub(crate) fn update_gaps_to(
    tokens: &mut [CTestToken],
    interval: usize,
    gap_first: bool,
    target: i64,
) -> usize {
    if target <= 0 {
        for token in tokens.iter_mut() {
            token.set_gap(false);
        }
        return 0;
    }

    let target = target as usize;
    let interval = interval.max(1);

    let mut gap_candidates = if gap_first { 0 } else { 1 };
    let mut gap_count = 0;
    let mut last_gap = 0;

    for (index, token) in tokens.iter_mut().enumerate() {
        if !token.is_candidate() {
            continue;
        }

        let is_gap = gap_candidates % interval == 0;
        token.set_gap(is_gap);
        if is_gap {
            gap_count += 1;
            last_gap = index;
        }
        gap_candidates += 1;

        if gap_count == target {
            break;
        }
    }

    if gap_count < target {
        tracing::debug!(
            gap_count,
            target,
            last_gap,
            "not enough candidates, forcing gaps after the last one"
        );

        // with no gap placed beyond the first token the walk restarts at 0
        // and keeps its counter
        let mut start = last_gap;
        if last_gap != 0 {
            start += 1;
            gap_candidates = 1;
        }

        for index in start..tokens.len() {
            let token = &mut tokens[index];
            token.set_candidate(true);

            let is_gap = gap_candidates % interval == 0;
            token.set_gap(is_gap);
            if is_gap {
                gap_count += 1;
                last_gap = index;
            }
            gap_candidates += 1;

            if gap_count == target {
                break;
            }
        }
    }

    for token in tokens.iter_mut().skip(last_gap + 1) {
        token.set_gap(false);
    }

    tokens.iter().filter(|t| t.is_gap()).count()
}
