//! Property-based tests for the gapping laws

use std::sync::Arc;

use ctest_engine::language::FixedResources;
use ctest_engine::{
    AnnotatedSentence, AnnotatedText, AnnotatedToken, Annotator, CTestGenerator, CTestToken,
    GeneratorConfig, Generation, LanguageResources, Warning,
};
use proptest::prelude::*;

/// One sentence per line, words separated by spaces
struct LineAnnotator;

impl Annotator for LineAnnotator {
    fn annotate(&self, text: &str, language: &str) -> ctest_engine::Result<AnnotatedText> {
        let sentences = text
            .lines()
            .map(|line| {
                AnnotatedSentence::new(
                    line.split(' ')
                        .map(|w| AnnotatedToken::new(w, 0, w.len()))
                        .collect(),
                )
            })
            .collect();
        Ok(AnnotatedText::new(language, sentences))
    }
}

fn line_generator(config: GeneratorConfig) -> CTestGenerator {
    CTestGenerator::with_components(
        config,
        Arc::new(LineAnnotator),
        Arc::new(FixedResources::new(LanguageResources::permissive("xx"))),
    )
    .unwrap()
}

fn sentences_strategy() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(prop::collection::vec("[a-z]{2,8}", 1..6), 1..8)
}

fn render(sentences: &[Vec<String>]) -> String {
    sentences
        .iter()
        .map(|s| s.join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Sentence index of every token of a generation
fn sentence_indices(generation: &Generation) -> Vec<usize> {
    generation
        .ctest()
        .sentences()
        .iter()
        .enumerate()
        .flat_map(|(i, s)| std::iter::repeat(i).take(s.len()))
        .collect()
}

fn token_sequence(flags: &[bool]) -> Vec<CTestToken> {
    flags
        .iter()
        .enumerate()
        .map(|(i, &candidate)| {
            let mut token = CTestToken::new(format!("t{i}"));
            token.set_candidate(candidate);
            token
        })
        .collect()
}

fn gap_positions(tokens: &[CTestToken]) -> Vec<usize> {
    tokens
        .iter()
        .enumerate()
        .filter_map(|(i, t)| t.is_gap().then_some(i))
        .collect()
}

fn regap_generator(interval: usize) -> CTestGenerator {
    let config = GeneratorConfig::builder()
        .gap_interval(interval)
        .build()
        .unwrap();
    CTestGenerator::with_config(config).unwrap()
}

proptest! {
    /// Without reaching the limit, every n-th candidate stays open.
    #[test]
    fn interval_law(sentences in sentences_strategy(), interval in 1usize..5) {
        let config = GeneratorConfig::builder()
            .gap_limit(10_000)
            .gap_interval(interval)
            .build()
            .unwrap();
        let generation = line_generator(config)
            .generate_ctest(&render(&sentences), "xx")
            .unwrap();

        let candidates: Vec<&CTestToken> = generation
            .ctest()
            .tokens()
            .iter()
            .filter(|t| t.is_candidate())
            .collect();
        for (k, token) in candidates.iter().enumerate() {
            prop_assert_eq!(token.is_gap(), k % interval != 0);
        }
    }

    /// The gap limit is never exceeded and a shortfall is always reported.
    #[test]
    fn limit_law(
        sentences in sentences_strategy(),
        gap_limit in 0usize..12,
        interval in 1usize..4,
    ) {
        let config = GeneratorConfig::builder()
            .gap_limit(gap_limit)
            .gap_interval(interval)
            .build()
            .unwrap();
        let generation = line_generator(config)
            .generate_ctest(&render(&sentences), "xx")
            .unwrap();

        prop_assert!(generation.gap_count() <= gap_limit);
        let reported = generation
            .warnings()
            .contains(&Warning::InsufficientGaps { gap_limit });
        prop_assert_eq!(reported, generation.gap_count() < gap_limit);
    }

    /// Enforced first and last sentences never contain gaps.
    #[test]
    fn boundary_enforcement(
        sentences in sentences_strategy(),
        leading in any::<bool>(),
        trailing in any::<bool>(),
        gap_limit in 0usize..30,
    ) {
        let config = GeneratorConfig::builder()
            .gap_limit(gap_limit)
            .enforce_leading_sentence(leading)
            .enforce_trailing_sentence(trailing)
            .build()
            .unwrap();
        let generation = line_generator(config)
            .generate_ctest(&render(&sentences), "xx")
            .unwrap();

        let last_sentence = sentences.len() - 1;
        let tokens = generation.ctest().tokens();
        for (token, sentence) in tokens.iter().zip(sentence_indices(&generation)) {
            // the first sentence is never gapped in full mode
            if sentence == 0 {
                prop_assert!(!token.is_gap());
            }
            if leading && sentence == 0 {
                prop_assert!(!token.is_candidate());
            }
            if trailing && sentence == last_sentence {
                prop_assert!(!token.is_gap());
            }
        }
    }

    /// Partial generation gaps candidates by position modulo the interval.
    #[test]
    fn partial_offset_law(
        sentences in sentences_strategy(),
        interval in 1usize..5,
        gap_first in any::<bool>(),
    ) {
        let config = GeneratorConfig::builder().gap_interval(interval).build().unwrap();
        let generation = line_generator(config)
            .generate_partial_ctest(&render(&sentences), "xx", gap_first)
            .unwrap();

        let offset = if gap_first { 0 } else { 1 };
        for (k, token) in generation.ctest().tokens().iter().enumerate() {
            prop_assert!(token.is_candidate());
            prop_assert_eq!(token.is_gap(), k % interval == offset);
        }
        prop_assert!(generation.warnings().is_empty());
    }

    /// Gap indices stay within the word for any input text.
    #[test]
    fn gap_index_bound(text in "\\PC{0,120}", language in "(en|de|fr|xx|)") {
        let generator = CTestGenerator::new();
        let generation = generator.generate_partial_ctest(&text, &language, true).unwrap();

        for token in generation.ctest().tokens() {
            prop_assert!(token.gap_index() <= token.char_len());
        }
    }

    /// Regapping never places more gaps than requested.
    #[test]
    fn regap_upper_bound(
        flags in prop::collection::vec(any::<bool>(), 0..40),
        target in -5i64..30,
        interval in 1usize..5,
        gap_first in any::<bool>(),
    ) {
        let mut tokens = token_sequence(&flags);
        let count = regap_generator(interval).update_gaps_to(&mut tokens, gap_first, target);

        prop_assert!(count as i64 <= target.max(0));
        prop_assert_eq!(count, gap_positions(&tokens).len());
    }

    /// Regapping its own output with the same target changes nothing, as
    /// long as the candidates produce a gap beyond the first token.
    #[test]
    fn regap_idempotence(
        flags in prop::collection::vec(any::<bool>(), 1..40),
        target in 1i64..20,
        interval in 1usize..5,
        gap_first in any::<bool>(),
    ) {
        let pool = flags.iter().skip(1).filter(|&&f| f).count();
        let needed = if gap_first { 1 } else { interval };
        prop_assume!(pool >= needed);

        let mut flags = flags;
        flags[0] = false;

        let generator = regap_generator(interval);
        let mut tokens = token_sequence(&flags);

        generator.update_gaps_to(&mut tokens, gap_first, target);
        let once = gap_positions(&tokens);
        generator.update_gaps_to(&mut tokens, gap_first, target);

        prop_assert_eq!(gap_positions(&tokens), once);
    }

    /// Forced gapping reaches the target when there are enough tokens.
    #[test]
    fn regap_exact_without_candidates(
        target in 1i64..10,
        interval in 1usize..5,
        extra in 0usize..10,
        gap_first in any::<bool>(),
    ) {
        let len = target as usize * interval + extra;
        let mut tokens = token_sequence(&vec![false; len]);
        let count = regap_generator(interval).update_gaps_to(&mut tokens, gap_first, target);

        prop_assert_eq!(count as i64, target);
    }
}
