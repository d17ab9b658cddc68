//! C-Test generation
//!
//! [`CTestGenerator`] turns raw text into a [`CTestObject`] in two modes:
//!
//! - **Full generation** respects the gap limit and keeps the first and last
//!   sentence free of gaps, reporting [`Warning`]s when the text does not fit.
//! - **Partial generation** gaps every sentence with the interval rule only.
//!
//! Existing token sequences can be regapped towards a new gap count with
//! [`CTestGenerator::update_gaps`] and [`CTestGenerator::update_gaps_to`].
//!
//! A generator holds configuration and collaborators only. All counters of a
//! run live in a per-call context, so one generator can serve concurrent
//! generations.

mod estimate;
mod regap;
mod warnings;

pub use estimate::estimate_gap_index;
pub use warnings::Warning;

use std::sync::Arc;

use ctest_core::{CTestObject, CTestToken};
use serde::Serialize;

use crate::annotation::{AnnotatedText, Annotator, SimpleAnnotator, TokenContext};
use crate::config::GeneratorConfig;
use crate::error::{EngineError, Result};
use crate::language::{EmbeddedResources, LanguageResources, ResourceProvider};
use warnings::{generate_warnings, RunSummary};

/// Result of one generation
#[derive(Debug, Clone, Serialize)]
pub struct Generation {
    ctest: CTestObject,
    warnings: Vec<Warning>,
    text: String,
}

impl Generation {
    /// The generated document
    pub fn ctest(&self) -> &CTestObject {
        &self.ctest
    }

    pub fn ctest_mut(&mut self) -> &mut CTestObject {
        &mut self.ctest
    }

    pub fn into_ctest(self) -> CTestObject {
        self.ctest
    }

    /// Quality warnings, in a fixed order. Always empty for partial generations.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn gap_count(&self) -> usize {
        self.ctest.gap_count()
    }

    /// The source text
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn language(&self) -> &str {
        self.ctest.language()
    }
}

/// Counters of a single generation run
#[derive(Debug)]
struct GapContext {
    /// Sentences at or after this index are not gapped
    sentence_limit: isize,
    gap_candidates: usize,
    gap_count: usize,
}

impl GapContext {
    fn new(sentence_limit: isize) -> Self {
        Self {
            sentence_limit,
            gap_candidates: 0,
            gap_count: 0,
        }
    }
}

/// Selects gaps in annotated text
#[derive(Clone)]
pub struct CTestGenerator {
    config: GeneratorConfig,
    annotator: Arc<dyn Annotator>,
    resources: Arc<dyn ResourceProvider>,
}

impl std::fmt::Debug for CTestGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CTestGenerator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for CTestGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl CTestGenerator {
    /// Generator with the default configuration, the built-in annotator and
    /// the embedded language resources
    pub fn new() -> Self {
        Self {
            config: GeneratorConfig::default(),
            annotator: Arc::new(SimpleAnnotator::new()),
            resources: Arc::new(EmbeddedResources),
        }
    }

    /// Generator with a custom configuration
    pub fn with_config(config: GeneratorConfig) -> Result<Self> {
        Self::with_components(
            config,
            Arc::new(SimpleAnnotator::new()),
            Arc::new(EmbeddedResources),
        )
    }

    /// Generator with custom annotation and language resources
    pub fn with_components(
        config: GeneratorConfig,
        annotator: Arc<dyn Annotator>,
        resources: Arc<dyn ResourceProvider>,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            annotator,
            resources,
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn gap_interval(&self) -> usize {
        self.config.gap_interval
    }

    pub fn gap_limit(&self) -> usize {
        self.config.gap_limit
    }

    pub fn enforces_leading_sentence(&self) -> bool {
        self.config.enforce_leading_sentence
    }

    pub fn enforces_trailing_sentence(&self) -> bool {
        self.config.enforce_trailing_sentence
    }

    /// Keep the first sentence free of gaps in later full generations
    pub fn set_enforce_leading_sentence(&mut self, enforce: bool) {
        self.config.enforce_leading_sentence = enforce;
    }

    /// Keep the last sentence free of gaps in later full generations
    pub fn set_enforce_trailing_sentence(&mut self, enforce: bool) {
        self.config.enforce_trailing_sentence = enforce;
    }

    /// Generate a C-Test under the full set of constraints.
    ///
    /// Every token is emitted. A candidate is gapped when it lies strictly
    /// between the first sentence and the sentence limit, is not a multiple
    /// of the gap interval among the candidates seen so far, and the gap
    /// limit has not been reached. Once the limit is reached, gapping stops
    /// after the current sentence.
    ///
    /// Fails only when the annotation or language resources cannot be
    /// prepared.
    pub fn generate_ctest(&self, text: &str, language: &str) -> Result<Generation> {
        let (annotated, resources) = self.prepare(text, language)?;

        let total_sentences = annotated.sentences().len();
        let interval = self.config.gap_interval;
        let gap_limit = self.config.gap_limit;
        let mut ctx = GapContext::new(total_sentences as isize - 1);
        let mut ctest = CTestObject::new(language);

        for context in annotated.contexts() {
            let mut token = self.prepare_token(&annotated, &context, &resources);
            let sentence = context.sentence_index as isize;

            let outside_gap_range = (self.config.enforce_leading_sentence && sentence == 0)
                || (self.config.enforce_trailing_sentence && sentence >= ctx.sentence_limit);
            let is_candidate = !outside_gap_range && !resources.is_excluded(&context);
            token.set_candidate(is_candidate);

            if is_candidate {
                let is_gap = sentence != 0
                    && sentence < ctx.sentence_limit
                    && ctx.gap_candidates % interval != 0
                    && ctx.gap_count < gap_limit;

                if is_gap {
                    token.set_gap(true);
                    ctx.gap_count += 1;
                    if ctx.gap_count == gap_limit {
                        ctx.sentence_limit = sentence + 1;
                        tracing::debug!(
                            sentence = context.sentence_index,
                            "gap limit reached, gapping stops after the next sentence boundary"
                        );
                    }
                }
                ctx.gap_candidates += 1;
            }

            tracing::trace!(
                token = token.text(),
                candidate = token.is_candidate(),
                gap = token.is_gap(),
                gap_index = token.gap_index(),
                "token processed"
            );

            ctest.add_token(token);
        }

        let warnings = generate_warnings(&RunSummary {
            total_sentences,
            sentence_limit: ctx.sentence_limit,
            gap_count: ctx.gap_count,
            gap_limit,
        });

        tracing::debug!(
            language = language,
            sentences = total_sentences,
            tokens = annotated.token_count(),
            candidates = ctx.gap_candidates,
            gaps = ctx.gap_count,
            "generated c-test"
        );

        let generation = Generation {
            ctest,
            warnings,
            text: text.to_string(),
        };
        if generation.has_warnings() {
            tracing::warn!(warnings = ?generation.warnings(), "c-test generated with warnings");
        }

        Ok(generation)
    }

    /// Generate a C-Test without sentence or limit constraints.
    ///
    /// Every token that passes the exclusion rules is a candidate, and a
    /// candidate is gapped when its position among the candidates modulo the
    /// gap interval is 0 (`gap_first`) or 1 (otherwise). No warnings are
    /// produced.
    pub fn generate_partial_ctest(
        &self,
        text: &str,
        language: &str,
        gap_first: bool,
    ) -> Result<Generation> {
        let (annotated, resources) = self.prepare(text, language)?;

        let interval = self.config.gap_interval;
        let gap_offset = if gap_first { 0 } else { 1 };
        let mut ctx = GapContext::new(annotated.sentences().len() as isize);
        let mut ctest = CTestObject::new(language);

        for context in annotated.contexts() {
            let mut token = self.prepare_token(&annotated, &context, &resources);

            if !resources.is_excluded(&context) {
                token.set_candidate(true);
                if ctx.gap_candidates % interval == gap_offset {
                    token.set_gap(true);
                    ctx.gap_count += 1;
                }
                ctx.gap_candidates += 1;
            }

            ctest.add_token(token);
        }

        tracing::debug!(
            language = language,
            gap_first,
            tokens = annotated.token_count(),
            candidates = ctx.gap_candidates,
            gaps = ctx.gap_count,
            "generated partial c-test"
        );

        Ok(Generation {
            ctest,
            warnings: Vec::new(),
            text: text.to_string(),
        })
    }

    /// Regap `tokens` towards about half of their candidates.
    ///
    /// The target is `(candidates - 1) / 2` when `gap_first` is false and
    /// `candidates / 2` otherwise. Returns the resulting number of gaps.
    pub fn update_gaps(&self, tokens: &mut [CTestToken], gap_first: bool) -> usize {
        let target = regap::default_target(tokens, gap_first);
        self.update_gaps_to(tokens, gap_first, target)
    }

    /// Regap `tokens` towards `target_gap_count` gaps.
    ///
    /// A target of zero or less clears all gaps. Existing candidates are
    /// gapped with the interval rule first; if they run out, tokens after the
    /// last gap are forced to become candidates. Returns the resulting number
    /// of gaps.
    pub fn update_gaps_to(
        &self,
        tokens: &mut [CTestToken],
        gap_first: bool,
        target_gap_count: i64,
    ) -> usize {
        regap::update_gaps_to(tokens, self.config.gap_interval, gap_first, target_gap_count)
    }

    /// Regap a whole document, with the default target when `target_gap_count`
    /// is `None`
    pub fn regap(
        &self,
        ctest: &mut CTestObject,
        gap_first: bool,
        target_gap_count: Option<i64>,
    ) -> usize {
        match target_gap_count {
            Some(target) => self.update_gaps_to(ctest.tokens_mut(), gap_first, target),
            None => self.update_gaps(ctest.tokens_mut(), gap_first),
        }
    }

    fn prepare(
        &self,
        text: &str,
        language: &str,
    ) -> Result<(AnnotatedText, Arc<LanguageResources>)> {
        let annotated = self.annotator.annotate(text, language)?;
        let resources = self.resources.resources(language).map_err(|e| {
            EngineError::Initialization(format!(
                "no language resources for '{language}': {e}"
            ))
        })?;
        Ok((annotated, resources))
    }

    /// Token with its gap index and sentence boundary flag, not yet a candidate
    fn prepare_token(
        &self,
        annotated: &AnnotatedText,
        context: &TokenContext<'_>,
        resources: &LanguageResources,
    ) -> CTestToken {
        let mut token = CTestToken::new(context.text());
        token.set_gap_index(estimate_gap_index(context, resources.gap_index_finders()));

        let sentence_len = annotated
            .sentences()
            .get(context.sentence_index)
            .map_or(0, |s| s.len());
        token.set_last_token_in_sentence(context.index_in_sentence + 1 == sentence_len);

        token
    }
}
