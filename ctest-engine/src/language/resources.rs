//! Per-language rule and finder sets

use std::collections::HashSet;
use std::sync::Arc;

use crate::annotation::TokenContext;
use crate::error::{EngineError, Result};
use crate::language::config::LanguageConfig;
use crate::language::finders::{GapIndexFinder, HyphenatedCompound, PrefixFinder};
use crate::language::loader;
use crate::language::rules::{
    ExclusionRule, NonAlphabetic, ProperNounTag, SimpleNamedEntity, TooShort, WordList,
};

/// Everything the generator needs to know about one language
pub struct LanguageResources {
    code: String,
    name: String,
    terminators: Vec<char>,
    closers: Vec<char>,
    /// Lowercased abbreviations, without the trailing dot
    abbreviations: HashSet<String>,
    rules: Vec<Box<dyn ExclusionRule>>,
    finders: Vec<Box<dyn GapIndexFinder>>,
}

impl std::fmt::Debug for LanguageResources {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageResources")
            .field("code", &self.code)
            .field("name", &self.name)
            .field("rules", &self.rule_names())
            .field("finders", &self.finder_names())
            .finish()
    }
}

impl LanguageResources {
    /// Build rules and finders from a parsed configuration
    pub fn from_config(config: &LanguageConfig) -> Result<Self> {
        config.validate().map_err(|e| {
            EngineError::Configuration(format!("language '{}': {e}", config.metadata.code))
        })?;

        let exclusion = &config.exclusion;
        let mut rules: Vec<Box<dyn ExclusionRule>> = Vec::new();

        if exclusion.min_length > 0 {
            rules.push(Box::new(TooShort::new(exclusion.min_length)));
        }
        if exclusion.non_alphabetic {
            rules.push(Box::new(NonAlphabetic));
        }
        if exclusion.simple_named_entities {
            rules.push(Box::new(SimpleNamedEntity::new(
                config.segmentation.terminators.clone(),
            )));
        }
        if !exclusion.proper_noun_tags.is_empty() {
            rules.push(Box::new(ProperNounTag::new(
                exclusion.proper_noun_tags.iter().cloned(),
            )));
        }
        if !exclusion.words.is_empty() {
            rules.push(Box::new(WordList::new(exclusion.words.iter().cloned())));
        }

        let mut finders: Vec<Box<dyn GapIndexFinder>> = Vec::new();

        if config.gap_index.hyphenated_compounds {
            finders.push(Box::new(HyphenatedCompound));
        }
        if !config.gap_index.prefixes.is_empty() {
            finders.push(Box::new(PrefixFinder::new(
                config.gap_index.prefixes.iter().cloned(),
            )));
        }

        Ok(Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            terminators: config.segmentation.terminators.clone(),
            closers: config.segmentation.closers.clone(),
            abbreviations: config
                .segmentation
                .abbreviations
                .iter()
                .map(|a| a.trim_end_matches('.').to_lowercase())
                .collect(),
            rules,
            finders,
        })
    }

    /// Parse and build an external language configuration
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: LanguageConfig = toml::from_str(toml_str).map_err(|e| {
            EngineError::Configuration(format!("failed to parse language config: {e}"))
        })?;
        Self::from_config(&config)
    }

    /// Resources with no rules and no finders: every token is a candidate
    pub fn permissive(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: "Permissive".to_string(),
            terminators: vec!['.', '!', '?'],
            closers: Vec::new(),
            abbreviations: HashSet::new(),
            rules: Vec::new(),
            finders: Vec::new(),
        }
    }

    /// Add an exclusion rule
    pub fn with_rule(mut self, rule: impl ExclusionRule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Add a gap index finder
    pub fn with_finder(mut self, finder: impl GapIndexFinder + 'static) -> Self {
        self.finders.push(Box::new(finder));
        self
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn exclusion_rules(&self) -> &[Box<dyn ExclusionRule>] {
        &self.rules
    }

    pub fn gap_index_finders(&self) -> &[Box<dyn GapIndexFinder>] {
        &self.finders
    }

    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    pub fn finder_names(&self) -> Vec<&str> {
        self.finders.iter().map(|f| f.name()).collect()
    }

    /// `true` if any exclusion rule vetoes the token
    pub fn is_excluded(&self, context: &TokenContext<'_>) -> bool {
        self.rules.iter().any(|rule| rule.excludes(context))
    }

    /// `true` for a non-empty token made only of terminator characters
    pub fn is_terminator_token(&self, text: &str) -> bool {
        !text.is_empty() && text.chars().all(|ch| self.terminators.contains(&ch))
    }

    /// `true` for a non-empty token made only of closing punctuation
    pub fn is_closer_token(&self, text: &str) -> bool {
        !text.is_empty() && text.chars().all(|ch| self.closers.contains(&ch))
    }

    pub fn is_abbreviation(&self, text: &str) -> bool {
        self.abbreviations.contains(&text.to_lowercase())
    }
}

/// Supplies language resources by language code
///
/// Codes are never validated: an unsupported code must resolve to
/// language-independent resources rather than fail.
pub trait ResourceProvider: Send + Sync {
    fn resources(&self, language: &str) -> Result<Arc<LanguageResources>>;
}

/// Provider backed by the configurations embedded in this crate
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedResources;

impl ResourceProvider for EmbeddedResources {
    fn resources(&self, language: &str) -> Result<Arc<LanguageResources>> {
        loader::get_resources(language)
    }
}

/// Provider returning the same resources for every language
#[derive(Debug, Clone)]
pub struct FixedResources(pub Arc<LanguageResources>);

impl FixedResources {
    pub fn new(resources: LanguageResources) -> Self {
        Self(Arc::new(resources))
    }
}

impl ResourceProvider for FixedResources {
    fn resources(&self, _language: &str) -> Result<Arc<LanguageResources>> {
        Ok(Arc::clone(&self.0))
    }
}
