//! Configuration structures and validation
//!
//! This module defines the TOML schema for language configuration.

use serde::{Deserialize, Serialize};

/// Root language configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageConfig {
    pub metadata: Metadata,
    #[serde(default)]
    pub segmentation: Segmentation,
    #[serde(default)]
    pub exclusion: Exclusion,
    #[serde(default)]
    pub gap_index: GapIndex,
}

/// Language metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// Sentence segmentation data for the built-in annotator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Segmentation {
    #[serde(default = "default_terminators")]
    pub terminators: Vec<char>,
    #[serde(default)]
    pub closers: Vec<char>,
    #[serde(default)]
    pub abbreviations: Vec<String>,
}

impl Default for Segmentation {
    fn default() -> Self {
        Self {
            terminators: default_terminators(),
            closers: Vec::new(),
            abbreviations: Vec::new(),
        }
    }
}

/// Which exclusion rules are active
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exclusion {
    /// Tokens shorter than this (in characters) are never gapped; 0 disables
    #[serde(default = "default_min_length")]
    pub min_length: usize,
    #[serde(default = "default_true")]
    pub non_alphabetic: bool,
    #[serde(default)]
    pub simple_named_entities: bool,
    #[serde(default)]
    pub proper_noun_tags: Vec<String>,
    #[serde(default)]
    pub words: Vec<String>,
}

impl Default for Exclusion {
    fn default() -> Self {
        Self {
            min_length: default_min_length(),
            non_alphabetic: true,
            simple_named_entities: false,
            proper_noun_tags: Vec::new(),
            words: Vec::new(),
        }
    }
}

/// Which gap index finders are active
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GapIndex {
    #[serde(default)]
    pub hyphenated_compounds: bool,
    #[serde(default)]
    pub prefixes: Vec<String>,
}

fn default_terminators() -> Vec<char> {
    vec!['.', '!', '?']
}

fn default_min_length() -> usize {
    2
}

fn default_true() -> bool {
    true
}

impl LanguageConfig {
    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.metadata.code.is_empty() {
            return Err("Language code must not be empty".to_string());
        }

        if self.segmentation.terminators.is_empty() {
            return Err("No terminator characters defined".to_string());
        }

        if self.gap_index.prefixes.iter().any(String::is_empty) {
            return Err("Gap index prefixes must not be empty".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_config_deserialize() {
        let toml_str = r#"
            [metadata]
            code = "en"
            name = "English"

            [segmentation]
            terminators = [".", "!", "?"]
            closers = ['"', ")"]
            abbreviations = ["Mr", "Dr"]

            [exclusion]
            min_length = 2
            simple_named_entities = true
            proper_noun_tags = ["NNP"]

            [gap_index]
            hyphenated_compounds = true
        "#;

        let config: LanguageConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.metadata.code, "en");
        assert_eq!(config.segmentation.terminators.len(), 3);
        assert_eq!(config.segmentation.abbreviations, vec!["Mr", "Dr"]);
        assert!(config.exclusion.simple_named_entities);
        assert!(config.exclusion.non_alphabetic);
        assert!(config.gap_index.hyphenated_compounds);
        assert!(config.gap_index.prefixes.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_optional_tables_default() {
        let config: LanguageConfig = toml::from_str(
            r#"
            [metadata]
            code = "xx"
            name = "Minimal"
            "#,
        )
        .unwrap();

        assert_eq!(config.segmentation.terminators, vec!['.', '!', '?']);
        assert_eq!(config.exclusion.min_length, 2);
        assert!(config.exclusion.non_alphabetic);
        assert!(!config.exclusion.simple_named_entities);
        assert!(!config.gap_index.hyphenated_compounds);
    }

    #[test]
    fn test_validate_rejects_empty_terminators() {
        let mut config: LanguageConfig =
            toml::from_str("[metadata]\ncode = \"xx\"\nname = \"X\"\n").unwrap();
        config.segmentation.terminators.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_prefix() {
        let mut config: LanguageConfig =
            toml::from_str("[metadata]\ncode = \"xx\"\nname = \"X\"\n").unwrap();
        config.gap_index.prefixes.push(String::new());
        assert!(config.validate().is_err());
    }
}
