//! Generator configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Default configuration constants
pub mod defaults {
    /// Maximum number of gaps in a full generation
    pub const GAP_LIMIT: usize = 20;

    /// Every `GAP_INTERVAL`-th candidate stays ungapped
    pub const GAP_INTERVAL: usize = 2;

    /// Keep the first sentence free of gaps
    pub const ENFORCE_LEADING_SENTENCE: bool = true;

    /// Keep the last sentence free of gaps
    pub const ENFORCE_TRAILING_SENTENCE: bool = true;
}

/// Gapping configuration for a [`CTestGenerator`](crate::CTestGenerator)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub(crate) gap_limit: usize,
    pub(crate) gap_interval: usize,
    pub(crate) enforce_leading_sentence: bool,
    pub(crate) enforce_trailing_sentence: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            gap_limit: defaults::GAP_LIMIT,
            gap_interval: defaults::GAP_INTERVAL,
            enforce_leading_sentence: defaults::ENFORCE_LEADING_SENTENCE,
            enforce_trailing_sentence: defaults::ENFORCE_TRAILING_SENTENCE,
        }
    }
}

/// Layout of a generator configuration file
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    gapscheme: GeneratorConfig,
}

impl GeneratorConfig {
    /// Create a configuration builder
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::default()
    }

    /// Parse the `[gapscheme]` table of a TOML document.
    ///
    /// Missing keys (or a missing table) fall back to the defaults.
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(toml_str)
            .map_err(|e| EngineError::Configuration(format!("failed to parse config: {e}")))?;
        file.gapscheme.validate()?;
        Ok(file.gapscheme)
    }

    /// Read and parse a TOML configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| EngineError::Io(format!("failed to read {}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    pub fn gap_limit(&self) -> usize {
        self.gap_limit
    }

    pub fn gap_interval(&self) -> usize {
        self.gap_interval
    }

    pub fn enforce_leading_sentence(&self) -> bool {
        self.enforce_leading_sentence
    }

    pub fn enforce_trailing_sentence(&self) -> bool {
        self.enforce_trailing_sentence
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<()> {
        if self.gap_interval == 0 {
            return Err(EngineError::Configuration(
                "gap_interval must be at least 1".into(),
            ));
        }

        Ok(())
    }
}

/// Fluent builder for [`GeneratorConfig`]
#[derive(Debug, Default)]
pub struct GeneratorConfigBuilder {
    gap_limit: Option<usize>,
    gap_interval: Option<usize>,
    enforce_leading_sentence: Option<bool>,
    enforce_trailing_sentence: Option<bool>,
}

impl GeneratorConfigBuilder {
    /// Maximum number of gaps in a full generation
    pub fn gap_limit(mut self, limit: usize) -> Self {
        self.gap_limit = Some(limit);
        self
    }

    /// Interval between ungapped candidates
    pub fn gap_interval(mut self, interval: usize) -> Self {
        self.gap_interval = Some(interval);
        self
    }

    pub fn enforce_leading_sentence(mut self, enforce: bool) -> Self {
        self.enforce_leading_sentence = Some(enforce);
        self
    }

    pub fn enforce_trailing_sentence(mut self, enforce: bool) -> Self {
        self.enforce_trailing_sentence = Some(enforce);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<GeneratorConfig> {
        let mut config = GeneratorConfig::default();

        if let Some(limit) = self.gap_limit {
            config.gap_limit = limit;
        }

        if let Some(interval) = self.gap_interval {
            config.gap_interval = interval;
        }

        if let Some(enforce) = self.enforce_leading_sentence {
            config.enforce_leading_sentence = enforce;
        }

        if let Some(enforce) = self.enforce_trailing_sentence {
            config.enforce_trailing_sentence = enforce;
        }

        config.validate()?;
        Ok(config)
    }
}
